//! Drive the command layer against the mock server over real HTTP.

use items_cli::command::{parse, Command};
use std::sync::atomic::{AtomicBool, Ordering};

use items_cli::{App, Flow};
use items_core::{GatewayError, HttpGateway, Item, ItemGateway, ItemId, SortOrder};
use tokio::net::TcpListener;

async fn started_app(seed: Vec<mock_server::Post>) -> App<HttpGateway> {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(mock_server::run_with(listener, seed));

    let mut app = App::new(HttpGateway::new(&format!("http://{addr}")), SortOrder::None);
    app.start().await;
    app
}

async fn run<G: ItemGateway>(app: &mut App<G>, line: &str) -> Flow {
    let command = parse(line).unwrap().unwrap();
    app.handle(command).await
}

fn titles<G: ItemGateway>(app: &App<G>) -> Vec<String> {
    app.render()
        .lines()
        .filter(|line| line.starts_with('['))
        .map(|line| line.split_once("] ").unwrap().1.to_string())
        .collect()
}

#[tokio::test(flavor = "multi_thread")]
async fn initial_render_lists_seed() {
    let app = started_app(mock_server::sample_posts()).await;
    assert_eq!(titles(&app), vec!["Groceries", "Book club", "bike repair"]);
    assert!(app.render().starts_with("Items (3, sort: none)"));
}

#[tokio::test(flavor = "multi_thread")]
async fn empty_service_renders_placeholder() {
    let app = started_app(Vec::new()).await;
    assert!(app.render().contains("No items available."));
}

#[tokio::test(flavor = "multi_thread")]
async fn sort_changes_only_the_view() {
    let mut app = started_app(mock_server::sample_posts()).await;

    assert_eq!(run(&mut app, "sort asc").await, Flow::Render);
    assert_eq!(titles(&app), vec!["bike repair", "Book club", "Groceries"]);

    assert_eq!(run(&mut app, "sort desc").await, Flow::Render);
    assert_eq!(titles(&app), vec!["Groceries", "Book club", "bike repair"]);

    let ids: Vec<i64> = app.store().items().iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test(flavor = "multi_thread")]
async fn add_prepends_and_blank_add_is_refused() {
    let mut app = started_app(mock_server::sample_posts()).await;

    assert_eq!(run(&mut app, "add Dentist | Tuesday 9am").await, Flow::Render);
    assert_eq!(titles(&app)[0], "Dentist");
    assert_eq!(app.store().items()[0].id, 4);

    let flow = run(&mut app, "add   | no title").await;
    assert!(matches!(flow, Flow::Notice(_)));
    assert_eq!(app.store().items().len(), 4);
}

#[tokio::test(flavor = "multi_thread")]
async fn edit_and_delete() {
    let mut app = started_app(mock_server::sample_posts()).await;

    assert_eq!(run(&mut app, "edit 2 Reading group | Chapter five").await, Flow::Render);
    let edited = app.store().get(2).unwrap();
    assert_eq!(edited.title, "Reading group");
    assert_eq!(edited.description, "Chapter five");

    assert_eq!(run(&mut app, "delete 1").await, Flow::Render);
    assert!(app.store().get(1).is_none());
    assert_eq!(app.store().last_error(), None);
}

#[tokio::test(flavor = "multi_thread")]
async fn unknown_ids_are_reported_without_calling_the_service() {
    let mut app = started_app(mock_server::sample_posts()).await;

    assert_eq!(
        run(&mut app, "delete 99").await,
        Flow::Notice("No item with id 99.".to_string())
    );
    assert_eq!(
        run(&mut app, "edit 99 a | b").await,
        Flow::Notice("No item with id 99.".to_string())
    );
    assert_eq!(app.store().last_error(), None);
}

#[tokio::test(flavor = "multi_thread")]
async fn help_and_quit() {
    let mut app = started_app(Vec::new()).await;
    assert!(matches!(run(&mut app, "help").await, Flow::Notice(text) if text.contains("delete <id>")));
    assert_eq!(app.handle(Command::Quit).await, Flow::Quit);
}

#[tokio::test(flavor = "multi_thread")]
async fn reload_refetches_from_the_service() {
    let mut app = started_app(mock_server::sample_posts()).await;

    assert_eq!(run(&mut app, "add Dentist | Tuesday 9am").await, Flow::Render);
    assert_eq!(titles(&app)[0], "Dentist");

    // The service lists by id, so the new post moves to the end after a reload.
    assert_eq!(run(&mut app, "reload").await, Flow::Render);
    let ids: Vec<i64> = app.store().items().iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
    assert_eq!(app.store().last_error(), None);
}

/// Serves a fixed list, hands out one id for every create, and fails on demand.
struct FixedIdService {
    items: Vec<Item>,
    id: ItemId,
    down: AtomicBool,
}

impl FixedIdService {
    fn check(&self) -> Result<(), GatewayError> {
        if self.down.load(Ordering::SeqCst) {
            return Err(GatewayError::Transport {
                status: 503,
                body: "unavailable".to_string(),
            });
        }
        Ok(())
    }
}

impl ItemGateway for FixedIdService {
    async fn list(&self) -> Result<Vec<Item>, GatewayError> {
        self.check()?;
        Ok(self.items.clone())
    }

    async fn create(&self, title: &str, description: &str) -> Result<Item, GatewayError> {
        self.check()?;
        Ok(Item::new(self.id, title, description))
    }

    async fn update(&self, item: Item) -> Result<Item, GatewayError> {
        self.check()?;
        Ok(item)
    }

    async fn remove(&self, _id: ItemId) -> Result<(), GatewayError> {
        self.check()
    }
}

async fn fixed_id_app() -> App<FixedIdService> {
    let service = FixedIdService {
        items: vec![Item::new(1, "Groceries", "milk"), Item::new(2, "Book club", "ch. 4")],
        id: 101,
        down: AtomicBool::new(false),
    };
    let mut app = App::new(service, SortOrder::None);
    app.start().await;
    app
}

#[tokio::test]
async fn failed_reload_keeps_the_list_and_shows_the_error() {
    let mut app = fixed_id_app().await;
    assert_eq!(titles(&app), vec!["Groceries", "Book club"]);

    app.store().gateway().down.store(true, Ordering::SeqCst);
    assert_eq!(run(&mut app, "reload").await, Flow::Render);
    assert_eq!(titles(&app), vec!["Groceries", "Book club"]);
    assert_eq!(app.store().last_error(), Some("Failed to load items"));
    assert!(app.render().contains("Failed to load items"));

    app.store().gateway().down.store(false, Ordering::SeqCst);
    assert_eq!(run(&mut app, "reload").await, Flow::Render);
    assert_eq!(app.store().last_error(), None);
}

#[tokio::test]
async fn reused_id_on_add_is_reported() {
    let mut app = fixed_id_app().await;

    assert_eq!(run(&mut app, "add First | one").await, Flow::Render);
    let flow = run(&mut app, "add Second | two").await;
    assert!(matches!(flow, Flow::Warn(text) if text.contains("101")));
    assert_eq!(titles(&app), vec!["Second", "Groceries", "Book club"]);
}
