//! `items` -- interactive item manager over a posts service.
//!
//! See [`items_cli::config`] for environment variables.

use std::io::Write;

use clap::Parser;
use items_cli::command;
use items_cli::{App, Config, Flow};
use items_core::{HttpGateway, SortOrder};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "items")]
#[command(about = "List, add, edit and delete items on a posts service", long_about = None)]
struct Cli {
    /// Base URL of the service (overrides ITEMS_API_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Initial sort order: none, asc or desc (overrides ITEMS_SORT)
    #[arg(long)]
    sort: Option<SortOrder>,

    /// Print the list once after loading and exit
    #[arg(long)]
    once: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "items_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?.with_overrides(cli.base_url, cli.sort);
    tracing::info!(base_url = %config.base_url, sort = %config.sort, "starting");

    let mut app = App::new(HttpGateway::new(&config.base_url), config.sort);

    let mut busy = app.subscribe_busy();
    tokio::spawn(async move {
        while busy.changed().await.is_ok() {
            if *busy.borrow_and_update() {
                eprintln!("Loading...");
            }
        }
    });

    app.start().await;
    println!("{}", app.render());
    if cli.once {
        return Ok(());
    }

    println!("Type `help` for commands.");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match command::parse(&line) {
            Ok(None) => {}
            Ok(Some(cmd)) => match app.handle(cmd).await {
                Flow::Render => println!("{}", app.render()),
                Flow::Notice(message) => println!("{message}"),
                Flow::Warn(message) => {
                    println!("{message}");
                    println!("{}", app.render());
                }
                Flow::Quit => break,
            },
            Err(err) => println!("{err}"),
        }
    }

    tracing::info!("bye");
    Ok(())
}
