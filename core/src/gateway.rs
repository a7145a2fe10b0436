//! The translation and transport boundary to the remote item service.
//!
//! `ItemGateway` is the seam the store is generic over. `HttpGateway` is the
//! real implementation: build with `ItemClient`, execute with a `Transport`,
//! parse with `ItemClient`. No retries, no caching.

use std::future::Future;

use tracing::{debug, instrument};

use crate::client::ItemClient;
use crate::error::GatewayError;
use crate::http::{ReqwestTransport, Transport};
use crate::types::{Item, ItemId};

/// The four operations the store needs from the remote service.
pub trait ItemGateway {
    fn list(&self) -> impl Future<Output = Result<Vec<Item>, GatewayError>> + Send;

    /// The returned item's id comes from the service; title and description
    /// are the ones passed in.
    fn create(
        &self,
        title: &str,
        description: &str,
    ) -> impl Future<Output = Result<Item, GatewayError>> + Send;

    /// Returns `item` unchanged on success.
    fn update(&self, item: Item) -> impl Future<Output = Result<Item, GatewayError>> + Send;

    fn remove(&self, id: ItemId) -> impl Future<Output = Result<(), GatewayError>> + Send;
}

/// `ItemGateway` over HTTP.
#[derive(Debug, Clone)]
pub struct HttpGateway<T = ReqwestTransport> {
    client: ItemClient,
    transport: T,
}

impl HttpGateway<ReqwestTransport> {
    pub fn new(base_url: &str) -> Self {
        Self::with_transport(base_url, ReqwestTransport::new())
    }
}

impl<T: Transport> HttpGateway<T> {
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        Self {
            client: ItemClient::new(base_url),
            transport,
        }
    }
}

impl<T: Transport + Sync> ItemGateway for HttpGateway<T> {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Item>, GatewayError> {
        let request = self.client.build_list();
        debug!(path = %request.path, "listing items");
        let response = self.transport.execute(request).await?;
        self.client.parse_list(response)
    }

    #[instrument(skip(self, description))]
    async fn create(&self, title: &str, description: &str) -> Result<Item, GatewayError> {
        let request = self.client.build_create(title, description)?;
        let response = self.transport.execute(request).await?;
        let item = self.client.parse_create(response, title, description)?;
        debug!(id = item.id, "item created");
        Ok(item)
    }

    #[instrument(skip(self, item), fields(id = item.id))]
    async fn update(&self, item: Item) -> Result<Item, GatewayError> {
        let request = self.client.build_update(&item)?;
        let response = self.transport.execute(request).await?;
        self.client.parse_update(response, item)
    }

    #[instrument(skip(self))]
    async fn remove(&self, id: ItemId) -> Result<(), GatewayError> {
        let request = self.client.build_delete(id);
        let response = self.transport.execute(request).await?;
        self.client.parse_delete(response)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::http::{HttpMethod, HttpRequest, HttpResponse};

    /// Answers every request with a fixed response and records what it saw.
    struct CannedTransport {
        status: u16,
        body: String,
        seen: Mutex<Vec<HttpRequest>>,
    }

    impl CannedTransport {
        fn new(status: u16, body: &str) -> Self {
            Self {
                status,
                body: body.to_string(),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn last(&self) -> HttpRequest {
            self.seen.lock().unwrap().last().cloned().unwrap()
        }
    }

    impl Transport for CannedTransport {
        async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, GatewayError> {
            self.seen.lock().unwrap().push(request);
            Ok(HttpResponse {
                status: self.status,
                headers: Vec::new(),
                body: self.body.clone(),
            })
        }
    }

    #[tokio::test]
    async fn list_maps_posts() {
        let gateway = HttpGateway::with_transport(
            "http://svc",
            CannedTransport::new(200, r#"[{"id":1,"title":"A","body":"x"}]"#),
        );
        let items = gateway.list().await.unwrap();
        assert_eq!(items, vec![Item::new(1, "A", "x")]);
        assert_eq!(gateway.transport.last().path, "http://svc/posts");
    }

    #[tokio::test]
    async fn create_uses_server_id() {
        let gateway = HttpGateway::with_transport("http://svc", CannedTransport::new(201, r#"{"id":42}"#));
        let item = gateway.create("T", "D").await.unwrap();
        assert_eq!(item, Item::new(42, "T", "D"));
        assert_eq!(gateway.transport.last().method, HttpMethod::Post);
    }

    #[tokio::test]
    async fn update_failure_is_transport_error() {
        let gateway = HttpGateway::with_transport("http://svc", CannedTransport::new(500, "boom"));
        let err = gateway.update(Item::new(1, "B", "y")).await.unwrap_err();
        assert!(matches!(err, GatewayError::Transport { status: 500, .. }));
        assert_eq!(gateway.transport.last().path, "http://svc/posts/1");
    }

    #[tokio::test]
    async fn remove_issues_delete() {
        let gateway = HttpGateway::with_transport("http://svc", CannedTransport::new(200, "{}"));
        gateway.remove(5).await.unwrap();
        let req = gateway.transport.last();
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://svc/posts/5");
    }
}
