//! NutriView API client implementation

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as HttpClient, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::api::{AuthApi, ListApi, SearchApi};
use super::models::{
    AuthResponse, Credentials, ExternalProduct, GroceryItem, NewGroceryItem, QuantityUpdate,
    SearchResponse,
};
use crate::error::{ApiError, Result};
use crate::session::Session;

/// NutriView API client
pub struct NutriViewClient {
    http: HttpClient,
    base_url: String,
}

impl NutriViewClient {
    /// Create a client for the API rooted at `base_url`
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Build a request carrying the session's bearer token
    fn authed(&self, method: Method, path: &str, session: &Session) -> RequestBuilder {
        debug!("{} {}", method, path);
        self.http
            .request(method, self.url(path))
            .header("Authorization", session.bearer())
    }

    /// Send a request and decode a JSON body from a success response
    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = self.send(request).await?;
        let data = response.json::<T>().await.map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
        })?;
        Ok(data)
    }

    /// Send a request, mapping non-success statuses into errors
    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await.map_err(ApiError::from)?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        // Error bodies are `{"msg": ...}`, or `{"message": ...}` for 422
        let body = response.text().await.unwrap_or_default();
        let message = server_message(&body);
        debug!("Request failed with {}: {:?}", status, message);

        Err(ApiError::Rejected {
            status: status.as_u16(),
            message,
        }
        .into())
    }
}

/// Extract the human-readable message from an error body
fn server_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["msg", "message"].iter().find_map(|key| {
        value
            .get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    })
}

#[async_trait]
impl AuthApi for NutriViewClient {
    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse> {
        debug!("POST /api/auth/login");
        let request = self
            .http
            .post(self.url("/api/auth/login"))
            .json(credentials);
        self.send_json(request).await
    }

    async fn signup(&self, credentials: &Credentials) -> Result<AuthResponse> {
        debug!("POST /api/auth/signup");
        let request = self
            .http
            .post(self.url("/api/auth/signup"))
            .json(credentials);
        self.send_json(request).await
    }
}

#[async_trait]
impl ListApi for NutriViewClient {
    async fn list_items(&self, session: &Session) -> Result<Vec<GroceryItem>> {
        let request = self.authed(Method::GET, "/api/list/items", session);
        self.send_json(request).await
    }

    async fn add_item(&self, session: &Session, item: &NewGroceryItem) -> Result<GroceryItem> {
        let request = self
            .authed(Method::POST, "/api/list/items", session)
            .json(item);
        self.send_json(request).await
    }

    async fn update_quantity(
        &self,
        session: &Session,
        item_id: i64,
        quantity: i64,
    ) -> Result<()> {
        let path = format!("/api/list/{}", item_id);
        let request = self
            .authed(Method::PUT, &path, session)
            .json(&QuantityUpdate { quantity });
        self.send(request).await?;
        Ok(())
    }

    async fn delete_item(&self, session: &Session, item_id: i64) -> Result<()> {
        let path = format!("/api/list/{}", item_id);
        let request = self.authed(Method::DELETE, &path, session);
        self.send(request).await?;
        Ok(())
    }
}

#[async_trait]
impl SearchApi for NutriViewClient {
    async fn search_products(
        &self,
        session: &Session,
        query: &str,
    ) -> Result<Vec<ExternalProduct>> {
        let request = self
            .authed(Method::GET, "/api/list/search", session)
            .query(&[("q", query)]);
        let response: SearchResponse = self.send_json(request).await?;
        Ok(response.products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use mockito::Matcher;

    fn session() -> Session {
        Session::new("tok-1", 1)
    }

    #[test]
    fn test_client_creation_trims_base_url() {
        let client = NutriViewClient::new("http://localhost:5000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000");
    }

    #[test]
    fn test_server_message_extraction() {
        assert_eq!(
            server_message(r#"{"msg": "Invalid credentials"}"#).as_deref(),
            Some("Invalid credentials")
        );
        assert_eq!(
            server_message(r#"{"message": "Unprocessable Entity"}"#).as_deref(),
            Some("Unprocessable Entity")
        );
        assert!(server_message(r#"{"message": ["bad", "field"]}"#).is_none());
        assert!(server_message("<html>oops</html>").is_none());
        assert!(server_message(r#"{"msg": ""}"#).is_none());
    }

    #[tokio::test]
    async fn test_login_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/auth/login")
            .match_body(Matcher::Json(serde_json::json!({
                "email": "a@b.com",
                "password": "pw"
            })))
            .with_status(200)
            .with_body(r#"{"msg": "Login successful", "user_id": 5, "access_token": "tok"}"#)
            .create_async()
            .await;

        let client = NutriViewClient::new(server.url()).unwrap();
        let auth = client
            .login(&Credentials::new("a@b.com", "pw"))
            .await
            .unwrap();

        assert_eq!(auth.access_token, "tok");
        assert_eq!(auth.user_id, 5);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_login_rejected_carries_server_message() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/auth/login")
            .with_status(401)
            .with_body(r#"{"msg": "Invalid credentials"}"#)
            .create_async()
            .await;

        let client = NutriViewClient::new(server.url()).unwrap();
        let err = client
            .login(&Credentials::new("a@b.com", "wrong"))
            .await
            .unwrap_err();

        match err {
            Error::Api(ApiError::Rejected { status, message }) => {
                assert_eq!(status, 401);
                assert_eq!(message.as_deref(), Some("Invalid credentials"));
            }
            other => panic!("Expected Rejected, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_list_items_sends_bearer() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/list/items")
            .match_header("authorization", "Bearer tok-1")
            .with_status(200)
            .with_body(
                r#"[{"id": 1, "product_name": "Oats", "quantity": 2, "brands": null,
                     "calories": "150.0 kcal"}]"#,
            )
            .create_async()
            .await;

        let client = NutriViewClient::new(server.url()).unwrap();
        let items = client.list_items(&session()).await.unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].product_name, "Oats");
        assert_eq!(items[0].calories.as_deref(), Some("150.0 kcal"));
        assert!(items[0].brands.is_none());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_update_quantity_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/api/list/9")
            .match_body(Matcher::Json(serde_json::json!({"quantity": 3})))
            .with_status(200)
            .with_body(r#"{"msg": "Item updated successfully"}"#)
            .create_async()
            .await;

        let client = NutriViewClient::new(server.url()).unwrap();
        client.update_quantity(&session(), 9, 3).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_delete_not_found() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("DELETE", "/api/list/4")
            .with_status(404)
            .with_body(r#"{"msg": "Item not found or access denied"}"#)
            .create_async()
            .await;

        let client = NutriViewClient::new(server.url()).unwrap();
        let err = client.delete_item(&session(), 4).await.unwrap_err();
        assert_eq!(
            err.user_message("Failed to delete item."),
            "Item not found or access denied"
        );
    }

    #[tokio::test]
    async fn test_search_encodes_query() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/list/search")
            .match_query(Matcher::UrlEncoded("q".into(), "peanut butter".into()))
            .with_status(200)
            .with_body(r#"{"products": [{"code": "123", "product_name": "PB"}]}"#)
            .create_async()
            .await;

        let client = NutriViewClient::new(server.url()).unwrap();
        let products = client
            .search_products(&session(), "peanut butter")
            .await
            .unwrap();

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].code.as_deref(), Some("123"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_invalid_json_response() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/list/items")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let client = NutriViewClient::new(server.url()).unwrap();
        let err = client.list_items(&session()).await.unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::InvalidResponse(_))));
    }
}
