//! HTTP client for the ledger REST API

use crate::{ClientConfig, ClientError, ClientResult};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::error::{AppError, ErrorCode};
use shared::models::{
    AuthResponse, LoginRequest, Order, OrderCreate, OrderUpdate, Party, PartyPayload, PartyType,
    Quality, QualityPayload, ReportFilters, ReportKind,
};
use shared::response::{ListQuery, Page};
use std::time::Duration;

/// Ledger backend operations
#[async_trait]
pub trait LedgerApi: Send + Sync {
    /// Sign in and keep the returned token for later calls
    async fn login(&mut self, email: &str, password: &str) -> ClientResult<AuthResponse>;

    fn token(&self) -> Option<&str>;

    // ========== Parties ==========

    async fn list_parties(
        &self,
        party_type: PartyType,
        query: &ListQuery,
    ) -> ClientResult<Page<Party>>;

    async fn list_customers(&self, query: &ListQuery) -> ClientResult<Page<Party>> {
        self.list_parties(PartyType::Customer, query).await
    }

    async fn list_manufacturers(&self, query: &ListQuery) -> ClientResult<Page<Party>> {
        self.list_parties(PartyType::Manufacturer, query).await
    }

    /// Create a party under the collection of `payload.user_type`
    async fn create_party(&self, payload: &PartyPayload) -> ClientResult<Party>;

    async fn update_party(
        &self,
        party_type: PartyType,
        id: &str,
        payload: &PartyPayload,
    ) -> ClientResult<Party>;

    async fn delete_party(&self, party_type: PartyType, id: &str) -> ClientResult<()>;

    // ========== Qualities ==========

    async fn list_qualities(&self, query: &ListQuery) -> ClientResult<Page<Quality>>;

    async fn create_quality(&self, payload: &QualityPayload) -> ClientResult<Quality>;

    async fn update_quality(&self, id: &str, payload: &QualityPayload) -> ClientResult<Quality>;

    async fn delete_quality(&self, id: &str) -> ClientResult<()>;

    // ========== Orders ==========

    async fn list_orders(&self, query: &ListQuery) -> ClientResult<Page<Order>>;

    /// Submit raw order inputs; the response carries the backend-derived
    /// commission, order number and WhatsApp share links
    async fn create_order(&self, payload: &OrderCreate) -> ClientResult<Order>;

    async fn update_order(&self, id: &str, update: &OrderUpdate) -> ClientResult<Order>;

    // ========== Reports ==========

    /// Download an Excel report
    async fn download_report(
        &self,
        kind: ReportKind,
        filters: &ReportFilters,
    ) -> ClientResult<Vec<u8>>;
}

/// Network API client
#[derive(Debug, Clone)]
pub struct NetworkApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl NetworkApiClient {
    pub fn new(base_url: &str) -> ClientResult<Self> {
        Self::from_config(&ClientConfig::new(base_url))
    }

    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        tracing::debug!(%method, %url, "API request");
        let mut req = self.client.request(method, url);
        if let Some(auth) = self.auth_header() {
            req = req.header(reqwest::header::AUTHORIZATION, auth);
        }
        req
    }

    async fn send(&self, req: RequestBuilder) -> ClientResult<reqwest::Response> {
        let response = req.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let url = response.url().to_string();
        let text = response.text().await?;
        let err = ClientError::from_status(status, &text);
        tracing::warn!(%status, %url, error = %err, "API request failed");
        Err(err)
    }

    async fn handle_json<T: DeserializeOwned>(&self, req: RequestBuilder) -> ClientResult<T> {
        let response = self.send(req).await?;
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> ClientResult<T> {
        self.handle_json(self.request(Method::GET, path).query(query)).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.handle_json(self.request(Method::POST, path).json(body)).await
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.handle_json(self.request(Method::PUT, path).json(body)).await
    }

    /// DELETE, ignoring any response body
    async fn delete(&self, path: &str) -> ClientResult<()> {
        self.send(self.request(Method::DELETE, path)).await?;
        Ok(())
    }
}

#[async_trait]
impl LedgerApi for NetworkApiClient {
    async fn login(&mut self, email: &str, password: &str) -> ClientResult<AuthResponse> {
        let request = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        let auth: AuthResponse = self.post("auth/login", &request).await?;
        if auth.token.is_empty() {
            return Err(ClientError::InvalidResponse("Missing login token".to_string()));
        }
        tracing::info!(user_id = %auth.user.id, "Logged in");
        self.token = Some(auth.token.clone());
        Ok(auth)
    }

    fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    async fn list_parties(
        &self,
        party_type: PartyType,
        query: &ListQuery,
    ) -> ClientResult<Page<Party>> {
        self.get(party_type.collection(), &query.query_pairs()).await
    }

    async fn create_party(&self, payload: &PartyPayload) -> ClientResult<Party> {
        let party_type = payload
            .user_type
            .ok_or_else(|| {
                ClientError::Validation(AppError::with_message(
                    ErrorCode::RequiredField,
                    "User type is required",
                ))
            })?;
        let party: Party = self.post(party_type.collection(), payload).await?;
        tracing::info!(party_id = %party.id, kind = party_type.label(), "Party created");
        Ok(party)
    }

    async fn update_party(
        &self,
        party_type: PartyType,
        id: &str,
        payload: &PartyPayload,
    ) -> ClientResult<Party> {
        self.put(&format!("{}/{}", party_type.collection(), id), payload).await
    }

    async fn delete_party(&self, party_type: PartyType, id: &str) -> ClientResult<()> {
        self.delete(&format!("{}/{}", party_type.collection(), id)).await?;
        tracing::info!(party_id = %id, kind = party_type.label(), "Party deleted");
        Ok(())
    }

    async fn list_qualities(&self, query: &ListQuery) -> ClientResult<Page<Quality>> {
        self.get("qualities", &query.query_pairs()).await
    }

    async fn create_quality(&self, payload: &QualityPayload) -> ClientResult<Quality> {
        self.post("qualities", payload).await
    }

    async fn update_quality(&self, id: &str, payload: &QualityPayload) -> ClientResult<Quality> {
        self.put(&format!("qualities/{}", id), payload).await
    }

    async fn delete_quality(&self, id: &str) -> ClientResult<()> {
        self.delete(&format!("qualities/{}", id)).await
    }

    async fn list_orders(&self, query: &ListQuery) -> ClientResult<Page<Order>> {
        self.get("orders", &query.query_pairs()).await
    }

    async fn create_order(&self, payload: &OrderCreate) -> ClientResult<Order> {
        let order: Order = self.post("orders", payload).await?;
        tracing::info!(
            order_id = %order.id,
            order_no = order.order_no.as_deref().unwrap_or("-"),
            "Order created"
        );
        Ok(order)
    }

    async fn update_order(&self, id: &str, update: &OrderUpdate) -> ClientResult<Order> {
        self.put(&format!("orders/{}", id), update).await
    }

    async fn download_report(
        &self,
        kind: ReportKind,
        filters: &ReportFilters,
    ) -> ClientResult<Vec<u8>> {
        let path = format!("reports/{}", kind.endpoint());
        let req = self
            .request(Method::GET, &path)
            .query(&filters.query_pairs(kind));
        let bytes = self.send(req).await?.bytes().await?;
        tracing::info!(report = kind.key(), size = bytes.len(), "Report downloaded");
        Ok(bytes.to_vec())
    }
}
