//! # API Client
//!
//! Thin JSON-over-HTTP client for the backend contract.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Request Lifecycle                                │
//! │                                                                         │
//! │  caller ──► endpoint method (login, get_debts, ...)                     │
//! │                │                                                        │
//! │                ▼                                                        │
//! │  attach Authorization: Bearer <token> when a session is held            │
//! │                │                                                        │
//! │                ▼                                                        │
//! │  send ──► 2xx ──► deserialize typed response                            │
//! │            │                                                            │
//! │            ├──► 401 ──► clear session ──► ClientError::Auth             │
//! │            │                                                            │
//! │            └──► other ──► ClientError::Api with the server message      │
//! │                           (or a generic fallback)                       │
//! │                                                                         │
//! │  Fire-and-forget semantics: no retry, no backoff, no conflict           │
//! │  resolution. A failed call leaves caller state unchanged.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult, GENERIC_ERROR_MESSAGE};
use crate::session::Session;
use crate::types::{
    AuthResponse, DebtPayload, DebtRecord, ErrorBody, InventoryPayload, InventoryRecord,
    InventorySearch, NewSale, ReportRequest, SaleRecord, SignupCredentials, SupplierPayload,
    SupplierRecord, UserCredentials,
};

/// Maps a failed response status to the client error taxonomy.
///
/// A 401 tears down the held session before reporting, so the caller's
/// next render finds an unauthenticated client and returns to login.
fn classify_failure(status: StatusCode, message: Option<String>, session: &Session) -> ClientError {
    if status == StatusCode::UNAUTHORIZED {
        warn!("session rejected by backend, clearing token");
        session.clear();
        return ClientError::Auth;
    }

    ClientError::Api {
        status: status.as_u16(),
        message: message.unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string()),
    }
}

/// Client for the backend REST surface.
///
/// ## Usage
/// ```rust,no_run
/// # async fn run() -> Result<(), bodega_client::ClientError> {
/// use bodega_client::{ApiClient, ClientConfig};
/// use bodega_client::types::UserCredentials;
///
/// let client = ApiClient::new(ClientConfig::default())?;
/// client
///     .login(&UserCredentials {
///         email: "owner@bodega.example".into(),
///         password: "secret".into(),
///     })
///     .await?;
///
/// let debts = client.get_debts().await?;
/// # drop(debts);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    /// Creates a client from a validated configuration.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ClientError::Config(format!("failed to create HTTP client: {}", e)))?;

        Ok(ApiClient {
            http,
            base_url: config.base_url,
            session: Session::new(),
        })
    }

    /// The held session (token + account).
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Drops the held session without calling the backend.
    pub fn logout(&self) {
        self.session.clear();
    }

    /// Joins an endpoint path onto the base URL.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Attaches the bearer token (when held) and executes the request.
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> ClientResult<T> {
        let request = match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await?;
        self.parse(response).await
    }

    /// Deserializes a success body or classifies the failure.
    async fn parse<T: DeserializeOwned>(&self, response: Response) -> ClientResult<T> {
        let status = response.status();

        if status.is_success() {
            return Ok(response.json().await?);
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message);

        Err(classify_failure(status, message, &self.session))
    }

    // =========================================================================
    // Auth
    // =========================================================================

    /// `POST /login`. Stores the returned token and account on success.
    pub async fn login(&self, credentials: &UserCredentials) -> ClientResult<AuthResponse> {
        debug!(email = %credentials.email, "login");

        let response: AuthResponse = self
            .send(self.http.post(self.url("/login")).json(credentials))
            .await?;

        self.session
            .store(response.token.clone(), response.user.clone());
        Ok(response)
    }

    /// `POST /signup`. Stores the returned token and account on success.
    pub async fn signup(&self, data: &SignupCredentials) -> ClientResult<AuthResponse> {
        debug!(email = %data.email, "signup");

        let response: AuthResponse = self
            .send(self.http.post(self.url("/signup")).json(data))
            .await?;

        self.session
            .store(response.token.clone(), response.user.clone());
        Ok(response)
    }

    // =========================================================================
    // Sales
    // =========================================================================

    /// `GET /sales`.
    pub async fn get_sales(&self) -> ClientResult<Vec<SaleRecord>> {
        self.send(self.http.get(self.url("/sales"))).await
    }

    /// `POST /sales`.
    pub async fn add_sale(&self, sale: &NewSale) -> ClientResult<serde_json::Value> {
        self.send(self.http.post(self.url("/sales")).json(sale)).await
    }

    /// `DELETE /sales/:id`.
    pub async fn delete_sale(&self, id: i64) -> ClientResult<serde_json::Value> {
        self.send(self.http.delete(self.url(&format!("/sales/{}", id))))
            .await
    }

    // =========================================================================
    // Suppliers
    // =========================================================================

    /// `POST /suppliers/add`.
    pub async fn add_supplier(&self, supplier: &SupplierPayload) -> ClientResult<serde_json::Value> {
        self.send(self.http.post(self.url("/suppliers/add")).json(supplier))
            .await
    }

    /// `PUT /suppliers/:id`.
    pub async fn update_supplier(
        &self,
        id: i64,
        supplier: &SupplierPayload,
    ) -> ClientResult<serde_json::Value> {
        self.send(
            self.http
                .put(self.url(&format!("/suppliers/{}", id)))
                .json(supplier),
        )
        .await
    }

    /// `GET /suppliers/:id`.
    pub async fn get_supplier(&self, id: i64) -> ClientResult<SupplierRecord> {
        self.send(self.http.get(self.url(&format!("/suppliers/{}", id))))
            .await
    }

    /// `GET /suppliers/all`.
    pub async fn get_all_suppliers(&self) -> ClientResult<Vec<SupplierRecord>> {
        self.send(self.http.get(self.url("/suppliers/all"))).await
    }

    // =========================================================================
    // Debts
    // =========================================================================

    /// `GET /debts`.
    pub async fn get_debts(&self) -> ClientResult<Vec<DebtRecord>> {
        self.send(self.http.get(self.url("/debts"))).await
    }

    /// `GET /debts/:id`.
    pub async fn get_debt(&self, id: i64) -> ClientResult<DebtRecord> {
        self.send(self.http.get(self.url(&format!("/debts/{}", id))))
            .await
    }

    /// `POST /debts/add`.
    pub async fn add_debt(&self, debt: &DebtPayload) -> ClientResult<serde_json::Value> {
        self.send(self.http.post(self.url("/debts/add")).json(debt))
            .await
    }

    /// `PUT /debts/:id`.
    pub async fn update_debt(&self, id: i64, debt: &DebtPayload) -> ClientResult<serde_json::Value> {
        self.send(
            self.http
                .put(self.url(&format!("/debts/{}", id)))
                .json(debt),
        )
        .await
    }

    // =========================================================================
    // Inventory
    // =========================================================================

    /// `POST /inventory/add`.
    pub async fn add_inventory_item(
        &self,
        item: &InventoryPayload,
    ) -> ClientResult<serde_json::Value> {
        self.send(self.http.post(self.url("/inventory/add")).json(item))
            .await
    }

    /// `PUT /inventory/:id`.
    pub async fn update_inventory_item(
        &self,
        id: i64,
        item: &InventoryPayload,
    ) -> ClientResult<serde_json::Value> {
        self.send(
            self.http
                .put(self.url(&format!("/inventory/{}", id)))
                .json(item),
        )
        .await
    }

    /// `GET /inventory/category/:category`.
    pub async fn get_inventory_by_category(
        &self,
        category: &str,
    ) -> ClientResult<Vec<InventoryRecord>> {
        self.send(
            self.http
                .get(self.url(&format!("/inventory/category/{}", category))),
        )
        .await
    }

    /// `GET /inventory/supplier/:supplier`.
    pub async fn get_inventory_by_supplier(
        &self,
        supplier: &str,
    ) -> ClientResult<Vec<InventoryRecord>> {
        self.send(
            self.http
                .get(self.url(&format!("/inventory/supplier/{}", supplier))),
        )
        .await
    }

    /// `GET /inventory/search?category=&supplier=`.
    pub async fn search_inventory(
        &self,
        query: &InventorySearch,
    ) -> ClientResult<Vec<InventoryRecord>> {
        self.send(self.http.get(self.url("/inventory/search")).query(query))
            .await
    }

    // =========================================================================
    // Reports
    // =========================================================================

    /// `GET /reports/generate?period=&startDate=&endDate=`.
    pub async fn generate_report(&self, request: &ReportRequest) -> ClientResult<serde_json::Value> {
        self.send(self.http.get(self.url("/reports/generate")).query(request))
            .await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
