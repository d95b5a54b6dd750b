// Rust guideline compliant 2026-10-18

//! Blocking HTTP client for a remote dispatch server.

use dispatch_app::{
    normalize_filters, normalize_order_filters, parse_courier_id, parse_order_id,
    validate_create_input, CouriersApi, ErrorEnvelope, OrdersApi,
};
use dispatch_core::{
    Courier, CouriersListFilters, CreateCourierInput, Error, ErrorCode, Order, OrdersListFilters,
    Paginated, Result,
};
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::time::Duration;

/// Request timeout applied to every call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// [`CouriersApi`] and [`OrdersApi`] backed by the `/api` HTTP routes.
///
/// Inputs are validated locally before any request is sent, so malformed ids
/// and filters fail with the same codes the server would report.
#[derive(Debug, Clone)]
pub struct HttpApi {
    base_url: String,
    client: Client,
}

impl HttpApi {
    /// Creates a client for the server at `base_url` (for example `http://127.0.0.1:3001`).
    ///
    /// # Errors
    ///
    /// Returns `Error::Internal` if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::Internal(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Returns the base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request
            .send()
            .map_err(|e| Error::Internal(format!("Request to {} failed: {}", self.base_url, e)))?;
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status().as_u16();
        let body = response.text().unwrap_or_default();
        Err(remote_error(status, &body))
    }

    fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        self.send(request)?
            .json()
            .map_err(|e| Error::Internal(format!("Invalid response body: {}", e)))
    }
}

/// Builds the error for a non-success response.
///
/// Bodies that are not an error envelope fall back to `API Error: <status>`.
fn remote_error(status: u16, body: &str) -> Error {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => envelope.into_error(status),
        Err(_) => Error::Remote {
            code: ErrorCode::InternalError,
            status,
            message: format!("API Error: {}", status),
        },
    }
}

impl CouriersApi for HttpApi {
    fn list(&mut self, filters: &CouriersListFilters) -> Result<Paginated<Courier>> {
        let filters = normalize_filters(filters)?;
        let request = self
            .client
            .get(self.url("/couriers"))
            .query(&filters.to_query_pairs());
        self.send_json(request)
    }

    fn detail(&mut self, id: &str) -> Result<Courier> {
        let id = parse_courier_id(id)?;
        self.send_json(self.client.get(self.url(&format!("/couriers/{}", id))))
    }

    fn create(&mut self, input: &CreateCourierInput) -> Result<Courier> {
        let input = validate_create_input(input)?;
        self.send_json(self.client.post(self.url("/couriers")).json(&input))
    }

    fn remove(&mut self, id: &str) -> Result<()> {
        let id = parse_courier_id(id)?;
        self.send(self.client.delete(self.url(&format!("/couriers/{}", id))))?;
        Ok(())
    }

    fn assign_order(&mut self, id: &str, order_id: &str) -> Result<Courier> {
        let id = parse_courier_id(id)?;
        let order_id = parse_order_id(order_id)?;
        let request = self
            .client
            .post(self.url(&format!("/couriers/{}/orders", id)))
            .json(&json!({ "orderId": order_id }));
        self.send_json(request)
    }

    fn unassign_order(&mut self, id: &str, order_id: &str) -> Result<Courier> {
        let id = parse_courier_id(id)?;
        let order_id = parse_order_id(order_id)?;
        let url = self.url(&format!("/couriers/{}/orders/{}", id, order_id));
        self.send_json(self.client.delete(url))
    }
}

impl OrdersApi for HttpApi {
    fn list_orders(&mut self, filters: &OrdersListFilters) -> Result<Paginated<Order>> {
        let filters = normalize_order_filters(filters)?;
        let request = self
            .client
            .get(self.url("/orders"))
            .query(&filters.to_query_pairs());
        self.send_json(request)
    }

    fn order_detail(&mut self, id: &str) -> Result<Order> {
        let id = parse_order_id(id)?;
        self.send_json(self.client.get(self.url(&format!("/orders/{}", id))))
    }

    fn assign_courier(&mut self, order_id: &str, courier_id: &str) -> Result<Order> {
        let order_id = parse_order_id(order_id)?;
        let courier_id = parse_courier_id(courier_id)?;
        let request = self
            .client
            .post(self.url(&format!("/orders/{}/assign", order_id)))
            .json(&json!({ "courierId": courier_id }));
        self.send_json(request)
    }
}
