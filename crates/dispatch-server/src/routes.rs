// Rust guideline compliant 2026-10-18

//! HTTP route handlers for the courier and order API.

use crate::error::ApiError;
use crate::state::AppState;
use axum::body::Bytes;
use axum::extract::path::ErrorKind;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, RawQuery, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{delete, get, post};
use axum::Router;
use dispatch_app::{
    parse_assign_courier_input, parse_assign_order_input, parse_courier_id,
    parse_couriers_list_filters, parse_create_courier_input, parse_order_id,
    parse_orders_list_filters, CouriersApi, OrdersApi,
};
use dispatch_core::{Courier, Error, Order, Paginated};
use serde_json::Value;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

type ApiResult<T> = Result<T, ApiError>;

/// Path extraction that reports failures through the error envelope.
type PathParams<T> = Result<Path<T>, PathRejection>;

/// Builds the full application with CORS and request tracing.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api", api_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Builds the API router.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/couriers", get(list_couriers).post(create_courier))
        .route("/couriers/{id}", get(get_courier).delete(delete_courier))
        .route("/couriers/{id}/orders", post(assign_order))
        .route("/couriers/{id}/orders/{order_id}", delete(unassign_order))
        .route("/orders", get(list_orders))
        .route("/orders/{id}", get(get_order))
        .route("/orders/{id}/assign", post(assign_courier))
}

async fn health() -> &'static str {
    "ok"
}

/// GET /api/couriers - paginated, filtered, sorted listing.
async fn list_couriers(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> ApiResult<Json<Paginated<Courier>>> {
    state.delay().await;

    let filters = parse_couriers_list_filters(&query_pairs(query))?;

    let page = state.with_api(|api| api.list(&filters))?;
    Ok(Json(page))
}

/// GET /api/couriers/{id}
async fn get_courier(
    State(state): State<AppState>,
    path: PathParams<String>,
) -> ApiResult<Json<Courier>> {
    state.delay().await;

    let id = parse_courier_id(&courier_path(path)?)?;
    let courier = state.with_api(|api| api.detail(id.as_str()))?;
    Ok(Json(courier))
}

/// POST /api/couriers
async fn create_courier(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<Courier>)> {
    state.delay().await;

    let input = parse_create_courier_input(&json_body(&body)?)?;
    let courier = state.with_api(|api| api.create(&input))?;
    Ok((StatusCode::CREATED, Json(courier)))
}

/// DELETE /api/couriers/{id}
async fn delete_courier(
    State(state): State<AppState>,
    path: PathParams<String>,
) -> ApiResult<StatusCode> {
    state.delay().await;

    let id = parse_courier_id(&courier_path(path)?)?;
    state.with_api(|api| api.remove(id.as_str()))?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/couriers/{id}/orders
async fn assign_order(
    State(state): State<AppState>,
    path: PathParams<String>,
    body: Bytes,
) -> ApiResult<Json<Courier>> {
    state.delay().await;

    let id = parse_courier_id(&courier_path(path)?)?;
    let order_id = parse_assign_order_input(&json_body(&body)?)?;
    let courier = state.with_api(|api| api.assign_order(id.as_str(), order_id.as_str()))?;
    Ok(Json(courier))
}

/// DELETE /api/couriers/{id}/orders/{order_id}
async fn unassign_order(
    State(state): State<AppState>,
    path: PathParams<(String, String)>,
) -> ApiResult<Json<Courier>> {
    state.delay().await;

    let (id, order_id) = path.map(|Path(ids)| ids).map_err(|rejection| {
        match rejected_key(&rejection) {
            Some("order_id") => Error::InvalidOrderId(rejection.body_text()),
            _ => Error::InvalidCourierId(rejection.body_text()),
        }
    })?;
    let courier = state.with_api(|api| api.unassign_order(&id, &order_id))?;
    Ok(Json(courier))
}

/// GET /api/orders - paginated, filtered, sorted listing.
async fn list_orders(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> ApiResult<Json<Paginated<Order>>> {
    state.delay().await;

    let filters = parse_orders_list_filters(&query_pairs(query))?;
    let page = state.with_api(|api| api.list_orders(&filters))?;
    Ok(Json(page))
}

/// GET /api/orders/{id}
async fn get_order(
    State(state): State<AppState>,
    path: PathParams<String>,
) -> ApiResult<Json<Order>> {
    state.delay().await;

    let id = parse_order_id(&order_path(path)?)?;
    let order = state.with_api(|api| api.order_detail(id.as_str()))?;
    Ok(Json(order))
}

/// POST /api/orders/{id}/assign
async fn assign_courier(
    State(state): State<AppState>,
    path: PathParams<String>,
    body: Bytes,
) -> ApiResult<Json<Order>> {
    state.delay().await;

    let id = parse_order_id(&order_path(path)?)?;
    let courier_id = parse_assign_courier_input(&json_body(&body)?)?;
    let order = state.with_api(|api| api.assign_courier(id.as_str(), courier_id.as_str()))?;
    Ok(Json(order))
}

/// Decodes a raw query string, keeping repeated keys.
fn query_pairs(query: Option<String>) -> Vec<(String, String)> {
    let query = query.unwrap_or_default();
    url::form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect()
}

fn courier_path(path: PathParams<String>) -> Result<String, Error> {
    path.map(|Path(id)| id)
        .map_err(|rejection| Error::InvalidCourierId(rejection.body_text()))
}

fn order_path(path: PathParams<String>) -> Result<String, Error> {
    path.map(|Path(id)| id)
        .map_err(|rejection| Error::InvalidOrderId(rejection.body_text()))
}

/// Returns the name of the path parameter that failed to decode, if known.
fn rejected_key(rejection: &PathRejection) -> Option<&str> {
    match rejection {
        PathRejection::FailedToDeserializePathParams(inner) => match inner.kind() {
            ErrorKind::InvalidUtf8InPathParam { key }
            | ErrorKind::ParseErrorAtKey { key, .. } => Some(key.as_str()),
            _ => None,
        },
        _ => None,
    }
}

/// Decodes a request body; an empty body is treated as `null`.
fn json_body(body: &[u8]) -> Result<Value, Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body).map_err(|_| Error::InvalidPayloadField("body".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_body_empty_is_null() {
        assert_eq!(json_body(b"").unwrap(), Value::Null);
        assert_eq!(json_body(b"  \n").unwrap(), Value::Null);
    }

    #[test]
    fn test_json_body_malformed_is_invalid_field() {
        let err = json_body(b"{\"name\":").unwrap_err();
        assert!(matches!(err, Error::InvalidPayloadField(field) if field == "body"));
    }
}
