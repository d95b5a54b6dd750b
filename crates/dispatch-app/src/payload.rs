// Rust guideline compliant 2026-10-18

//! Payload and path-parameter validation.

use dispatch_core::{CourierId, CreateCourierInput, Error, OrderId, Result};
use serde_json::{Map, Value};

/// Create-payload fields with their maximum lengths, in validation order.
const CREATE_FIELDS: [(&str, usize); 4] =
    [("name", 128), ("phone", 32), ("vehicle", 64), ("region", 64)];

/// Validates a courier id path parameter.
///
/// # Errors
///
/// Returns `Error::InvalidCourierId` unless the trimmed value is 1-64 characters of
/// `[A-Za-z0-9_-]`.
pub fn parse_courier_id(value: &str) -> Result<CourierId> {
    CourierId::parse(value)
}

/// Validates an order id.
///
/// # Errors
///
/// Returns `Error::InvalidOrderId` under the same rules as courier ids.
pub fn parse_order_id(value: &str) -> Result<OrderId> {
    OrderId::parse(value)
}

/// Validates a create-courier JSON payload.
///
/// Known fields are checked in the order name, phone, vehicle, region; unknown
/// keys are reported only once every known field is valid.
///
/// # Errors
///
/// - `Error::MissingPayloadField` for a null body or a missing/null field
/// - `Error::InvalidPayloadField` for a non-object body, a non-string field, or a
///   trimmed value outside its length bounds
/// - `Error::UnknownPayloadField` for keys outside the schema
pub fn parse_create_courier_input(payload: &Value) -> Result<CreateCourierInput> {
    let object = match payload {
        Value::Object(object) => object,
        Value::Null => return Err(Error::MissingPayloadField("body".to_string())),
        _ => return Err(Error::InvalidPayloadField("body".to_string())),
    };

    let [name, phone, vehicle, region] =
        CREATE_FIELDS.map(|(field, max_len)| required_string(object, field, max_len));
    let (name, phone, vehicle, region) = (name?, phone?, vehicle?, region?);

    let unknown: Vec<String> = object
        .keys()
        .filter(|key| !CREATE_FIELDS.iter().any(|(field, _)| *field == key.as_str()))
        .cloned()
        .collect();
    if !unknown.is_empty() {
        return Err(Error::UnknownPayloadField(unknown));
    }

    Ok(CreateCourierInput {
        name,
        phone,
        vehicle,
        region,
    })
}

/// Re-validates a typed create input, returning the trimmed copy.
///
/// # Errors
///
/// Returns `Error::InvalidPayloadField` for any empty or over-long field.
pub fn validate_create_input(input: &CreateCourierInput) -> Result<CreateCourierInput> {
    let payload = serde_json::to_value(input)?;
    parse_create_courier_input(&payload)
}

/// Validates an order-assignment payload of the form `{"orderId": "..."}`.
///
/// # Errors
///
/// - `Error::MissingPayloadField` if the body or `orderId` is missing/null
/// - `Error::InvalidPayloadField` if the body is not an object or `orderId` is not a string
/// - `Error::UnknownPayloadField` for any other key
/// - `Error::InvalidOrderId` if the id fails token validation
pub fn parse_assign_order_input(payload: &Value) -> Result<OrderId> {
    parse_order_id(single_string_field(payload, "orderId")?)
}

/// Validates a courier-assignment payload of the form `{"courierId": "..."}`.
///
/// # Errors
///
/// Same as [`parse_assign_order_input`], with `Error::InvalidCourierId` for a
/// malformed id.
pub fn parse_assign_courier_input(payload: &Value) -> Result<CourierId> {
    parse_courier_id(single_string_field(payload, "courierId")?)
}

/// Extracts the only allowed key of a one-field object body.
fn single_string_field<'a>(payload: &'a Value, field: &str) -> Result<&'a str> {
    let object = match payload {
        Value::Object(object) => object,
        Value::Null => return Err(Error::MissingPayloadField("body".to_string())),
        _ => return Err(Error::InvalidPayloadField("body".to_string())),
    };

    let value = match object.get(field) {
        None | Some(Value::Null) => return Err(Error::MissingPayloadField(field.to_string())),
        Some(Value::String(value)) => value,
        Some(_) => return Err(Error::InvalidPayloadField(field.to_string())),
    };

    let unknown: Vec<String> = object
        .keys()
        .filter(|key| key.as_str() != field)
        .cloned()
        .collect();
    if !unknown.is_empty() {
        return Err(Error::UnknownPayloadField(unknown));
    }

    Ok(value)
}

fn required_string(object: &Map<String, Value>, field: &str, max_len: usize) -> Result<String> {
    match object.get(field) {
        None | Some(Value::Null) => Err(Error::MissingPayloadField(field.to_string())),
        Some(Value::String(value)) => {
            let trimmed = value.trim();
            let len = trimmed.chars().count();
            if len == 0 || len > max_len {
                return Err(Error::InvalidPayloadField(field.to_string()));
            }
            Ok(trimmed.to_string())
        }
        Some(_) => Err(Error::InvalidPayloadField(field.to_string())),
    }
}
