use serde::Serialize;
use serde_json::{Map, Value};

/// Environment variable the platform uses to hand the request payload to
/// the function process.
pub const PAYLOAD_VAR: &str = "FUNCTION_PAYLOAD";

const DEFAULT_NAME: &str = "World";

#[derive(Serialize)]
pub struct Response {
    pub message: String,
}

/// Decodes the payload text into the request mapping.
///
/// Anything that is not a JSON object (malformed text, a bare number, an
/// array) collapses to the empty mapping. Bad input must never fail the
/// invocation, so the error variant is discarded rather than surfaced.
pub fn parse_request(payload: &str) -> Map<String, Value> {
    match serde_json::from_str(payload) {
        Ok(Value::Object(map)) => map,
        Ok(_) | Err(_) => Map::new(),
    }
}

fn resolve_name(request: &Map<String, Value>) -> String {
    match request.get("name") {
        Some(Value::String(name)) => name.clone(),
        // A present non-string (number, array, object, null) is interpolated
        // as its JSON text rather than rejected.
        Some(other) => other.to_string(),
        None => DEFAULT_NAME.to_string(),
    }
}

pub fn handle(request: &Map<String, Value>) -> Response {
    Response {
        message: format!("Hello, {}!", resolve_name(request)),
    }
}
