//! Lookup response parser for the OMDb API

use serde_json::{Map, Value};

use crate::error::Result;
use crate::types::{Metadata, NOT_AVAILABLE};

/// Parse an OMDb JSON body into the four metadata fields.
///
/// Missing or `null` fields become "N/A". An empty JSON object carries no
/// information at all and yields `None`, the same as a failed lookup.
///
/// # Errors
/// Returns `MovieDbError::JsonError` if the body is not a JSON object.
pub fn parse_lookup_response(body: &str) -> Result<Option<Metadata>> {
    let object: Map<String, Value> = serde_json::from_str(body)?;

    if object.is_empty() {
        return Ok(None);
    }

    // OMDb answers 200 with Response=False when the title is unknown
    if object.get("Response").and_then(Value::as_str) == Some("False") {
        let reason = object
            .get("Error")
            .and_then(Value::as_str)
            .unwrap_or("unknown error");
        tracing::warn!("Lookup returned no match: {}", reason);
    }

    Ok(Some(Metadata {
        box_office: field(&object, "BoxOffice"),
        awards: field(&object, "Awards"),
        genre: field(&object, "Genre"),
        director: field(&object, "Director"),
    }))
}

fn field(object: &Map<String, Value>, key: &str) -> String {
    match object.get(key) {
        None | Some(Value::Null) => NOT_AVAILABLE.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
