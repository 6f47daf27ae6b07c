//! Payload decoding for the list service
//!
//! Expected body: `{ "lists": [ { "list_number": 1, "items": ["a"] } ] }`

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::ApiError;
use crate::model::List;

/// Response body of the read endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListsPayload {
    pub lists: Vec<List>,
}

/// Decode a response body into the list collection
///
/// Rejects payloads where two lists share a `list_number`.
pub fn parse_lists(body: &str) -> Result<Vec<List>, ApiError> {
    let payload: ListsPayload = serde_json::from_str(body)?;

    let mut seen = HashSet::new();
    for list in &payload.lists {
        if !seen.insert(list.list_number) {
            return Err(ApiError::DuplicateList(list.list_number));
        }
    }

    Ok(payload.lists)
}
