//! DQL query text and response decoding for `Combo` nodes

use super::GraphResult;
use crate::{ComboRecord, PageRequest, COMBO_TYPE};
use serde::Deserialize;

/// Build the query selecting every `Combo` node
///
/// With a page the window is embedded as literal `first`/`offset` arguments.
pub fn combo_query(page: Option<PageRequest>) -> String {
    let window = page
        .map(|p| format!(", first: {}, offset: {}", p.first, p.offset))
        .unwrap_or_default();

    format!(
        r#"
        {{
            nodes(func: type({COMBO_TYPE}){window}) {{
                uid
                A
                B
                ComboResult
            }}
        }}
        "#
    )
}

#[derive(Deserialize)]
struct NodesPayload {
    // Dgraph leaves the block out entirely when nothing matches
    #[serde(default)]
    nodes: Vec<ComboRecord>,
}

/// Decode a `{ "nodes": [...] }` response payload
pub fn decode_nodes(json: &[u8]) -> GraphResult<Vec<ComboRecord>> {
    let payload: NodesPayload = serde_json::from_slice(json)?;
    Ok(payload.nodes)
}
