use serde::Serialize;

/// Directive the host executes when the user activates a result row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Place `text` on the system clipboard.
    CopyToClipboard { text: String },
}

/// One row in the launcher result list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultItem {
    pub icon: String,
    pub name: String,
    pub description: String,
    pub on_enter: Action,
}

/// Everything the host renders for one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryResponse {
    pub items: Vec<ResultItem>,
}
