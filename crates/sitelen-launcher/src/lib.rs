//! Launcher-facing query handling.
//!
//! Produces the result items a launcher frontend renders for a query: one row
//! offering the converted text as a copy-to-clipboard action. The host owns
//! the event loop, rendering, and clipboard access; this crate only builds
//! the response data.

mod types;

pub use types::{Action, QueryResponse, ResultItem};

use tracing::debug;

use sitelen_core::convert;

/// Icon path the host resolves relative to the extension bundle.
pub const ICON: &str = "images/icon.png";

/// Handle one keyword query. An absent argument is treated as an empty
/// query, never an error.
pub fn handle_query(argument: Option<&str>) -> QueryResponse {
    let argument = argument.unwrap_or("");
    let converted = convert(argument);
    debug!(query_len = argument.len(), "handled launcher query");

    QueryResponse {
        items: vec![ResultItem {
            icon: ICON.to_owned(),
            name: "Convert to Sitelen Pona".to_owned(),
            description: "Copy sitelen to clipboard".to_owned(),
            on_enter: Action::CopyToClipboard { text: converted },
        }],
    }
}
