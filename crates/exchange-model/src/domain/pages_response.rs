use serde::{Deserialize, Serialize};

use crate::{SerializedPage, Token};

/// Reply to a single fetch against an output buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagesResponse {
    /// Instance of the remote task that served the reply.
    ///
    /// Changes when the task restarts; a change invalidates any read in progress.
    pub task_instance_id: String,
    /// Token the reply corresponds to.
    pub token: Token,
    /// Token to request next.
    pub next_token: Token,
    /// Pages in buffer order.
    pub pages: Vec<SerializedPage>,
    /// No further data will be produced by the buffer.
    pub buffer_complete: bool,
}

impl PagesResponse {
    pub fn new(
        task_instance_id: impl Into<String>,
        token: Token,
        next_token: Token,
        pages: Vec<SerializedPage>,
        buffer_complete: bool,
    ) -> Self {
        Self {
            task_instance_id: task_instance_id.into(),
            token,
            next_token,
            pages,
            buffer_complete,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Total encoded bytes across all pages.
    pub fn payload_bytes(&self) -> usize {
        self.pages.iter().map(SerializedPage::size_bytes).sum()
    }
}
