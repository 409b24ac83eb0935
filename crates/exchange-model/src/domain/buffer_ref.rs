use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{OutputBufferId, TaskId};

/// Fully qualified output buffer: the owning task plus the buffer within it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BufferRef {
    pub task_id: TaskId,
    pub buffer_id: OutputBufferId,
}

impl BufferRef {
    pub fn new(task_id: TaskId, buffer_id: OutputBufferId) -> Self {
        Self { task_id, buffer_id }
    }
}

impl fmt::Display for BufferRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.task_id, self.buffer_id)
    }
}
