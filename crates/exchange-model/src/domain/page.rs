use serde::{Deserialize, Serialize};

/// One serialized data page as produced by the upstream task.
///
/// The payload is opaque here; decoding belongs to the consuming operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedPage {
    /// Encoded page bytes.
    pub data: Vec<u8>,
    /// Number of rows in the page.
    pub position_count: u32,
    /// Size of the page once decoded.
    pub uncompressed_size_bytes: u64,
}

impl SerializedPage {
    pub fn new(data: Vec<u8>, position_count: u32, uncompressed_size_bytes: u64) -> Self {
        Self {
            data,
            position_count,
            uncompressed_size_bytes,
        }
    }

    /// Encoded size on the wire.
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }
}
