mod task_id;
pub use task_id::TaskId;

mod buffer_id;
pub use buffer_id::OutputBufferId;

mod buffer_ref;
pub use buffer_ref::BufferRef;

mod page;
pub use page::SerializedPage;

mod pages_response;
pub use pages_response::PagesResponse;

/// Position in an output buffer's page stream.
///
/// Opaque to the client: values are produced by the remote buffer and echoed
/// back by the caller. Ordering and advancement are owned by the remote side.
pub type Token = u64;
