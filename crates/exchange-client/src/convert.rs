use exchange_model::{BufferRef, PagesResponse, SerializedPage, Token};

use crate::proto;

impl From<proto::SerializedPage> for SerializedPage {
    fn from(page: proto::SerializedPage) -> Self {
        SerializedPage {
            data: page.data,
            position_count: page.position_count,
            uncompressed_size_bytes: page.uncompressed_size_bytes,
        }
    }
}

impl From<SerializedPage> for proto::SerializedPage {
    fn from(page: SerializedPage) -> Self {
        proto::SerializedPage {
            data: page.data,
            position_count: page.position_count,
            uncompressed_size_bytes: page.uncompressed_size_bytes,
        }
    }
}

impl From<proto::GetResultsResponse> for PagesResponse {
    fn from(reply: proto::GetResultsResponse) -> Self {
        PagesResponse {
            task_instance_id: reply.task_instance_id,
            token: reply.token,
            next_token: reply.next_token,
            pages: reply.pages.into_iter().map(SerializedPage::from).collect(),
            buffer_complete: reply.buffer_complete,
        }
    }
}

impl From<PagesResponse> for proto::GetResultsResponse {
    fn from(response: PagesResponse) -> Self {
        proto::GetResultsResponse {
            task_instance_id: response.task_instance_id,
            token: response.token,
            next_token: response.next_token,
            pages: response
                .pages
                .into_iter()
                .map(proto::SerializedPage::from)
                .collect(),
            buffer_complete: response.buffer_complete,
        }
    }
}

pub(crate) fn get_results_request(
    buffer: &BufferRef,
    token: Token,
    max_size_bytes: u64,
) -> proto::GetResultsRequest {
    proto::GetResultsRequest {
        task_id: buffer.task_id.to_string(),
        buffer_id: buffer.buffer_id.get(),
        token,
        max_size_bytes,
    }
}

pub(crate) fn acknowledge_results_request(
    buffer: &BufferRef,
    next_token: Token,
) -> proto::AcknowledgeResultsRequest {
    proto::AcknowledgeResultsRequest {
        task_id: buffer.task_id.to_string(),
        buffer_id: buffer.buffer_id.get(),
        next_token,
    }
}

pub(crate) fn abort_results_request(buffer: &BufferRef) -> proto::AbortResultsRequest {
    proto::AbortResultsRequest {
        task_id: buffer.task_id.to_string(),
        buffer_id: buffer.buffer_id.get(),
    }
}
