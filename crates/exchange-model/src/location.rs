//! Buffer locations and the versioned location grammar.
//!
//! A location names a remote output buffer together with the network authority
//! that serves it. The v1 textual form is
//!
//! ```text
//! {scheme}://{host}:{port}/v1/task/{taskId}/results/{bufferId}/
//! ```
//!
//! Split on `/`, the path yields the task id at segment 3 and the buffer id at
//! segment 5. That layout is shared with the serving side and must not drift.

use std::fmt;

use crate::{BufferRef, LocationError, OutputBufferId, TaskId};

const V1_MIN_SEGMENTS: usize = 6;
const V1_VERSION: (usize, &str) = (1, "v1");
const V1_TASK: (usize, &str) = (2, "task");
const V1_RESULTS: (usize, &str) = (4, "results");
const V1_TASK_ID: usize = 3;
const V1_BUFFER_ID: usize = 5;

/// Network authority plus the output buffer it serves.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BufferLocation {
    authority: String,
    buffer: BufferRef,
}

impl BufferLocation {
    pub fn new(authority: impl Into<String>, buffer: BufferRef) -> Self {
        Self {
            authority: authority.into(),
            buffer,
        }
    }

    /// Decode a v1 location string.
    pub fn decode_v1(location: &str) -> Result<Self, LocationError> {
        if location.is_empty() {
            return Err(LocationError::Empty);
        }

        let (scheme, rest) = location
            .split_once("://")
            .ok_or_else(|| LocationError::MissingScheme(location.to_string()))?;
        if !is_scheme(scheme) {
            return Err(LocationError::MissingScheme(location.to_string()));
        }

        let (authority, path) = match rest.find('/') {
            Some(i) => rest.split_at(i),
            None => (rest, ""),
        };
        if authority.is_empty() {
            return Err(LocationError::MissingAuthority(location.to_string()));
        }

        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').collect();
        if segments.len() < V1_MIN_SEGMENTS {
            return Err(LocationError::TooFewSegments {
                path: path.to_string(),
                found: segments.len(),
                expected: V1_MIN_SEGMENTS,
            });
        }

        for (index, expected) in [V1_VERSION, V1_TASK, V1_RESULTS] {
            if segments[index] != expected {
                return Err(LocationError::UnexpectedSegment {
                    index,
                    expected,
                    found: segments[index].to_string(),
                });
            }
        }

        let task_id: TaskId = segments[V1_TASK_ID]
            .parse()
            .map_err(LocationError::InvalidTaskId)?;
        let buffer_id: OutputBufferId = segments[V1_BUFFER_ID]
            .parse()
            .map_err(LocationError::InvalidBufferId)?;

        Ok(Self::new(authority, BufferRef::new(task_id, buffer_id)))
    }

    /// Render the v1 form under the given scheme.
    pub fn encode_v1(&self, scheme: &str) -> String {
        format!(
            "{scheme}://{}/v1/task/{}/results/{}/",
            self.authority, self.buffer.task_id, self.buffer.buffer_id
        )
    }

    /// `host:port` of the serving node.
    pub fn authority(&self) -> &str {
        &self.authority
    }

    pub fn buffer(&self) -> &BufferRef {
        &self.buffer
    }

    pub fn into_parts(self) -> (String, BufferRef) {
        (self.authority, self.buffer)
    }
}

impl fmt::Display for BufferLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.authority, self.buffer)
    }
}

fn is_scheme(s: &str) -> bool {
    let mut bytes = s.bytes();
    matches!(bytes.next(), Some(b) if b.is_ascii_alphabetic())
        && bytes.all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.'))
}
