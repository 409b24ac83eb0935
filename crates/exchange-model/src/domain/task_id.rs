use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::IdError;

/// Identifier of a remote task that owns output buffers.
///
/// Textual form is `{queryId}.{stageId}[.{stageExecutionId}].{id}`. The
/// original text is kept verbatim so `Display` returns exactly what was parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskId {
    raw: String,
    query_len: usize,
    stage_id: u32,
    stage_execution_id: Option<u32>,
    id: u32,
}

impl TaskId {
    /// Query identifier part (everything before the first `.`).
    pub fn query_id(&self) -> &str {
        &self.raw[..self.query_len]
    }

    pub fn stage_id(&self) -> u32 {
        self.stage_id
    }

    /// Stage execution id, present only in the four-part form.
    pub fn stage_execution_id(&self) -> Option<u32> {
        self.stage_execution_id
    }

    /// Task number within the stage.
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl FromStr for TaskId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| IdError::InvalidTaskId {
            raw: s.to_string(),
            reason,
        };

        let parts: Vec<&str> = s.split('.').collect();
        if !(3..=4).contains(&parts.len()) {
            return Err(invalid("expected 3 or 4 dot-separated parts"));
        }

        let query_id = parts[0];
        if query_id.is_empty() {
            return Err(invalid("query id is empty"));
        }
        if !query_id
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_')
        {
            return Err(invalid("query id must be lowercase letters, digits or '_'"));
        }

        let numbers = parts[1..]
            .iter()
            .map(|p| parse_u32(p))
            .collect::<Option<Vec<u32>>>()
            .ok_or_else(|| invalid("stage and task parts must be unsigned integers"))?;

        let (stage_id, stage_execution_id, id) = match numbers.as_slice() {
            [stage, id] => (*stage, None, *id),
            [stage, exec, id] => (*stage, Some(*exec), *id),
            _ => return Err(invalid("expected 3 or 4 dot-separated parts")),
        };

        Ok(Self {
            raw: s.to_string(),
            query_len: query_id.len(),
            stage_id,
            stage_execution_id,
            id,
        })
    }
}

fn parse_u32(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

impl TryFrom<String> for TaskId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TaskId> for String {
    fn from(id: TaskId) -> Self {
        id.raw
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl AsRef<str> for TaskId {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}
