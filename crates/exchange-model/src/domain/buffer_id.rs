use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::IdError;

/// Identifier of one output buffer of a task (one per downstream consumer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutputBufferId(u32);

impl OutputBufferId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl FromStr for OutputBufferId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(IdError::InvalidBufferId { raw: s.to_string() });
        }
        s.parse::<u32>()
            .map(Self)
            .map_err(|_| IdError::InvalidBufferId { raw: s.to_string() })
    }
}

impl From<u32> for OutputBufferId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for OutputBufferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
