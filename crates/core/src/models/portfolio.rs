use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::position::PositionRecord;

/// A per-request view over position records. Built fresh for every
/// portfolio query; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioSnapshot {
    /// Identifier minted for this snapshot
    pub id: Uuid,

    /// The requested day, or the current instant (RFC 3339) when no day
    /// was requested
    #[serde(rename = "asOf")]
    pub as_of: String,

    /// Matching positions, in record-store order
    pub positions: Vec<PositionRecord>,
}

impl PortfolioSnapshot {
    pub fn new(as_of: impl Into<String>, positions: Vec<PositionRecord>) -> Self {
        Self {
            id: Uuid::new_v4(),
            as_of: as_of.into(),
            positions,
        }
    }
}
