//! Session domain model.

use super::tier::Tier;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One simulated usage grant.
///
/// Limits are copied from the tier table when the record is created; usage
/// counters start at zero and nothing in the demo advances them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Unique session identifier (UUID format)
    pub id: String,
    pub tier: Tier,
    pub operations_used: u32,
    pub repos_accessed: Vec<String>,
    pub operation_limit: u32,
    pub repo_limit: u32,
    /// Human-readable session length, e.g. "2 hours"
    pub duration_label: String,
    pub created_at: DateTime<Utc>,
}

impl SessionRecord {
    pub fn new(id: String, tier: Tier) -> Self {
        let limits = tier.limits();
        Self {
            id,
            tier,
            operations_used: 0,
            repos_accessed: Vec::new(),
            operation_limit: limits.operations,
            repo_limit: limits.repos,
            duration_label: limits.duration.to_string(),
            created_at: Utc::now(),
        }
    }

    /// First eight characters of the id, for display.
    pub fn short_id(&self) -> &str {
        self.id.get(..8).unwrap_or(&self.id)
    }
}
