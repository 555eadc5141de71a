use super::model::SessionRecord;
use super::service::SessionService;
use super::tier::Tier;
use async_trait::async_trait;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory session registry.
///
/// Records live for the lifetime of the process. The registry is append-only:
/// there is no update, delete or eviction.
pub struct SessionRegistry {
    sessions: Arc<RwLock<HashMap<String, SessionRecord>>>,
}

impl SessionRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionService for SessionRegistry {
    async fn create_session(&self, tier: &str) -> SessionRecord {
        let resolved = Tier::resolve(tier);
        if resolved.to_string() != tier {
            tracing::warn!(
                requested = tier,
                granted = %resolved,
                "Unknown tier requested, falling back to demo"
            );
        }

        let mut sessions = self.sessions.write().await;
        // A v4 collision is practically impossible, but an id must never be reused.
        let record = loop {
            let id = Uuid::new_v4().to_string();
            if let Entry::Vacant(slot) = sessions.entry(id.clone()) {
                break slot.insert(SessionRecord::new(id, resolved)).clone();
            }
        };

        tracing::info!(
            session_id = %record.id,
            tier = %record.tier,
            "Session created"
        );
        record
    }

    async fn find(&self, session_id: &str) -> Option<SessionRecord> {
        let sessions = self.sessions.read().await;
        sessions.get(session_id).cloned()
    }

    async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }
}
