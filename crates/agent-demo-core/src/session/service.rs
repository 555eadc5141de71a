//! Session service trait.

use super::model::SessionRecord;
use async_trait::async_trait;

/// Contract for granting and inspecting demo sessions.
///
/// [`super::SessionRegistry`] is the in-memory stub used by the narrated demo.
/// A real automation engine would provide its own implementation behind the
/// same interface.
#[async_trait]
pub trait SessionService: Send + Sync {
    /// Creates a session for the given tier label.
    ///
    /// Never fails: unknown labels are granted the `demo` tier.
    async fn create_session(&self, tier: &str) -> SessionRecord;

    /// Finds a session by its ID.
    ///
    /// # Returns
    ///
    /// - `Some(SessionRecord)`: Session found
    /// - `None`: No session with that ID was ever created
    async fn find(&self, session_id: &str) -> Option<SessionRecord>;

    /// Number of sessions created so far.
    async fn count(&self) -> usize;
}
