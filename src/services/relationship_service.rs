use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use std::sync::Mutex;
use tracing::{info, warn};

use crate::domain::app_state::AppState;

/// External collaborator that owns the Relationships roster. Both calls are
/// one-shot with no retry; on failure the in-memory roster is left untouched.
#[automock]
#[async_trait]
pub trait RelationshipProvider: Send + Sync {
    async fn fetch_people(&self) -> Result<Vec<String>>;

    /// Adds a person and returns the full updated roster.
    async fn add_person(&self, name: &str) -> Result<Vec<String>>;
}

/// Stand-in data service until a real backend exists.
pub struct InMemoryRelationshipService {
    roster: Mutex<Vec<String>>,
}

impl InMemoryRelationshipService {
    pub fn new() -> Self {
        Self {
            roster: Mutex::new(vec![
                "Mom".to_string(),
                "Dad".to_string(),
                "Partner".to_string(),
            ]),
        }
    }
}

impl Default for InMemoryRelationshipService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RelationshipProvider for InMemoryRelationshipService {
    async fn fetch_people(&self) -> Result<Vec<String>> {
        let roster = self
            .roster
            .lock()
            .map_err(|_| anyhow::anyhow!("relationship roster lock poisoned"))?;
        Ok(roster.clone())
    }

    async fn add_person(&self, name: &str) -> Result<Vec<String>> {
        let mut roster = self
            .roster
            .lock()
            .map_err(|_| anyhow::anyhow!("relationship roster lock poisoned"))?;
        roster.push(name.to_string());
        Ok(roster.clone())
    }
}

/// Startup fetch: populates the roster once. A failure is logged and leaves
/// the previous roster in place; there is no retry.
pub async fn load_initial_people(provider: &dyn RelationshipProvider, state: &mut AppState) {
    match provider.fetch_people().await {
        Ok(people) => {
            info!(count = people.len(), "loaded relationship roster");
            state.set_people(people);
        }
        Err(error) => {
            warn!(%error, "failed to fetch relationships; keeping current roster");
        }
    }
}
