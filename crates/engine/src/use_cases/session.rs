//! Viewer session context.
//!
//! Holds the open zone, the selected version and the most recent fetch
//! results. Each navigation takes a generation token; results are only
//! written back while that token is still current, so a slow fetch for a
//! zone the user already left cannot overwrite newer state.

use std::sync::Arc;

use tokio::sync::RwLock;
use zonedex_domain::{CreatureEncounters, CreatureRecord, VersionKey, ZoneId};

/// Identifies one navigation. Only the latest token may commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationToken(u64);

/// Snapshot of the session.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub current_zone: Option<ZoneId>,
    pub version: VersionKey,
    /// Raw encounter payload of the current zone's location
    pub encounters: Vec<CreatureEncounters>,
    /// Unfiltered creature records of the current zone
    pub creatures: Vec<CreatureRecord>,
    generation: u64,
}

/// Shared handle to the session context.
#[derive(Clone, Default)]
pub struct Session {
    state: Arc<RwLock<SessionState>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start navigating to `zone`. Previous results are cleared and any
    /// in-flight navigation becomes stale.
    pub async fn begin_navigation(&self, zone: ZoneId, version: VersionKey) -> NavigationToken {
        let mut state = self.state.write().await;
        state.generation += 1;
        state.current_zone = Some(zone);
        state.version = version;
        state.encounters.clear();
        state.creatures.clear();
        NavigationToken(state.generation)
    }

    /// Store fetch results if `token` is still current.
    ///
    /// Returns `false` (and stores nothing) for a stale token.
    pub async fn commit(
        &self,
        token: NavigationToken,
        encounters: Vec<CreatureEncounters>,
        creatures: Vec<CreatureRecord>,
    ) -> bool {
        let mut state = self.state.write().await;
        if state.generation != token.0 {
            tracing::debug!(
                token = token.0,
                current = state.generation,
                "Discarding results of a superseded navigation"
            );
            return false;
        }
        state.encounters = encounters;
        state.creatures = creatures;
        true
    }

    pub async fn snapshot(&self) -> SessionState {
        self.state.read().await.clone()
    }

    pub async fn current_zone(&self) -> Option<ZoneId> {
        self.state.read().await.current_zone.clone()
    }

    pub async fn version(&self) -> VersionKey {
        self.state.read().await.version
    }

    /// Change the version filter without navigating.
    pub async fn set_version(&self, version: VersionKey) {
        self.state.write().await.version = version;
    }

    /// Back to the overview: everything returns to defaults and in-flight
    /// navigations become stale.
    pub async fn reset(&self) {
        let mut state = self.state.write().await;
        let generation = state.generation + 1;
        *state = SessionState {
            generation,
            ..SessionState::default()
        };
    }
}
