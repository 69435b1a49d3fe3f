use super::{IdentityProvider, JobProvider};
use crate::models::{Job, PlayerData};
use std::sync::{Arc, RwLock};

/// Identity and job snapshot that a host updates as the game pushes changes.
///
/// Clones share the same state, so a form reading through one clone sees
/// updates written through another.
#[derive(Debug, Clone, Default)]
pub struct SharedActor {
    inner: Arc<RwLock<ActorState>>,
}

#[derive(Debug, Default)]
struct ActorState {
    player_data: Option<PlayerData>,
    job: Option<Job>,
}

impl SharedActor {
    pub fn new(player_data: Option<PlayerData>, job: Option<Job>) -> Self {
        SharedActor {
            inner: Arc::new(RwLock::new(ActorState { player_data, job })),
        }
    }

    pub fn set_player_data(&self, player_data: Option<PlayerData>) {
        let mut state = self.inner.write().unwrap_or_else(|e| e.into_inner());
        state.player_data = player_data;
    }

    pub fn set_job(&self, job: Option<Job>) {
        let mut state = self.inner.write().unwrap_or_else(|e| e.into_inner());
        state.job = job;
    }
}

impl IdentityProvider for SharedActor {
    fn player_data(&self) -> Option<PlayerData> {
        let state = self.inner.read().unwrap_or_else(|e| e.into_inner());
        state.player_data.clone()
    }
}

impl JobProvider for SharedActor {
    fn job(&self) -> Option<Job> {
        let state = self.inner.read().unwrap_or_else(|e| e.into_inner());
        state.job.clone()
    }
}
