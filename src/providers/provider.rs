use crate::models::{Job, PlayerData};

/// Read-only view of the current actor's identity.
pub trait IdentityProvider: Send + Sync {
    fn player_data(&self) -> Option<PlayerData>;
}

/// Read-only view of the current actor's job.
pub trait JobProvider: Send + Sync {
    fn job(&self) -> Option<Job>;
}
