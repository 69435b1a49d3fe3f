pub mod provider;
pub mod shared;

pub use provider::{IdentityProvider, JobProvider};
pub use shared::SharedActor;
