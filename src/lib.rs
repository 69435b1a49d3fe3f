pub mod config;
pub mod dates;
pub mod error;
pub mod form;
pub mod logger;
pub mod models;
pub mod providers;
pub mod session;
pub mod texts;

pub use error::{DocumentError, Result};
pub use form::{CallbackHost, CreateDocument, DocumentHost, Draft, FieldError};
pub use models::{DocumentTemplate, Field, IssuerInfo, Job, K5Document, PlayerData};
pub use providers::{IdentityProvider, JobProvider, SharedActor};
pub use session::Session;
pub use texts::Texts;
