mod document;
mod field;
mod player;
mod template;

pub use document::{IssuerInfo, K5Document};
pub use field::Field;
pub use player::{Job, PlayerData};
pub use template::DocumentTemplate;
