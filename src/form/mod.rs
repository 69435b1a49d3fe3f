mod assembler;
mod draft;
mod host;
pub mod validation;

pub use assembler::CreateDocument;
pub use draft::Draft;
pub use host::{CallbackHost, DocumentHost};
pub use validation::{validate, FieldError};
