pub mod server;

pub use server::Session;
