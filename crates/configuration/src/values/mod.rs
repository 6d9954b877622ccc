mod connection_info;
mod secret;
pub mod uri;

pub use connection_info::{LoginEndpoint, Password, Username};
pub use secret::Secret;
