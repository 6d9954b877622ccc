pub mod configuration;
pub mod connection_settings;
pub mod environment;
pub mod error;
pub mod values;
pub mod version1;

pub use configuration::{Configuration, ResolvedConnectionSettings};
pub use connection_settings::ConnectionSettings;
pub use version1::{
    make_runtime_configuration, parse_configuration, write_parsed_configuration,
    ParsedConfiguration,
};
