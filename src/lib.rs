pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{http::ReqwestTransport, terminal::TerminalPage};
pub use config::SenderSettings;
pub use core::controller::SubmitController;
pub use core::validation::ValidationPolicy;
pub use utils::error::{Result, SenderError};
