pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use core::cpf::{format_cpf, is_valid_cpf, normalize_cpf};
pub use domain::model::{Cpf, RegistrationInput, RegistrationProfile};
pub use utils::error::{CpfError, Result};
