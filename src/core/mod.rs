pub mod cpf;

pub use cpf::{format_cpf, is_valid_cpf, normalize_cpf};
