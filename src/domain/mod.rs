pub mod model;

pub use model::{Cpf, RegistrationInput, RegistrationProfile};
