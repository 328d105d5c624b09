use crate::core::cpf::{format_cpf, normalize_cpf};
use crate::utils::error::{CpfError, Result};
use crate::utils::validation::{
    validate_cpf, validate_max_length, validate_non_empty_string, validate_past_date,
    validate_required_field, Validate,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const NAME_MAX_CHARS: usize = 255;

/// A validated CPF in canonical form: 11 raw digits, no punctuation.
///
/// Construction goes through [`Cpf::parse`], so a `Cpf` value always carries
/// correct check digits. Serializes as the canonical digit string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cpf(String);

impl Cpf {
    /// Normalizes free-form input and validates it. Accepts any punctuation
    /// variant (`529.982.247-25`, `52998224725`, ...).
    pub fn parse(raw: &str) -> Result<Self> {
        validate_cpf("cpf", raw)?;
        Ok(Cpf(normalize_cpf(raw)))
    }

    /// Canonical 11-digit storage form.
    pub fn as_digits(&self) -> &str {
        &self.0
    }

    /// Display form, `DDD.DDD.DDD-DD`.
    pub fn formatted(&self) -> String {
        format_cpf(&self.0)
    }
}

impl FromStr for Cpf {
    type Err = CpfError;

    fn from_str(s: &str) -> Result<Self> {
        Cpf::parse(s)
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl TryFrom<String> for Cpf {
    type Error = CpfError;

    fn try_from(value: String) -> Result<Self> {
        Cpf::parse(&value)
    }
}

impl From<Cpf> for String {
    fn from(cpf: Cpf) -> Self {
        cpf.0
    }
}

/// Raw registration-completion payload as submitted by a form. All fields
/// optional so that missing and invalid values report distinctly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistrationInput {
    pub name: Option<String>,
    pub birth_date: Option<String>,
    pub cpf: Option<String>,
}

impl Validate for RegistrationInput {
    fn validate(&self) -> Result<()> {
        self.clone().into_profile().map(|_| ())
    }
}

impl RegistrationInput {
    /// Runs all field rules and produces the typed profile.
    ///
    /// Rules mirror the registration form: name required and at most
    /// 255 characters, birth date required and strictly before today,
    /// CPF required and check-digit valid. Fails on the first offending
    /// field, in that order.
    pub fn into_profile(self) -> Result<RegistrationProfile> {
        let name = validate_required_field("name", &self.name)?;
        validate_non_empty_string("name", name)?;
        validate_max_length("name", name, NAME_MAX_CHARS)?;
        let name = name.clone();

        let birth_date = validate_required_field("birth_date", &self.birth_date)?;
        let birth_date = validate_past_date("birth_date", birth_date)?;

        let cpf = validate_required_field("cpf", &self.cpf)?;
        let cpf = Cpf::parse(cpf)?;

        Ok(RegistrationProfile {
            name,
            birth_date,
            cpf,
        })
    }
}

/// A fully validated registration profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationProfile {
    pub name: String,
    pub birth_date: NaiveDate,
    pub cpf: Cpf,
}
