use crate::core::cpf::{is_valid_cpf, normalize_cpf};
use crate::utils::error::{CpfError, Result};
use chrono::{Local, NaiveDate};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CpfError::InvalidFieldError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_max_length(field_name: &str, value: &str, max_chars: usize) -> Result<()> {
    let len = value.chars().count();
    if len > max_chars {
        return Err(CpfError::InvalidFieldError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value has {} characters, maximum is {}", len, max_chars),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| CpfError::MissingFieldError {
        field: field_name.to_string(),
    })
}

/// Validates a CPF with the reason for rejection spelled out per stage:
/// wrong digit count, repeated-digit sequence, or check-digit mismatch.
pub fn validate_cpf(field_name: &str, value: &str) -> Result<()> {
    let digits = normalize_cpf(value);

    if digits.len() != 11 {
        return Err(CpfError::InvalidFieldError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("CPF must have exactly 11 digits, found {}", digits.len()),
        });
    }

    let first = digits.as_bytes()[0];
    if digits.bytes().all(|b| b == first) {
        return Err(CpfError::InvalidFieldError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Repeated-digit CPF sequences are not issued".to_string(),
        });
    }

    if !is_valid_cpf(&digits) {
        return Err(CpfError::InvalidFieldError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "CPF check digits do not match".to_string(),
        });
    }

    Ok(())
}

/// Parses a `YYYY-MM-DD` date and requires it to be strictly in the past.
pub fn validate_past_date(field_name: &str, value: &str) -> Result<NaiveDate> {
    validate_non_empty_string(field_name, value)?;

    let date = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|e| {
        CpfError::InvalidFieldError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Expected YYYY-MM-DD date: {}", e),
        }
    })?;

    let today = Local::now().date_naive();
    if date >= today {
        return Err(CpfError::InvalidFieldError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Date must be in the past".to_string(),
        });
    }

    Ok(date)
}
