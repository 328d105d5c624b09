use anyhow::Result;
use chrono::NaiveDate;
use cpf_check::{Cpf, CpfError, RegistrationInput};

fn payload(name: &str, birth_date: &str, cpf: &str) -> RegistrationInput {
    RegistrationInput {
        name: Some(name.to_string()),
        birth_date: Some(birth_date.to_string()),
        cpf: Some(cpf.to_string()),
    }
}

#[test]
fn test_complete_registration_payload() -> Result<()> {
    let profile = payload("João da Silva", "1985-11-03", "853.513.468-93").into_profile()?;

    assert_eq!(profile.name, "João da Silva");
    assert_eq!(
        profile.birth_date,
        NaiveDate::from_ymd_opt(1985, 11, 3).unwrap()
    );
    assert_eq!(profile.cpf.as_digits(), "85351346893");
    assert_eq!(profile.cpf.formatted(), "853.513.468-93");
    Ok(())
}

#[test]
fn test_cpf_accepted_in_any_format() -> Result<()> {
    let a = payload("Maria", "1990-05-20", "529.982.247-25").into_profile()?;
    let b = payload("Maria", "1990-05-20", "52998224725").into_profile()?;
    assert_eq!(a.cpf, b.cpf);
    Ok(())
}

#[test]
fn test_errors_name_the_offending_field() {
    let cases = [
        (payload("", "1990-05-20", "52998224725"), "name"),
        (payload("Maria", "not-a-date", "52998224725"), "birth_date"),
        (payload("Maria", "2999-12-31", "52998224725"), "birth_date"),
        (payload("Maria", "1990-05-20", "12345678900"), "cpf"),
        (payload("Maria", "1990-05-20", "111.111.111-11"), "cpf"),
    ];

    for (input, expected_field) in cases {
        let err = input.into_profile().unwrap_err();
        assert_eq!(err.field(), Some(expected_field), "error: {}", err);
    }
}

#[test]
fn test_missing_fields_report_as_missing() {
    let err = RegistrationInput {
        name: Some("Maria".to_string()),
        birth_date: Some("1990-05-20".to_string()),
        cpf: None,
    }
    .into_profile()
    .unwrap_err();

    assert!(matches!(err, CpfError::MissingFieldError { .. }));
    assert_eq!(err.field(), Some("cpf"));
}

#[test]
fn test_profile_serde() -> Result<()> {
    let profile = payload("Maria", "1990-05-20", "529.982.247-25").into_profile()?;
    let json = serde_json::to_value(&profile)?;

    assert_eq!(json["name"], "Maria");
    assert_eq!(json["birth_date"], "1990-05-20");
    // CPF serializes in canonical digit form.
    assert_eq!(json["cpf"], "52998224725");
    Ok(())
}

#[test]
fn test_cpf_deserialization_validates() {
    let ok: Result<Cpf, _> = serde_json::from_str("\"529.982.247-25\"");
    assert!(ok.is_ok());

    let bad: Result<Cpf, _> = serde_json::from_str("\"12345678900\"");
    assert!(bad.is_err());
}
