use clap::Parser;
use cpf_check::utils::logger;
use cpf_check::{
    format_cpf, is_valid_cpf, normalize_cpf, CliConfig, Command, Cpf, RegistrationInput,
};
use serde_json::json;

fn main() {
    let config = CliConfig::parse();

    if config.json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    let exit_code = match &config.command {
        Command::Check { cpfs } => run_check(cpfs, config.json),
        Command::Format { cpf } => run_format(cpf, config.json),
        Command::Normalize { cpf } => run_normalize(cpf, config.json),
        Command::Profile {
            name,
            birth_date,
            cpf,
        } => run_profile(name, birth_date, cpf, config.json),
    };

    if exit_code > 0 {
        std::process::exit(exit_code);
    }
}

fn run_check(cpfs: &[String], as_json: bool) -> i32 {
    let mut any_invalid = false;
    let mut results = Vec::new();

    for raw in cpfs {
        let valid = is_valid_cpf(raw);
        any_invalid |= !valid;
        tracing::debug!("checked '{}': valid={}", raw, valid);

        if as_json {
            results.push(json!({
                "input": raw,
                "normalized": normalize_cpf(raw),
                "valid": valid,
            }));
        } else if valid {
            println!("✅ {} is valid", raw);
        } else {
            println!("❌ {} is invalid", raw);
        }
    }

    if as_json {
        println!("{}", json!(results));
    }

    if any_invalid {
        1
    } else {
        0
    }
}

fn run_format(raw: &str, as_json: bool) -> i32 {
    match Cpf::parse(raw) {
        Ok(cpf) => {
            if as_json {
                println!(
                    "{}",
                    json!({ "input": raw, "formatted": cpf.formatted() })
                );
            } else {
                println!("{}", cpf.formatted());
            }
            0
        }
        Err(e) => {
            tracing::error!("Cannot format '{}': {}", raw, e);
            eprintln!("❌ {}", e);
            1
        }
    }
}

fn run_normalize(raw: &str, as_json: bool) -> i32 {
    let digits = normalize_cpf(raw);
    if as_json {
        println!("{}", json!({ "input": raw, "normalized": digits }));
    } else {
        println!("{}", digits);
    }
    0
}

fn run_profile(
    name: &Option<String>,
    birth_date: &Option<String>,
    cpf: &Option<String>,
    as_json: bool,
) -> i32 {
    let input = RegistrationInput {
        name: name.clone(),
        birth_date: birth_date.clone(),
        cpf: cpf.clone(),
    };

    match input.into_profile() {
        Ok(profile) => {
            if as_json {
                println!(
                    "{}",
                    json!({
                        "valid": true,
                        "name": profile.name,
                        "birth_date": profile.birth_date,
                        "cpf": profile.cpf.as_digits(),
                        "cpf_formatted": format_cpf(profile.cpf.as_digits()),
                    })
                );
            } else {
                println!("✅ Profile is valid");
                println!("   name:       {}", profile.name);
                println!("   birth date: {}", profile.birth_date);
                println!("   cpf:        {}", profile.cpf);
            }
            0
        }
        Err(e) => {
            tracing::error!("Profile validation failed: {}", e);
            if as_json {
                println!(
                    "{}",
                    json!({
                        "valid": false,
                        "field": e.field(),
                        "error": e.to_string(),
                    })
                );
            } else {
                eprintln!("❌ {}", e);
            }
            1
        }
    }
}
