use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "cpf-check")]
#[command(about = "Validate, normalize and format Brazilian CPF numbers")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit results as JSON")]
    pub json: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Validate one or more CPFs, in any formatting
    Check {
        #[arg(required = true)]
        cpfs: Vec<String>,
    },

    /// Print the display form (DDD.DDD.DDD-DD) of a valid CPF
    Format { cpf: String },

    /// Strip punctuation and print the canonical 11-digit form
    Normalize { cpf: String },

    /// Validate a full registration payload (name, birth date, CPF)
    Profile {
        #[arg(long)]
        name: Option<String>,

        #[arg(long, help = "Birth date as YYYY-MM-DD")]
        birth_date: Option<String>,

        #[arg(long)]
        cpf: Option<String>,
    },
}
