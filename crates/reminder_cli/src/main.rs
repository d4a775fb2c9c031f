//! CLI entry point for reminder core.
//!
//! # Responsibility
//! - Verify `reminder_core` linkage (`ping`).
//! - Preview the reminder a contract would get, or create it in a SQLite file.

use clap::{Args, Parser, Subcommand};
use log::info;
use reminder_core::db::open_db;
use reminder_core::{
    core_version, default_log_level, init_logging, ping, plan_reminder, AutomaticReminderService,
    ContractSnapshot, KeywordCategoryClassifier, RenewalStatus, SqliteMemoRepository,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "reminder_cli", version, about = "Automatic contract reminders")]
struct Cli {
    /// Absolute directory for rolling log files; logging stays off when unset.
    #[arg(long, global = true, env = "REMINDER_LOG_DIR")]
    log_dir: Option<String>,
    #[arg(long, global = true, env = "REMINDER_LOG_LEVEL")]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print linkage check and version.
    Ping,
    /// Show category and planned reminder without persisting anything.
    Preview(ContractArgs),
    /// Create the automatic reminder in a SQLite database.
    Create {
        #[arg(long)]
        db: PathBuf,
        #[arg(long)]
        user: String,
        #[arg(long)]
        org: String,
        #[command(flatten)]
        contract: ContractArgs,
    },
}

#[derive(Args, Debug)]
struct ContractArgs {
    /// Product name, e.g. "PER Individuel".
    product: String,
    #[arg(long)]
    existing_retirement_plan: bool,
    #[arg(long)]
    existing_life_insurance: bool,
    #[arg(long)]
    buyback: bool,
    /// nouveau | renouvellement | remplacement
    #[arg(long, value_parser = parse_renewal_status)]
    renewal_status: Option<RenewalStatus>,
}

impl ContractArgs {
    fn to_snapshot(&self) -> ContractSnapshot {
        let mut snapshot = ContractSnapshot::new(self.product.clone())
            .with_renewal_status(self.renewal_status.unwrap_or_default());
        // Unset flags stay absent rather than an explicit `false`.
        if self.existing_retirement_plan {
            snapshot = snapshot.with_existing_retirement_plan(true);
        }
        if self.existing_life_insurance {
            snapshot = snapshot.with_existing_life_insurance(true);
        }
        if self.buyback {
            snapshot = snapshot.with_buyback_performed(true);
        }
        snapshot
    }
}

fn parse_renewal_status(value: &str) -> Result<RenewalStatus, String> {
    RenewalStatus::try_from(value.to_string()).map_err(|err| err.to_string())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    match cli.command.unwrap_or(Commands::Ping) {
        Commands::Ping => {
            println!("reminder_core ping={}", ping());
            println!("reminder_core version={}", core_version());
            ExitCode::SUCCESS
        }
        Commands::Preview(contract) => {
            preview(&contract.to_snapshot());
            ExitCode::SUCCESS
        }
        Commands::Create {
            db,
            user,
            org,
            contract,
        } => {
            let conn = match open_db(&db) {
                Ok(conn) => conn,
                Err(err) => {
                    eprintln!("failed to open `{}`: {err}", db.display());
                    return ExitCode::FAILURE;
                }
            };
            let service = AutomaticReminderService::with_defaults(SqliteMemoRepository::new(&conn));
            let outcome = service.create_automatic_reminder(&contract.to_snapshot(), &user, &org);
            info!(
                "event=cli_create module=cli success={} reminder_created={}",
                outcome.success, outcome.reminder_created
            );
            match serde_json::to_string_pretty(&outcome) {
                Ok(json) => println!("{json}"),
                Err(err) => eprintln!("failed to encode outcome: {err}"),
            }
            if outcome.success {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn preview(snapshot: &ContractSnapshot) {
    let category = KeywordCategoryClassifier::new().category_of(&snapshot.product);
    println!("category={} ({})", category, category.display_name());
    match plan_reminder(category, snapshot) {
        Some(template) => {
            println!("title={}", template.title);
            if let Some(description) = template.description.as_deref() {
                println!("description={description}");
            }
            println!("days_offset={}", template.days_offset);
        }
        None => println!("no reminder"),
    }
}
