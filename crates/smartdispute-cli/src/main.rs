mod display;
mod input;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use smartdispute_core::{FormId, IssueCategory};
use smartdispute_triage::autofill::defaulted_fields;
use smartdispute_triage::config::CONFIG_ENV;
use smartdispute_triage::{
    CaseProfile, FilingStep, FormLink, Triage, TriageConfig, case_steps, filing_steps,
};
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser)]
#[command(
    name = "smartdispute",
    version,
    about = "Tenant complaint triage: classify, recommend a form, autofill it"
)]
struct Cli {
    /// JSON config overriding the built-in rules, form table and schemas.
    #[arg(long, global = true, env = CONFIG_ENV)]
    config: Option<PathBuf>,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease log verbosity (-q errors only, -qq silent).
    #[arg(short, long, global = true, action = clap::ArgAction::Count, conflicts_with = "verbose")]
    quiet: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classify complaint text into an issue category.
    Classify { text: String },
    /// Recommend forms for an issue category (e.g. `eviction`).
    Recommend { category: IssueCategory },
    /// Autofill a form from profile data.
    Autofill {
        /// Form code, e.g. T6 or "HRTO Form 1".
        #[arg(long)]
        form: FormId,
        #[command(flatten)]
        profile: ProfileArgs,
    },
    /// Classify, recommend and autofill in one step.
    Triage {
        text: String,
        #[command(flatten)]
        profile: ProfileArgs,
    },
    /// Show the filing steps for a form.
    Timeline {
        #[arg(long)]
        form: FormId,
    },
    /// Run chat messages through case intake, in order.
    Intake {
        #[arg(required = true)]
        messages: Vec<String>,
    },
    /// List known forms and the fields each one autofills.
    Forms,
}

#[derive(Args)]
struct ProfileArgs {
    /// JSON object of profile fields (name, address, summary, message, date, opponent, remedy).
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Set one profile field; repeatable, applied after --profile.
    #[arg(long = "set", value_name = "KEY=VALUE")]
    sets: Vec<String>,
}

#[derive(Serialize)]
struct IntakeReport {
    profile: CaseProfile,
    reply: String,
    form_link: Option<FormLink>,
    steps: Vec<FilingStep>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    tracing::debug!("smartdispute v{}", env!("CARGO_PKG_VERSION"));

    let triage = load_triage(cli.config.as_deref())?;

    match cli.command {
        Command::Classify { text } => {
            let hit = triage.classify(&text);
            if cli.json {
                emit_json(&hit)?;
            } else {
                print!("{}", display::render_match(&hit));
            }
        }
        Command::Recommend { category } => {
            let recommendation = triage
                .recommend(category)
                .context("form table has no entry for this category")?;
            if cli.json {
                emit_json(&recommendation)?;
            } else {
                print!("{}", display::render_recommendation(category, &recommendation));
            }
        }
        Command::Autofill { form, profile } => {
            let profile = input::load_profile(profile.profile.as_deref(), &profile.sets)?;
            let fields = triage.autofill(form, &profile);
            if cli.json {
                emit_json(&fields)?;
            } else {
                let schema = triage.schemas().schema_for(form);
                let defaulted = defaulted_fields(&schema, &profile);
                print!("{}", display::render_field_card(form, &fields, &defaulted));
            }
        }
        Command::Triage { text, profile } => {
            let profile = input::load_profile(profile.profile.as_deref(), &profile.sets)?;
            let outcome = triage.run(&text, &profile)?;
            if cli.json {
                emit_json(&outcome)?;
            } else {
                print!("{}", display::render_outcome(&outcome));
            }
        }
        Command::Timeline { form } => {
            let steps = filing_steps(form);
            if cli.json {
                emit_json(&steps)?;
            } else {
                print!("{}", display::render_timeline(form, &steps));
            }
        }
        Command::Intake { messages } => {
            let profile = messages
                .iter()
                .fold(CaseProfile::new(), |profile, message| profile.absorb(message));
            let report = IntakeReport {
                reply: profile.reply(),
                form_link: profile.form_link(),
                steps: case_steps(&profile),
                profile,
            };
            if cli.json {
                emit_json(&report)?;
            } else {
                print!(
                    "{}",
                    display::render_intake(&report.profile, &report.reply, report.form_link.as_ref())
                );
                print!("\n{}", display::render_steps(&report.steps));
            }
        }
        Command::Forms => {
            let schemas: Vec<_> = FormId::ALL
                .into_iter()
                .map(|form| triage.schemas().schema_for(form).into_owned())
                .collect();
            if cli.json {
                emit_json(&schemas)?;
            } else {
                print!("{}", display::render_forms(&schemas));
            }
        }
    }

    Ok(())
}

fn log_level(verbose: u8, quiet: u8) -> LevelFilter {
    match (verbose, quiet) {
        (_, 1) => LevelFilter::ERROR,
        (_, q) if q > 1 => LevelFilter::OFF,
        (0, _) => LevelFilter::WARN,
        (1, _) => LevelFilter::INFO,
        (2, _) => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn init_logging(verbose: u8, quiet: u8) {
    tracing_subscriber::fmt()
        .with_max_level(log_level(verbose, quiet))
        .with_writer(std::io::stderr)
        .init();
}

fn load_triage(config: Option<&Path>) -> anyhow::Result<Triage> {
    let Some(path) = config else {
        return Ok(Triage::builtin());
    };
    let config = TriageConfig::load(path)
        .with_context(|| format!("loading config from {}", path.display()))?;
    Triage::from_config(&config).context("applying config")
}

fn emit_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
