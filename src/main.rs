use anyhow::{Context, Result};
use clap::Parser;
use langcheck::{Config, Language, LanguageCodeValidator};
use serde::Serialize;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Check codes against the ISO 639-3 code table"
)]
struct Args {
    /// Codes to check, e.g. `eng` or `en`
    #[arg(required = true)]
    codes: Vec<String>,
    /// Print the matching table entry instead of true/false
    #[arg(long)]
    describe: bool,
    /// One JSON object per line
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    code: &'a str,
    real: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<Language>,
}

fn print_report(report: &Report<'_>, args: &Args) -> Result<()> {
    if args.json {
        println!("{}", serde_json::to_string(report)?);
        return Ok(());
    }
    match (&report.language, args.describe) {
        (Some(lang), _) => println!(
            "{}\t{}\t{}\t{}\t{}",
            report.code,
            lang.id,
            lang.ref_name.as_deref().unwrap_or("-"),
            lang.scope.as_ref().map_or("-".to_string(), |s| s.to_string()),
            lang.language_type
                .as_ref()
                .map_or("-".to_string(), |t| t.to_string()),
        ),
        (None, true) => println!("{}\tnot found", report.code),
        (None, false) => println!("{}\t{}", report.code, report.real),
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    // ─── 2) configure ───────────────────────────────────────────────
    let cfg = Config::from_env().context("reading configuration")?;
    info!(url = %cfg.table_url, timeout = ?cfg.timeout, "checking {} code(s)", args.codes.len());
    let validator = LanguageCodeValidator::from_config(&cfg)?;

    // ─── 3) one lookup per code ─────────────────────────────────────
    let mut all_real = true;
    for code in &args.codes {
        let report = if args.describe {
            let language = validator.lookup(code).await;
            Report {
                code,
                real: language.is_some(),
                language,
            }
        } else {
            Report {
                code,
                real: validator.is_real_language(code).await,
                language: None,
            }
        };
        all_real &= report.real;
        print_report(&report, &args)?;
    }

    Ok(if all_real {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
