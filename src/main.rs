//! `scripture-linker` - turn Bible references in Markdown notes into links.

use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use scripture_linker::utils::notes::{self, NoteOutcome};
use scripture_linker::{link_references, scan, Config, LinkService, Settings, Translation};

#[derive(Parser, Debug)]
#[command(name = "scripture-linker")]
#[command(version, about = "Find Bible references in Markdown and link them to Logos or Bolls")]
#[command(after_help = "EXAMPLES:
    echo 'Read John 3:16' | scripture-linker      Link stdin to stdout
    scripture-linker notes/ --write               Rewrite every note in place
    scripture-linker sermon.md --json             List the references found
    scripture-linker --notes --check              Fail if any note needs linking
    scripture-linker --list-translations          Show the supported translations")]
struct Args {
    /// Notes or directories to process (reads stdin when empty)
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// Translation to link to (ESV, NASB95, NIV, KJV, NKJV, MSG, LSB, LEB)
    #[arg(short, long)]
    translation: Option<Translation>,

    /// Link service: logos, bolls or both
    #[arg(short, long)]
    service: Option<LinkService>,

    /// Process the notes directory from SCRIPTURE_NOTES_PATH
    #[arg(long, conflicts_with = "paths")]
    notes: bool,

    /// Rewrite notes in place
    #[arg(short, long, conflicts_with = "check")]
    write: bool,

    /// Print the references found as JSON instead of linking
    #[arg(long, conflicts_with_all = ["write", "check"])]
    json: bool,

    /// Exit with a failure status if anything would change
    #[arg(long)]
    check: bool,

    /// List the supported translations and exit
    #[arg(long, exclusive = true)]
    list_translations: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();

    if args.list_translations {
        list_translations();
        return ExitCode::SUCCESS;
    }

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<ExitCode> {
    let config = Config::load().context("Failed to load configuration")?;
    tracing::debug!("{} {}", config.app_name(), config.app_version());

    let settings = Settings {
        translation: args.translation.unwrap_or(config.settings.translation),
        link_service: args.service.unwrap_or(config.settings.link_service),
    }
    .normalized();

    let paths = if args.notes {
        let Some(dir) = config.notes_path else {
            bail!("--notes needs SCRIPTURE_NOTES_PATH to point at a directory");
        };
        vec![dir]
    } else {
        args.paths.clone()
    };

    if paths.is_empty() {
        return run_stdin(args, &settings);
    }

    let mut files = Vec::new();
    for path in &paths {
        if path.is_dir() {
            files.extend(notes::collect_notes(path)?);
        } else if path.is_file() {
            files.push(path.clone());
        } else {
            bail!("No such file or directory: {}", path.display());
        }
    }

    if args.json {
        return print_json(&files);
    }

    let mut changed = 0;
    let mut failed = 0;
    for result in notes::link_notes(&files, &settings, args.write) {
        match result {
            Ok(outcome) => {
                if outcome.changed {
                    changed += 1;
                    report(&outcome, args.write);
                }
            }
            Err(e) => {
                failed += 1;
                eprintln!("error: {e}");
            }
        }
    }

    if failed > 0 || (args.check && changed > 0) {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn list_translations() {
    for translation in Translation::all() {
        let bolls = if translation.config().supports_bolls { "logos, bolls" } else { "logos" };
        println!("{:<7} {:<32} {bolls}", translation.code(), translation.name());
    }
}

fn report(outcome: &NoteOutcome, written: bool) {
    let verb = if written { "linked" } else { "would link" };
    println!(
        "{}: {verb} {} of {} references",
        outcome.path.display(),
        outcome.linked,
        outcome.found
    );
}

fn run_stdin(args: &Args, settings: &Settings) -> Result<ExitCode> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input).context("Failed to read stdin")?;

    if args.json {
        let json = serde_json::to_string_pretty(&scan(&input))?;
        println!("{json}");
        return Ok(ExitCode::SUCCESS);
    }

    let report = link_references(&input, settings);
    if args.check {
        return Ok(if report.changed() { ExitCode::FAILURE } else { ExitCode::SUCCESS });
    }

    io::stdout().write_all(report.text.as_bytes()).context("Failed to write stdout")?;
    Ok(ExitCode::SUCCESS)
}

fn print_json(files: &[PathBuf]) -> Result<ExitCode> {
    let mut entries = Vec::with_capacity(files.len());
    for path in files {
        let content = fs_err::read_to_string(path)?;
        entries.push(serde_json::json!({
            "path": path,
            "references": scan(&content),
        }));
    }
    println!("{}", serde_json::to_string_pretty(&entries)?);
    Ok(ExitCode::SUCCESS)
}
