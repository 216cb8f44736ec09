use anyhow::{Context, Result};
use clap::Parser;
use image_renamer_core::{
    apply_plan_with, generate_plan, report, ApplyMode, RenameOptions, RunStatus, DEFAULT_FOLDER,
};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "image-renamer", version)]
#[command(about = "Renames the images in a folder to \"image 1.ext\", \"image 2.ext\", ...")]
struct Cli {
    /// Folder holding the images.
    #[arg(default_value = DEFAULT_FOLDER)]
    folder: PathBuf,
    /// Print what would be renamed without touching any file.
    #[arg(short = 'n', long, default_value_t = false)]
    dry_run: bool,
}

impl Cli {
    fn options(&self) -> RenameOptions {
        RenameOptions {
            folder: self.folder.clone(),
            mode: ApplyMode::from_dry_run(self.dry_run),
        }
    }
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run(&cli.options(), &mut out) {
        Ok(status) => {
            if !status.is_success() {
                tracing::debug!(?status, "run finished with problems");
            }
            ExitCode::from(status.exit_code())
        }
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
}

fn run(options: &RenameOptions, out: &mut impl Write) -> Result<RunStatus> {
    write_lines(out, report::header_lines(options.mode))?;

    let plan = match generate_plan(options) {
        Ok(plan) => plan,
        Err(err) => {
            writeln!(out, "{}", report::list_error_line(&err))
                .context("failed to write report")?;
            return Ok(RunStatus::from(&err));
        }
    };

    if plan.is_empty() {
        writeln!(out, "{}", report::no_images_line(&plan.folder))
            .context("failed to write report")?;
        return Ok(RunStatus::NoImages);
    }

    write_lines(out, report::plan_lines(&plan))?;
    let result = apply_plan_with(&plan, |entry| writeln!(out, "{entry}"))
        .context("failed to write report")?;
    write_lines(out, report::summary_lines(&result))?;

    Ok(RunStatus::from_result(&result))
}

fn write_lines(out: &mut impl Write, lines: Vec<String>) -> Result<()> {
    for line in lines {
        writeln!(out, "{line}").context("failed to write report")?;
    }
    Ok(())
}
