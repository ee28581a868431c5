//! gearbox-search - tooth-count calculator for differential planetary gearboxes
//!
//! Prompts for the outside-diameter envelope (unless given as flags), asks for
//! confirmation, runs the combination search and prints the resulting table.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use gearbox_search::cli::{confirm, CliArgs};
use gearbox_search::display::SolutionsDisplayExt;
use gearbox_search::export::save_csv;
use gearbox_search::gearbox_errors::write_report;
use gearbox_search::progress::{ProgressReporter, Silent};
use gearbox_search::search::{CombinationSearch, SearchOutcome};

fn setup_logging(verbose: bool, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else if verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("warning: a global tracing subscriber is already installed");
    }
}

fn print_banner() {
    println!(
        "************************************************
*   Differential planetary gearbox calculator  *
*      gearbox-search v{:<24}*
************************************************",
        env!("CARGO_PKG_VERSION")
    );
}

fn reporter(quiet: bool) -> Box<dyn ProgressReporter> {
    if quiet {
        return Box::new(Silent);
    }
    #[cfg(feature = "progress")]
    {
        Box::new(gearbox_search::progress::SpinnerProgress::new())
    }
    #[cfg(not(feature = "progress"))]
    {
        Box::new(gearbox_search::progress::CounterPrinter::new(io::stdout()))
    }
}

fn run(args: &CliArgs) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();

    if args.min_od.is_none() || args.max_od.is_none() {
        writeln!(stdout, ">>> Enter parameters:")?;
    }
    let bounds = args
        .resolve_bounds(&mut input, &mut stdout)
        .context("reading search bounds")?;

    if !args.yes && !confirm(&mut input, &mut stdout)? {
        info!("calculation cancelled");
        return Ok(());
    }

    writeln!(stdout)?;
    writeln!(stdout, " Please wait, it may take several minutes...")?;
    write!(stdout, "Results: ")?;
    stdout.flush()?;

    let search = CombinationSearch::new(bounds);
    let mut progress = reporter(args.quiet);
    match search.run(progress.as_mut())? {
        SearchOutcome::Infeasible(why) => {
            writeln!(stdout)?;
            writeln!(stdout, "{why}")?;
        }
        SearchOutcome::Completed(report) => {
            writeln!(stdout, "Calculation finished.")?;
            write!(stdout, "{}", report.solutions.show())?;

            if let Some(path) = &args.csv {
                save_csv(&report.solutions, path)
                    .with_context(|| format!("writing {}", path.display()))?;
                info!(path = %path.display(), rows = report.solutions.len(), "solutions written");
            }
        }
    }

    Ok(())
}

fn main() {
    // Record the call stack of errors unless the user chose otherwise.
    if std::env::var_os("RUST_BACKTRACE").is_none()
        && std::env::var_os("RUST_LIB_BACKTRACE").is_none()
    {
        std::env::set_var("RUST_LIB_BACKTRACE", "1");
    }

    let args = CliArgs::parse();
    setup_logging(args.verbose, args.quiet);
    print_banner();

    if let Err(e) = run(&args) {
        error!("{e:#}");
        if write_report(&e, &mut io::stderr()).is_err() {
            eprintln!("Error message: {e:#}");
        }
    }
}
