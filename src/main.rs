use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use deckband::{BandOutcome, Error, SkipReason, populate};

/// Populate a slide deck template description with tabular market data,
/// paginating bands that overflow onto a continuation slide.
#[derive(Parser)]
#[command(name = "deckband", version, about)]
struct Args {
    /// Deck template description (JSON)
    template: PathBuf,

    /// Population job: bands, rows, headline facts (JSON)
    job: PathBuf,

    /// Where to write the populated deck (JSON)
    #[arg(short, long, default_value = "populated.json")]
    output: PathBuf,

    /// Print the full run report as JSON instead of a summary
    #[arg(long)]
    report: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let mut deck = deckband::load_deck(&args.template)?;
    let job = deckband::load_job(&args.job)?;

    let report = populate(&mut deck, &job, None)?;

    deckband::save_deck(&deck, &args.output)?;

    if args.report {
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| Error::InvalidJob(e.to_string()))?;
        println!("{json}");
    } else {
        for band in &report.bands {
            match band.outcome {
                BandOutcome::Rendered {
                    rows_on_origin,
                    rows_on_continuation,
                } => println!(
                    "{}: rendered ({rows_on_origin} on origin, {rows_on_continuation} continued)",
                    band.id
                ),
                BandOutcome::Skipped(SkipReason::NotInTemplate) => {
                    println!("{}: skipped (not in template)", band.id)
                }
                BandOutcome::Skipped(SkipReason::NoData) => {
                    println!("{}: skipped (no data)", band.id)
                }
            }
        }
        if let Some(slide) = report.continuation_slide {
            println!("continuation slide: {slide}");
        }
    }

    Ok(())
}
