use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use stageline::cli::{Cli, Commands, Display, OutputFormat};
use stageline::config::StagelineConfig;
use stageline::driver::{JobOutcome, SimulatedDriver};
use stageline::error::Result;
use stageline::events::{progress_channel, StageUpdate};
use stageline::signal::CancelFlag;
use stageline::stage::STAGES;
use stageline::tracker::{StageProgressTracker, TrackerInput};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            Display::new(&Default::default()).print_error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("stageline=debug")
    } else {
        EnvFilter::new("stageline=info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => StagelineConfig::load(path).await?,
        None => StagelineConfig::default(),
    };
    let display = Display::new(&config.display);

    match cli.command {
        Commands::Run { stage_secs } => {
            let secs = stage_secs.unwrap_or(config.driver.stage_secs);
            run_job(&display, cli.output, secs).await
        }
        Commands::Stages => {
            match cli.output {
                OutputFormat::Text => display.print_stage_catalogue(),
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&STAGES.to_vec())?);
                }
            }
            Ok(())
        }
        Commands::Show { stage, message } => {
            let tracker = StageProgressTracker::new(|| {});
            let view = tracker.view(&TrackerInput {
                current_stage_id: &stage,
                status_message: &message,
            });
            match cli.output {
                OutputFormat::Text => display.print_frame(&view),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
            }
            Ok(())
        }
    }
}

/// Drive a simulated job and re-render the view on every stage change.
/// Ctrl-C is forwarded through the tracker as a cancel request; the driver
/// stops at its next stage boundary and the host exits after it does.
async fn run_job(display: &Display, output: OutputFormat, stage_secs: u64) -> Result<()> {
    let cancel = CancelFlag::new();
    let forwarded = cancel.clone();
    let tracker = StageProgressTracker::new(move || forwarded.request());

    let (tx, mut rx) = progress_channel(StageUpdate::new("").with_message("Warming up"));
    let driver = SimulatedDriver::new(cancel.clone(), Duration::from_secs(stage_secs));
    let job = tokio::spawn(async move { driver.run(&tx).await });

    display.print_header("Generating your plan");
    let mut spinner = Some(display.create_spinner("Waiting for the first stage"));

    loop {
        tokio::select! {
            changed = rx.changed() => {
                if changed.is_err() {
                    // Driver finished and dropped its sender.
                    break;
                }
                if let Some(pb) = spinner.take() {
                    pb.finish_and_clear();
                }
                let update = rx.borrow_and_update().clone();
                let view = tracker.view(&TrackerInput {
                    current_stage_id: &update.stage_id,
                    status_message: &update.message,
                });
                match output {
                    OutputFormat::Text => display.print_frame(&view),
                    OutputFormat::Json => println!("{}", serde_json::to_string(&view)?),
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracker.request_cancel();
                display.print_info("Cancelling, the job stops at the next stage boundary");
            }
        }
    }

    match job.await? {
        JobOutcome::Completed => display.print_success("Plan generation finished"),
        JobOutcome::Cancelled => display.print_info("Plan generation cancelled"),
    }
    Ok(())
}
