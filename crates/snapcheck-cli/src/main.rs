//! snapcheck - headless screenshot verification for the calculator pages
//!
//! Usage:
//!   snapcheck                   Capture the three calculator pages
//!   snapcheck --verbose         Same, with debug logging
//!   snapcheck --base-url <url>  Point at a server other than localhost:3000
//!
//! The dev server must already be running; snapcheck only looks at it.
//! Exit status is zero when every screenshot was written, nonzero on the
//! first fault.

use anyhow::Result;
use clap::Parser;
use snapcheck_browser::run_verification;
use snapcheck_core::{RunnerConfig, VerificationPlan};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "snapcheck")]
#[command(version, about = "Headless screenshot verification for the calculator pages")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Base address of the running application
    #[arg(long, default_value = "http://localhost:3000")]
    base_url: String,

    /// Directory screenshots are written to
    #[arg(long, default_value = "verification")]
    out_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = RunnerConfig {
        base_url: cli.base_url,
        out_dir: cli.out_dir,
        ..RunnerConfig::default()
    };
    let plan = VerificationPlan::builtin();

    info!("Verifying {} page(s) on {}", plan.len(), config.base_url);

    let reports = run_verification(&plan, &config).await?;

    println!("Captured {} screenshot(s):", reports.len());
    for report in &reports {
        println!(
            "  {} -> {} ({} bytes)",
            report.route,
            report.output.display(),
            report.size_bytes
        );
    }

    Ok(())
}
