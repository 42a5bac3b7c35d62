// SPDX-License-Identifier: AGPL-3.0-only
// Minimal bootstrap; loading, plotting and serving live in the library.
use anyhow::{Context, Result};
use artistat::{server, ReportPipeline, Settings};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug, Clone)]
#[command(name = "artistat", about = "Charts and summaries for a research artifact table")]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Render the three charts and print their summaries.
    Plot {
        #[arg(long, value_name = "CSV")]
        data: Option<PathBuf>,
        #[arg(long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
        #[arg(long)]
        threshold: Option<usize>,
        /// Draw in memory only; no image is written.
        #[arg(long)]
        dry_run: bool,
    },
    /// Serve the companion web page.
    Serve {
        port: Option<u16>,
        #[arg(long)]
        root: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .init();
    let cli = Cli::parse();
    let mut settings = Settings::load().context("loading settings")?;
    let command = cli.cmd.unwrap_or(Command::Plot {
        data: None,
        output_dir: None,
        threshold: None,
        dry_run: false,
    });
    match command {
        Command::Plot {
            data,
            output_dir,
            threshold,
            dry_run,
        } => {
            if let Some(data) = data {
                settings.data_path = data;
            }
            if let Some(output_dir) = output_dir {
                settings.output_dir = output_dir;
            }
            if let Some(threshold) = threshold {
                settings.aggregation_threshold = threshold;
            }
            plot(settings, dry_run)
        }
        Command::Serve { port, root } => {
            if let Some(port) = port {
                settings.server.port = port;
            }
            if let Some(root) = root {
                settings.server.root = root;
            }
            server::serve(&settings.server)
                .await
                .context("static server failed")
        }
    }
}

fn plot(settings: Settings, dry_run: bool) -> Result<()> {
    let pipeline = ReportPipeline::new(settings).with_dry_run(dry_run);
    let stdout = std::io::stdout();
    let outcome = pipeline.run(&mut stdout.lock()).with_context(|| {
        format!(
            "building report from {}",
            pipeline.settings().data_path.display()
        )
    })?;
    info!(
        output_dir = %pipeline.settings().output_dir.display(),
        written = outcome.written.len(),
        skipped = outcome.skipped.len(),
        "report finished"
    );
    Ok(())
}
