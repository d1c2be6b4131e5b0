use anyhow::Context;
use clap::{Parser, Subcommand};
use folio_app::modules::books::seed::seed_catalog;
use folio_kernel::settings::Settings;

#[derive(Debug, Parser)]
#[command(name = "folioctl", version, about = "Operate the folio bookstore service")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP service
    Serve {
        /// Overrides `server.port` and `PORT`
        #[arg(long)]
        port: Option<u16>,
        /// Overrides `catalog.async_delay_ms`
        #[arg(long)]
        async_delay_ms: Option<u64>,
    },
    /// Print the seed catalog as JSON
    Catalog {
        #[arg(long)]
        pretty: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve {
            port,
            async_delay_ms,
        } => {
            let mut settings =
                Settings::load().with_context(|| "failed to load folio settings")?;
            if let Some(port) = port {
                settings.server.port = port;
            }
            if let Some(delay) = async_delay_ms {
                settings.catalog.async_delay_ms = delay;
            }

            folio_telemetry::init(&settings.telemetry)?;
            tracing::info!(
                env = ?settings.environment,
                port = settings.server.port,
                "folioctl serve starting"
            );
            folio_app::run(settings).await
        }
        Command::Catalog { pretty } => {
            let catalog = seed_catalog();
            let rendered = if pretty {
                serde_json::to_string_pretty(&catalog)
            } else {
                serde_json::to_string(&catalog)
            }
            .context("failed to render catalog")?;
            println!("{}", rendered);
            Ok(())
        }
    }
}
