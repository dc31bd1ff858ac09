mod inspect;
mod render;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::inspect::SelectionArgs;

#[derive(Debug, Parser)]
#[command(name = "varpick-cli")]
#[command(about = "Inspect variant selection and pricing for a product snapshot")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List selectable dimensions and their values
    Domain {
        /// Snapshot path, or a product id looked up in `VARPICK_CATALOG_DIR`
        product: String,
    },
    /// Apply selections and print the derived product view
    View {
        product: String,
        #[command(flatten)]
        selection: SelectionArgs,
        /// Hovered value for the preview image, as NAME=VALUE
        #[arg(long, value_parser = inspect::parse_pair)]
        hover: Option<(String, String)>,
        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check whether an attribute value is still reachable
    Available {
        product: String,
        #[arg(long)]
        attribute: String,
        #[arg(long)]
        value: String,
        #[command(flatten)]
        selection: SelectionArgs,
    },
    /// Resolve the display price for a selection
    Price {
        product: String,
        #[command(flatten)]
        selection: SelectionArgs,
    },
    /// Report catalog consistency issues
    Validate { product: String },
}

fn main() -> anyhow::Result<()> {
    let config = varpick_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(
        env = %config.env,
        strict_validation = config.strict_validation,
        "configuration loaded"
    );

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Domain { product }) => inspect::run_domain(&config, &product),
        Some(Commands::View {
            product,
            selection,
            hover,
            json,
        }) => inspect::run_view(&config, &product, &selection, hover.as_ref(), json),
        Some(Commands::Available {
            product,
            attribute,
            value,
            selection,
        }) => inspect::run_available(&config, &product, &selection, &attribute, &value),
        Some(Commands::Price { product, selection }) => {
            inspect::run_price(&config, &product, &selection)
        }
        Some(Commands::Validate { product }) => inspect::run_validate(&config, &product),
        None => {
            println!("varpick-cli ready; run with --help for commands");
            Ok(())
        }
    }
}
