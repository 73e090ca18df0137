use clap::{Parser, Subcommand};
use envstrap::{AppError, PublishOptions, UnpublishOptions};

#[derive(Parser)]
#[command(name = "envstrap")]
#[command(version)]
#[command(
    about = "Publish per-environment config files and wire the environment detector",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the default envstrap.toml into the current directory
    #[command(visible_alias = "i")]
    Init,
    /// Generate the env config files and the bootstrap hook
    #[command(visible_alias = "p")]
    Publish {
        /// Publish everything [default]
        #[arg(short, long)]
        all: bool,
        /// (Re)write the detector script and bootstrap hook
        #[arg(short, long)]
        bootstrap: bool,
        /// (Over)write the .env config files
        #[arg(short, long)]
        configs: bool,
    },
    /// Remove the published files and restore the bootstrap file
    #[command(visible_alias = "u")]
    Unpublish {
        /// Remove everything [default]
        #[arg(short, long)]
        all: bool,
        /// Remove the detector script and restore the bootstrap file
        #[arg(short, long)]
        bootstrap: bool,
        /// Remove the .env config files and the settings file
        #[arg(short, long)]
        configs: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Init => envstrap::init(),
        Commands::Publish { all, bootstrap, configs } => {
            envstrap::publish(PublishOptions { all, bootstrap, configs })
        }
        Commands::Unpublish { all, bootstrap, configs } => {
            envstrap::unpublish(UnpublishOptions { all, bootstrap, configs })
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
