// Import and re-export the `error` module
pub use self::error::{Error, Result};
mod error;

use clap::Parser;
use cli::{Cli, Commands};

mod chat;
mod cli;
mod convert;
mod logging;
mod terminal;

fn main() -> Result<()> {
    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> Result<()> {
    logging::init()?;
    dotenvy::dotenv().ok();

    let args = Cli::parse();

    match &args.command {
        Commands::Version => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        }
        Commands::Chat { endpoint } => {
            runtime()?.block_on(chat::run(endpoint))?;
        }
        Commands::Convert {
            sb3_file,
            output,
            api_key,
            api_base,
            model,
        } => {
            let provider =
                convert::ProviderConfig::require(api_key.clone(), api_base.clone(), model.clone())?;
            let script = runtime()?.block_on(convert::run(sb3_file, output, provider))?;
            println!(
                "Conversion successful! Pygame project saved in: {}",
                output.display()
            );
            println!("To run: python {}", script.display());
        }
    }

    Ok(())
}

/// The widget is single-threaded; a current-thread runtime is enough.
fn runtime() -> Result<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}
