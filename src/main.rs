use clap::Parser;

use userql::cli::{Cli, Commands};
use userql::config::{get_config, init_config};
use userql::runtime::modes::{run_config_gen, run_server};
use userql::system::init_logging;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_config(cli.config.as_deref());

    match cli.command_or_default() {
        Commands::ConfigGen { output, force } => {
            if let Err(e) = run_config_gen(output.as_deref(), force) {
                eprintln!("{}", e.format_simple());
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Serve => {
            let config = get_config();
            // Guard must live until the server exits so buffered logs get flushed
            let _log_guard = init_logging(&config.logging)?;
            run_server().await
        }
    }
}
