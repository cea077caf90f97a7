use clap::Parser;
use css_map_translator::cli::{self, Cli, Commands};
use css_map_translator::errors::AppError;
use css_map_translator::logger;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    logger::init_logging();
    let cli = Cli::parse();

    let output = match cli.command {
        Commands::Translate(args) => cli::translate_command(args).await?,
        Commands::Check { maps } => cli::check_command(maps).await?,
        Commands::Demo { format } => cli::demo_command(format),
    };
    print!("{}", output);
    Ok(())
}
