use clap::Parser;

use csv_guard::cli::{Cli, Commands};
use csv_guard::commands::{run_init, run_template, run_validate};
use csv_guard::logging::{LogConfig, init_logging};
use csv_guard::output::ColorMode;

fn main() {
    let cli = Cli::parse();

    let log_config = LogConfig::from_verbosity(cli.verbose, cli.quiet)
        .with_format(cli.log_format)
        .with_ansi(ColorMode::from(cli.color) != ColorMode::Never);
    if let Err(e) = init_logging(&log_config) {
        eprintln!("Failed to initialize logging: {e}");
    }

    let exit_code = match &cli.command {
        Commands::Validate(args) => run_validate(args, &cli),
        Commands::Template(args) => run_template(args),
        Commands::Init(args) => run_init(args),
    };

    std::process::exit(exit_code);
}
