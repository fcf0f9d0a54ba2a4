use clap::Parser;
use tracing_subscriber::EnvFilter;

use langpack_guard::cli::{Cli, Commands};
use langpack_guard::commands::{run_check, run_config, run_init};

/// Default log filter for the given verbosity, used when `RUST_LOG` is unset.
const fn default_log_filter(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "langpack_guard=info,warn",
        2 => "langpack_guard=debug,warn",
        _ => "langpack_guard=trace,info",
    }
}

fn init_logging(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_filter(cli.verbose, cli.quiet)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Init(args) => run_init(args),
        Commands::Config(args) => run_config(args, &cli),
    };

    std::process::exit(exit_code);
}
