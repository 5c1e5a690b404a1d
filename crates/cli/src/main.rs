use clap::{CommandFactory, Parser};

use skillsift::cli::{Cli, Command};
use skillsift::error::ExitCode;

mod cmd_classify;
mod cmd_init;
mod cmd_taxonomy;
mod taxonomy_source;

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    let result = match &cli.command {
        Command::Classify(args) => cmd_classify::run(&cli, args),
        Command::Taxonomy(args) => cmd_taxonomy::run(&cli, args),
        Command::Init(args) => cmd_init::run(args),
        Command::Completions(args) => {
            let mut cmd = Cli::command();
            clap_complete::generate(args.shell, &mut cmd, "skillsift", &mut std::io::stdout());
            Ok(ExitCode::Success)
        }
    };

    match result {
        Ok(code) => code.into(),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::ConfigError.into()
        }
    }
}

fn init_tracing(cli: &Cli) {
    let verbose = matches!(&cli.command, Command::Classify(args) if args.verbose);
    let default = if verbose { "skillsift=debug" } else { "skillsift=warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_env("SKILLSIFT_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
