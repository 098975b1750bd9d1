//! CLI Adapter.

mod init;
mod logging;
mod output;
mod prompts;

use std::path::PathBuf;

use clap::Parser;

use crate::domain::Target;

#[derive(Parser)]
#[command(name = "strap")]
#[command(version)]
#[command(
    about = "Create an npm package boilerplate with TypeScript, Vitest, ESLint, Prettier and Husky",
    long_about = None
)]
struct Cli {
    /// Package name; skips the name prompt
    #[arg(short, long)]
    name: Option<String>,
    /// Target platform (node, web)
    #[arg(short, long)]
    target: Option<Target>,
    /// Approve the fixed setup and accept defaults without asking
    #[arg(short = 'y', long)]
    yes: bool,
    /// Skip npm name validation and the registry availability lookup
    #[arg(long)]
    skip_name_check: bool,
    /// Skip the online, Node LTS and git checks
    #[arg(long)]
    skip_env_checks: bool,
    /// Configuration file (defaults to $STRAP_CONFIG)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Log executed commands and requests
    #[arg(short, long)]
    verbose: bool,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // Help and version go to stdout and succeed; usage errors exit 1.
            std::process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };
    logging::init(cli.verbose);

    let options = init::InitArgs {
        name: cli.name,
        target: cli.target,
        yes: cli.yes,
        skip_name_check: cli.skip_name_check,
        skip_env_checks: cli.skip_env_checks,
        config: cli.config,
    };

    if let Err(e) = init::run_init(options) {
        output::error(&format!("Error: {}", e));
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_all_flags() {
        let cli = Cli::try_parse_from([
            "strap",
            "--name",
            "@acme/tool",
            "--target",
            "web",
            "--yes",
            "--skip-name-check",
            "--skip-env-checks",
            "--config",
            "strap.toml",
            "-v",
        ])
        .unwrap();

        assert_eq!(cli.name.as_deref(), Some("@acme/tool"));
        assert_eq!(cli.target, Some(Target::Web));
        assert!(cli.yes && cli.skip_name_check && cli.skip_env_checks && cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("strap.toml")));
    }

    #[test]
    fn browser_is_accepted_as_web() {
        let cli = Cli::try_parse_from(["strap", "-t", "browser"]).unwrap();
        assert_eq!(cli.target, Some(Target::Web));
    }

    #[test]
    fn unknown_target_is_rejected() {
        assert!(Cli::try_parse_from(["strap", "--target", "deno"]).is_err());
    }
}
