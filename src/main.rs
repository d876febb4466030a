use std::{io, process::ExitCode};

use anyhow::Result;
use clap::Parser;
use gh_auth_guide::remote;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Print diagnostics to stderr (repeat for more)
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.verbose);

    let stdout = io::stdout();
    let stderr = io::stderr();
    let result = gh_auth_guide::run(&mut stdout.lock(), &mut stderr.lock()).await;
    let url = match result {
        Ok(url) => url,
        Err(e) => match remote::spawn_failure_code(&e) {
            Some(code) => {
                eprintln!("Error: {e:?}");
                return Ok(ExitCode::from(code));
            }
            None => return Err(e),
        },
    };
    info!(code = url.code(), "git finished");
    Ok(url.exit_code())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_args() {
        Args::command().debug_assert();
    }

    #[test]
    fn verbose_counts_occurrences() {
        assert_eq!(Args::try_parse_from(["gh-auth-guide"]).unwrap().verbose, 0);
        assert_eq!(Args::try_parse_from(["gh-auth-guide", "-vvv"]).unwrap().verbose, 3);
        assert_eq!(
            Args::try_parse_from(["gh-auth-guide", "-v", "--verbose"]).unwrap().verbose,
            2
        );
    }
}
