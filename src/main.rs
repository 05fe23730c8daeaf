use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use clap::error::ErrorKind;
use fin_summary::{EntityCode, FsClient, pipeline};

const USAGE: &str = "usage: fin-summary <CODE>\nexample: fin-summary 095660";

/// Save a company's annual and quarterly financial summary as CSV.
#[derive(Parser, Debug)]
#[command(name = "fin-summary", version)]
struct Cli {
    /// Company code, e.g. 095660
    code: String,

    /// Directory the CSV is written to
    #[arg(long, default_value = "output")]
    out_dir: PathBuf,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(_) => {
            println!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing();

    let code = match EntityCode::new(&cli.code) {
        Ok(code) => code,
        Err(_) => {
            println!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    let client = match FsClient::builder()
        .timeout(Duration::from_secs(cli.timeout_secs))
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match pipeline::run(&client, &code, &cli.out_dir).await {
        Ok(path) => {
            println!("saved: {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            let kind = if e.is_transport() { "network error" } else { "data error" };
            eprintln!("{kind}: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(feature = "tracing-subscriber")]
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt};

    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(not(feature = "tracing-subscriber"))]
fn init_tracing() {}
