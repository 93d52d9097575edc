use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::batch::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, run_batch};
use payroll_engine::config::{AccrualPolicy, ConfigLoader, DEFAULT_POLICY_PATH};

#[derive(Parser)]
#[command(name = "payroll-engine", version, about = "Weekly overtime payroll engine")]
struct Cli {
    /// Accrual policy YAML file (defaults to config/policy.yaml if present, else 40h/48h, 1.5x/2x)
    #[arg(long, global = true)]
    policy: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute payroll from a file and write the results
    Run {
        /// Payroll payload (JSON, or YAML by extension)
        #[arg(short, long, default_value = DEFAULT_INPUT_PATH)]
        input: PathBuf,

        /// Where to write the results
        #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
        output: PathBuf,
    },
    /// Serve the HTTP API
    Serve {
        /// Address to listen on
        #[arg(long, env = "PAYROLL_ENGINE_ADDR", default_value = "127.0.0.1:3000")]
        addr: String,
    },
}

async fn serve(addr: &str, policy: AccrualPolicy) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %addr, "Payroll engine listening");
    axum::serve(listener, create_router(AppState::new(policy))).await
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let policy = match ConfigLoader::resolve_policy(cli.policy.as_deref(), DEFAULT_POLICY_PATH) {
        Ok(policy) => policy,
        Err(err) => {
            eprintln!("Error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Command::Run { input, output } => match run_batch(&input, &output, &policy) {
            Ok(results) => {
                match serde_json::to_string_pretty(&results) {
                    Ok(json) => println!("{}", json),
                    Err(err) => eprintln!("Error: {}", err),
                }
                println!("Results saved to {}", output.display());
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("Error: {}", err);
                ExitCode::FAILURE
            }
        },
        Command::Serve { addr } => match serve(&addr, policy).await {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("Error: {}", err);
                ExitCode::FAILURE
            }
        },
    }
}
