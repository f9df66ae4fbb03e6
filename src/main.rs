mod api;
mod server;

use clap::{Args, Parser, Subcommand};
use credibility_engine::config::{default_config_path, EngineConfig};
use credibility_engine::{format_percent, CredibilityEngine};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "credibility", about = "News credibility scoring")]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Score a single text read from --text or stdin.
    Analyze(AnalyzeArgs),
    /// Run the HTTP service.
    Serve(ServeArgs),
    /// Write the default configuration file.
    InitConfig(InitConfigArgs),
}

#[derive(Args, Debug, Clone, Default)]
struct AnalyzeArgs {
    #[arg(long)]
    text: Option<String>,
    /// Print the verdict as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    #[arg(long)]
    host: Option<String>,
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug, Clone)]
struct InitConfigArgs {
    #[arg(long)]
    path: Option<PathBuf>,
    #[arg(long)]
    force: bool,
}

#[tokio::main]
async fn main() {
    load_dotenv();
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Analyze(AnalyzeArgs::default()));

    match command {
        Command::Analyze(args) => {
            let (config, _) = EngineConfig::load(cli.config)?;
            run_analyze(args, &config)
        }
        Command::Serve(args) => {
            let (config, _) = EngineConfig::load(cli.config)?;
            server::serve(args, config).await
        }
        Command::InitConfig(args) => run_init_config(args, cli.config),
    }
}

fn run_analyze(args: AnalyzeArgs, config: &EngineConfig) -> Result<(), String> {
    let text = read_text(args.text)?;
    let engine = CredibilityEngine::from_config(config);
    let verdict = engine
        .evaluate(&text)
        .map_err(|err| format!("{} ({})", err, err.kind()))?;

    if args.json {
        let payload = serde_json::to_string_pretty(&verdict)
            .map_err(|err| format!("failed to serialize verdict: {}", err))?;
        println!("{}", payload);
        return Ok(());
    }

    println!(
        "Credibility score: {} ({})",
        verdict.score,
        verdict.status.label()
    );
    println!(
        "Model prediction: {} (real {} | fake {})",
        verdict.model_prediction.label(),
        format_percent(verdict.confidence_real),
        format_percent(verdict.confidence_fake)
    );
    println!(
        "Indicators: emotional {:?} | sources {:?} | bias {:?} | fact check {:?}",
        verdict.indicators.emotional,
        verdict.indicators.sources,
        verdict.indicators.bias,
        verdict.indicators.fact_check
    );

    println!("\nRecommendations:");
    for recommendation in &verdict.recommendations {
        println!("- {}", recommendation);
    }

    Ok(())
}

fn run_init_config(args: InitConfigArgs, global: Option<PathBuf>) -> Result<(), String> {
    let path = args
        .path
        .or(global)
        .or_else(default_config_path)
        .ok_or_else(|| "no config path available".to_string())?;
    if path.exists() && !args.force {
        return Err(format!(
            "{} already exists; pass --force to overwrite",
            path.display()
        ));
    }
    EngineConfig::default().write(&path)?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn read_text(arg: Option<String>) -> Result<String, String> {
    if let Some(text) = arg {
        if !text.trim().is_empty() {
            return Ok(text);
        }
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|err| format!("failed reading stdin: {}", err))?;
    if buffer.trim().is_empty() {
        return Err("missing article text: pass --text or pipe stdin".to_string());
    }
    Ok(buffer)
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("CREDIBILITY_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let manifest_path = Path::new(manifest_dir).join(".env");
    let _ = dotenvy::from_path(manifest_path);
}
