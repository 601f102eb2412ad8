/*
[INPUT]:  CLI arguments, YAML configuration, account secret file
[OUTPUT]: Signed checkouts submitted to the network, JSON results on stdout
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or checkout wiring
*/

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use smartlike_checkout::{
    CheckoutOutcome, CheckoutParams, CheckoutRequest, CheckoutSession, ClientConfig, NetworkClient,
    OutcomeState, ResultSink, generate_mnemonic,
};
use smartlike_checkout_cli::CliConfig;

/// Channel label for outcomes printed to stdout
const STDOUT_CALLBACK: &str = "stdout";

#[derive(Parser, Debug)]
#[command(
    name = "smartlike-checkout",
    version,
    about = "Sign and submit Smartlike transactions from the command line"
)]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "network", value_name = "URL")]
    network_address: Option<String>,
    #[arg(long = "secret-file", value_name = "PATH")]
    secret_file: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a new account secret and print it
    Generate,
    /// Sign a session token without touching the network
    Login {
        #[arg(long)]
        token: String,
        #[arg(long)]
        title: Option<String>,
    },
    /// Create a monthly recurring donation
    Subscribe {
        #[arg(long)]
        recipient: String,
        #[arg(long)]
        token: String,
        #[arg(long)]
        amount: Option<f64>,
        #[arg(long)]
        currency: Option<String>,
        #[arg(long)]
        title: Option<String>,
    },
    /// Donate to a creator, with an optional published comment
    Donate {
        #[arg(long)]
        recipient: String,
        #[arg(long)]
        amount: Option<f64>,
        #[arg(long)]
        currency: Option<String>,
        #[arg(long)]
        comment: Option<String>,
        #[arg(long)]
        title: Option<String>,
    },
    /// Send a micro-donation to a content URL
    Like {
        #[arg(long)]
        recipient: String,
        #[arg(long)]
        amount: Option<f64>,
        #[arg(long)]
        currency: Option<String>,
        #[arg(long)]
        title: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    if matches!(args.command, Command::Generate) {
        let secret = generate_mnemonic().context("generate account secret")?;
        println!("{}", secret.as_str());
        eprintln!("Keep a backup of this phrase; it is the only way to access the account.");
        return Ok(());
    }

    let config = load_config(&args)?;
    info!(
        network = config
            .network_address
            .as_deref()
            .unwrap_or("https://smartlike.org/network"),
        "configuration resolved"
    );

    let callback = config.callback.as_deref().unwrap_or(STDOUT_CALLBACK);
    let request = CheckoutRequest::from_params(checkout_params(&args.command, callback))?;
    let client = match &config.network_address {
        Some(url) => NetworkClient::with_config_and_network_url(ClientConfig::default(), url)?,
        None => NetworkClient::new()?,
    };
    let secret = read_secret(config.secret_file.as_deref())?;

    let mut session = CheckoutSession::new(request, client);
    let outcome = session.run_and_deliver(&secret, &JsonSink).await?;

    if outcome.needs_funding() {
        eprintln!("The account holds no funds yet; top it up and retry.");
    }
    if outcome.state() != OutcomeState::Ok {
        std::process::exit(1);
    }
    Ok(())
}

/// Prints outcomes as pretty JSON on stdout
struct JsonSink;

#[async_trait]
impl ResultSink for JsonSink {
    async fn deliver(&self, outcome: &CheckoutOutcome) -> smartlike_checkout::Result<()> {
        println!("{}", serde_json::to_string_pretty(outcome)?);
        Ok(())
    }
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    // Logs go to stderr; stdout is reserved for the outcome JSON.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn load_config(args: &Cli) -> Result<CliConfig> {
    let mut config = match &args.config_path {
        Some(path) => {
            let path_str = path.to_str().context("config path must be valid utf-8")?;
            CliConfig::from_file(path_str).context("load config")?
        }
        None => CliConfig::default(),
    };

    if args.network_address.is_some() {
        config.network_address = args.network_address.clone();
    }
    if args.secret_file.is_some() {
        config.secret_file = args.secret_file.clone();
    }
    Ok(config)
}

fn read_secret(path: Option<&Path>) -> Result<String> {
    let path = path.ok_or_else(|| {
        anyhow!("no secret file configured; pass --secret-file or set secret_file in the config")
    })?;
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("read secret file {}", path.display()))?;
    Ok(content.trim().to_string())
}

fn checkout_params(command: &Command, callback: &str) -> CheckoutParams {
    match command {
        // Handled in main before any checkout is built.
        Command::Generate => CheckoutParams::default(),
        Command::Login { token, title } => CheckoutParams {
            action: Some("login".to_string()),
            token: Some(token.clone()),
            title: Some(
                title
                    .clone()
                    .unwrap_or_else(|| "Sign in with Smartlike".to_string()),
            ),
            callback: Some(callback.to_string()),
            ..Default::default()
        },
        Command::Subscribe {
            recipient,
            token,
            amount,
            currency,
            title,
        } => CheckoutParams {
            action: Some("subscribe".to_string()),
            recipient: Some(recipient.clone()),
            token: Some(token.clone()),
            amount: *amount,
            currency: currency.clone(),
            title: Some(title.clone().unwrap_or_else(|| {
                format!("Create monthly recurring donation to {recipient}")
            })),
            callback: Some(callback.to_string()),
            ..Default::default()
        },
        Command::Donate {
            recipient,
            amount,
            currency,
            comment,
            title,
        } => CheckoutParams {
            action: Some("donate".to_string()),
            recipient: Some(recipient.clone()),
            amount: *amount,
            currency: currency.clone(),
            comment: comment.clone(),
            title: Some(
                title
                    .clone()
                    .unwrap_or_else(|| format!("Donate to {recipient}")),
            ),
            callback: Some(callback.to_string()),
            ..Default::default()
        },
        Command::Like {
            recipient,
            amount,
            currency,
            title,
        } => CheckoutParams {
            action: Some("smartlike".to_string()),
            recipient: Some(recipient.clone()),
            amount: *amount,
            currency: currency.clone(),
            title: Some(
                title
                    .clone()
                    .unwrap_or_else(|| format!("Smartlike {recipient}")),
            ),
            callback: Some(callback.to_string()),
            ..Default::default()
        },
    }
}
