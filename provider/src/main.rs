use clap::{Parser, Subcommand};
use eyre::{eyre, WrapErr};
use log::debug;
use rack_provider::client::aws::AwsClient;
use rack_provider::logger::Logger;
use rack_provider::{Config, Error, Provider};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "rack-resources",
    about = "Manage rack resources backed by CloudFormation stacks"
)]
struct Cli {
    /// TOML config file, the environment is used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List all resources of the rack
    List,

    /// Show a resource and the apps linked to it
    Get { name: String },

    /// Create a resource
    Create {
        /// Resource type, e.g. webhook or syslog
        kind: String,

        name: String,

        /// Template parameter, e.g. -p url=https://example.com/hook
        #[arg(short = 'p', long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },
}

fn parse_param(value: &str) -> Result<(String, String), String> {
    value
        .split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected key=value, got {value}"))
}

fn print<T: Serialize>(value: &T) -> eyre::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).wrap_err("Failed to serialize output")?
    );
    Ok(())
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let level = Logger::init().level;
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::from_env()?,
    };

    debug!("Using rack {} (log level {level})", config.rack);
    let provider = Provider::new(config, Arc::new(AwsClient::new().await));

    match cli.command {
        Command::List => print(&provider.resource_list().await?),
        Command::Get { name } => print(&provider.resource_get(&name).await?),

        Command::Create { kind, name, params } => {
            let params: BTreeMap<String, String> = params.into_iter().collect();

            match provider.resource_create(&name, &kind, &params).await {
                Ok(resource) => print(&resource),

                // The stack exists at this point, show it before failing
                Err(Error::Publish { resource, message }) => {
                    print(&resource)?;
                    Err(eyre!(
                        "Stack {} was created but the notification was not published: {message}",
                        resource.stack
                    ))
                }

                Err(e) => Err(e.into()),
            }
        }
    }
}
