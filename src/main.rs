mod api;
mod cli;
mod display;
mod env;
mod http;
mod provider;

use anyhow::{Result, anyhow};
use clap::Parser;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use api::ApiClient;
use cli::{Cli, Command};
use env::Environment;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let environment = resolve_environment(cli.env.as_deref())?;
    provider::initialize(environment);

    // Commands go through the registry, same as any other consumer would.
    let client = provider::resolve(provider::API_USUARIO)
        .ok_or_else(|| anyhow!("user service client is not registered"))?;

    match cli.command {
        Command::Env => cmd_env(environment, &client),
        Command::Get { path } => cmd_get(&client, &path).await?,
        Command::Post { path, data } => {
            cmd_send(&client, Verb::Post, &path, data.as_deref()).await?
        }
        Command::Put { path, data } => cmd_send(&client, Verb::Put, &path, data.as_deref()).await?,
        Command::Delete { path } => cmd_delete(&client, &path).await?,
    }

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();
}

/// An explicit --env value must name a known environment; otherwise the
/// ambient USUARIO_ENV flag decides.
fn resolve_environment(flag: Option<&str>) -> Result<Environment> {
    match flag {
        Some(value) => value.parse(),
        None => Ok(Environment::from_ambient()),
    }
}

enum Verb {
    Post,
    Put,
}

fn cmd_env(environment: Environment, client: &ApiClient) {
    println!("{}", display::format_env_line(environment, client.base_url()));
}

async fn cmd_get(client: &ApiClient, path: &str) -> Result<()> {
    let body = client.get(path).await?;
    print_body(&body);
    Ok(())
}

async fn cmd_send(client: &ApiClient, verb: Verb, path: &str, data: Option<&str>) -> Result<()> {
    let body = parse_data(data)?;
    let resp = match verb {
        Verb::Post => client.post(path, &body).await?,
        Verb::Put => client.put(path, &body).await?,
    };
    print_body(&resp);
    Ok(())
}

async fn cmd_delete(client: &ApiClient, path: &str) -> Result<()> {
    let resp = client.delete(path).await?;
    print_body(&resp);
    Ok(())
}

fn parse_data(data: Option<&str>) -> Result<Value> {
    match data {
        Some(raw) => serde_json::from_str(raw).map_err(|e| anyhow!("--data is not valid JSON: {}", e)),
        None => Ok(Value::Object(serde_json::Map::new())),
    }
}

fn print_body(value: &Value) {
    let rendered = display::render_body(value);
    if !rendered.is_empty() {
        println!("{}", rendered);
    }
}
