// Command-line front end for a lite-agent server.
//
// Every subcommand maps onto one client operation; JSON responses are printed
// pretty-printed to stdout and log streams one entry per line.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use futures::StreamExt;
use lite_agent_client::{
    AgentConfigOptions, ClientConfig, LiteAgentClient, LogStream, SpawnRequest,
};

#[derive(Parser)]
#[command(name = "lite-agent")]
#[command(about = "Client for the lite-agent server", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Server base URL
    #[arg(long, env = "LITE_AGENT_URL", default_value = "http://localhost:3000")]
    url: String,
    /// Whole-request timeout in seconds
    #[arg(long, env = "LITE_AGENT_TIMEOUT_SECS", default_value_t = 300)]
    timeout_secs: u64,
    /// Accept invalid TLS certificates
    #[arg(long)]
    insecure: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Check server health
    Health,
    /// List available agent types
    Agents,
    /// List all sessions
    Sessions,
    /// Show status of a session
    Status {
        /// Session ID
        session_id: String,
    },
    /// Delete a session
    Delete {
        /// Session ID
        session_id: String,
    },
    /// Spawn an agent, or continue a session with --session
    Spawn {
        /// Agent type (e.g. "shell", "echo")
        agent_type: String,
        /// Input for the agent
        input: String,
        /// Session to continue
        #[arg(short, long)]
        session: Option<String>,
        /// Follow the session's logs after spawning
        #[arg(short, long)]
        follow: bool,
        /// Environment variable for the agent, as KEY=VALUE (repeatable)
        #[arg(short, long, value_parser = parse_env_pair)]
        env: Vec<(String, String)>,
        /// Working directory for the agent
        #[arg(short, long)]
        work_dir: Option<PathBuf>,
        /// Agent timeout in seconds
        #[arg(long)]
        agent_timeout_secs: Option<u64>,
    },
    /// Follow a session's logs
    Logs {
        /// Session ID
        session_id: String,
    },
}

fn parse_env_pair(raw: &str) -> std::result::Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))
}

fn print_json(value: &impl serde::Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn follow(mut logs: LogStream) -> Result<()> {
    while let Some(entry) = logs.next().await {
        let entry = entry.with_context(|| format!("log stream for {}", logs.session_id()))?;
        println!("{} [{}] {}", entry.timestamp, entry.level, entry.content);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = ClientConfig::builder(&cli.url)?
        .timeout_secs(cli.timeout_secs)
        .verify_tls(!cli.insecure)
        .build();
    let client = LiteAgentClient::with_config(config);
    let client = client.open()?;

    log::debug!("Connected to {}", client.config().base_url());

    match cli.command {
        Commands::Health => print_json(&client.health_check().await?)?,
        Commands::Agents => print_json(&client.list_agents().await?)?,
        Commands::Sessions => print_json(&client.list_sessions().await?)?,
        Commands::Status { session_id } => {
            print_json(&client.get_session_status(&session_id).await?)?;
        }
        Commands::Delete { session_id } => {
            client.delete_session(&session_id).await?;
            println!("Deleted session {session_id}");
        }
        Commands::Spawn {
            agent_type,
            input,
            session,
            follow: follow_logs,
            env,
            work_dir,
            agent_timeout_secs,
        } => {
            let mut options = AgentConfigOptions::builder().envs(env.into_iter().collect());
            if let Some(dir) = work_dir {
                options = options.work_dir(dir);
            }
            if let Some(secs) = agent_timeout_secs {
                options = options.timeout_secs(secs);
            }

            let mut request = SpawnRequest::new(agent_type, input).with_config(options.build());
            if let Some(session_id) = session {
                request = request.with_session(session_id);
            }

            if follow_logs {
                follow(client.spawn_and_stream(&request).await?).await?;
            } else {
                print_json(&client.spawn(&request).await?)?;
            }
        }
        Commands::Logs { session_id } => follow(client.stream_logs(&session_id).await?).await?,
    }

    Ok(())
}
