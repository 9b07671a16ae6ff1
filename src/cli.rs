use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(about = "Client for the Consultoria Legal user service (service_usuario)")]
pub struct Cli {
    /// Deployment environment: 'production' or 'development'. When omitted,
    /// the USUARIO_ENV flag decides (production selects the production
    /// endpoint, anything else is local development)
    #[arg(long, global = true)]
    pub env: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the resolved environment and base URL
    Env,
    /// GET a path relative to the base URL
    Get {
        /// Request path, e.g. 'users/42'
        path: String,
    },
    /// POST a JSON body to a relative path
    Post {
        path: String,
        /// JSON request body (defaults to '{}')
        #[arg(long)]
        data: Option<String>,
    },
    /// PUT a JSON body to a relative path
    Put {
        path: String,
        /// JSON request body (defaults to '{}')
        #[arg(long)]
        data: Option<String>,
    },
    /// DELETE a path relative to the base URL
    Delete {
        path: String,
    },
}
