use std::path::PathBuf;

use clap::{ArgGroup, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "idguard")]
#[command(about = "idguard: inspect identity pool keys and verify ID tokens")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (TOML). Defaults to ./idguard.toml when present
    #[arg(short, long, global = true, env = "IDGUARD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Provider region, e.g. ap-southeast-2
    #[arg(long, global = true, env = "IDGUARD_REGION")]
    pub region: Option<String>,

    /// User pool id, e.g. ap-southeast-2_example
    #[arg(long, global = true, env = "IDGUARD_USER_POOL_ID")]
    pub user_pool_id: Option<String>,

    /// App client id expected as the token audience
    #[arg(long, global = true, env = "IDGUARD_CLIENT_ID")]
    pub client_id: Option<String>,

    /// Provider base URL override (the pool id is appended)
    #[arg(long, global = true, env = "IDGUARD_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Log level when RUST_LOG is not set
    #[arg(long, global = true, env = "IDGUARD_LOG_LEVEL")]
    pub log_level: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve the pool's key set and list its keys
    Keys,
    /// Verify an ID token
    Verify(VerifyArgs),
    /// Print the derived issuer and JWKS URLs
    Issuer,
}

#[derive(clap::Args)]
#[command(group(ArgGroup::new("input").required(true).args(["token", "authorization"])))]
pub struct VerifyArgs {
    /// Compact token
    pub token: Option<String>,

    /// Full Authorization header value, e.g. "Bearer eyJ..."
    #[arg(long)]
    pub authorization: Option<String>,

    /// Verify as of this Unix time instead of now
    #[arg(long)]
    pub at: Option<i64>,
}
