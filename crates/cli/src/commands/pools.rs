//! Pools command implementation.
//!
//! Invariants:
//! - `min_price` may not exceed `max_price`; the request is not sent otherwise

use anyhow::{Result, bail};
use clap::{Args, Subcommand};
use santa_client::PoolParams;
use santa_config::Config;

use crate::commands::{build_client, print_reply};

#[derive(Debug, Subcommand)]
pub enum PoolsCommand {
    /// List all pools
    List,
    /// Show one pool
    Show {
        /// Pool id
        id: String,
    },
    /// Create a pool
    Create(PoolArgs),
    /// Replace the settings of a pool
    Update {
        /// Pool id
        id: String,
        #[command(flatten)]
        pool: PoolArgs,
    },
    /// Delete a pool
    Delete {
        /// Pool id
        id: String,
    },
    /// List the members of a pool
    Members {
        /// Pool id
        id: String,
    },
}

#[derive(Debug, Args)]
pub struct PoolArgs {
    /// Pool name
    pub name: String,
    /// Free-form description
    #[arg(long, default_value = "")]
    pub description: String,
    /// Lowest gift price
    #[arg(long)]
    pub min_price: u64,
    /// Highest gift price
    #[arg(long)]
    pub max_price: u64,
    /// Owner account (defaults to the logged-in user)
    #[arg(long)]
    pub account_id: Option<String>,
}

impl TryFrom<PoolArgs> for PoolParams {
    type Error = anyhow::Error;

    fn try_from(args: PoolArgs) -> Result<Self> {
        if args.min_price > args.max_price {
            bail!(
                "--min-price ({}) must not exceed --max-price ({})",
                args.min_price,
                args.max_price
            );
        }
        Ok(PoolParams {
            name: args.name,
            description: args.description,
            account_id: args.account_id,
            min_price: args.min_price,
            max_price: args.max_price,
        })
    }
}

pub async fn run(config: &Config, command: PoolsCommand) -> Result<()> {
    let client = build_client(config)?;
    let reply = match command {
        PoolsCommand::List => client.list_pools().await,
        PoolsCommand::Show { id } => client.get_pool(&id).await,
        PoolsCommand::Create(pool) => client.create_pool(&PoolParams::try_from(pool)?).await,
        PoolsCommand::Update { id, pool } => {
            client.update_pool(&id, &PoolParams::try_from(pool)?).await
        }
        PoolsCommand::Delete { id } => client.delete_pool(&id).await,
        PoolsCommand::Members { id } => client.pool_members(&id).await,
    };
    print_reply(&client, reply)
}
