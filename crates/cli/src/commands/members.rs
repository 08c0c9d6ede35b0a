//! Joining and leaving pools.

use anyhow::Result;
use santa_client::JoinPoolParams;
use santa_config::Config;

use crate::commands::{build_client, print_reply};

pub async fn run_join(
    config: &Config,
    pool_id: String,
    account_id: String,
    wishlist: Option<String>,
) -> Result<()> {
    let client = build_client(config)?;
    let params = JoinPoolParams {
        account_id,
        pool_id,
        wishlist,
    };
    let reply = client.join_pool(&params).await;
    print_reply(&client, reply)
}

pub async fn run_leave(config: &Config, member_id: &str) -> Result<()> {
    let client = build_client(config)?;
    let reply = client.leave_pool(member_id).await;
    print_reply(&client, reply)
}
