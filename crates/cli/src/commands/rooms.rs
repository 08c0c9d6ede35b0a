//! Rooms command implementation.

use anyhow::Result;
use clap::Subcommand;
use santa_config::Config;

use crate::commands::{build_client, print_reply};

#[derive(Debug, Subcommand)]
pub enum RoomsCommand {
    /// List the rooms you can see
    List,
    /// Show one room
    Show {
        /// Room id
        id: String,
    },
}

pub async fn run(config: &Config, command: RoomsCommand) -> Result<()> {
    let client = build_client(config)?;
    let reply = match command {
        RoomsCommand::List => client.list_rooms().await,
        RoomsCommand::Show { id } => client.get_room(&id).await,
    };
    print_reply(&client, reply)
}
