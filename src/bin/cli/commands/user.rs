use clap::Subcommand;
use monopereo::dto::{PaginationQuery, DEFAULT_LIMIT};

use crate::client::MonopereoClient;
use crate::output::{self, OutputConfig};

/// User commands
#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// List users
    List {
        /// Number of users to skip
        #[clap(long, default_value_t = 0, allow_negative_numbers = true)]
        skip: i64,
        /// Maximum number of users to return
        #[clap(long, default_value_t = DEFAULT_LIMIT, allow_negative_numbers = true)]
        limit: i64,
    },
    /// Get a specific user by ID
    Get {
        /// The user ID
        id: i64,
    },
    /// List the items owned by a user
    Items {
        /// The user ID
        id: i64,
    },
}

/// Executes a user command
pub async fn execute(
    client: &MonopereoClient,
    cmd: UserCommands,
    config: &OutputConfig,
) -> anyhow::Result<()> {
    match cmd {
        UserCommands::List { skip, limit } => {
            let users = client.list_users(&PaginationQuery { skip, limit }).await?;
            output::print(output::render_users(&users, config))?;
        }
        UserCommands::Get { id } => {
            let user = client.get_user(id).await?;
            output::print(output::render_user(&user, config))?;
        }
        UserCommands::Items { id } => {
            let items = client.list_user_items(id).await?;
            output::print(output::render_items(&items, config))?;
        }
    }
    Ok(())
}
