use clap::Subcommand;
use monopereo::dto::{PaginationQuery, DEFAULT_LIMIT};

use crate::client::MonopereoClient;
use crate::output::{self, OutputConfig};

/// Item commands
#[derive(Subcommand, Debug)]
pub enum ItemCommands {
    /// List items
    List {
        /// Number of items to skip
        #[clap(long, default_value_t = 0, allow_negative_numbers = true)]
        skip: i64,
        /// Maximum number of items to return
        #[clap(long, default_value_t = DEFAULT_LIMIT, allow_negative_numbers = true)]
        limit: i64,
    },
}

/// Executes an item command
pub async fn execute(
    client: &MonopereoClient,
    cmd: ItemCommands,
    config: &OutputConfig,
) -> anyhow::Result<()> {
    match cmd {
        ItemCommands::List { skip, limit } => {
            let items = client.list_items(&PaginationQuery { skip, limit }).await?;
            output::print(output::render_items(&items, config))?;
        }
    }
    Ok(())
}
