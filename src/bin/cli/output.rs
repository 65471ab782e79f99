use clap::ValueEnum;
use monopereo::dto::HealthDto;
use monopereo::models::{Item, User};
use serde::Serialize;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

/// Bundled output configuration passed to all print functions
#[derive(Debug, Clone, Copy)]
pub struct OutputConfig {
    /// The output format
    pub format: OutputFormat,
    /// When true, print minimal output (just IDs)
    pub quiet: bool,
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

/// Renders a list of users
pub fn render_users(users: &[User], config: &OutputConfig) -> serde_json::Result<String> {
    match config.format {
        OutputFormat::Json => to_json(users),
        OutputFormat::Human => {
            if users.is_empty() {
                return Ok(if config.quiet { String::new() } else { "No users found.".to_string() });
            }
            if config.quiet {
                return Ok(users.iter().map(|u| u.get_id().to_string()).collect::<Vec<_>>().join("\n"));
            }

            let id_w = users.iter().map(|u| u.get_id().to_string().len()).max().unwrap_or(2).max(2);
            let name_w = users.iter().map(|u| u.get_username().len()).max().unwrap_or(8).max(8);
            let email_w = users.iter().map(|u| u.get_email().len()).max().unwrap_or(5).max(5);

            let mut lines = vec![format!(
                "{:<id_w$}  {:<name_w$}  {:<email_w$}  ACTIVE  ITEMS",
                "ID", "USERNAME", "EMAIL",
            )];
            for user in users {
                lines.push(format!(
                    "{:<id_w$}  {:<name_w$}  {:<email_w$}  {:<6}  {}",
                    user.get_id(),
                    user.get_username(),
                    user.get_email(),
                    if user.is_active() { "yes" } else { "no" },
                    user.get_items().len(),
                ));
            }
            Ok(lines.join("\n"))
        }
    }
}

/// Renders a single user with its items
pub fn render_user(user: &User, config: &OutputConfig) -> serde_json::Result<String> {
    match config.format {
        OutputFormat::Json => to_json(user),
        OutputFormat::Human => {
            if config.quiet {
                return Ok(user.get_id().to_string());
            }
            let mut lines = vec![
                format!("ID:       {}", user.get_id()),
                format!("Username: {}", user.get_username()),
                format!("Email:    {}", user.get_email()),
                format!("Active:   {}", if user.is_active() { "yes" } else { "no" }),
                format!("Items:    {}", user.get_items().len()),
            ];
            for item in user.get_items() {
                lines.push(format!("  - [{}] {}", item.get_id(), item.get_name()));
            }
            Ok(lines.join("\n"))
        }
    }
}

/// Renders a list of items
pub fn render_items(items: &[Item], config: &OutputConfig) -> serde_json::Result<String> {
    match config.format {
        OutputFormat::Json => to_json(items),
        OutputFormat::Human => {
            if items.is_empty() {
                return Ok(if config.quiet { String::new() } else { "No items found.".to_string() });
            }
            if config.quiet {
                return Ok(items.iter().map(|i| i.get_id().to_string()).collect::<Vec<_>>().join("\n"));
            }

            let id_w = items.iter().map(|i| i.get_id().to_string().len()).max().unwrap_or(2).max(2);
            let owner_w = items.iter().map(|i| i.get_owner_id().to_string().len()).max().unwrap_or(5).max(5);
            let name_w = items.iter().map(|i| i.get_name().len()).max().unwrap_or(4).max(4);

            let mut lines = vec![format!(
                "{:<id_w$}  {:<owner_w$}  {:<name_w$}  DESCRIPTION",
                "ID", "OWNER", "NAME",
            )];
            for item in items {
                lines.push(format!(
                    "{:<id_w$}  {:<owner_w$}  {:<name_w$}  {}",
                    item.get_id(),
                    item.get_owner_id(),
                    item.get_name(),
                    item.get_description().unwrap_or_default(),
                ));
            }
            Ok(lines.join("\n"))
        }
    }
}

/// Renders the health check result
pub fn render_health(health: &HealthDto, config: &OutputConfig) -> serde_json::Result<String> {
    match config.format {
        OutputFormat::Json => to_json(health),
        OutputFormat::Human if config.quiet => Ok(health.status.clone()),
        OutputFormat::Human => Ok(format!("Server status: {}", health.status)),
    }
}

/// Prints rendered output, skipping empty quiet output
pub fn print(rendered: serde_json::Result<String>) -> serde_json::Result<()> {
    let text = rendered?;
    if !text.is_empty() {
        println!("{}", text);
    }
    Ok(())
}
