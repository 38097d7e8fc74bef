use crate::model::parse_membership;
use anyhow::{Context, Result};
use colored::Colorize;

use super::utils::read_input;

pub fn handle_membership(file: Option<String>, json: bool) -> Result<()> {
    let content = read_input(file.as_deref())?;
    let data: serde_json::Value =
        serde_json::from_str(&content).context("Membership payload is not valid JSON")?;
    let summary = parse_membership(&data).context("Failed to parse membership payload")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("Username:     {}", summary.username.cyan());
        println!("Organization: {}", summary.organization.cyan());
        println!("State:        {}", summary.state.as_deref().unwrap_or("-"));
        println!("Role:         {}", summary.role.as_deref().unwrap_or("-"));
    }
    Ok(())
}
