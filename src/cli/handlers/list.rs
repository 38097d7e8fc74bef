use crate::cli::commands::RouteArg;
use crate::github::{EndpointOptions, RestClient, Route, paginate};
use anyhow::{Context, Result};
use colored::Colorize;
use serde_json::Value;

use super::CommandContext;

pub fn handle_list(
    ctx: &CommandContext,
    route: RouteArg,
    params: Vec<(String, String)>,
    json: bool,
) -> Result<()> {
    let endpoint: Route = route.into();
    let options: EndpointOptions = params
        .into_iter()
        .map(|(key, value)| (key, Value::String(value)))
        .collect();
    let client = RestClient::from_settings(&ctx.config.github)?;

    let items = tokio::runtime::Runtime::new()?
        .block_on(paginate(&client, &endpoint, &options))
        .with_context(|| format!("Failed to list {}", endpoint.path))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        print_items(&items);
    }
    Ok(())
}

/// Best human label for a list item: login, then slug, then name.
fn item_label(item: &Value) -> Option<&str> {
    ["login", "slug", "name"]
        .iter()
        .find_map(|key| item.get(*key).and_then(Value::as_str))
}

fn print_items(items: &[Value]) {
    if items.is_empty() {
        println!("No items found.");
        return;
    }

    for item in items {
        match item_label(item) {
            Some(label) => println!("{}", label.cyan()),
            None => println!("{}", item),
        }
    }
    println!("{}", format!("{} item(s)", items.len()).dimmed());
}
