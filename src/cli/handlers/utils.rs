use anyhow::{Context, Result};
use std::io::{self, Read};

use super::CommandContext;

/// Explicit mentions win; otherwise fall back to the configured cc list.
pub fn resolve_mentions(ctx: &CommandContext, mentions: Vec<String>) -> Vec<String> {
    if mentions.is_empty() {
        ctx.config.comments.mentions.clone()
    } else {
        mentions
    }
}

/// Reads a file, or stdin when the path is '-' or absent.
pub fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        None | Some("-") => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read stdin")?;
            Ok(content)
        }
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))
        }
    }
}
