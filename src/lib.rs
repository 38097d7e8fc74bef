//! # orgbot - helpers for a GitHub organization bot
//!
//! orgbot renders the markdown comments an organization-membership bot posts
//! on GitHub issues, flattens membership payloads, and pages through GitHub
//! list endpoints behind an injectable client.
//!
//! ## Quick Start
//!
//! ```bash
//! # Summarize what was done for an issue
//! orgbot actions-comment -a "Invited @octocat" -s "Add to docs team" -m froi
//!
//! # Announce a new member
//! orgbot invite-comment -u octocat -o github --team docs --role maintainer
//!
//! # Flatten a membership payload
//! orgbot membership payload.json --json
//!
//! # List every member of an organization
//! orgbot list members -p org=github
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`comment`]: Markdown comment renderers
//! - [`config`]: Configuration loading and management
//! - [`error`]: Error types and result aliases
//! - [`github`]: List endpoints and the pagination seam
//! - [`model`]: GitHub payload models

/// Command-line interface definitions using clap.
pub mod cli;

/// Markdown comment bodies.
///
/// Pure renderers for the issue-processed summary and the invitation notice.
pub mod comment;

/// Configuration loading and management.
///
/// Handles `.orgbot.yml` configuration files and project discovery.
pub mod config;

/// Error types and result aliases.
///
/// Defines `BotError` enum and `Result<T>` type alias.
pub mod error;

/// GitHub list endpoints, the `paginate` wrapper and the REST client.
pub mod github;

pub mod logging;

/// Data models for GitHub payloads.
pub mod model;
