use crate::github::{Route, route};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "orgbot")]
#[command(
    author,
    version,
    about = "Comment and membership helpers for a GitHub organization bot"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .orgbot.yml by default)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// GitHub API base URL (overrides config)
    #[arg(long, global = true, env = "ORGBOT_API_URL")]
    pub api_url: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a .orgbot.yml in the current directory
    Init {
        /// Username to cc by default (repeatable)
        #[arg(short, long = "mention")]
        mentions: Vec<String>,

        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Render the comment posted after processing an issue
    #[command(visible_alias = "actions")]
    ActionsComment {
        /// Action taken (repeatable, rendered in order)
        #[arg(short, long = "action")]
        actions: Vec<String>,

        /// Special instructions from the original issue
        #[arg(short, long, conflicts_with = "special_instructions_file")]
        special_instructions: Option<String>,

        /// Read special instructions from a file ('-' for stdin)
        #[arg(long)]
        special_instructions_file: Option<String>,

        /// Username to cc (repeatable, defaults to the configured list)
        #[arg(short, long = "mention")]
        mentions: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render the notice for a user added to the organization
    #[command(visible_alias = "invite")]
    InviteComment {
        /// Login of the added user
        #[arg(short, long)]
        username: String,

        /// Organization the user joined
        #[arg(short, long)]
        organization: String,

        /// Team role (only shown together with --team)
        #[arg(short, long)]
        role: Option<String>,

        /// Repository the user was given access to
        #[arg(long)]
        repo: Option<String>,

        /// Team the user was added to
        #[arg(short, long = "team")]
        team_name: Option<String>,

        /// Username to cc (repeatable, defaults to the configured list)
        #[arg(short, long = "mention")]
        mentions: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Extract state, role, username and organization from a membership payload
    Membership {
        /// JSON file to read ('-' or omitted reads stdin)
        file: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List every item of a paginated GitHub endpoint
    #[command(visible_alias = "ls")]
    List {
        /// Endpoint to list
        #[arg(value_enum)]
        route: RouteArg,

        /// Endpoint parameter as key=value (path placeholders or query)
        #[arg(short, long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum RouteArg {
    /// /orgs/{org}/members
    Members,
    /// /orgs/{org}/invitations
    PendingInvitations,
    /// /orgs/{org}/teams
    Teams,
    /// /orgs/{org}/teams/{team_slug}/members
    TeamMembers,
    /// /repos/{owner}/{repo}/collaborators
    Collaborators,
}

impl From<RouteArg> for Route {
    fn from(arg: RouteArg) -> Self {
        match arg {
            RouteArg::Members => route::ORG_MEMBERS,
            RouteArg::PendingInvitations => route::ORG_PENDING_INVITATIONS,
            RouteArg::Teams => route::ORG_TEAMS,
            RouteArg::TeamMembers => route::TEAM_MEMBERS,
            RouteArg::Collaborators => route::REPO_COLLABORATORS,
        }
    }
}

fn parse_param(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected key=value, got '{}'", s)),
    }
}
