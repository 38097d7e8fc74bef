use anyhow::Result;
use clap::Parser;

use orgbot::cli::handlers::{
    CommandContext, handle_actions_comment, handle_init, handle_invite_comment, handle_list,
    handle_membership,
};
use orgbot::cli::{Cli, Commands};
use orgbot::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file.clone());

    let load_context = || CommandContext::load(cli.config.as_deref(), cli.api_url.clone());

    match cli.command {
        Commands::Init { mentions, force } => handle_init(mentions, force),
        Commands::ActionsComment {
            actions,
            special_instructions,
            special_instructions_file,
            mentions,
            json,
        } => handle_actions_comment(
            &load_context()?,
            actions,
            special_instructions,
            special_instructions_file,
            mentions,
            json,
        ),
        Commands::InviteComment {
            username,
            organization,
            role,
            repo,
            team_name,
            mentions,
            json,
        } => handle_invite_comment(
            &load_context()?,
            username,
            organization,
            role,
            repo,
            team_name,
            mentions,
            json,
        ),
        Commands::Membership { file, json } => handle_membership(file, json),
        Commands::List {
            route,
            params,
            json,
        } => handle_list(&load_context()?, route, params, json),
    }
}
