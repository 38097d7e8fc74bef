use crate::comment::{
    IssueComment, UserInvitation, create_issue_comment_from_actions,
    get_user_invited_comment_body,
};
use anyhow::Result;

use super::CommandContext;
use super::utils::{read_input, resolve_mentions};

pub fn handle_actions_comment(
    ctx: &CommandContext,
    actions: Vec<String>,
    special_instructions: Option<String>,
    special_instructions_file: Option<String>,
    mentions: Vec<String>,
    json: bool,
) -> Result<()> {
    let special_instructions = match special_instructions_file {
        Some(path) => Some(read_input(Some(path.as_str()))?),
        None => special_instructions,
    };

    let comment = IssueComment::new(actions)
        .with_special_instructions(special_instructions)
        .with_mentions(resolve_mentions(ctx, mentions));
    tracing::debug!(actions = comment.actions.len(), "Rendering issue comment");

    print_body(&create_issue_comment_from_actions(&comment), json)
}

#[allow(clippy::too_many_arguments)]
pub fn handle_invite_comment(
    ctx: &CommandContext,
    username: String,
    organization: String,
    role: Option<String>,
    repo: Option<String>,
    team_name: Option<String>,
    mentions: Vec<String>,
    json: bool,
) -> Result<()> {
    let role = role.unwrap_or_else(|| ctx.config.comments.default_role.clone());
    let invitation = UserInvitation::new(username, organization)
        .with_role(role)
        .with_repo(repo)
        .with_team(team_name)
        .with_mentions(resolve_mentions(ctx, mentions));
    tracing::debug!(
        username = %invitation.username,
        organization = %invitation.organization,
        "Rendering invitation comment"
    );

    print_body(&get_user_invited_comment_body(&invitation), json)
}

fn print_body(body: &str, json: bool) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({ "body": body }))?
        );
    } else {
        println!("{}", body);
    }
    Ok(())
}
