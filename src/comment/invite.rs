use super::mentions::format_mentions;

/// Team role used when none is given.
pub const DEFAULT_ROLE: &str = "member";

/// Input for [`get_user_invited_comment_body`].
///
/// `role` only shows up alongside a team; `repo` and `team_name` are dropped
/// when absent or empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInvitation {
    pub username: String,
    pub organization: String,
    pub role: String,
    pub repo: Option<String>,
    pub team_name: Option<String>,
    pub mentions: Vec<String>,
}

impl UserInvitation {
    pub fn new(username: impl Into<String>, organization: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            organization: organization.into(),
            role: DEFAULT_ROLE.to_string(),
            repo: None,
            team_name: None,
            mentions: Vec::new(),
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub fn with_repo(mut self, repo: Option<String>) -> Self {
        self.repo = repo;
        self
    }

    pub fn with_team(mut self, team_name: Option<String>) -> Self {
        self.team_name = team_name;
        self
    }

    pub fn with_mentions(mut self, mentions: Vec<String>) -> Self {
        self.mentions = mentions;
        self
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Builds the comment announcing that a user was added to the organization.
pub fn get_user_invited_comment_body(invitation: &UserInvitation) -> String {
    let mut sections = vec![format!(
        "**User:** @{} has been added to the **organization:** _{}_.",
        invitation.username, invitation.organization
    )];

    if let Some(repo) = non_empty(&invitation.repo) {
        sections.push(format!("**Repo:** _{}_", repo));
    }

    if let Some(team) = non_empty(&invitation.team_name) {
        sections.push(format!(
            "**Team:** _{}_\n\n**User team role:** _{}_",
            team, invitation.role
        ));
    }

    sections.push(format_mentions(&invitation.mentions));
    sections.join("\n\n")
}
