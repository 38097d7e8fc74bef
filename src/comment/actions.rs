use super::mentions::format_mentions;

const ISSUE_HEADING: &str = "# Issue proccessed";
const ACTIONS_HEADING: &str = "## The following actions were taken:";
const SPECIAL_INSTRUCTIONS_HEADING: &str = "## Special Instructions";
const RULE: &str = "---";

/// Input for [`create_issue_comment_from_actions`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueComment {
    /// Rendered one bullet per action, in order.
    pub actions: Vec<String>,
    /// Rendered only when it has non-whitespace content.
    pub special_instructions: Option<String>,
    pub mentions: Vec<String>,
}

impl IssueComment {
    pub fn new(actions: Vec<String>) -> Self {
        Self {
            actions,
            ..Self::default()
        }
    }

    pub fn with_special_instructions(mut self, special_instructions: Option<String>) -> Self {
        self.special_instructions = special_instructions;
        self
    }

    pub fn with_mentions(mut self, mentions: Vec<String>) -> Self {
        self.mentions = mentions;
        self
    }
}

/// Builds the comment posted once an issue has been processed.
///
/// ```text
/// # Issue proccessed
///
/// ## The following actions were taken:
///
/// - <action>
///
/// ## Special Instructions
///
/// <instructions>
///
/// ---
///
/// **cc:** @<mention>
/// ```
pub fn create_issue_comment_from_actions(comment: &IssueComment) -> String {
    let mut output = String::new();

    output.push_str(ISSUE_HEADING);
    output.push_str("\n\n");
    output.push_str(ACTIONS_HEADING);
    output.push_str("\n\n");
    for action in &comment.actions {
        // trailing space is part of the established output
        output.push_str("- ");
        output.push_str(action);
        output.push_str(" \n");
    }
    if !comment.actions.is_empty() {
        output.push('\n');
    }

    if let Some(instructions) = comment
        .special_instructions
        .as_deref()
        .filter(|s| !s.trim().is_empty())
    {
        output.push_str(SPECIAL_INSTRUCTIONS_HEADING);
        output.push_str("\n\n");
        output.push_str(instructions);
        output.push_str("\n\n");
    }

    output.push_str(RULE);
    output.push_str("\n\n");
    output.push_str(&format_mentions(&comment.mentions));

    output
}
