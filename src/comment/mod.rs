//! Markdown comment bodies posted by the bot.
//!
//! Every renderer here is a pure function of its input and never fails:
//! absent optional fields simply drop their section.
//!
//! - [`format_mentions`]: the trailing `**cc:**` line
//! - [`create_issue_comment_from_actions`]: summary of the actions taken on an issue
//! - [`get_user_invited_comment_body`]: notice that a user joined the organization

mod actions;
mod invite;
mod mentions;

pub use actions::{IssueComment, create_issue_comment_from_actions};
pub use invite::{DEFAULT_ROLE, UserInvitation, get_user_invited_comment_body};
pub use mentions::{MENTIONS_LABEL, format_mentions};
