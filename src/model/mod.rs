//! Data models for GitHub payloads.
//!
//! - [`Membership`]: organization membership as GitHub sends it
//! - [`MembershipSummary`]: the flattened fields the bot keeps

mod membership;

pub use membership::{Account, Membership, MembershipSummary, parse_membership};
