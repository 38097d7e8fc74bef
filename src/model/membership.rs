use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A GitHub account reference; only the login is read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub login: String,
}

/// Organization membership as returned by `GET /orgs/{org}/memberships/{username}`.
///
/// Unknown fields are ignored. `user` and `organization` are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    #[serde(default)]
    pub state: Option<String>,

    #[serde(default)]
    pub role: Option<String>,

    pub user: Account,

    pub organization: Account,
}

/// The flattened fields the bot cares about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    pub username: String,

    pub organization: String,
}

impl From<Membership> for MembershipSummary {
    fn from(membership: Membership) -> Self {
        Self {
            state: membership.state,
            role: membership.role,
            username: membership.user.login,
            organization: membership.organization.login,
        }
    }
}

/// Projects a raw membership payload onto a [`MembershipSummary`].
///
/// A payload without `user` or `organization` fails with the underlying JSON error.
pub fn parse_membership(data: &Value) -> Result<MembershipSummary> {
    let membership = Membership::deserialize(data)?;
    Ok(membership.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BotError;
    use serde_json::json;

    #[test]
    fn test_parse_membership() {
        let data = json!({
            "state": "active",
            "role": "Sr. Undersecretary of Funk",
            "user": { "login": "user" },
            "organization": { "login": "user2" }
        });

        let summary = parse_membership(&data).unwrap();
        assert_eq!(
            summary,
            MembershipSummary {
                state: Some("active".to_string()),
                role: Some("Sr. Undersecretary of Funk".to_string()),
                username: "user".to_string(),
                organization: "user2".to_string(),
            }
        );
    }

    #[test]
    fn test_extra_fields_are_dropped() {
        let data = json!({
            "url": "https://api.github.com/orgs/octo-org/memberships/defunkt",
            "state": "pending",
            "role": "admin",
            "organization_url": "https://api.github.com/orgs/octo-org",
            "organization": { "login": "octo-org", "id": 1 },
            "user": { "login": "defunkt", "id": 2, "site_admin": false }
        });

        let summary = parse_membership(&data).unwrap();
        assert_eq!(
            serde_json::to_value(&summary).unwrap(),
            json!({
                "state": "pending",
                "role": "admin",
                "username": "defunkt",
                "organization": "octo-org"
            })
        );
    }

    #[test]
    fn test_missing_user_is_an_error() {
        let data = json!({
            "state": "active",
            "role": "member",
            "organization": { "login": "o" }
        });
        let err = parse_membership(&data).unwrap_err();
        assert!(matches!(err, BotError::Json(_)));
        assert!(err.to_string().contains("user"));
    }

    #[test]
    fn test_missing_organization_is_an_error() {
        let data = json!({ "state": "active", "user": { "login": "u" } });
        assert!(parse_membership(&data).is_err());
    }

    #[test]
    fn test_null_user_is_an_error() {
        let data = json!({ "user": null, "organization": { "login": "o" } });
        assert!(parse_membership(&data).is_err());
    }

    #[test]
    fn test_absent_state_and_role_stay_absent() {
        let data = json!({ "user": { "login": "u" }, "organization": { "login": "o" } });
        let summary = parse_membership(&data).unwrap();
        assert_eq!(summary.state, None);
        assert_eq!(summary.role, None);
        assert_eq!(
            serde_json::to_value(&summary).unwrap(),
            json!({ "username": "u", "organization": "o" })
        );
    }
}
