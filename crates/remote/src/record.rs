//! Raw wire records as returned by a repository's REST endpoint.
//!
//! These structs mirror the loosely validated shape of the network payload:
//! every field is optional, sequences default to empty, and nothing here is
//! checked beyond what serde needs to decode it. Translation into the domain
//! model, including all fail-soft handling, lives in [`crate::adapter`].

use serde::{Deserialize, Serialize};

/// One extension version as the repository reports it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RemoteExtension {
    pub id: Option<String>,
    pub version: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub name: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
    pub features: Vec<String>,
    pub rating: Option<RemoteRating>,
    pub authors: Vec<RemoteAuthor>,
    pub licenses: Vec<RemoteLicense>,
    pub scm: Option<RemoteScm>,
    pub issue_management: Option<RemoteIssueManagement>,
    pub category: Option<String>,
    pub properties: Vec<RemoteProperty>,
    pub repositories: Vec<RemoteRepository>,
    pub dependencies: Vec<RemoteDependency>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RemoteRating {
    pub total_votes: Option<u32>,
    pub average_vote: Option<f32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteAuthor {
    pub name: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteLicense {
    pub name: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RemoteScm {
    pub url: Option<String>,
    pub connection: Option<RemoteScmConnection>,
    pub developer_connection: Option<RemoteScmConnection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteScmConnection {
    pub system: Option<String>,
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteIssueManagement {
    pub system: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteProperty {
    pub key: Option<String>,
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteRepository {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub uri: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteDependency {
    pub id: Option<String>,
    pub constraint: Option<String>,
    pub optional: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_a_sparse_payload() {
        let record: RemoteExtension = serde_json::from_str(r#"{"id": "org.example.vault"}"#).unwrap();

        assert_eq!(record.id.as_deref(), Some("org.example.vault"));
        assert!(record.version.is_none());
        assert!(record.features.is_empty());
        assert!(record.rating.is_none());
    }

    #[test]
    fn test_decodes_wire_field_names() {
        let record: RemoteExtension = serde_json::from_str(
            r#"{
                "id": "org.example.vault",
                "type": "jar",
                "issueManagement": {"system": "jira", "url": "https://jira.example.org"},
                "rating": {"totalVotes": 10, "averageVote": 3.5},
                "scm": {"developerConnection": {"system": "git", "path": "git@example.org:vault.git"}}
            }"#,
        )
        .unwrap();

        assert_eq!(record.kind.as_deref(), Some("jar"));
        assert_eq!(record.issue_management.unwrap().system.as_deref(), Some("jira"));
        assert_eq!(record.rating.unwrap().total_votes, Some(10));
        assert!(record.scm.unwrap().developer_connection.is_some());
    }
}
