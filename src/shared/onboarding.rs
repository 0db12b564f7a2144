/**
 * Initialization Request Types
 *
 * The payload sent once when onboarding completes. Secrets are kept out of
 * `Debug` output so request values can be traced safely.
 */
use serde::{Deserialize, Serialize};
use std::fmt;

/// Branch used when the user leaves the branch field blank
pub const DEFAULT_BRANCH: &str = "main";

/// Remote GitHub repository used as encrypted storage
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GithubConfig {
    pub token: String,
    pub owner: String,
    pub repo: String,
    pub branch: String,
}

impl fmt::Debug for GithubConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GithubConfig")
            .field("token", &"<redacted>")
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .field("branch", &self.branch)
            .finish()
    }
}

/// Arguments of the one-shot initialization call
///
/// `github_config` serializes as `null` when GitHub sync was skipped, so the
/// daemon can tell "no remote" apart from a remote with empty fields.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeRequest {
    pub vault_path: String,
    pub github_config: Option<GithubConfig>,
    pub encryption_key: String,
}

impl fmt::Debug for InitializeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InitializeRequest")
            .field("vault_path", &self.vault_path)
            .field("github_config", &self.github_config)
            .field("encryption_key", &"<redacted>")
            .finish()
    }
}

/// Body of a connect request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectRequest {
    pub ticket: String,
}

/// Body returned by ticket generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketResponse {
    pub ticket: String,
}
