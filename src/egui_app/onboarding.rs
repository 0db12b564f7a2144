//! # Onboarding Wizard
//!
//! Collects the vault directory, optional GitHub remote and the master
//! encryption key over four linear steps, then issues a single
//! initialization call.
//!
//! ## Step guards
//!
//! - `Welcome → Vault`: always
//! - `Vault → GitHub`: a vault path has been chosen
//! - `GitHub → Encryption`: always; an incomplete GitHub group means "skip"
//! - `Encryption → submit`: a non-empty key and no submission in flight
//!
//! The draft only grows: going back never clears fields entered on later
//! steps. It is discarded when initialization succeeds. On failure the
//! daemon's message is kept for the Encryption step and the user can retry
//! or go back.

use std::fmt;
use std::path::PathBuf;

use crate::egui_app::services::{Pending, Services};
use crate::egui_app::types::WizardStep;
use crate::shared::{BackendError, GithubConfig, InitializeRequest, DEFAULT_BRANCH};

/// Key length below which the wizard shows a strength hint
pub const RECOMMENDED_KEY_LEN: usize = 32;

/// GitHub fields as typed by the user
#[derive(Clone, PartialEq, Eq)]
pub struct GithubDraft {
    pub token: String,
    pub owner: String,
    pub repo: String,
    pub branch: String,
}

impl Default for GithubDraft {
    fn default() -> Self {
        Self {
            token: String::new(),
            owner: String::new(),
            repo: String::new(),
            branch: DEFAULT_BRANCH.to_string(),
        }
    }
}

impl GithubDraft {
    /// The remote to configure, or `None` when the group is incomplete
    ///
    /// Token, owner and repo must all be filled in; otherwise GitHub sync
    /// is skipped as a whole.
    pub fn to_config(&self) -> Option<GithubConfig> {
        let token = self.token.trim();
        let owner = self.owner.trim();
        let repo = self.repo.trim();
        if token.is_empty() || owner.is_empty() || repo.is_empty() {
            return None;
        }

        let branch = match self.branch.trim() {
            "" => DEFAULT_BRANCH,
            branch => branch,
        };

        Some(GithubConfig {
            token: token.to_string(),
            owner: owner.to_string(),
            repo: repo.to_string(),
            branch: branch.to_string(),
        })
    }

    pub fn is_configured(&self) -> bool {
        self.to_config().is_some()
    }
}

impl fmt::Debug for GithubDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GithubDraft")
            .field("token", &"<redacted>")
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .field("branch", &self.branch)
            .finish()
    }
}

/// Configuration collected so far
#[derive(Clone, Default, PartialEq, Eq)]
pub struct OnboardingDraft {
    pub vault_path: Option<String>,
    pub github: GithubDraft,
    pub encryption_key: String,
}

impl OnboardingDraft {
    pub fn has_vault_path(&self) -> bool {
        self.vault_path.as_deref().is_some_and(|path| !path.is_empty())
    }

    pub fn has_encryption_key(&self) -> bool {
        !self.encryption_key.is_empty()
    }

    /// Non-empty but shorter than the recommended length
    pub fn key_is_weak(&self) -> bool {
        self.has_encryption_key() && self.encryption_key.chars().count() < RECOMMENDED_KEY_LEN
    }

    /// True when nothing has been entered
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// The initialization payload; `None` until vault path and key are set
    pub fn to_request(&self) -> Option<InitializeRequest> {
        if !self.has_vault_path() || !self.has_encryption_key() {
            return None;
        }

        Some(InitializeRequest {
            vault_path: self.vault_path.clone()?,
            github_config: self.github.to_config(),
            encryption_key: self.encryption_key.clone(),
        })
    }
}

impl fmt::Debug for OnboardingDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OnboardingDraft")
            .field("vault_path", &self.vault_path)
            .field("github", &self.github)
            .field("encryption_key", &"<redacted>")
            .finish()
    }
}

/// Result of a forward action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the given step
    Moved(WizardStep),
    /// Guard not satisfied; nothing changed
    Blocked,
    /// Ready to initialize with this payload
    Submit(InitializeRequest),
}

/// How a submission ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Completed,
    Failed(String),
}

pub struct OnboardingWizard {
    step: WizardStep,
    draft: OnboardingDraft,
    submitting: bool,
    error: Option<String>,
    submission: Option<Pending<()>>,
    directory_request: Option<Pending<Option<PathBuf>>>,
}

impl OnboardingWizard {
    pub fn new() -> Self {
        Self {
            step: WizardStep::Welcome,
            draft: OnboardingDraft::default(),
            submitting: false,
            error: None,
            submission: None,
            directory_request: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &OnboardingDraft {
        &self.draft
    }

    /// Mutable access for text inputs
    pub fn draft_mut(&mut self) -> &mut OnboardingDraft {
        &mut self.draft
    }

    pub fn set_vault_path(&mut self, path: impl Into<String>) {
        let path = path.into();
        if !path.is_empty() {
            self.draft.vault_path = Some(path);
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Error from the last failed submission
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_browsing(&self) -> bool {
        self.directory_request.is_some()
    }

    /// Whether the forward action is enabled on the current step
    pub fn can_advance(&self) -> bool {
        match self.step {
            WizardStep::Welcome | WizardStep::GitHub => true,
            WizardStep::Vault => self.draft.has_vault_path(),
            WizardStep::Encryption => self.draft.has_encryption_key() && !self.submitting,
        }
    }

    pub fn can_go_back(&self) -> bool {
        !self.submitting && self.step.previous().is_some()
    }

    /// Label of the forward button
    pub fn forward_label(&self) -> &'static str {
        match self.step {
            WizardStep::Welcome => "Get Started",
            WizardStep::Vault => "Continue",
            WizardStep::GitHub if self.draft.github.is_configured() => "Continue",
            WizardStep::GitHub => "Skip for now",
            WizardStep::Encryption => "Finish Setup",
        }
    }

    /// Apply the forward action to the state machine
    ///
    /// On the last step this enters the submitting state and returns the
    /// payload; the caller is responsible for issuing the call.
    pub fn advance(&mut self) -> Advance {
        if !self.can_advance() {
            return Advance::Blocked;
        }

        if let Some(next) = self.step.next() {
            self.step = next;
            return Advance::Moved(next);
        }

        match self.draft.to_request() {
            Some(request) => {
                self.submitting = true;
                self.error = None;
                Advance::Submit(request)
            }
            None => Advance::Blocked,
        }
    }

    /// Forward action, issuing the initialization call when due
    pub fn next(&mut self, services: &Services) -> Advance {
        let advance = self.advance();
        if let Advance::Submit(request) = &advance {
            tracing::info!(
                github = request.github_config.is_some(),
                "Submitting onboarding configuration"
            );
            let request = request.clone();
            self.submission =
                Some(services.request(move |backend| async move { backend.initialize(request).await }));
        }
        advance
    }

    /// Step back; never clears entered fields
    pub fn back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        match self.step.previous() {
            Some(previous) => {
                self.step = previous;
                true
            }
            None => false,
        }
    }

    /// Open the directory dialog unless one is already open
    pub fn browse_vault(&mut self, services: &Services) -> bool {
        if self.directory_request.is_some() {
            return false;
        }
        self.directory_request = Some(services.pick_directory("Select your Vault Directory"));
        true
    }

    /// Apply whatever async results have arrived
    pub fn poll(&mut self) -> Option<SubmissionOutcome> {
        if let Some(result) = self.directory_request.as_mut().and_then(Pending::try_take) {
            self.directory_request = None;
            self.apply_directory(result);
        }

        let result = self.submission.as_mut()?.try_take()?;
        self.submission = None;
        Some(self.finish_submission(result))
    }

    /// Wait for the in-flight initialization call
    pub async fn settle_submission(&mut self) -> Option<SubmissionOutcome> {
        let mut submission = self.submission.take()?;
        let result = submission.wait().await;
        Some(self.finish_submission(result))
    }

    /// Wait for the directory dialog
    pub async fn settle_browse(&mut self) {
        if let Some(mut request) = self.directory_request.take() {
            let result = request.wait().await;
            self.apply_directory(result);
        }
    }

    fn apply_directory(&mut self, result: Result<Option<PathBuf>, BackendError>) {
        match result {
            Ok(Some(path)) => match path.to_str() {
                Some(path) => self.set_vault_path(path),
                None => tracing::warn!(
                    "Ignoring selected directory with a non-UTF-8 path: {}",
                    path.display()
                ),
            },
            Ok(None) => tracing::debug!("Directory selection dismissed"),
            Err(e) => tracing::warn!("Directory selection failed: {}", e),
        }
    }

    /// Apply the initialization result
    pub fn finish_submission(&mut self, result: Result<(), BackendError>) -> SubmissionOutcome {
        self.submitting = false;
        match result {
            Ok(()) => {
                tracing::info!("Onboarding complete");
                self.draft = OnboardingDraft::default();
                self.error = None;
                SubmissionOutcome::Completed
            }
            Err(e) => {
                let message = e.to_string();
                tracing::warn!("Initialization failed: {}", message);
                self.error = Some(message.clone());
                SubmissionOutcome::Failed(message)
            }
        }
    }
}

impl Default for OnboardingWizard {
    fn default() -> Self {
        Self::new()
    }
}
