//! Wizard submission against the backend

use std::sync::Arc;

use pretty_assertions::assert_eq;

use oversync::egui_app::{Advance, OnboardingWizard, SubmissionOutcome, WizardStep};
use oversync::shared::{BackendError, GithubConfig, InitializeRequest};

use crate::common::{services, services_with, MockBackend, MockPicker, Op};

/// Walk from Welcome to Encryption with the given vault path
fn wizard_at_encryption(vault: &str) -> OnboardingWizard {
    let mut wizard = OnboardingWizard::new();
    assert_eq!(wizard.advance(), Advance::Moved(WizardStep::Vault));
    wizard.set_vault_path(vault);
    assert_eq!(wizard.advance(), Advance::Moved(WizardStep::GitHub));
    assert_eq!(wizard.advance(), Advance::Moved(WizardStep::Encryption));
    wizard
}

#[tokio::test]
async fn test_submission_without_github() {
    let backend = Arc::new(MockBackend::uninitialized());
    let services = services(&backend);

    let mut wizard = wizard_at_encryption("/vault");
    wizard.draft_mut().encryption_key = "correct-horse-battery-staple".to_string();

    let advance = wizard.next(&services);
    assert!(matches!(advance, Advance::Submit(_)));
    assert!(wizard.is_submitting());

    assert_eq!(wizard.settle_submission().await, Some(SubmissionOutcome::Completed));
    assert!(!wizard.is_submitting());
    assert!(wizard.draft().is_empty());

    assert_eq!(
        backend.initialize_requests(),
        vec![InitializeRequest {
            vault_path: "/vault".to_string(),
            github_config: None,
            encryption_key: "correct-horse-battery-staple".to_string(),
        }]
    );
}

#[tokio::test]
async fn test_submission_with_github_and_default_branch() {
    let backend = Arc::new(MockBackend::uninitialized());
    let services = services(&backend);

    let mut wizard = OnboardingWizard::new();
    wizard.advance();
    wizard.set_vault_path("/home/sam/Vault");
    wizard.advance();
    {
        let github = &mut wizard.draft_mut().github;
        github.token = "ghp_secret".to_string();
        github.owner = "sam".to_string();
        github.repo = "vault-backup".to_string();
        github.branch = "  ".to_string();
    }
    assert_eq!(wizard.forward_label(), "Continue");
    wizard.advance();
    wizard.draft_mut().encryption_key = "k".to_string();
    wizard.next(&services);

    assert_eq!(wizard.settle_submission().await, Some(SubmissionOutcome::Completed));

    let requests = backend.initialize_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].github_config,
        Some(GithubConfig {
            token: "ghp_secret".to_string(),
            owner: "sam".to_string(),
            repo: "vault-backup".to_string(),
            branch: "main".to_string(),
        })
    );
}

#[tokio::test]
async fn test_failed_submission_keeps_draft_and_shows_error() {
    let backend = Arc::new(MockBackend::uninitialized());
    backend.set_initialize(Err(BackendError::rejected("Vault path does not exist")));
    let services = services(&backend);

    let mut wizard = wizard_at_encryption("/missing");
    wizard.draft_mut().encryption_key = "secret".to_string();
    wizard.next(&services);

    assert_eq!(
        wizard.settle_submission().await,
        Some(SubmissionOutcome::Failed("Vault path does not exist".to_string()))
    );
    assert_eq!(wizard.step(), WizardStep::Encryption);
    assert_eq!(wizard.error(), Some("Vault path does not exist"));
    assert_eq!(wizard.draft().vault_path.as_deref(), Some("/missing"));
    assert_eq!(wizard.draft().encryption_key, "secret");

    // Retry after fixing the path
    backend.set_initialize(Ok(()));
    assert!(wizard.back());
    assert!(wizard.back());
    wizard.set_vault_path("/vault");
    wizard.advance();
    wizard.advance();
    wizard.next(&services);
    assert_eq!(wizard.settle_submission().await, Some(SubmissionOutcome::Completed));
    assert_eq!(backend.calls(Op::Initialize), 2);
}

#[tokio::test]
async fn test_single_submission_while_in_flight() {
    let backend = Arc::new(MockBackend::uninitialized());
    backend.gate(Op::Initialize);
    let services = services(&backend);

    let mut wizard = wizard_at_encryption("/vault");
    wizard.draft_mut().encryption_key = "secret".to_string();

    assert!(matches!(wizard.next(&services), Advance::Submit(_)));
    assert_eq!(wizard.next(&services), Advance::Blocked);
    assert!(!wizard.back());
    assert_eq!(wizard.step(), WizardStep::Encryption);

    backend.release(Op::Initialize, 1);
    assert_eq!(wizard.settle_submission().await, Some(SubmissionOutcome::Completed));
    assert_eq!(backend.initialize_requests().len(), 1);
}

#[tokio::test]
async fn test_browse_sets_vault_path() {
    let backend = Arc::new(MockBackend::uninitialized());
    let picker = Arc::new(MockPicker::choosing("/home/sam/Vault"));
    let services = services_with(&backend, &picker);

    let mut wizard = OnboardingWizard::new();
    wizard.advance();
    assert!(!wizard.can_advance());

    assert!(wizard.browse_vault(&services));
    assert!(!wizard.browse_vault(&services));
    wizard.settle_browse().await;

    assert_eq!(wizard.draft().vault_path.as_deref(), Some("/home/sam/Vault"));
    assert!(wizard.can_advance());
    assert_eq!(picker.calls(), 1);
}

#[tokio::test]
async fn test_dismissed_browse_keeps_previous_path() {
    let backend = Arc::new(MockBackend::uninitialized());
    let picker = Arc::new(MockPicker::dismissed());
    let services = services_with(&backend, &picker);

    let mut wizard = OnboardingWizard::new();
    wizard.advance();
    wizard.set_vault_path("/vault");

    wizard.browse_vault(&services);
    wizard.settle_browse().await;

    assert_eq!(wizard.draft().vault_path.as_deref(), Some("/vault"));
}
