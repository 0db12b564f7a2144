/**
 * Shared Types Module
 *
 * Defines the top-level phase, the onboarding steps and the navigation
 * sections of the live application.
 */

/// Which top-level view is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    /// Startup probe still outstanding
    #[default]
    Unknown,
    /// Backend is not initialized; show the onboarding wizard
    NeedsOnboarding,
    /// Backend is initialized; show the dashboard
    Ready,
}

impl AppPhase {
    /// Whether moving from `self` to `next` is a legal phase change
    pub fn can_transition_to(self, next: AppPhase) -> bool {
        matches!(
            (self, next),
            (AppPhase::Unknown, AppPhase::NeedsOnboarding)
                | (AppPhase::Unknown, AppPhase::Ready)
                | (AppPhase::NeedsOnboarding, AppPhase::Ready)
        )
    }
}

/// Onboarding wizard steps, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WizardStep {
    Welcome,
    Vault,
    GitHub,
    Encryption,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::Welcome,
        WizardStep::Vault,
        WizardStep::GitHub,
        WizardStep::Encryption,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// Zero-based position, used for the progress dots
    pub fn index(self) -> usize {
        match self {
            WizardStep::Welcome => 0,
            WizardStep::Vault => 1,
            WizardStep::GitHub => 2,
            WizardStep::Encryption => 3,
        }
    }

    /// Following step; `None` on the last step
    pub fn next(self) -> Option<WizardStep> {
        Self::ALL.get(self.index() + 1).copied()
    }

    /// Preceding step; `None` on the first step
    pub fn previous(self) -> Option<WizardStep> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }
}

/// Navigation rail sections of the live application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavSection {
    #[default]
    Sync,
    Peers,
    Settings,
}

impl NavSection {
    pub const ALL: [NavSection; 3] = [NavSection::Sync, NavSection::Peers, NavSection::Settings];

    pub fn label(self) -> &'static str {
        match self {
            NavSection::Sync => "Sync",
            NavSection::Peers => "Peers",
            NavSection::Settings => "Settings",
        }
    }
}
