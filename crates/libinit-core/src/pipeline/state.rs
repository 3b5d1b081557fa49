//! Cross-step pipeline state

/// How far the pipeline got
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Idle,
    Validated,
    Scaffolded,
    VcsInitialized,
    DepsResolved,
    ReleaseConfigured,
    EditorOpened,
    Done,
}

/// Value threaded through every step and returned updated
///
/// `remote_repo_created` only flips to true after a successful remote
/// creation and gates release setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProvisioningState {
    pub stage: Stage,
    pub remote_repo_created: bool,
    pub dependencies_installed: bool,
}

impl Default for ProvisioningState {
    fn default() -> Self {
        Self {
            stage: Stage::Idle,
            remote_repo_created: false,
            dependencies_installed: false,
        }
    }
}

impl ProvisioningState {
    pub fn advance(self, stage: Stage) -> Self {
        debug_assert!(stage >= self.stage, "pipeline stages only move forward");
        Self { stage, ..self }
    }

    pub fn with_remote(self) -> Self {
        Self {
            remote_repo_created: true,
            ..self
        }
    }

    pub fn with_dependencies(self) -> Self {
        Self {
            dependencies_installed: true,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle_without_remote() {
        let state = ProvisioningState::default();
        assert_eq!(state.stage, Stage::Idle);
        assert!(!state.remote_repo_created);
    }

    #[test]
    fn test_updates_return_new_values() {
        let start = ProvisioningState::default();
        let next = start.advance(Stage::Scaffolded).with_remote();
        assert_eq!(start.stage, Stage::Idle);
        assert_eq!(next.stage, Stage::Scaffolded);
        assert!(next.remote_repo_created);
        assert!(!next.dependencies_installed);
    }

    #[test]
    fn test_stage_order_matches_pipeline() {
        assert!(Stage::Validated < Stage::Scaffolded);
        assert!(Stage::DepsResolved < Stage::ReleaseConfigured);
        assert!(Stage::EditorOpened < Stage::Done);
    }
}
