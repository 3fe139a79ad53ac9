//! Traits for the external collaborators the reconciler reads from.
//!
//! The host shell implements these over its own state. Everything is
//! synchronous and single-threaded: reads are guaranteed valid at call time,
//! and the only mutation this component ever requests is
//! [`WorkspaceProvider::switch_to`].

use super::errors::SwitchError;
use super::types::{RunningApp, WorkspaceIndex, WorkspaceSnapshot};

/// Read access to the workspace manager, plus the single switch mutation.
pub trait WorkspaceProvider {
    /// Number of workspaces currently known to the manager.
    fn workspace_count(&self) -> usize;

    /// Index of the currently active workspace.
    fn active_index(&self) -> WorkspaceIndex;

    /// Snapshot of the workspace at `index`, or `None` if it no longer
    /// exists (indices shift on removal).
    fn workspace_at(&self, index: WorkspaceIndex) -> Option<WorkspaceSnapshot>;

    /// Requests a switch to the workspace at `index`.
    fn switch_to(&self, index: WorkspaceIndex) -> Result<(), SwitchError>;
}

/// Read access to the set of currently running applications.
///
/// The returned snapshot must reflect the current run-state; the reconciler
/// enumerates it fresh on every refresh so icons for exited applications
/// never linger.
pub trait ApplicationRegistry {
    fn running_apps(&self) -> Vec<RunningApp>;
}

/// Read access to the externally persisted list of workspace names.
///
/// Index-aligned with [`WorkspaceIndex`]; may be shorter than the live
/// workspace count. This component never writes the store.
pub trait WorkspaceNamesStore {
    fn names(&self) -> Vec<String>;
}
