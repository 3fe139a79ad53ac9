//! Snapshot types describing external workspace and application state.
//!
//! All of these are ephemeral values read fresh from the host on every
//! refresh; nothing here is cached between reconciliation cycles.

use strata_core::types::{ApplicationId, WindowId};

/// Index of a workspace in the host's workspace ordering.
///
/// 0-based and contiguous. Not stable across workspace removal: indices shift
/// when a workspace in front of them disappears, which is why indicators are
/// rebuilt from scratch instead of patched.
pub type WorkspaceIndex = usize;

/// A toplevel window as seen by the workspace manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowRef {
    pub id: WindowId,
    /// Sticky windows are present on all workspaces and excluded from
    /// per-workspace emptiness checks.
    pub on_all_workspaces: bool,
}

impl WindowRef {
    pub fn new(id: impl Into<WindowId>) -> Self {
        Self {
            id: id.into(),
            on_all_workspaces: false,
        }
    }

    pub fn sticky(id: impl Into<WindowId>) -> Self {
        Self {
            id: id.into(),
            on_all_workspaces: true,
        }
    }
}

/// Point-in-time view of one workspace: its windows, in stacking order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkspaceSnapshot {
    pub windows: Vec<WindowRef>,
}

impl WorkspaceSnapshot {
    pub fn new(windows: Vec<WindowRef>) -> Self {
        Self { windows }
    }

    /// Windows counted for the emptiness check and the app set, i.e. those
    /// not marked on-all-workspaces.
    pub fn non_sticky_windows(&self) -> impl Iterator<Item = &WindowRef> {
        self.windows.iter().filter(|w| !w.on_all_workspaces)
    }

    pub fn non_sticky_count(&self) -> usize {
        self.non_sticky_windows().count()
    }
}

/// A running application as reported by the host's application registry,
/// together with the windows it currently owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunningApp {
    pub id: ApplicationId,
    /// Themed icon name the view layer hands to the host's icon source.
    pub icon_name: Option<String>,
    pub windows: Vec<WindowRef>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_sticky_count_excludes_sticky_windows() {
        let ws = WorkspaceSnapshot::new(vec![
            WindowRef::new(1),
            WindowRef::sticky(2),
            WindowRef::new(3),
        ]);
        assert_eq!(ws.non_sticky_count(), 2);
        let ids: Vec<u64> = ws.non_sticky_windows().map(|w| w.id.value()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn empty_workspace_has_zero_non_sticky() {
        let ws = WorkspaceSnapshot::default();
        assert_eq!(ws.non_sticky_count(), 0);

        let only_sticky = WorkspaceSnapshot::new(vec![WindowRef::sticky(7)]);
        assert_eq!(only_sticky.non_sticky_count(), 0);
    }
}
