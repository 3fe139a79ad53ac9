//! Computation of the indicator list from a state snapshot.
//!
//! This is the reconciliation core: given the workspace manager state, the
//! application registry state, and the stored workspace names, produce the
//! ordered list of indicators the row should show. The computation is pure
//! and deterministic; running it twice over unchanged state yields
//! structurally identical output.

use std::collections::HashSet;

use tracing::trace;

use strata_core::types::ApplicationId;

use super::app_index::window_app_index;
use super::traits::{ApplicationRegistry, WorkspaceNamesStore, WorkspaceProvider};
use super::types::{WorkspaceIndex, WorkspaceSnapshot};

/// One application icon within an indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSlot {
    pub app: ApplicationId,
    pub icon_name: Option<String>,
    /// Set on the second and later icons of an indicator, so the view layer
    /// can style overlapping icons differently.
    pub multiple: bool,
}

/// View model for one visible workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorModel {
    pub index: WorkspaceIndex,
    pub label: String,
    pub is_active: bool,
    /// Set on the first indicator built in a cycle, for edge styling.
    pub is_first: bool,
    pub icons: Vec<IconSlot>,
}

/// Decides whether a workspace appears in the row.
///
/// Inclusion rule: the active workspace always shows; any other workspace
/// shows iff it holds at least one non-sticky window.
fn is_visible(index: WorkspaceIndex, active: WorkspaceIndex, ws: &WorkspaceSnapshot) -> bool {
    index == active || ws.non_sticky_count() > 0
}

/// Label shown when the names store has no entry for this workspace:
/// 1-based position plus the non-sticky window count.
fn fallback_label(index: WorkspaceIndex, window_count: usize) -> String {
    format!("{} ({} w)", index + 1, window_count)
}

/// Computes the ordered indicator list from current external state.
///
/// Reads everything fresh: the window-to-application index is rebuilt from
/// the registry snapshot on every call. Windows whose owning application
/// cannot be resolved (the application exited mid-enumeration) are skipped.
pub fn compute_indicators(
    provider: &dyn WorkspaceProvider,
    registry: &dyn ApplicationRegistry,
    names: &[String],
) -> Vec<IndicatorModel> {
    let apps = registry.running_apps();
    let app_of_window = window_app_index(&apps);

    let count = provider.workspace_count();
    let active = provider.active_index();
    trace!(count, active, "computing indicators");

    let mut indicators = Vec::new();
    for index in 0..count {
        let Some(ws) = provider.workspace_at(index) else {
            // The workspace vanished between the count read and this fetch.
            continue;
        };
        if !is_visible(index, active, &ws) {
            continue;
        }

        let window_count = ws.non_sticky_count();
        let label = names
            .get(index)
            .filter(|name| !name.is_empty())
            .cloned()
            .unwrap_or_else(|| fallback_label(index, window_count));

        // De-duplicated app set, in first-seen order among this workspace's
        // non-sticky windows.
        let mut seen: HashSet<usize> = HashSet::new();
        let mut icons = Vec::new();
        for window in ws.non_sticky_windows() {
            let Some(&pos) = app_of_window.get(&window.id) else {
                continue;
            };
            if !seen.insert(pos) {
                continue;
            }
            let app = &apps[pos];
            icons.push(IconSlot {
                app: app.id.clone(),
                icon_name: app.icon_name.clone(),
                multiple: !icons.is_empty(),
            });
        }

        indicators.push(IndicatorModel {
            index,
            label,
            is_active: index == active,
            is_first: indicators.is_empty(),
            icons,
        });
    }
    indicators
}
