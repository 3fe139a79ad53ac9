//! Window-to-application index, rebuilt from scratch on every refresh.

use std::collections::HashMap;

use strata_core::types::WindowId;

use super::types::RunningApp;

/// Builds the window-id to application mapping from a registry snapshot.
///
/// Pure function over the snapshot, O(total windows). The result maps each
/// window to the position of its owning app in `apps`; when two apps claim
/// the same window the first one in registry order wins, keeping the result
/// deterministic.
pub fn window_app_index(apps: &[RunningApp]) -> HashMap<WindowId, usize> {
    let mut index = HashMap::new();
    for (pos, app) in apps.iter().enumerate() {
        for window in &app.windows {
            index.entry(window.id).or_insert(pos);
        }
    }
    index
}
