//! Interfaces to the host's UI toolkit.
//!
//! The bar never touches toolkit types directly: it hands finished
//! [`IndicatorView`] values to an [`IndicatorRow`] and asks a [`PanelHost`]
//! to mount or remove the row. Concrete implementations live with the host
//! shell glue.

use crate::error::PanelError;

pub use strata_domain::workspaces::{IconSlot, IndicatorModel};

/// One finished indicator: its view model plus the activation callback the
/// view should invoke on click or touch.
///
/// The callback closes over its workspace index by value at construction
/// time; it is discarded together with the view on the next rebuild.
pub struct IndicatorView {
    pub model: IndicatorModel,
    pub on_activate: Box<dyn Fn()>,
}

impl std::fmt::Debug for IndicatorView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndicatorView")
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

/// The row container owning the indicator widgets.
///
/// `replace` swaps the full child set in one call; from the UI's perspective
/// the update is atomic. Incremental diffing is deliberately absent; the row
/// holds at most a few dozen indicators.
pub trait IndicatorRow {
    /// Applies row styling once, at initialize time.
    fn apply_style(&self, spacing: u32, icon_size: u32);

    /// Destroys all current children and builds one widget per view.
    fn replace(&self, indicators: Vec<IndicatorView>);

    /// Destroys all current children.
    fn clear(&self);
}

/// Which side of the panel the row mounts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelSide {
    Left,
    Center,
    Right,
}

impl PanelSide {
    /// Maps the configuration string (already validated by the config
    /// loader) to a side, defaulting to the left edge.
    pub fn from_config(side: &str) -> Self {
        match side {
            "center" => PanelSide::Center,
            "right" => PanelSide::Right,
            _ => PanelSide::Left,
        }
    }
}

/// The host status bar. Used only at initialize/teardown time.
pub trait PanelHost {
    /// Mounts the bar's row on the panel.
    fn add_indicator_widget(&self, priority: u32, side: PanelSide) -> Result<(), PanelError>;

    /// Removes the bar's row from the panel. Must tolerate being called when
    /// nothing is mounted.
    fn remove_indicator_widget(&self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_side_from_config() {
        assert_eq!(PanelSide::from_config("left"), PanelSide::Left);
        assert_eq!(PanelSide::from_config("center"), PanelSide::Center);
        assert_eq!(PanelSide::from_config("right"), PanelSide::Right);
        assert_eq!(PanelSide::from_config("unknown"), PanelSide::Left);
    }
}
