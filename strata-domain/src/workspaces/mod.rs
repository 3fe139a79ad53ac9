pub mod app_index;
pub mod errors;
pub mod indicators;
pub mod traits;
pub mod types;

pub use app_index::window_app_index;
pub use errors::SwitchError;
pub use indicators::{compute_indicators, IconSlot, IndicatorModel};
pub use traits::{ApplicationRegistry, WorkspaceNamesStore, WorkspaceProvider};
pub use types::{RunningApp, WindowRef, WorkspaceIndex, WorkspaceSnapshot};
