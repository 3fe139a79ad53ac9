//! # Strata Panel Library (`strata-panel`)
//!
//! The reactive half of the Strata workspace indicator: wiring between the
//! host shell's change signals and the pure reconciliation model in
//! `strata-domain`.
//!
//! The central type is [`WorkspaceBar`]. On `initialize` it subscribes to the
//! host's change signals and mounts its row on the panel; every subsequent
//! signal triggers a full rebuild of the indicator list; `teardown` drains
//! every subscription and destroys the row. The host's UI toolkit sits behind
//! the [`IndicatorRow`] and [`PanelHost`] traits, so the whole lifecycle runs
//! under test with in-memory fakes.
//!
//! Everything here is single-threaded and event-driven on the host UI thread:
//! `Rc`/`RefCell` ownership, no async runtime, no locking.

pub mod error;
pub mod signal;
pub mod view;
pub mod workspace_bar;

pub use error::PanelError;
pub use signal::{ChangeSignal, EventSource, ListenerId};
pub use view::{IndicatorRow, IndicatorView, PanelHost, PanelSide};
pub use workspace_bar::{StateSignals, WorkspaceBar};
