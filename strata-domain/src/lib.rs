//! # Strata Domain Library (`strata-domain`)
//!
//! The reconciliation model behind the Strata workspace indicator row. This
//! crate is pure: it defines snapshot types for the external workspace and
//! application state, the collaborator traits the host shell implements, and
//! the functions that turn a state snapshot into the list of indicators to
//! render. It performs no I/O and holds no UI resources, which is what makes
//! the reconciliation step unit-testable without a live host.

pub mod workspaces;

pub use workspaces::{
    compute_indicators, window_app_index, ApplicationRegistry, IconSlot, IndicatorModel,
    RunningApp, SwitchError, WindowRef, WorkspaceIndex, WorkspaceNamesStore, WorkspaceProvider,
    WorkspaceSnapshot,
};
