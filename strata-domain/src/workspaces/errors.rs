use thiserror::Error;

use super::types::WorkspaceIndex;

/// Failure of a workspace switch request.
///
/// The only expected case is a stale index: the workspace an indicator was
/// built for was removed before the click arrived. Callers treat this as a
/// silent no-op, never as a fatal error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SwitchError {
    #[error("workspace {0} no longer exists")]
    WorkspaceGone(WorkspaceIndex),
}
