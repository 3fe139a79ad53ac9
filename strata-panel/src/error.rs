use thiserror::Error;

/// Errors surfaced by the panel layer.
///
/// These indicate a host/version mismatch outside this component's control
/// and are not recoverable locally. Stale workspace references and listener
/// lifecycle anomalies are deliberately *not* represented here; those are
/// handled as guarded no-ops where they occur.
#[derive(Debug, Error)]
pub enum PanelError {
    /// The host panel rejected the indicator row.
    #[error("host panel unavailable: {0}")]
    HostUnavailable(String),

    /// `initialize` was called on an already initialized bar.
    #[error("workspace bar is already initialized")]
    AlreadyInitialized,
}
