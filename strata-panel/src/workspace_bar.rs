//! The workspace indicator bar: lifecycle and event wiring.
//!
//! [`WorkspaceBar`] owns the one persistent row container and keeps it
//! consistent with external state by full rebuild: every change signal leads
//! to one [`WorkspaceBar::refresh`], which recomputes the indicator list from
//! scratch and swaps the row's children. Only the cached workspace-names
//! list survives between refreshes, and it is reloaded exactly when the
//! names store signals a change.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use tracing::{debug, info, trace};

use strata_core::config::PanelConfig;
use strata_domain::workspaces::{
    compute_indicators, ApplicationRegistry, WorkspaceIndex, WorkspaceNamesStore,
    WorkspaceProvider,
};

use crate::error::PanelError;
use crate::signal::{EventSource, ListenerId};
use crate::view::{IndicatorRow, IndicatorView, PanelHost, PanelSide};

/// The change signals the bar subscribes to during `initialize`.
///
/// One source per external state dimension; all of them funnel into a
/// refresh, the names signal additionally reloads the names cache first.
pub struct StateSignals {
    pub names_changed: Rc<dyn EventSource>,
    pub active_workspace_changed: Rc<dyn EventSource>,
    pub workspace_count_changed: Rc<dyn EventSource>,
    pub window_stacking_changed: Rc<dyn EventSource>,
    pub tracked_windows_changed: Rc<dyn EventSource>,
}

struct Subscription {
    source: Rc<dyn EventSource>,
    id: ListenerId,
}

/// Reconciler for the workspace indicator row.
pub struct WorkspaceBar {
    provider: Rc<dyn WorkspaceProvider>,
    registry: Rc<dyn ApplicationRegistry>,
    names_store: Rc<dyn WorkspaceNamesStore>,
    signals: StateSignals,
    row: Rc<dyn IndicatorRow>,
    host: Rc<dyn PanelHost>,
    config: PanelConfig,
    /// Names cache, reloaded only on the store's change signal.
    names: RefCell<Vec<String>>,
    subscriptions: RefCell<Vec<Subscription>>,
    /// Re-entrancy guard: destroying children can fire change signals
    /// synchronously, which must not recurse into a half-built row.
    refreshing: Cell<bool>,
    initialized: Cell<bool>,
}

impl WorkspaceBar {
    pub fn new(
        provider: Rc<dyn WorkspaceProvider>,
        registry: Rc<dyn ApplicationRegistry>,
        names_store: Rc<dyn WorkspaceNamesStore>,
        signals: StateSignals,
        row: Rc<dyn IndicatorRow>,
        host: Rc<dyn PanelHost>,
        config: PanelConfig,
    ) -> Rc<Self> {
        Rc::new(Self {
            provider,
            registry,
            names_store,
            signals,
            row,
            host,
            config,
            names: RefCell::new(Vec::new()),
            subscriptions: RefCell::new(Vec::new()),
            refreshing: Cell::new(false),
            initialized: Cell::new(false),
        })
    }

    /// Mounts the row on the host panel, subscribes to every change signal,
    /// and performs the initial refresh.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::AlreadyInitialized`] on a second call without an
    /// intervening [`teardown`](Self::teardown), and propagates host mount
    /// failures.
    pub fn initialize(self: &Rc<Self>) -> Result<(), PanelError> {
        if self.initialized.replace(true) {
            return Err(PanelError::AlreadyInitialized);
        }

        self.row
            .apply_style(self.config.spacing, self.config.icon_size);
        if let Err(e) = self
            .host
            .add_indicator_widget(self.config.priority, PanelSide::from_config(&self.config.side))
        {
            self.initialized.set(false);
            return Err(e);
        }

        self.subscribe(Rc::clone(&self.signals.names_changed), {
            let bar = Rc::downgrade(self);
            move || {
                if let Some(bar) = bar.upgrade() {
                    bar.reload_names();
                    bar.refresh();
                }
            }
        });
        for source in [
            &self.signals.active_workspace_changed,
            &self.signals.workspace_count_changed,
            &self.signals.window_stacking_changed,
            &self.signals.tracked_windows_changed,
        ] {
            self.subscribe(Rc::clone(source), {
                let bar = Rc::downgrade(self);
                move || {
                    if let Some(bar) = bar.upgrade() {
                        bar.refresh();
                    }
                }
            });
        }

        self.reload_names();
        self.refresh();
        info!("workspace bar initialized");
        Ok(())
    }

    fn subscribe(&self, source: Rc<dyn EventSource>, listener: impl Fn() + 'static) {
        let id = source.connect(Rc::new(listener));
        self.subscriptions
            .borrow_mut()
            .push(Subscription { source, id });
    }

    fn reload_names(&self) {
        *self.names.borrow_mut() = self.names_store.names();
    }

    /// Rebuilds the entire indicator set from current external state.
    ///
    /// Idempotent: two calls without an intervening state change produce an
    /// identical view. Non-reentrant: a call arriving while a rebuild is in
    /// progress is dropped, the in-progress rebuild already reads the newest
    /// state.
    pub fn refresh(self: &Rc<Self>) {
        if self.refreshing.replace(true) {
            trace!("refresh re-entered during rebuild, skipping");
            return;
        }

        let names = self.names.borrow().clone();
        let models = compute_indicators(self.provider.as_ref(), self.registry.as_ref(), &names);
        trace!(indicators = models.len(), "rebuilding indicator row");

        let views = models
            .into_iter()
            .map(|model| {
                let index = model.index;
                let bar = Rc::downgrade(self);
                IndicatorView {
                    model,
                    on_activate: Box::new(move || {
                        if let Some(bar) = bar.upgrade() {
                            bar.activate(index);
                        }
                    }),
                }
            })
            .collect();
        self.row.replace(views);

        self.refreshing.set(false);
    }

    /// Handles activation of the indicator built for `target`.
    ///
    /// Activating the already active workspace is a no-op, reserved for a
    /// future overview toggle. A switch request for a workspace that has
    /// vanished since the indicator was built is swallowed; the row catches
    /// up on the next change signal.
    pub fn activate(&self, target: WorkspaceIndex) {
        if self.provider.active_index() == target {
            debug!(index = target, "activation on active workspace, nothing to do");
            return;
        }
        if let Err(err) = self.provider.switch_to(target) {
            debug!(%err, "switch request dropped");
        }
    }

    /// Disconnects every listener registered in
    /// [`initialize`](Self::initialize), clears the row, and removes it from
    /// the host panel. Safe to call repeatedly or before `initialize`.
    pub fn teardown(&self) {
        for sub in self.subscriptions.borrow_mut().drain(..) {
            if !sub.source.disconnect(sub.id) {
                debug!(id = sub.id, "listener was already detached");
            }
        }
        self.row.clear();
        self.host.remove_indicator_widget();
        if self.initialized.replace(false) {
            info!("workspace bar torn down");
        }
    }
}
