//! Application surface: the root scope, group discovery, and serving.

use std::collections::HashSet;
use std::net::SocketAddr;
use std::sync::Mutex;

use routewire_api::{Endpoint, RegistrationError, RegistrationResult, RouteInfo, RouteScope};

use crate::registry;

/// Options for one group-discovery pass.
#[derive(Debug, Clone, Default)]
pub struct GroupScan {
    module: Option<String>,
    global_prefix: Option<String>,
}

impl GroupScan {
    /// Scan the app's configured entry module.
    pub fn entry() -> Self {
        Self::default()
    }

    /// Scan a specific module. A crate name covers every module in the
    /// crate; a full `module_path!()` narrows the scan to that module and
    /// its descendants.
    pub fn module(module: impl Into<String>) -> Self {
        Self {
            module: Some(module.into()),
            global_prefix: None,
        }
    }

    /// Prefix every discovered group's routes with a global path segment.
    /// Groups registered with `no_global_prefix` stay on the bare surface.
    pub fn with_global_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.global_prefix = Some(prefix.into());
        self
    }
}

/// The application's top-level route-registration surface.
///
/// Owns the root [`RouteScope`] and the record of modules already scanned,
/// so repeated discovery calls for the same module are no-ops for this app
/// instance. Dropping the app drops its tracking state with it.
pub struct App {
    scope: RouteScope,
    entry_module: Option<String>,
    scanned_modules: Mutex<HashSet<String>>,
}

impl App {
    pub fn new() -> Self {
        Self {
            scope: RouteScope::new(),
            entry_module: None,
            scanned_modules: Mutex::new(HashSet::new()),
        }
    }

    /// Creates an app whose entry module backs [`GroupScan::entry`] scans.
    /// Typically called with `module_path!()` from the binary crate root.
    pub fn with_entry_module(module: impl Into<String>) -> Self {
        Self {
            scope: RouteScope::new(),
            entry_module: Some(module.into()),
            scanned_modules: Mutex::new(HashSet::new()),
        }
    }

    /// The app's root scope.
    pub fn scope(&self) -> &RouteScope {
        &self.scope
    }

    /// Registers a single endpoint type on the root scope.
    pub fn map_endpoint<E: Endpoint>(&self) -> &Self {
        self.scope.map_endpoint::<E>();
        self
    }

    /// Discovers and registers every endpoint group in the scanned module.
    ///
    /// The first scan of a module wins: later calls for the same module are
    /// no-ops for this app, even with a different global prefix. The
    /// check-and-record is atomic against concurrent callers; registration
    /// itself runs outside the lock, mirroring the one-shot startup nature
    /// of route registration.
    pub fn map_endpoint_groups(&self, scan: GroupScan) -> RegistrationResult<&Self> {
        let module = match scan.module.or_else(|| self.entry_module.clone()) {
            Some(module) => module,
            None => return Err(RegistrationError::EntryModuleUnresolved),
        };

        {
            let mut scanned = self
                .scanned_modules
                .lock()
                .expect("scanned-module lock poisoned");
            if !scanned.insert(module.clone()) {
                return Ok(self);
            }
        }

        // Derived once per scan and reused by every group that did not opt out.
        let prefixed = scan
            .global_prefix
            .as_deref()
            .map(|prefix| self.scope.group(prefix));

        let mut groups = 0usize;
        for registration in registry::registered_groups().filter(|r| r.in_module(&module)) {
            let target = if registration.no_global_prefix() {
                &self.scope
            } else {
                prefixed.as_ref().unwrap_or(&self.scope)
            };
            tracing::debug!(
                group = registration.type_name(),
                module = registration.module(),
                no_global_prefix = registration.no_global_prefix(),
                "mapping endpoint group"
            );
            registration.construct().map_group(target);
            groups += 1;
        }
        tracing::info!(module = %module, groups, "endpoint group scan complete");

        Ok(self)
    }

    /// Snapshots the effective registered routes.
    pub fn routes(&self) -> Vec<RouteInfo> {
        self.scope.routes()
    }

    /// Materializes the axum router for the registered routes.
    pub fn router(&self) -> axum::Router {
        self.scope.build_router()
    }

    /// Binds `addr` and serves the materialized router.
    pub async fn serve(self, addr: SocketAddr) -> std::io::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("listening on {}", listener.local_addr()?);
        axum::serve(listener, self.router()).await
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
