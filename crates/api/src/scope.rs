//! Route-registration surface shared by endpoints, groups, and the app.
//!
//! axum's `Router` is a by-value builder that neither names routes nor
//! exposes its route table, so registration goes through a thin recording
//! layer instead: every scope clone and derived sub-scope writes into one
//! shared `RouteTable`, and the axum router is materialized from the table
//! once registration is done. The table doubles as the inspection surface
//! for effective routes.

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::handler::Handler;
use axum::http::Method;
use axum::routing::{self, MethodRouter};

use crate::endpoint::Endpoint;
use crate::path;

/// One registered route: method, effective path, and attached metadata.
struct RouteRecord {
    method: Method,
    path: String,
    name: Option<String>,
    tags: Vec<String>,
    auth_required: bool,
    service: MethodRouter,
}

#[derive(Default)]
struct RouteTable {
    records: Vec<RouteRecord>,
}

/// Read-only snapshot of a registered route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteInfo {
    pub method: Method,
    pub path: String,
    pub name: Option<String>,
    pub tags: Vec<String>,
    pub auth_required: bool,
}

/// A scope of the route-registration surface.
///
/// Scopes are cheap to clone; every clone and every sub-scope derived with
/// [`group`](RouteScope::group) shares the same underlying route table. A
/// scope carries its accumulated path prefix and shared metadata (tags, auth
/// requirement), which are inherited by sub-scopes and stamped onto every
/// route registered through it.
#[derive(Clone)]
pub struct RouteScope {
    table: Arc<Mutex<RouteTable>>,
    prefix: String,
    tags: Vec<String>,
    auth_required: bool,
}

impl RouteScope {
    pub fn new() -> Self {
        Self {
            table: Arc::new(Mutex::new(RouteTable::default())),
            prefix: String::new(),
            tags: Vec::new(),
            auth_required: false,
        }
    }

    /// Derives a sub-scope bound to an additional path prefix.
    ///
    /// The sub-scope inherits this scope's tags and auth requirement and
    /// registers into the same route table.
    pub fn group(&self, prefix: &str) -> RouteScope {
        RouteScope {
            table: Arc::clone(&self.table),
            prefix: path::join(&self.prefix, prefix),
            tags: self.tags.clone(),
            auth_required: self.auth_required,
        }
    }

    /// Extends the shared tags applied to routes registered through this scope.
    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Marks routes registered through this scope as requiring authorization.
    ///
    /// Recorded as route metadata; enforcement belongs to the host
    /// application's middleware.
    pub fn require_authorization(mut self) -> Self {
        self.auth_required = true;
        self
    }

    /// Registers the endpoint type `E` on this scope and returns the scope
    /// for chaining.
    pub fn map_endpoint<E: Endpoint>(&self) -> &Self {
        E::map(self);
        self
    }

    pub fn get<H, T>(&self, path: &str, handler: H) -> RouteHandle
    where
        H: Handler<T, ()>,
        T: 'static,
    {
        self.on(Method::GET, path, routing::get(handler))
    }

    pub fn post<H, T>(&self, path: &str, handler: H) -> RouteHandle
    where
        H: Handler<T, ()>,
        T: 'static,
    {
        self.on(Method::POST, path, routing::post(handler))
    }

    pub fn put<H, T>(&self, path: &str, handler: H) -> RouteHandle
    where
        H: Handler<T, ()>,
        T: 'static,
    {
        self.on(Method::PUT, path, routing::put(handler))
    }

    pub fn delete<H, T>(&self, path: &str, handler: H) -> RouteHandle
    where
        H: Handler<T, ()>,
        T: 'static,
    {
        self.on(Method::DELETE, path, routing::delete(handler))
    }

    pub fn patch<H, T>(&self, path: &str, handler: H) -> RouteHandle
    where
        H: Handler<T, ()>,
        T: 'static,
    {
        self.on(Method::PATCH, path, routing::patch(handler))
    }

    fn on(&self, method: Method, path: &str, service: MethodRouter) -> RouteHandle {
        let path = path::join(&self.prefix, path);
        let mut table = self.table.lock().expect("route table lock poisoned");
        table.records.push(RouteRecord {
            method,
            path,
            name: None,
            tags: self.tags.clone(),
            auth_required: self.auth_required,
            service,
        });
        RouteHandle {
            table: Arc::clone(&self.table),
            index: table.records.len() - 1,
        }
    }

    /// Snapshots the effective registered routes, in registration order.
    pub fn routes(&self) -> Vec<RouteInfo> {
        let table = self.table.lock().expect("route table lock poisoned");
        table
            .records
            .iter()
            .map(|record| RouteInfo {
                method: record.method.clone(),
                path: record.path.clone(),
                name: record.name.clone(),
                tags: record.tags.clone(),
                auth_required: record.auth_required,
            })
            .collect()
    }

    /// Materializes an axum router from the route table.
    ///
    /// Conflicting registrations (same path and method) surface here as
    /// axum's own panic, unchanged.
    pub fn build_router(&self) -> Router {
        let table = self.table.lock().expect("route table lock poisoned");
        table
            .records
            .iter()
            .fold(Router::new(), |router, record| {
                router.route(&record.path, record.service.clone())
            })
    }
}

impl Default for RouteScope {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to a just-registered route, for attaching metadata.
pub struct RouteHandle {
    table: Arc<Mutex<RouteTable>>,
    index: usize,
}

impl RouteHandle {
    /// Assigns the route's name.
    pub fn with_name(self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.update(|record| record.name = Some(name));
        self
    }

    /// Adds tags to the route, on top of any inherited from its scope.
    pub fn with_tags<I, T>(self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.update(|record| record.tags.extend(tags.into_iter().map(Into::into)));
        self
    }

    /// Marks this route as requiring authorization.
    pub fn require_authorization(self) -> Self {
        self.update(|record| record.auth_required = true);
        self
    }

    fn update(&self, apply: impl FnOnce(&mut RouteRecord)) {
        let mut table = self.table.lock().expect("route table lock poisoned");
        apply(&mut table.records[self.index]);
    }
}
