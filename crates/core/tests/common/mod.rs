//! Shared endpoint and group fixtures for the integration suites.
#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};

use axum::Json;
use axum::http::StatusCode;
use routewire_core::{Endpoint, EndpointGroup, RouteScope, endpoint_group};

async fn test_handler() -> &'static str {
    "Test endpoint"
}

async fn another_handler() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::CREATED, Json(serde_json::json!({ "id": 1 })))
}

async fn health_handler() -> StatusCode {
    StatusCode::OK
}

/// Registers a simple GET route named `TestEndpoint`.
pub struct TestEndpoint;

impl Endpoint for TestEndpoint {
    fn map(scope: &RouteScope) {
        scope.get("/test", test_handler).with_name("TestEndpoint");
    }
}

/// Second endpoint, for multi-endpoint assertions.
pub struct AnotherTestEndpoint;

impl Endpoint for AnotherTestEndpoint {
    fn map(scope: &RouteScope) {
        scope
            .post("/another", another_handler)
            .with_name("AnotherTestEndpoint");
    }
}

/// Maps both test endpoints under the `api/test` sub-scope.
#[derive(Default)]
pub struct TestEndpointGroup;

impl EndpointGroup for TestEndpointGroup {
    fn map_group(&self, scope: &RouteScope) {
        let group = scope.group("api/test").with_tags(["Test"]);
        group
            .map_endpoint::<TestEndpoint>()
            .map_endpoint::<AnotherTestEndpoint>();
    }
}

/// Opted out of the global prefix; registers `/health`.
#[derive(Default)]
pub struct HealthEndpointGroup;

impl EndpointGroup for HealthEndpointGroup {
    fn map_group(&self, scope: &RouteScope) {
        scope.get("/health", health_handler).with_name("HealthEndpoint");
    }
}

/// Derives a sub-scope but maps nothing.
#[derive(Default)]
pub struct EmptyEndpointGroup;

impl EndpointGroup for EmptyEndpointGroup {
    fn map_group(&self, scope: &RouteScope) {
        let _scope = scope.group("api/empty");
    }
}

pub static UNREGISTERED_INVOKED: AtomicBool = AtomicBool::new(false);

/// Implements the contract but is never registered, so discovery must never
/// construct or invoke it.
#[derive(Default)]
pub struct UnregisteredGroup;

impl EndpointGroup for UnregisteredGroup {
    fn map_group(&self, _scope: &RouteScope) {
        UNREGISTERED_INVOKED.store(true, Ordering::SeqCst);
    }
}

endpoint_group!(TestEndpointGroup);
endpoint_group!(HealthEndpointGroup, no_global_prefix);
endpoint_group!(EmptyEndpointGroup);

/// Module id the fixtures above are registered under.
pub fn fixtures_module() -> &'static str {
    module_path!()
}
