//! Convention-based endpoint registration for axum services.
//!
//! Declare endpoint types ([`Endpoint`]) and endpoint-group types
//! ([`EndpointGroup`]), register groups with [`endpoint_group!`], and let
//! [`App::map_endpoint_groups`] wire every group in a module onto the route
//! table, optionally under a global prefix with a per-group opt-out.
//!
//! ```ignore
//! let app = App::with_entry_module(module_path!());
//! app.map_endpoint_groups(GroupScan::entry().with_global_prefix("api/v1"))?;
//! app.serve(addr).await?;
//! ```

pub mod app;
pub mod registry;

pub use app::{App, GroupScan};
pub use registry::{GroupRegistration, registered_groups};
pub use routewire_api::{
    Endpoint, EndpointGroup, RegistrationError, RegistrationResult, RouteHandle, RouteInfo,
    RouteScope,
};

// Re-exported for the expansion of `endpoint_group!`.
pub use inventory;
