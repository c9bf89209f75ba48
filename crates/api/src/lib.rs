pub mod endpoint;
pub mod error;
pub mod path;
pub mod scope;

// Re-export commonly used types
pub use endpoint::{Endpoint, EndpointGroup};
pub use error::{RegistrationError, RegistrationResult};
pub use scope::{RouteHandle, RouteInfo, RouteScope};
