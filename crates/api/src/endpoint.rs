use crate::scope::RouteScope;

/// Contract for registering a single endpoint.
///
/// `map` is an associated function, so an endpoint type never needs to be
/// constructed: the type itself is the capability. Implementations register
/// their route(s) directly on the scope they are given.
///
/// ```ignore
/// struct CreateUser;
///
/// impl Endpoint for CreateUser {
///     fn map(scope: &RouteScope) {
///         scope.post("/users", create_user).with_name("CreateUser");
///     }
/// }
/// ```
pub trait Endpoint {
    /// Register this endpoint's route mapping on the given scope.
    fn map(scope: &RouteScope);
}

/// Contract for registering a cohesive set of endpoints.
///
/// Groups are instantiated transiently by the discovery registrar and
/// discarded after registration; they carry no state across calls. A group
/// typically derives a sub-scope with a shared prefix and metadata, then maps
/// its endpoints onto it:
///
/// ```ignore
/// #[derive(Default)]
/// struct ProductEndpoints;
///
/// impl EndpointGroup for ProductEndpoints {
///     fn map_group(&self, scope: &RouteScope) {
///         let group = scope.group("api/products").with_tags(["Products"]);
///         group.map_endpoint::<CreateProduct>().map_endpoint::<GetProduct>();
///     }
/// }
/// ```
///
/// Discovery requires `Default` on the concrete type (the registration macro
/// enforces it), so every group can be built without arguments.
pub trait EndpointGroup: Send + Sync {
    /// Configure and register this group's endpoints on the given scope.
    fn map_group(&self, scope: &RouteScope);
}
