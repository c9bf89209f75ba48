//! Compile-time group registry.
//!
//! Rust has no runtime reflection over "all types in a crate", so discovery
//! runs over an explicit registry instead: [`endpoint_group!`] submits one
//! [`GroupRegistration`] per concrete group type, collected at link time via
//! `inventory`. The registering module's `module_path!()` serves as the
//! module identifier a scan filters on.

use routewire_api::EndpointGroup;

/// Registry entry for one concrete endpoint-group type.
pub struct GroupRegistration {
    module: &'static str,
    type_name: &'static str,
    no_global_prefix: bool,
    construct: fn() -> Box<dyn EndpointGroup>,
}

impl GroupRegistration {
    pub const fn new(
        module: &'static str,
        type_name: &'static str,
        no_global_prefix: bool,
        construct: fn() -> Box<dyn EndpointGroup>,
    ) -> Self {
        Self {
            module,
            type_name,
            no_global_prefix,
            construct,
        }
    }

    /// Module path the group was registered under.
    pub fn module(&self) -> &'static str {
        self.module
    }

    /// Name of the concrete group type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Whether the group opted out of the global route prefix.
    pub fn no_global_prefix(&self) -> bool {
        self.no_global_prefix
    }

    /// Builds a fresh instance of the group.
    pub fn construct(&self) -> Box<dyn EndpointGroup> {
        (self.construct)()
    }

    /// Whether this registration lives in `module` or one of its submodules,
    /// so a crate-level id covers the whole crate.
    pub fn in_module(&self, module: &str) -> bool {
        self.module == module
            || self
                .module
                .strip_prefix(module)
                .is_some_and(|rest| rest.starts_with("::"))
    }
}

inventory::collect!(GroupRegistration);

/// Iterates every group registered in the final binary.
pub fn registered_groups() -> impl Iterator<Item = &'static GroupRegistration> {
    inventory::iter::<GroupRegistration>()
}

/// Registers a concrete [`EndpointGroup`] type for discovery.
///
/// The type must implement `Default`; a group that cannot be built without
/// arguments is rejected at compile time. The registration is keyed by the
/// invoking module's `module_path!()`.
///
/// ```ignore
/// endpoint_group!(ProductEndpoints);
/// endpoint_group!(HealthEndpoints, no_global_prefix);
/// ```
///
/// The `no_global_prefix` form keeps the group off any global prefix passed
/// to `App::map_endpoint_groups`. The flag belongs to the named concrete
/// type only; a wrapping or deriving type registers (and opts out) on its
/// own.
#[macro_export]
macro_rules! endpoint_group {
    ($group:ty) => {
        $crate::__submit_endpoint_group!($group, false);
    };
    ($group:ty, no_global_prefix) => {
        $crate::__submit_endpoint_group!($group, true);
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __submit_endpoint_group {
    ($group:ty, $no_global_prefix:expr) => {
        $crate::inventory::submit! {
            $crate::registry::GroupRegistration::new(
                ::core::module_path!(),
                ::core::stringify!($group),
                $no_global_prefix,
                || ::std::boxed::Box::new(<$group as ::core::default::Default>::default())
                    as ::std::boxed::Box<dyn $crate::EndpointGroup>,
            )
        }
    };
}
