//! Facade crate for `NextShop` features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `nshop` with the desired feature flags (`server`/`client`).
//! - Call `nshop::init` (server) to build the feature slices for `ApiState`.

pub use nshop_domain as domain;
pub use nshop_kernel as kernel;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        pub use nshop_kernel::server::router::system_router;
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use nshop_flags as flags;
    #[cfg(feature = "server")]
    pub use nshop_proxy as proxy;
    #[cfg(feature = "client")]
    pub use nshop_storefront as storefront;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        "flags",
        #[cfg(feature = "server")]
        "server",
        #[cfg(feature = "server")]
        "proxy",
        #[cfg(feature = "client")]
        "client",
        #[cfg(feature = "client")]
        "storefront",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize all server-side feature slices.
///
/// # Errors
/// Returns an error if any feature initialization fails.
#[cfg(feature = "server")]
pub fn init(
    config: &domain::config::GatewayConfig,
) -> Result<Vec<domain::registry::InitializedSlice>, Box<dyn std::error::Error + Send + Sync>> {
    let slices = vec![features::proxy::init(config)?, features::flags::init(config)?];

    Ok(slices)
}
