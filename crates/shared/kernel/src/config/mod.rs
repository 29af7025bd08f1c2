use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::env;
use std::path::{Path, PathBuf};
use tracing::info;

/// Environment variables kept for deployments that predate the `NSHOP__` scheme.
const LEGACY_VARS: [(&str, &str); 2] =
    [("BASE_URL", "upstream.base_url"), ("NEXT_PUBLIC_BASE_URL", "upstream.public_base_url")];

#[nshop_derive::nshop_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// Layers, lowest priority first:
/// 1. **Base file**: `path` (defaults to `"config/server"`, any format `config` understands).
///    The file is optional; every field of the target type must therefore carry a default.
/// 2. **Environment overrides**: variables prefixed with `NSHOP__`, nested with double
///    underscores (`NSHOP__UPSTREAM__TIMEOUT_SECS` maps to `upstream.timeout_secs`).
/// 3. **Legacy variables**: `BASE_URL` and `NEXT_PUBLIC_BASE_URL`, when set and non-empty,
///    win over everything else for `upstream.base_url` and `upstream.public_base_url`.
///
/// # Errors
/// Returns an error if the file exists but is malformed, or the merged tree does not match `T`.
///
/// # Example
/// ```rust
/// use nshop_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from("config/server"), |p| p.as_ref().to_path_buf());

    let mut builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(false))
        .add_source(
            Environment::with_prefix("NSHOP")
                .prefix_separator("__")
                .separator("__")
                .convert_case(config::Case::Snake),
        );

    for (var, key) in LEGACY_VARS {
        let value = env::var(var).ok().filter(|v| !v.trim().is_empty());
        builder = builder.set_override_option(key, value).context("Legacy override")?;
    }

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
