//! # Logging
//! src/logging.rs
//!
//! Inicializa `tracing` con un filtro tomado de `RUST_LOG` o, si no está
//! definido, del nivel de la configuración aplicado a este crate.

use tracing_subscriber::EnvFilter;

/// Directiva por defecto para un nivel dado
///
/// # Ejemplo
/// ```
/// assert_eq!(file_server::logging::default_directive("debug"), "file_server=debug");
/// ```
pub fn default_directive(level: &str) -> String {
    format!("file_server={}", level.to_ascii_lowercase())
}

/// Instala el subscriber global. Llamarlo más de una vez no tiene efecto.
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(level)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
