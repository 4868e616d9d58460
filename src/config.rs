//! # Configuración del Servidor
//! src/config.rs
//!
//! Configuración por argumentos CLI y variables de entorno. El modo de
//! operación es un subcomando.
//!
//! ## Ejemplos de uso
//!
//! ### Tabla de rutas
//! ```bash
//! ./file_server --port 8080 routes ./routes.txt
//! ```
//!
//! ### Directorio compartido
//! ```bash
//! HTTP_PORT=5400 SHARED_DIR=/srv/shared ./file_server shared
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Niveles de log aceptados por `--log-level`
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Configuración del servidor de archivos
#[derive(Debug, Clone, Parser)]
#[command(name = "file_server")]
#[command(about = "Servidor HTTP/1.x secuencial de archivos")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Puerto en el que escucha el servidor
    #[arg(short, long, default_value = "8080", env = "HTTP_PORT", global = true)]
    pub port: u16,

    /// Host/IP en el que escucha
    #[arg(long, default_value = "127.0.0.1", env = "HTTP_HOST", global = true)]
    pub host: String,

    /// Nivel de log (RUST_LOG tiene prioridad si está definido)
    #[arg(long = "log-level", default_value = "info", env = "LOG_LEVEL", global = true)]
    pub log_level: String,

    /// Modo de operación
    #[command(subcommand)]
    pub mode: ModeArgs,
}

/// Modos de operación
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum ModeArgs {
    /// Sirve archivos según un archivo de rutas (`path:archivo` por línea). Solo GET.
    Routes {
        /// Archivo de rutas
        route_file: PathBuf,
    },

    /// Descargas y subidas dentro de un directorio compartido. GET y POST.
    Shared {
        /// Directorio compartido (se crea si no existe)
        #[arg(long, default_value = "./shared", env = "SHARED_DIR")]
        dir: PathBuf,
    },
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    ///
    /// Si faltan argumentos obligatorios, clap imprime el uso y termina el
    /// proceso con código distinto de cero.
    pub fn new() -> Self {
        Config::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```rust
    /// use file_server::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "127.0.0.1:8080");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Valida la configuración
    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("Port must be >= 1".to_string());
        }
        if self.host.trim().is_empty() {
            return Err("Host must not be empty".to_string());
        }
        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            return Err(format!(
                "Log level must be one of: {}",
                LOG_LEVELS.join(", ")
            ));
        }
        if let ModeArgs::Routes { route_file } = &self.mode {
            if route_file.as_os_str().is_empty() {
                return Err("Route file must not be empty".to_string());
            }
        }

        Ok(())
    }
}

impl Default for Config {
    /// Configuración por defecto: directorio compartido `./shared`
    fn default() -> Self {
        Self {
            port: 8080,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            mode: ModeArgs::Shared {
                dir: PathBuf::from("./shared"),
            },
        }
    }
}
