//! # Errores del Servidor
//! src/error.rs
//!
//! Dos familias de errores:
//!
//! - [`ServeError`]: fallos de un request. Cada variante corresponde a un
//!   código de estado y a un mensaje corto en texto plano. Nunca salen de la
//!   conexión que los produjo.
//! - [`StartupError`]: fallos al arrancar. Son fatales: el proceso termina con
//!   código distinto de cero.

use crate::http::{Response, StatusCode};
use std::io;
use std::path::PathBuf;

/// Errores de un request individual
#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    /// Request line con menos de tres tokens (o ilegible)
    #[error("Malformed request")]
    MalformedRequest,

    /// Método fuera de la lista permitida del modo
    #[error("Method not allowed: {method}")]
    MethodNotAllowed {
        method: String,
        /// Mensaje para el cliente, ej: "Only GET is supported"
        hint: &'static str,
    },

    /// El path no empieza con un prefijo conocido o el nombre es inválido
    #[error("{0}")]
    BadPath(&'static str),

    /// La ruta resuelta escapa del directorio compartido
    #[error("Access denied")]
    Forbidden,

    /// Ninguna entrada de la tabla de rutas coincide
    #[error("No matching route")]
    NoRoute,

    /// El archivo no existe o es un directorio
    #[error("File not found")]
    FileNotFound,

    /// Subida sin `Content-Length` positivo
    #[error("Content-Length required")]
    LengthRequired,

    /// Fallo de I/O leyendo el archivo a servir
    #[error("Failed to read file: {0}")]
    Read(#[source] io::Error),

    /// Fallo de I/O creando directorios o escribiendo una subida
    #[error("Failed to store file: {0}")]
    Store(#[source] io::Error),
}

impl ServeError {
    /// Código de estado que produce este error
    pub fn status(&self) -> StatusCode {
        match self {
            ServeError::MalformedRequest | ServeError::BadPath(_) => StatusCode::BadRequest,
            ServeError::MethodNotAllowed { .. } => StatusCode::MethodNotAllowed,
            ServeError::Forbidden => StatusCode::Forbidden,
            ServeError::NoRoute | ServeError::FileNotFound => StatusCode::NotFound,
            ServeError::LengthRequired => StatusCode::LengthRequired,
            ServeError::Read(_) | ServeError::Store(_) => StatusCode::InternalServerError,
        }
    }

    /// Body que ve el cliente
    ///
    /// Los errores de I/O no exponen detalles del sistema de archivos.
    pub fn message(&self) -> String {
        match self {
            ServeError::Read(_) => "Failed to read file".to_string(),
            ServeError::Store(_) => "Failed to store file".to_string(),
            ServeError::MethodNotAllowed { hint, .. } => hint.to_string(),
            other => other.to_string(),
        }
    }

    /// Convierte el error en una respuesta de texto plano
    pub fn to_response(&self) -> Response {
        Response::text(self.status(), &self.message())
    }
}

/// Errores fatales de arranque
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("cannot read route file {}: {source}", .path.display())]
    RouteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot use shared directory {}: {source}", .path.display())]
    SharedDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: io::Error,
    },
}
