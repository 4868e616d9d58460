//! # Módulo del Servidor HTTP
//! src/server/mod.rs
//!
//! Este módulo implementa el servidor TCP que:
//! 1. Escucha en un puerto
//! 2. Acepta una conexión
//! 3. Lee y parsea el request
//! 4. Resuelve el archivo según el modo y genera la respuesta
//! 5. Cierra la conexión y vuelve a escuchar

pub mod connection;
pub mod handler;
pub mod tcp;

// Re-exportar para facilitar el uso
pub use connection::Connection;
pub use handler::{RouteMethod, ServeMode, SharedMethod};
pub use tcp::Server;
