//! # Servidor TCP Secuencial
//! src/server/tcp.rs
//!
//! Un solo thread, una conexión a la vez: `accept` bloquea hasta que llega un
//! cliente, se atiende completo, se cierra y recién entonces se acepta el
//! siguiente. Un cliente lento bloquea a todos los demás.
//!
//! ```text
//! Listening → Accepted → Parsing → Resolving → (Reading|Writing) → Responding → Closed
//!     ↑                                                                           │
//!     └───────────────────────────────────────────────────────────────────────────┘
//! ```

use super::connection::Connection;
use super::handler::ServeMode;
use crate::config::Config;
use crate::error::StartupError;
use std::io;
use std::net::{SocketAddr, TcpListener, TcpStream};

/// Servidor HTTP de archivos
pub struct Server {
    mode: ServeMode,
    listener: TcpListener,
}

impl Server {
    /// Valida la configuración, prepara el modo y abre el socket.
    ///
    /// Cualquier error aquí es fatal para el proceso.
    pub fn bind(config: &Config) -> Result<Self, StartupError> {
        config.validate().map_err(StartupError::Config)?;
        let mode = ServeMode::from_config(config)?;
        Self::with_mode(&config.address(), mode)
    }

    /// Abre el socket para un modo ya construido
    pub fn with_mode(address: &str, mode: ServeMode) -> Result<Self, StartupError> {
        let listener = TcpListener::bind(address).map_err(|source| StartupError::Bind {
            address: address.to_string(),
            source,
        })?;

        tracing::info!(address = %address, mode = mode.name(), "servidor escuchando");
        Ok(Self { mode, listener })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Loop principal. Los errores de `accept` se registran y el loop sigue.
    pub fn run(&self) -> io::Result<()> {
        tracing::info!("modo secuencial: una conexión a la vez");

        loop {
            if let Err(e) = self.serve_one() {
                tracing::warn!(error = %e, "error al aceptar conexión");
            }
        }
    }

    /// Acepta y atiende exactamente una conexión
    ///
    /// Solo falla si falla el `accept`.
    pub fn serve_one(&self) -> io::Result<()> {
        let (stream, _) = self.listener.accept()?;
        self.handle_stream(stream);
        Ok(())
    }

    /// Atiende una conexión; ningún error sale de aquí
    fn handle_stream(&self, stream: TcpStream) {
        let connection = Connection::new(stream);
        let peer = connection.peer().to_string();
        tracing::debug!(peer = %peer, "nueva conexión");

        if let Err(e) = connection.serve(&self.mode) {
            tracing::warn!(peer = %peer, error = %e, "error de I/O en la conexión");
        }
    }
}
