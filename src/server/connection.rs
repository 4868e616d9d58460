//! # Conexión de un cliente
//! src/server/connection.rs
//!
//! Una `Connection` es dueña del `TcpStream` aceptado durante el ciclo
//! completo: parsing → resolución → lectura/escritura → respuesta. Al salir
//! de scope (por cualquier camino, incluidos los errores) el socket se cierra.

use super::handler::ServeMode;
use crate::error::ServeError;
use crate::http::reader::ReadError;
use crate::http::{MessageReader, Request, RequestLine, Response};
use std::io::{self, Read};
use std::net::{Shutdown, TcpStream};
use std::time::{Duration, Instant};

/// Tiempo máximo esperando que el cliente cierre tras la respuesta
const LINGER_TIMEOUT: Duration = Duration::from_millis(500);

/// Máximo de bytes descartados al cerrar
const LINGER_MAX_BYTES: usize = 1024 * 1024;

/// Cliente aceptado, atendido una sola vez
pub struct Connection {
    stream: TcpStream,
    peer: String,
}

impl Connection {
    pub fn new(stream: TcpStream) -> Self {
        let peer = stream
            .peer_addr()
            .map(|addr| addr.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        Self { stream, peer }
    }

    pub fn peer(&self) -> &str {
        &self.peer
    }

    /// Atiende un único request y consume la conexión.
    ///
    /// Sin request line (el cliente cerró sin enviar nada, o envió una línea
    /// vacía) no se responde. Los errores del request se responden con su
    /// código; solo los errores de I/O del socket se propagan.
    pub fn serve(self, mode: &ServeMode) -> io::Result<()> {
        let start = Instant::now();
        let mut reader = MessageReader::new(&self.stream);

        let line = match reader.read_line() {
            Ok(Some(line)) if !line.is_empty() => line,
            Ok(_) => {
                tracing::debug!(peer = %self.peer, "conexión cerrada sin request");
                return Ok(());
            }
            Err(ReadError::Io(e)) => return Err(e),
            Err(e) => {
                tracing::debug!(peer = %self.peer, error = %e, "request line ilegible");
                return self.respond(&ServeError::MalformedRequest.to_response(), start);
            }
        };

        let request_line = match RequestLine::parse(&line) {
            Ok(request_line) => request_line,
            Err(e) => {
                tracing::debug!(peer = %self.peer, line = %line, "request line malformada");
                return self.respond(&e.to_response(), start);
            }
        };

        let headers = match reader.read_headers() {
            Ok(headers) => headers,
            Err(ReadError::Io(e)) => return Err(e),
            Err(_) => {
                return self.respond(&ServeError::MalformedRequest.to_response(), start);
            }
        };

        let request = Request::new(request_line, &headers);
        tracing::debug!(
            peer = %self.peer,
            method = %request.method(),
            path = %request.raw_path(),
            "request recibido"
        );

        let response = mode.handle(&request, &mut reader);
        tracing::info!(
            peer = %self.peer,
            method = %request.method(),
            path = %request.raw_path(),
            status = response.status().as_u16(),
            bytes = response.body().len(),
            "respuesta"
        );

        self.respond(&response, start)
    }

    /// Escribe la respuesta completa (con flush)
    fn respond(&self, response: &Response, start: Instant) -> io::Result<()> {
        let mut out = &self.stream;
        response.write_to(&mut out)?;

        tracing::debug!(
            peer = %self.peer,
            status = %response.status(),
            latency_ms = start.elapsed().as_secs_f64() * 1000.0,
            "respuesta enviada"
        );
        Ok(())
    }
}

impl Drop for Connection {
    /// Cierre ordenado: FIN primero y luego descarta lo que el cliente aún
    /// envíe (body no leído tras un 411, por ejemplo). Cerrar con datos sin
    /// leer provoca un RST que puede destruir la respuesta antes de que el
    /// cliente la lea.
    fn drop(&mut self) {
        if self.stream.shutdown(Shutdown::Write).is_err() {
            return;
        }
        if self.stream.set_read_timeout(Some(LINGER_TIMEOUT)).is_err() {
            return;
        }

        let mut sink = [0u8; 4096];
        let mut drained = 0;
        while drained < LINGER_MAX_BYTES {
            match self.stream.read(&mut sink) {
                Ok(0) | Err(_) => break,
                Ok(n) => drained += n,
            }
        }
    }
}
