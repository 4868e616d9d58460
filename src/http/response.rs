//! # Construcción de Respuestas HTTP
//!
//! API para construir respuestas y escribirlas completas en el socket.
//!
//! ## Formato de una respuesta
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: image/png\r\n
//! Content-Length: 4\r\n
//! Access-Control-Allow-Origin: *\r\n
//! Connection: close\r\n
//! \r\n
//! <bytes del archivo>
//! ```
//!
//! El body se envía tal cual, sin re-codificar, así que sirve para archivos
//! binarios.
//!
//! ## Ejemplo de uso
//!
//! ```
//! use file_server::http::{Response, StatusCode};
//!
//! let response = Response::file("image/png", vec![0x89, 0x50, 0x4E, 0x47]);
//! let mut bytes = Vec::new();
//! response.write_to(&mut bytes).unwrap();
//! assert!(bytes.starts_with(b"HTTP/1.1 200 OK\r\n"));
//! ```

use super::StatusCode;
use std::io::{self, Write};

/// Representa una respuesta HTTP completa
#[derive(Debug, Clone)]
pub struct Response {
    /// Código de estado HTTP
    status: StatusCode,

    /// Headers en orden de inserción (sin duplicados por nombre)
    headers: Vec<(String, String)>,

    /// Cuerpo de la respuesta
    body: Vec<u8>,
}

impl Response {
    /// Crea una respuesta sin body con los headers que toda respuesta lleva:
    /// `Content-Length: 0`, CORS abierto y `Connection: close`.
    pub fn new(status: StatusCode) -> Self {
        let mut response = Self {
            status,
            headers: Vec::new(),
            body: Vec::new(),
        };
        response.add_header("Content-Type", "text/plain");
        response.add_header("Content-Length", "0");
        response.add_header("Access-Control-Allow-Origin", "*");
        response.add_header("Connection", "close");
        response
    }

    /// Agrega un header a la respuesta (builder)
    ///
    /// Si el header ya existe (sin distinguir mayúsculas), se sobrescribe
    /// conservando su posición.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.add_header(name, value);
        self
    }

    /// Agrega un header a una respuesta existente (versión mutable)
    pub fn add_header(&mut self, name: &str, value: &str) {
        match self
            .headers
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
        {
            Some(slot) => slot.1 = value.to_string(),
            None => self.headers.push((name.to_string(), value.to_string())),
        }
    }

    /// Establece el body desde bytes y recalcula `Content-Length`
    pub fn with_body_bytes(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        let length = self.body.len().to_string();
        self.add_header("Content-Length", &length);
        self
    }

    /// Establece el body desde un string
    pub fn with_body(self, body: &str) -> Self {
        self.with_body_bytes(body.as_bytes().to_vec())
    }

    /// Respuesta 200 con el contenido de un archivo
    pub fn file(content_type: &str, content: Vec<u8>) -> Self {
        Self::new(StatusCode::Ok)
            .with_header("Content-Type", content_type)
            .with_body_bytes(content)
    }

    /// Respuesta de texto plano con cualquier código (éxito o error)
    ///
    /// # Ejemplo
    /// ```
    /// use file_server::http::{Response, StatusCode};
    ///
    /// let response = Response::text(StatusCode::NotFound, "No matching route");
    /// assert_eq!(response.header("Content-Type"), Some("text/plain"));
    /// assert_eq!(response.body(), b"No matching route");
    /// ```
    pub fn text(status: StatusCode, message: &str) -> Self {
        Self::new(status)
            .with_header("Content-Type", "text/plain")
            .with_body(message)
    }

    /// Serializa solo la cabecera: status line, headers y línea vacía
    fn head_bytes(&self) -> Vec<u8> {
        let mut head = format!("HTTP/1.1 {}\r\n", self.status);
        for (name, value) in &self.headers {
            head.push_str(name);
            head.push_str(": ");
            head.push_str(value);
            head.push_str("\r\n");
        }
        head.push_str("\r\n");
        head.into_bytes()
    }

    /// Escribe la respuesta en `writer` y hace flush antes de retornar.
    ///
    /// La cabecera y el body se escriben por separado para no copiar archivos
    /// grandes en un segundo buffer.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.head_bytes())?;
        writer.write_all(&self.body)?;
        writer.flush()
    }

    /// Obtiene el código de estado de la respuesta
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Obtiene un header específico (sin distinguir mayúsculas)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Obtiene una referencia al body
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn serialize(response: &Response) -> Vec<u8> {
        let mut out = Vec::new();
        response.write_to(&mut out).unwrap();
        out
    }

    #[test]
    fn test_new_response_has_mandatory_headers() {
        let response = Response::new(StatusCode::Ok);
        assert_eq!(response.header("Content-Type"), Some("text/plain"));
        assert_eq!(response.header("Content-Length"), Some("0"));
        assert_eq!(response.header("Access-Control-Allow-Origin"), Some("*"));
        assert!(response.body().is_empty());
    }

    #[test]
    fn test_with_header_overwrites_in_place() {
        let response = Response::new(StatusCode::Ok).with_header("content-type", "image/png");

        assert_eq!(response.header("Content-Type"), Some("image/png"));

        let text = String::from_utf8(serialize(&response)).unwrap();
        assert!(text.starts_with("HTTP/1.1 200 OK\r\nContent-Type: image/png\r\n"));
        assert_eq!(text.to_ascii_lowercase().matches("content-type").count(), 1);
    }

    #[test]
    fn test_file_response_is_binary_safe() {
        let data = vec![0x00, 0xFF, 0x0D, 0x0A, 0x89];
        let response = Response::file("application/octet-stream", data.clone());

        assert_eq!(response.status(), StatusCode::Ok);
        assert_eq!(response.header("Content-Length"), Some("5"));
        assert!(serialize(&response).ends_with(&data));
    }

    #[test]
    fn test_error_response_framing() {
        let response = Response::text(StatusCode::Forbidden, "Access denied");
        let text = String::from_utf8(serialize(&response)).unwrap();

        assert!(text.starts_with("HTTP/1.1 403 Forbidden\r\n"));
        assert!(text.contains("Content-Type: text/plain\r\n"));
        assert!(text.contains("Content-Length: 13\r\n"));
        assert!(text.contains("Access-Control-Allow-Origin: *\r\n"));
        assert!(text.ends_with("\r\n\r\nAccess denied"));
    }

    #[test]
    fn test_header_order_is_stable() {
        let response = Response::file("text/html", b"<p>".to_vec());
        let text = String::from_utf8(serialize(&response)).unwrap();
        assert_eq!(
            text,
            "HTTP/1.1 200 OK\r\n\
             Content-Type: text/html\r\n\
             Content-Length: 3\r\n\
             Access-Control-Allow-Origin: *\r\n\
             Connection: close\r\n\
             \r\n<p>"
        );
    }

    #[test]
    fn test_write_to_sends_head_then_body() {
        let response = Response::text(StatusCode::Created, "stored");
        let out = serialize(&response);
        assert!(out.starts_with(b"HTTP/1.1 201 Created\r\n"));
        assert!(out.ends_with(b"\r\n\r\nstored"));
    }
}
