//! # Parsing de Requests HTTP/1.x
//! src/http/request.rs
//!
//! Solo se parsea lo necesario para servir archivos: método, path (con query
//! opcional, sin decodificar) y `Content-Length` para las subidas. La query la
//! decodifica quien la interpreta.
//!
//! ## Formato de un Request
//!
//! ```text
//! POST /upload?file=foto.png HTTP/1.1\r\n
//! Content-Length: 4\r\n
//! \r\n
//! <4 bytes>
//! ```
//!
//! ## Componentes
//!
//! 1. **Request Line**: `METHOD /path?query VERSION`, separada por espacios
//! 2. **Headers**: Pares `Name: Value` (uno por línea)
//! 3. **Empty Line**: separa headers del body
//! 4. **Body**: lo lee el receptor de subidas, no este módulo

use crate::error::ServeError;

/// Request line tokenizada: `METHOD PATH VERSION`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    /// Método tal cual llegó (se valida contra la lista del modo después)
    pub method: String,

    /// Path completo, incluyendo la query si existe
    pub raw_path: String,

    /// Versión declarada (no se valida)
    pub version: String,
}

impl RequestLine {
    /// Parsea la request line separando por espacios simples.
    ///
    /// Tokens vacíos al final se descartan; los tokens más allá del tercero se
    /// ignoran. Menos de tres tokens es `MalformedRequest`.
    ///
    /// # Ejemplo
    /// ```
    /// use file_server::http::RequestLine;
    ///
    /// let line = RequestLine::parse("GET /index.html HTTP/1.1").unwrap();
    /// assert_eq!(line.method, "GET");
    /// assert_eq!(line.raw_path, "/index.html");
    /// ```
    pub fn parse(line: &str) -> Result<Self, ServeError> {
        let mut tokens: Vec<&str> = line.split(' ').collect();
        while tokens.last().is_some_and(|t| t.is_empty()) {
            tokens.pop();
        }

        if tokens.len() < 3 {
            return Err(ServeError::MalformedRequest);
        }

        Ok(Self {
            method: tokens[0].to_string(),
            raw_path: tokens[1].to_string(),
            version: tokens[2].to_string(),
        })
    }
}

/// Representa un request parseado (efímero, uno por conexión)
#[derive(Debug, Clone)]
pub struct Request {
    /// Método HTTP tal cual llegó
    method: String,

    /// Path completo con query, sin decodificar (ej: "/get?file=a%20b.txt")
    raw_path: String,

    /// Último `Content-Length` recibido, si era un entero
    content_length: Option<u64>,
}

impl Request {
    /// Construye el request a partir de la request line y los headers leídos
    pub fn new(line: RequestLine, headers: &[(String, String)]) -> Self {
        Self {
            method: line.method,
            raw_path: line.raw_path,
            content_length: Self::find_content_length(headers),
        }
    }

    /// Busca `Content-Length` sin distinguir mayúsculas; gana la última aparición.
    ///
    /// Un valor no numérico cuenta como ausente.
    fn find_content_length(headers: &[(String, String)]) -> Option<u64> {
        headers
            .iter()
            .rev()
            .find(|(name, _)| name.eq_ignore_ascii_case("Content-Length"))
            .and_then(|(_, value)| value.trim().parse::<u64>().ok())
    }

    // === Métodos públicos para acceder a los campos ===

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn raw_path(&self) -> &str {
        &self.raw_path
    }

    pub fn content_length(&self) -> Option<u64> {
        self.content_length
    }
}
