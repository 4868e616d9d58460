//! # Módulo HTTP
//!
//! Subconjunto mínimo de HTTP/1.1 implementado a mano:
//!
//! - Lectura de la request line, headers y body sobre un mismo buffer
//! - Parsing de la request line y de la query
//! - Construcción y envío de responses
//! - Códigos de estado y clasificación de Content-Type
//!
//! No hay conexiones persistentes ni chunked encoding: un request por
//! conexión.
//!
//! ### Formato de Request
//!
//! ```text
//! GET /get?file=notas.txt HTTP/1.1\r\n
//! Host: localhost:8080\r\n
//! \r\n
//! ```
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/plain\r\n
//! Content-Length: 5\r\n
//! Access-Control-Allow-Origin: *\r\n
//! Connection: close\r\n
//! \r\n
//! hola\n
//! ```

pub mod mime;      // Content-Type por extensión
pub mod reader;    // Lectura de líneas y body
pub mod request;   // Parsing de HTTP requests
pub mod response;  // Construcción de HTTP responses
pub mod status;    // Códigos de estado HTTP

// Re-exportamos los tipos principales para facilitar su uso
pub use reader::MessageReader;
pub use request::{Request, RequestLine};
pub use response::Response;
pub use status::StatusCode;
