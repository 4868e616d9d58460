//! # File Server
//! src/lib.rs
//!
//! Servidor HTTP/1.x de archivos implementado desde cero sobre `std::net`.
//! Atiende una conexión a la vez y un request por conexión.
//!
//! ## Arquitectura
//!
//! El servidor está dividido en módulos especializados:
//! - `http`: lectura de líneas, parsing de requests, responses, status y MIME
//! - `router`: tabla de rutas (path → archivo local)
//! - `shared`: directorio compartido con protección contra traversal y subidas
//! - `server`: loop de aceptación, conexión y despacho por modo
//! - `config`: argumentos CLI y variables de entorno
//! - `logging`: inicialización de `tracing`
//! - `error`: errores por request y errores de arranque
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use file_server::config::Config;
//! use file_server::server::Server;
//!
//! let config = Config::default();
//! let server = Server::bind(&config).expect("Error al iniciar servidor");
//! server.run().expect("Error en el loop principal");
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod path;
pub mod router;
pub mod server;
pub mod shared;
