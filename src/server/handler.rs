//! # Despacho por modo
//! src/server/handler.rs
//!
//! El servidor corre en uno de dos modos, fijado al arrancar:
//!
//! - **Routes**: tabla de rutas, solo `GET`
//! - **Shared**: directorio compartido, `GET` (descarga, listado) y `POST` (subida)
//!
//! Cada modo declara sus métodos como un enum cerrado; cualquier otro método
//! es `405 Method Not Allowed`.

use crate::config::{Config, ModeArgs};
use crate::error::{ServeError, StartupError};
use crate::http::mime::content_type;
use crate::http::{MessageReader, Request, Response, StatusCode};
use crate::router::RouteTable;
use crate::shared::{self, SharedRoot, DOWNLOAD_PREFIX, LIST_PATH, UPLOAD_PREFIX};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Métodos aceptados en modo tabla de rutas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteMethod {
    Get,
}

impl RouteMethod {
    pub fn parse(method: &str) -> Result<Self, ServeError> {
        match method {
            "GET" => Ok(RouteMethod::Get),
            other => Err(ServeError::MethodNotAllowed {
                method: other.to_string(),
                hint: "Only GET is supported",
            }),
        }
    }
}

/// Métodos aceptados en modo directorio compartido
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SharedMethod {
    Get,
    Post,
}

impl SharedMethod {
    pub fn parse(method: &str) -> Result<Self, ServeError> {
        match method {
            "GET" => Ok(SharedMethod::Get),
            "POST" => Ok(SharedMethod::Post),
            other => Err(ServeError::MethodNotAllowed {
                method: other.to_string(),
                hint: "Only GET and POST are supported",
            }),
        }
    }
}

/// Estado inmutable del servidor: la estrategia de resolución activa
#[derive(Debug, Clone)]
pub enum ServeMode {
    Routes(RouteTable),
    Shared(SharedRoot),
}

impl ServeMode {
    /// Construye el modo desde la configuración (carga rutas o prepara la raíz)
    pub fn from_config(config: &Config) -> Result<Self, StartupError> {
        match &config.mode {
            ModeArgs::Routes { route_file } => Ok(ServeMode::Routes(RouteTable::load(route_file)?)),
            ModeArgs::Shared { dir } => Ok(ServeMode::Shared(SharedRoot::open(dir)?)),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ServeMode::Routes(_) => "routes",
            ServeMode::Shared(_) => "shared",
        }
    }

    /// Atiende un request ya parseado.
    ///
    /// `reader` queda posicionado al inicio del body; solo las subidas lo leen.
    /// Los errores se convierten aquí en respuestas de texto plano.
    pub fn handle<R: Read>(&self, request: &Request, reader: &mut MessageReader<R>) -> Response {
        let result = match self {
            ServeMode::Routes(table) => serve_route(table, request),
            ServeMode::Shared(root) => serve_shared(root, request, reader),
        };

        result.unwrap_or_else(|err| {
            if err.status().is_server_error() {
                tracing::error!(error = %err, "fallo de I/O");
            } else {
                tracing::debug!(error = %err, "request rechazado");
            }
            err.to_response()
        })
    }
}

/// Modo tabla de rutas: coincidencia exacta contra el path completo
fn serve_route(table: &RouteTable, request: &Request) -> Result<Response, ServeError> {
    let RouteMethod::Get = RouteMethod::parse(request.method())?;

    let file_path = table.resolve(request.raw_path())?;
    read_file(&file_path)
}

/// Modo directorio compartido
fn serve_shared<R: Read>(
    root: &SharedRoot,
    request: &Request,
    reader: &mut MessageReader<R>,
) -> Result<Response, ServeError> {
    let raw_path = request.raw_path();

    match SharedMethod::parse(request.method())? {
        SharedMethod::Get => {
            if let Some(name) = raw_path.strip_prefix(DOWNLOAD_PREFIX) {
                let file_path = root.resolve_download(name)?;
                read_file(&file_path)
            } else if raw_path == LIST_PATH {
                let files = root.list().map_err(ServeError::Read)?;
                let mut body = files.join("\n");
                if !body.is_empty() {
                    body.push('\n');
                }
                Ok(Response::text(StatusCode::Ok, &body))
            } else {
                Err(ServeError::BadPath("Expected /get?file=<name>"))
            }
        }
        SharedMethod::Post => {
            let name = raw_path
                .strip_prefix(UPLOAD_PREFIX)
                .ok_or(ServeError::BadPath("Expected /upload?file=<name>"))?;

            let upload = shared::receive(root, name, request.content_length(), reader)?;
            let stored = upload
                .path
                .strip_prefix(root.root())
                .unwrap_or(&upload.path)
                .display()
                .to_string();

            tracing::info!(file = %stored, bytes = upload.bytes, "archivo subido");
            Ok(Response::text(
                StatusCode::Created,
                &format!("Uploaded {} ({} bytes)", stored, upload.bytes),
            ))
        }
    }
}

/// Lee el archivo completo en memoria y arma la respuesta 200
fn read_file(path: &Path) -> Result<Response, ServeError> {
    let content = fs::read(path).map_err(ServeError::Read)?;
    let mime = content_type(&path.to_string_lossy());
    Ok(Response::file(&mime, content))
}
