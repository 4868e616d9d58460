//! # Receptor de Subidas
//! src/shared/upload.rs
//!
//! Lee exactamente `Content-Length` bytes del socket y los guarda como el
//! contenido completo del archivo destino. El guardado pasa por un archivo
//! temporal hermano que luego se renombra sobre el destino, así nadie ve un
//! archivo a medio escribir y un archivo previo se reemplaza entero.

use super::SharedRoot;
use crate::error::ServeError;
use crate::http::MessageReader;
use std::ffi::OsString;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Sufijo de los temporales de subida (no aparecen en el listado)
const TEMP_SUFFIX: &str = ".upload-tmp";

/// Resultado de una subida exitosa
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    /// Ruta absoluta donde quedó el archivo
    pub path: PathBuf,

    /// Bytes realmente recibidos (menos que `Content-Length` si el cliente cortó)
    pub bytes: u64,
}

/// Recibe una subida completa.
///
/// Orden de validación: nombre (400/403), `Content-Length` (411), body,
/// escritura (500). Ningún error anterior a la escritura crea archivos.
pub fn receive<R: Read>(
    shared: &SharedRoot,
    encoded_name: &str,
    content_length: Option<u64>,
    reader: &mut MessageReader<R>,
) -> Result<Upload, ServeError> {
    let path = shared.resolve(encoded_name)?;

    let length = match content_length {
        Some(length) if length > 0 => length,
        _ => return Err(ServeError::LengthRequired),
    };

    let body = reader.read_body(length).map_err(ServeError::Store)?;
    if (body.len() as u64) < length {
        tracing::warn!(
            expected = length,
            received = body.len(),
            "el cliente cerró antes de enviar todo el body"
        );
    }

    write_atomically(&path, &body).map_err(ServeError::Store)?;

    Ok(Upload {
        path,
        bytes: body.len() as u64,
    })
}

/// Escribe `contents` como el contenido completo de `path`.
///
/// Crea los directorios padres que falten.
pub fn write_atomically(path: &Path, contents: &[u8]) -> io::Result<()> {
    let parent = path
        .parent()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "path has no parent"))?;
    fs::create_dir_all(parent)?;

    let temp = temporary_path(path);
    let result = fs::File::create(&temp)
        .and_then(|mut file| {
            file.write_all(contents)?;
            file.sync_all()
        })
        .and_then(|_| fs::rename(&temp, path));

    if result.is_err() {
        let _ = fs::remove_file(&temp);
    }
    result
}

/// `dir/nombre` → `dir/.nombre.upload-tmp`
fn temporary_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    if let Some(file_name) = path.file_name() {
        name.push(file_name);
    }
    name.push(TEMP_SUFFIX);
    path.with_file_name(name)
}

/// Indica si `path` es un temporal de subida
pub fn is_temporary(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().ends_with(TEMP_SUFFIX))
        .unwrap_or(false)
}
