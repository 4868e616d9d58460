//! # Clasificador de Content-Type
//!
//! Función pura de nombre de archivo a tipo MIME. Primero se consulta una
//! tabla fija de extensiones (comparación exacta del sufijo, sensible a
//! mayúsculas); si no hay coincidencia se consulta `mime_guess`, y si tampoco
//! responde se usa `application/octet-stream`.

/// Tipo por defecto cuando no se reconoce la extensión
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Tabla fija: sufijo → tipo MIME
const KNOWN_TYPES: &[(&str, &str)] = &[
    (".html", "text/html"),
    (".htm", "text/html"),
    (".txt", "text/plain"),
    (".jpg", "image/jpeg"),
    (".jpeg", "image/jpeg"),
    (".png", "image/png"),
    (".css", "text/css"),
    (".js", "application/javascript"),
];

/// Determina el Content-Type a partir del nombre del archivo
///
/// # Ejemplo
/// ```
/// use file_server::http::mime::content_type;
///
/// assert_eq!(content_type("foo.png"), "image/png");
/// assert_eq!(content_type("foo.unknownext"), "application/octet-stream");
/// ```
pub fn content_type(file_name: &str) -> String {
    if let Some((_, mime)) = KNOWN_TYPES
        .iter()
        .find(|(suffix, _)| file_name.ends_with(suffix))
    {
        return (*mime).to_string();
    }

    // La tabla fija no matchea mayúsculas (FOTO.PNG); mime_guess sí
    mime_guess::from_path(file_name)
        .first_raw()
        .unwrap_or(OCTET_STREAM)
        .to_string()
}
