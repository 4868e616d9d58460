//! # Tabla de Rutas
//! src/router/mod.rs
//!
//! Mapea paths HTTP a archivos locales, cargados una sola vez al arrancar
//! desde un archivo de texto.
//!
//! ## Formato del archivo
//!
//! ```text
//! /index.html:/srv/pages/index.html
//! /style.css:./pages/style.css
//! /win:C:\pages\win.html
//! ```
//!
//! Una entrada por línea, `requestPath:localPath`. Solo el primer `:` separa;
//! `localPath` puede contener más. Las líneas vacías o sin `:` se ignoran.
//!
//! ## Arquitectura
//!
//! ```text
//! Request → RouteTable → archivo local → Response
//! ```
//!
//! La primera entrada cuyo path coincide exactamente gana. La tabla confía en
//! quien escribió el archivo de rutas: no hay confinamiento del destino.

use crate::error::{ServeError, StartupError};
use crate::path::normalize;
use std::fs;
use std::path::{Path, PathBuf};

/// Una entrada de la tabla: path del request → archivo local
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub request_path: String,
    pub local_path: String,
}

/// Tabla de rutas inmutable después de cargarse
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    /// Entradas en el orden del archivo
    routes: Vec<RouteEntry>,
}

impl RouteTable {
    /// Crea una tabla vacía
    pub fn new() -> Self {
        Self::default()
    }

    /// Parsea el contenido de un archivo de rutas
    ///
    /// # Ejemplo
    /// ```
    /// use file_server::router::RouteTable;
    ///
    /// let table = RouteTable::parse("/a:/srv/a.html\n\nsin-separador\n/b:C:/b.txt\n");
    /// assert_eq!(table.len(), 2);
    /// ```
    pub fn parse(contents: &str) -> Self {
        let mut table = Self::new();

        for line in contents.split('\n') {
            let line = line.trim();
            if let Some((request_path, local_path)) = line.split_once(':') {
                if request_path.is_empty() {
                    continue;
                }
                table.register(request_path, local_path);
            }
        }

        table
    }

    /// Lee y parsea el archivo de rutas. Un error aquí es fatal al arrancar.
    pub fn load(path: &Path) -> Result<Self, StartupError> {
        let contents = fs::read_to_string(path).map_err(|source| StartupError::RouteFile {
            path: path.to_path_buf(),
            source,
        })?;

        let table = Self::parse(&contents);
        tracing::info!(file = %path.display(), routes = table.len(), "tabla de rutas cargada");
        Ok(table)
    }

    /// Registra una ruta al final de la tabla
    pub fn register(&mut self, request_path: &str, local_path: &str) {
        self.routes.push(RouteEntry {
            request_path: request_path.to_string(),
            local_path: local_path.to_string(),
        });
    }

    /// Primera entrada cuyo path coincide exactamente (sin query ni prefijos)
    pub fn lookup(&self, request_path: &str) -> Option<&RouteEntry> {
        self.routes
            .iter()
            .find(|entry| entry.request_path == request_path)
    }

    /// Resuelve un path a un archivo local legible
    ///
    /// - Sin entrada: `NoRoute`
    /// - El destino no existe o es un directorio: `FileNotFound`
    pub fn resolve(&self, request_path: &str) -> Result<PathBuf, ServeError> {
        let entry = self.lookup(request_path).ok_or(ServeError::NoRoute)?;
        let file_path = normalize(Path::new(&entry.local_path));

        match fs::metadata(&file_path) {
            Ok(meta) if !meta.is_dir() => Ok(file_path),
            _ => Err(ServeError::FileNotFound),
        }
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static COUNTER: AtomicUsize = AtomicUsize::new(0);

    fn scratch_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "file_server_router_{}_{}",
            std::process::id(),
            COUNTER.fetch_add(1, Ordering::SeqCst)
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_parse_skips_malformed_lines() {
        let table = RouteTable::parse("  /a:/srv/a.html  \r\n\nno-colon\n:/orphan\n/b:/srv/b.txt");

        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup("/a").unwrap().local_path, "/srv/a.html");
        assert_eq!(table.lookup("/b").unwrap().local_path, "/srv/b.txt");
        assert!(table.lookup("no-colon").is_none());
    }

    #[test]
    fn test_local_path_may_contain_colons() {
        let table = RouteTable::parse("/win:C:\\pages\\win.html");
        assert_eq!(table.lookup("/win").unwrap().local_path, "C:\\pages\\win.html");
    }

    #[test]
    fn test_first_match_wins() {
        let table = RouteTable::parse("/a:/first\n/a:/second");
        assert_eq!(table.lookup("/a").unwrap().local_path, "/first");
    }

    #[test]
    fn test_exact_match_only() {
        let table = RouteTable::parse("/index.html:/srv/index.html");
        assert!(table.lookup("/index.html?x=1").is_none());
        assert!(table.lookup("/index").is_none());
        assert!(table.lookup("/index.html/").is_none());
    }

    #[test]
    fn test_resolve_no_route() {
        let table = RouteTable::new();
        assert!(matches!(table.resolve("/missing.html"), Err(ServeError::NoRoute)));
    }

    #[test]
    fn test_resolve_existing_file() {
        let dir = scratch_dir();
        let file = dir.join("index.html");
        fs::write(&file, b"<h1>hola</h1>").unwrap();

        let mut table = RouteTable::new();
        table.register("/index.html", &format!("{}/./index.html", dir.display()));

        assert_eq!(table.resolve("/index.html").unwrap(), file);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_resolve_missing_or_directory_target() {
        let dir = scratch_dir();
        let mut table = RouteTable::new();
        table.register("/dir", &dir.display().to_string());
        table.register("/gone", &dir.join("gone.txt").display().to_string());

        assert!(matches!(table.resolve("/dir"), Err(ServeError::FileNotFound)));
        assert!(matches!(table.resolve("/gone"), Err(ServeError::FileNotFound)));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_missing_file_is_startup_error() {
        let result = RouteTable::load(Path::new("/definitely/not/here/routes.txt"));
        assert!(matches!(result, Err(StartupError::RouteFile { .. })));
    }
}
