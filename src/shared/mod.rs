//! # Directorio Compartido
//! src/shared/mod.rs
//!
//! Descargas y subidas direccionadas por query:
//!
//! ```text
//! GET  /get?file=<nombre codificado>
//! POST /upload?file=<nombre codificado>   (body = bytes del archivo)
//! GET  /list
//! ```
//!
//! Todo archivo accedido debe quedar estrictamente dentro de la raíz
//! compartida. La verificación es léxica y ocurre antes de cualquier acceso
//! al disco.

pub mod upload;

use crate::error::{ServeError, StartupError};
use crate::path::normalize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub use upload::{receive, Upload};

/// Prefijo de las descargas
pub const DOWNLOAD_PREFIX: &str = "/get?file=";

/// Prefijo de las subidas
pub const UPLOAD_PREFIX: &str = "/upload?file=";

/// Path del listado de archivos
pub const LIST_PATH: &str = "/list";

/// Raíz compartida: absoluta, normalizada e inmutable
#[derive(Debug, Clone)]
pub struct SharedRoot {
    root: PathBuf,
}

impl SharedRoot {
    /// Prepara la raíz al arrancar: la crea si no existe y la canonicaliza.
    pub fn open(dir: &Path) -> Result<Self, StartupError> {
        let to_startup = |source| StartupError::SharedDir {
            path: dir.to_path_buf(),
            source,
        };

        fs::create_dir_all(dir).map_err(to_startup)?;
        let root = fs::canonicalize(dir).map_err(to_startup)?;

        tracing::info!(root = %root.display(), "directorio compartido listo");
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Decodifica el nombre y lo resuelve dentro de la raíz.
    ///
    /// No toca el sistema de archivos. Falla con:
    /// - `BadPath` si el nombre está vacío o no es UTF-8 válido
    /// - `Forbidden` si el resultado no es descendiente estricto de la raíz
    /// - `BadPath` si el nombre termina con el sufijo de los temporales de subida
    pub fn resolve(&self, encoded_name: &str) -> Result<PathBuf, ServeError> {
        if encoded_name.is_empty() {
            return Err(ServeError::BadPath("Missing file name"));
        }

        let name = percent_encoding::percent_decode_str(encoded_name)
            .decode_utf8()
            .map_err(|_| ServeError::BadPath("Invalid file name encoding"))?;

        let candidate = normalize(&self.root.join(&*name));
        if candidate == self.root || !candidate.starts_with(&self.root) {
            tracing::warn!(name = %name, "intento de acceso fuera del directorio compartido");
            return Err(ServeError::Forbidden);
        }

        if upload::is_temporary(&candidate) {
            return Err(ServeError::BadPath("Reserved file name"));
        }

        Ok(candidate)
    }

    /// Resuelve una descarga: además exige que el archivo exista y no sea directorio
    pub fn resolve_download(&self, encoded_name: &str) -> Result<PathBuf, ServeError> {
        let path = self.resolve(encoded_name)?;

        match fs::metadata(&path) {
            Ok(meta) if !meta.is_dir() => Ok(path),
            _ => Err(ServeError::FileNotFound),
        }
    }

    /// Lista los archivos regulares bajo la raíz, relativos y ordenados
    pub fn list(&self) -> io::Result<Vec<String>> {
        let mut files = Vec::new();
        collect_files(&self.root, &self.root, &mut files)?;
        files.sort();
        Ok(files)
    }
}

/// Recorre `dir` recursivamente acumulando paths relativos a `root` con `/`
fn collect_files(root: &Path, dir: &Path, files: &mut Vec<String>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let file_type = entry.file_type()?;

        if file_type.is_dir() {
            collect_files(root, &path, files)?;
        } else if file_type.is_file() && !upload::is_temporary(&path) {
            if let Ok(relative) = path.strip_prefix(root) {
                let parts: Vec<String> = relative
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy().into_owned())
                    .collect();
                files.push(parts.join("/"));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static COUNTER: AtomicUsize = AtomicUsize::new(0);

    /// Raíz compartida nueva en un directorio temporal único
    pub(crate) fn scratch_root() -> SharedRoot {
        let dir = std::env::temp_dir().join(format!(
            "file_server_shared_{}_{}",
            std::process::id(),
            COUNTER.fetch_add(1, Ordering::SeqCst)
        ));
        SharedRoot::open(&dir).unwrap()
    }

    #[test]
    fn test_open_creates_and_canonicalizes() {
        let shared = scratch_root();
        assert!(shared.root().is_absolute());
        assert!(shared.root().is_dir());
        fs::remove_dir_all(shared.root()).unwrap();
    }

    #[test]
    fn test_resolve_plain_and_encoded_names() {
        let shared = scratch_root();

        assert_eq!(shared.resolve("a.txt").unwrap(), shared.root().join("a.txt"));
        assert_eq!(
            shared.resolve("mis%20fotos%2Fplaya.png").unwrap(),
            shared.root().join("mis fotos").join("playa.png")
        );
        assert_eq!(
            shared.resolve("caf%C3%A9.txt").unwrap(),
            shared.root().join("café.txt")
        );
        assert_eq!(shared.resolve("a+b.txt").unwrap(), shared.root().join("a+b.txt"));
        fs::remove_dir_all(shared.root()).unwrap();
    }

    #[test]
    fn test_resolve_collapses_inner_parents() {
        let shared = scratch_root();
        assert_eq!(
            shared.resolve("sub/../x.txt").unwrap(),
            shared.root().join("x.txt")
        );
        fs::remove_dir_all(shared.root()).unwrap();
    }

    #[test]
    fn test_traversal_is_forbidden() {
        let shared = scratch_root();

        for name in ["../secret.txt", "..%2F..%2Fetc%2Fpasswd", "a/../../x", "%2Fetc%2Fpasswd", "."] {
            assert!(
                matches!(shared.resolve(name), Err(ServeError::Forbidden)),
                "{} should be forbidden",
                name
            );
        }
        fs::remove_dir_all(shared.root()).unwrap();
    }

    #[test]
    fn test_sibling_with_common_prefix_is_forbidden() {
        let shared = scratch_root();
        let root_name = shared.root().file_name().unwrap().to_string_lossy().into_owned();
        let sneaky = format!("../{}-evil/x.txt", root_name);

        assert!(matches!(shared.resolve(&sneaky), Err(ServeError::Forbidden)));
        fs::remove_dir_all(shared.root()).unwrap();
    }

    #[test]
    fn test_bad_names() {
        let shared = scratch_root();
        assert!(matches!(shared.resolve(""), Err(ServeError::BadPath(_))));
        assert!(matches!(shared.resolve("%FF%FE"), Err(ServeError::BadPath(_))));
        fs::remove_dir_all(shared.root()).unwrap();
    }

    #[test]
    fn test_temporary_suffix_is_reserved() {
        let shared = scratch_root();

        for name in ["x.upload-tmp", ".foo.upload-tmp", "sub%2F.a.txt.upload-tmp"] {
            assert!(
                matches!(shared.resolve(name), Err(ServeError::BadPath("Reserved file name"))),
                "{} should be reserved",
                name
            );
        }
        assert!(shared.resolve("x.upload-tmp.txt").is_ok());
        fs::remove_dir_all(shared.root()).unwrap();
    }

    #[test]
    fn test_resolve_download() {
        let shared = scratch_root();
        fs::write(shared.root().join("a.txt"), b"a").unwrap();
        fs::create_dir(shared.root().join("dir")).unwrap();

        assert!(shared.resolve_download("a.txt").is_ok());
        assert!(matches!(shared.resolve_download("b.txt"), Err(ServeError::FileNotFound)));
        assert!(matches!(shared.resolve_download("dir"), Err(ServeError::FileNotFound)));
        fs::remove_dir_all(shared.root()).unwrap();
    }

    #[test]
    fn test_list_files() {
        let shared = scratch_root();
        fs::write(shared.root().join("b.txt"), b"b").unwrap();
        fs::create_dir(shared.root().join("sub")).unwrap();
        fs::write(shared.root().join("sub").join("a.png"), b"a").unwrap();

        assert_eq!(shared.list().unwrap(), vec!["b.txt".to_string(), "sub/a.png".to_string()]);
        fs::remove_dir_all(shared.root()).unwrap();
    }
}
