//! # Normalización léxica de rutas
//! src/path.rs
//!
//! Colapsa segmentos `.` y `..` sin tocar el sistema de archivos. La
//! verificación de traversal del directorio compartido depende de que esta
//! función no consulte el disco.

use std::path::{Component, Path, PathBuf};

/// Normaliza `path` de forma puramente léxica.
///
/// - `.` se elimina
/// - `..` elimina el segmento anterior; en la raíz no tiene efecto
/// - en rutas relativas, los `..` iniciales se conservan
///
/// # Ejemplo
/// ```
/// use std::path::Path;
/// use file_server::path::normalize;
///
/// assert_eq!(normalize(Path::new("/srv/a/./b/../c")), Path::new("/srv/a/c"));
/// assert_eq!(normalize(Path::new("/srv/../../etc")), Path::new("/etc"));
/// ```
pub fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    parts.iter().collect()
}
