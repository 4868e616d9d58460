//! # Códigos de Estado HTTP
//!
//! Este módulo define los únicos códigos de estado que el servidor de archivos
//! puede producir. La lista es cerrada: cada condición de error del servidor
//! corresponde exactamente a uno de estos códigos.
//!
//! - **2xx**: Éxito (200 descarga, 201 subida)
//! - **4xx**: Error del cliente (400, 403, 404, 405, 411)
//! - **5xx**: Error del servidor (500)

/// Representa los códigos de estado HTTP que soporta nuestro servidor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK - Archivo encontrado y enviado
    Ok = 200,

    /// 201 Created - Archivo subido y guardado
    Created = 201,

    /// 400 Bad Request - Request line malformada o prefijo de query inválido
    BadRequest = 400,

    /// 403 Forbidden - La ruta resuelta escapa del directorio compartido
    Forbidden = 403,

    /// 404 Not Found - Ruta o archivo inexistente
    NotFound = 404,

    /// 405 Method Not Allowed - Método fuera de la lista del modo
    MethodNotAllowed = 405,

    /// 411 Length Required - Subida sin `Content-Length` positivo
    LengthRequired = 411,

    /// 500 Internal Server Error - Fallo de I/O al leer o escribir archivos
    InternalServerError = 500,
}

impl StatusCode {
    /// Convierte el código a su valor numérico
    ///
    /// # Ejemplo
    /// ```
    /// use file_server::http::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// ```
    pub fn as_u16(&self) -> u16 {
        *self as u16
    }

    /// Retorna el texto de razón (reason phrase) asociado al código
    ///
    /// # Ejemplo
    /// ```
    /// use file_server::http::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::LengthRequired.reason_phrase(), "Length Required");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Created => "Created",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::Forbidden => "Forbidden",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
            StatusCode::LengthRequired => "Length Required",
            StatusCode::InternalServerError => "Internal Server Error",
        }
    }

    /// Verifica si el código indica error del servidor (5xx)
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.as_u16())
    }
}

impl std::fmt::Display for StatusCode {
    /// Formato: "200 OK"
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.as_u16(), self.reason_phrase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_values() {
        assert_eq!(StatusCode::Created.as_u16(), 201);
        assert_eq!(StatusCode::Forbidden.as_u16(), 403);
        assert_eq!(StatusCode::MethodNotAllowed.as_u16(), 405);
        assert_eq!(StatusCode::LengthRequired.as_u16(), 411);
    }

    #[test]
    fn test_is_server_error() {
        assert!(StatusCode::InternalServerError.is_server_error());
        assert!(!StatusCode::LengthRequired.is_server_error());
        assert!(!StatusCode::Created.is_server_error());
    }

    #[test]
    fn test_display() {
        assert_eq!(StatusCode::Ok.to_string(), "200 OK");
        assert_eq!(StatusCode::Forbidden.to_string(), "403 Forbidden");
        assert_eq!(StatusCode::MethodNotAllowed.to_string(), "405 Method Not Allowed");
        assert_eq!(
            StatusCode::InternalServerError.to_string(),
            "500 Internal Server Error"
        );
    }
}
