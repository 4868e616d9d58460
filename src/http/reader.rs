//! # Lectura del mensaje HTTP
//! src/http/reader.rs
//!
//! Una sola abstracción lee la request line, el bloque de headers y el body
//! de subida sobre el mismo buffer. Las líneas se extraen con `read_until`, que
//! nunca consume más allá del `\n`, así que los bytes del body que ya están en
//! el buffer quedan disponibles para [`MessageReader::read_body`].

use std::io::{self, BufRead, BufReader, Read};

/// Longitud máxima de una línea (request line o header), incluyendo CRLF
pub const MAX_LINE_LEN: usize = 8 * 1024;

/// Errores al leer líneas del stream
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    /// La línea supera [`MAX_LINE_LEN`]
    #[error("line exceeds {} bytes", MAX_LINE_LEN)]
    LineTooLong,

    /// La línea no es UTF-8 válido
    #[error("line is not valid UTF-8")]
    InvalidUtf8,

    /// Error de I/O del socket
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Lector de mensajes HTTP sobre cualquier `Read`
pub struct MessageReader<R> {
    inner: BufReader<R>,
}

impl<R: Read> MessageReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner: BufReader::new(inner),
        }
    }

    /// Lee una línea sin su terminador (`\r\n` o `\n`); debe ser UTF-8.
    ///
    /// Retorna `Ok(None)` si el stream terminó antes de entregar algún byte.
    pub fn read_line(&mut self) -> Result<Option<String>, ReadError> {
        match self.read_raw_line()? {
            Some(raw) => String::from_utf8(raw)
                .map(Some)
                .map_err(|_| ReadError::InvalidUtf8),
            None => Ok(None),
        }
    }

    /// Lee los headers hasta la línea vacía (o fin del stream).
    ///
    /// Las líneas sin `:` se ignoran; los nombres conservan su forma original.
    /// Los bytes que no son UTF-8 se reemplazan, no invalidan el request.
    pub fn read_headers(&mut self) -> Result<Vec<(String, String)>, ReadError> {
        let mut headers = Vec::new();

        while let Some(raw) = self.read_raw_line()? {
            if raw.is_empty() {
                break;
            }
            let line = String::from_utf8_lossy(&raw);
            if let Some((name, value)) = line.split_once(':') {
                headers.push((name.trim().to_string(), value.trim().to_string()));
            }
        }

        Ok(headers)
    }

    /// Bytes de una línea sin terminador, con el límite de [`MAX_LINE_LEN`]
    fn read_raw_line(&mut self) -> Result<Option<Vec<u8>>, ReadError> {
        let mut raw = Vec::new();
        let limit = MAX_LINE_LEN as u64 + 1;
        let read = (&mut self.inner).take(limit).read_until(b'\n', &mut raw)?;

        if read == 0 {
            return Ok(None);
        }
        if raw.len() > MAX_LINE_LEN {
            return Err(ReadError::LineTooLong);
        }

        if raw.last() == Some(&b'\n') {
            raw.pop();
            if raw.last() == Some(&b'\r') {
                raw.pop();
            }
        }

        Ok(Some(raw))
    }

    /// Lee hasta `length` bytes del body.
    ///
    /// Si el cliente cierra antes, retorna los bytes recibidos (body corto).
    pub fn read_body(&mut self, length: u64) -> io::Result<Vec<u8>> {
        let mut body = Vec::new();
        (&mut self.inner).take(length).read_to_end(&mut body)?;
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader(bytes: &[u8]) -> MessageReader<&[u8]> {
        MessageReader::new(bytes)
    }

    #[test]
    fn test_read_line_crlf_and_lf() {
        let mut r = reader(b"GET / HTTP/1.1\r\nHost: x\n\r\n");
        assert_eq!(r.read_line().unwrap().as_deref(), Some("GET / HTTP/1.1"));
        assert_eq!(r.read_line().unwrap().as_deref(), Some("Host: x"));
        assert_eq!(r.read_line().unwrap().as_deref(), Some(""));
        assert_eq!(r.read_line().unwrap(), None);
    }

    #[test]
    fn test_read_line_without_terminator() {
        let mut r = reader(b"GET / HTTP/1.1");
        assert_eq!(r.read_line().unwrap().as_deref(), Some("GET / HTTP/1.1"));
        assert_eq!(r.read_line().unwrap(), None);
    }

    #[test]
    fn test_empty_stream() {
        let mut r = reader(b"");
        assert_eq!(r.read_line().unwrap(), None);
    }

    #[test]
    fn test_line_too_long() {
        let long = vec![b'a'; MAX_LINE_LEN + 10];
        let mut r = reader(&long);
        assert!(matches!(r.read_line(), Err(ReadError::LineTooLong)));
    }

    #[test]
    fn test_invalid_utf8_line() {
        let mut r = reader(b"\xff\xfe GET\r\n");
        assert!(matches!(r.read_line(), Err(ReadError::InvalidUtf8)));
    }

    #[test]
    fn test_headers_stop_at_blank_line() {
        let mut r = reader(b"Content-Length: 5\r\nX-Bad\r\nHost:  a:b \r\n\r\nhello");
        let headers = r.read_headers().unwrap();

        assert_eq!(
            headers,
            vec![
                ("Content-Length".to_string(), "5".to_string()),
                ("Host".to_string(), "a:b".to_string()),
            ]
        );
        assert_eq!(r.read_body(5).unwrap(), b"hello");
    }

    #[test]
    fn test_headers_tolerate_non_utf8_values() {
        let mut r = reader(b"X-Title: caf\xe9\r\nContent-Length: 2\r\n\r\nok");
        let headers = r.read_headers().unwrap();

        assert_eq!(headers.len(), 2);
        assert_eq!(headers[0].0, "X-Title");
        assert_eq!(headers[0].1, "caf\u{FFFD}");
        assert_eq!(headers[1], ("Content-Length".to_string(), "2".to_string()));
        assert_eq!(r.read_body(2).unwrap(), b"ok");
    }

    #[test]
    fn test_header_line_too_long() {
        let mut raw = b"X-Long: ".to_vec();
        raw.extend(vec![b'a'; MAX_LINE_LEN]);
        raw.extend_from_slice(b"\r\n\r\n");
        let mut r = reader(&raw);
        assert!(matches!(r.read_headers(), Err(ReadError::LineTooLong)));
    }

    #[test]
    fn test_body_is_not_over_consumed_by_lines() {
        let mut r = reader(b"POST /upload?file=a HTTP/1.1\r\n\r\n\r\nbin\r\n");
        r.read_line().unwrap();
        r.read_headers().unwrap();
        assert_eq!(r.read_body(7).unwrap(), b"\r\nbin\r\n");
    }

    #[test]
    fn test_short_body_on_early_eof() {
        let mut r = reader(b"abc");
        assert_eq!(r.read_body(10).unwrap(), b"abc");
    }
}
