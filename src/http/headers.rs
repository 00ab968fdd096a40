use core::fmt::Write;

use embedded_io_async::Read;

use super::Error;

pub type StatusCode = u16;

fn reason_phrase(code: StatusCode) -> &'static str {
    match code {
        200 => "OK",
        204 => "No Content",
        400 => "Bad Request",
        404 => "Not Found",
        405 => "Method Not Allowed",
        413 => "Request Entity Too Large",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}

/// HTTP Content Type.
#[derive(Debug, Clone, Copy)]
pub enum ContentType {
    Json,
    TextHtml,
    JavaScript,
    Css,
}

impl ContentType {
    /// Convert the content type to a string.
    pub(super) fn as_str(self) -> &'static str {
        match self {
            ContentType::Json => "application/json",
            ContentType::TextHtml => "text/html",
            ContentType::JavaScript => "text/javascript",
            ContentType::Css => "text/css",
        }
    }
}

/// Text Encoding.
#[derive(Debug, Clone, Copy)]
pub enum TextEncoding {
    Utf8,
}

impl TextEncoding {
    /// Convert the text encoding to a string.
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
        }
    }
}

/// HTTP socket connection policy.
#[derive(Debug)]
pub(super) enum ConnectionPolicy {
    Close,
}

impl ConnectionPolicy {
    /// Convert the connection type to a string.
    pub(super) fn as_str(&self) -> &'static str {
        match self {
            ConnectionPolicy::Close => "close",
        }
    }
}

pub(super) trait TargetWriter {
    fn write_to(
        &self,
        writer: &mut impl Write,
    ) -> Result<(), core::fmt::Error>;
}

/// HTTP Content Headers.
pub struct ContentHeaders {
    content_type: ContentType,
    content_length: Option<usize>,
    text_encoding: Option<TextEncoding>,
}

impl ContentHeaders {
    /// Create a new content headers with a content type.
    pub const fn new(content_type: ContentType) -> Self {
        Self {
            content_type,
            content_length: None,
            text_encoding: None,
        }
    }

    /// Set the content length.
    #[must_use]
    pub const fn with_length(mut self, length: usize) -> Self {
        self.content_length = Some(length);
        self
    }

    /// Set the text encoding.
    #[must_use]
    pub const fn with_text_encoding(
        mut self,
        text_encoding: TextEncoding,
    ) -> Self {
        self.text_encoding = Some(text_encoding);
        self
    }
}

impl TargetWriter for ContentHeaders {
    fn write_to(
        &self,
        writer: &mut impl Write,
    ) -> Result<(), core::fmt::Error> {
        write!(writer, "Content-Type: {}", self.content_type.as_str())?;
        if let Some(text_encoding) = self.text_encoding {
            write!(writer, "; charset={}", text_encoding.as_str())?;
        }
        write!(writer, "\r\n")?;
        if let Some(content_length) = self.content_length {
            write!(writer, "Content-Length: {}\r\n", content_length)?;
        }
        Ok(())
    }
}

/// Response Headers.
pub struct ResponseHeaders {
    status: StatusCode,
    connection: ConnectionPolicy,
    content: Option<ContentHeaders>,
}

impl ResponseHeaders {
    /// Create empty response headers with a status code.
    pub const fn from_code(code: StatusCode) -> Self {
        Self {
            status: code,
            content: None,
            connection: ConnectionPolicy::Close,
        }
    }

    pub const fn success() -> Self {
        Self::from_code(200)
    }

    pub const fn not_found() -> Self {
        Self::from_code(404)
    }

    pub const fn bad_request() -> Self {
        Self::from_code(400)
    }

    /// Set the content headers.
    #[must_use]
    pub const fn with_content(mut self, content: ContentHeaders) -> Self {
        self.content = Some(content);
        self
    }

    pub const fn status(&self) -> StatusCode {
        self.status
    }
}

impl TargetWriter for ResponseHeaders {
    /// Write the response headers to a writer.
    fn write_to(
        &self,
        writer: &mut impl Write,
    ) -> Result<(), core::fmt::Error> {
        let reason = reason_phrase(self.status);
        write!(writer, "HTTP/1.1 {} {}\r\n", self.status, reason)?;
        if let Some(content) = &self.content {
            content.write_to(writer)?;
        } else {
            write!(writer, "Content-Length: 0\r\n")?;
        }

        write!(writer, "Connection: {}\r\n", self.connection.as_str())?;
        write!(writer, "\r\n")?;
        Ok(())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Options,
    Head,
}

impl HttpMethod {
    pub(super) fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "GET" => HttpMethod::Get,
            "POST" => HttpMethod::Post,
            "PUT" => HttpMethod::Put,
            "DELETE" => HttpMethod::Delete,
            "PATCH" => HttpMethod::Patch,
            "OPTIONS" => HttpMethod::Options,
            "HEAD" => HttpMethod::Head,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Head => "HEAD",
        }
    }
}

/// Parse the request line from the header string.
///
/// Returns the method, path without the query string, and rest of the header
/// string.
pub(super) fn parse_request_line(
    header_str: &str,
) -> Option<(HttpMethod, &str, &str)> {
    let line_end = header_str.find("\r\n")?;
    let first_line = &header_str[..line_end];
    let mut parts = first_line.split_whitespace();
    let method = parts.next().and_then(HttpMethod::parse)?;
    let target = parts.next()?;
    if !parts.next()?.starts_with("HTTP/") || parts.next().is_some() {
        return None;
    }
    let path = target.split('?').next().unwrap_or(target);
    if !path.starts_with('/') {
        return None;
    }

    Some((method, path, &header_str[line_end + 2..]))
}

/// Read the start line and headers from the stream.
///
/// Returns the position of the end of the headers and the number of bytes
/// read. Bytes past the end of the headers belong to the body.
pub(super) async fn read_heading<S: Read>(
    buf: &mut [u8],
    stream: &mut S,
) -> Result<(usize, usize), Error> {
    let mut header_len = 0;
    loop {
        if header_len >= buf.len() {
            return Err(Error::TooLarge);
        }
        let n = stream
            .read(&mut buf[header_len..])
            .await
            .map_err(Error::io)?;
        if n == 0 {
            return Err(if header_len == 0 {
                Error::Closed
            } else {
                Error::Parse
            });
        }
        header_len += n;
        // Check for end of headers
        if let Some(pos) =
            buf[..header_len].windows(4).position(|w| w == b"\r\n\r\n")
        {
            return Ok((pos + 4, header_len));
        }
    }
}

/// Find the content length in the header string.
///
/// Returns the content length if found, otherwise None.
#[allow(clippy::cast_possible_truncation)]
pub(super) fn find_content_length(header: &str) -> Option<u32> {
    const TARGET: &str = "content-length:";
    for line in header.lines() {
        if line
            .get(..TARGET.len())
            .is_some_and(|name| name.eq_ignore_ascii_case(TARGET))
        {
            let value_str = line[TARGET.len()..].trim();
            let length = value_str.parse::<u64>().ok()?;
            log::debug!("http: found Content-Length: {}", length);
            if length > u64::from(u32::MAX) {
                return None;
            }
            return Some(length as u32);
        }
    }
    None
}
