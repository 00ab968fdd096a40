use embedded_io_async::{Read, Write};
use heapless::String;
use serde::{Serialize, de::DeserializeOwned};

use super::{
    Error,
    HttpResult,
    headers::{
        ContentHeaders,
        ContentType,
        HttpMethod,
        ResponseHeaders,
        TargetWriter as _,
        find_content_length,
        parse_request_line,
        read_heading,
    },
};

pub(crate) const HEADER_BUFFER_SIZE: usize = 512;
pub(crate) const BODY_BUFFER_SIZE: usize = 1024;
const MAX_PATH_LEN: usize = 64;
const STREAM_CHUNK_SIZE: usize = 1024;

/// HTTP connection context
pub struct HttpConnection<'a, S> {
    method: HttpMethod,
    path: String<MAX_PATH_LEN>,

    stream: &'a mut S,
    content_length: u32,
    header_end: usize,
    header_len: usize,
    header_buf: [u8; HEADER_BUFFER_SIZE],
    body_buf: [u8; BODY_BUFFER_SIZE],
}

impl<'a, S: Read + Write> HttpConnection<'a, S> {
    /// Read the request line and headers from a stream.
    ///
    /// The body is left unread until the handler asks for it.
    pub async fn from_stream(stream: &'a mut S) -> Result<Self, Error> {
        let mut header_buf = [0u8; HEADER_BUFFER_SIZE];
        let (header_end, header_len) =
            read_heading(&mut header_buf, stream).await?;

        // Only parse the headers portion, the tail may hold binary body data
        let header_str = core::str::from_utf8(&header_buf[..header_end])
            .map_err(|_| Error::Parse)?;
        let (method, raw_path, rest_headers) =
            parse_request_line(header_str).ok_or(Error::Parse)?;
        let content_length = find_content_length(rest_headers).unwrap_or(0);

        let mut path = String::new();
        path.push_str(raw_path).map_err(|()| Error::TooLarge)?;
        log::debug!("http: {} {}", method.as_str(), path);

        Ok(Self {
            method,
            path,
            stream,
            content_length,
            header_end,
            header_len,
            header_buf,
            body_buf: [0u8; BODY_BUFFER_SIZE],
        })
    }

    /// Get request method and path
    pub fn route(&self) -> (HttpMethod, &'_ str) {
        (self.method, self.path.as_str())
    }

    pub fn content_length(&self) -> u32 {
        self.content_length
    }

    /// Write the headers to the connection
    pub async fn write_headers(
        &mut self,
        headers: &ResponseHeaders,
    ) -> HttpResult {
        let mut buf = String::<HEADER_BUFFER_SIZE>::new();
        headers.write_to(&mut buf)?;
        log::debug!(
            "http: {} {} -> {}",
            self.method.as_str(),
            self.path,
            headers.status()
        );
        self.write_all(buf.as_bytes()).await
    }

    /// Write the body to the connection
    pub async fn write_body(&mut self, body: &[u8]) -> HttpResult {
        for chunk in body.chunks(STREAM_CHUNK_SIZE) {
            self.write_all(chunk).await?;
        }
        Ok(())
    }

    /// Write a complete response with a body of the given content type
    pub async fn write_response(
        &mut self,
        headers: ResponseHeaders,
        content: ContentHeaders,
        body: &[u8],
    ) -> HttpResult {
        let headers = headers.with_content(content.with_length(body.len()));
        self.write_headers(&headers).await?;
        self.write_body(body).await
    }

    /// Write JSON to the connection with a `200 OK` status
    ///
    /// Writes both headers and body.
    pub async fn write_json<T: Serialize>(
        &mut self,
        data: &T,
    ) -> HttpResult {
        self.write_json_with(ResponseHeaders::success(), data).await
    }

    /// Write JSON to the connection with the given status headers
    pub async fn write_json_with<T: Serialize>(
        &mut self,
        headers: ResponseHeaders,
        data: &T,
    ) -> HttpResult {
        let n = serde_json_core::to_slice(data, &mut self.body_buf)
            .map_err(|_| Error::Encode)?;
        let headers = headers.with_content(
            ContentHeaders::new(ContentType::Json).with_length(n),
        );

        self.write_headers(&headers).await?;
        self.stream
            .write_all(&self.body_buf[..n])
            .await
            .map_err(Error::io)?;
        self.stream.flush().await.map_err(Error::io)
    }

    /// Read JSON from the request body
    pub async fn read_json<T: DeserializeOwned>(&mut self) -> Result<T, Error> {
        let body = self.read_body().await?;
        let (data, _) = serde_json_core::from_slice(body).map_err(|e| {
            log::warn!("http: json parse error: {:?}", e);
            Error::Parse
        })?;
        Ok(data)
    }

    /// Read the request body
    pub async fn read_body(&mut self) -> Result<&[u8], Error> {
        if self.content_length == 0 {
            return Err(Error::NoData);
        }
        let content_length = self.content_length as usize;
        if content_length > BODY_BUFFER_SIZE {
            return Err(Error::TooLarge);
        }

        // Body bytes that arrived together with the headers
        let tail = &self.header_buf[self.header_end..self.header_len];
        let mut received = tail.len().min(content_length);
        self.body_buf[..received].copy_from_slice(&tail[..received]);

        while received < content_length {
            let n = self
                .stream
                .read(&mut self.body_buf[received..content_length])
                .await
                .map_err(Error::io)?;
            if n == 0 {
                return Err(Error::Closed);
            }
            received += n;
        }

        Ok(&self.body_buf[..content_length])
    }

    async fn write_all(&mut self, buf: &[u8]) -> HttpResult {
        self.stream.write_all(buf).await.map_err(Error::io)?;
        self.stream.flush().await.map_err(Error::io)?;
        Ok(())
    }
}
