use embedded_io_async::{Read, Write};

use super::{Error, HttpResult, connection::HttpConnection};

const BAD_REQUEST: &[u8] = b"HTTP/1.1 400 Bad Request\r\n\
    Content-Length: 0\r\n\
    Connection: close\r\n\r\n";

#[allow(async_fn_in_trait)]
pub trait HttpHandler {
    async fn handle_request<S: Read + Write>(
        &self,
        conn: HttpConnection<'_, S>,
    ) -> HttpResult;
}

/// Serves one request per connection with the given handler.
pub struct HttpServer<'a, T: HttpHandler> {
    handler: &'a T,
}

impl<'a, T: HttpHandler> HttpServer<'a, T> {
    pub fn new(handler: &'a T) -> Self {
        Self { handler }
    }

    /// Read a request from the stream and dispatch it to the handler.
    ///
    /// Requests that cannot be parsed are answered with `400 Bad Request`.
    /// Closing the stream is left to the caller.
    pub async fn serve<S: Read + Write>(&self, stream: &mut S) -> HttpResult {
        let conn = match HttpConnection::from_stream(stream).await {
            Ok(connection) => connection,
            Err(e) if e.is_bad_request() => {
                log::warn!("http_server: rejecting request: {:?}", e);
                stream.write_all(BAD_REQUEST).await.map_err(Error::io)?;
                stream.flush().await.map_err(Error::io)?;
                return Err(e);
            }
            Err(e) => return Err(e),
        };

        self.handler.handle_request(conn).await
    }
}
