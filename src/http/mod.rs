//! Minimal HTTP/1.1 server
//!
//! One request per connection, `Content-Length` bodies only. Generic over any
//! `embedded-io-async` stream, so the same code serves an `embassy-net` TCP
//! socket on the device and an in-memory stream on the host.

pub(crate) mod connection;
pub(crate) mod form;
pub(crate) mod headers;
pub(crate) mod server;

pub use connection::HttpConnection;
pub use form::form_value;
pub use headers::{
    ContentHeaders,
    ContentType,
    HttpMethod,
    ResponseHeaders,
    StatusCode,
    TextEncoding,
};
pub use server::{HttpHandler, HttpServer};

use embedded_io::ErrorKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Peer closed the connection
    Closed,
    /// Malformed request line, headers or body
    Parse,
    /// Request has no body
    NoData,
    /// Request does not fit the connection buffers
    TooLarge,
    /// Response headers do not fit the header buffer
    FormatHeaders,
    /// Response body could not be serialized
    Encode,
    /// Underlying stream failure
    Io(ErrorKind),
}

impl Error {
    pub(crate) fn io<E: embedded_io::Error>(err: E) -> Self {
        Error::Io(err.kind())
    }

    /// Whether the error was caused by the request content, as opposed to
    /// the transport.
    pub const fn is_bad_request(self) -> bool {
        matches!(self, Error::Parse | Error::NoData | Error::TooLarge)
    }
}

impl From<core::fmt::Error> for Error {
    fn from(_error: core::fmt::Error) -> Self {
        Error::FormatHeaders
    }
}

pub type HttpResult = Result<(), Error>;
