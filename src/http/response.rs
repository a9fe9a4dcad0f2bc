//! Fixed response templates.
//!
//! Everything the server says on its own behalf is one of these canned
//! byte sequences; only static file contents and CGI output vary. The CGI
//! path gets a bare status line and the child supplies the rest verbatim.

use std::io;
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Server identification header, shared by every template that carries one.
pub const SERVER_STRING: &str = "Server: httpd/0.1.0\r\n";

/// Header block preceding a static file body.
pub const OK_HEADERS: &str = "HTTP/1.0 200 OK\r\n\
    Server: httpd/0.1.0\r\n\
    Content-Type: text/html\r\n\
    \r\n";

/// Bare success line sent before CGI output is relayed.
pub const OK_STATUS_LINE: &str = "HTTP/1.0 200 OK\r\n";

pub const NOT_FOUND: &str = "HTTP/1.0 404 NOT FOUND\r\n\
    Server: httpd/0.1.0\r\n\
    Content-Type: text/html\r\n\
    \r\n\
    <HTML><TITLE>Not Found</TITLE>\r\n\
    <BODY><P>The server could not fulfill\r\n\
    your request because the resource specified\r\n\
    is unavailable or nonexistent.</P>\r\n\
    </BODY></HTML>\r\n";

pub const UNIMPLEMENTED: &str = "HTTP/1.0 501 Method Not Implemented\r\n\
    Server: httpd/0.1.0\r\n\
    Content-Type: text/html\r\n\
    \r\n\
    <HTML><HEAD><TITLE>Method Not Implemented\r\n\
    </TITLE></HEAD>\r\n\
    <BODY><P>HTTP request method not supported.</P>\r\n\
    </BODY></HTML>\r\n";

pub const BAD_REQUEST: &str = "HTTP/1.0 400 BAD REQUEST\r\n\
    Content-type: text/html\r\n\
    \r\n\
    <P>Your browser sent a bad request, \
    such as a POST without a Content-Length.\r\n";

pub const CANNOT_EXECUTE: &str = "HTTP/1.0 500 Internal Server Error\r\n\
    Content-type: text/html\r\n\
    \r\n\
    <P>Error prohibited CGI execution.\r\n";

pub async fn not_found<W: AsyncWrite + Unpin>(writer: &mut W) -> io::Result<()> {
    writer.write_all(NOT_FOUND.as_bytes()).await
}

pub async fn unimplemented<W: AsyncWrite + Unpin>(writer: &mut W) -> io::Result<()> {
    writer.write_all(UNIMPLEMENTED.as_bytes()).await
}

pub async fn bad_request<W: AsyncWrite + Unpin>(writer: &mut W) -> io::Result<()> {
    writer.write_all(BAD_REQUEST.as_bytes()).await
}

pub async fn cannot_execute<W: AsyncWrite + Unpin>(writer: &mut W) -> io::Result<()> {
    writer.write_all(CANNOT_EXECUTE.as_bytes()).await
}

pub async fn ok_headers<W: AsyncWrite + Unpin>(writer: &mut W) -> io::Result<()> {
    writer.write_all(OK_HEADERS.as_bytes()).await
}
