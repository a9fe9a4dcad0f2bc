use crate::http::line::LineReader;
use std::io;
use tokio::io::AsyncRead;

/// HTTP request methods.
///
/// Only the two methods the server implements. Anything else on the wire is
/// answered with 501 before a request is ever built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    Get,
    /// POST - Submit a request body
    Post,
}

impl Method {
    /// Parses a method token, case-insensitively.
    ///
    /// # Example
    ///
    /// ```
    /// # use httpd::http::request::Method;
    /// assert_eq!(Method::from_token("GET"), Some(Method::Get));
    /// assert_eq!(Method::from_token("post"), Some(Method::Post));
    /// assert_eq!(Method::from_token("DELETE"), None);
    /// ```
    pub fn from_token(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("GET") {
            Some(Method::Get)
        } else if s.eq_ignore_ascii_case("POST") {
            Some(Method::Post)
        } else {
            None
        }
    }

    /// Canonical spelling, as exported to CGI children in `REQUEST_METHOD`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// A parsed request, built once per connection from the request line.
///
/// `content_length` is filled in later, at CGI dispatch time, when the POST
/// header block is consumed.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    /// URL path with any query string already split off (GET only).
    pub path: String,
    /// Everything after the first `?` in a GET URL, if present. A present
    /// query string marks the request for CGI dispatch on its own.
    pub query_string: Option<String>,
    /// Declared POST body length, from the `Content-Length` header.
    pub content_length: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Method outside {GET, POST}; answered with the fixed 501 response.
    UnsupportedMethod(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::UnsupportedMethod(m) => {
                write!(f, "unsupported HTTP method: {:?}", m)
            }
        }
    }
}

impl std::error::Error for ParseError {}

impl Request {
    /// Parses a request line of the form `METHOD URL VERSION`.
    ///
    /// Tokens are separated by arbitrary runs of whitespace; the version is
    /// ignored entirely. For GET, the URL is split at the first `?` and the
    /// remainder becomes the query string. POST URLs are kept verbatim.
    pub fn from_request_line(line: &str) -> Result<Self, ParseError> {
        let mut tokens = line.split_whitespace();

        let method_token = tokens.next().unwrap_or("");
        let method = Method::from_token(method_token)
            .ok_or_else(|| ParseError::UnsupportedMethod(method_token.to_string()))?;

        let url = tokens.next().unwrap_or("");

        let (path, query_string) = match method {
            Method::Get => match url.split_once('?') {
                Some((path, query)) => (path.to_string(), Some(query.to_string())),
                None => (url.to_string(), None),
            },
            Method::Post => (url.to_string(), None),
        };

        Ok(Request {
            method,
            path,
            query_string,
            content_length: None,
        })
    }
}

/// Reads and discards request lines up to the blank header/body separator.
///
/// Also stops at end-of-stream, leaving the stream in a clean state for the
/// response even when the client sent nothing further.
pub async fn drain_headers<R: AsyncRead + Unpin>(reader: &mut LineReader<R>) -> io::Result<()> {
    loop {
        let line = reader.read_line().await?;
        if line.is_empty() {
            return Ok(());
        }
    }
}

/// Consumes the POST header block, extracting `Content-Length`.
///
/// The header name is matched case-insensitively on its first 14 characters;
/// every other header is read and discarded to advance the stream to the
/// body boundary. Returns `None` when the header is absent or its value does
/// not parse as a non-negative integer.
pub async fn read_content_length<R: AsyncRead + Unpin>(
    reader: &mut LineReader<R>,
) -> io::Result<Option<u64>> {
    let mut content_length = None;

    loop {
        let line = reader.read_line().await?;
        if line.is_empty() {
            break;
        }

        let bytes = line.as_bytes();
        if bytes.len() > 14 && bytes[..14].eq_ignore_ascii_case(b"content-length") {
            content_length = line[14..]
                .trim_start_matches(':')
                .trim()
                .parse::<u64>()
                .ok();
        }
    }

    Ok(content_length)
}
