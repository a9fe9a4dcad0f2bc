//! Script spawning and the client ↔ child byte relay.

use crate::http::line::LineReader;
use crate::http::request::{self, Method, Request};
use crate::http::response;
use bytes::BytesMut;
use std::io;
use std::path::Path;
use std::process::Stdio;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::process::Command;

/// Child output is forwarded in chunks of this size.
const RELAY_CHUNK: usize = 1024;

/// Executes the target program and relays the request body and response.
///
/// Per dispatch:
///
/// 1. GET: remaining request lines are drained to the blank separator (the
///    query string was already extracted). POST: the header block is
///    consumed while extracting `Content-Length`; a missing or unparsable
///    value ends the request with the fixed 400 response, before any
///    process is created.
/// 2. The bare `HTTP/1.0 200 OK` line is sent; all response headers beyond
///    it are the child's own output, relayed verbatim.
/// 3. The child is spawned with piped stdin/stdout and a child-scoped
///    environment: `REQUEST_METHOD` always, plus `QUERY_STRING` for GET or
///    `CONTENT_LENGTH` for POST. The parent's environment is never touched.
///    Spawn failure (including a target that cannot be loaded as a program
///    image) ends the request with the fixed 500 response.
/// 4. For POST, up to `Content-Length` body bytes are copied from the
///    client into the child's stdin one byte at a time, stopping early if
///    the client closes or the child stops reading. Stdin is closed as soon
///    as the body phase ends, so children reading to end-of-input see
///    exactly the relayed bytes.
/// 5. The child's stdout is forwarded to the client until end-of-stream,
///    then the child is reaped and its exit status logged.
pub async fn execute<R, W>(
    reader: &mut LineReader<R>,
    writer: &mut W,
    script: &Path,
    req: &mut Request,
) -> io::Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    match req.method {
        Method::Get => request::drain_headers(reader).await?,
        Method::Post => match request::read_content_length(reader).await? {
            Some(n) => req.content_length = Some(n),
            None => return response::bad_request(writer).await,
        },
    }

    writer.write_all(response::OK_STATUS_LINE.as_bytes()).await?;

    let mut cmd = Command::new(script);
    cmd.stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .env("REQUEST_METHOD", req.method.as_str());

    match req.method {
        Method::Get => {
            cmd.env("QUERY_STRING", req.query_string.as_deref().unwrap_or(""));
        }
        Method::Post => {
            cmd.env(
                "CONTENT_LENGTH",
                req.content_length.unwrap_or(0).to_string(),
            );
        }
    }

    let mut child = match cmd.spawn() {
        Ok(child) => child,
        Err(e) => {
            tracing::warn!("Could not spawn {}: {}", script.display(), e);
            return response::cannot_execute(writer).await;
        }
    };

    // Both handles exist because both streams were requested piped.
    let Some(mut stdin) = child.stdin.take() else {
        return response::cannot_execute(writer).await;
    };
    let Some(mut stdout) = child.stdout.take() else {
        return response::cannot_execute(writer).await;
    };

    if req.method == Method::Post {
        let declared = req.content_length.unwrap_or(0);
        let mut byte = [0u8; 1];
        for _ in 0..declared {
            match reader.read_byte().await? {
                Some(b) => {
                    byte[0] = b;
                    // The child may exit before consuming its whole input;
                    // a broken pipe here ends the copy, not the request.
                    if stdin.write_all(&byte).await.is_err() {
                        break;
                    }
                }
                None => break,
            }
        }
    }

    // Close the child's stdin before draining its output, so a child that
    // reads to end-of-input cannot wedge the relay.
    drop(stdin);

    let mut buf = BytesMut::with_capacity(RELAY_CHUNK);
    loop {
        buf.clear();
        let n = stdout.read_buf(&mut buf).await?;
        if n == 0 {
            break;
        }
        writer.write_all(&buf).await?;
    }
    drop(stdout);

    let status = child.wait().await?;
    tracing::debug!("CGI {} exited with {}", script.display(), status);

    Ok(())
}
