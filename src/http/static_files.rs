//! Static file serving.

use crate::http::line::LineReader;
use crate::http::{request, response};
use bytes::BytesMut;
use std::io;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// File contents are streamed in chunks of this size.
const CHUNK_SIZE: usize = 1024;

/// Sends the fixed success header block followed by the file verbatim.
///
/// The client's unread request lines are drained first, since static GET
/// requests never have their headers parsed. If the file cannot be opened
/// the fixed 404 response is sent instead.
pub async fn serve<R, W>(
    reader: &mut LineReader<R>,
    writer: &mut W,
    path: &Path,
) -> io::Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    request::drain_headers(reader).await?;

    let mut file = match File::open(path).await {
        Ok(f) => f,
        Err(e) => {
            tracing::warn!("Could not open {}: {}", path.display(), e);
            return response::not_found(writer).await;
        }
    };

    response::ok_headers(writer).await?;

    let mut buf = BytesMut::with_capacity(CHUNK_SIZE);
    loop {
        buf.clear();
        let n = file.read_buf(&mut buf).await?;
        if n == 0 {
            break;
        }
        writer.write_all(&buf).await?;
    }

    Ok(())
}
