use tokio::io::{self, AsyncRead, AsyncWrite, AsyncWriteExt, ReadHalf, WriteHalf};

use crate::cgi;
use crate::config::SiteConfig;
use crate::http::line::LineReader;
use crate::http::request::{self, Request};
use crate::http::{response, static_files};
use crate::resolver;

/// One client connection, exclusively owned for the duration of one request.
///
/// Generic over the stream type so the whole pipeline can be driven by an
/// in-memory duplex stream in tests.
pub struct Connection<S> {
    reader: LineReader<ReadHalf<S>>,
    writer: WriteHalf<S>,
    site: SiteConfig,
}

impl<S: AsyncRead + AsyncWrite + Unpin> Connection<S> {
    pub fn new(stream: S, site: SiteConfig) -> Self {
        let (read_half, write_half) = io::split(stream);
        Self {
            reader: LineReader::new(read_half),
            writer: write_half,
            site,
        }
    }

    /// Runs the pipeline to completion and closes the connection.
    ///
    /// The stream is shut down exactly once, whichever path handled the
    /// request and whether or not it errored.
    pub async fn run(mut self) -> anyhow::Result<()> {
        let outcome = self.handle().await;
        let _ = self.writer.shutdown().await;
        Ok(outcome?)
    }

    /// parse → route → respond, one request.
    ///
    /// Protocol-level failures are resolved locally with a fixed response;
    /// only genuine stream I/O errors propagate.
    async fn handle(&mut self) -> std::io::Result<()> {
        let line = self.reader.read_line().await?;
        tracing::debug!("first line: {}", line);

        let mut req = match Request::from_request_line(&line) {
            Ok(req) => req,
            Err(e) => {
                tracing::info!("{}", e);
                return response::unimplemented(&mut self.writer).await;
            }
        };

        tracing::info!(
            method = req.method.as_str(),
            path = %req.path,
            query = req.query_string.as_deref().unwrap_or(""),
            "Request"
        );

        match resolver::resolve(&self.site, &req).await {
            None => {
                // Leave the stream clean before answering with no body.
                request::drain_headers(&mut self.reader).await?;
                response::not_found(&mut self.writer).await
            }
            Some(route) if route.is_cgi => {
                cgi::execute(&mut self.reader, &mut self.writer, &route.path, &mut req).await
            }
            Some(route) => {
                static_files::serve(&mut self.reader, &mut self.writer, &route.path).await
            }
        }
    }
}
