use crate::config::Config;
use crate::http::connection::Connection;
use tokio::net::TcpListener;
use tracing::info;

/// Accept loop.
///
/// Strictly sequential: each accepted connection is handled to completion
/// before the next accept. The pipeline itself is reentrant, so this could
/// spawn one task per connection instead; one at a time is the intended
/// behavior of this server.
pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.server.listen_addr).await?;
    // local_addr reports the real port when the config asked for :0.
    info!("Listening on {}", listener.local_addr()?);

    loop {
        let (socket, peer) = listener.accept().await?;
        tracing::debug!("Accepted connection from {}", peer);

        let conn = Connection::new(socket, cfg.site.clone());
        if let Err(e) = conn.run().await {
            tracing::error!("Connection error from {}: {}", peer, e);
        }
    }
}
