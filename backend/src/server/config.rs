//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::sync::Arc;

use backend::outbound::persistence::DbPool;
use backend::outbound::security::JwtTokenIssuer;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) token_issuer: Arc<JwtTokenIssuer>,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Construct a configuration that serves from in-memory stores.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, token_issuer: JwtTokenIssuer) -> Self {
        Self {
            bind_addr,
            token_issuer: Arc::new(token_issuer),
            db_pool: None,
        }
    }

    /// Attach a database connection pool; PostgreSQL adapters replace the
    /// in-memory stores when present.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
