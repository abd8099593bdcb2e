//! Backend entry-point: loads settings, wires stores, and serves the REST API.

mod server;

use actix_web::web;
use argon2::password_hash::rand_core::{OsRng, RngCore};
use color_eyre::eyre::{Result, WrapErr, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};
use zeroize::Zeroizing;

use backend::inbound::http::health::HealthState;
use backend::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use backend::outbound::security::JwtTokenIssuer;
use server::{ServerConfig, ServerSettings, create_server};

const EPHEMERAL_SECRET_LEN: usize = 32;

/// Resolve the token signing secret.
///
/// Debug builds fall back to a random per-process secret, so tokens do not
/// survive a restart.
fn signing_secret(settings: &ServerSettings) -> Result<Zeroizing<Vec<u8>>> {
    if let Some(secret) = settings.jwt_secret() {
        return Ok(Zeroizing::new(secret.as_bytes().to_vec()));
    }
    if cfg!(debug_assertions) {
        warn!("SME_JWT_SECRET unset; using an ephemeral signing secret (dev only)");
        let mut bytes = Zeroizing::new(vec![0_u8; EPHEMERAL_SECRET_LEN]);
        OsRng.fill_bytes(&mut bytes);
        return Ok(bytes);
    }
    Err(eyre!("SME_JWT_SECRET must be set in release builds"))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load().wrap_err("failed to load server settings")?;
    info!(?settings, "settings loaded");

    let secret = signing_secret(&settings)?;
    let token_issuer = JwtTokenIssuer::with_ttl_minutes(&secret, settings.token_ttl_minutes())
        .wrap_err("invalid token issuer configuration")?;
    info!(ttl_minutes = token_issuer.ttl().num_minutes(), "token issuer ready");
    let mut config = ServerConfig::new(settings.bind_addr(), token_issuer);

    if let Some(url) = settings.database_url() {
        run_pending_migrations(url)
            .await
            .wrap_err("failed to apply database migrations")?;
        let pool = DbPool::new(
            PoolConfig::new(url)
                .with_max_size(settings.db_max_connections())
                .with_connection_timeout(settings.db_connection_timeout()),
        )
        .await
        .wrap_err("failed to build database pool")?;
        config = config.with_db_pool(pool);
    }

    let bind_addr = config.bind_addr();
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)
        .wrap_err_with(|| format!("failed to bind {bind_addr}"))?;
    info!(%bind_addr, "server listening");
    server.await.wrap_err("server terminated with an error")
}
