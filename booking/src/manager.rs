use abi::{DbConfig, Error};
use sqlx::PgPool;
use tracing::warn;

use crate::BookingManager;

impl BookingManager {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn from_config(config: &DbConfig) -> Result<Self, Error> {
        let pool = PgPool::connect(&config.url()).await?;
        Ok(Self { pool })
    }

    /// Connect with the given credentials, falling back to the stock local
    /// configuration so the application always ends up connected to
    /// something. Returns the configuration that actually took effect.
    /// Fails only when the fallback is unreachable as well.
    pub async fn from_config_or_default(config: &DbConfig) -> Result<(Self, DbConfig), Error> {
        match Self::from_config(config).await {
            Ok(manager) => Ok((manager, config.clone())),
            Err(e) => {
                warn!(
                    "connection to {}:{} failed: {}, falling back to the default configuration",
                    config.host, config.port, e
                );
                let fallback = DbConfig::default();
                let manager = Self::from_config(&fallback).await?;
                Ok((manager, fallback))
            }
        }
    }

    pub(crate) fn pool(&self) -> &PgPool {
        &self.pool
    }
}
