//! Tiered configuration resolution.
//!
//! Settings live at three scopes: application-wide, per-server, and
//! per-member. Server and member lookups fall back to the application
//! scope when the scoped key is absent. The fallback chain is exactly
//! one level deep: member config never consults server config.

use crate::error::StoreError;
use crate::store::ConfigStore;

/// Scoped getters and upsert-style setters over the config tables.
#[derive(Clone)]
pub struct ConfigResolver {
    store: ConfigStore,
}

impl ConfigResolver {
    pub fn new(store: ConfigStore) -> Self {
        Self { store }
    }

    /// Application-level value of a setting, or `None` if unset.
    pub async fn get_application(&self, key: &str) -> Result<Option<String>, StoreError> {
        let rows = self
            .store
            .read(
                "SELECT configValue FROM config WHERE configKey = ?",
                &[key],
            )
            .await?;
        Ok(rows.into_iter().next())
    }

    /// Save an application-level setting, overwriting any existing value.
    pub async fn set_application(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.store
            .write(
                "INSERT INTO config (configKey, configValue) VALUES (?, ?) \
                 ON CONFLICT(configKey) DO UPDATE SET configValue = excluded.configValue",
                &[key, value],
            )
            .await?;
        Ok(())
    }

    /// Server-level value of a setting, falling back to the application
    /// level when the server has none.
    pub async fn get_server(
        &self,
        server_id: &str,
        key: &str,
    ) -> Result<Option<String>, StoreError> {
        let rows = self
            .store
            .read(
                "SELECT configValue FROM serverConfig \
                 WHERE serverId = ? AND configKey = ?",
                &[server_id, key],
            )
            .await?;

        match rows.into_iter().next() {
            Some(value) => Ok(Some(value)),
            None => self.get_application(key).await,
        }
    }

    /// Save a server-level setting. Never touches the application scope.
    pub async fn set_server(
        &self,
        server_id: &str,
        key: &str,
        value: &str,
    ) -> Result<(), StoreError> {
        self.store
            .write(
                "INSERT INTO serverConfig (serverId, configKey, configValue) VALUES (?, ?, ?) \
                 ON CONFLICT(serverId, configKey) DO UPDATE SET configValue = excluded.configValue",
                &[server_id, key, value],
            )
            .await?;
        Ok(())
    }

    /// Member-level value of a setting, falling back directly to the
    /// application level when the member has none.
    pub async fn get_member(
        &self,
        member_id: &str,
        key: &str,
    ) -> Result<Option<String>, StoreError> {
        let rows = self
            .store
            .read(
                "SELECT configValue FROM memberConfig \
                 WHERE memberId = ? AND configKey = ?",
                &[member_id, key],
            )
            .await?;

        match rows.into_iter().next() {
            Some(value) => Ok(Some(value)),
            None => self.get_application(key).await,
        }
    }

    /// Save a member-level setting. Never touches the application scope.
    pub async fn set_member(
        &self,
        member_id: &str,
        key: &str,
        value: &str,
    ) -> Result<(), StoreError> {
        self.store
            .write(
                "INSERT INTO memberConfig (memberId, configKey, configValue) VALUES (?, ?, ?) \
                 ON CONFLICT(memberId, configKey) DO UPDATE SET configValue = excluded.configValue",
                &[member_id, key, value],
            )
            .await?;
        Ok(())
    }
}
