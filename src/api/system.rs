//! Connectivity, session and usage endpoints.

use serde_json::Value;

use crate::clients::{PaladinsClient, PaladinsError};

impl PaladinsClient {
    /// `ping`: checks that the API is reachable. Needs no credentials.
    ///
    /// # Errors
    ///
    /// See [`PaladinsClient::request`].
    pub async fn ping(&self) -> Result<Value, PaladinsError> {
        self.request_unauthenticated("ping", &[]).await
    }

    /// `testsession`: checks that the current session is accepted.
    ///
    /// # Errors
    ///
    /// See [`PaladinsClient::request`].
    pub async fn test_session(&self) -> Result<Value, PaladinsError> {
        self.request("testsession", &[]).await
    }

    /// `getdataused`: daily request and session quotas for the developer id.
    ///
    /// # Errors
    ///
    /// See [`PaladinsClient::request`].
    pub async fn get_data_used(&self) -> Result<Value, PaladinsError> {
        self.request("getdataused", &[]).await
    }

    /// `gethirezserverstatus`: status of each platform's game servers.
    ///
    /// # Errors
    ///
    /// See [`PaladinsClient::request`].
    pub async fn get_hirez_server_status(&self) -> Result<Value, PaladinsError> {
        self.request("gethirezserverstatus", &[]).await
    }

    /// `getpatchinfo`: current game patch version.
    ///
    /// # Errors
    ///
    /// See [`PaladinsClient::request`].
    pub async fn get_patch_info(&self) -> Result<Value, PaladinsError> {
        self.request("getpatchinfo", &[]).await
    }
}
