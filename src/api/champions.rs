//! Champion, card, skin and item endpoints.

use serde_json::Value;

use crate::clients::{PaladinsClient, PaladinsError};
use crate::config::{Language, Queue};

impl PaladinsClient {
    /// `getchampions`: every champion with localized names and abilities.
    ///
    /// # Errors
    ///
    /// See [`PaladinsClient::request`].
    pub async fn get_champions(&self, language: Language) -> Result<Value, PaladinsError> {
        self.request("getchampions", &[language.into()]).await
    }

    /// `getchampioncards`: the talent and loadout cards of one champion.
    ///
    /// # Errors
    ///
    /// See [`PaladinsClient::request`].
    pub async fn get_champion_cards(
        &self,
        champion_id: u64,
        language: Language,
    ) -> Result<Value, PaladinsError> {
        self.request("getchampioncards", &[champion_id.into(), language.into()])
            .await
    }

    /// `getchampionleaderboard`: top players of one champion in a queue.
    ///
    /// # Errors
    ///
    /// See [`PaladinsClient::request`].
    pub async fn get_champion_leaderboard(
        &self,
        champion_id: u64,
        queue: Queue,
    ) -> Result<Value, PaladinsError> {
        self.request("getchampionleaderboard", &[champion_id.into(), queue.into()])
            .await
    }

    /// `getchampionskins`: skins available for one champion.
    ///
    /// # Errors
    ///
    /// See [`PaladinsClient::request`].
    pub async fn get_champion_skins(
        &self,
        champion_id: u64,
        language: Language,
    ) -> Result<Value, PaladinsError> {
        self.request("getchampionskins", &[champion_id.into(), language.into()])
            .await
    }

    /// `getitems`: cards, talents and shop items for all champions.
    ///
    /// # Errors
    ///
    /// See [`PaladinsClient::request`].
    pub async fn get_items(&self, language: Language) -> Result<Value, PaladinsError> {
        self.request("getitems", &[language.into()]).await
    }

    /// `getbountyitems`: recent bounty store deals.
    ///
    /// # Errors
    ///
    /// See [`PaladinsClient::request`].
    pub async fn get_bounty_items(&self) -> Result<Value, PaladinsError> {
        self.request("getbountyitems", &[]).await
    }
}
