//! Player lookup and per-player endpoints.
//!
//! Most player endpoints take the numeric player id. [`PlayerRef`] lets
//! [`PaladinsClient::get_player`] also accept a display name, which is
//! resolved through `getplayeridbyname` on a given [`Portal`].

use serde_json::Value;

use crate::clients::{PaladinsClient, PaladinsError, Param};
use crate::config::{Language, Portal, Queue};

/// A player, by numeric id or by display name.
///
/// # Example
///
/// ```rust
/// use paladins_api::PlayerRef;
///
/// assert_eq!(PlayerRef::from(712_345u64), PlayerRef::Id(712_345));
/// assert_eq!(PlayerRef::from("Androxus"), PlayerRef::Name("Androxus".to_string()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PlayerRef {
    /// Numeric player id.
    Id(u64),
    /// Display name, resolved per portal.
    Name(String),
}

impl From<u64> for PlayerRef {
    fn from(id: u64) -> Self {
        Self::Id(id)
    }
}

impl From<u32> for PlayerRef {
    fn from(id: u32) -> Self {
        Self::Id(u64::from(id))
    }
}

impl From<&str> for PlayerRef {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for PlayerRef {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

/// Reads an id the API may send either as a number or as a numeric string.
fn id_field(entry: &Value, field: &str) -> Option<u64> {
    match entry.get(field)? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Picks the player id of the first `getplayeridbyname` row on `portal`.
fn pick_player_id(rows: &Value, portal: Portal) -> Option<u64> {
    rows.as_array()?
        .iter()
        .find(|row| id_field(row, "portal_id") == Some(u64::from(portal.id())))
        .and_then(|row| id_field(row, "player_id"))
        .filter(|id| *id != 0)
}

impl PaladinsClient {
    /// Turns a [`PlayerRef`] into a numeric player id.
    ///
    /// Ids pass through unchanged. Names are looked up with
    /// `getplayeridbyname` and the first entry whose `portal_id` equals
    /// `portal` wins.
    ///
    /// # Errors
    ///
    /// Returns [`PaladinsError::InvalidArgument`] for a zero id, an empty
    /// name, or a name with no account on `portal`; otherwise see
    /// [`PaladinsClient::request`].
    pub async fn resolve_player_id(
        &self,
        player: impl Into<PlayerRef>,
        portal: Portal,
    ) -> Result<u64, PaladinsError> {
        let player: PlayerRef = player.into();
        match player {
            PlayerRef::Id(0) => Err(PaladinsError::InvalidArgument {
                reason: "player id must be non-zero".to_string(),
            }),
            PlayerRef::Id(id) => Ok(id),
            PlayerRef::Name(name) => {
                let name = name.trim();
                if name.is_empty() {
                    return Err(PaladinsError::InvalidArgument {
                        reason: "player name must not be empty".to_string(),
                    });
                }

                let rows = self.get_player_id_by_name(name).await?;
                pick_player_id(&rows, portal).ok_or_else(|| PaladinsError::InvalidArgument {
                    reason: format!("no player named '{name}' on portal {portal}"),
                })
            }
        }
    }

    /// `getplayer`: profile of one player.
    ///
    /// Names are resolved on `portal` first (see
    /// [`Self::resolve_player_id`]); `portal` is ignored for ids.
    ///
    /// # Errors
    ///
    /// See [`Self::resolve_player_id`] and [`PaladinsClient::request`].
    pub async fn get_player(
        &self,
        player: impl Into<PlayerRef>,
        portal: Portal,
    ) -> Result<Value, PaladinsError> {
        let player_id = self.resolve_player_id(player, portal).await?;
        self.request("getplayer", &[player_id.into()]).await
    }

    /// `getplayerbatch`: profiles of several players at once.
    ///
    /// # Errors
    ///
    /// See [`PaladinsClient::request`].
    pub async fn get_player_batch(&self, player_ids: &[u64]) -> Result<Value, PaladinsError> {
        self.request("getplayerbatch", &[Param::list(player_ids)])
            .await
    }

    /// `getplayeridbyname`: every account with this display name, on all
    /// portals.
    ///
    /// # Errors
    ///
    /// See [`PaladinsClient::request`].
    pub async fn get_player_id_by_name(&self, name: &str) -> Result<Value, PaladinsError> {
        self.request("getplayeridbyname", &[name.into()]).await
    }

    /// `getplayeridbyportaluserid`: player id for a platform account id
    /// (e.g. a Steam id).
    ///
    /// # Errors
    ///
    /// See [`PaladinsClient::request`].
    pub async fn get_player_id_by_portal_user_id(
        &self,
        portal: Portal,
        portal_user_id: &str,
    ) -> Result<Value, PaladinsError> {
        self.request(
            "getplayeridbyportaluserid",
            &[portal.into(), portal_user_id.into()],
        )
        .await
    }

    /// `getplayeridsbygamertag`: player ids for a console gamertag.
    ///
    /// # Errors
    ///
    /// See [`PaladinsClient::request`].
    pub async fn get_player_ids_by_gamertag(
        &self,
        portal: Portal,
        gamertag: &str,
    ) -> Result<Value, PaladinsError> {
        self.request("getplayeridsbygamertag", &[portal.into(), gamertag.into()])
            .await
    }

    /// `getplayeridinfoforxboxandswitch`: console accounts matching a name.
    ///
    /// # Errors
    ///
    /// See [`PaladinsClient::request`].
    pub async fn get_player_id_info_for_xbox_and_switch(
        &self,
        name: &str,
    ) -> Result<Value, PaladinsError> {
        self.request("getplayeridinfoforxboxandswitch", &[name.into()])
            .await
    }

    /// `getfriends`
    ///
    /// # Errors
    ///
    /// See [`PaladinsClient::request`].
    pub async fn get_friends(&self, player_id: u64) -> Result<Value, PaladinsError> {
        self.request("getfriends", &[player_id.into()]).await
    }

    /// `getchampionranks`: per-champion level and stats of a player.
    ///
    /// # Errors
    ///
    /// See [`PaladinsClient::request`].
    pub async fn get_champion_ranks(&self, player_id: u64) -> Result<Value, PaladinsError> {
        self.request("getchampionranks", &[player_id.into()]).await
    }

    /// `getplayerloadouts`: saved card loadouts of a player.
    ///
    /// # Errors
    ///
    /// See [`PaladinsClient::request`].
    pub async fn get_player_loadouts(
        &self,
        player_id: u64,
        language: Language,
    ) -> Result<Value, PaladinsError> {
        self.request("getplayerloadouts", &[player_id.into(), language.into()])
            .await
    }

    /// `getplayerstatus`: online state and, in game, the live match id.
    ///
    /// # Errors
    ///
    /// See [`PaladinsClient::request`].
    pub async fn get_player_status(&self, player_id: u64) -> Result<Value, PaladinsError> {
        self.request("getplayerstatus", &[player_id.into()]).await
    }

    /// `getmatchhistory`: the last 50 matches of a player.
    ///
    /// # Errors
    ///
    /// See [`PaladinsClient::request`].
    pub async fn get_match_history(&self, player_id: u64) -> Result<Value, PaladinsError> {
        self.request("getmatchhistory", &[player_id.into()]).await
    }

    /// `getqueuestats`: per-champion stats of a player in one queue.
    ///
    /// # Errors
    ///
    /// See [`PaladinsClient::request`].
    pub async fn get_queue_stats(
        &self,
        player_id: u64,
        queue: Queue,
    ) -> Result<Value, PaladinsError> {
        self.request("getqueuestats", &[player_id.into(), queue.into()])
            .await
    }

    /// `searchplayers`: players whose name starts with `query`.
    ///
    /// # Errors
    ///
    /// See [`PaladinsClient::request`].
    pub async fn search_players(&self, query: &str) -> Result<Value, PaladinsError> {
        self.request("searchplayers", &[query.into()]).await
    }
}
