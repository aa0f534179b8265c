//! Match, queue and league endpoints.

use chrono::NaiveDate;
use serde_json::Value;

use crate::clients::{PaladinsClient, PaladinsError, Param};
use crate::config::Queue;

/// `hour` value of [`PaladinsClient::get_match_ids_by_queue`] selecting the
/// whole day.
pub const WHOLE_DAY: &str = "-1";

impl PaladinsClient {
    /// `getdemodetails`: replay metadata of a finished match.
    ///
    /// # Errors
    ///
    /// See [`PaladinsClient::request`].
    pub async fn get_demo_details(&self, match_id: u64) -> Result<Value, PaladinsError> {
        self.request("getdemodetails", &[match_id.into()]).await
    }

    /// `getmatchdetails`: per-player statistics of a finished match.
    ///
    /// # Errors
    ///
    /// See [`PaladinsClient::request`].
    pub async fn get_match_details(&self, match_id: u64) -> Result<Value, PaladinsError> {
        self.request("getmatchdetails", &[match_id.into()]).await
    }

    /// `getmatchdetailsbatch`: details of up to ten matches in one call.
    ///
    /// # Errors
    ///
    /// See [`PaladinsClient::request`].
    pub async fn get_match_details_batch(&self, match_ids: &[u64]) -> Result<Value, PaladinsError> {
        self.request("getmatchdetailsbatch", &[Param::list(match_ids)])
            .await
    }

    /// `getmatchplayerdetails`: lobby of a match that is still in progress.
    ///
    /// # Errors
    ///
    /// See [`PaladinsClient::request`].
    pub async fn get_match_player_details(&self, match_id: u64) -> Result<Value, PaladinsError> {
        self.request("getmatchplayerdetails", &[match_id.into()])
            .await
    }

    /// `getmatchidsbyqueue`: ids of matches played in a queue on `date`.
    ///
    /// `hour` is `"1"`..`"23"`, a ten-minute window such as `"14,20"`, or
    /// [`WHOLE_DAY`]. Like every zero parameter, `"0"` is dropped from the
    /// URL.
    ///
    /// # Errors
    ///
    /// See [`PaladinsClient::request`].
    pub async fn get_match_ids_by_queue(
        &self,
        queue: Queue,
        date: NaiveDate,
        hour: &str,
    ) -> Result<Value, PaladinsError> {
        self.request(
            "getmatchidsbyqueue",
            &[queue.into(), date.into(), hour.into()],
        )
        .await
    }

    /// `gettopmatches`: the most watched recent matches.
    ///
    /// # Errors
    ///
    /// See [`PaladinsClient::request`].
    pub async fn get_top_matches(&self) -> Result<Value, PaladinsError> {
        self.request("gettopmatches", &[]).await
    }

    /// `getleagueleaderboard`: ranked standings of one tier in one split.
    ///
    /// # Errors
    ///
    /// See [`PaladinsClient::request`].
    pub async fn get_league_leaderboard(
        &self,
        queue: Queue,
        tier: u32,
        round: u32,
    ) -> Result<Value, PaladinsError> {
        self.request(
            "getleagueleaderboard",
            &[queue.into(), tier.into(), round.into()],
        )
        .await
    }

    /// `getleagueseasons`: ranked seasons and splits of a queue.
    ///
    /// # Errors
    ///
    /// See [`PaladinsClient::request`].
    pub async fn get_league_seasons(&self, queue: Queue) -> Result<Value, PaladinsError> {
        self.request("getleagueseasons", &[queue.into()]).await
    }

    /// `getesportsproleaguedetails`: pro league schedule and results.
    ///
    /// # Errors
    ///
    /// See [`PaladinsClient::request`].
    pub async fn get_esports_pro_league_details(&self) -> Result<Value, PaladinsError> {
        self.request("getesportsproleaguedetails", &[]).await
    }

    /// `getmotd`: upcoming "match of the day" modes.
    ///
    /// # Errors
    ///
    /// See [`PaladinsClient::request`].
    pub async fn get_motd(&self) -> Result<Value, PaladinsError> {
        self.request("getmotd", &[]).await
    }
}
