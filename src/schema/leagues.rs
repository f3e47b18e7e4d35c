use serde::{Deserialize, Serialize};

use super::{Envelope, LeagueRef, Single, TeamRef};

pub type AccountStatus = Envelope<Single<Status>>;
pub type Leagues = Envelope<Vec<LeagueEntry>>;
pub type Standings = Envelope<Vec<LeagueStandings>>;

/// `GET /status`: the account behind the API key and its request quota.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Status {
    pub account: Account,
    pub subscription: Subscription,
    pub requests: RequestQuota,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Subscription {
    pub plan: String,
    pub end: Option<String>,
    pub active: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestQuota {
    pub current: u32,
    pub limit_day: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeagueEntry {
    pub league: LeagueRef,
    pub country: Country,
    pub seasons: Vec<Season>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Country {
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    pub code: Option<String>,
    pub flag: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Season {
    pub year: u32,
    pub start: String,
    pub end: String,
    pub current: bool,
    pub coverage: Coverage,
}

/// Which endpoints carry data for a league season.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Coverage {
    pub fixtures: FixtureCoverage,
    pub standings: bool,
    pub players: bool,
    pub top_scorers: bool,
    pub top_assists: bool,
    pub top_cards: bool,
    pub injuries: bool,
    pub predictions: bool,
    pub odds: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureCoverage {
    pub events: bool,
    pub lineups: bool,
    pub statistics_fixtures: bool,
    pub statistics_players: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeagueStandings {
    pub league: StandingsLeague,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StandingsLeague {
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: u32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    pub country: String,
    pub logo: Option<String>,
    pub flag: Option<String>,
    pub season: u32,
    /// One table per group; single-table leagues have exactly one.
    pub standings: Vec<Vec<StandingRow>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StandingRow {
    pub rank: u32,
    pub team: TeamRef,
    pub points: i32,
    #[serde(rename = "goalsDiff")]
    pub goals_diff: i32,
    pub group: Option<String>,
    pub form: Option<String>,
    pub status: Option<String>,
    pub description: Option<String>,
    pub all: StandingRecord,
    pub home: StandingRecord,
    pub away: StandingRecord,
    pub update: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StandingRecord {
    pub played: u32,
    pub win: u32,
    pub draw: u32,
    pub lose: u32,
    pub goals: GoalsForAgainst,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalsForAgainst {
    #[serde(rename = "for")]
    pub scored: Option<u32>,
    pub against: Option<u32>,
}
