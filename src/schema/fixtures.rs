use serde::{Deserialize, Serialize};

use super::players::{Cards, Dribbles, Duels, Fouls, Games, Goals, Passes, Penalty, Shots, Tackles};
use super::{Envelope, HomeAway, LeagueRef, PersonRef, StatValue, TeamRef};

pub type Fixtures = Envelope<Vec<FixtureEntry>>;
pub type FixtureStatistics = Envelope<Vec<FixtureTeamStatistics>>;
pub type Events = Envelope<Vec<Event>>;
pub type Lineups = Envelope<Vec<Lineup>>;
pub type FixturesPlayers = Envelope<Vec<FixturePlayers>>;

/// Goals per side; null until the period has been played.
pub type GoalCount = HomeAway<Option<u32>>;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureEntry {
    pub fixture: Fixture,
    pub league: LeagueRef,
    pub teams: HomeAway<FixtureTeam>,
    pub goals: GoalCount,
    pub score: Score,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fixture {
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: u32,
    pub referee: Option<String>,
    pub timezone: String,
    pub date: String,
    pub timestamp: i64,
    pub periods: Periods,
    pub venue: FixtureVenue,
    pub status: FixtureStatus,
}

/// Kick-off timestamps of each half.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Periods {
    pub first: Option<i64>,
    pub second: Option<i64>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureVenue {
    pub id: Option<u32>,
    pub name: Option<String>,
    pub city: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureStatus {
    pub long: String,
    pub short: String,
    pub elapsed: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureTeam {
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: u32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    pub logo: Option<String>,
    /// `None` for draws and unplayed fixtures.
    pub winner: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Score {
    pub halftime: GoalCount,
    pub fulltime: GoalCount,
    pub extratime: GoalCount,
    pub penalty: GoalCount,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureTeamStatistics {
    pub team: TeamRef,
    pub statistics: Vec<TeamStatistic>,
}

/// One line of the match report, e.g. `Ball Possession: "61%"`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamStatistic {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: Option<StatValue>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    pub time: EventTime,
    pub team: TeamRef,
    pub player: PersonRef,
    pub assist: PersonRef,
    #[serde(rename = "type")]
    pub kind: String,
    pub detail: String,
    pub comments: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventTime {
    pub elapsed: Option<u32>,
    pub extra: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lineup {
    pub team: LineupTeam,
    pub coach: Staff,
    pub formation: Option<String>,
    #[serde(rename = "startXI")]
    pub start_xi: Vec<LineupSlot>,
    pub substitutes: Vec<LineupSlot>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineupTeam {
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: u32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    pub logo: Option<String>,
    pub colors: Option<KitColors>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KitColors {
    pub player: Kit,
    pub goalkeeper: Kit,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Kit {
    pub primary: Option<String>,
    pub number: Option<String>,
    pub border: Option<String>,
}

/// A person with a photo: coaches in lineups, players in match reports.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Staff {
    pub id: Option<u32>,
    pub name: Option<String>,
    pub photo: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineupSlot {
    pub player: LineupPlayer,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineupPlayer {
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: u32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    pub number: Option<u32>,
    pub pos: Option<String>,
    /// `row:column` on the pitch; null for substitutes.
    pub grid: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixturePlayers {
    pub team: FixturePlayersTeam,
    pub players: Vec<FixturePlayerEntry>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixturePlayersTeam {
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: u32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    pub logo: Option<String>,
    pub update: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixturePlayerEntry {
    pub player: Staff,
    pub statistics: Vec<MatchStatistics>,
}

/// A player's numbers for a single fixture.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchStatistics {
    pub games: Games,
    pub offsides: Option<u32>,
    pub shots: Shots,
    pub goals: Goals,
    pub passes: Passes,
    pub tackles: Tackles,
    pub duels: Duels,
    pub dribbles: Dribbles,
    pub fouls: Fouls,
    pub cards: Cards,
    pub penalty: Penalty,
}
