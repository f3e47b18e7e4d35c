use serde::{Deserialize, Serialize};

use super::{Envelope, LeagueRef, Minutes, Single, Split, TeamRef};

pub type Teams = Envelope<Vec<TeamEntry>>;
pub type TeamSeasonStatistics = Envelope<Single<TeamStatistics>>;
pub type Venues = Envelope<Vec<Venue>>;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamEntry {
    pub team: Team,
    pub venue: Venue,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Team {
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: u32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    pub code: Option<String>,
    pub country: Option<String>,
    pub founded: Option<u32>,
    pub national: bool,
    pub logo: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Venue {
    pub id: Option<u32>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub capacity: Option<u32>,
    pub surface: Option<String>,
    pub image: Option<String>,
}

/// `GET /teams/statistics`: one team's season in one league.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamStatistics {
    pub league: LeagueRef,
    pub team: TeamRef,
    #[serde(flatten)]
    pub record: SeasonRecord,
}

/// Season aggregates; also embedded in predictions for both sides.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeasonRecord {
    pub form: Option<String>,
    pub fixtures: FixtureTally,
    pub goals: GoalTotals,
    pub biggest: Biggest,
    pub clean_sheet: Split<u32>,
    pub failed_to_score: Split<u32>,
    pub penalty: PenaltyRecord,
    pub lineups: Vec<FormationUse>,
    pub cards: CardMinutes,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureTally {
    pub played: Split<u32>,
    pub wins: Split<u32>,
    pub draws: Split<u32>,
    pub loses: Split<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalTotals {
    #[serde(rename = "for")]
    pub scored: GoalBreakdown,
    pub against: GoalBreakdown,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalBreakdown {
    pub total: Split<u32>,
    /// Goals per game as upstream formats them, e.g. `"1.8"`.
    pub average: Split<String>,
    pub minute: Minutes,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Biggest {
    pub streak: Streak,
    /// Scorelines such as `"4-0"`.
    pub wins: Split<String>,
    pub loses: Split<String>,
    pub goals: BiggestGoals,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Streak {
    pub wins: u32,
    pub draws: u32,
    pub loses: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BiggestGoals {
    #[serde(rename = "for")]
    pub scored: Split<u32>,
    pub against: Split<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PenaltyRecord {
    pub scored: PenaltyShare,
    pub missed: PenaltyShare,
    pub total: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PenaltyShare {
    pub total: u32,
    pub percentage: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormationUse {
    pub formation: String,
    pub played: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardMinutes {
    pub yellow: Minutes,
    pub red: Minutes,
}
