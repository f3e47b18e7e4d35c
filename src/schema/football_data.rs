//! football-data.org v2 shapes. This provider has no common envelope; list
//! responses carry a `count` instead.

use serde::{Deserialize, Serialize};

use super::ResultCount;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompetitionList {
    pub count: usize,
    pub competitions: Vec<Competition>,
}

impl ResultCount for CompetitionList {
    fn result_count(&self) -> usize {
        self.count
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Competition {
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: u32,
    pub area: Area,
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    pub code: Option<String>,
    pub emblem_url: Option<String>,
    pub plan: Option<String>,
    pub current_season: Option<CompetitionSeason>,
    pub seasons: Vec<CompetitionSeason>,
    pub number_of_available_seasons: Option<u32>,
    pub last_updated: Option<String>,
}

// a single competition only exists if upstream did not answer 404
impl ResultCount for Competition {
    fn result_count(&self) -> usize {
        1
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Area {
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: u32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompetitionSeason {
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: u32,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub current_matchday: Option<u32>,
    pub winner: Option<TeamSummary>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TeamSummary {
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: u32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    pub short_name: Option<String>,
    pub tla: Option<String>,
    pub crest_url: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompetitionStandings {
    pub competition: Competition,
    pub season: CompetitionSeason,
    pub standings: Vec<StandingTable>,
}

impl ResultCount for CompetitionStandings {
    fn result_count(&self) -> usize {
        self.standings.len()
    }
}

/// One table of a competition stage, split into TOTAL/HOME/AWAY by `kind`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StandingTable {
    pub stage: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub group: Option<String>,
    pub table: Vec<TableRow>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableRow {
    pub position: u32,
    pub team: TeamSummary,
    pub played_games: u32,
    pub form: Option<String>,
    pub won: u32,
    pub draw: u32,
    pub lost: u32,
    pub points: i32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MatchList {
    pub count: usize,
    pub competition: Option<Competition>,
    pub matches: Vec<Match>,
}

impl ResultCount for MatchList {
    fn result_count(&self) -> usize {
        self.count
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Match {
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: u32,
    pub season: Option<CompetitionSeason>,
    pub utc_date: String,
    pub status: String,
    pub matchday: Option<u32>,
    pub stage: Option<String>,
    pub group: Option<String>,
    pub last_updated: Option<String>,
    pub score: MatchScore,
    #[serde(deserialize_with = "super::null_as_default")]
    pub home_team: TeamSummary,
    #[serde(deserialize_with = "super::null_as_default")]
    pub away_team: TeamSummary,
    pub referees: Vec<Referee>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MatchScore {
    /// `HOME_TEAM`, `AWAY_TEAM`, `DRAW`, or null before the final whistle.
    pub winner: Option<String>,
    pub duration: Option<String>,
    pub full_time: SideGoals,
    pub half_time: SideGoals,
    pub extra_time: SideGoals,
    pub penalties: SideGoals,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SideGoals {
    pub home_team: Option<u32>,
    pub away_team: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Referee {
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: u32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    pub role: Option<String>,
    pub nationality: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScorerList {
    pub count: usize,
    pub competition: Option<Competition>,
    pub season: Option<CompetitionSeason>,
    pub scorers: Vec<Scorer>,
}

impl ResultCount for ScorerList {
    fn result_count(&self) -> usize {
        self.count
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Scorer {
    pub player: Person,
    pub team: TeamSummary,
    pub number_of_goals: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Person {
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: u32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<String>,
    pub country_of_birth: Option<String>,
    pub nationality: Option<String>,
    pub position: Option<String>,
    pub shirt_number: Option<u32>,
    /// `PLAYER`, `COACH`, ...; only present on squad members.
    pub role: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TeamDetail {
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: u32,
    pub area: Area,
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    pub short_name: Option<String>,
    pub tla: Option<String>,
    pub crest_url: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub email: Option<String>,
    pub founded: Option<u32>,
    pub club_colors: Option<String>,
    pub venue: Option<String>,
    pub active_competitions: Vec<Competition>,
    pub squad: Vec<Person>,
    pub last_updated: Option<String>,
}

impl ResultCount for TeamDetail {
    fn result_count(&self) -> usize {
        1
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_decode_standings() {
        let json = r#"
        {
          "filters": {},
          "competition": {"id": 2019, "area": {"id": 2114, "name": "Italy"}, "name": "Serie A", "code": "SA", "plan": "TIER_ONE", "lastUpdated": "2022-05-23T08:20:13Z"},
          "season": {"id": 757, "startDate": "2021-08-21", "endDate": "2022-05-22", "currentMatchday": 38, "winner": null},
          "standings": [{
            "stage": "REGULAR_SEASON", "type": "TOTAL", "group": null,
            "table": [{
              "position": 1,
              "team": {"id": 98, "name": "AC Milan", "crestUrl": "https://crests.football-data.org/98.svg"},
              "playedGames": 38, "form": "W,W,W,W,D", "won": 26, "draw": 8, "lost": 4,
              "points": 86, "goalsFor": 69, "goalsAgainst": 31, "goalDifference": 38
            }]
          }]
        }"#;

        let standings: CompetitionStandings = serde_json::from_str(json).unwrap();
        assert_eq!(standings.result_count(), 1);
        assert_eq!(standings.competition.code.as_deref(), Some("SA"));
        assert_eq!(standings.season.current_matchday, Some(38));

        let leader = &standings.standings[0].table[0];
        assert_eq!(leader.team.name, "AC Milan");
        assert_eq!(leader.played_games, 38);
        assert_eq!(leader.goal_difference, 38);
    }

    #[test]
    fn test_empty_match_list_counts_zero() {
        let matches: MatchList =
            serde_json::from_str(r#"{"count": 0, "filters": {}, "matches": []}"#).unwrap();
        assert_eq!(matches.result_count(), 0);
        assert!(matches.matches.is_empty());
    }

    #[test]
    fn test_decode_match_with_pending_score() {
        let json = r#"
        {
          "count": 1,
          "matches": [{
            "id": 330299, "utcDate": "2022-05-22T18:45:00Z", "status": "SCHEDULED", "matchday": 38,
            "stage": "REGULAR_SEASON", "group": null,
            "score": {"winner": null, "duration": "REGULAR",
                      "fullTime": {"homeTeam": null, "awayTeam": null},
                      "halfTime": {"homeTeam": null, "awayTeam": null}},
            "homeTeam": {"id": 108, "name": "FC Internazionale Milano"},
            "awayTeam": {"id": 584, "name": "UC Sampdoria"},
            "referees": [{"id": 11096, "name": "Daniele Chiffi", "role": "REFEREE", "nationality": "Italy"}]
          }]
        }"#;

        let matches: MatchList = serde_json::from_str(json).unwrap();
        let fixture = &matches.matches[0];
        assert_eq!(fixture.status, "SCHEDULED");
        assert_eq!(fixture.score.full_time, SideGoals::default());
        assert_eq!(fixture.referees[0].role.as_deref(), Some("REFEREE"));
    }

    #[test]
    fn test_undecided_knockout_teams_decode_as_empty() {
        let json = r#"
        {
          "count": 1,
          "matches": [{
            "id": 419350, "utcDate": "2022-05-11T19:00:00Z", "status": "SCHEDULED", "stage": "FINAL",
            "homeTeam": {"id": null, "name": null},
            "awayTeam": null,
            "referees": []
          }]
        }"#;

        let matches: MatchList = serde_json::from_str(json).unwrap();
        assert_eq!(matches.result_count(), 1);
        let fixture = &matches.matches[0];
        assert_eq!(fixture.stage.as_deref(), Some("FINAL"));
        assert_eq!(fixture.home_team, TeamSummary::default());
        assert_eq!(fixture.away_team, TeamSummary::default());
    }

    #[test]
    fn test_scorer_with_null_ids_still_decodes() {
        let json = r#"
        {
          "count": 1,
          "scorers": [{
            "player": {"id": null, "name": "Unknown"},
            "team": {"id": 110, "name": null},
            "numberOfGoals": 3
          }]
        }"#;

        let scorers: ScorerList = serde_json::from_str(json).unwrap();
        let scorer = &scorers.scorers[0];
        assert_eq!(scorer.player.id, 0);
        assert_eq!(scorer.player.name, "Unknown");
        assert_eq!(scorer.team.id, 110);
        assert_eq!(scorer.team.name, "");
    }
}
