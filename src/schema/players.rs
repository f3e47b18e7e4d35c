use serde::{Deserialize, Serialize};

use super::{Birth, Envelope, LeagueRef, PersonRef, StatValue, TeamRef};

pub type Players = Envelope<Vec<PlayerEntry>>;
pub type Squads = Envelope<Vec<Squad>>;
pub type Coachs = Envelope<Vec<Coach>>;
pub type Injuries = Envelope<Vec<Injury>>;
pub type Transfers = Envelope<Vec<PlayerTransfers>>;
pub type Trophies = Envelope<Vec<Trophy>>;
pub type SidelinedSpells = Envelope<Vec<Sidelined>>;

/// A player profile together with per-competition statistics. Shared by the
/// player lookup, team roster and the top scorer/assist/card rankings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerEntry {
    pub player: Player,
    pub statistics: Vec<PlayerStatistics>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Player {
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: u32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub age: Option<u32>,
    pub birth: Birth,
    pub nationality: Option<String>,
    pub height: Option<String>,
    pub weight: Option<String>,
    pub injured: Option<bool>,
    pub photo: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerStatistics {
    pub team: TeamRef,
    pub league: LeagueRef,
    pub games: Games,
    pub substitutes: Substitutes,
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

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Games {
    // upstream spelling
    pub appearences: Option<u32>,
    pub lineups: Option<u32>,
    pub minutes: Option<u32>,
    pub number: Option<u32>,
    pub position: Option<String>,
    pub rating: Option<String>,
    pub captain: bool,
    pub substitute: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Substitutes {
    #[serde(rename = "in")]
    pub subbed_in: Option<u32>,
    #[serde(rename = "out")]
    pub subbed_out: Option<u32>,
    pub bench: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Shots {
    pub total: Option<u32>,
    pub on: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Goals {
    pub total: Option<u32>,
    pub conceded: Option<u32>,
    pub assists: Option<u32>,
    pub saves: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Passes {
    pub total: Option<u32>,
    pub key: Option<u32>,
    /// A count on season statistics, a percentage string on match statistics.
    pub accuracy: Option<StatValue>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tackles {
    pub total: Option<u32>,
    pub blocks: Option<u32>,
    pub interceptions: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Duels {
    pub total: Option<u32>,
    pub won: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dribbles {
    pub attempts: Option<u32>,
    pub success: Option<u32>,
    pub past: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fouls {
    pub drawn: Option<u32>,
    pub committed: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cards {
    pub yellow: Option<u32>,
    pub yellowred: Option<u32>,
    pub red: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Penalty {
    pub won: Option<u32>,
    // upstream spelling
    pub commited: Option<u32>,
    pub scored: Option<u32>,
    pub missed: Option<u32>,
    pub saved: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Squad {
    pub team: TeamRef,
    pub players: Vec<SquadPlayer>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SquadPlayer {
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: u32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    pub age: Option<u32>,
    pub number: Option<u32>,
    pub position: Option<String>,
    pub photo: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Coach {
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: u32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub age: Option<u32>,
    pub birth: Birth,
    pub nationality: Option<String>,
    pub height: Option<String>,
    pub weight: Option<String>,
    pub photo: Option<String>,
    pub team: TeamRef,
    pub career: Vec<CareerStint>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CareerStint {
    pub team: TeamRef,
    pub start: Option<String>,
    pub end: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Injury {
    pub player: InjuredPlayer,
    pub team: TeamRef,
    pub fixture: InjuryFixture,
    pub league: LeagueRef,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InjuredPlayer {
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: u32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    pub photo: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub reason: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InjuryFixture {
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: u32,
    pub timezone: Option<String>,
    pub date: Option<String>,
    pub timestamp: Option<i64>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTransfers {
    pub player: PersonRef,
    pub update: Option<String>,
    pub transfers: Vec<Transfer>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transfer {
    pub date: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub teams: TransferTeams,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferTeams {
    #[serde(rename = "in")]
    pub joined: TeamRef,
    #[serde(rename = "out")]
    pub left: TeamRef,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Trophy {
    pub league: String,
    pub country: Option<String>,
    pub season: Option<String>,
    pub place: Option<String>,
}

/// A spell out of action (injury, suspension).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sidelined {
    #[serde(rename = "type")]
    pub kind: String,
    pub start: Option<String>,
    pub end: Option<String>,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_decode_top_scorers_keeps_rank_order() {
        let json = r#"
        {
          "get": "players/topscorers",
          "parameters": {"league": "135", "season": "2021"},
          "errors": [],
          "results": 2,
          "paging": {"current": 1, "total": 1},
          "response": [
            {
              "player": {
                "id": 2864, "name": "C. Immobile", "firstname": "Ciro", "lastname": "Immobile", "age": 32,
                "birth": {"date": "1990-02-20", "place": "Torre Annunziata", "country": "Italy"},
                "nationality": "Italy", "height": "185 cm", "weight": "78 kg", "injured": false,
                "photo": "https://media.api-sports.io/football/players/2864.png"
              },
              "statistics": [{
                "team": {"id": 487, "name": "Lazio", "logo": "https://media.api-sports.io/football/teams/487.png"},
                "league": {"id": 135, "name": "Serie A", "country": "Italy", "logo": null, "flag": null, "season": 2021},
                "games": {"appearences": 31, "lineups": 31, "minutes": 2666, "number": null, "position": "Attacker", "rating": "7.383870", "captain": true},
                "substitutes": {"in": 0, "out": 11, "bench": 0},
                "shots": {"total": 95, "on": 50},
                "goals": {"total": 27, "conceded": 0, "assists": 3, "saves": null},
                "passes": {"total": 531, "key": 33, "accuracy": 13},
                "tackles": {"total": 9, "blocks": null, "interceptions": 4},
                "duels": {"total": 279, "won": 98},
                "dribbles": {"attempts": 35, "success": 15, "past": null},
                "fouls": {"drawn": 40, "committed": 27},
                "cards": {"yellow": 3, "yellowred": 0, "red": 0},
                "penalty": {"won": null, "commited": null, "scored": 6, "missed": 1, "saved": null}
              }]
            },
            {
              "player": {"id": 1622, "name": "D. Vlahović", "age": 22},
              "statistics": [{
                "team": {"id": 496, "name": "Juventus"},
                "goals": {"total": 24}
              }]
            }
          ]
        }"#;

        let scorers: Players = serde_json::from_str(json).unwrap();
        let names: Vec<&str> = scorers
            .response
            .iter()
            .map(|entry| entry.player.name.as_str())
            .collect();
        assert_eq!(names, ["C. Immobile", "D. Vlahović"]);

        let immobile = &scorers.response[0].statistics[0];
        assert_eq!(immobile.goals.total, Some(27));
        assert_eq!(immobile.goals.saves, None);
        assert_eq!(immobile.games.number, None);
        assert_eq!(immobile.passes.accuracy, Some(StatValue::Count(13)));
        assert_eq!(immobile.substitutes.subbed_out, Some(11));
        assert_eq!(immobile.penalty.commited, None);

        // sparse entries fall back to defaults
        assert_eq!(scorers.response[1].statistics[0].goals.total, Some(24));
        assert_eq!(scorers.response[1].player.birth, Birth::default());
    }

    #[test]
    fn test_decode_transfers() {
        let json = r#"
        {
          "results": 1,
          "response": [{
            "player": {"id": 2864, "name": "Ciro Immobile"},
            "update": "2021-07-28T04:11:35+00:00",
            "transfers": [
              {"date": "2016-07-27", "type": "€ 8.75M",
               "teams": {"in": {"id": 487, "name": "Lazio", "logo": null}, "out": {"id": 536, "name": "Sevilla", "logo": null}}},
              {"date": "2016-01-29", "type": "Loan",
               "teams": {"in": {"id": 536, "name": "Sevilla"}, "out": {"id": 503, "name": "Torino"}}}
            ]
          }]
        }"#;

        let transfers: Transfers = serde_json::from_str(json).unwrap();
        let moves = &transfers.response[0].transfers;
        assert_eq!(moves.len(), 2);
        assert_eq!(moves[0].teams.joined.name, "Lazio");
        assert_eq!(moves[0].teams.left.name, "Sevilla");
        assert_eq!(moves[1].kind.as_deref(), Some("Loan"));
    }
}
