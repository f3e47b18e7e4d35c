use serde::{Deserialize, Serialize};

use super::fixtures::FixtureEntry;
use super::teams::SeasonRecord;
use super::{Envelope, HomeAway, LeagueRef};

pub type Predictions = Envelope<Vec<Prediction>>;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Prediction {
    pub predictions: Forecast,
    pub league: LeagueRef,
    pub teams: HomeAway<PredictionTeam>,
    pub comparison: Comparison,
    /// Previous meetings between the two sides, most recent first.
    pub h2h: Vec<FixtureEntry>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Forecast {
    pub winner: Option<Pick>,
    pub win_or_draw: Option<bool>,
    pub under_over: Option<String>,
    pub goals: HomeAway<Option<String>>,
    pub advice: Option<String>,
    pub percent: WinPercent,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pick {
    pub id: Option<u32>,
    pub name: Option<String>,
    pub comment: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WinPercent {
    pub home: String,
    pub draw: String,
    pub away: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionTeam {
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: u32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    pub logo: Option<String>,
    pub last_5: LastFive,
    /// The team's season so far in this league.
    pub league: SeasonRecord,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LastFive {
    pub form: Option<String>,
    pub att: Option<String>,
    pub def: Option<String>,
    pub goals: LastFiveGoals,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LastFiveGoals {
    #[serde(rename = "for")]
    pub scored: GoalAverage,
    pub against: GoalAverage,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalAverage {
    pub total: Option<u32>,
    pub average: Option<String>,
}

/// Percentage strength of each side per category, e.g. `"60%"`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comparison {
    pub form: HomeAway<String>,
    pub att: HomeAway<String>,
    pub def: HomeAway<String>,
    pub poisson_distribution: HomeAway<String>,
    pub h2h: HomeAway<String>,
    pub goals: HomeAway<String>,
    pub total: HomeAway<String>,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_decode_prediction() {
        let json = r#"
        {
          "get": "predictions",
          "parameters": {"fixture": "731769"},
          "errors": [],
          "results": 1,
          "paging": {"current": 1, "total": 1},
          "response": [{
            "predictions": {
              "winner": {"id": 505, "name": "Inter", "comment": "Win or draw"},
              "win_or_draw": true,
              "under_over": null,
              "goals": {"home": "-3.5", "away": "-1.5"},
              "advice": "Double chance : Inter or draw",
              "percent": {"home": "50%", "draw": "50%", "away": "0%"}
            },
            "league": {"id": 135, "name": "Serie A", "country": "Italy", "season": 2021},
            "teams": {
              "home": {
                "id": 505, "name": "Inter", "logo": null,
                "last_5": {"form": "80%", "att": "93%", "def": "64%",
                           "goals": {"for": {"total": 14, "average": "2.8"}, "against": {"total": 3, "average": "0.6"}}},
                "league": {
                  "form": "WWDWW",
                  "fixtures": {"played": {"home": 18, "away": 19, "total": 37}},
                  "clean_sheet": {"home": 8, "away": 7, "total": 15}
                }
              },
              "away": {"id": 488, "name": "Sampdoria", "logo": null}
            },
            "comparison": {
              "form": {"home": "71%", "away": "29%"},
              "total": {"home": "62.6%", "away": "37.4%"}
            },
            "h2h": [{
              "fixture": {"id": 710720, "timezone": "UTC", "date": "2022-01-16T14:00:00+00:00", "timestamp": 1642341600,
                          "status": {"long": "Match Finished", "short": "FT", "elapsed": 90}},
              "teams": {"home": {"id": 488, "name": "Sampdoria", "winner": false}, "away": {"id": 505, "name": "Inter", "winner": true}},
              "goals": {"home": 1, "away": 2}
            }]
          }]
        }"#;

        let predictions: Predictions = serde_json::from_str(json).unwrap();
        let prediction = &predictions.response[0];

        assert_eq!(
            prediction.predictions.winner.as_ref().and_then(|w| w.id),
            Some(505)
        );
        assert_eq!(prediction.predictions.under_over, None);
        assert_eq!(prediction.predictions.percent.home, "50%");
        assert_eq!(prediction.teams.home.last_5.goals.scored.total, Some(14));
        assert_eq!(prediction.teams.home.league.fixtures.played.total, Some(37));
        assert_eq!(prediction.teams.away.league, SeasonRecord::default());
        assert_eq!(prediction.comparison.total.away, "37.4%");
        assert_eq!(prediction.h2h[0].goals.away, Some(2));
        assert_eq!(prediction.h2h[0].teams.away.winner, Some(true));
    }
}
