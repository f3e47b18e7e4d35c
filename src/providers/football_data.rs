use serde::de::DeserializeOwned;

use super::rest::RestClient;
use super::{Query, Upstream, decode, query};
use crate::config::{ProviderConfig, QueryDefaults};
use crate::errors::ProviderError;
use crate::schema::football_data::{
    Competition, CompetitionList, CompetitionStandings, MatchList, ScorerList, TeamDetail,
};

const AUTH_HEADER: &str = "x-auth-token";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Competitions,
    Competition { competition: u32 },
    Standings { competition: u32 },
    Matches { competition: u32 },
    Scorers { competition: u32 },
    Team { team: u32 },
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Competitions => "competitions".to_string(),
            Route::Competition { competition } => format!("competitions/{competition}"),
            Route::Standings { competition } => format!("competitions/{competition}/standings"),
            Route::Matches { competition } => format!("competitions/{competition}/matches"),
            Route::Scorers { competition } => format!("competitions/{competition}/scorers"),
            Route::Team { team } => format!("teams/{team}"),
        }
    }

    pub fn query(&self, defaults: &QueryDefaults) -> Query {
        match self {
            Route::Standings { .. } | Route::Matches { .. } | Route::Scorers { .. } => {
                query([("season", defaults.season.clone())])
            }
            Route::Competitions | Route::Competition { .. } | Route::Team { .. } => Query::new(),
        }
    }
}

/// Client for the secondary provider, football-data.org v2.
pub struct FootballData {
    upstream: Box<dyn Upstream>,
    defaults: QueryDefaults,
}

impl FootballData {
    pub fn new(upstream: Box<dyn Upstream>, defaults: QueryDefaults) -> Self {
        Self { upstream, defaults }
    }

    pub fn from_config(
        config: &ProviderConfig,
        defaults: QueryDefaults,
    ) -> Result<Self, ProviderError> {
        let client = RestClient::new(
            "football-data",
            AUTH_HEADER,
            &config.token,
            &config.base_url,
        )?;
        Ok(Self::new(Box::new(client), defaults))
    }

    pub async fn raw(&self, route: Route) -> Result<Vec<u8>, ProviderError> {
        self.upstream
            .fetch(&route.path(), &route.query(&self.defaults))
            .await
    }

    async fn get<T: DeserializeOwned>(&self, route: Route) -> Result<T, ProviderError> {
        let body = self.raw(route).await?;
        decode(&body).inspect_err(|e| {
            tracing::warn!("[{}] {:?} did not decode: {}", self.upstream.name(), route, e);
        })
    }

    pub async fn competitions(&self) -> Result<CompetitionList, ProviderError> {
        self.get(Route::Competitions).await
    }

    pub async fn competition(&self, competition: u32) -> Result<Competition, ProviderError> {
        self.get(Route::Competition { competition }).await
    }

    pub async fn standings(&self, competition: u32) -> Result<CompetitionStandings, ProviderError> {
        self.get(Route::Standings { competition }).await
    }

    pub async fn matches(&self, competition: u32) -> Result<MatchList, ProviderError> {
        self.get(Route::Matches { competition }).await
    }

    pub async fn scorers(&self, competition: u32) -> Result<ScorerList, ProviderError> {
        self.get(Route::Scorers { competition }).await
    }

    pub async fn team(&self, team: u32) -> Result<TeamDetail, ProviderError> {
        self.get(Route::Team { team }).await
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use super::*;
    use crate::providers::stub::StubUpstream;
    use crate::schema::ResultCount;

    #[test]
    fn test_routes() {
        let defaults = QueryDefaults::default();

        assert_eq!(Route::Competitions.path(), "competitions");
        assert_eq!(
            Route::Scorers { competition: 2019 }.path(),
            "competitions/2019/scorers"
        );
        assert_eq!(
            Route::Matches { competition: 2019 }.query(&defaults),
            query([("season", "2021".into())])
        );
        assert!(Route::Team { team: 98 }.query(&defaults).is_empty());
    }

    #[tokio::test]
    async fn test_scorers_through_stub() {
        let stub = Arc::new(StubUpstream::new(
            r#"{
                "count": 2,
                "filters": {"limit": 10},
                "competition": {"id": 2019, "name": "Serie A"},
                "season": {"id": 757, "startDate": "2021-08-21", "endDate": "2022-05-22"},
                "scorers": [
                    {"player": {"id": 1, "name": "Ciro Immobile", "position": "Attacker"}, "team": {"id": 110, "name": "SS Lazio"}, "numberOfGoals": 27},
                    {"player": {"id": 2, "name": "Dušan Vlahović"}, "team": {"id": 109, "name": "Juventus FC"}, "numberOfGoals": 24}
                ]
            }"#,
        ));
        let client = FootballData::new(Box::new(Arc::clone(&stub)), QueryDefaults::default());

        let scorers = client.scorers(2019).await.unwrap();
        assert_eq!(scorers.result_count(), 2);
        assert_eq!(scorers.scorers[0].player.name, "Ciro Immobile");
        assert_eq!(scorers.scorers[1].number_of_goals, 24);

        let (path, params) = stub.last_request();
        assert_eq!(path, "competitions/2019/scorers");
        assert_eq!(params.get("season").map(String::as_str), Some("2021"));
    }

    #[tokio::test]
    async fn test_sends_auth_token_header() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/v2/competitions")
            .match_header("X-Auth-Token", "fd-secret")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"count": 1, "competitions": [{"id": 2019, "area": {"id": 2114, "name": "Italy"}, "name": "Serie A", "code": "SA"}]}"#)
            .create_async()
            .await;

        let config = ProviderConfig {
            base_url: format!("{}/v2/", server.url()),
            token: "fd-secret".into(),
        };
        let client = FootballData::from_config(&config, QueryDefaults::default()).unwrap();

        let competitions = client.competitions().await.unwrap();
        mock.assert_async().await;

        assert_eq!(competitions.count, 1);
        assert_eq!(competitions.competitions[0].area.name, "Italy");
    }

    #[tokio::test]
    async fn test_missing_team_surfaces_upstream_status() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/v2/teams/999999")
            .with_status(404)
            .with_body(r#"{"message": "The resource you are looking for does not exist.", "errorCode": 404}"#)
            .create_async()
            .await;

        let config = ProviderConfig {
            base_url: format!("{}/v2", server.url()),
            token: "fd-secret".into(),
        };
        let client = FootballData::from_config(&config, QueryDefaults::default()).unwrap();

        let err = client.team(999999).await.unwrap_err();
        mock.assert_async().await;
        assert!(matches!(err, ProviderError::Status(s) if s == reqwest::StatusCode::NOT_FOUND));
    }
}
