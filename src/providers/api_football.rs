use serde::de::DeserializeOwned;

use super::rest::RestClient;
use super::{Query, Upstream, decode, query};
use crate::config::{ProviderConfig, QueryDefaults};
use crate::errors::ProviderError;
use crate::schema::ResultCount;
use crate::schema::fixtures::{Events, FixtureStatistics, Fixtures, FixturesPlayers, Lineups};
use crate::schema::leagues::{AccountStatus, Leagues, Standings};
use crate::schema::players::{
    Coachs, Injuries, Players, SidelinedSpells, Squads, Transfers, Trophies,
};
use crate::schema::predictions::Predictions;
use crate::schema::teams::{TeamSeasonStatistics, Teams, Venues};

const AUTH_HEADER: &str = "x-apisports-key";

/// Every API-Football endpoint the proxy relays, with the ids it is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Status,
    Leagues,
    League { league: u32 },
    Standings { league: u32 },
    TopScorers { league: u32 },
    TopAssists { league: u32 },
    TopYellowCards { league: u32 },
    TopRedCards { league: u32 },
    Teams { league: u32 },
    Team { league: u32, team: u32 },
    TeamStatistics { league: u32, team: u32 },
    TeamPlayers { league: u32, team: u32 },
    TeamFixtures { league: u32, team: u32 },
    Injuries { league: u32, team: u32, fixture: u32 },
    HeadToHead { league: u32, home: u32, away: u32 },
    Fixture { fixture: u32 },
    FixtureStatistics { team: u32, fixture: u32 },
    FixtureEvents { team: u32, fixture: u32 },
    FixtureLineups { team: u32, fixture: u32 },
    FixturePlayers { team: u32, fixture: u32 },
    Predictions { fixture: u32 },
    Coachs { team: u32 },
    Squads { team: u32 },
    Venues,
    Venue { venue: u32 },
    Player { player: u32 },
    Transfers { player: u32 },
    Trophies { player: u32 },
    Sidelined { player: u32 },
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Status => "status",
            Route::Leagues | Route::League { .. } => "leagues",
            Route::Standings { .. } => "standings",
            Route::TopScorers { .. } => "players/topscorers",
            Route::TopAssists { .. } => "players/topassists",
            Route::TopYellowCards { .. } => "players/topyellowcards",
            Route::TopRedCards { .. } => "players/topredcards",
            Route::Teams { .. } | Route::Team { .. } => "teams",
            Route::TeamStatistics { .. } => "teams/statistics",
            Route::TeamPlayers { .. } | Route::Player { .. } => "players",
            Route::TeamFixtures { .. } | Route::Fixture { .. } => "fixtures",
            Route::Injuries { .. } => "injuries",
            Route::HeadToHead { .. } => "fixtures/headtohead",
            Route::FixtureStatistics { .. } => "fixtures/statistics",
            Route::FixtureEvents { .. } => "fixtures/events",
            Route::FixtureLineups { .. } => "fixtures/lineups",
            Route::FixturePlayers { .. } => "fixtures/players",
            Route::Predictions { .. } => "predictions",
            Route::Coachs { .. } => "coachs",
            Route::Squads { .. } => "players/squads",
            Route::Venues | Route::Venue { .. } => "venues",
            Route::Transfers { .. } => "transfers",
            Route::Trophies { .. } => "trophies",
            Route::Sidelined { .. } => "sidelined",
        }
    }

    /// Fixed parameters from `defaults` plus the route's own ids.
    pub fn query(&self, defaults: &QueryDefaults) -> Query {
        let season = || defaults.season.clone();

        match *self {
            Route::Status => Query::new(),
            Route::Leagues => query([
                ("code", defaults.country_code.clone()),
                ("season", season()),
            ]),
            Route::League { league } => query([
                ("code", defaults.country_code.clone()),
                ("season", season()),
                ("id", league.to_string()),
            ]),
            Route::Standings { league }
            | Route::TopScorers { league }
            | Route::TopAssists { league }
            | Route::TopYellowCards { league }
            | Route::TopRedCards { league }
            | Route::Teams { league } => {
                query([("season", season()), ("league", league.to_string())])
            }
            Route::Team { league, team } => query([
                ("season", season()),
                ("league", league.to_string()),
                ("id", team.to_string()),
            ]),
            Route::TeamStatistics { league, team }
            | Route::TeamPlayers { league, team }
            | Route::TeamFixtures { league, team } => query([
                ("season", season()),
                ("league", league.to_string()),
                ("team", team.to_string()),
            ]),
            Route::Injuries {
                league,
                team,
                fixture,
            } => query([
                ("season", season()),
                ("league", league.to_string()),
                ("team", team.to_string()),
                ("fixture", fixture.to_string()),
            ]),
            Route::HeadToHead { league, home, away } => query([
                ("season", season()),
                ("league", league.to_string()),
                ("h2h", format!("{home}-{away}")),
            ]),
            Route::Fixture { fixture } => query([("id", fixture.to_string())]),
            Route::FixtureStatistics { team, fixture }
            | Route::FixtureEvents { team, fixture }
            | Route::FixtureLineups { team, fixture }
            | Route::FixturePlayers { team, fixture } => query([
                ("team", team.to_string()),
                ("fixture", fixture.to_string()),
            ]),
            Route::Predictions { fixture } => query([("fixture", fixture.to_string())]),
            Route::Coachs { team } | Route::Squads { team } => {
                query([("team", team.to_string())])
            }
            Route::Venues => query([("country", defaults.venue_country.clone())]),
            Route::Venue { venue } => query([
                ("country", defaults.venue_country.clone()),
                ("id", venue.to_string()),
            ]),
            Route::Player { player } => {
                query([("id", player.to_string()), ("season", season())])
            }
            Route::Transfers { player } | Route::Trophies { player } | Route::Sidelined { player } => {
                query([("player", player.to_string())])
            }
        }
    }
}

/// Client for the primary provider, API-Football v3.
pub struct ApiFootball {
    upstream: Box<dyn Upstream>,
    defaults: QueryDefaults,
}

impl ApiFootball {
    pub fn new(upstream: Box<dyn Upstream>, defaults: QueryDefaults) -> Self {
        Self { upstream, defaults }
    }

    pub fn from_config(
        config: &ProviderConfig,
        defaults: QueryDefaults,
    ) -> Result<Self, ProviderError> {
        let client = RestClient::new(
            "api-football",
            AUTH_HEADER,
            &config.token,
            &config.base_url,
        )?;
        Ok(Self::new(Box::new(client), defaults))
    }

    /// The undecoded upstream body for `route`.
    pub async fn raw(&self, route: Route) -> Result<Vec<u8>, ProviderError> {
        self.upstream
            .fetch(route.path(), &route.query(&self.defaults))
            .await
    }

    async fn get<T>(&self, route: Route) -> Result<T, ProviderError>
    where
        T: DeserializeOwned + ResultCount,
    {
        let body = self.raw(route).await?;
        let decoded: T = decode(&body).inspect_err(|e| {
            tracing::warn!("[{}] {:?} did not decode: {}", self.upstream.name(), route, e);
        })?;

        let errors = decoded.upstream_errors();
        if !errors.is_empty() {
            tracing::warn!("[{}] {:?} reported errors: {:?}", self.upstream.name(), route, errors);
        }

        Ok(decoded)
    }

    pub async fn status(&self) -> Result<AccountStatus, ProviderError> {
        self.get(Route::Status).await
    }

    pub async fn leagues(&self) -> Result<Leagues, ProviderError> {
        self.get(Route::Leagues).await
    }

    pub async fn league(&self, league: u32) -> Result<Leagues, ProviderError> {
        self.get(Route::League { league }).await
    }

    pub async fn standings(&self, league: u32) -> Result<Standings, ProviderError> {
        self.get(Route::Standings { league }).await
    }

    pub async fn top_scorers(&self, league: u32) -> Result<Players, ProviderError> {
        self.get(Route::TopScorers { league }).await
    }

    pub async fn top_assists(&self, league: u32) -> Result<Players, ProviderError> {
        self.get(Route::TopAssists { league }).await
    }

    pub async fn top_yellow_cards(&self, league: u32) -> Result<Players, ProviderError> {
        self.get(Route::TopYellowCards { league }).await
    }

    pub async fn top_red_cards(&self, league: u32) -> Result<Players, ProviderError> {
        self.get(Route::TopRedCards { league }).await
    }

    pub async fn teams(&self, league: u32) -> Result<Teams, ProviderError> {
        self.get(Route::Teams { league }).await
    }

    pub async fn team(&self, league: u32, team: u32) -> Result<Teams, ProviderError> {
        self.get(Route::Team { league, team }).await
    }

    pub async fn team_statistics(
        &self,
        league: u32,
        team: u32,
    ) -> Result<TeamSeasonStatistics, ProviderError> {
        self.get(Route::TeamStatistics { league, team }).await
    }

    pub async fn team_players(&self, league: u32, team: u32) -> Result<Players, ProviderError> {
        self.get(Route::TeamPlayers { league, team }).await
    }

    pub async fn team_fixtures(&self, league: u32, team: u32) -> Result<Fixtures, ProviderError> {
        self.get(Route::TeamFixtures { league, team }).await
    }

    pub async fn injuries(
        &self,
        league: u32,
        team: u32,
        fixture: u32,
    ) -> Result<Injuries, ProviderError> {
        self.get(Route::Injuries {
            league,
            team,
            fixture,
        })
        .await
    }

    pub async fn head_to_head(
        &self,
        league: u32,
        home: u32,
        away: u32,
    ) -> Result<Fixtures, ProviderError> {
        self.get(Route::HeadToHead { league, home, away }).await
    }

    pub async fn fixture(&self, fixture: u32) -> Result<Fixtures, ProviderError> {
        self.get(Route::Fixture { fixture }).await
    }

    pub async fn fixture_statistics(
        &self,
        team: u32,
        fixture: u32,
    ) -> Result<FixtureStatistics, ProviderError> {
        self.get(Route::FixtureStatistics { team, fixture }).await
    }

    pub async fn fixture_events(&self, team: u32, fixture: u32) -> Result<Events, ProviderError> {
        self.get(Route::FixtureEvents { team, fixture }).await
    }

    pub async fn fixture_lineups(&self, team: u32, fixture: u32) -> Result<Lineups, ProviderError> {
        self.get(Route::FixtureLineups { team, fixture }).await
    }

    pub async fn fixture_players(
        &self,
        team: u32,
        fixture: u32,
    ) -> Result<FixturesPlayers, ProviderError> {
        self.get(Route::FixturePlayers { team, fixture }).await
    }

    pub async fn predictions(&self, fixture: u32) -> Result<Predictions, ProviderError> {
        self.get(Route::Predictions { fixture }).await
    }

    pub async fn coachs(&self, team: u32) -> Result<Coachs, ProviderError> {
        self.get(Route::Coachs { team }).await
    }

    pub async fn squads(&self, team: u32) -> Result<Squads, ProviderError> {
        self.get(Route::Squads { team }).await
    }

    pub async fn venues(&self) -> Result<Venues, ProviderError> {
        self.get(Route::Venues).await
    }

    pub async fn venue(&self, venue: u32) -> Result<Venues, ProviderError> {
        self.get(Route::Venue { venue }).await
    }

    pub async fn player(&self, player: u32) -> Result<Players, ProviderError> {
        self.get(Route::Player { player }).await
    }

    pub async fn transfers(&self, player: u32) -> Result<Transfers, ProviderError> {
        self.get(Route::Transfers { player }).await
    }

    pub async fn trophies(&self, player: u32) -> Result<Trophies, ProviderError> {
        self.get(Route::Trophies { player }).await
    }

    pub async fn sidelined(&self, player: u32) -> Result<SidelinedSpells, ProviderError> {
        self.get(Route::Sidelined { player }).await
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use mockito::Matcher;

    use super::*;
    use crate::providers::stub::StubUpstream;

    fn defaults() -> QueryDefaults {
        QueryDefaults::default()
    }

    fn with_stub(body: &str) -> (ApiFootball, Arc<StubUpstream>) {
        let stub = Arc::new(StubUpstream::new(body));
        let client = ApiFootball::new(Box::new(Arc::clone(&stub)), defaults());
        (client, stub)
    }

    #[test]
    fn test_route_table_pins_season_and_country() {
        assert_eq!(
            Route::Leagues.query(&defaults()),
            query([("code", "IT".into()), ("season", "2021".into())])
        );
        assert_eq!(
            Route::League { league: 135 }.query(&defaults()),
            query([
                ("code", "IT".into()),
                ("season", "2021".into()),
                ("id", "135".into()),
            ])
        );
        assert_eq!(
            Route::Venue { venue: 907 }.query(&defaults()),
            query([("country", "Italy".into()), ("id", "907".into())])
        );
        assert_eq!(
            Route::Fixture { fixture: 731769 }.query(&defaults()),
            query([("id", "731769".into())])
        );
        assert!(Route::Status.query(&defaults()).is_empty());
    }

    #[test]
    fn test_route_table_paths() {
        assert_eq!(Route::TopYellowCards { league: 135 }.path(), "players/topyellowcards");
        assert_eq!(Route::Squads { team: 489 }.path(), "players/squads");
        assert_eq!(Route::Player { player: 2864 }.path(), "players");
        assert_eq!(
            Route::HeadToHead { league: 135, home: 489, away: 505 }.path(),
            "fixtures/headtohead"
        );
    }

    #[test]
    fn test_head_to_head_joins_team_ids() {
        let params = Route::HeadToHead {
            league: 135,
            home: 489,
            away: 505,
        }
        .query(&defaults());
        assert_eq!(params.get("h2h").map(String::as_str), Some("489-505"));
        assert_eq!(params.get("season").map(String::as_str), Some("2021"));
    }

    #[test]
    fn test_configured_season_replaces_default() {
        let custom = QueryDefaults {
            season: "2023".into(),
            ..defaults()
        };
        let params = Route::TeamStatistics {
            league: 135,
            team: 489,
        }
        .query(&custom);
        assert_eq!(
            params,
            query([
                ("season", "2023".into()),
                ("league", "135".into()),
                ("team", "489".into()),
            ])
        );
    }

    #[tokio::test]
    async fn test_accessor_sends_its_route() {
        let (client, stub) = with_stub(r#"{"results":0,"response":[]}"#);

        let injuries = client.injuries(135, 489, 731769).await.unwrap();
        assert!(injuries.payload().is_none());

        let (path, params) = stub.last_request();
        assert_eq!(path, "injuries");
        assert_eq!(params.get("fixture").map(String::as_str), Some("731769"));
        assert_eq!(params.get("team").map(String::as_str), Some("489"));
    }

    #[tokio::test]
    async fn test_zero_results_on_single_object_endpoint() {
        let (client, _) = with_stub(r#"{"get":"teams/statistics","results":0,"response":[]}"#);
        let stats = client.team_statistics(135, 1).await.unwrap();
        assert_eq!(stats.result_count(), 0);
        assert!(stats.response.as_ref().is_none());
    }

    #[tokio::test]
    async fn test_malformed_body_is_a_decode_error() {
        let (client, _) = with_stub("<html>rate limited</html>");
        let err = client.leagues().await.unwrap_err();
        assert!(matches!(err, ProviderError::Decode(_)));

        let (client, _) = with_stub(r#"{"results":"many","response":[]}"#);
        let err = client.leagues().await.unwrap_err();
        assert!(matches!(err, ProviderError::Decode(_)));
    }

    #[tokio::test]
    async fn test_raw_returns_body_untouched() {
        let body = r#"{"results":1,"response":[{"type":"Injury","start":"2021-09-01","end":"2021-09-20"}]}"#;
        let (client, _) = with_stub(body);
        let raw = client.raw(Route::Sidelined { player: 2864 }).await.unwrap();
        assert_eq!(raw, body.as_bytes());
    }

    #[tokio::test]
    async fn test_fetch_leagues() {
        let mut server = mockito::Server::new_async().await;

        let json = r#"{"results":1,"response":[{"league":{"id":135,"name":"Serie A"}}]}"#;

        let mock = server
            .mock("GET", "/leagues")
            .match_header("x-apisports-key", "asdf1234")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("code".into(), "IT".into()),
                Matcher::UrlEncoded("season".into(), "2021".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json)
            .create_async()
            .await;

        let config = ProviderConfig {
            base_url: server.url(),
            token: "asdf1234".into(),
        };
        let client = ApiFootball::from_config(&config, defaults()).unwrap();

        let leagues = client.leagues().await.unwrap();
        mock.assert_async().await;

        let entries = leagues.payload().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].league.id, 135);
        assert_eq!(entries[0].league.name, "Serie A");
    }
}
