use super::AppState;
use super::models::ApiError;
use crate::errors::ProviderError;
use crate::schema::{Envelope, ResultCount};
use crate::schema::fixtures::{Events, FixtureStatistics, Fixtures, FixturesPlayers, Lineups};
use crate::schema::football_data::{
    Competition, CompetitionList, CompetitionStandings, MatchList, ScorerList, TeamDetail,
};
use crate::schema::leagues::{AccountStatus, Leagues, Standings};
use crate::schema::players::{
    Coachs, Injuries, Players, SidelinedSpells, Squads, Transfers, Trophies,
};
use crate::schema::predictions::Predictions;
use crate::schema::teams::{TeamSeasonStatistics, Teams, Venues};
use axum::{
    extract::{Path, State},
    response::Json,
};
use serde::Serialize;

type Reply<T> = Result<Json<T>, ApiError>;

fn upstream_failure(err: ProviderError) -> ApiError {
    tracing::error!("upstream request failed: {}", err);
    err.into()
}

/// Re-serves an API-Football envelope, or 404 when it carries no payload.
fn relay<T: Serialize>(result: Result<Envelope<T>, ProviderError>) -> Reply<Envelope<T>> {
    let envelope = result.map_err(upstream_failure)?;
    if envelope.payload().is_none() {
        return Err(ApiError::NotFound);
    }
    Ok(Json(envelope))
}

/// Re-serves a football-data answer, or 404 when it holds no results.
fn respond<T>(result: Result<T, ProviderError>) -> Reply<T>
where
    T: Serialize + ResultCount,
{
    let payload = result.map_err(upstream_failure)?;
    if payload.result_count() == 0 {
        return Err(ApiError::NotFound);
    }
    Ok(Json(payload))
}

/// GET /health: liveness check
pub async fn health() -> &'static str {
    "OK"
}

// ── API-Football ───────────────────────────────────────────────────

/// GET /api/apiFootball/status
pub async fn status(State(state): State<AppState>) -> Reply<AccountStatus> {
    relay(state.api_football.status().await)
}

/// GET /api/apiFootball/leagues
pub async fn leagues(State(state): State<AppState>) -> Reply<Leagues> {
    relay(state.api_football.leagues().await)
}

/// GET /api/apiFootball/leagues/{league}
pub async fn league(State(state): State<AppState>, Path(league): Path<u32>) -> Reply<Leagues> {
    relay(state.api_football.league(league).await)
}

/// GET /api/apiFootball/leagues/{league}/standings
pub async fn standings(
    State(state): State<AppState>,
    Path(league): Path<u32>,
) -> Reply<Standings> {
    relay(state.api_football.standings(league).await)
}

/// GET /api/apiFootball/leagues/{league}/topscorers
pub async fn top_scorers(State(state): State<AppState>, Path(league): Path<u32>) -> Reply<Players> {
    relay(state.api_football.top_scorers(league).await)
}

/// GET /api/apiFootball/leagues/{league}/topassists
pub async fn top_assists(State(state): State<AppState>, Path(league): Path<u32>) -> Reply<Players> {
    relay(state.api_football.top_assists(league).await)
}

/// GET /api/apiFootball/leagues/{league}/topyellowcards
pub async fn top_yellow_cards(
    State(state): State<AppState>,
    Path(league): Path<u32>,
) -> Reply<Players> {
    relay(state.api_football.top_yellow_cards(league).await)
}

/// GET /api/apiFootball/leagues/{league}/topredcards
pub async fn top_red_cards(
    State(state): State<AppState>,
    Path(league): Path<u32>,
) -> Reply<Players> {
    relay(state.api_football.top_red_cards(league).await)
}

/// GET /api/apiFootball/leagues/{league}/teams
pub async fn teams(State(state): State<AppState>, Path(league): Path<u32>) -> Reply<Teams> {
    relay(state.api_football.teams(league).await)
}

/// GET /api/apiFootball/leagues/{league}/teams/{team}
pub async fn team(
    State(state): State<AppState>,
    Path((league, team)): Path<(u32, u32)>,
) -> Reply<Teams> {
    relay(state.api_football.team(league, team).await)
}

/// GET /api/apiFootball/leagues/{league}/teams/{team}/statistics
pub async fn team_statistics(
    State(state): State<AppState>,
    Path((league, team)): Path<(u32, u32)>,
) -> Reply<TeamSeasonStatistics> {
    relay(state.api_football.team_statistics(league, team).await)
}

/// GET /api/apiFootball/leagues/{league}/teams/{team}/players
pub async fn team_players(
    State(state): State<AppState>,
    Path((league, team)): Path<(u32, u32)>,
) -> Reply<Players> {
    relay(state.api_football.team_players(league, team).await)
}

/// GET /api/apiFootball/leagues/{league}/teams/{team}/fixtures
pub async fn team_fixtures(
    State(state): State<AppState>,
    Path((league, team)): Path<(u32, u32)>,
) -> Reply<Fixtures> {
    relay(state.api_football.team_fixtures(league, team).await)
}

/// GET /api/apiFootball/leagues/{league}/teams/{team}/fixtures/{fixture}/injuries
pub async fn injuries(
    State(state): State<AppState>,
    Path((league, team, fixture)): Path<(u32, u32, u32)>,
) -> Reply<Injuries> {
    relay(state.api_football.injuries(league, team, fixture).await)
}

/// GET /api/apiFootball/leagues/{league}/headtohead/{home}/{away}
pub async fn head_to_head(
    State(state): State<AppState>,
    Path((league, home, away)): Path<(u32, u32, u32)>,
) -> Reply<Fixtures> {
    relay(state.api_football.head_to_head(league, home, away).await)
}

/// GET /api/apiFootball/teams/{team}/coachs
pub async fn coachs(State(state): State<AppState>, Path(team): Path<u32>) -> Reply<Coachs> {
    relay(state.api_football.coachs(team).await)
}

/// GET /api/apiFootball/teams/{team}/squads
pub async fn squads(State(state): State<AppState>, Path(team): Path<u32>) -> Reply<Squads> {
    relay(state.api_football.squads(team).await)
}

/// GET /api/apiFootball/teams/{team}/fixtures/{fixture}/statistics
pub async fn fixture_statistics(
    State(state): State<AppState>,
    Path((team, fixture)): Path<(u32, u32)>,
) -> Reply<FixtureStatistics> {
    relay(state.api_football.fixture_statistics(team, fixture).await)
}

/// GET /api/apiFootball/teams/{team}/fixtures/{fixture}/events
pub async fn fixture_events(
    State(state): State<AppState>,
    Path((team, fixture)): Path<(u32, u32)>,
) -> Reply<Events> {
    relay(state.api_football.fixture_events(team, fixture).await)
}

/// GET /api/apiFootball/teams/{team}/fixtures/{fixture}/lineups
pub async fn fixture_lineups(
    State(state): State<AppState>,
    Path((team, fixture)): Path<(u32, u32)>,
) -> Reply<Lineups> {
    relay(state.api_football.fixture_lineups(team, fixture).await)
}

/// GET /api/apiFootball/teams/{team}/fixtures/{fixture}/players
pub async fn fixture_players(
    State(state): State<AppState>,
    Path((team, fixture)): Path<(u32, u32)>,
) -> Reply<FixturesPlayers> {
    relay(state.api_football.fixture_players(team, fixture).await)
}

/// GET /api/apiFootball/fixtures/{fixture}
pub async fn fixture(State(state): State<AppState>, Path(fixture): Path<u32>) -> Reply<Fixtures> {
    relay(state.api_football.fixture(fixture).await)
}

/// GET /api/apiFootball/fixtures/{fixture}/predictions
pub async fn predictions(
    State(state): State<AppState>,
    Path(fixture): Path<u32>,
) -> Reply<Predictions> {
    relay(state.api_football.predictions(fixture).await)
}

/// GET /api/apiFootball/players/{player}
pub async fn player(State(state): State<AppState>, Path(player): Path<u32>) -> Reply<Players> {
    relay(state.api_football.player(player).await)
}

/// GET /api/apiFootball/players/{player}/transfers
pub async fn transfers(State(state): State<AppState>, Path(player): Path<u32>) -> Reply<Transfers> {
    relay(state.api_football.transfers(player).await)
}

/// GET /api/apiFootball/players/{player}/trophies
pub async fn trophies(State(state): State<AppState>, Path(player): Path<u32>) -> Reply<Trophies> {
    relay(state.api_football.trophies(player).await)
}

/// GET /api/apiFootball/players/{player}/sidelined
pub async fn sidelined(
    State(state): State<AppState>,
    Path(player): Path<u32>,
) -> Reply<SidelinedSpells> {
    relay(state.api_football.sidelined(player).await)
}

/// GET /api/apiFootball/venues
pub async fn venues(State(state): State<AppState>) -> Reply<Venues> {
    relay(state.api_football.venues().await)
}

/// GET /api/apiFootball/venues/{venue}
pub async fn venue(State(state): State<AppState>, Path(venue): Path<u32>) -> Reply<Venues> {
    relay(state.api_football.venue(venue).await)
}

// ── football-data.org ──────────────────────────────────────────────

/// GET /api/footballData/competitions
pub async fn competitions(State(state): State<AppState>) -> Reply<CompetitionList> {
    respond(state.football_data.competitions().await)
}

/// GET /api/footballData/competitions/{competition}
pub async fn competition(
    State(state): State<AppState>,
    Path(competition): Path<u32>,
) -> Reply<Competition> {
    respond(state.football_data.competition(competition).await)
}

/// GET /api/footballData/competitions/{competition}/standings
pub async fn competition_standings(
    State(state): State<AppState>,
    Path(competition): Path<u32>,
) -> Reply<CompetitionStandings> {
    respond(state.football_data.standings(competition).await)
}

/// GET /api/footballData/competitions/{competition}/matches
pub async fn competition_matches(
    State(state): State<AppState>,
    Path(competition): Path<u32>,
) -> Reply<MatchList> {
    respond(state.football_data.matches(competition).await)
}

/// GET /api/footballData/competitions/{competition}/scorers
pub async fn competition_scorers(
    State(state): State<AppState>,
    Path(competition): Path<u32>,
) -> Reply<ScorerList> {
    respond(state.football_data.scorers(competition).await)
}

/// GET /api/footballData/teams/{team}
pub async fn football_data_team(
    State(state): State<AppState>,
    Path(team): Path<u32>,
) -> Reply<TeamDetail> {
    respond(state.football_data.team(team).await)
}
