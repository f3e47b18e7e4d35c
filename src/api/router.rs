use super::AppState;
use super::handlers;
use axum::Router;
use axum::routing::get;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builds and returns the full Axum router with all routes and shared state.
pub fn build(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .nest("/api/apiFootball", api_football())
        .nest("/api/footballData", football_data())
        .layer(CorsLayer::permissive())
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_football() -> Router<AppState> {
    Router::new()
        .route("/status", get(handlers::status))
        .route("/leagues", get(handlers::leagues))
        .route("/leagues/{league}", get(handlers::league))
        .route("/leagues/{league}/standings", get(handlers::standings))
        .route("/leagues/{league}/topscorers", get(handlers::top_scorers))
        .route("/leagues/{league}/topassists", get(handlers::top_assists))
        .route("/leagues/{league}/topyellowcards", get(handlers::top_yellow_cards))
        .route("/leagues/{league}/topredcards", get(handlers::top_red_cards))
        .route("/leagues/{league}/teams", get(handlers::teams))
        .route("/leagues/{league}/teams/{team}", get(handlers::team))
        .route(
            "/leagues/{league}/teams/{team}/statistics",
            get(handlers::team_statistics),
        )
        .route(
            "/leagues/{league}/teams/{team}/players",
            get(handlers::team_players),
        )
        .route(
            "/leagues/{league}/teams/{team}/fixtures",
            get(handlers::team_fixtures),
        )
        .route(
            "/leagues/{league}/teams/{team}/fixtures/{fixture}/injuries",
            get(handlers::injuries),
        )
        .route(
            "/leagues/{league}/headtohead/{home}/{away}",
            get(handlers::head_to_head),
        )
        .route("/teams/{team}/coachs", get(handlers::coachs))
        .route("/teams/{team}/squads", get(handlers::squads))
        .route(
            "/teams/{team}/fixtures/{fixture}/statistics",
            get(handlers::fixture_statistics),
        )
        .route(
            "/teams/{team}/fixtures/{fixture}/events",
            get(handlers::fixture_events),
        )
        .route(
            "/teams/{team}/fixtures/{fixture}/lineups",
            get(handlers::fixture_lineups),
        )
        .route(
            "/teams/{team}/fixtures/{fixture}/players",
            get(handlers::fixture_players),
        )
        .route("/fixtures/{fixture}", get(handlers::fixture))
        .route("/fixtures/{fixture}/predictions", get(handlers::predictions))
        .route("/players/{player}", get(handlers::player))
        .route("/players/{player}/transfers", get(handlers::transfers))
        .route("/players/{player}/trophies", get(handlers::trophies))
        .route("/players/{player}/sidelined", get(handlers::sidelined))
        .route("/venues", get(handlers::venues))
        .route("/venues/{venue}", get(handlers::venue))
}

fn football_data() -> Router<AppState> {
    Router::new()
        .route("/competitions", get(handlers::competitions))
        .route("/competitions/{competition}", get(handlers::competition))
        .route(
            "/competitions/{competition}/standings",
            get(handlers::competition_standings),
        )
        .route(
            "/competitions/{competition}/matches",
            get(handlers::competition_matches),
        )
        .route(
            "/competitions/{competition}/scorers",
            get(handlers::competition_scorers),
        )
        .route("/teams/{team}", get(handlers::football_data_team))
}
