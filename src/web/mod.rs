//! Map-click web UI serving the risk engine.
//!
//! The server is stateless: every request is one engine call over the query
//! parameters, nothing is shared between requests beyond the calibration.

mod assets;

use std::{net::SocketAddr, str::FromStr, sync::Arc};

use anyhow::Result;
use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

use crate::{
    curves::{curve_set, metabolic_demand_at, CurveSeries},
    engine::{RiskEngine, RiskPolicy, SiteInput, StatusScheme},
    model::ModelConstants,
    report::AnalysisReport,
    scenario::ClimateScenario,
};

pub struct WebServerConfig {
    pub constants: ModelConstants,
    pub policy: RiskPolicy,
    pub scheme: StatusScheme,
    pub host: String,
    pub port: u16,
}

struct AppState {
    constants: ModelConstants,
    policy: RiskPolicy,
    scheme: StatusScheme,
}

pub async fn run(config: WebServerConfig) -> Result<()> {
    let state = Arc::new(AppState {
        constants: config.constants,
        policy: config.policy,
        scheme: config.scheme,
    });

    let router = Router::new()
        .route("/", get(index))
        .route("/styles.css", get(styles))
        .route("/app.js", get(script))
        .route("/api/scenarios", get(scenarios))
        .route("/api/assess", get(assess))
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("invalid address");

    println!(
        "STEF UI live at http://{}:{} (Ctrl+C to stop)",
        config.host, config.port
    );

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    println!("Shutting down web UI...");
}

async fn index() -> Html<&'static str> {
    Html(assets::INDEX_HTML)
}

async fn styles() -> impl IntoResponse {
    Response::builder()
        .header(header::CONTENT_TYPE, "text/css; charset=utf-8")
        .body(assets::STYLES_CSS.to_string())
        .unwrap()
}

async fn script() -> impl IntoResponse {
    Response::builder()
        .header(
            header::CONTENT_TYPE,
            "application/javascript; charset=utf-8",
        )
        .body(assets::APP_JS.to_string())
        .unwrap()
}

#[derive(Serialize)]
struct ScenarioEntry {
    id: &'static str,
    label: &'static str,
    shift_c: f64,
}

async fn scenarios() -> Json<Vec<ScenarioEntry>> {
    let entries = ClimateScenario::ALL
        .iter()
        .map(|s| ScenarioEntry {
            id: s.id(),
            label: s.label(),
            shift_c: s.shift_c(),
        })
        .collect();
    Json(entries)
}

#[derive(Deserialize)]
struct AssessQuery {
    lat: f64,
    lng: f64,
    ni: f64,
    scenario: String,
}

#[derive(Serialize)]
pub struct AssessResponse {
    pub report: AnalysisReport,
    pub metabolic_marker: (f64, f64),
    pub curves: Vec<CurveSeries>,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

async fn assess(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AssessQuery>,
) -> Response {
    let scenario = match ClimateScenario::from_str(&query.scenario) {
        Ok(scenario) => scenario,
        Err(err) => return bad_request(err.to_string()),
    };
    let input = SiteInput {
        latitude: query.lat,
        longitude: query.lng,
        nutritional_index: query.ni,
        scenario,
    };
    let engine = RiskEngine::new(state.constants.clone())
        .with_policy(state.policy)
        .with_scheme(state.scheme);
    match engine.assess(&input) {
        Ok(assessment) => {
            let response = AssessResponse {
                report: AnalysisReport::new(&input, &assessment),
                metabolic_marker: (
                    assessment.temperature_c,
                    metabolic_demand_at(&state.constants, assessment.temperature_c),
                ),
                curves: curve_set(&state.constants, &assessment),
            };
            Json(response).into_response()
        }
        Err(err) => bad_request(err.to_string()),
    }
}

fn bad_request(message: String) -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorBody { error: message })).into_response()
}
