use std::{collections::HashMap, net::SocketAddr, sync::Arc, time::Duration};

use anyhow::Context;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::Mutex};
use tower_http::services::ServeDir;
use tracing::{info, warn};

use bedzone_common::{
    bed_view, parse_start, BedEngine, DemoConfig, Side, StepDirection, TempUnit, Theme, ZoneMode,
};

/// How far the simulated sensor moves toward a zone's target each tick.
const SIM_DRIFT_F_PER_TICK: f32 = 0.5;

#[derive(Clone)]
struct AppState {
    engine: Arc<Mutex<BedEngine>>,
    config: Arc<Mutex<DemoConfig>>,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Deserialize)]
struct ScheduleStartUpdate {
    side: Side,
    time: String,
}

#[derive(Debug, Deserialize)]
struct SettingsUpdate {
    #[serde(default)]
    unit: Option<TempUnit>,
    #[serde(default)]
    theme: Option<Theme>,
    #[serde(rename = "leftName", default)]
    left_name: Option<String>,
    #[serde(rename = "rightName", default)]
    right_name: Option<String>,
}

pub async fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut config = DemoConfig::default();
    config.sanitize();
    let engine = BedEngine::new(&config);

    let app_state = AppState {
        engine: Arc::new(Mutex::new(engine)),
        config: Arc::new(Mutex::new(config)),
    };

    spawn_simulation_loop(app_state.clone());

    let web_root = format!("{}/web", env!("CARGO_MANIFEST_DIR"));
    let app = Router::new()
        .route("/api/status", get(handle_get_status))
        .route("/api/view", get(handle_get_view))
        .route("/api/target", post(handle_set_target))
        .route("/api/nudge", post(handle_nudge))
        .route("/api/power", post(handle_toggle_power))
        .route("/api/editing", post(handle_select_editing))
        .route("/api/schedule", post(handle_toggle_schedule))
        .route("/api/schedule/start", put(handle_put_schedule_start))
        .route("/api/settings", put(handle_put_settings))
        .fallback_service(ServeDir::new(web_root))
        .with_state(app_state);

    let port = std::env::var("BEDZONE_HTTP_PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("0.0.0.0:{port}")
        .parse()
        .context("invalid listen address")?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind bed demo server at {addr}"))?;

    info!("bed demo listening on http://{addr}");
    axum::serve(listener, app).await?;
    Ok(())
}

/// Stand-in for external telemetry: each second, drift every actively
/// conditioned zone's sensed temperature toward its target. When a
/// zone reaches its target the engine settles it to off.
fn spawn_simulation_loop(app_state: AppState) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(1));

        loop {
            interval.tick().await;
            let mut engine = app_state.engine.lock().await;

            for side in [Side::Left, Side::Right] {
                let zone = engine.zone(side);
                if !zone.mode.is_active() {
                    continue;
                }
                let Some(target_f) = zone.target_temp_f else {
                    continue;
                };

                let delta = (target_f - zone.current_temp_f)
                    .clamp(-SIM_DRIFT_F_PER_TICK, SIM_DRIFT_F_PER_TICK);
                let next = zone.current_temp_f + delta;

                engine.update_current_temp(side, next);
                if engine.zone(side).mode == ZoneMode::Off {
                    info!("{} zone reached its target and settled off", side.as_str());
                }
            }
        }
    });
}

async fn handle_get_status(State(state): State<AppState>) -> impl IntoResponse {
    let config = state.config.lock().await.clone();
    let engine = state.engine.lock().await;
    Json(engine.status(&config))
}

async fn handle_get_view(State(state): State<AppState>) -> impl IntoResponse {
    let config = state.config.lock().await.clone();
    let engine = state.engine.lock().await;
    Json(bed_view(&engine, &config))
}

async fn handle_set_target(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let Some(side) = parse_side(&params) else {
        return error_response(StatusCode::BAD_REQUEST, "Missing or invalid 'side' parameter");
    };
    let Some(value) = params.get("value") else {
        return error_response(StatusCode::BAD_REQUEST, "Missing 'value' parameter");
    };
    let Ok(value) = value.parse::<f32>() else {
        return error_response(StatusCode::BAD_REQUEST, "Invalid temperature value");
    };

    let unit = state.config.lock().await.unit;
    {
        // Out-of-range values are clamped by the engine, not rejected.
        let mut engine = state.engine.lock().await;
        engine.set_target(side, value, unit);
    }

    handle_get_status(State(state)).await.into_response()
}

async fn handle_nudge(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let Some(side) = parse_side(&params) else {
        return error_response(StatusCode::BAD_REQUEST, "Missing or invalid 'side' parameter");
    };
    let direction = match params.get("dir").map(String::as_str) {
        Some("up") => StepDirection::Up,
        Some("down") => StepDirection::Down,
        _ => return error_response(StatusCode::BAD_REQUEST, "Invalid 'dir'. Use 'up' or 'down'"),
    };

    let unit = state.config.lock().await.unit;
    {
        let mut engine = state.engine.lock().await;
        engine.nudge_target(side, direction, unit);
    }

    handle_get_status(State(state)).await.into_response()
}

async fn handle_toggle_power(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let Some(side) = parse_side(&params) else {
        return error_response(StatusCode::BAD_REQUEST, "Missing or invalid 'side' parameter");
    };

    {
        let mut engine = state.engine.lock().await;
        let mode = engine.toggle_power(side);
        info!("{} zone power toggled, now {}", side.as_str(), mode.as_str());
    }

    handle_get_status(State(state)).await.into_response()
}

async fn handle_select_editing(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let Some(side) = parse_side(&params) else {
        return error_response(StatusCode::BAD_REQUEST, "Missing or invalid 'side' parameter");
    };

    {
        let mut engine = state.engine.lock().await;
        engine.select_editing(side);
    }

    handle_get_status(State(state)).await.into_response()
}

async fn handle_toggle_schedule(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let Some(side) = parse_side(&params) else {
        return error_response(StatusCode::BAD_REQUEST, "Missing or invalid 'side' parameter");
    };
    let running = match params.get("running").map(String::as_str) {
        Some("true") => true,
        Some("false") => false,
        _ => {
            return error_response(
                StatusCode::BAD_REQUEST,
                "Invalid 'running'. Use 'true' or 'false'",
            )
        }
    };

    {
        let mut engine = state.engine.lock().await;
        engine.toggle_schedule(side, running);
    }

    handle_get_status(State(state)).await.into_response()
}

async fn handle_put_schedule_start(
    State(state): State<AppState>,
    Json(update): Json<ScheduleStartUpdate>,
) -> impl IntoResponse {
    let time = match parse_start(&update.time) {
        Ok(time) => time,
        Err(err) => {
            warn!("rejected schedule start update: {err}");
            return error_response(StatusCode::BAD_REQUEST, &err.to_string());
        }
    };

    {
        let mut engine = state.engine.lock().await;
        engine.set_schedule_start(update.side, time);
    }

    handle_get_status(State(state)).await.into_response()
}

async fn handle_put_settings(
    State(state): State<AppState>,
    Json(update): Json<SettingsUpdate>,
) -> impl IntoResponse {
    {
        let mut config = state.config.lock().await;
        if let Some(unit) = update.unit {
            config.unit = unit;
        }
        if let Some(theme) = update.theme {
            config.theme = theme;
        }
        if let Some(name) = update.left_name {
            config.names.left = name;
        }
        if let Some(name) = update.right_name {
            config.names.right = name;
        }
        config.sanitize();
    }

    handle_get_status(State(state)).await.into_response()
}

fn parse_side(params: &HashMap<String, String>) -> Option<Side> {
    match params.get("side").map(String::as_str) {
        Some("left") => Some(Side::Left),
        Some("right") => Some(Side::Right),
        _ => None,
    }
}

fn error_response(status: StatusCode, message: &str) -> axum::response::Response {
    (
        status,
        Json(ErrorBody {
            error: message.to_string(),
        }),
    )
        .into_response()
}
