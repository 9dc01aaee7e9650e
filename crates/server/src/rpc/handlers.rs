//! HTTP request handlers.

use super::state::DashboardState;
use super::types::*;
use crate::pass::{run_pass, PassError, PassSummary};
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use epochview_table::{render_text, EpochValidatorsTable};
use tracing::{error, info, warn};

/// Handler for `GET /health` - liveness probe.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse::default())
}

/// Handler for `GET /api/v1/status` - dashboard status.
pub async fn status_handler(State(state): State<DashboardState>) -> impl IntoResponse {
    Json(DashboardStatusResponse {
        uptime_secs: state.start_time.elapsed().as_secs(),
        version: option_env!("EPOCHVIEW_VERSION")
            .unwrap_or("localdev")
            .to_string(),
        source: state.source.describe(),
        last_pass: state.last_pass(),
    })
}

/// Handler for `GET /api/v1/epoch-validators` - the table as JSON.
pub async fn epoch_validators_handler(State(state): State<DashboardState>) -> Response {
    match pass(&state).await {
        Ok(table) => Json(table).into_response(),
        Err(response) => response,
    }
}

/// Handler for `GET /epoch-validators` - the table as plain text.
pub async fn epoch_validators_text_handler(State(state): State<DashboardState>) -> Response {
    match pass(&state).await {
        Ok(table) => (
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            render_text(&table),
        )
            .into_response(),
        Err(response) => response,
    }
}

/// Run a pass off the async runtime and record its summary.
async fn pass(state: &DashboardState) -> Result<EpochValidatorsTable, Response> {
    let source = state.source.clone();
    let result = tokio::task::spawn_blocking(move || run_pass(source.as_ref())).await;

    match result {
        Ok(Ok(table)) => {
            let summary = PassSummary::of(&table);
            info!(
                epochs = summary.epochs,
                validators = summary.validators,
                "Served epoch validators"
            );
            state.record_pass(summary);
            Ok(table)
        }
        Ok(Err(e)) => {
            warn!(error = %e, "Epoch validators pass failed");
            Err(error_response(pass_status(&e), e.to_string()))
        }
        Err(e) => {
            error!(error = ?e, "Epoch validators pass panicked");
            Err(error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal error".to_string(),
            ))
        }
    }
}

fn pass_status(error: &PassError) -> StatusCode {
    match error {
        PassError::Source(_) => StatusCode::BAD_GATEWAY,
        PassError::Assemble(_) => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

fn error_response(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorResponse { error })).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{FileSource, StaticSource};
    use axum::{body::Body, http::Request, Router};
    use epochview_test_helpers::fixtures::sample_snapshot;
    use epochview_test_helpers::SnapshotBuilder;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn sample_state() -> DashboardState {
        DashboardState::new(Arc::new(StaticSource::new("sample", sample_snapshot())))
    }

    async fn get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_health_handler() {
        let app = Router::new()
            .route("/health", axum::routing::get(health_handler))
            .with_state(sample_state());

        let response = get(app, "/health").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_epoch_validators_records_pass() {
        let state = sample_state();
        let app = Router::new()
            .route("/ev", axum::routing::get(epoch_validators_handler))
            .with_state(state.clone());

        let response = get(app, "/ev").await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["rows"][0]["account_id"], "node0.unc");
        assert_eq!(
            state.last_pass(),
            Some(PassSummary {
                epochs: 5,
                validators: 8,
            })
        );
    }

    #[tokio::test]
    async fn test_source_failure_is_bad_gateway() {
        let state = DashboardState::new(Arc::new(FileSource::new("/nonexistent/epoch.json")));
        let app = Router::new()
            .route("/ev", axum::routing::get(epoch_validators_handler))
            .with_state(state.clone());

        let response = get(app, "/ev").await;
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let json = body_json(response).await;
        assert!(json["error"]
            .as_str()
            .unwrap()
            .starts_with("failed to read snapshot /nonexistent/epoch.json"));
        assert_eq!(state.last_pass(), None);
    }

    #[tokio::test]
    async fn test_malformed_snapshot_is_unprocessable() {
        let snapshot = SnapshotBuilder::new(3).without_validator_info().build();
        let state = DashboardState::new(Arc::new(StaticSource::new("bad", snapshot)));
        let app = Router::new()
            .route("/ev", axum::routing::get(epoch_validators_text_handler))
            .with_state(state);

        let response = get(app, "/ev").await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = body_json(response).await;
        assert_eq!(
            json["error"],
            "malformed snapshot: snapshot has no current epoch validator info (3 epochs in window)"
        );
    }

    #[tokio::test]
    async fn test_text_handler() {
        let app = Router::new()
            .route("/ev", axum::routing::get(epoch_validators_text_handler))
            .with_state(sample_state());

        let response = get(app, "/ev").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert_eq!(text.lines().count(), 2 + 8);
        assert!(text.lines().nth(2).unwrap().starts_with("node0.unc"));
    }
}
