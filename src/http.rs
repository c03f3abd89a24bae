use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use crate::{
    app::{PracticeApp, PracticeError},
    catalog::{numbered_exercises, Example, EXAMPLES, EXERCISES},
    console_page,
    session::Session,
    storage::{DataValue, TableSchema},
};

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    kind: &'static str,
    warning: bool,
    error: String,
}

#[derive(Serialize)]
struct QueryResponse {
    success: bool,
    columns: Vec<String>,
    rows: Vec<Vec<DataValue>>,
    row_count: usize,
    message: String,
}

#[derive(Serialize)]
struct ResetResponse {
    success: bool,
    message: &'static str,
}

#[derive(Serialize)]
struct SchemaResponse {
    success: bool,
    tables: Vec<TableSchema>,
}

#[derive(Serialize)]
struct ExercisesResponse {
    exercises: &'static [&'static str],
    text: String,
}

impl IntoResponse for PracticeError {
    fn into_response(self) -> Response {
        let status = match self {
            PracticeError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::BAD_REQUEST,
        };
        let body = ErrorBody {
            success: false,
            kind: self.kind(),
            warning: self.is_warning(),
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

pub fn create_router(app: PracticeApp) -> Router {
    Router::new()
        .route("/", get(console_page::index))
        .route("/health", get(health))
        .route("/api/examples", get(list_examples))
        .route("/api/exercises", get(list_exercises))
        .route("/api/schema", get(schema))
        .route("/api/session/example", post(load_example))
        .route("/api/query", post(run_query))
        .route("/api/reset", post(reset))
        .with_state(app)
}

/// Store calls are synchronous; keep them off the async worker threads.
async fn blocking<T, F>(f: F) -> Result<T, PracticeError>
where
    F: FnOnce() -> Result<T, PracticeError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| PracticeError::StoreUnavailable(e.to_string()))?
}

async fn health() -> &'static str {
    "ok"
}

async fn list_examples() -> Json<&'static [Example]> {
    Json(EXAMPLES)
}

async fn list_exercises() -> Json<ExercisesResponse> {
    Json(ExercisesResponse {
        exercises: EXERCISES,
        text: numbered_exercises(),
    })
}

async fn schema(State(app): State<PracticeApp>) -> Result<Json<SchemaResponse>, PracticeError> {
    let tables = blocking(move || app.schema()).await?;
    Ok(Json(SchemaResponse {
        success: true,
        tables,
    }))
}

async fn load_example(Json(mut session): Json<Session>) -> Json<Session> {
    if let Some(choice) = session.example_choice.clone() {
        session.load_example(&choice);
    }
    Json(session)
}

async fn run_query(
    State(app): State<PracticeApp>,
    Json(session): Json<Session>,
) -> Result<Json<QueryResponse>, PracticeError> {
    let output = blocking(move || app.run(&session)).await?;
    Ok(Json(QueryResponse {
        success: true,
        row_count: output.result.row_count(),
        columns: output.result.columns,
        rows: output.result.rows,
        message: output.message,
    }))
}

async fn reset(State(app): State<PracticeApp>) -> Result<Json<ResetResponse>, PracticeError> {
    let message = blocking(move || app.reset()).await?;
    tracing::info!("Sample database reset from the web UI");
    Ok(Json(ResetResponse {
        success: true,
        message,
    }))
}
