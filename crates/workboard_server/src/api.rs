//! HTTP handlers for the record resources.
//!
//! # Responsibility
//! - Map `/people`, `/work-orders` and `/bids` requests onto record services.
//! - Decode JSON bodies and path ids into typed values before any storage work.
//!
//! # Invariants
//! - Write bodies must be `application/json`; anything else is a 400.
//! - Path ids must be positive integers; anything else is a 400.
//! - PUT is a full overwrite of the stored record.

use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::{FromRequest, FromRequestParts, State};
use axum::http::{StatusCode, Uri};
use axum::routing::get;
use axum::{Json, Router};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use workboard_core::{
    core_version, EntityKind, Record, RecordId, RecordService, SqliteRecordRepository,
};

/// JSON body extractor that reports rejections through the error envelope.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

/// Record id path segment.
#[derive(Debug, Deserialize, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct IdPath(pub i64);

impl IdPath {
    fn positive(self) -> Result<RecordId, ApiError> {
        if self.0 > 0 {
            Ok(self.0)
        } else {
            Err(ApiError::MalformedRequest(format!(
                "record id must be a positive integer, got {}",
                self.0
            )))
        }
    }
}

/// Body returned by create, update and delete.
#[derive(Debug, Serialize)]
pub struct Confirmation {
    pub id: RecordId,
    pub message: String,
}

impl Confirmation {
    fn new(kind: EntityKind, id: RecordId, action: &str) -> Self {
        Self {
            id,
            message: format!("{kind} with id {id} {action}"),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// URL segment serving one entity kind.
pub fn resource_path(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Person => "/people",
        EntityKind::WorkOrder => "/work-orders",
        EntityKind::Bid => "/bids",
    }
}

/// Adds the five CRUD routes for `T` to `router`.
pub fn resource_routes<T>(router: Router<AppState>) -> Router<AppState>
where
    T: Record + Serialize + Send + 'static,
    T::Draft: DeserializeOwned + Send + 'static,
{
    let collection = resource_path(T::KIND);
    let member = format!("{collection}/:id");

    router
        .route(collection, get(list_records::<T>).post(create_record::<T>))
        .route(
            &member,
            get(get_record::<T>)
                .put(update_record::<T>)
                .delete(delete_record::<T>),
        )
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: core_version(),
    })
}

pub async fn unknown_route(uri: Uri) -> ApiError {
    ApiError::UnknownRoute(uri.path().to_string())
}

async fn list_records<T>(State(state): State<AppState>) -> Result<Json<Vec<T>>, ApiError>
where
    T: Record + Serialize + Send + 'static,
{
    let records = state
        .with_connection(|conn| service::<T>(conn).list())
        .await?;
    Ok(Json(records))
}

async fn get_record<T>(
    State(state): State<AppState>,
    path: IdPath,
) -> Result<Json<T>, ApiError>
where
    T: Record + Serialize + Send + 'static,
{
    let id = path.positive()?;
    let record = state
        .with_connection(move |conn| service::<T>(conn).get(id))
        .await?;
    Ok(Json(record))
}

async fn create_record<T>(
    State(state): State<AppState>,
    JsonBody(draft): JsonBody<T::Draft>,
) -> Result<(StatusCode, Json<Confirmation>), ApiError>
where
    T: Record + Serialize + Send + 'static,
    T::Draft: DeserializeOwned + Send + 'static,
{
    let record = state
        .with_connection(move |conn| service::<T>(conn).create(&draft))
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(Confirmation::new(T::KIND, record.id(), "created")),
    ))
}

async fn update_record<T>(
    State(state): State<AppState>,
    path: IdPath,
    JsonBody(draft): JsonBody<T::Draft>,
) -> Result<Json<Confirmation>, ApiError>
where
    T: Record + Serialize + Send + 'static,
    T::Draft: DeserializeOwned + Send + 'static,
{
    let id = path.positive()?;
    let record = state
        .with_connection(move |conn| service::<T>(conn).update(id, &draft))
        .await?;
    Ok(Json(Confirmation::new(T::KIND, record.id(), "updated")))
}

async fn delete_record<T>(
    State(state): State<AppState>,
    path: IdPath,
) -> Result<Json<Confirmation>, ApiError>
where
    T: Record + Serialize + Send + 'static,
{
    let id = path.positive()?;
    state
        .with_connection(move |conn| service::<T>(conn).delete(id))
        .await?;
    Ok(Json(Confirmation::new(T::KIND, id, "deleted")))
}

fn service<T: Record>(
    conn: &rusqlite::Connection,
) -> RecordService<T, SqliteRecordRepository<'_, T>> {
    RecordService::new(SqliteRecordRepository::new(conn))
}
