//! JSON REST handlers for parking spots.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use serde::{Deserialize, Serialize};

use spothub_app::ports::{SpotMap, SpotRepository, UserRepository};
use spothub_domain::id::SpotId;
use spothub_domain::record::Keyed;
use spothub_domain::spot::Spot;

use crate::error::ApiError;
use crate::messages;
use crate::state::AppState;

/// Form-urlencoded body for creating a spot. Values are kept as text.
#[derive(Deserialize)]
pub struct CreateSpotForm {
    #[serde(rename = "ownerId")]
    pub owner_id: Option<String>,
    pub address: Option<String>,
    pub zipcode: Option<String>,
    pub hour_price: Option<String>,
    pub day_price: Option<String>,
    pub spots: Option<String>,
}

impl From<CreateSpotForm> for Spot {
    fn from(form: CreateSpotForm) -> Self {
        Self {
            owner_id: form.owner_id,
            address: form.address,
            zipcode: form.zipcode,
            hour_price: form.hour_price,
            day_price: form.day_price,
            spots: form.spots,
        }
    }
}

/// `{ "message": ... }` body for delete outcomes.
#[derive(Serialize)]
pub struct MessageBody {
    pub message: String,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<SpotMap>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Spot>),
    /// The id is unknown; the body is empty.
    NoContent,
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Keyed<SpotId, Spot>>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Removed(Json<MessageBody>),
    NotFound(Json<MessageBody>),
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Removed(json) => json.into_response(),
            Self::NotFound(json) => (StatusCode::NOT_FOUND, json).into_response(),
        }
    }
}

/// Possible responses from the zipcode endpoint.
pub enum LocationResponse {
    /// `[id, spot]` pairs.
    Ok(Json<Vec<(SpotId, Spot)>>),
}

impl IntoResponse for LocationResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /spots`
pub async fn list<SR, UR>(
    State(state): State<AppState<SR, UR>>,
) -> Result<ListResponse, ApiError>
where
    SR: SpotRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    let spots = state.spot_service.list_spots().await?;
    Ok(ListResponse::Ok(Json(spots)))
}

/// `GET /spots/:id`
pub async fn get<SR, UR>(
    State(state): State<AppState<SR, UR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    SR: SpotRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    let spot_id = SpotId::from(id);
    Ok(match state.spot_service.get_spot(&spot_id).await? {
        Some(spot) => GetResponse::Ok(Json(spot)),
        None => GetResponse::NoContent,
    })
}

/// `POST /spots`
pub async fn create<SR, UR>(
    State(state): State<AppState<SR, UR>>,
    Form(form): Form<CreateSpotForm>,
) -> Result<CreateResponse, ApiError>
where
    SR: SpotRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    let created = state.spot_service.create_spot(Spot::from(form)).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `DELETE /spots/:id`
pub async fn delete<SR, UR>(
    State(state): State<AppState<SR, UR>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    SR: SpotRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    let spot_id = SpotId::from(id);
    Ok(match state.spot_service.delete_spot(&spot_id).await? {
        Some(_) => DeleteResponse::Removed(Json(MessageBody {
            message: messages::spot_removed(&spot_id),
        })),
        None => DeleteResponse::NotFound(Json(MessageBody {
            message: messages::spot_missing(&spot_id),
        })),
    })
}

/// `GET /spots/location/:zipcode`
pub async fn by_zipcode<SR, UR>(
    State(state): State<AppState<SR, UR>>,
    Path(zipcode): Path<String>,
) -> Result<LocationResponse, ApiError>
where
    SR: SpotRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    let spots = state.spot_service.spots_in_zipcode(&zipcode).await?;
    Ok(LocationResponse::Ok(Json(spots)))
}
