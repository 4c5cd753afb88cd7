//! REST handlers for users.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use serde::Deserialize;

use spothub_app::ports::{SpotRepository, UserMap, UserRepository};
use spothub_domain::error::ValidationError;
use spothub_domain::id::UserId;
use spothub_domain::record::Keyed;
use spothub_domain::user::{User, UserPatch, parse_flag};

use crate::error::ApiError;
use crate::messages;
use crate::state::AppState;

/// Form-urlencoded body for creating a user.
#[derive(Deserialize)]
pub struct CreateUserForm {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub phone: Option<String>,
    /// `"true"` or `"false"`; absent means `false`.
    #[serde(rename = "isFirm")]
    pub is_firm: Option<String>,
}

impl TryFrom<CreateUserForm> for User {
    type Error = ValidationError;

    fn try_from(form: CreateUserForm) -> Result<Self, Self::Error> {
        let is_firm = form
            .is_firm
            .as_deref()
            .map(|raw| parse_flag("isFirm", raw))
            .transpose()?
            .unwrap_or(false);

        Ok(Self {
            firstname: form.firstname,
            lastname: form.lastname,
            email: form.email,
            password: form.password,
            phone: form.phone,
            is_firm,
        })
    }
}

/// Form-urlencoded body for a partial user update.
#[derive(Deserialize)]
pub struct UpdateUserForm {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
}

impl From<UpdateUserForm> for UserPatch {
    fn from(form: UpdateUserForm) -> Self {
        Self {
            firstname: form.firstname,
            lastname: form.lastname,
            email: form.email,
        }
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<UserMap>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and update endpoints.
pub enum GetResponse {
    Ok(Json<User>),
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
    Created(Json<Keyed<UserId, User>>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint. Both carry plain text.
pub enum DeleteResponse {
    Removed(String),
    NotFound(String),
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Removed(text) => text.into_response(),
            Self::NotFound(text) => (StatusCode::NOT_FOUND, text).into_response(),
        }
    }
}

/// `GET /users`
pub async fn list<SR, UR>(
    State(state): State<AppState<SR, UR>>,
) -> Result<ListResponse, ApiError>
where
    SR: SpotRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    let users = state.user_service.list_users().await?;
    Ok(ListResponse::Ok(Json(users)))
}

/// `GET /users/:id`
pub async fn get<SR, UR>(
    State(state): State<AppState<SR, UR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    SR: SpotRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    let user_id = UserId::from(id);
    Ok(match state.user_service.get_user(&user_id).await? {
        Some(user) => GetResponse::Ok(Json(user)),
        None => GetResponse::NoContent,
    })
}

/// `POST /users`
pub async fn create<SR, UR>(
    State(state): State<AppState<SR, UR>>,
    Form(form): Form<CreateUserForm>,
) -> Result<CreateResponse, ApiError>
where
    SR: SpotRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    let user = User::try_from(form)?;
    let created = state.user_service.create_user(user).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PATCH /users/:id`
pub async fn update<SR, UR>(
    State(state): State<AppState<SR, UR>>,
    Path(id): Path<String>,
    Form(form): Form<UpdateUserForm>,
) -> Result<GetResponse, ApiError>
where
    SR: SpotRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    let user_id = UserId::from(id);
    let patch = UserPatch::from(form);
    Ok(match state.user_service.update_user(&user_id, patch).await? {
        Some(user) => GetResponse::Ok(Json(user)),
        None => GetResponse::NoContent,
    })
}

/// `DELETE /users/:id`
pub async fn delete<SR, UR>(
    State(state): State<AppState<SR, UR>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    SR: SpotRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    let user_id = UserId::from(id);
    Ok(match state.user_service.delete_user(&user_id).await? {
        Some(_) => DeleteResponse::Removed(messages::user_removed(&user_id)),
        None => DeleteResponse::NotFound(messages::user_missing(&user_id)),
    })
}
