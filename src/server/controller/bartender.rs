use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        bartender::{MenuItemDto, MoodDto},
    },
    server::{
        controller::util::get_user::get_user_from_session, error::Error, model::app::AppState,
        service::bartender::BartenderService,
    },
};

pub static BARTENDER_TAG: &str = "bartender";

/// A bartender's menu, cheapest first
#[utoipa::path(
    get,
    path = "/api/bartenders/{bartender_id}/menu",
    tag = BARTENDER_TAG,
    params(("bartender_id" = i32, Path, description = "ID of the bartender")),
    responses(
        (status = 200, description = "Success when retrieving the menu", body = Vec<MenuItemDto>),
        (status = 404, description = "Bartender not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_menu(
    State(state): State<AppState>,
    Path(bartender_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let menu = BartenderService::new(&state.db).menu(bartender_id).await?;

    Ok((StatusCode::OK, Json(menu)))
}

/// How a bartender feels about the logged in user, with their recent memories of them
#[utoipa::path(
    get,
    path = "/api/bartenders/{bartender_id}/mood",
    tag = BARTENDER_TAG,
    params(("bartender_id" = i32, Path, description = "ID of the bartender")),
    responses(
        (status = 200, description = "Success when retrieving the mood", body = MoodDto),
        (status = 404, description = "User or bartender not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_mood(
    State(state): State<AppState>,
    session: Session,
    Path(bartender_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let mood = BartenderService::new(&state.db)
        .mood(user.id, bartender_id)
        .await?;

    Ok((StatusCode::OK, Json(mood)))
}
