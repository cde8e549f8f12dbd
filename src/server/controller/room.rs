use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        bartender::BartenderDto,
        room::{MessageDto, RoomDto},
    },
    server::{
        error::Error,
        model::app::AppState,
        service::{
            bartender::BartenderService,
            room::{RoomService, DEFAULT_HISTORY_LIMIT},
        },
    },
};

pub static ROOM_TAG: &str = "room";

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct HistoryParams {
    /// Number of messages to return, at most 200
    pub limit: Option<u64>,
}

/// List every room with the number of users currently inside
#[utoipa::path(
    get,
    path = "/api/rooms",
    tag = ROOM_TAG,
    responses(
        (status = 200, description = "Success when listing rooms", body = Vec<RoomDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_rooms(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let rooms = RoomService::new(&state.db, &state.hub).list_rooms().await?;

    Ok((StatusCode::OK, Json(rooms)))
}

/// Recent messages of a room, oldest first
#[utoipa::path(
    get,
    path = "/api/rooms/{room_id}/messages",
    tag = ROOM_TAG,
    params(
        ("room_id" = i32, Path, description = "ID of the room"),
        HistoryParams
    ),
    responses(
        (status = 200, description = "Success when retrieving messages", body = Vec<MessageDto>),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_room_messages(
    State(state): State<AppState>,
    Path(room_id): Path<i32>,
    Query(params): Query<HistoryParams>,
) -> Result<impl IntoResponse, Error> {
    let messages = RoomService::new(&state.db, &state.hub)
        .history(room_id, params.limit.unwrap_or(DEFAULT_HISTORY_LIMIT))
        .await?;

    Ok((StatusCode::OK, Json(messages)))
}

/// Bartenders working in a room
#[utoipa::path(
    get,
    path = "/api/rooms/{room_id}/bartenders",
    tag = ROOM_TAG,
    params(("room_id" = i32, Path, description = "ID of the room")),
    responses(
        (status = 200, description = "Success when retrieving bartenders", body = Vec<BartenderDto>),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_room_bartenders(
    State(state): State<AppState>,
    Path(room_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let bartenders = BartenderService::new(&state.db)
        .list_for_room(room_id)
        .await?;

    Ok((StatusCode::OK, Json(bartenders)))
}
