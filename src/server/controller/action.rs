use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        action::{ActionRequestDto, ActionResultDto},
        api::ErrorDto,
    },
    server::{
        controller::util::get_user::get_user_from_session, error::Error, model::app::AppState,
        service::action::ActionService,
    },
};

pub static ACTION_TAG: &str = "action";

/// Run a game action for the logged in user
#[utoipa::path(
    post,
    path = "/api/actions",
    tag = ACTION_TAG,
    request_body = ActionRequestDto,
    responses(
        (status = 200, description = "Action applied", body = ActionResultDto),
        (status = 400, description = "Unknown action, invalid data or a broken tavern rule", body = ErrorDto),
        (status = 404, description = "User or item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn dispatch_action(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<ActionRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let result = ActionService::new(&state.db)
        .dispatch(user.id, &request.action, request.data)
        .await?;

    Ok((StatusCode::OK, Json(result)))
}
