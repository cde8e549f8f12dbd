use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
};
use dioxus_logger::tracing;
use futures::{SinkExt, StreamExt};
use tokio::sync::{
    broadcast::{self, error::RecvError},
    mpsc,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, user::UserDto, ws::ServerMessage},
    server::{
        error::Error,
        model::{app::AppState, session::user::SessionUser},
        service::user::UserService,
        util::json::to_json,
        ws::connection::{Connection, Subscription},
    },
};

pub static WS_TAG: &str = "ws";

/// Outgoing messages buffered per socket
const OUTBOUND_BUFFER: usize = 64;

/// Upgrade to the tavern's WebSocket protocol
///
/// Frames are JSON text frames shaped as `{ "type": ..., "payload": ... }`. Connections from a
/// session with a logged in user start authenticated, others must send `auth_login` first.
#[utoipa::path(
    get,
    path = "/ws",
    tag = WS_TAG,
    responses(
        (status = 101, description = "Switching to the WebSocket protocol"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = match SessionUser::user_id(&session).await? {
        Some(user_id) => UserService::new(&state.db).get_user(user_id).await?,
        None => None,
    };

    Ok(ws.on_upgrade(move |socket| run_connection(socket, state, user)))
}

/// Receives from the current room, or waits forever outside of a room
async fn recv_room(
    receiver: &mut Option<broadcast::Receiver<ServerMessage>>,
) -> Result<ServerMessage, RecvError> {
    match receiver {
        Some(receiver) => receiver.recv().await,
        None => std::future::pending().await,
    }
}

/// Queues replies for the writer task, returns `false` once the writer has stopped
async fn forward_replies(out_tx: &mpsc::Sender<ServerMessage>, replies: Vec<ServerMessage>) -> bool {
    for reply in replies {
        if out_tx.send(reply).await.is_err() {
            return false;
        }
    }

    true
}

async fn run_connection(socket: WebSocket, state: AppState, user: Option<UserDto>) {
    let (mut ws_w, mut ws_r) = socket.split();
    let (out_tx, mut out_rx) = mpsc::channel::<ServerMessage>(OUTBOUND_BUFFER);

    let writer = tokio::spawn(async move {
        while let Some(message) = out_rx.recv().await {
            let text = match to_json(&message) {
                Ok(text) => text,
                Err(e) => {
                    tracing::error!("Failed to serialize {} message: {}", message.message_type(), e);
                    continue;
                }
            };

            if ws_w.send(Message::Text(text.into())).await.is_err() {
                break;
            }
        }
    });

    let mut connection = Connection::new(state, user);
    let mut room_rx: Option<broadcast::Receiver<ServerMessage>> = None;

    loop {
        tokio::select! {
            frame = ws_r.next() => {
                let replies = match frame {
                    Some(Ok(Message::Text(text))) => connection.handle_frame(text.as_str()).await,
                    Some(Ok(Message::Binary(_))) => {
                        vec![ServerMessage::error("Binary frames are not supported")]
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Ok(_)) => continue,
                    Some(Err(e)) => {
                        tracing::debug!("WebSocket receive failed: {}", e);
                        break;
                    }
                };

                match connection.take_subscription() {
                    Some(Subscription::Join(receiver)) => room_rx = Some(receiver),
                    Some(Subscription::Leave) => room_rx = None,
                    None => {}
                }

                if !forward_replies(&out_tx, replies).await {
                    break;
                }
            }
            broadcast = recv_room(&mut room_rx) => {
                match broadcast {
                    Ok(message) => {
                        if out_tx.send(message).await.is_err() {
                            break;
                        }
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!("WebSocket connection lagged behind its room by {} messages", skipped);
                    }
                    Err(RecvError::Closed) => room_rx = None,
                }
            }
        }
    }

    connection.close().await;

    drop(out_tx);
    let _ = writer.await;
}
