//! Per-socket protocol state machine.
//!
//! A [`Connection`] moves from unauthenticated to authenticated on `auth_login` (or starts
//! authenticated when the HTTP session already holds a user) and is in at most one room at a
//! time. It turns every text frame into the replies meant for this socket only; messages for
//! the whole room go through the [`RoomHub`](crate::server::ws::hub::RoomHub).

use dioxus_logger::tracing;
use serde::Deserialize;
use tokio::sync::broadcast;

use crate::{
    model::{
        room::MessageKind,
        user::{OnlineUserDto, UserDto},
        ws::{ClientMessage, MessageType, ServerMessage},
    },
    server::{
        error::{protocol::ProtocolError, Error},
        model::app::AppState,
        service::{
            action::ActionService,
            bartender::BartenderService,
            inventory::InventoryService,
            room::{RoomService, DEFAULT_HISTORY_LIMIT},
            user::UserService,
        },
        util::json::parse_json,
    },
};

#[derive(Deserialize)]
struct Envelope {
    #[serde(rename = "type")]
    message_type: String,
}

fn malformed(err: Error) -> ProtocolError {
    match err {
        Error::ParseError(reason) => ProtocolError::MalformedFrame(reason),
        other => ProtocolError::MalformedFrame(other.to_string()),
    }
}

/// Parses a text frame into a client message.
///
/// # Returns
/// - `Ok(ClientMessage)` - A well formed client message
/// - `Err(ProtocolError::MalformedFrame)` - Not JSON, no `type`, or a payload that doesn't
///   match the type
/// - `Err(ProtocolError::UnknownMessageType)` - `type` isn't part of the protocol
/// - `Err(ProtocolError::ServerOnlyMessageType)` - `type` is only sent by the server
pub fn parse_frame(raw: &str) -> Result<ClientMessage, ProtocolError> {
    let envelope: Envelope = parse_json(raw).map_err(malformed)?;

    let message_type = envelope
        .message_type
        .parse::<MessageType>()
        .map_err(ProtocolError::UnknownMessageType)?;
    if !message_type.is_client_message() {
        return Err(ProtocolError::ServerOnlyMessageType(
            message_type.to_string(),
        ));
    }

    parse_json(raw).map_err(malformed)
}

/// Where a connection is in the protocol
#[derive(Clone, Debug, PartialEq)]
pub enum ConnectionState {
    Unauthenticated,
    Authenticated { user: UserDto },
    InRoom { user: UserDto, room_id: i32 },
}

/// Change of room subscription the socket task has to apply
pub enum Subscription {
    Join(broadcast::Receiver<ServerMessage>),
    Leave,
}

pub struct Connection {
    app: AppState,
    state: ConnectionState,
    subscription: Option<Subscription>,
}

impl Connection {
    /// Creates a connection, authenticated when the HTTP session carried a user
    pub fn new(app: AppState, user: Option<UserDto>) -> Self {
        let state = match user {
            Some(user) => ConnectionState::Authenticated { user },
            None => ConnectionState::Unauthenticated,
        };

        Self {
            app,
            state,
            subscription: None,
        }
    }

    pub fn state(&self) -> &ConnectionState {
        &self.state
    }

    pub fn user(&self) -> Option<&UserDto> {
        match &self.state {
            ConnectionState::Unauthenticated => None,
            ConnectionState::Authenticated { user } | ConnectionState::InRoom { user, .. } => {
                Some(user)
            }
        }
    }

    pub fn room_id(&self) -> Option<i32> {
        match &self.state {
            ConnectionState::InRoom { room_id, .. } => Some(*room_id),
            _ => None,
        }
    }

    /// Takes the pending change of room subscription, if any
    pub fn take_subscription(&mut self) -> Option<Subscription> {
        self.subscription.take()
    }

    /// Handles one text frame, returning the replies for this socket.
    ///
    /// Errors never close the connection, they are answered with an `error` message.
    pub async fn handle_frame(&mut self, raw: &str) -> Vec<ServerMessage> {
        let result = match parse_frame(raw) {
            Ok(message) => self.handle(message).await,
            Err(err) => Err(err.into()),
        };

        result.unwrap_or_else(|err| {
            tracing::debug!("Replying with error to WebSocket frame: {}", err);

            vec![ServerMessage::error(err.client_message())]
        })
    }

    /// Leaves the current room, called once the socket is gone
    pub async fn close(&mut self) {
        if let Some(room_id) = self.room_id() {
            self.leave_current_room(room_id).await;
        }
    }

    fn require_user(&self, message_type: MessageType) -> Result<UserDto, ProtocolError> {
        self.user()
            .cloned()
            .ok_or_else(|| ProtocolError::NotAuthenticated(message_type.to_string()))
    }

    fn require_room(&self, message_type: MessageType) -> Result<(UserDto, i32), ProtocolError> {
        match &self.state {
            ConnectionState::InRoom { user, room_id } => Ok((user.clone(), *room_id)),
            ConnectionState::Authenticated { .. } => {
                Err(ProtocolError::NotInRoom(message_type.to_string()))
            }
            ConnectionState::Unauthenticated => {
                Err(ProtocolError::NotAuthenticated(message_type.to_string()))
            }
        }
    }

    async fn leave_current_room(&mut self, room_id: i32) {
        if let Some(user) = self.user().cloned() {
            self.app.hub.leave(room_id, user.id).await;
            self.state = ConnectionState::Authenticated { user };
        }
        self.subscription = Some(Subscription::Leave);
    }

    async fn handle(&mut self, message: ClientMessage) -> Result<Vec<ServerMessage>, Error> {
        let message_type = message.message_type();

        match message {
            ClientMessage::Ping => Ok(vec![ServerMessage::Pong]),
            ClientMessage::AuthLogin { username, avatar } => {
                let user = UserService::new(&self.app.db)
                    .login(&username, &avatar)
                    .await?;

                if let Some(room_id) = self.room_id() {
                    self.leave_current_room(room_id).await;
                }
                tracing::info!(user_id = user.id, "User logged in over WebSocket");
                self.state = ConnectionState::Authenticated { user: user.clone() };

                Ok(vec![ServerMessage::AuthSuccess(user)])
            }
            ClientMessage::JoinRoom { room_id } => {
                let user = self.require_user(message_type)?;

                self.join_room(user, room_id).await
            }
            ClientMessage::LeaveRoom => {
                let (_, room_id) = self.require_room(message_type)?;
                self.leave_current_room(room_id).await;

                Ok(vec![ServerMessage::RoomLeft { room_id }])
            }
            ClientMessage::SendMessage { content } => {
                self.post(message_type, &content, MessageKind::Chat).await
            }
            ClientMessage::SendEmote { content } => {
                self.post(message_type, &content, MessageKind::Emote).await
            }
            ClientMessage::OrderItem {
                bartender_id,
                menu_item_id,
            } => {
                let user = self.require_user(message_type)?;
                let result = BartenderService::new(&self.app.db)
                    .order_item(user.id, bartender_id, menu_item_id)
                    .await?;

                self.app
                    .hub
                    .broadcast(
                        result.response.room_id,
                        ServerMessage::BartenderResponse(result.response.clone()),
                    )
                    .await;

                Ok(vec![ServerMessage::OrderResult(result)])
            }
            ClientMessage::TalkToBartender {
                bartender_id,
                content,
            } => {
                let user = self.require_user(message_type)?;
                let response = BartenderService::new(&self.app.db)
                    .talk(user.id, bartender_id, &content)
                    .await?;

                let room_id = response.room_id;
                let message = ServerMessage::BartenderResponse(response);
                self.app.hub.broadcast(room_id, message.clone()).await;

                // Users outside the bartender's room don't receive the broadcast
                if self.room_id() == Some(room_id) {
                    Ok(vec![])
                } else {
                    Ok(vec![message])
                }
            }
            ClientMessage::InventoryList => {
                let user = self.require_user(message_type)?;
                let items = InventoryService::new(&self.app.db).list(user.id).await?;

                Ok(vec![ServerMessage::InventoryUpdate { items }])
            }
            ClientMessage::InventoryEquipItem { inventory_id } => {
                let user = self.require_user(message_type)?;
                let items = InventoryService::new(&self.app.db)
                    .equip(user.id, inventory_id)
                    .await?;

                Ok(vec![ServerMessage::InventoryUpdate { items }])
            }
            ClientMessage::InventoryUnequipItem { inventory_id } => {
                let user = self.require_user(message_type)?;
                let items = InventoryService::new(&self.app.db)
                    .unequip(user.id, inventory_id)
                    .await?;

                Ok(vec![ServerMessage::InventoryUpdate { items }])
            }
            ClientMessage::GameAction(request) => {
                let user = self.require_user(message_type)?;
                let result = ActionService::new(&self.app.db)
                    .dispatch(user.id, &request.action, request.data)
                    .await?;

                Ok(vec![ServerMessage::ActionResult(result)])
            }
        }
    }

    async fn join_room(
        &mut self,
        user: UserDto,
        room_id: i32,
    ) -> Result<Vec<ServerMessage>, Error> {
        let room_service = RoomService::new(&self.app.db, &self.app.hub);

        let mut room = room_service.get_room(room_id).await?;
        let bartenders = BartenderService::new(&self.app.db)
            .list_for_room(room_id)
            .await?;
        let history = room_service.history(room_id, DEFAULT_HISTORY_LIMIT).await?;

        if self.room_id() != Some(room_id) {
            let receiver = self
                .app
                .hub
                .join(room_id, room.capacity, OnlineUserDto::from(user.clone()))
                .await?;

            if let Some(previous) = self.room_id() {
                self.app.hub.leave(previous, user.id).await;
            }

            self.subscription = Some(Subscription::Join(receiver));
            self.state = ConnectionState::InRoom {
                user: user.clone(),
                room_id,
            };
        }

        UserService::new(&self.app.db).touch(user.id).await?;

        let users = self.app.hub.members(room_id).await;
        room.online = users.len();

        Ok(vec![ServerMessage::RoomJoined {
            room,
            users,
            bartenders,
            history,
        }])
    }

    async fn post(
        &mut self,
        message_type: MessageType,
        content: &str,
        kind: MessageKind,
    ) -> Result<Vec<ServerMessage>, Error> {
        let (user, room_id) = self.require_room(message_type)?;

        let message = RoomService::new(&self.app.db, &self.app.hub)
            .post_message(room_id, user.id, content, kind)
            .await?;

        // The sender receives their own message through the room broadcast
        self.app
            .hub
            .broadcast(room_id, ServerMessage::NewMessage(message))
            .await;

        Ok(vec![])
    }
}
