//! In-memory registry of who is present in which room.
//!
//! Each occupied room owns a [`broadcast`] channel; every connection inside the room holds a
//! receiver for it. A user connected from several sockets counts once towards capacity and is
//! only announced as joined or left on their first and last connection.

use std::{collections::HashMap, sync::Arc};

use dioxus_logger::tracing;
use tokio::sync::{broadcast, RwLock};

use crate::{
    model::{user::OnlineUserDto, ws::ServerMessage},
    server::error::tavern::TavernError,
};

/// Messages buffered per room before slow receivers start lagging
pub const ROOM_CHANNEL_CAPACITY: usize = 256;

struct Presence {
    user: OnlineUserDto,
    connections: usize,
}

struct RoomChannel {
    sender: broadcast::Sender<ServerMessage>,
    members: HashMap<i32, Presence>,
}

impl RoomChannel {
    fn new() -> Self {
        let (sender, _) = broadcast::channel(ROOM_CHANNEL_CAPACITY);

        Self {
            sender,
            members: HashMap::new(),
        }
    }

    fn send(&self, message: ServerMessage) -> usize {
        // Err only means nobody is subscribed
        self.sender.send(message).unwrap_or(0)
    }
}

/// Shared handle to the room registry, cheap to clone
#[derive(Clone, Default)]
pub struct RoomHub {
    rooms: Arc<RwLock<HashMap<i32, RoomChannel>>>,
}

impl RoomHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a user's connection to a room and subscribes it to the room's messages.
    ///
    /// Other members receive `user_joined` before the new receiver is created, so the joining
    /// connection doesn't see its own arrival.
    ///
    /// # Returns
    /// - `Ok(Receiver)` - Receiver for messages broadcast to the room
    /// - `Err(TavernError::RoomFull)` - The room already holds `capacity` distinct users
    pub async fn join(
        &self,
        room_id: i32,
        capacity: i32,
        user: OnlineUserDto,
    ) -> Result<broadcast::Receiver<ServerMessage>, TavernError> {
        let mut rooms = self.rooms.write().await;
        let channel = rooms.entry(room_id).or_insert_with(RoomChannel::new);

        if let Some(presence) = channel.members.get_mut(&user.id) {
            presence.connections += 1;

            return Ok(channel.sender.subscribe());
        }

        let capacity = usize::try_from(capacity).unwrap_or(0);
        if channel.members.len() >= capacity {
            if channel.members.is_empty() {
                rooms.remove(&room_id);
            }

            return Err(TavernError::RoomFull(room_id));
        }

        tracing::debug!(room_id, user_id = user.id, "User joined room");

        channel.send(ServerMessage::UserJoined {
            room_id,
            user: user.clone(),
        });
        channel.members.insert(
            user.id,
            Presence {
                user,
                connections: 1,
            },
        );

        Ok(channel.sender.subscribe())
    }

    /// Removes one of a user's connections from a room.
    ///
    /// Returns `true` when it was the user's last connection, in which case the remaining
    /// members receive `user_left`.
    pub async fn leave(&self, room_id: i32, user_id: i32) -> bool {
        let mut rooms = self.rooms.write().await;
        let Some(channel) = rooms.get_mut(&room_id) else {
            return false;
        };
        let Some(presence) = channel.members.get_mut(&user_id) else {
            return false;
        };

        presence.connections -= 1;
        if presence.connections > 0 {
            return false;
        }

        channel.members.remove(&user_id);
        tracing::debug!(room_id, user_id, "User left room");

        if channel.members.is_empty() {
            rooms.remove(&room_id);
        } else {
            channel.send(ServerMessage::UserLeft { room_id, user_id });
        }

        true
    }

    /// Sends a message to every connection in the room, returns how many received it
    pub async fn broadcast(&self, room_id: i32, message: ServerMessage) -> usize {
        let rooms = self.rooms.read().await;

        rooms
            .get(&room_id)
            .map(|channel| channel.send(message))
            .unwrap_or(0)
    }

    /// Number of distinct users in the room
    pub async fn online_count(&self, room_id: i32) -> usize {
        let rooms = self.rooms.read().await;

        rooms
            .get(&room_id)
            .map(|channel| channel.members.len())
            .unwrap_or(0)
    }

    /// Users present in the room, ordered by ID
    pub async fn members(&self, room_id: i32) -> Vec<OnlineUserDto> {
        let rooms = self.rooms.read().await;

        let mut members: Vec<OnlineUserDto> = rooms
            .get(&room_id)
            .map(|channel| {
                channel
                    .members
                    .values()
                    .map(|presence| presence.user.clone())
                    .collect()
            })
            .unwrap_or_default();
        members.sort_by_key(|user| user.id);

        members
    }
}

#[cfg(test)]
mod tests {
    use tokio::sync::broadcast::error::TryRecvError;

    use crate::{
        model::{user::OnlineUserDto, ws::ServerMessage},
        server::{error::tavern::TavernError, ws::hub::RoomHub},
    };

    fn user(id: i32) -> OnlineUserDto {
        OnlineUserDto {
            id,
            username: format!("user{}", id),
            avatar: "elf".to_string(),
        }
    }

    #[tokio::test]
    async fn announces_joins_to_existing_members() {
        let hub = RoomHub::new();

        let mut first = hub.join(1, 10, user(1)).await.unwrap();
        let mut second = hub.join(1, 10, user(2)).await.unwrap();

        assert_eq!(
            first.try_recv(),
            Ok(ServerMessage::UserJoined {
                room_id: 1,
                user: user(2)
            })
        );
        assert_eq!(second.try_recv(), Err(TryRecvError::Empty));
        assert_eq!(hub.online_count(1).await, 2);
        assert_eq!(hub.members(1).await, vec![user(1), user(2)]);
    }

    #[tokio::test]
    async fn enforces_capacity() {
        let hub = RoomHub::new();

        hub.join(1, 1, user(1)).await.unwrap();
        let result = hub.join(1, 1, user(2)).await;

        assert!(matches!(result, Err(TavernError::RoomFull(1))));
        assert_eq!(hub.online_count(1).await, 1);
    }

    #[tokio::test]
    async fn zero_capacity_room_stays_empty() {
        let hub = RoomHub::new();

        assert!(hub.join(1, 0, user(1)).await.is_err());
        assert_eq!(hub.online_count(1).await, 0);
    }

    #[tokio::test]
    async fn second_connection_of_same_user_does_not_count() {
        let hub = RoomHub::new();

        let mut other = hub.join(1, 2, user(2)).await.unwrap();
        hub.join(1, 2, user(1)).await.unwrap();
        hub.join(1, 2, user(1)).await.unwrap();
        let _ = other.try_recv();

        assert_eq!(hub.online_count(1).await, 2);

        assert!(!hub.leave(1, 1).await);
        assert_eq!(other.try_recv(), Err(TryRecvError::Empty));

        assert!(hub.leave(1, 1).await);
        assert_eq!(
            other.try_recv(),
            Ok(ServerMessage::UserLeft {
                room_id: 1,
                user_id: 1
            })
        );
    }

    #[tokio::test]
    async fn broadcasts_to_all_members() {
        let hub = RoomHub::new();

        let mut first = hub.join(1, 10, user(1)).await.unwrap();
        let mut second = hub.join(1, 10, user(2)).await.unwrap();
        let _ = first.try_recv();

        let delivered = hub.broadcast(1, ServerMessage::Pong).await;

        assert_eq!(delivered, 2);
        assert_eq!(first.try_recv(), Ok(ServerMessage::Pong));
        assert_eq!(second.try_recv(), Ok(ServerMessage::Pong));
        assert_eq!(hub.broadcast(2, ServerMessage::Pong).await, 0);
    }

    #[tokio::test]
    async fn leaving_unknown_room_is_a_no_op() {
        let hub = RoomHub::new();

        assert!(!hub.leave(5, 1).await);
    }
}
