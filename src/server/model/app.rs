use sea_orm::DatabaseConnection;

use crate::server::ws::hub::RoomHub;

/// State shared by every HTTP handler and WebSocket connection
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub hub: RoomHub,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self {
            db,
            hub: RoomHub::new(),
        }
    }
}
