use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub avatar: String,
    pub gold: i32,
    pub level: i32,
}

/// Credentials for joining the tavern, the username is created on first use
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LoginDto {
    pub username: String,
    pub avatar: String,
}

/// A user currently present in a room
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct OnlineUserDto {
    pub id: i32,
    pub username: String,
    pub avatar: String,
}

impl From<UserDto> for OnlineUserDto {
    fn from(user: UserDto) -> Self {
        Self {
            id: user.id,
            username: user.username,
            avatar: user.avatar,
        }
    }
}
