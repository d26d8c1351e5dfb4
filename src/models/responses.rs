use serde::{Deserialize, Serialize};

use super::User;

pub const USER_CREATED_MESSAGE: &str = "User created";
pub const USER_DETAIL_MESSAGE: &str = "Get user detail";

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct GreetingResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserCreatedResponse {
    pub message: String,
    pub user: User,
}

impl UserCreatedResponse {
    pub fn new(user: User) -> Self {
        Self {
            message: USER_CREATED_MESSAGE.to_string(),
            user,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDetailResponse {
    pub message: String,
    pub id: String,
}

impl UserDetailResponse {
    pub fn new(id: String) -> Self {
        Self {
            message: USER_DETAIL_MESSAGE.to_string(),
            id,
        }
    }
}
