use serde::{Deserialize, Serialize};

/// Whatever JSON the client posts. Never inspected, only echoed back.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, utoipa::ToSchema)]
#[serde(transparent)]
#[schema(value_type = Object)]
pub struct User(pub serde_json::Value);
