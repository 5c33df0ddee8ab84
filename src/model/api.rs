use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Header carrying the id of the acting user on every authenticated request.
pub const USER_ID_HEADER: &str = "X-Sharer-User-Id";

#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}
