use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;
use utoipa::ToSchema;

use crate::model::datetime::{utc, utc_option};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingDto {
    pub item_id: Option<i32>,
    #[serde(default, with = "utc_option")]
    pub start: Option<DateTime<Utc>>,
    #[serde(default, with = "utc_option")]
    pub end: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum BookingStatusDto {
    Waiting,
    Approved,
    Rejected,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookerDto {
    pub id: i32,
    pub name: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookedItemDto {
    pub id: i32,
    pub name: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingDto {
    pub id: i32,
    #[serde(with = "utc")]
    pub start: DateTime<Utc>,
    #[serde(with = "utc")]
    pub end: DateTime<Utc>,
    pub status: BookingStatusDto,
    pub booker: BookerDto,
    pub item: BookedItemDto,
}

/// Compact booking shown on an item card to its owner.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingShortDto {
    pub id: i32,
    pub booker_id: i32,
    #[serde(with = "utc")]
    pub start: DateTime<Utc>,
    #[serde(with = "utc")]
    pub end: DateTime<Utc>,
}

/// How far in the past a booking may start, absorbing request latency and clock skew.
pub const START_TOLERANCE_SECONDS: i64 = 60;

/// Query-time classifier for booking listings.
///
/// Accepted tokens are the six variant names in any letter case. A missing or blank token
/// means [`BookingState::All`].
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, Default, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum BookingState {
    #[default]
    All,
    Current,
    Past,
    Future,
    Waiting,
    Rejected,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown state: {0}")]
pub struct UnknownStateError(pub String);

impl BookingState {
    const VARIANTS: [BookingState; 6] = [
        BookingState::All,
        BookingState::Current,
        BookingState::Past,
        BookingState::Future,
        BookingState::Waiting,
        BookingState::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingState::All => "ALL",
            BookingState::Current => "CURRENT",
            BookingState::Past => "PAST",
            BookingState::Future => "FUTURE",
            BookingState::Waiting => "WAITING",
            BookingState::Rejected => "REJECTED",
        }
    }

    /// Parses an optional query token, defaulting to `All` when absent or blank.
    pub fn from_query(token: Option<&str>) -> Result<Self, UnknownStateError> {
        match token.map(str::trim) {
            None | Some("") => Ok(BookingState::All),
            Some(token) => token.parse(),
        }
    }
}

impl FromStr for BookingState {
    type Err = UnknownStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::VARIANTS
            .into_iter()
            .find(|state| state.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownStateError(s.to_string()))
    }
}

impl std::fmt::Display for BookingState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
