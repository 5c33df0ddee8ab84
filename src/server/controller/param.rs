//! Query-string parameters shared by listing endpoints.

use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::booking::BookingState,
    server::{error::AppError, model::page::Page},
};

/// Offset pagination as sent by clients.
///
/// Signed so that negative values reach validation instead of failing deserialization.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Number of rows to skip, at least 0.
    pub from: Option<i64>,
    /// Maximum number of rows to return, at least 1. Absent means unbounded.
    pub size: Option<i64>,
}

impl PageQuery {
    /// Validates the query into a [`Page`].
    ///
    /// # Returns
    /// - `Ok(Page)` - `from` defaults to 0 and `size` to unbounded
    /// - `Err(AppError::BadRequest)` - Negative `from` or non-positive `size`
    pub fn into_page(self) -> Result<Page, AppError> {
        let from = self.from.unwrap_or(0);
        if from < 0 {
            return Err(AppError::BadRequest(format!(
                "Parameter from must not be negative, got {}",
                from
            )));
        }

        let size = match self.size {
            Some(size) if size <= 0 => {
                return Err(AppError::BadRequest(format!(
                    "Parameter size must be positive, got {}",
                    size
                )))
            }
            Some(size) => Some(size as u64),
            None => None,
        };

        Ok(Page::new(from as u64, size))
    }
}

/// Booking listing query: state filter plus pagination.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BookingListQuery {
    /// One of ALL, CURRENT, PAST, FUTURE, WAITING, REJECTED, case-insensitive. Defaults to ALL.
    pub state: Option<String>,
    pub from: Option<i64>,
    pub size: Option<i64>,
}

impl BookingListQuery {
    /// Splits the query into a parsed state filter and a validated page.
    pub fn parse(self) -> Result<(BookingState, Page), AppError> {
        let state = BookingState::from_query(self.state.as_deref())?;
        let page = PageQuery {
            from: self.from,
            size: self.size,
        }
        .into_page()?;

        Ok((state, page))
    }
}
