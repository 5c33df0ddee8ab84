use crate::server::{
    error::AppError,
    model::{
        comment::CreateCommentParam,
        item::{CreateItemParam, UpdateItemParam},
    },
    service::{item::ItemService, item_lock::ItemLocks},
};
use chrono::{Duration, Utc};
use entity::booking::BookingStatus as BookingStatusEntity;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get;
mod search;
