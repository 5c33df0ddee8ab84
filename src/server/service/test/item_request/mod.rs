use crate::server::{
    error::AppError,
    model::{item_request::CreateItemRequestParam, page::Page},
    service::item_request::ItemRequestService,
};
use chrono::Utc;
use test_utils::{builder::TestBuilder, factory};
