use crate::server::data::item::ItemRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod update;
