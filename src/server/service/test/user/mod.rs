use crate::server::{
    error::AppError,
    model::user::{CreateUserParam, UpdateUserParam},
    service::user::UserService,
};
use test_utils::{builder::TestBuilder, factory};

mod update;

fn create_param(name: &str, email: &str) -> CreateUserParam {
    CreateUserParam {
        name: Some(name.to_string()),
        email: Some(email.to_string()),
    }
}
