mod item;
mod item_request;
mod user;
