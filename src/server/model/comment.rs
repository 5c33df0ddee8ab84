//! Comment domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::item::{CommentDto, CreateCommentDto};

/// Feedback left on an item by a user who finished an approved booking of it.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i32,
    pub text: String,
    pub item_id: i32,
    /// Name of the author, resolved when the comment is loaded.
    pub author_name: String,
    pub created: DateTime<Utc>,
}

impl Comment {
    /// Builds a comment from its entity and the author's name.
    pub fn from_entity(entity: entity::comment::Model, author_name: String) -> Self {
        Self {
            id: entity.id,
            text: entity.text,
            item_id: entity.item_id,
            author_name,
            created: entity.created,
        }
    }

    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.id,
            text: self.text,
            author_name: self.author_name,
            created: self.created,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCommentParam {
    pub item_id: i32,
    pub author_id: i32,
    pub text: Option<String>,
}

impl CreateCommentParam {
    pub fn from_dto(item_id: i32, author_id: i32, dto: CreateCommentDto) -> Self {
        Self {
            item_id,
            author_id,
            text: dto.text,
        }
    }
}
