use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Article as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "REST is the best")]
    pub title: String,
    pub content: String,
    /// Author
    #[schema(example = 1)]
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for `POST /articles`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticle {
    #[serde(default)]
    #[validate(length(min = 1))]
    #[schema(example = "REST is the best", min_length = 1)]
    pub title: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    #[schema(min_length = 1)]
    pub content: String,
    /// Must reference an existing user
    #[schema(example = 1)]
    pub user_id: i32,
}

impl CreateArticle {
    pub fn new(title: impl Into<String>, content: impl Into<String>, user_id: i32) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            user_id,
        }
    }
}

/// Payload for `PATCH /articles/{id}`; only present fields change
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArticle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i32>,
}

impl Article {
    /// Apply the fields present in `update`
    pub fn apply_update(&mut self, update: UpdateArticle) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(content) = update.content {
            self.content = content;
        }
        if let Some(user_id) = update.user_id {
            self.user_id = user_id;
        }
        self.updated_at = Utc::now();
    }
}
