use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: i64,
    pub username: String,
}

/// A community that posts can be published into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Group {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Post {
    pub id: i64,
    pub text: String,
    pub pub_date: OffsetDateTime,
    pub author: User,
    pub group: Option<Group>,
}

impl Post {
    pub fn new(id: i64, text: String, author: User, group: Option<Group>) -> Self {
        let pub_date = OffsetDateTime::now_utc();
        Self {
            id,
            text,
            pub_date,
            author,
            group,
        }
    }
}

/// Sorts posts into listing order: newest first, later ids first on ties.
pub fn newest_first(posts: &mut [Post]) {
    posts.sort_by(|a, b| b.pub_date.cmp(&a.pub_date).then_with(|| b.id.cmp(&a.id)));
}
