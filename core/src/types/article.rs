use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::NaiveDateTime;

use crate::error::ApiError;
use crate::schema;
use crate::types::timestamp;

/// Implements equality and hashing on the `id` field only.
macro_rules! identified_by_id {
    ($($ty:ty),+) => {$(
        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                self.id == other.id
            }
        }

        impl Eq for $ty {}

        impl Hash for $ty {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.id.hash(state);
            }
        }
    )+};
}

identified_by_id!(Article, ArticleAuthor, ArticleCategory, ArticleComment);

/// A news or eSports article.
#[derive(Debug, Clone)]
pub struct Article {
    pub id: u64,
    pub author: ArticleAuthor,
    pub views: i64,
    /// The primary category.
    pub category: ArticleCategory,
    /// Every category of the article. Only sent by the single article
    /// endpoint; `None` means the API did not include the list.
    pub categories: Option<Vec<ArticleCategory>>,
    pub title: String,
    pub short_desc: String,
    pub image: Option<String>,
    pub wide_image: Option<String>,
    pub status: i64,
    pub kind: i64,
    pub date: NaiveDateTime,
    pub list_order: i64,
    /// HTML body.
    pub content: Option<String>,
    /// Same presence rules as `categories`.
    pub comments: Option<Vec<ArticleComment>>,
}

impl Article {
    pub fn from_schema(raw: schema::Article) -> Result<Self, ApiError> {
        let category = raw
            .category
            .into_iter()
            .next()
            .map(ArticleCategory::from)
            .ok_or_else(|| ApiError::malformed(format!("article {}: empty category list", raw.id)))?;

        let comments = match raw.comments {
            Some(list) => Some(list.into_iter().map(ArticleComment::from_schema).collect::<Result<_, _>>()?),
            None => None,
        };

        Ok(Self {
            id: raw.id,
            author: ArticleAuthor {
                id: raw.author_id,
                name: raw.author_username,
            },
            views: raw.views,
            category,
            categories: raw.categories.map(|list| list.into_iter().map(ArticleCategory::from).collect()),
            title: raw.title,
            short_desc: raw.short_desc,
            image: raw.image,
            wide_image: raw.wide_image,
            status: raw.status,
            kind: raw.kind,
            date: timestamp("date", &raw.date)?,
            list_order: raw.list_order,
            content: raw.content,
            comments,
        })
    }
}

impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

#[derive(Debug, Clone)]
pub struct ArticleAuthor {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct ArticleCategory {
    pub id: u64,
    pub name: String,
    pub lang: String,
    pub sort_order: Option<i64>,
    pub status: Option<i64>,
}

impl From<schema::Category> for ArticleCategory {
    fn from(raw: schema::Category) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            lang: raw.lang,
            sort_order: raw.sort_order,
            status: raw.status,
        }
    }
}

/// A reader comment under an article.
#[derive(Debug, Clone)]
pub struct ArticleComment {
    pub id: u64,
    pub commentable_type: String,
    pub commentable_id: u64,
    /// Set on replies.
    pub parent_id: Option<u64>,
    pub text: String,
    pub is_approved: bool,
    pub user_id: u64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl ArticleComment {
    pub fn from_schema(raw: schema::Comment) -> Result<Self, ApiError> {
        Ok(Self {
            id: raw.id,
            commentable_type: raw.commentable_type,
            commentable_id: raw.commentable_id,
            parent_id: raw.parent_id,
            text: raw.comment,
            is_approved: raw.is_approved.is_set(),
            user_id: raw.user_id,
            created_at: timestamp("created_at", &raw.created_at)?,
            updated_at: timestamp("updated_at", &raw.updated_at)?,
        })
    }
}

impl fmt::Display for ArticleComment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn article(extra: Value) -> Value {
        let mut base = json!({
            "id": 77,
            "author_id": 3,
            "author_username": "editor",
            "views": 120,
            "category": [{"id": 1, "name": "News", "lang": "en"}],
            "title": "Patch notes",
            "short_desc": "What changed",
            "image": null,
            "wide_image": "https://example.com/wide.jpg",
            "status": 1,
            "type": 2,
            "date": "2023-06-01 18:30:00",
            "list_order": 0,
            "content": "<p>Hello</p>"
        });
        if let (Value::Object(base), Value::Object(extra)) = (&mut base, extra) {
            base.extend(extra);
        }
        base
    }

    fn convert(value: Value) -> Result<Article, ApiError> {
        Article::from_schema(serde_json::from_value(value).unwrap())
    }

    fn comment(id: u64) -> Value {
        json!({
            "id": id,
            "commentable_type": "article",
            "commentable_id": 77,
            "parent_id": null,
            "comment": "gg",
            "is_approved": 1,
            "user_id": 9,
            "created_at": "2023-06-01 19:00:00",
            "updated_at": "2023-06-02 08:15:00"
        })
    }

    #[test]
    fn omitted_lists_are_none() {
        let article = convert(article(json!({}))).unwrap();
        assert!(article.categories.is_none());
        assert!(article.comments.is_none());
        assert_eq!(article.category.name, "News");
        assert_eq!(article.author.name, "editor");
        assert_eq!(article.image, None);
    }

    #[test]
    fn empty_lists_are_kept_apart_from_omitted_ones() {
        let article = convert(article(json!({"categories": [], "comments": []}))).unwrap();
        assert_eq!(article.categories.map(|c| c.len()), Some(0));
        assert_eq!(article.comments.map(|c| c.len()), Some(0));
    }

    #[test]
    fn nested_comments_keep_order() {
        let article = convert(article(json!({"comments": [comment(5), comment(2)]}))).unwrap();
        let ids: Vec<u64> = article.comments.unwrap().iter().map(|c| c.id).collect();
        assert_eq!(ids, [5, 2]);
    }

    #[test]
    fn empty_primary_category_is_malformed() {
        let err = convert(article(json!({"category": []}))).unwrap_err();
        assert!(matches!(err, ApiError::MalformedPayload(_)));
    }

    #[test]
    fn comment_approval_is_a_flag() {
        let mut raw = comment(1);
        raw["is_approved"] = json!(0);
        let comment = ArticleComment::from_schema(serde_json::from_value(raw).unwrap()).unwrap();
        assert!(!comment.is_approved);
        assert_eq!(comment.text, "gg");
        assert_eq!(comment.updated_at.to_string(), "2023-06-02 08:15:00");

        assert_approved(json!(1));
        assert_approved(json!(true));
    }

    fn assert_approved(flag: Value) {
        let mut raw = comment(1);
        raw["is_approved"] = flag;
        let comment = ArticleComment::from_schema(serde_json::from_value(raw).unwrap()).unwrap();
        assert!(comment.is_approved);
    }

    #[test]
    fn articles_are_identified_by_id() {
        let a = convert(article(json!({}))).unwrap();
        let b = convert(article(json!({"title": "Renamed"}))).unwrap();
        assert_eq!(a, b);
    }
}
