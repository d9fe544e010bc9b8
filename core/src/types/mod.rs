//! Domain records built from the wire schema.
//!
//! # Design
//! Every record is produced once by its converter and never changed
//! afterwards. Converters are plain functions over `schema` values; the ones
//! that need context the payload does not carry (a leaderboard kind, a node
//! name taken from a map key) receive it as an extra argument.

pub mod article;
pub mod game_object;
pub mod page;
pub mod rank;
pub mod rating;
pub mod status;
pub mod top;
pub mod user;

pub use article::{Article, ArticleAuthor, ArticleCategory, ArticleComment};
pub use game_object::{GameMode, GameObject, SuppliesObject};
pub use page::PaginatedList;
pub use rank::Rank;
pub use rating::{Rating, Ratings};
pub use status::{ServerNode, StableServerStatus, TestServerStatus};
pub use top::{Top, TopKind, TopLists};
pub use user::{PartialUser, TopListUser, User};

use std::time::Duration;

use chrono::NaiveDateTime;

use crate::error::ApiError;

/// Format of every timestamp the eSports API sends. No zone is given.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub(crate) fn seconds(field: &str, value: i64) -> Result<Duration, ApiError> {
    u64::try_from(value)
        .map(Duration::from_secs)
        .map_err(|_| ApiError::malformed(format!("{field}: negative duration {value}")))
}

pub(crate) fn timestamp(field: &str, value: &str) -> Result<NaiveDateTime, ApiError> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .map_err(|e| ApiError::malformed(format!("{field}: bad timestamp {value:?}: {e}")))
}
