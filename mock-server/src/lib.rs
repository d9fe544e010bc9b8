//! Stand-in for the Tanki Online web APIs.
//!
//! Serves the canned payloads in `test-vectors/` under the same paths the
//! real hosts use, all from one listener:
//!
//! | path | real host |
//! |---|---|
//! | `/api/eu/top`, `/api/eu/profile` | ratings API |
//! | `/s/status.js` | main site |
//! | `/public_test` | test server registry |
//! | `/balancer/{domain}` | `balancer.{domain}/balancer` |
//! | `/api/articles`, `/api/articles/show/{id}`, `/api/comments` | eSports API |
//! | `/images/{name}` | image CDN |

use axum::{
    extract::{Path, Query},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use tokio::net::TcpListener;

pub mod fixtures {
    pub const TOP: &str = include_str!("../../test-vectors/top.json");
    pub const PROFILE: &str = include_str!("../../test-vectors/profile.json");
    pub const PROFILE_NOT_FOUND: &str = include_str!("../../test-vectors/profile_not_found.json");
    pub const STATUS: &str = include_str!("../../test-vectors/status.json");
    pub const PUBLIC_TEST: &str = include_str!("../../test-vectors/public_test.json");
    pub const BALANCER: &str = include_str!("../../test-vectors/balancer.json");
    pub const ARTICLES: &str = include_str!("../../test-vectors/articles.json");
    pub const ARTICLE: &str = include_str!("../../test-vectors/article.json");
    pub const COMMENTS: &str = include_str!("../../test-vectors/comments.json");
    pub const ESPORT_FAILURE: &str = include_str!("../../test-vectors/esport_failure.json");

    /// The only player `/api/eu/profile` knows.
    pub const KNOWN_PLAYER: &str = "sty";
    /// The only article the eSports endpoints know.
    pub const KNOWN_ARTICLE: u64 = 512;
    /// `last_page` in `ARTICLES`; later pages fail.
    pub const LAST_PAGE: u32 = 3;
    /// Domains listed in `PUBLIC_TEST`.
    pub const TEST_DOMAINS: [&str; 2] = [
        "public-deploy1.test-eu.tankionline.com",
        "public-deploy2.test-eu.tankionline.com",
    ];
    /// Bytes served for every known image.
    pub const IMAGE: &[u8] = b"\x89PNG\r\n\x1a\nmock";
}

use fixtures::*;

#[derive(Deserialize)]
pub struct ProfileQuery {
    pub user: String,
    #[serde(default)]
    pub lang: Option<String>,
}

#[derive(Deserialize)]
pub struct ArticlesQuery {
    pub count: u32,
    pub page: u32,
}

#[derive(Deserialize)]
pub struct CommentsQuery {
    pub article_id: u64,
}

pub fn app() -> Router {
    Router::new()
        .route("/api/eu/top", get(top))
        .route("/api/eu/profile", get(profile))
        .route("/s/status.js", get(status))
        .route("/public_test", get(public_test))
        .route("/balancer/{domain}", get(balancer))
        .route("/api/articles", get(articles))
        .route("/api/articles/show/{id}", get(article))
        .route("/api/comments", get(comments))
        .route("/images/{name}", get(image))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn json(body: &'static str) -> Response {
    ([(header::CONTENT_TYPE, "application/json")], body).into_response()
}

async fn top() -> Response {
    json(TOP)
}

/// Unknown players get a 200 with `NOT_FOUND`, like the real API.
async fn profile(Query(query): Query<ProfileQuery>) -> Response {
    if query.user == KNOWN_PLAYER {
        json(PROFILE)
    } else {
        json(PROFILE_NOT_FOUND)
    }
}

async fn status() -> Response {
    json(STATUS)
}

async fn public_test() -> Response {
    json(PUBLIC_TEST)
}

async fn balancer(Path(domain): Path<String>) -> Response {
    if TEST_DOMAINS.contains(&domain.as_str()) {
        json(BALANCER)
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}

async fn articles(Query(query): Query<ArticlesQuery>) -> Response {
    if query.count == 0 || query.page == 0 || query.page > LAST_PAGE {
        json(ESPORT_FAILURE)
    } else {
        json(ARTICLES)
    }
}

async fn article(Path(id): Path<u64>) -> Response {
    if id == KNOWN_ARTICLE {
        json(ARTICLE)
    } else {
        json(ESPORT_FAILURE)
    }
}

async fn comments(Query(query): Query<CommentsQuery>) -> Response {
    if query.article_id == KNOWN_ARTICLE {
        json(COMMENTS)
    } else {
        json(ESPORT_FAILURE)
    }
}

async fn image(Path(name): Path<String>) -> Response {
    if name.ends_with(".png") || name.ends_with(".jpg") {
        ([(header::CONTENT_TYPE, "image/png")], IMAGE).into_response()
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}
