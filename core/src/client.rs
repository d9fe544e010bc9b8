//! Stateless request builder and response parser for the game's web APIs.
//!
//! # Design
//! `ApiClient` holds only the `Endpoints` and carries no state between calls.
//! Each wire call is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`, so
//! the I/O boundary stays explicit and every conversion can be tested on
//! canned payloads.
//!
//! The APIs put their success signal in the body (`responseType` or
//! `success`) rather than the status line, so a body that decodes is always
//! interpreted. The status code only matters when the body is unreadable.

use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::endpoints::Endpoints;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::schema::{self, EsportEnvelope, RatingsEnvelope};
use crate::types::{
    Article, ArticleComment, PaginatedList, StableServerStatus, TestServerStatus, TopLists, User,
};

/// `lang` sent with profile lookups unless the caller picks another.
pub const DEFAULT_LANG: &str = "en";

/// Stateless client for the ratings, status and eSports APIs.
#[derive(Debug, Clone, Default)]
pub struct ApiClient {
    endpoints: Endpoints,
}

impl ApiClient {
    pub fn new(endpoints: Endpoints) -> Self {
        Self {
            endpoints: endpoints.normalized(),
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    // -----------------------------------------------------------------------
    // Build
    // -----------------------------------------------------------------------

    pub fn build_tops(&self) -> HttpRequest {
        HttpRequest::json(format!("{}/top", self.endpoints.ratings))
    }

    pub fn build_user(&self, name: &str, lang: &str) -> Result<HttpRequest, ApiError> {
        let url = with_query(
            &format!("{}/profile", self.endpoints.ratings),
            &[("user", name), ("lang", lang)],
        )?;
        Ok(HttpRequest::json(url))
    }

    pub fn build_status(&self) -> HttpRequest {
        HttpRequest::json(format!("{}/status.js", self.endpoints.status))
    }

    pub fn build_test_servers(&self) -> HttpRequest {
        HttpRequest::json(format!("{}/public_test", self.endpoints.test_servers))
    }

    /// Request for the node list of one test server.
    pub fn build_balancer(&self, server: &schema::TestServer) -> HttpRequest {
        HttpRequest::json(self.endpoints.balancer_url(&server.domain))
    }

    /// Fails with `InvalidArgument` when `count` or `page` is zero.
    pub fn build_articles(&self, count: u32, page: u32) -> Result<HttpRequest, ApiError> {
        positive("count", count)?;
        positive("page", page)?;

        let (count, page) = (count.to_string(), page.to_string());
        let url = with_query(
            &format!("{}/articles", self.endpoints.esport),
            &[("count", count.as_str()), ("page", page.as_str())],
        )?;
        Ok(HttpRequest::json(url))
    }

    pub fn build_article(&self, id: u64) -> HttpRequest {
        HttpRequest::json(format!("{}/articles/show/{id}", self.endpoints.esport))
    }

    pub fn build_article_comments(&self, article_id: u64) -> Result<HttpRequest, ApiError> {
        let article_id = article_id.to_string();
        let url = with_query(
            &format!("{}/comments", self.endpoints.esport),
            &[("article_id", article_id.as_str())],
        )?;
        Ok(HttpRequest::json(url))
    }

    /// Request for an image URL found in a record (`GameObject::image`,
    /// `Article::image`, ...).
    pub fn build_image(&self, url: &str) -> HttpRequest {
        HttpRequest::raw(url)
    }

    // -----------------------------------------------------------------------
    // Parse
    // -----------------------------------------------------------------------

    pub fn parse_tops(&self, response: HttpResponse) -> Result<TopLists, ApiError> {
        let envelope: RatingsEnvelope = decode(&response)?;
        if envelope.response_type != "OK" {
            tracing::warn!(response_type = %envelope.response_type, "tops request rejected");
            return Err(ApiError::TopsFailed {
                response_type: envelope.response_type,
            });
        }
        Ok(TopLists::from_schema(convert(envelope.response)?))
    }

    pub fn parse_user(&self, name: &str, response: HttpResponse) -> Result<User, ApiError> {
        let envelope: RatingsEnvelope = decode(&response)?;
        match envelope.response_type.as_str() {
            "OK" => User::from_schema(convert(envelope.response)?),
            "NOT_FOUND" => Err(ApiError::UserNotFound {
                name: name.to_string(),
            }),
            _ => {
                tracing::warn!(name, response_type = %envelope.response_type, "profile request rejected");
                Err(ApiError::UserFailed {
                    name: name.to_string(),
                    response_type: envelope.response_type,
                })
            }
        }
    }

    pub fn parse_status(&self, response: HttpResponse) -> Result<StableServerStatus, ApiError> {
        Ok(StableServerStatus::from_schema(decode(&response)?))
    }

    /// The test server registry. Each entry still needs its balancer fetched.
    pub fn parse_test_servers(&self, response: HttpResponse) -> Result<Vec<schema::TestServer>, ApiError> {
        decode(&response)
    }

    pub fn parse_balancer(
        &self,
        server: schema::TestServer,
        response: HttpResponse,
    ) -> Result<TestServerStatus, ApiError> {
        Ok(TestServerStatus::from_schema(server, decode(&response)?))
    }

    /// `count` and `page` are the values the request was built with; the
    /// page metadata only carries the totals.
    pub fn parse_articles(
        &self,
        count: u32,
        page: u32,
        response: HttpResponse,
    ) -> Result<PaginatedList<Article>, ApiError> {
        let envelope = esport(&response, || "failed to get articles".to_string())?;
        let list: schema::ArticleList = convert(envelope.data)?;
        let meta: schema::PageMeta = convert(envelope.meta)?;

        Ok(PaginatedList {
            items: list
                .articles
                .into_iter()
                .map(Article::from_schema)
                .collect::<Result<_, _>>()?,
            page,
            last_page: meta.last_page,
            per_page: count,
            total: meta.total,
        })
    }

    pub fn parse_article(&self, id: u64, response: HttpResponse) -> Result<Article, ApiError> {
        let envelope = esport(&response, || format!("failed to get info about article with {id} id"))?;
        Article::from_schema(convert(envelope.data)?)
    }

    pub fn parse_article_comments(
        &self,
        article_id: u64,
        response: HttpResponse,
    ) -> Result<Vec<ArticleComment>, ApiError> {
        let envelope = esport(&response, || {
            format!("failed to get comments of article with {article_id} id")
        })?;
        let comments: Vec<schema::Comment> = convert(envelope.data)?;
        comments.into_iter().map(ArticleComment::from_schema).collect()
    }

    pub fn parse_image(&self, response: HttpResponse) -> Result<Vec<u8>, ApiError> {
        if !response.is_success() {
            return Err(ApiError::HttpError {
                status: response.status,
                body: response.text(),
            });
        }
        Ok(response.body)
    }
}

/// Decode a response body. Unreadable bodies on error statuses are reported
/// as HTTP errors since the status is the only signal left.
fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_slice(&response.body).map_err(|err| {
        if response.is_success() {
            ApiError::from_json(err)
        } else {
            ApiError::HttpError {
                status: response.status,
                body: response.text(),
            }
        }
    })
}

/// Convert an already decoded JSON value into a schema type.
fn convert<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(ApiError::from_json)
}

fn esport(response: &HttpResponse, message: impl FnOnce() -> String) -> Result<EsportEnvelope, ApiError> {
    let envelope: EsportEnvelope = decode(response)?;
    if !envelope.success.unwrap_or(false) {
        let message = message();
        tracing::warn!("{message}");
        return Err(ApiError::ArticlesFailed(message));
    }
    Ok(envelope)
}

fn positive(name: &'static str, value: u32) -> Result<(), ApiError> {
    if value == 0 {
        return Err(ApiError::InvalidArgument { name, value });
    }
    Ok(())
}

fn with_query(base: &str, params: &[(&str, &str)]) -> Result<String, ApiError> {
    Url::parse_with_params(base, params)
        .map(String::from)
        .map_err(|e| ApiError::InvalidUrl {
            url: base.to_string(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new(Endpoints::local("http://localhost:3000"))
    }

    fn body(json: &str) -> HttpResponse {
        HttpResponse::ok(json)
    }

    #[test]
    fn build_tops_produces_correct_request() {
        let req = client().build_tops();
        assert_eq!(req.url, "http://localhost:3000/api/eu/top");
        assert_eq!(req.headers, vec![("accept".to_string(), "application/json".to_string())]);
    }

    #[test]
    fn build_user_encodes_the_name() {
        let req = client().build_user("tank man&co", "ru").unwrap();
        assert_eq!(req.url, "http://localhost:3000/api/eu/profile?user=tank+man%26co&lang=ru");
    }

    #[test]
    fn build_default_endpoints() {
        let client = ApiClient::default();
        assert_eq!(client.build_status().url, "https://tankionline.com/s/status.js");
        assert_eq!(client.build_test_servers().url, "https://test.tankionline.com/public_test");
        assert_eq!(client.build_article(12).url, "https://tankisport.com/api/articles/show/12");
        assert_eq!(
            client.build_article_comments(12).unwrap().url,
            "https://tankisport.com/api/comments?article_id=12"
        );
    }

    #[test]
    fn build_balancer_uses_the_server_domain() {
        let server = schema::TestServer {
            release: "r1".into(),
            domain: "r1.test".into(),
            user_count: 3,
        };
        assert_eq!(client().build_balancer(&server).url, "http://localhost:3000/balancer/r1.test");
    }

    #[test]
    fn build_user_with_unparsable_base_is_a_config_error() {
        let client = ApiClient::new(Endpoints {
            ratings: "not a url".to_string(),
            ..Endpoints::default()
        });
        let err = client.build_user("sty", "en").unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl { url, .. } if url == "not a url/profile"));
    }

    #[test]
    fn build_articles_rejects_zero_count_and_page() {
        let err = client().build_articles(0, 1).unwrap_err();
        assert!(matches!(err, ApiError::InvalidArgument { name: "count", value: 0 }));

        let err = client().build_articles(20, 0).unwrap_err();
        assert!(matches!(err, ApiError::InvalidArgument { name: "page", value: 0 }));

        let req = client().build_articles(20, 1).unwrap();
        assert_eq!(req.url, "http://localhost:3000/api/articles?count=20&page=1");
    }

    #[test]
    fn build_image_has_no_accept_header() {
        let req = client().build_image("https://example.com/a.png");
        assert_eq!(req.url, "https://example.com/a.png");
        assert!(req.headers.is_empty());
    }

    #[test]
    fn parse_tops_resolves_legend_rank() {
        let response = body(
            r#"{"responseType":"OK","response":{"crystals":[],"efficiency":[],"golds":[],
                "score":[{"uid":"sty","rank":31,"hasPremium":true,"value":9001}]}}"#,
        );
        let tops = client().parse_tops(response).unwrap();
        assert_eq!(tops.score.users.len(), 1);

        let entry = &tops.score.users[0];
        assert_eq!(entry.user.name, "sty");
        assert_eq!(entry.user.rank.name(crate::Locale::English), "legend 1");
        assert!(entry.user.premium);
        assert_eq!(entry.value, 9001);
    }

    #[test]
    fn parse_tops_rejected() {
        let err = client().parse_tops(body(r#"{"responseType":"ERROR"}"#)).unwrap_err();
        assert!(matches!(err, ApiError::TopsFailed { response_type } if response_type == "ERROR"));
    }

    #[test]
    fn parse_tops_missing_key_is_malformed() {
        let response = body(r#"{"responseType":"OK","response":{"crystals":[],"efficiency":[],"golds":[]}}"#);
        let err = client().parse_tops(response).unwrap_err();
        assert!(matches!(err, ApiError::MalformedPayload(msg) if msg.contains("score")));
    }

    #[test]
    fn parse_user_not_found() {
        let err = client()
            .parse_user("nobody", body(r#"{"responseType":"NOT_FOUND","response":null}"#))
            .unwrap_err();
        assert!(matches!(err, ApiError::UserNotFound { name } if name == "nobody"));
    }

    #[test]
    fn parse_user_other_failure_is_generic() {
        let err = client()
            .parse_user("sty", body(r#"{"responseType":"ERROR"}"#))
            .unwrap_err();
        assert!(matches!(err, ApiError::UserFailed { .. }));
    }

    #[test]
    fn parse_articles_rejected_without_success() {
        let err = client()
            .parse_articles(20, 1, body(r#"{"success":false,"data":null}"#))
            .unwrap_err();
        assert!(matches!(err, ApiError::ArticlesFailed(_)));
    }

    #[test]
    fn parse_articles_null_success_is_a_failure() {
        let err = client()
            .parse_articles(20, 1, body(r#"{"success":null,"data":{"articles":[]}}"#))
            .unwrap_err();
        assert!(matches!(err, ApiError::ArticlesFailed(_)));
    }

    #[test]
    fn parse_articles_without_meta_is_malformed() {
        let err = client()
            .parse_articles(20, 1, body(r#"{"success":true,"data":{"articles":[]}}"#))
            .unwrap_err();
        assert!(matches!(err, ApiError::MalformedPayload(_)));
    }

    #[test]
    fn parse_article_comments_rejected() {
        let err = client()
            .parse_article_comments(4, body(r#"{"success":false}"#))
            .unwrap_err();
        assert!(matches!(err, ApiError::ArticlesFailed(msg) if msg.contains("4 id")));
    }

    #[test]
    fn parse_non_json_body() {
        let err = client().parse_status(body("<html></html>")).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn parse_non_json_error_status() {
        let response = HttpResponse {
            status: 502,
            headers: Vec::new(),
            body: b"bad gateway".to_vec(),
        };
        let err = client().parse_tops(response).unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 502, body } if body == "bad gateway"));
    }

    #[test]
    fn parse_json_error_status_is_still_interpreted() {
        let response = HttpResponse {
            status: 404,
            headers: Vec::new(),
            body: br#"{"responseType":"NOT_FOUND"}"#.to_vec(),
        };
        let err = client().parse_user("ghost", response).unwrap_err();
        assert!(matches!(err, ApiError::UserNotFound { .. }));
    }

    #[test]
    fn parse_image_returns_raw_bytes() {
        let bytes = client().parse_image(HttpResponse::ok(vec![0x89, b'P', b'N', b'G'])).unwrap();
        assert_eq!(bytes, [0x89, b'P', b'N', b'G']);

        let missing = HttpResponse {
            status: 404,
            headers: Vec::new(),
            body: Vec::new(),
        };
        assert!(matches!(client().parse_image(missing), Err(ApiError::HttpError { status: 404, .. })));
    }
}
