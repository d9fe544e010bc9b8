//! One async call per logical API operation.
//!
//! # Design
//! `TankiOnline` pairs an `ApiClient` with a `Transport` and runs the
//! build -> execute -> parse sequence for each operation. Operations that
//! need several requests issue them one after another; the first failure
//! aborts the whole operation. Nothing is cached between calls.

use crate::client::{ApiClient, DEFAULT_LANG};
use crate::endpoints::Endpoints;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::{Article, ArticleComment, PaginatedList, StableServerStatus, TestServerStatus, TopLists, User};

/// Async client for the game's public APIs.
#[derive(Debug, Clone)]
pub struct TankiOnline<T> {
    client: ApiClient,
    transport: T,
}

#[cfg(feature = "reqwest")]
impl TankiOnline<crate::transport::ReqwestTransport> {
    /// Client for the production APIs over `reqwest`.
    pub fn new() -> Self {
        Self::with_transport(Endpoints::default(), crate::transport::ReqwestTransport::new())
    }
}

#[cfg(feature = "reqwest")]
impl Default for TankiOnline<crate::transport::ReqwestTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> TankiOnline<T> {
    pub fn with_transport(endpoints: Endpoints, transport: T) -> Self {
        Self {
            client: ApiClient::new(endpoints),
            transport,
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        tracing::trace!(url = %request.url, "sending request");
        self.transport.execute(request).await
    }

    /// All four leaderboards.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn get_tops(&self) -> Result<TopLists, ApiError> {
        let response = self.send(self.client.build_tops()).await?;
        self.client.parse_tops(response)
    }

    /// Profile of `name` with `lang` set to `en`.
    pub async fn get_user(&self, name: &str) -> Result<User, ApiError> {
        self.get_user_with_lang(name, DEFAULT_LANG).await
    }

    /// Profile of `name`. Fails with `UserNotFound` when there is no such
    /// player.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn get_user_with_lang(&self, name: &str, lang: &str) -> Result<User, ApiError> {
        let response = self.send(self.client.build_user(name, lang)?).await?;
        let user = self.client.parse_user(name, response)?;
        tracing::debug!(rank = user.rank().number(), "player found");
        Ok(user)
    }

    /// Status of the production release. The status file carries no
    /// success flag, so only transport and payload errors can occur.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn get_status(&self) -> Result<StableServerStatus, ApiError> {
        let response = self.send(self.client.build_status()).await?;
        let status = self.client.parse_status(response)?;
        tracing::debug!(nodes = status.nodes.len(), "status fetched");
        Ok(status)
    }

    /// Every public test server together with its nodes. Balancers are
    /// queried one at a time in registry order.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn get_test_status(&self) -> Result<Vec<TestServerStatus>, ApiError> {
        let response = self.send(self.client.build_test_servers()).await?;
        let servers = self.client.parse_test_servers(response)?;
        tracing::debug!(servers = servers.len(), "test servers listed");

        let mut output = Vec::with_capacity(servers.len());
        for server in servers {
            let response = self.send(self.client.build_balancer(&server)).await?;
            output.push(self.client.parse_balancer(server, response)?);
        }
        Ok(output)
    }

    /// One page of articles. `count` and `page` must be at least 1; zero is
    /// rejected before anything is sent.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn get_articles(&self, count: u32, page: u32) -> Result<PaginatedList<Article>, ApiError> {
        let request = self.client.build_articles(count, page)?;
        let response = self.send(request).await?;
        self.client.parse_articles(count, page, response)
    }

    /// A single article including its category list and comments.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn get_article(&self, id: u64) -> Result<Article, ApiError> {
        let response = self.send(self.client.build_article(id)).await?;
        self.client.parse_article(id, response)
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn get_article_comments(&self, article_id: u64) -> Result<Vec<ArticleComment>, ApiError> {
        let response = self.send(self.client.build_article_comments(article_id)?).await?;
        self.client.parse_article_comments(article_id, response)
    }

    /// Download an image referenced by a record.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn read_image(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        let response = self.send(self.client.build_image(url)).await?;
        self.client.parse_image(response)
    }
}
