//! Where the client sends its requests.
//!
//! The game is served from several hosts: the ratings API, a status file on
//! the main site, the public test server registry, per-release balancers and
//! the eSports portal. All of them can be pointed elsewhere, which is how the
//! tests aim the client at the mock server.

use std::env;

pub const DEFAULT_RATINGS_URL: &str = "https://ratings.tankionline.com/api/eu";
pub const DEFAULT_STATUS_URL: &str = "https://tankionline.com/s";
pub const DEFAULT_TEST_URL: &str = "https://test.tankionline.com";
pub const DEFAULT_ESPORT_URL: &str = "https://tankisport.com/api";
pub const DEFAULT_BALANCER_URL: &str = "https://balancer.{domain}/balancer";

/// Base URLs for every API the client talks to.
///
/// `balancer` is a template: `{domain}` is replaced with the test server's
/// domain when its node list is requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub ratings: String,
    pub status: String,
    pub test_servers: String,
    pub esport: String,
    pub balancer: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            ratings: DEFAULT_RATINGS_URL.to_string(),
            status: DEFAULT_STATUS_URL.to_string(),
            test_servers: DEFAULT_TEST_URL.to_string(),
            esport: DEFAULT_ESPORT_URL.to_string(),
            balancer: DEFAULT_BALANCER_URL.to_string(),
        }
    }
}

impl Endpoints {
    /// Defaults, overridden by `TANKI_RATINGS_URL`, `TANKI_STATUS_URL`,
    /// `TANKI_TEST_URL`, `TANKI_ESPORT_URL` and `TANKI_BALANCER_URL`.
    pub fn from_env() -> Self {
        let pick = |key: &str, default: &str| env::var(key).unwrap_or_else(|_| default.to_string());

        Self {
            ratings: pick("TANKI_RATINGS_URL", DEFAULT_RATINGS_URL),
            status: pick("TANKI_STATUS_URL", DEFAULT_STATUS_URL),
            test_servers: pick("TANKI_TEST_URL", DEFAULT_TEST_URL),
            esport: pick("TANKI_ESPORT_URL", DEFAULT_ESPORT_URL),
            balancer: pick("TANKI_BALANCER_URL", DEFAULT_BALANCER_URL),
        }
        .normalized()
    }

    /// Every API served from `base`, with the balancer at
    /// `{base}/balancer/{domain}`. This is the layout of the mock server.
    pub fn local(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            ratings: format!("{base}/api/eu"),
            status: format!("{base}/s"),
            test_servers: base.to_string(),
            esport: format!("{base}/api"),
            balancer: format!("{base}/balancer/{{domain}}"),
        }
    }

    /// Strip trailing slashes so paths can be appended with `format!`.
    pub fn normalized(mut self) -> Self {
        for base in [&mut self.ratings, &mut self.status, &mut self.test_servers, &mut self.esport] {
            let trimmed = base.trim_end_matches('/').len();
            base.truncate(trimmed);
        }
        self
    }

    pub fn balancer_url(&self, domain: &str) -> String {
        self.balancer.replace("{domain}", domain)
    }
}
