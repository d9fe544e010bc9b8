use std::fmt;

use serde_json::Value;

use crate::locale::Locale;
use crate::schema;

/// One backend node of a server cluster.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerNode {
    /// Key of the node in the payload's `nodes` map.
    pub name: String,
    pub host: String,
    pub status: String,
    pub tcp_ports: Vec<u16>,
    pub ws_ports: Vec<u16>,
    pub in_battles: i64,
    pub online: i64,
    /// Passed through untouched.
    pub partners: Value,
}

impl ServerNode {
    pub fn from_schema(name: String, raw: schema::Node) -> Self {
        Self {
            name,
            host: raw.endpoint.host,
            status: raw.endpoint.status,
            tcp_ports: raw.endpoint.tcp_ports,
            ws_ports: raw.endpoint.ws_ports,
            in_battles: raw.inbattles,
            online: raw.online,
            partners: raw.partners,
        }
    }

    pub fn from_entries(raw: Vec<(String, schema::Node)>) -> Vec<Self> {
        raw.into_iter().map(|(name, node)| Self::from_schema(name, node)).collect()
    }
}

impl fmt::Display for ServerNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Status of the production release.
#[derive(Debug, Clone, PartialEq)]
pub struct StableServerStatus {
    /// `None` when the API sends null or an empty string.
    pub apk_link: Option<String>,
    /// Lowest and highest supported Android API levels.
    pub supported_android: (i64, i64),
    pub nodes: Vec<ServerNode>,
}

impl StableServerStatus {
    pub fn from_schema(raw: schema::StableStatus) -> Self {
        Self {
            apk_link: raw.apk_link.filter(|link| !link.is_empty()),
            supported_android: (raw.min_supported_android_version, raw.max_supported_android_version),
            nodes: ServerNode::from_entries(raw.nodes),
        }
    }

    pub fn online(&self) -> i64 {
        self.nodes.iter().map(|node| node.online).sum()
    }
}

/// Status of one public test release.
#[derive(Debug, Clone, PartialEq)]
pub struct TestServerStatus {
    pub release: String,
    pub domain: String,
    pub user_count: i64,
    pub nodes: Vec<ServerNode>,
}

impl TestServerStatus {
    /// Combine a registry entry with the node list from its balancer.
    pub fn from_schema(server: schema::TestServer, balancer: schema::Balancer) -> Self {
        Self {
            release: server.release,
            domain: server.domain,
            user_count: server.user_count,
            nodes: ServerNode::from_entries(balancer.nodes),
        }
    }

    /// Link to the HTML5 client of this release. `{server}` is left in the
    /// config template for the client to fill in.
    pub fn html_url(&self) -> String {
        let domain = &self.domain;
        format!(
            "https://{domain}/html/index.html?config-template=https://c{{server}}.{domain}/config.xml\
             &resources=../resources&balancer=https://balancer.{domain}/balancer"
        )
    }

    /// Link to the Flash client of this release in `locale`.
    pub fn flash_url(&self, locale: Locale) -> String {
        let domain = &self.domain;
        let lang = locale.code();
        format!("https://{domain}/flash/index.html?config=https://c1.{domain}/config.xml&locale={lang}&lang={lang}")
    }
}

impl fmt::Display for TestServerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.release)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn node(online: i64) -> Value {
        json!({
            "endpoint": {"host": "c1.example.com", "status": "UP", "tcpPorts": [5190], "wsPorts": [8080, 8443]},
            "inbattles": 3,
            "online": online,
            "partners": {"steam": true}
        })
    }

    #[test]
    fn node_names_come_from_map_keys() {
        let raw: schema::StableStatus = serde_json::from_value(json!({
            "linkForDownloadAPK": "",
            "minSupportedAndroidVersion": 21,
            "maxSupportedAndroidVersion": 34,
            "nodes": {"main.c1": node(10), "main.c2": node(5)}
        }))
        .unwrap();
        let status = StableServerStatus::from_schema(raw);

        assert_eq!(status.apk_link, None);
        assert_eq!(status.supported_android, (21, 34));
        assert_eq!(status.nodes[0].name, "main.c1");
        assert_eq!(status.nodes[1].name, "main.c2");
        assert_eq!(status.nodes[0].ws_ports, [8080, 8443]);
        assert_eq!(status.nodes[0].partners, json!({"steam": true}));
        assert_eq!(status.online(), 15);
    }

    #[test]
    fn test_server_urls() {
        let status = TestServerStatus {
            release: "public-deploy1".into(),
            domain: "public-deploy1.test-eu.tankionline.com".into(),
            user_count: 0,
            nodes: Vec::new(),
        };
        assert_eq!(
            status.html_url(),
            "https://public-deploy1.test-eu.tankionline.com/html/index.html?config-template=\
             https://c{server}.public-deploy1.test-eu.tankionline.com/config.xml&resources=../resources\
             &balancer=https://balancer.public-deploy1.test-eu.tankionline.com/balancer"
        );
        assert!(status.flash_url(Locale::Russian).ends_with("/config.xml&locale=ru&lang=ru"));
        assert!(status.flash_url(Locale::English).contains("https://c1.public-deploy1.test-eu.tankionline.com/"));
    }
}
