use serde::Deserialize;
use blogstats_core::error::{BlogStatsError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub admin: AdminSection,

    #[serde(default)]
    pub store: StoreSection,

    #[serde(default)]
    pub ingest: IngestSection,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            admin: AdminSection::default(),
            store: StoreSection::default(),
            ingest: IngestSection::default(),
        }
    }
}

impl ServiceConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(BlogStatsError::UnsupportedVersion);
        }

        self.server.validate()?;
        self.store.validate()?;

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Upper bound for a beacon body; larger bodies are rejected as bad requests.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        if self.listen.parse::<std::net::SocketAddr>().is_err() {
            return Err(BlogStatsError::Config(
                "server.listen must be a valid socket address".into(),
            ));
        }
        if !(64..=1_048_576).contains(&self.max_body_bytes) {
            return Err(BlogStatsError::Config(
                "server.max_body_bytes must be between 64 and 1048576".into(),
            ));
        }
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_max_body_bytes() -> usize {
    4096
}

/// Admin endpoint credential.
///
/// The secret is read from the env var named by `token_env` first, then from
/// `token`. An empty value counts as unset, which locks the endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdminSection {
    #[serde(default)]
    pub token: Option<String>,

    #[serde(default = "default_token_env")]
    pub token_env: String,
}

impl Default for AdminSection {
    fn default() -> Self {
        Self {
            token: None,
            token_env: default_token_env(),
        }
    }
}

impl AdminSection {
    /// Resolve the effective secret using `lookup` for environment access.
    pub fn resolve_token<F>(&self, lookup: F) -> Option<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup(&self.token_env)
            .filter(|t| !t.is_empty())
            .or_else(|| self.token.clone().filter(|t| !t.is_empty()))
    }
}

fn default_token_env() -> String {
    "BLOG_ADMIN_TOKEN".into()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    #[default]
    Memory,
    File,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct StoreSection {
    #[serde(default)]
    pub kind: StoreKind,

    /// Snapshot file for `kind: file`.
    #[serde(default)]
    pub path: Option<String>,
}

impl StoreSection {
    pub fn validate(&self) -> Result<()> {
        if self.kind == StoreKind::File && self.path.as_deref().map_or(true, str::is_empty) {
            return Err(BlogStatsError::Config(
                "store.path is required when store.kind is file".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IngestSection {
    /// Funnel updates for the same slug through one in-process lock.
    #[serde(default = "default_serialize_per_slug")]
    pub serialize_per_slug: bool,
}

impl Default for IngestSection {
    fn default() -> Self {
        Self {
            serialize_per_slug: default_serialize_per_slug(),
        }
    }
}

fn default_serialize_per_slug() -> bool {
    true
}
