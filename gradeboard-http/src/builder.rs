use std::marker::PhantomData;

use gradeboard_core::DashboardError;
use url::Url;

use crate::source::HttpSource;
use crate::{OlapConnector, TransactionalConnector};

/// Builder shared by the HTTP connectors.
///
/// `base_url` is required; a `reqwest::Client` and a bearer token are optional.
pub struct HttpConnectorBuilder<C> {
    base_url: Option<Url>,
    client: Option<reqwest::Client>,
    bearer: Option<String>,
    _connector: PhantomData<fn() -> C>,
}

/// Builder specialized for [`TransactionalConnector`].
pub type TransactionalConnectorBuilder = HttpConnectorBuilder<TransactionalConnector>;

/// Builder specialized for [`OlapConnector`].
pub type OlapConnectorBuilder = HttpConnectorBuilder<OlapConnector>;

impl<C> Default for HttpConnectorBuilder<C> {
    fn default() -> Self {
        Self {
            base_url: None,
            client: None,
            bearer: None,
            _connector: PhantomData,
        }
    }
}

impl<C: From<HttpSource>> HttpConnectorBuilder<C> {
    /// Set the backend's base URL. Paths are resolved relative to it.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `url` does not parse or cannot serve as a base.
    pub fn base_url(mut self, url: &str) -> Result<Self, DashboardError> {
        let parsed =
            Url::parse(url).map_err(|e| DashboardError::InvalidArg(format!("base_url {url}: {e}")))?;
        if parsed.cannot_be_a_base() {
            return Err(DashboardError::InvalidArg(format!(
                "base_url {url} cannot be a base"
            )));
        }
        self.base_url = Some(parsed);
        Ok(self)
    }

    /// Reuse an existing HTTP client (connection pool, proxies, TLS settings).
    #[must_use]
    pub fn client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Send `Authorization: Bearer <token>` with every request.
    #[must_use]
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer = Some(token.into());
        self
    }

    /// Build the connector.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no base URL was set.
    pub fn build(self) -> Result<C, DashboardError> {
        let base = self.base_url.ok_or_else(|| {
            DashboardError::InvalidArg("base_url is required; call base_url(...)".to_string())
        })?;
        let client = self.client.unwrap_or_default();
        Ok(C::from(HttpSource::new(base, client, self.bearer)))
    }
}
