use gradeboard_core::DashboardError;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

/// Shared HTTP handle for one backend: base URL, client and optional bearer token.
#[derive(Clone, Debug)]
pub struct HttpSource {
    base: Url,
    client: reqwest::Client,
    bearer: Option<String>,
}

impl HttpSource {
    pub(crate) fn new(mut base: Url, client: reqwest::Client, bearer: Option<String>) -> Self {
        // Url::join drops the last path segment unless the base ends with '/'.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Self {
            base,
            client,
            bearer,
        }
    }

    /// The normalized base URL (always ends with `/`).
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base
    }

    /// GET `path` relative to the base URL and decode the JSON body.
    ///
    /// Error normalization:
    /// - 404 → `NotFound { what }`
    /// - other non-success status or transport failure → `Connector`
    /// - undecodable body → `Data`
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "gradeboard::http",
            skip(self),
            fields(base = %self.base),
        )
    )]
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        connector: &'static str,
        path: &str,
        what: &str,
    ) -> Result<T, DashboardError> {
        let url = self
            .base
            .join(path)
            .map_err(|e| DashboardError::InvalidArg(format!("invalid path {path}: {e}")))?;

        let mut req = self.client.get(url);
        if let Some(token) = &self.bearer {
            req = req.bearer_auth(token);
        }

        let resp = req
            .send()
            .await
            .map_err(|e| DashboardError::connector(connector, e.to_string()))?;

        let status = resp.status();
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "gradeboard::http", status = status.as_u16(), "response");
        if status == StatusCode::NOT_FOUND {
            return Err(DashboardError::not_found(what));
        }
        if !status.is_success() {
            return Err(DashboardError::connector(
                connector,
                format!("HTTP {status} for {what}"),
            ));
        }

        resp.json::<T>().await.map_err(|e| {
            if e.is_decode() {
                DashboardError::Data(format!("malformed {what}: {e}"))
            } else {
                DashboardError::connector(connector, e.to_string())
            }
        })
    }
}
