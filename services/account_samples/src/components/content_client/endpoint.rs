use url::Url;

use super::error::{ClientError, Result};

pub const DEFAULT_ENDPOINT: &str = "https://shoppingcontent.googleapis.com/content/v2/";
pub const ENDPOINT_ENV_VAR: &str = "GOOGLE_SHOPPING_SAMPLES_ENDPOINT";

///
/// Base URL that every accounts resource path is joined onto.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentEndpoint {
    base: Url,
    overridden: bool,
}

impl ContentEndpoint {
    /// Uses `GOOGLE_SHOPPING_SAMPLES_ENDPOINT` when it is set and not blank.
    pub fn from_env() -> Result<Self> {
        let value = std::env::var(ENDPOINT_ENV_VAR).ok();
        Self::resolve(value.as_deref())
    }

    pub fn resolve(override_url: Option<&str>) -> Result<Self> {
        match override_url.map(str::trim).filter(|url| !url.is_empty()) {
            Some(url) => Ok(Self {
                base: parse_base(url)?,
                overridden: true,
            }),
            None => Ok(Self {
                base: parse_base(DEFAULT_ENDPOINT)?,
                overridden: false,
            }),
        }
    }

    pub fn is_overridden(&self) -> bool {
        self.overridden
    }

    pub fn as_url(&self) -> &Url {
        &self.base
    }

    pub fn join(&self, path: &str) -> Result<Url> {
        self.base
            .join(path)
            .map_err(|err| invalid(self.base.as_str(), err.to_string()))
    }
}

fn parse_base(endpoint: &str) -> Result<Url> {
    let mut url = Url::parse(endpoint).map_err(|err| invalid(endpoint, err.to_string()))?;

    if url.cannot_be_a_base() || url.host_str().is_none() {
        return Err(invalid(endpoint, "expected an absolute URL".to_string()));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    url.set_query(None);
    url.set_fragment(None);

    Ok(url)
}

fn invalid(endpoint: &str, reason: String) -> ClientError {
    ClientError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason,
    }
}
