use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Client;

use crate::app::{BuboError, Result};
use crate::config::TransportProfile;
use crate::fetcher::{Fetcher, RawFeedResponse};

/// reqwest-backed fetcher bound to one [`TransportProfile`].
pub struct HttpFetcher {
    name: String,
    client: Client,
}

impl HttpFetcher {
    pub fn from_profile(profile: &TransportProfile) -> Result<Self> {
        let mut headers = HeaderMap::new();
        for (key, value) in &profile.headers {
            let name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|e| BuboError::Other(format!("invalid header name {key:?}: {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| BuboError::Other(format!("invalid value for header {key}: {e}")))?;
            headers.insert(name, value);
        }

        let client = Client::builder()
            .timeout(profile.timeout())
            .gzip(true)
            .brotli(true)
            .user_agent(profile.user_agent.as_str())
            .default_headers(headers)
            .danger_accept_invalid_certs(profile.accept_invalid_certs)
            .build()?;

        Ok(Self {
            name: profile.name.clone(),
            client,
        })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self, url: &str) -> Result<RawFeedResponse> {
        let url = url::Url::parse(url)?;
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BuboError::HttpStatus(status.as_u16()));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        let body = response.bytes().await?.to_vec();
        check_body(&body)?;

        Ok(RawFeedResponse {
            body,
            content_type,
            profile: self.name.clone(),
        })
    }
}

/// Reject bodies that cannot possibly be an XML or JSON feed.
pub(crate) fn check_body(body: &[u8]) -> Result<()> {
    let body = body.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(body);
    match body.iter().copied().find(|b| !b.is_ascii_whitespace()) {
        None => Err(BuboError::MalformedBody("empty body".into())),
        Some(b'<') | Some(b'{') => Ok(()),
        Some(_) => Err(BuboError::MalformedBody(
            "body is neither XML nor JSON".into(),
        )),
    }
}
