use url::Url;

/// A fetched resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub url: String,
    pub status: u16,
    pub content_type: String,
    pub body: Vec<u8>,
}

impl Response {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Error during fetch
#[derive(Debug, Clone)]
pub struct FetchError {
    pub message: String,
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for FetchError {}

/// Anything that can turn a URL into a response.
pub trait Fetch {
    fn fetch(&self, url: &Url) -> Result<Response, FetchError>;
}

/// Blocking HTTP fetcher.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("memory-universe/", env!("CARGO_PKG_VERSION")))
            .timeout(std::time::Duration::from_secs(15))
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| FetchError {
                message: format!("Client error: {}", e),
            })?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &Url) -> Result<Response, FetchError> {
        let response = self
            .client
            .get(url.as_str())
            .send()
            .map_err(|e| FetchError {
                message: format!("Request failed: {}", e),
            })?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("application/octet-stream")
            .to_string();
        let final_url = response.url().to_string();

        let body = response.bytes().map_err(|e| FetchError {
            message: format!("Failed to read body: {}", e),
        })?;

        Ok(Response {
            url: final_url,
            status,
            content_type,
            body: body.to_vec(),
        })
    }
}

/// Parse an origin string, accepting a bare host.
pub fn parse_origin(origin: &str) -> Result<Url, FetchError> {
    let origin = if !origin.starts_with("http://") && !origin.starts_with("https://") {
        format!("https://{}", origin)
    } else {
        origin.to_string()
    };
    Url::parse(&origin).map_err(|e| FetchError {
        message: format!("Invalid URL: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_host_gets_https() {
        let url = parse_origin("example.com").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("example.com"));
    }

    #[test]
    fn invalid_origin_is_an_error() {
        let err = parse_origin("http://").unwrap_err();
        assert!(err.to_string().starts_with("Invalid URL"));
    }
}
