use crate::loader::{Fetch, versioned_path};
use crate::resource::ResourceError;
use gloo_net::http::Request;

/// Fetches resources over HTTP, relative to the document's `<base href>`.
#[derive(Debug, Clone)]
pub(crate) struct HttpFetcher {
    version: String,
}

impl HttpFetcher {
    pub(crate) fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }
}

fn transport(path: &str, error: gloo_net::Error) -> ResourceError {
    ResourceError::Transport {
        path: path.to_string(),
        message: error.to_string(),
    }
}

impl Fetch for HttpFetcher {
    async fn fetch_text(&self, path: &str) -> Result<String, ResourceError> {
        let url = versioned_path(path, &self.version);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| transport(path, e))?;
        if !response.ok() {
            return Err(ResourceError::Status {
                path: path.to_string(),
                status: response.status(),
            });
        }
        response.text().await.map_err(|e| transport(path, e))
    }
}
