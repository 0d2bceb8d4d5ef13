// Catalog source HTTP client.
// Fetches the raw catalog document as text. The source is a static JSON
// file: no authentication, no custom headers, no pagination.

use reqwest::{Client, Response};

use crate::error::{Result, ShelfError};

use super::endpoints::SourceEndpoints;

/// HTTP client bound to a catalog source.
pub struct CatalogClient {
    client: Client,
    endpoints: SourceEndpoints,
}

impl CatalogClient {
    /// Create a client for the given endpoint set.
    pub fn new(endpoints: SourceEndpoints) -> Result<Self> {
        let client = Client::builder().build().map_err(ShelfError::Source)?;
        Ok(Self { client, endpoints })
    }

    /// Create a client for the default published source.
    pub fn default_source() -> Result<Self> {
        Self::new(SourceEndpoints::default())
    }

    pub fn endpoints(&self) -> &SourceEndpoints {
        &self.endpoints
    }

    /// Fetch the catalog document body.
    pub async fn fetch_document(&self) -> Result<String> {
        let url = self.endpoints.resolve();
        let response = self.client.get(url).send().await.map_err(ShelfError::Source)?;
        let response = check_response(response)?;
        let body = response.text().await.map_err(ShelfError::Source)?;
        Ok(body)
    }
}

/// Check response status and convert errors.
fn check_response(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ShelfError::SourceStatus(status))
    }
}
