// Catalog fetcher.
// Cache-first retrieval flow: return the cached list unless a refresh is
// forced, otherwise fetch the remote document, parse it tolerantly,
// normalize, and write the result back to the store.

use std::sync::Arc;

use crate::cache::KeyValueStore;
use crate::error::Result;

use super::client::CatalogClient;
use super::types::{normalize, CatalogItem, CatalogResponse};

/// Store key holding the serialized catalog list.
pub const CATALOG_CACHE_KEY: &str = "catalog_items";

/// Result of a successful catalog retrieval.
pub struct FetchOutcome {
    pub items: Vec<CatalogItem>,
    /// True when the list was served from the local store without a
    /// network round trip.
    pub from_cache: bool,
    /// Set when the fetched list could not be written back. Non-fatal:
    /// the fetched list is returned regardless.
    pub persist_error: Option<crate::error::ShelfError>,
}

/// Fetches the remote catalog and keeps a serialized copy in an
/// injected string store.
pub struct CatalogFetcher {
    client: CatalogClient,
    store: Arc<dyn KeyValueStore>,
}

impl CatalogFetcher {
    pub fn new(client: CatalogClient, store: Arc<dyn KeyValueStore>) -> Self {
        Self { client, store }
    }

    /// Fetch the catalog, mapping every failure to an empty list.
    /// Callers cannot distinguish "no apps available" from "fetch
    /// failed" here; use [`try_get_catalog`](Self::try_get_catalog)
    /// when the cause matters.
    pub async fn get_catalog(&self, force_refresh: bool) -> Vec<CatalogItem> {
        match self.try_get_catalog(force_refresh).await {
            Ok(outcome) => outcome.items,
            Err(_) => Vec::new(),
        }
    }

    /// Fetch the catalog, surfacing the failure cause.
    ///
    /// With `force_refresh` unset, a present and non-empty cached list
    /// is returned without touching the network. With it set, the cache
    /// key is erased first (best-effort) and the fetch always happens.
    pub async fn try_get_catalog(&self, force_refresh: bool) -> Result<FetchOutcome> {
        if force_refresh {
            // A failed erase never blocks the fetch.
            let _ = self.store.remove(CATALOG_CACHE_KEY);
        } else if let Some(items) = self.load_cached()? {
            if !items.is_empty() {
                return Ok(FetchOutcome {
                    items,
                    from_cache: true,
                    persist_error: None,
                });
            }
        }

        let body = self.client.fetch_document().await?;
        let response: CatalogResponse = serde_json::from_str(&body)?;
        let items = normalize(response.packages);

        let persist_error = self.persist(&items).err();

        Ok(FetchOutcome {
            items,
            from_cache: false,
            persist_error,
        })
    }

    /// Read the cached list. An empty stored string means absent. The
    /// stored value is trusted self-written data: a malformed value is
    /// a hard error, not a silent refetch.
    pub fn load_cached(&self) -> Result<Option<Vec<CatalogItem>>> {
        let raw = self.store.get(CATALOG_CACHE_KEY, "");
        if raw.is_empty() {
            return Ok(None);
        }
        let items: Vec<CatalogItem> = serde_json::from_str(&raw)?;
        Ok(Some(items))
    }

    /// Serialize the list under the fixed cache key, overwriting any
    /// previous value.
    fn persist(&self, items: &[CatalogItem]) -> Result<()> {
        let serialized = serde_json::to_string(items)?;
        self.store.set(CATALOG_CACHE_KEY, &serialized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{KeyValueStore, MemoryStore};
    use crate::catalog::endpoints::SourceEndpoints;
    use crate::error::ShelfError;

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    const CATALOG_BODY: &str = r#"{
        "packages": [{
            "appName": "Foo",
            "androidPackageName": "com.foo",
            "latestVersionCode": "2.0",
            "appShortDescription": "desc",
            "requireMicroG": false,
            "latestVersionUrl": "http://x/f.apk",
            "icon": "http://x/i.png",
            "index": 0
        }],
        "sponsor": null
    }"#;

    /// Serve every connection on a loopback port the same canned
    /// response. Returns the base URL.
    async fn spawn_source(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    break;
                };
                let mut buf = [0u8; 2048];
                let _ = socket.read(&mut buf).await;
                let response = format!(
                    "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
            }
        });
        format!("http://{addr}/rv-apps.json")
    }

    fn fetcher_for(url: String, store: Arc<dyn KeyValueStore>) -> CatalogFetcher {
        let client = CatalogClient::new(SourceEndpoints::single(url)).unwrap();
        CatalogFetcher::new(client, store)
    }

    #[tokio::test]
    async fn test_fetch_normalizes_wire_payload() {
        let url = spawn_source("200 OK", CATALOG_BODY).await;
        let fetcher = fetcher_for(url, Arc::new(MemoryStore::new()));

        let items = fetcher.get_catalog(true).await;
        assert_eq!(items.len(), 1);
        let item = &items[0];
        assert_eq!(item.title, "Foo");
        assert_eq!(item.package_name, "com.foo");
        assert_eq!(item.latest_version, "2.0");
        assert_eq!(item.current_version, None);
        assert_eq!(item.download_progress, 0.0);
        assert_eq!(item.status, crate::catalog::InstallStatus::Unknown);
    }

    #[tokio::test]
    async fn test_roundtrip_through_cache() {
        let url = spawn_source("200 OK", CATALOG_BODY).await;
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let fetcher = fetcher_for(url, store);

        let fetched = fetcher.try_get_catalog(true).await.unwrap();
        assert!(!fetched.from_cache);
        assert!(fetched.persist_error.is_none());

        let cached = fetcher.try_get_catalog(false).await.unwrap();
        assert!(cached.from_cache);
        assert_eq!(cached.items, fetched.items);
    }

    #[tokio::test]
    async fn test_server_error_yields_empty_list() {
        let url = spawn_source("500 Internal Server Error", "boom").await;
        let fetcher = fetcher_for(url, Arc::new(MemoryStore::new()));

        let items = fetcher.get_catalog(true).await;
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_body_yields_empty_list() {
        let url = spawn_source("200 OK", "{not json").await;
        let fetcher = fetcher_for(url, Arc::new(MemoryStore::new()));

        let items = fetcher.get_catalog(true).await;
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_empty_cache_value_means_absent() {
        let url = spawn_source("200 OK", CATALOG_BODY).await;
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        store.set(CATALOG_CACHE_KEY, "").unwrap();
        let fetcher = fetcher_for(url, store);

        assert!(fetcher.load_cached().unwrap().is_none());

        // Absent cache means a non-forced call goes to the network.
        let outcome = fetcher.try_get_catalog(false).await.unwrap();
        assert!(!outcome.from_cache);
        assert_eq!(outcome.items.len(), 1);
    }

    #[tokio::test]
    async fn test_force_refresh_erases_stale_cache() {
        let url = spawn_source("200 OK", CATALOG_BODY).await;
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        store
            .set(
                CATALOG_CACHE_KEY,
                r#"[{"title":"Stale","package_name":"com.stale","latest_version":"1","download_url":"http://x/s.apk"}]"#,
            )
            .unwrap();
        let fetcher = fetcher_for(url, store);

        let outcome = fetcher.try_get_catalog(true).await.unwrap();
        assert_eq!(outcome.items[0].title, "Foo");

        let cached = fetcher.load_cached().unwrap().unwrap();
        assert_eq!(cached[0].title, "Foo");
    }

    #[tokio::test]
    async fn test_corrupt_cache_is_a_hard_error() {
        let url = spawn_source("200 OK", CATALOG_BODY).await;
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        store.set(CATALOG_CACHE_KEY, "definitely not a list").unwrap();
        let fetcher = fetcher_for(url, store);

        assert!(fetcher.load_cached().is_err());
        assert!(matches!(
            fetcher.try_get_catalog(false).await,
            Err(ShelfError::Json(_))
        ));
    }

    /// Store whose writes always fail.
    struct ReadOnlyStore(MemoryStore);

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, key: &str, default: &str) -> String {
            self.0.get(key, default)
        }
        fn set(&self, _key: &str, _value: &str) -> crate::error::Result<()> {
            Err(ShelfError::Other("store is read-only".into()))
        }
        fn remove(&self, _key: &str) -> crate::error::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_persist_failure_is_non_fatal() {
        let url = spawn_source("200 OK", CATALOG_BODY).await;
        let fetcher = fetcher_for(url, Arc::new(ReadOnlyStore(MemoryStore::new())));

        let outcome = fetcher.try_get_catalog(true).await.unwrap();
        assert_eq!(outcome.items.len(), 1);
        assert!(outcome.persist_error.is_some());
    }
}
