// Catalog module.
// Provides the source client, wire and normalized types, and the
// cache-first fetcher.

#![allow(dead_code, unused_imports)]

pub mod client;
pub mod endpoints;
pub mod fetcher;
pub mod types;

pub use client::CatalogClient;
pub use endpoints::SourceEndpoints;
pub use fetcher::{CATALOG_CACHE_KEY, CatalogFetcher, FetchOutcome};
pub use types::{CatalogEntry, CatalogItem, CatalogResponse, InstallStatus, normalize};
