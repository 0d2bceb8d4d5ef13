// Catalog source endpoints.
// Resolves the URL the catalog document is fetched from.

const SOURCE_BASE: &str = "https://raw.githubusercontent.com/rv-apps/catalog/main";

/// Source URLs for the catalog document, one per Android ABI plus a
/// generic fallback. The per-ABI variants are retained as configuration
/// for forward compatibility; resolution always picks the fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEndpoints {
    pub arm64_v8a: String,
    pub armeabi_v7a: String,
    pub x86: String,
    pub x86_64: String,
    pub fallback: String,
}

impl Default for SourceEndpoints {
    fn default() -> Self {
        Self::with_base(SOURCE_BASE)
    }
}

impl SourceEndpoints {
    /// Build the endpoint set under a base URL.
    pub fn with_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            arm64_v8a: format!("{base}/rv-apps-arm64-v8a.json"),
            armeabi_v7a: format!("{base}/rv-apps-armeabi-v7a.json"),
            x86: format!("{base}/rv-apps-x86.json"),
            x86_64: format!("{base}/rv-apps-x86_64.json"),
            fallback: format!("{base}/rv-apps.json"),
        }
    }

    /// An endpoint set with a single explicit URL for every slot.
    /// Used by tests and local mirrors.
    pub fn single(url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            arm64_v8a: url.clone(),
            armeabi_v7a: url.clone(),
            x86: url.clone(),
            x86_64: url.clone(),
            fallback: url,
        }
    }

    /// The URL to fetch. Always the fallback; ABI-specific documents
    /// were never published.
    pub fn resolve(&self) -> &str {
        &self.fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_picks_fallback() {
        let endpoints = SourceEndpoints::default();
        assert_eq!(
            endpoints.resolve(),
            "https://raw.githubusercontent.com/rv-apps/catalog/main/rv-apps.json"
        );
        assert_ne!(endpoints.resolve(), endpoints.arm64_v8a);
    }

    #[test]
    fn test_with_base_strips_trailing_slash() {
        let endpoints = SourceEndpoints::with_base("https://mirror.example/apps/");
        assert_eq!(
            endpoints.fallback,
            "https://mirror.example/apps/rv-apps.json"
        );
    }
}
