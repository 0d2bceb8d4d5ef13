// Catalog wire and normalized types.
// Defines structs for deserializing the remote catalog JSON and the
// in-memory item list derived from it.

use serde::{Deserialize, Serialize};

/// One package entry as published by the remote catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    #[serde(rename = "appName", deserialize_with = "de::lenient_string")]
    pub name: String,
    #[serde(
        rename = "appShortDescription",
        default,
        deserialize_with = "de::lenient_string"
    )]
    pub short_description: String,
    #[serde(rename = "androidPackageName", deserialize_with = "de::lenient_string")]
    pub package_id: String,
    #[serde(
        rename = "currentVersionCode",
        alias = "currentVersion",
        default,
        deserialize_with = "de::lenient_opt_string"
    )]
    pub current_version: Option<String>,
    #[serde(rename = "latestVersionCode", deserialize_with = "de::lenient_string")]
    pub latest_version: String,
    #[serde(rename = "latestVersionUrl", deserialize_with = "de::lenient_string")]
    pub download_url: String,
    #[serde(rename = "icon", default, deserialize_with = "de::lenient_string")]
    pub icon_url: String,
    #[serde(rename = "requireMicroG", default, deserialize_with = "de::lenient_bool")]
    pub requires_extra_service: bool,
    #[serde(default, deserialize_with = "de::lenient_i64")]
    pub index: i64,
}

/// Wire envelope around the package list.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogResponse {
    #[serde(default)]
    pub packages: Vec<CatalogEntry>,
    /// Accepted but discarded by normalization.
    #[serde(default)]
    pub sponsor: Option<String>,
}

/// Install status of a catalog item. Transitions are driven by external
/// download/install collaborators, not by the fetcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InstallStatus {
    NotInstalled,
    UpToDate,
    UpdateAvailable,
    PendingDownload,
    Downloading,
    Installing,
    Uninstalling,
    #[default]
    #[serde(other)]
    Unknown,
}

impl InstallStatus {
    pub fn label(&self) -> &'static str {
        match self {
            InstallStatus::NotInstalled => "not installed",
            InstallStatus::UpToDate => "up to date",
            InstallStatus::UpdateAvailable => "update available",
            InstallStatus::PendingDownload => "pending download",
            InstallStatus::Downloading => "downloading",
            InstallStatus::Installing => "installing",
            InstallStatus::Uninstalling => "uninstalling",
            InstallStatus::Unknown => "unknown",
        }
    }
}

/// Normalized catalog item owned by the current catalog list.
/// Cache entries decode with the same leniency as the wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    #[serde(deserialize_with = "de::lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub short_description: String,
    #[serde(deserialize_with = "de::lenient_string")]
    pub package_name: String,
    /// Absent means not installed.
    #[serde(default, deserialize_with = "de::lenient_opt_string")]
    pub current_version: Option<String>,
    #[serde(deserialize_with = "de::lenient_string")]
    pub latest_version: String,
    #[serde(deserialize_with = "de::lenient_string")]
    pub download_url: String,
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub icon_url: String,
    #[serde(default, deserialize_with = "de::lenient_i64")]
    pub index: i64,
    /// Fraction in 0.0..=1.0, locally owned.
    #[serde(default, deserialize_with = "de::lenient_f32")]
    pub download_progress: f32,
    #[serde(default)]
    pub status: InstallStatus,
}

impl CatalogItem {
    /// Derive an item from a wire entry. Drops `requires_extra_service`;
    /// `download_progress` and `status` start at their defaults.
    pub fn from_entry(entry: CatalogEntry) -> Self {
        Self {
            title: entry.name,
            short_description: entry.short_description,
            package_name: entry.package_id,
            current_version: entry.current_version,
            latest_version: entry.latest_version,
            download_url: entry.download_url,
            icon_url: entry.icon_url,
            index: entry.index,
            download_progress: 0.0,
            status: InstallStatus::default(),
        }
    }
}

/// Convert wire entries into items, preserving wire order. `index` is
/// carried through unchanged and never used to reorder.
pub fn normalize(entries: Vec<CatalogEntry>) -> Vec<CatalogItem> {
    entries.into_iter().map(CatalogItem::from_entry).collect()
}

mod de {
    // Lenient scalar decoding: the remote source occasionally ships
    // version codes as numbers, booleans as strings, and indices as
    // strings. Coerce instead of failing the whole document.

    use serde::de::{Deserializer, Error};
    use serde::Deserialize;
    use serde_json::Value;

    pub fn lenient_string<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
        match Value::deserialize(de)? {
            Value::String(s) => Ok(s),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            Value::Null => Ok(String::new()),
            other => Err(Error::custom(format!("expected string, got {other}"))),
        }
    }

    pub fn lenient_opt_string<'de, D: Deserializer<'de>>(
        de: D,
    ) -> Result<Option<String>, D::Error> {
        match Value::deserialize(de)? {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s)),
            Value::Number(n) => Ok(Some(n.to_string())),
            other => Err(Error::custom(format!("expected string, got {other}"))),
        }
    }

    pub fn lenient_bool<'de, D: Deserializer<'de>>(de: D) -> Result<bool, D::Error> {
        match Value::deserialize(de)? {
            Value::Bool(b) => Ok(b),
            Value::Number(n) => Ok(n.as_i64().unwrap_or(0) != 0),
            Value::String(s) => match s.to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" | "" => Ok(false),
                other => Err(Error::custom(format!("expected bool, got {other:?}"))),
            },
            Value::Null => Ok(false),
            other => Err(Error::custom(format!("expected bool, got {other}"))),
        }
    }

    pub fn lenient_i64<'de, D: Deserializer<'de>>(de: D) -> Result<i64, D::Error> {
        match Value::deserialize(de)? {
            Value::Number(n) => n
                .as_i64()
                .ok_or_else(|| Error::custom("expected integer")),
            Value::String(s) => s
                .trim()
                .parse()
                .map_err(|_| Error::custom(format!("expected integer, got {s:?}"))),
            Value::Null => Ok(0),
            other => Err(Error::custom(format!("expected integer, got {other}"))),
        }
    }

    pub fn lenient_f32<'de, D: Deserializer<'de>>(de: D) -> Result<f32, D::Error> {
        match Value::deserialize(de)? {
            Value::Number(n) => Ok(n.as_f64().unwrap_or(0.0) as f32),
            Value::String(s) => s
                .trim()
                .parse()
                .map_err(|_| Error::custom(format!("expected number, got {s:?}"))),
            Value::Null => Ok(0.0),
            other => Err(Error::custom(format!("expected number, got {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SINGLE_PACKAGE: &str = r#"{
        "packages": [{
            "appName": "Foo",
            "androidPackageName": "com.foo",
            "latestVersionCode": "2.0",
            "appShortDescription": "desc",
            "requireMicroG": false,
            "latestVersionUrl": "http://x/f.apk",
            "icon": "http://x/i.png",
            "index": 0
        }]
    }"#;

    #[test]
    fn test_parse_single_package() {
        let response: CatalogResponse = serde_json::from_str(SINGLE_PACKAGE).unwrap();
        assert_eq!(response.packages.len(), 1);
        assert!(response.sponsor.is_none());

        let items = normalize(response.packages);
        let item = &items[0];
        assert_eq!(item.title, "Foo");
        assert_eq!(item.package_name, "com.foo");
        assert_eq!(item.latest_version, "2.0");
        assert_eq!(item.current_version, None);
        assert_eq!(item.download_progress, 0.0);
        assert_eq!(item.status, InstallStatus::Unknown);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let body = r#"{
            "packages": [{
                "appName": "Foo",
                "androidPackageName": "com.foo",
                "latestVersionCode": "2.0",
                "appShortDescription": "desc",
                "requireMicroG": false,
                "latestVersionUrl": "http://x/f.apk",
                "icon": "http://x/i.png",
                "index": 0,
                "region": "EU"
            }],
            "mirror": "https://elsewhere.example"
        }"#;
        let response: CatalogResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.packages.len(), 1);
        assert_eq!(response.packages[0].name, "Foo");
    }

    #[test]
    fn test_lenient_scalars_coerced() {
        let body = r#"{
            "packages": [{
                "appName": "Bar",
                "androidPackageName": "com.bar",
                "latestVersionCode": 3,
                "requireMicroG": "true",
                "latestVersionUrl": "http://x/b.apk",
                "index": "7"
            }]
        }"#;
        let response: CatalogResponse = serde_json::from_str(body).unwrap();
        let entry = &response.packages[0];
        assert_eq!(entry.latest_version, "3");
        assert!(entry.requires_extra_service);
        assert_eq!(entry.index, 7);
        assert_eq!(entry.short_description, "");
        assert_eq!(entry.icon_url, "");
    }

    #[test]
    fn test_sponsor_accepted_and_dropped() {
        let body = r#"{"packages": [], "sponsor": "someone"}"#;
        let response: CatalogResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.sponsor.as_deref(), Some("someone"));
        assert!(normalize(response.packages).is_empty());
    }

    #[test]
    fn test_normalize_preserves_order() {
        let body = r#"{
            "packages": [
                {"appName": "C", "androidPackageName": "com.c", "latestVersionCode": "1",
                 "latestVersionUrl": "http://x/c.apk", "index": 2},
                {"appName": "A", "androidPackageName": "com.a", "latestVersionCode": "1",
                 "latestVersionUrl": "http://x/a.apk", "index": 0},
                {"appName": "B", "androidPackageName": "com.b", "latestVersionCode": "1",
                 "latestVersionUrl": "http://x/b.apk", "index": 1}
            ]
        }"#;
        let response: CatalogResponse = serde_json::from_str(body).unwrap();
        let packages = response.packages.clone();
        let items = normalize(response.packages);

        assert_eq!(items.len(), packages.len());
        for (item, entry) in items.iter().zip(&packages) {
            assert_eq!(item.package_name, entry.package_id);
        }
        // Wire order wins over index values.
        let titles: Vec<&str> = items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, ["C", "A", "B"]);
    }

    #[test]
    fn test_status_decodes_tolerantly() {
        let status: InstallStatus = serde_json::from_str(r#""update_available""#).unwrap();
        assert_eq!(status, InstallStatus::UpdateAvailable);

        let status: InstallStatus = serde_json::from_str(r#""sideloading""#).unwrap();
        assert_eq!(status, InstallStatus::Unknown);
    }

    #[test]
    fn test_item_roundtrips_through_json() {
        let item = CatalogItem {
            title: "Foo".into(),
            short_description: "desc".into(),
            package_name: "com.foo".into(),
            current_version: Some("1.9".into()),
            latest_version: "2.0".into(),
            download_url: "http://x/f.apk".into(),
            icon_url: "http://x/i.png".into(),
            index: 0,
            download_progress: 0.5,
            status: InstallStatus::UpdateAvailable,
        };
        let json = serde_json::to_string(&item).unwrap();
        let back: CatalogItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }
}
