//! Location lookup and autocomplete filtering.

use std::path::Path;

use serde::Deserialize;

use crate::domain::{LABEL_SEPARATOR, LocationRef};

use super::error::CatalogError;

/// Catalog bundled with the binary.
const BUILTIN_CATALOG: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/locations.json"));

/// A known place.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Location {
    pub short_code: String,
    pub english_name: String,
    /// Region label shown under the option (e.g. a state code).
    pub code_state: String,
}

impl Location {
    /// Autocomplete option text: `"<short_code> - <english_name>"`.
    pub fn option_label(&self) -> String {
        format!("{}{}{}", self.short_code, LABEL_SEPARATOR, self.english_name)
    }

    /// A form reference to this place.
    pub fn to_ref(&self) -> LocationRef {
        LocationRef::new(self.short_code.clone(), Some(self.english_name.clone()))
    }
}

/// Read-only list of known locations.
///
/// Order is the catalog's own; searches preserve it.
#[derive(Debug, Clone)]
pub struct LocationCatalog {
    locations: Vec<Location>,
}

impl LocationCatalog {
    /// Create a catalog from a list of locations.
    pub fn new(locations: Vec<Location>) -> Self {
        Self { locations }
    }

    /// Parse a catalog from a JSON array.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let locations: Vec<Location> = serde_json::from_str(json)?;
        if locations.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self::new(locations))
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// The catalog bundled with the crate.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Case-insensitive substring match against option labels.
    ///
    /// An empty query matches everything. At most `limit` results are
    /// returned, in catalog order.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&Location> {
        let needle = query.trim().to_lowercase();
        self.locations
            .iter()
            .filter(|loc| loc.option_label().to_lowercase().contains(&needle))
            .take(limit)
            .collect()
    }

    /// Look up a location by short code, ignoring case.
    pub fn find(&self, code: &str) -> Option<&Location> {
        let code = code.trim();
        self.locations
            .iter()
            .find(|loc| loc.short_code.eq_ignore_ascii_case(code))
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn location(code: &str, name: &str, state: &str) -> Location {
        Location {
            short_code: code.to_string(),
            english_name: name.to_string(),
            code_state: state.to_string(),
        }
    }

    fn catalog() -> LocationCatalog {
        LocationCatalog::new(vec![
            location("NYC", "New York", "NY"),
            location("NHV", "New Haven", "CT"),
            location("BOS", "Boston", "MA"),
        ])
    }

    fn codes(found: Vec<&Location>) -> Vec<&str> {
        found.into_iter().map(|l| l.short_code.as_str()).collect()
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let catalog = catalog();
        assert_eq!(codes(catalog.search("new", 10)), vec!["NYC", "NHV"]);
        assert_eq!(codes(catalog.search("BOST", 10)), vec!["BOS"]);
        assert_eq!(codes(catalog.search("ston", 10)), vec!["BOS"]);
    }

    #[test]
    fn search_matches_code_and_label() {
        let catalog = catalog();
        assert_eq!(codes(catalog.search("nyc - ", 10)), vec!["NYC"]);
    }

    #[test]
    fn empty_query_matches_all() {
        assert_eq!(catalog().search("", 10).len(), 3);
        assert_eq!(catalog().search("   ", 10).len(), 3);
    }

    #[test]
    fn search_respects_limit() {
        assert_eq!(codes(catalog().search("", 2)), vec!["NYC", "NHV"]);
        assert!(catalog().search("", 0).is_empty());
    }

    #[test]
    fn search_no_match() {
        assert!(catalog().search("zzz", 10).is_empty());
    }

    #[test]
    fn find_ignores_case() {
        let catalog = catalog();
        assert_eq!(catalog.find("bos").unwrap().english_name, "Boston");
        assert!(catalog.find("XXX").is_none());
    }

    #[test]
    fn to_ref_carries_name() {
        let loc = location("NYC", "New York", "NY");
        let r = loc.to_ref();
        assert_eq!(r.label(), "NYC - New York");
        assert_eq!(r.label(), loc.option_label());
    }

    #[test]
    fn builtin_catalog_loads() {
        let catalog = LocationCatalog::builtin().unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.find("NYC").is_some());
        assert!(catalog.find("BOS").is_some());
    }

    #[test]
    fn from_json_rejects_empty() {
        assert!(matches!(
            LocationCatalog::from_json("[]"),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn from_json_rejects_malformed() {
        assert!(matches!(
            LocationCatalog::from_json("[{\"short_code\": 1}]"),
            Err(CatalogError::Json(_))
        ));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"short_code": "SEA", "english_name": "Seattle", "code_state": "WA"}}]"#
        )
        .unwrap();

        let catalog = LocationCatalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.find("sea").unwrap().code_state, "WA");
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        assert!(matches!(
            LocationCatalog::load(&path),
            Err(CatalogError::Io { .. })
        ));
    }
}
