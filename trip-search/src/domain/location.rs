//! Location reference types.

use std::fmt;

/// Separator between a short code and its display name in a location label.
pub const LABEL_SEPARATOR: &str = " - ";

/// A reference to a place, as held by the search form.
///
/// A reference is a short code plus an optional display name. Identity is the
/// code alone, compared case-insensitively, so `"NYC"`, `"nyc"` and
/// `"NYC - New York"` all refer to the same place.
///
/// # Examples
///
/// ```
/// use trip_search::domain::LocationRef;
///
/// let typed = LocationRef::parse("  nyc ").unwrap();
/// let picked = LocationRef::parse("NYC - New York").unwrap();
/// assert_eq!(typed, picked);
/// assert_eq!(picked.code(), "NYC");
/// assert_eq!(picked.name(), Some("New York"));
/// assert_eq!(picked.label(), "NYC - New York");
///
/// // Blank input means "no location"
/// assert!(LocationRef::parse("   ").is_none());
/// ```
#[derive(Clone)]
pub struct LocationRef {
    code: String,
    name: Option<String>,
}

impl LocationRef {
    /// Create a reference from a code and an optional display name.
    ///
    /// Both parts are trimmed; an empty name is dropped.
    pub fn new(code: impl Into<String>, name: Option<String>) -> Self {
        let code = code.into().trim().to_string();
        let name = name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
        Self { code, name }
    }

    /// Parse a reference from user-entered text.
    ///
    /// Text of the form `"<CODE> - <Name>"` (the autocomplete option label)
    /// splits into code and name; anything else is taken as a bare code.
    /// Returns `None` for blank input.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        match text.split_once(LABEL_SEPARATOR) {
            Some((code, name)) if !code.trim().is_empty() => {
                Some(Self::new(code, Some(name.to_string())))
            }
            _ => Some(Self::new(text, None)),
        }
    }

    /// True when the code is empty, as from `new` with blank text.
    pub fn is_blank(&self) -> bool {
        self.code.is_empty()
    }

    /// Returns the identifier code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the display name, if known.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the label written to a serialized query.
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => format!("{}{}{}", self.code, LABEL_SEPARATOR, name),
            None => self.code.clone(),
        }
    }

    /// Case-insensitive identifier comparison.
    pub fn same_place(&self, other: &LocationRef) -> bool {
        self.code.to_lowercase() == other.code.to_lowercase()
    }
}

impl PartialEq for LocationRef {
    fn eq(&self, other: &Self) -> bool {
        self.same_place(other)
    }
}

impl Eq for LocationRef {}

impl fmt::Debug for LocationRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LocationRef({})", self.label())
    }
}

impl fmt::Display for LocationRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
