// crates/streetmap-core/src/text.rs

//! Name normalization.
//!
//! Every name that enters the catalog, and every query string that is
//! matched against it, goes through [`clean_name`] first. Two names that
//! clean to the same key are treated as the same location name.

/// Convert a display name into its canonical search key.
///
/// Keeps ASCII letters and the ASCII space, drops everything else, and
/// lowercases the survivors. Total: the empty string (or a string with no
/// letters at all) maps to the empty key.
///
/// # Examples
///
/// ```rust
/// use streetmap_core::text::clean_name;
///
/// assert_eq!(clean_name("Peet's Coffee & Tea"), "peets coffee  tea");
/// assert_eq!(clean_name("M'ai"), "mai");
/// assert_eq!(clean_name("Café 24"), "caf ");
/// assert_eq!(clean_name(""), "");
/// ```
pub fn clean_name(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphabetic() || *c == ' ')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Compares two names for equality after [`clean_name`].
///
/// ```rust
/// use streetmap_core::text::equals_cleaned;
///
/// assert!(equals_cleaned("Main St.", "main st"));
/// assert!(!equals_cleaned("Main St", "Maine St"));
/// ```
pub fn equals_cleaned(a: &str, b: &str) -> bool {
    clean_name(a) == clean_name(b)
}
