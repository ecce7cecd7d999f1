use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};

pub const UNNAMED: &str = "unnamed";
pub const LEADING_MARKER: &str = "view_";

static DISALLOWED: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9_\s]").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

// Java and Kotlin keywords plus names the generated scaffold already uses.
static RESERVED: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "abstract", "as", "assert", "boolean", "break", "byte", "case", "catch", "char",
        "class", "const", "context", "continue", "default", "do", "double", "else", "enum",
        "extends", "false", "final", "finally", "float", "for", "fun", "goto", "if",
        "implements", "import", "in", "instanceof", "int", "interface", "is", "long",
        "native", "new", "null", "object", "package", "private", "protected", "public",
        "return", "short", "static", "strictfp", "super", "switch", "synchronized", "this",
        "throw", "throws", "transient", "true", "try", "typealias", "typeof", "val", "var",
        "void", "volatile", "when", "while",
    ]
    .into_iter()
    .collect()
});

/// Turns a display name into an identifier usable as a resource id and a
/// field name. Distinct names may sanitize to the same identifier; see
/// [`NameRegistry`].
pub fn sanitize_name(name: &str) -> String {
    let stripped = DISALLOWED.replace_all(name, "");
    let joined = WHITESPACE.replace_all(&stripped, "_");
    let lowered = joined.to_lowercase();

    if lowered.is_empty() {
        return UNNAMED.to_string();
    }

    if lowered.starts_with(|c: char| c.is_ascii_alphabetic()) {
        lowered
    } else {
        format!("{}{}", LEADING_MARKER, lowered)
    }
}

pub fn is_reserved(identifier: &str) -> bool {
    RESERVED.contains(identifier)
}

/// Hands out unique identifiers for one conversion run.
#[derive(Debug, Default)]
pub struct NameRegistry {
    taken: HashMap<String, String>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sanitizes `name` and appends `_2`, `_3`, ... until the identifier is
    /// neither reserved nor already claimed in this run.
    pub fn claim(&mut self, node_id: &str, name: &str) -> String {
        let base = sanitize_name(name);
        if !is_reserved(&base) && !self.taken.contains_key(&base) {
            self.taken.insert(base.clone(), node_id.to_string());
            return base;
        }

        let mut suffix = 2usize;
        let unique = loop {
            let candidate = format!("{}_{}", base, suffix);
            if !self.taken.contains_key(&candidate) {
                break candidate;
            }
            suffix += 1;
        };

        match self.taken.get(&base) {
            Some(owner) => tracing::warn!(
                node = node_id,
                conflicts_with = owner.as_str(),
                name = base.as_str(),
                renamed = unique.as_str(),
                "Duplicate identifier, renaming"
            ),
            None => tracing::warn!(
                node = node_id,
                name = base.as_str(),
                renamed = unique.as_str(),
                "Reserved identifier, renaming"
            ),
        }

        self.taken.insert(unique.clone(), node_id.to_string());
        unique
    }
}

/// `GeneratedLayout` → `generated_layout`, for layout resource file names.
pub fn to_snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;

    for c in name.chars() {
        if c.is_ascii_uppercase() {
            if prev_lower {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
            prev_lower = false;
        } else if c.is_ascii_alphanumeric() {
            out.push(c);
            prev_lower = true;
        } else if !out.is_empty() && !out.ends_with('_') {
            out.push('_');
            prev_lower = false;
        }
    }

    let trimmed = out.trim_matches('_');
    if trimmed.is_empty() {
        "layout".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_basic() {
        assert_eq!(sanitize_name("Login Button"), "login_button");
        assert_eq!(sanitize_name("Header   Title"), "header_title");
        assert_eq!(sanitize_name("Save "), "save_");
        assert_eq!(sanitize_name("Card/Primary (hover)"), "cardprimary_hover");
        assert_eq!(sanitize_name("snake_case_name"), "snake_case_name");
    }

    #[test]
    fn test_sanitize_empty_and_symbol_only() {
        assert_eq!(sanitize_name(""), UNNAMED);
        assert_eq!(sanitize_name("#@!"), UNNAMED);
        assert_eq!(sanitize_name("登录按钮"), UNNAMED);
    }

    #[test]
    fn test_sanitize_leading_non_letter() {
        assert_eq!(sanitize_name("1st Item"), "view_1st_item");
        assert_eq!(sanitize_name("_private"), "view__private");
        assert_eq!(sanitize_name(" Button"), "view__button");
        assert_eq!(sanitize_name("# Title"), "view__title");
        assert_eq!(sanitize_name("   "), "view__");
    }

    #[test]
    fn test_registry_suffixes_duplicates() {
        let mut registry = NameRegistry::new();
        assert_eq!(registry.claim("1:1", "Field"), "field");
        assert_eq!(registry.claim("1:2", "field"), "field_2");
        assert_eq!(registry.claim("1:3", "Field!"), "field_3");
    }

    #[test]
    fn test_registry_skips_literal_suffix_names() {
        let mut registry = NameRegistry::new();
        assert_eq!(registry.claim("1:1", "row 2"), "row_2");
        assert_eq!(registry.claim("1:2", "row"), "row");
        assert_eq!(registry.claim("1:3", "row"), "row_3");
    }

    #[test]
    fn test_registry_avoids_reserved_words() {
        let mut registry = NameRegistry::new();
        assert_eq!(registry.claim("1:1", "Class"), "class_2");
        assert_eq!(registry.claim("1:2", "context"), "context_2");
        assert_eq!(registry.claim("1:3", "when"), "when_2");
    }

    #[test]
    fn test_snake_case() {
        assert_eq!(to_snake_case("GeneratedLayout"), "generated_layout");
        assert_eq!(to_snake_case("LoginScreen2"), "login_screen2");
        assert_eq!(to_snake_case("my-view"), "my_view");
        assert_eq!(to_snake_case("!!"), "layout");
    }
}
