//! Inline style declarations
//!
//! Ordered property/value pairs, the mutation surface behaviors drive.

/// Inline style declaration block.
#[derive(Debug, Clone, Default)]
pub struct InlineStyle {
    decls: Vec<(String, String)>,
}

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from css text (`"opacity: 0; z-index: 10000"`). Malformed
    /// segments are skipped.
    pub fn from_css_text(text: &str) -> Self {
        let mut style = Self::new();
        for decl in text.split(';') {
            if let Some((prop, value)) = decl.split_once(':') {
                let prop = prop.trim();
                let value = value.trim();
                if !prop.is_empty() && !value.is_empty() {
                    style.set(prop, value);
                }
            }
        }
        style
    }

    /// Get a property value.
    pub fn get(&self, prop: &str) -> Option<&str> {
        self.decls
            .iter()
            .find(|(p, _)| p == prop)
            .map(|(_, v)| v.as_str())
    }

    /// Set a property, replacing any existing declaration.
    pub fn set(&mut self, prop: &str, value: &str) {
        for (p, v) in self.decls.iter_mut() {
            if p == prop {
                *v = value.to_string();
                return;
            }
        }
        self.decls.push((prop.to_string(), value.to_string()));
    }

    /// Remove a property. Returns whether it was present.
    pub fn remove(&mut self, prop: &str) -> bool {
        let before = self.decls.len();
        self.decls.retain(|(p, _)| p != prop);
        self.decls.len() != before
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    /// Render as css text.
    pub fn css_text(&self) -> String {
        self.decls
            .iter()
            .map(|(p, v)| format!("{p}: {v}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl std::fmt::Display for InlineStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.css_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces() {
        let mut style = InlineStyle::new();
        style.set("opacity", "0");
        style.set("opacity", "1");
        assert_eq!(style.get("opacity"), Some("1"));
        assert_eq!(style.css_text(), "opacity: 1");
    }

    #[test]
    fn test_from_css_text() {
        let style = InlineStyle::from_css_text("position: fixed; z-index: 10000; bad-decl");
        assert_eq!(style.get("position"), Some("fixed"));
        assert_eq!(style.get("z-index"), Some("10000"));
        assert_eq!(style.get("bad-decl"), None);
    }

    #[test]
    fn test_remove() {
        let mut style = InlineStyle::from_css_text("opacity: 0");
        assert!(style.remove("opacity"));
        assert!(!style.remove("opacity"));
        assert!(style.is_empty());
    }
}
