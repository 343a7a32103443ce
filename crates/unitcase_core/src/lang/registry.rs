//! Shareable metadata for `unitcase_core::lang` registries.
//!
//! ## Notes
//! - These types are intentionally lightweight and `Copy`-friendly so registries can live in `const` tables.

/// Shared metadata shape for registry-first vocabulary items.
///
/// - stable identity (`id`)
/// - accepted spellings (`canonical` + `aliases`)
/// - documentation (`description`)
///
/// ## Examples
/// ```rust
/// use unitcase_core::lang::registry::LangItemInfo;
///
/// let item = LangItemInfo { id: 7_u8, canonical: "Seven", aliases: &["7"], description: "The number seven." };
/// assert!(item.matches("7"));
/// assert!(!item.matches("seven"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LangItemInfo<Id> {
    pub id: Id,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
}

impl<Id> LangItemInfo<Id> {
    /// Check whether `name` is the canonical spelling or one of the aliases (case-sensitive).
    pub fn matches(&self, name: &str) -> bool {
        self.canonical == name || self.aliases.contains(&name)
    }
}
