//! In-memory settings store: category name → ordered settings.
//!
//! The store is the cache of a configuration file's content.  It is created
//! empty (or by the parser), mutated while the file is open, and replaced
//! wholesale by the next read.
//!
//! # Invariants
//!
//! - Category names are unique.
//! - Setting names are unique within a category.
//! - Adding a setting to a missing category creates the category.
//! - Removing a missing category or setting does nothing.
//!
//! # Ordering
//!
//! Categories keep their insertion order, and so do the settings inside each
//! category.  Two mutations treat ordering differently:
//!
//! | Operation     | Existing name                               |
//! |---------------|---------------------------------------------|
//! | `set_value`   | payload replaced in place, position kept    |
//! | `add_setting` | old entry removed, new entry appended       |
//!
//! Prefer `set_value` for idempotent updates and `add_setting` for bulk
//! (re)population.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::domain::setting::Setting;
use crate::domain::value::Value;

/// A named, ordered group of settings; one `[Name]` block in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: String,
    settings: Vec<Setting>,
}

impl Category {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            settings: Vec::new(),
        }
    }

    /// Name of the category, without brackets.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The settings of this category in file order.
    pub fn settings(&self) -> &[Setting] {
        &self.settings
    }

    fn position(&self, setting_name: &str) -> Option<usize> {
        self.settings.iter().position(|s| s.name() == setting_name)
    }
}

/// Serializes as a map of setting name → payload, in file order.
impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.settings.len()))?;
        for setting in &self.settings {
            map.serialize_entry(setting.name(), setting.value().payload())?;
        }
        map.end()
    }
}

/// The configuration settings of one file.
///
/// # Examples
///
/// ```rust
/// use cfgfile_core::{Setting, Settings};
///
/// let mut settings = Settings::new();
/// settings.add_setting("A", Setting::new("x", "1"));
/// settings.add_setting("A", Setting::new("y", "2"));
///
/// // Re-adding an existing name moves it to the end.
/// settings.add_setting("A", Setting::new("x", "9"));
/// assert_eq!(settings.setting_names("A"), vec!["y", "x"]);
///
/// // set_value edits in place.
/// settings.set_value("A", "y", "3");
/// assert_eq!(settings.setting_names("A"), vec!["y", "x"]);
/// assert_eq!(settings.value("A", "y").as_integer(), Ok(3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Settings {
    /// Categories in insertion order.  Lookups are linear; configuration
    /// files hold a handful of categories.
    categories: Vec<Category>,
}

impl Settings {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the store holds no categories.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Number of categories in the store.
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Iterates over the categories in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    /// Check if a category exists.
    pub fn category_exists(&self, category: &str) -> bool {
        self.find(category).is_some()
    }

    /// Check if a setting exists in the specified category.
    ///
    /// Returns `false` when either the category or the setting is missing.
    pub fn setting_exists(&self, category: &str, setting_name: &str) -> bool {
        self.find(category)
            .is_some_and(|c| c.position(setting_name).is_some())
    }

    /// The category names, in insertion order.
    pub fn categories(&self) -> Vec<&str> {
        self.categories.iter().map(Category::name).collect()
    }

    /// The setting names of a category in file order, or an empty list if the
    /// category does not exist.
    pub fn setting_names(&self, category: &str) -> Vec<&str> {
        self.settings_in(category).iter().map(Setting::name).collect()
    }

    /// The settings of a category, or an empty slice if it does not exist.
    pub fn settings_in(&self, category: &str) -> &[Setting] {
        self.find(category).map(Category::settings).unwrap_or(&[])
    }

    /// Returns a copy of a setting's value.
    ///
    /// A missing category or setting yields [`Value::empty`], so callers can
    /// go straight to a defaulted accessor such as
    /// [`Value::as_integer_or`].  Edits to the returned value do not reach the
    /// store; use [`Settings::value_mut`] or [`Settings::set_value`] for that.
    pub fn value(&self, category: &str, setting_name: &str) -> Value {
        self.find(category)
            .and_then(|c| c.settings.iter().find(|s| s.name() == setting_name))
            .map(|s| s.value().clone())
            .unwrap_or_else(Value::empty)
    }

    /// Mutable access to a stored value, or `None` if it does not exist.
    pub fn value_mut(&mut self, category: &str, setting_name: &str) -> Option<&mut Value> {
        self.find_mut(category)?
            .settings
            .iter_mut()
            .find(|s| s.name() == setting_name)
            .map(Setting::value_mut)
    }

    /// Sets the value of a setting, creating it (and its category) if needed.
    ///
    /// An existing setting keeps its position; only the payload changes.
    pub fn set_value(&mut self, category: &str, setting_name: &str, payload: impl Into<String>) {
        match self.value_mut(category, setting_name) {
            Some(value) => value.set(payload),
            None => self.add_setting(category, Setting::new(setting_name, payload)),
        }
    }

    /// Adds a category if it does not exist.  Existing categories are left
    /// untouched.
    pub fn add_category(&mut self, category: &str) {
        if !self.category_exists(category) {
            self.categories.push(Category::new(category));
        }
    }

    /// Removes a category and all of its settings.  Missing categories are
    /// ignored.
    pub fn remove_category(&mut self, category: &str) {
        self.categories.retain(|c| c.name != category);
    }

    /// Adds a setting to a category, creating the category if needed.
    ///
    /// If a setting with the same name already exists in the category, the
    /// old entry is removed and the new one is appended, so the setting moves
    /// to the end of the category.
    pub fn add_setting(&mut self, category: &str, setting: Setting) {
        self.add_category(category);
        if let Some(target) = self.find_mut(category) {
            if let Some(index) = target.position(setting.name()) {
                target.settings.remove(index);
            }
            target.settings.push(setting);
        }
    }

    /// Removes one setting from a category.  Missing categories or settings
    /// are ignored.
    pub fn remove_setting(&mut self, category: &str, setting_name: &str) {
        if let Some(target) = self.find_mut(category) {
            if let Some(index) = target.position(setting_name) {
                target.settings.remove(index);
            }
        }
    }

    fn find(&self, category: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == category)
    }

    fn find_mut(&mut self, category: &str) -> Option<&mut Category> {
        self.categories.iter_mut().find(|c| c.name == category)
    }
}

/// Serializes as an ordered map `{ category: { name: payload } }`.
impl Serialize for Settings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for category in &self.categories {
            map.serialize_entry(category.name(), category)?;
        }
        map.end()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_a_x1_y2() -> Settings {
        let mut settings = Settings::new();
        settings.add_setting("A", Setting::new("x", "1"));
        settings.add_setting("A", Setting::new("y", "2"));
        settings
    }

    // ── Existence checks ──────────────────────────────────────────────────────

    #[test]
    fn test_new_store_is_empty() {
        let settings = Settings::new();
        assert!(settings.is_empty());
        assert!(settings.categories().is_empty());
        assert!(!settings.category_exists("A"));
    }

    #[test]
    fn test_setting_exists_is_false_for_missing_category() {
        let settings = Settings::new();
        assert!(!settings.setting_exists("missing", "x"));
    }

    #[test]
    fn test_setting_exists_is_false_for_missing_name() {
        let settings = store_with_a_x1_y2();
        assert!(!settings.setting_exists("A", "z"));
        assert!(settings.setting_exists("A", "x"));
    }

    // ── Categories ────────────────────────────────────────────────────────────

    #[test]
    fn test_add_category_is_noop_when_present() {
        // Arrange
        let mut settings = store_with_a_x1_y2();

        // Act
        settings.add_category("A");

        // Assert: settings survive, no duplicate category
        assert_eq!(settings.category_count(), 1);
        assert_eq!(settings.setting_names("A"), vec!["x", "y"]);
    }

    #[test]
    fn test_categories_keep_insertion_order() {
        let mut settings = Settings::new();
        settings.add_category("Zeta");
        settings.add_category("Alpha");
        settings.add_setting("Mid", Setting::new("k", "v"));
        settings.add_category("Zeta");

        assert_eq!(settings.categories(), vec!["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn test_remove_category_cascades_to_settings() {
        // Arrange
        let mut settings = store_with_a_x1_y2();

        // Act
        settings.remove_category("A");

        // Assert
        assert!(!settings.category_exists("A"));
        assert!(!settings.setting_exists("A", "x"));
        assert!(!settings.setting_exists("A", "y"));
        assert!(settings.value("A", "x").is_absent());
    }

    #[test]
    fn test_remove_missing_category_is_noop() {
        let mut settings = store_with_a_x1_y2();
        settings.remove_category("B");
        assert_eq!(settings, store_with_a_x1_y2());
    }

    #[test]
    fn test_setting_names_of_missing_category_is_empty() {
        let settings = Settings::new();
        assert!(settings.setting_names("nope").is_empty());
        assert!(settings.settings_in("nope").is_empty());
    }

    // ── add_setting ───────────────────────────────────────────────────────────

    #[test]
    fn test_add_setting_creates_category() {
        let mut settings = Settings::new();
        settings.add_setting("Server", Setting::new("host", "localhost"));
        assert!(settings.category_exists("Server"));
        assert_eq!(settings.value("Server", "host").as_string(), "localhost");
    }

    #[test]
    fn test_add_setting_overwrite_moves_entry_to_end() {
        // Arrange
        let mut settings = store_with_a_x1_y2();

        // Act
        settings.add_setting("A", Setting::new("x", "9"));

        // Assert: y=2, x=9
        let entries: Vec<(&str, &str)> = settings
            .settings_in("A")
            .iter()
            .map(|s| (s.name(), s.value().payload()))
            .collect();
        assert_eq!(entries, vec![("y", "2"), ("x", "9")]);
    }

    // ── set_value ─────────────────────────────────────────────────────────────

    #[test]
    fn test_set_value_on_existing_setting_keeps_position() {
        let mut settings = store_with_a_x1_y2();

        settings.set_value("A", "x", "9");

        assert_eq!(settings.setting_names("A"), vec!["x", "y"]);
        assert_eq!(settings.value("A", "x").as_integer(), Ok(9));
    }

    #[test]
    fn test_set_value_creates_missing_setting_and_category() {
        let mut settings = Settings::new();

        settings.set_value("New", "flag", "true");

        assert!(settings.category_exists("New"));
        assert_eq!(settings.value("New", "flag").as_boolean(), Ok(true));
    }

    #[test]
    fn test_set_value_twice_equals_once() {
        // Arrange
        let mut once = store_with_a_x1_y2();
        once.set_value("A", "x", "5");
        let mut twice = store_with_a_x1_y2();

        // Act
        twice.set_value("A", "x", "5");
        twice.set_value("A", "x", "5");

        // Assert
        assert_eq!(once, twice);
    }

    // ── remove_setting ────────────────────────────────────────────────────────

    #[test]
    fn test_remove_setting_deletes_only_that_setting() {
        let mut settings = store_with_a_x1_y2();

        settings.remove_setting("A", "x");

        assert!(!settings.setting_exists("A", "x"));
        assert!(settings.setting_exists("A", "y"));
        assert!(settings.category_exists("A"));
    }

    #[test]
    fn test_remove_missing_setting_is_noop() {
        let mut settings = store_with_a_x1_y2();
        settings.remove_setting("A", "z");
        settings.remove_setting("B", "x");
        assert_eq!(settings, store_with_a_x1_y2());
    }

    // ── Value lookups ─────────────────────────────────────────────────────────

    #[test]
    fn test_value_of_missing_setting_is_absent() {
        let settings = Settings::new();
        let value = settings.value("missing", "missing");
        assert!(value.is_absent());
        assert_eq!(value.as_integer_or(42), Ok(42));
        assert_eq!(value.as_string(), "");
    }

    #[test]
    fn test_value_returns_snapshot() {
        // Arrange
        let settings = store_with_a_x1_y2();

        // Act: editing the copy must not reach the store
        let mut copy = settings.value("A", "x");
        copy.set("changed");

        // Assert
        assert_eq!(settings.value("A", "x").as_string(), "1");
    }

    #[test]
    fn test_value_mut_edits_in_place() {
        let mut settings = store_with_a_x1_y2();

        if let Some(value) = settings.value_mut("A", "y") {
            value.set("20");
        }

        assert_eq!(settings.value("A", "y").as_integer(), Ok(20));
        assert_eq!(settings.setting_names("A"), vec!["x", "y"]);
    }

    #[test]
    fn test_value_mut_of_missing_setting_is_none() {
        let mut settings = store_with_a_x1_y2();
        assert!(settings.value_mut("A", "z").is_none());
        assert!(settings.value_mut("B", "x").is_none());
    }

    // ── Serialize ─────────────────────────────────────────────────────────────

    #[test]
    fn test_serialize_to_json_preserves_order() {
        // Arrange
        let mut settings = Settings::new();
        settings.add_setting("Server", Setting::new("port", "8080"));
        settings.add_setting("Server", Setting::new("host", "localhost"));
        settings.add_category("Empty");

        // Act
        let json = serde_json::to_string(&settings).expect("serialize");

        // Assert
        assert_eq!(
            json,
            r#"{"Server":{"port":"8080","host":"localhost"},"Empty":{}}"#
        );
    }
}
