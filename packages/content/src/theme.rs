//! Light / dark / system theme preference persisted under one local storage key.

use std::fmt;

/// The only key this site writes to local storage.
pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemePreference {
    pub const ALL: [ThemePreference; 3] = [
        ThemePreference::Light,
        ThemePreference::Dark,
        ThemePreference::System,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::System => "system",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ThemePreference::Light => "Light",
            ThemePreference::Dark => "Dark",
            ThemePreference::System => "System",
        }
    }

    /// Parse a stored value. Anything unknown or missing means `System`.
    pub fn from_storage(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("light") => ThemePreference::Light,
            Some("dark") => ThemePreference::Dark,
            _ => ThemePreference::System,
        }
    }

    /// Whether the `dark` class should be on the document root.
    pub fn is_dark(&self, system_prefers_dark: bool) -> bool {
        match self {
            ThemePreference::Light => false,
            ThemePreference::Dark => true,
            ThemePreference::System => system_prefers_dark,
        }
    }

    /// Order used by the navbar toggle button.
    pub fn cycle(&self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::System,
            ThemePreference::System => ThemePreference::Light,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_storage() {
        assert_eq!(ThemePreference::from_storage(Some("dark")), ThemePreference::Dark);
        assert_eq!(ThemePreference::from_storage(Some("light")), ThemePreference::Light);
        assert_eq!(ThemePreference::from_storage(Some("system")), ThemePreference::System);
        assert_eq!(ThemePreference::from_storage(Some("sepia")), ThemePreference::System);
        assert_eq!(ThemePreference::from_storage(None), ThemePreference::System);
    }

    #[test]
    fn test_storage_roundtrip() {
        for pref in ThemePreference::ALL {
            assert_eq!(ThemePreference::from_storage(Some(pref.as_str())), pref);
        }
    }

    #[test]
    fn test_is_dark() {
        assert!(ThemePreference::Dark.is_dark(false));
        assert!(!ThemePreference::Light.is_dark(true));
        assert!(ThemePreference::System.is_dark(true));
        assert!(!ThemePreference::System.is_dark(false));
    }

    #[test]
    fn test_cycle_visits_all() {
        let mut t = ThemePreference::Light;
        let mut seen = vec![t];
        for _ in 0..2 {
            t = t.cycle();
            seen.push(t);
        }
        assert_eq!(t.cycle(), ThemePreference::Light);
        seen.sort_by_key(|p| p.as_str());
        seen.dedup();
        assert_eq!(seen.len(), 3);
    }
}
