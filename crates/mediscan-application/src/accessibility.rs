//! Accessibility preferences of an interaction session.

use mediscan_core::config::{AccessibilitySettings, FontSize};
use serde::{Deserialize, Serialize};

/// Display preferences toggled from the accessibility controls.
///
/// Each mutation returns the sentence to announce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessibilityPreferences {
    pub high_contrast: bool,
    pub font_size: FontSize,
}

impl AccessibilityPreferences {
    pub fn toggle_high_contrast(&mut self) -> &'static str {
        self.high_contrast = !self.high_contrast;
        if self.high_contrast {
            "High contrast mode enabled"
        } else {
            "Standard contrast mode enabled"
        }
    }

    pub fn set_font_size(&mut self, size: FontSize) -> String {
        self.font_size = size;
        format!("Font size set to {size}")
    }
}

impl From<&AccessibilitySettings> for AccessibilityPreferences {
    fn from(settings: &AccessibilitySettings) -> Self {
        Self {
            high_contrast: settings.high_contrast,
            font_size: settings.font_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contrast_announcement_follows_new_value() {
        let mut prefs = AccessibilityPreferences::default();
        assert_eq!(prefs.toggle_high_contrast(), "High contrast mode enabled");
        assert!(prefs.high_contrast);
        assert_eq!(prefs.toggle_high_contrast(), "Standard contrast mode enabled");
        assert!(!prefs.high_contrast);
    }

    #[test]
    fn test_font_size_announcement() {
        let mut prefs = AccessibilityPreferences::default();
        assert_eq!(
            prefs.set_font_size(FontSize::ExtraLarge),
            "Font size set to extra-large"
        );
        assert_eq!(prefs.font_size, FontSize::ExtraLarge);
    }
}
