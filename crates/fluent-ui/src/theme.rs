//! Theme configuration.
//!
//! [`FluentTheme`] is owned by the `UiContext` and handed to components
//! explicitly; there is no global theme.

use crate::color::{fluent, Color};
use crate::primitives::CornerShape;

/// User-facing theme switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeSettings {
    pub dark_mode: bool,
    /// Render popups and flyouts with a translucent acrylic backdrop
    pub acrylic_popup_enabled: bool,
    /// Use the denser control metrics
    ///
    /// Carried for hosts that size their own controls; overlay surfaces keep
    /// the same padding in both modes.
    pub compact_mode: bool,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            acrylic_popup_enabled: true,
            compact_mode: true,
        }
    }
}

/// Color tokens used by the components
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluentColors {
    pub text_primary: Color,
    pub text_secondary: Color,
    /// Solid Mica fallback / base layer
    pub mica_base: Color,
    /// Opaque acrylic fallback used when acrylic popups are disabled
    pub acrylic_default: Color,
    /// Tint laid over the blurred acrylic backdrop
    pub acrylic_tint: Color,
    pub layer_default: Color,
    /// Border around flyout surfaces
    pub stroke_flyout: Color,
    pub stroke_default: Color,
    pub accent: Color,
}

pub fn dark_colors() -> FluentColors {
    use fluent::dark::*;
    FluentColors {
        text_primary: TEXT_PRIMARY,
        text_secondary: TEXT_SECONDARY,
        mica_base: MICA_BASE,
        acrylic_default: ACRYLIC_DEFAULT,
        acrylic_tint: ACRYLIC_TINT,
        layer_default: LAYER_DEFAULT,
        stroke_flyout: STROKE_FLYOUT,
        stroke_default: STROKE_DEFAULT,
        accent: ACCENT,
    }
}

pub fn light_colors() -> FluentColors {
    use fluent::light::*;
    FluentColors {
        text_primary: TEXT_PRIMARY,
        text_secondary: TEXT_SECONDARY,
        mica_base: MICA_BASE,
        acrylic_default: ACRYLIC_DEFAULT,
        acrylic_tint: ACRYLIC_TINT,
        layer_default: LAYER_DEFAULT,
        stroke_flyout: STROKE_FLYOUT,
        stroke_default: STROKE_DEFAULT,
        accent: ACCENT,
    }
}

/// Corner shapes per surface category
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluentShapes {
    /// Flyouts, menus, tooltips
    pub overlay: CornerShape,
}

impl Default for FluentShapes {
    fn default() -> Self {
        Self {
            overlay: CornerShape::Round(8.0),
        }
    }
}

/// Shadow depths in logical pixels
pub struct ElevationDefaults;

impl ElevationDefaults {
    pub const FLYOUT: f32 = 16.0;
}

#[derive(Debug, Clone, PartialEq)]
pub struct FluentTheme {
    pub colors: FluentColors,
    pub shapes: FluentShapes,
    pub dark_mode: bool,
    pub use_acrylic_popup: bool,
    pub compact_mode: bool,
}

impl FluentTheme {
    pub fn new(settings: ThemeSettings) -> Self {
        Self {
            colors: if settings.dark_mode {
                dark_colors()
            } else {
                light_colors()
            },
            shapes: FluentShapes::default(),
            dark_mode: settings.dark_mode,
            use_acrylic_popup: settings.acrylic_popup_enabled,
            compact_mode: settings.compact_mode,
        }
    }

    pub fn settings(&self) -> ThemeSettings {
        ThemeSettings {
            dark_mode: self.dark_mode,
            acrylic_popup_enabled: self.use_acrylic_popup,
            compact_mode: self.compact_mode,
        }
    }
}

impl Default for FluentTheme {
    fn default() -> Self {
        Self::new(ThemeSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_picks_palette() {
        let dark = FluentTheme::new(ThemeSettings {
            dark_mode: true,
            ..Default::default()
        });
        let light = FluentTheme::new(ThemeSettings {
            dark_mode: false,
            ..Default::default()
        });
        assert_eq!(dark.colors, dark_colors());
        assert_eq!(light.colors, light_colors());
        assert_ne!(dark.colors.mica_base, light.colors.mica_base);
    }

    #[test]
    fn test_settings_round_trip() {
        let settings = ThemeSettings {
            dark_mode: false,
            acrylic_popup_enabled: false,
            compact_mode: true,
        };
        assert_eq!(FluentTheme::new(settings).settings(), settings);
    }
}
