//! Background materials.
//!
//! A [`MaterialSpec`] describes how a surface's background is produced:
//! an opaque fill, a blurred and tinted backdrop ("Acrylic"), or the
//! desktop-tinted base layer ("Mica"). Producing the blur is up to the
//! rendering backend; nodes only carry the description.

use crate::color::Color;
use crate::theme::FluentTheme;

/// What kind of background effect a material produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaterialKind {
    /// Plain fill with the tint color, no backdrop sampling
    Opaque,
    /// Blurred, tinted backdrop of whatever is drawn behind the surface
    Acrylic,
    /// Blurred, tinted backdrop of the window background
    Mica,
}

/// Immutable material description for one render
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialSpec {
    pub kind: MaterialKind,
    /// Tint layered over the blurred backdrop (or the fill, for `Opaque`)
    pub tint: Color,
    /// Opacity of the tint layer (0.0 to 1.0)
    pub tint_opacity: f32,
    /// Backdrop blur radius in logical pixels
    pub blur_radius: f32,
}

impl MaterialSpec {
    pub const fn opaque(color: Color) -> Self {
        Self {
            kind: MaterialKind::Opaque,
            tint: color,
            tint_opacity: 1.0,
            blur_radius: 0.0,
        }
    }

    /// Whether the backend must sample what is behind the surface
    pub fn samples_backdrop(&self) -> bool {
        match self.kind {
            MaterialKind::Opaque => false,
            MaterialKind::Acrylic | MaterialKind::Mica => self.blur_radius > 0.0,
        }
    }
}

/// Default materials derived from the current theme
pub struct MaterialDefaults;

impl MaterialDefaults {
    pub const ACRYLIC_BLUR_RADIUS: f32 = 30.0;
    pub const MICA_BLUR_RADIUS: f32 = 60.0;

    /// Popup/flyout background
    ///
    /// Acrylic when the theme allows translucent popups, otherwise the opaque
    /// acrylic fallback color.
    pub fn acrylic_default(theme: &FluentTheme) -> MaterialSpec {
        if theme.use_acrylic_popup {
            MaterialSpec {
                kind: MaterialKind::Acrylic,
                tint: theme.colors.acrylic_tint,
                tint_opacity: if theme.dark_mode { 0.15 } else { 0.0 },
                blur_radius: Self::ACRYLIC_BLUR_RADIUS,
            }
        } else {
            MaterialSpec::opaque(theme.colors.acrylic_default)
        }
    }

    /// Window background layer
    pub fn mica(theme: &FluentTheme) -> MaterialSpec {
        MaterialSpec {
            kind: MaterialKind::Mica,
            tint: theme.colors.mica_base,
            tint_opacity: if theme.dark_mode { 0.8 } else { 0.5 },
            blur_radius: Self::MICA_BLUR_RADIUS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeSettings;

    #[test]
    fn test_acrylic_follows_theme_switch() {
        let mut settings = ThemeSettings::default();
        settings.acrylic_popup_enabled = true;
        let material = MaterialDefaults::acrylic_default(&FluentTheme::new(settings));
        assert_eq!(material.kind, MaterialKind::Acrylic);
        assert!(material.samples_backdrop());

        settings.acrylic_popup_enabled = false;
        let theme = FluentTheme::new(settings);
        let material = MaterialDefaults::acrylic_default(&theme);
        assert_eq!(material.kind, MaterialKind::Opaque);
        assert_eq!(material.tint, theme.colors.acrylic_default);
        assert!(!material.samples_backdrop());
    }

    #[test]
    fn test_mica_is_translucent() {
        let material = MaterialDefaults::mica(&FluentTheme::default());
        assert_eq!(material.kind, MaterialKind::Mica);
        assert!(material.tint_opacity < 1.0);
    }
}
