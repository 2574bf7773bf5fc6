/// RGBA color in linear space with values in [0, 1]
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[repr(C)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    pub const fn transparent() -> Self {
        Self::rgba(0.0, 0.0, 0.0, 0.0)
    }

    /// Convert sRGB color (0-255) to linear space
    #[inline]
    pub const fn srgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        const fn srgb_to_linear(c: u8) -> f32 {
            let x = c as f32 / 255.0;
            if x <= 0.04045 {
                x / 12.92
            } else {
                // Polynomial approximation of ((x + 0.055) / 1.055)^2.4
                let t = (x + 0.055) / 1.055;
                t * t * (0.5870 * t + 0.4130)
            }
        }

        Self::rgba(
            srgb_to_linear(r),
            srgb_to_linear(g),
            srgb_to_linear(b),
            a as f32 / 255.0,
        )
    }

    /// Build a color from a packed `0xAARRGGBB` sRGB value
    ///
    /// ```
    /// # use fluent_ui::Color;
    /// let c = Color::argb(0x80FFFFFF);
    /// assert_eq!(c.a, 128.0 / 255.0);
    /// ```
    pub const fn argb(value: u32) -> Self {
        Self::srgba(
            ((value >> 16) & 0xFF) as u8,
            ((value >> 8) & 0xFF) as u8,
            (value & 0xFF) as u8,
            ((value >> 24) & 0xFF) as u8,
        )
    }

    /// with alpha builder method taking u8
    pub fn with_alpha_u8(mut self, alpha: u8) -> Self {
        self.a = alpha as f32 / 255.0;
        self
    }

    /// with alpha builder method taking f32
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    pub fn is_transparent(&self) -> bool {
        self.a <= 0.0
    }
}

/// Fluent Design color tokens (WinUI 3 palette)
pub mod fluent {
    /// Tokens for the dark theme
    pub mod dark {
        use crate::Color;

        pub const TEXT_PRIMARY: Color = Color::argb(0xFFFFFFFF);
        pub const TEXT_SECONDARY: Color = Color::argb(0xC5FFFFFF);
        pub const MICA_BASE: Color = Color::argb(0xFF202020);
        pub const ACRYLIC_DEFAULT: Color = Color::argb(0xFF2C2C2C);
        pub const ACRYLIC_TINT: Color = Color::argb(0xFF2C2C2C);
        pub const LAYER_DEFAULT: Color = Color::argb(0x4C3A3A3A);
        pub const STROKE_FLYOUT: Color = Color::argb(0x33000000);
        pub const STROKE_DEFAULT: Color = Color::argb(0x12FFFFFF);
        pub const ACCENT: Color = Color::argb(0xFF60CDFF);
    }

    /// Tokens for the light theme
    pub mod light {
        use crate::Color;

        pub const TEXT_PRIMARY: Color = Color::argb(0xE4000000);
        pub const TEXT_SECONDARY: Color = Color::argb(0x9E000000);
        pub const MICA_BASE: Color = Color::argb(0xFFF3F3F3);
        pub const ACRYLIC_DEFAULT: Color = Color::argb(0xFFF9F9F9);
        pub const ACRYLIC_TINT: Color = Color::argb(0xFFFCFCFC);
        pub const LAYER_DEFAULT: Color = Color::argb(0x80FFFFFF);
        pub const STROKE_FLYOUT: Color = Color::argb(0x0F000000);
        pub const STROKE_DEFAULT: Color = Color::argb(0x0F000000);
        pub const ACCENT: Color = Color::argb(0xFF005FB8);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argb_unpacks_channels() {
        let c = Color::argb(0xFF000000);
        assert_eq!(c, Color::rgba(0.0, 0.0, 0.0, 1.0));

        let c = Color::argb(0x00FFFFFF);
        assert_eq!(c.a, 0.0);
        assert!(c.is_transparent());
    }

    #[test]
    fn test_with_alpha() {
        let c = fluent::dark::MICA_BASE.with_alpha(0.5);
        assert_eq!(c.a, 0.5);
        assert_eq!(c.r, fluent::dark::MICA_BASE.r);
    }
}
