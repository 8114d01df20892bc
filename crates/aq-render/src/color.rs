//! Colours and fills, rendered to CSS colour strings at the backend edge.

use std::fmt;

use aq_core::Vec2;

/// A colour in one of the two notations the scene uses.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Color {
    /// Channels `0..=255`, alpha `0.0..=1.0`.
    Rgba { r: u8, g: u8, b: u8, a: f64 },
    /// Hue in degrees, saturation and lightness in percent.
    Hsl { h: f64, s: f64, l: f64 },
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgba { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Color::Rgba { r, g, b, a }
    }

    pub const fn hsl(h: f64, s: f64, l: f64) -> Self {
        Color::Hsl { h, s, l }
    }

    /// Same colour with its alpha replaced.  HSL colours are returned as-is.
    pub fn with_alpha(self, alpha: f64) -> Self {
        match self {
            Color::Rgba { r, g, b, .. } => Color::Rgba { r, g, b, a: alpha.clamp(0.0, 1.0) },
            hsl => hsl,
        }
    }
}

/// CSS colour syntax.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Color::Rgba { r, g, b, a } if a >= 1.0 => write!(f, "rgb({r}, {g}, {b})"),
            Color::Rgba { r, g, b, a } => write!(f, "rgba({r}, {g}, {b}, {a})"),
            Color::Hsl { h, s, l } => write!(f, "hsl({h}, {s}%, {l}%)"),
        }
    }
}

/// A fill style.
#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid(Color),
    /// Linear gradient from `from` to `to` with `(offset, colour)` stops,
    /// offsets in `[0, 1]`.
    LinearGradient {
        from:  Vec2,
        to:    Vec2,
        stops: Vec<(f64, Color)>,
    },
}

impl Paint {
    /// Top-to-bottom gradient spanning `height`.
    pub fn vertical(height: f64, top: Color, bottom: Color) -> Self {
        Paint::LinearGradient {
            from:  Vec2::ZERO,
            to:    Vec2::new(0.0, height),
            stops: vec![(0.0, top), (1.0, bottom)],
        }
    }
}

impl From<Color> for Paint {
    fn from(c: Color) -> Self {
        Paint::Solid(c)
    }
}
