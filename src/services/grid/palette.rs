//! Status-derived colour palette for booking blocks.
//!
//! Generates a coordinated background/accent/text trio per status category,
//! ensuring readable contrast. The rendering layer applies these directly;
//! the engine stays toolkit-agnostic by working in plain RGB.

use super::status::StatusCategory;

/// A plain sRGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS hex form, e.g. `"#2e7d32"`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Colour trio for one booking block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusStyle {
    pub background: Rgb,
    /// Left accent bar, a darker shade of the background.
    pub accent: Rgb,
    pub text: Rgb,
}

/// Style for a status category. Pure lookup plus derived shades.
pub fn style_for(category: StatusCategory) -> StatusStyle {
    let background = match category {
        StatusCategory::Inactive => Rgb::new(158, 158, 158),
        StatusCategory::Pending => Rgb::new(249, 168, 37),
        StatusCategory::Cancelled => Rgb::new(198, 40, 40),
        StatusCategory::Completed => Rgb::new(21, 101, 192),
        StatusCategory::Confirmed => Rgb::new(46, 125, 50),
    };

    StatusStyle {
        background,
        accent: darken_color(background, 0.25),
        text: readable_text_color(background),
    }
}

// ── Colour arithmetic ──────────────────────────────────────────────

fn readable_text_color(bg: Rgb) -> Rgb {
    const LIGHT: Rgb = Rgb::new(255, 255, 255);
    const DARK: Rgb = Rgb::new(20, 28, 45);
    if relative_luminance(bg) > 0.5 {
        DARK
    } else {
        LIGHT
    }
}

fn darken_color(color: Rgb, factor: f32) -> Rgb {
    mix_colors(color, Rgb::new(0, 0, 0), factor)
}

fn mix_colors(base: Rgb, target: Rgb, factor: f32) -> Rgb {
    let weight = factor.clamp(0.0, 1.0);
    let mix = |start: u8, end: u8| -> u8 {
        let start_f = start as f32;
        let end_f = end as f32;
        (start_f + (end_f - start_f) * weight).round() as u8
    };
    Rgb::new(
        mix(base.r, target.r),
        mix(base.g, target.g),
        mix(base.b, target.b),
    )
}

fn relative_luminance(color: Rgb) -> f32 {
    let channel = |value: u8| -> f32 {
        let v = value as f32 / 255.0;
        if v <= 0.03928 {
            v / 12.92
        } else {
            ((v + 0.055) / 1.055).powf(2.4)
        }
    };
    0.2126 * channel(color.r) + 0.7152 * channel(color.g) + 0.0722 * channel(color.b)
}
