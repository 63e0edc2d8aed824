use std::fmt;
use std::str::FromStr;

use crate::foundation::color::Rgb;
use crate::foundation::error::DuffleError;

/// A W3C blend mode mixing the backdrop and source colors before
/// compositing.
///
/// Wire and CLI names are the snake_case variant names (`"soft_light"`,
/// `"color_dodge"`, ...). Separable modes apply one scalar formula per
/// channel; the last four transfer luminosity and saturation across the
/// whole triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendMode {
    Darken,
    Lighten,
    Multiply,
    Screen,
    /// HardLight with the operands swapped.
    Overlay,
    SoftLight,
    HardLight,
    ColorDodge,
    ColorBurn,
    Difference,
    Exclusion,
    /// Source hue, backdrop saturation and luminosity.
    Hue,
    /// Source saturation, backdrop hue and luminosity.
    Saturation,
    /// Source hue and saturation, backdrop luminosity.
    Color,
    /// Source luminosity, backdrop hue and saturation.
    Luminosity,
}

impl BlendMode {
    /// Every supported mode, separable modes first.
    pub const ALL: [BlendMode; 15] = [
        BlendMode::Darken,
        BlendMode::Lighten,
        BlendMode::Multiply,
        BlendMode::Screen,
        BlendMode::Overlay,
        BlendMode::SoftLight,
        BlendMode::HardLight,
        BlendMode::ColorDodge,
        BlendMode::ColorBurn,
        BlendMode::Difference,
        BlendMode::Exclusion,
        BlendMode::Hue,
        BlendMode::Saturation,
        BlendMode::Color,
        BlendMode::Luminosity,
    ];

    /// Canonical snake_case name.
    pub fn name(self) -> &'static str {
        match self {
            BlendMode::Darken => "darken",
            BlendMode::Lighten => "lighten",
            BlendMode::Multiply => "multiply",
            BlendMode::Screen => "screen",
            BlendMode::Overlay => "overlay",
            BlendMode::SoftLight => "soft_light",
            BlendMode::HardLight => "hard_light",
            BlendMode::ColorDodge => "color_dodge",
            BlendMode::ColorBurn => "color_burn",
            BlendMode::Difference => "difference",
            BlendMode::Exclusion => "exclusion",
            BlendMode::Hue => "hue",
            BlendMode::Saturation => "saturation",
            BlendMode::Color => "color",
            BlendMode::Luminosity => "luminosity",
        }
    }

    /// Whether the mode operates per channel rather than on whole triples.
    pub fn is_separable(self) -> bool {
        !matches!(
            self,
            BlendMode::Hue | BlendMode::Saturation | BlendMode::Color | BlendMode::Luminosity
        )
    }

    /// Mix `backdrop` and `source` into the blended color.
    ///
    /// Operates on normalized non-premultiplied channels; alpha weighting is
    /// the compositor's job.
    pub fn mix(self, backdrop: Rgb, source: Rgb) -> Rgb {
        match self {
            BlendMode::Darken => per_channel(backdrop, source, |cb, cs| cb.min(cs)),
            BlendMode::Lighten => per_channel(backdrop, source, |cb, cs| cb.max(cs)),
            BlendMode::Multiply => per_channel(backdrop, source, |cb, cs| cb * cs),
            BlendMode::Screen => per_channel(backdrop, source, |cb, cs| cb + cs - cb * cs),
            BlendMode::Overlay => per_channel(backdrop, source, |cb, cs| hard_light(cs, cb)),
            BlendMode::SoftLight => per_channel(backdrop, source, soft_light),
            BlendMode::HardLight => per_channel(backdrop, source, hard_light),
            BlendMode::ColorDodge => per_channel(backdrop, source, color_dodge),
            BlendMode::ColorBurn => per_channel(backdrop, source, color_burn),
            BlendMode::Difference => per_channel(backdrop, source, |cb, cs| (cb - cs).abs()),
            BlendMode::Exclusion => {
                per_channel(backdrop, source, |cb, cs| cb + cs - 2.0 * cb * cs)
            }
            BlendMode::Hue => source
                .with_saturation(backdrop.saturation())
                .with_luminosity(backdrop.luminosity()),
            BlendMode::Saturation => backdrop
                .with_saturation(source.saturation())
                .with_luminosity(backdrop.luminosity()),
            BlendMode::Color => source.with_luminosity(backdrop.luminosity()),
            BlendMode::Luminosity => backdrop.with_luminosity(source.luminosity()),
        }
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BlendMode {
    type Err = DuffleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        BlendMode::ALL
            .iter()
            .copied()
            .find(|m| m.name() == name)
            .ok_or_else(|| DuffleError::UnknownBlendMode(s.to_string()))
    }
}

fn per_channel(b: Rgb, s: Rgb, f: impl Fn(f64, f64) -> f64) -> Rgb {
    Rgb::new(f(b.r, s.r), f(b.g, s.g), f(b.b, s.b))
}

fn hard_light(cb: f64, cs: f64) -> f64 {
    if cs <= 0.5 {
        2.0 * cb * cs
    } else {
        1.0 - 2.0 * (1.0 - cb) * (1.0 - cs)
    }
}

fn soft_light(cb: f64, cs: f64) -> f64 {
    if cs <= 0.5 {
        cb - (1.0 - 2.0 * cs) * cb * (1.0 - cb)
    } else {
        cb + (2.0 * cs - 1.0) * (soft_light_d(cb) - cb)
    }
}

fn soft_light_d(x: f64) -> f64 {
    if x <= 0.25 {
        ((16.0 * x - 12.0) * x + 4.0) * x
    } else {
        x.sqrt()
    }
}

fn color_dodge(cb: f64, cs: f64) -> f64 {
    if cb == 0.0 {
        0.0
    } else if cs == 1.0 {
        1.0
    } else {
        (cb / (1.0 - cs)).min(1.0)
    }
}

fn color_burn(cb: f64, cs: f64) -> f64 {
    if cb == 1.0 {
        1.0
    } else if cs == 0.0 {
        0.0
    } else {
        1.0 - ((1.0 - cb) / cs).min(1.0)
    }
}

#[cfg(test)]
#[path = "../tests/unit/blend.rs"]
mod tests;
