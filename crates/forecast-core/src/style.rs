// File: crates/forecast-core/src/style.rs
// Summary: Stroke styling for the temperature line (solid colour or linear gradient).
// Notes:
// - Colours travel as CSS strings in the chart configuration so the same
//   value can be handed to a browser charting library unchanged.
// - Gradient endpoints are fractions of the drawing surface; each backend
//   scales them to its own pixel size.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let alpha = format!("{:.3}", self.a as f32 / 255.0);
        let alpha = alpha.trim_end_matches('0').trim_end_matches('.');
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

impl FromStr for Rgba {
    type Err = String;

    /// Accepts `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)` and `rgba(r, g, b, a)`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| format!("bad hex colour `{s}`"));
        }
        let lower = s.to_ascii_lowercase();
        let body = lower
            .strip_prefix("rgba(")
            .or_else(|| lower.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| format!("unsupported colour `{s}`"))?;
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        if parts.len() != 3 && parts.len() != 4 {
            return Err(format!("expected 3 or 4 components in `{s}`"));
        }
        let channel = |p: &str| -> Result<u8, String> {
            p.parse::<u8>().map_err(|_| format!("bad channel `{p}` in `{s}`"))
        };
        let a = match parts.get(3) {
            Some(p) => {
                let v = p.parse::<f32>().map_err(|_| format!("bad alpha `{p}` in `{s}`"))?;
                (v.clamp(0.0, 1.0) * 255.0).round() as u8
            }
            None => 255,
        };
        Ok(Rgba::new(channel(parts[0])?, channel(parts[1])?, channel(parts[2])?, a))
    }
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    match hex.len() {
        3 => {
            let nib = |i: usize| u8::from_str_radix(hex.get(i..i + 1)?, 16).ok().map(|v| v * 17);
            Some(Rgba::opaque(nib(0)?, nib(1)?, nib(2)?))
        }
        6 => Some(Rgba::opaque(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Rgba::new(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        _ => None,
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Position along the gradient, 0..=1.
    pub offset: f32,
    pub color: Rgba,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GradientKind {
    #[default]
    #[serde(rename = "linearGradient")]
    Linear,
}

/// Linear gradient between two points given as surface fractions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearGradient {
    #[serde(default)]
    pub kind: GradientKind,
    pub start: [f32; 2],
    pub end: [f32; 2],
    pub stops: Vec<GradientStop>,
}

impl LinearGradient {
    /// Endpoints scaled to a `width` x `height` surface.
    pub fn scaled(&self, width: f32, height: f32) -> ((f32, f32), (f32, f32)) {
        (
            (self.start[0] * width, self.start[1] * height),
            (self.end[0] * width, self.end[1] * height),
        )
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StrokeStyle {
    Solid(Rgba),
    Gradient(LinearGradient),
}

impl StrokeStyle {
    /// Colour of the first stop (or the solid colour); used where a
    /// backend needs a single swatch, e.g. a legend box.
    pub fn primary(&self) -> Rgba {
        match self {
            StrokeStyle::Solid(c) => *c,
            StrokeStyle::Gradient(g) => g.stops.first().map(|s| s.color).unwrap_or(Rgba::opaque(0, 0, 0)),
        }
    }
}

impl Default for StrokeStyle {
    /// Warm at the top of the surface fading to cool at the bottom.
    fn default() -> Self {
        StrokeStyle::Gradient(LinearGradient {
            kind: GradientKind::Linear,
            start: [0.0, 0.0],
            end: [0.0, 1.0],
            stops: vec![
                GradientStop { offset: 0.0, color: Rgba::opaque(255, 99, 71) },
                GradientStop { offset: 1.0, color: Rgba::opaque(64, 160, 255) },
            ],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_round_trip_of_common_forms() {
        assert_eq!("#ff6347".parse::<Rgba>(), Ok(Rgba::opaque(255, 99, 71)));
        assert_eq!("#0f0".parse::<Rgba>(), Ok(Rgba::opaque(0, 255, 0)));
        assert_eq!("rgb(1, 2, 3)".parse::<Rgba>(), Ok(Rgba::opaque(1, 2, 3)));
        assert_eq!("rgba(10,20,30,0.5)".parse::<Rgba>(), Ok(Rgba::new(10, 20, 30, 128)));
        assert!("hsl(0, 0%, 0%)".parse::<Rgba>().is_err());
        assert_eq!(Rgba::opaque(1, 2, 3).to_css(), "rgba(1, 2, 3, 1)");
        assert_eq!(Rgba::new(1, 2, 3, 0).to_css(), "rgba(1, 2, 3, 0)");
    }

    #[test]
    fn stroke_serializes_solid_as_string() {
        let v = serde_json::to_value(StrokeStyle::Solid(Rgba::opaque(0, 0, 255))).unwrap();
        assert_eq!(v, serde_json::json!("rgba(0, 0, 255, 1)"));

        let g = serde_json::to_value(StrokeStyle::default()).unwrap();
        assert_eq!(g["kind"], "linearGradient");
        assert_eq!(g["stops"][0]["color"], "rgba(255, 99, 71, 1)");
    }
}
