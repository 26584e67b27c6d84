use serde::{Deserialize, Serialize};

/// Visual styling for the backdrop, loaded from a JSON file at runtime.
/// The engine itself only consumes the timing fields; colors and sizes ride
/// through to the render layer untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackdropTheme {
    /// Background gradient stops, top-left to bottom-right.
    pub background: [String; 3],
    /// Fill color for background stars.
    pub star_color: String,
    /// Constellation stroke gradient.
    pub constellation: ConstellationStroke,
    /// Seconds per star twinkle cycle.
    pub twinkle_period: f32,
    /// Seconds per constellation shimmer cycle.
    pub pulse_period: f32,
    /// Shimmer stagger between consecutive constellations, in seconds.
    pub pulse_stagger: f32,
    /// Shooting-star trail styling.
    pub meteor: MeteorStyle,
    /// Tints for the two nebula clouds.
    pub nebula_tints: [String; 2],
}

/// Gradient endpoints for constellation lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstellationStroke {
    pub from: String,
    pub to: String,
    pub from_opacity: f32,
    pub to_opacity: f32,
}

/// Shooting-star trail and head sizing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeteorStyle {
    /// Trail length in CSS pixels.
    pub trail_px: f32,
    /// Head diameter in CSS pixels.
    pub head_px: f32,
    pub trail_color: String,
    pub glow_color: String,
}

impl Default for BackdropTheme {
    fn default() -> Self {
        BackdropTheme {
            background: [
                "#1E1B4B".to_string(),
                "#0F172A".to_string(),
                "#172554".to_string(),
            ],
            star_color: "#FFFFFF".to_string(),
            constellation: ConstellationStroke {
                from: "#6366F1".to_string(),
                to: "#3B82F6".to_string(),
                from_opacity: 0.4,
                to_opacity: 0.2,
            },
            twinkle_period: 3.0,
            pulse_period: 4.0,
            pulse_stagger: 0.5,
            meteor: MeteorStyle {
                trail_px: 80.0,
                head_px: 8.0,
                trail_color: "#FFFFFF".to_string(),
                glow_color: "#6366F1".to_string(),
            },
            nebula_tints: ["#4F46E5".to_string(), "#2563EB".to_string()],
        }
    }
}

impl BackdropTheme {
    /// Parse a theme from a JSON string. Missing fields fall back to the
    /// stock night-sky design.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
