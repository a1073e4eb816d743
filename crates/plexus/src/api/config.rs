use std::fmt;

use serde::{Deserialize, Serialize};

use super::types::Rgb;

/// Configuration for the network effect. Set once at startup.
///
/// Every key has a default, so a JSON document only needs the keys it
/// wants to override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Number of dots in the field (default: 120).
    pub dot_count: usize,
    /// Upper bound for dot radius; the lower bound is 2 (default: 3).
    pub max_radius: u32,
    /// Upper bound for speed magnitude, in pixels per millisecond (default: 0.05).
    pub max_speed: f32,
    /// Stroke width of connecting lines (default: 2).
    pub line_width: f32,
    /// Pairs closer than this are connected (default: 160).
    pub max_line_distance: f32,
    /// How far off screen a dot may drift before it respawns (default: 50).
    pub off_screen_margin: f32,
    /// Randomize dot opacity in [0.2, 0.9] instead of drawing them opaque.
    pub transparent_dots: bool,
    /// Line colors; each dot picks one at random.
    pub palette: Vec<Rgb>,
    /// Fill color for the dots themselves.
    pub dot_color: Rgb,
    /// Speed multiplier range during the fast tempo phase.
    pub fast_speed: (f32, f32),
    /// Speed multiplier range during the slow tempo phase.
    pub slow_speed: (f32, f32),
    /// Delay range between tempo ticks, in milliseconds.
    pub tempo_delay_ms: (u32, u32),
    /// Play a sound on every transition into the slow phase.
    pub audio_cue: bool,
    /// URL of the sound used for the cue.
    pub audio_cue_src: Option<String>,
    /// Frame gaps longer than this are treated as zero elapsed time.
    pub max_frame_gap_ms: f32,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            dot_count: 120,
            max_radius: 3,
            max_speed: 0.05,
            line_width: 2.0,
            max_line_distance: 160.0,
            off_screen_margin: 50.0,
            transparent_dots: false,
            palette: vec![Rgb::new(244, 81, 30), Rgb::BLACK],
            dot_color: Rgb::BLACK,
            fast_speed: (1.5, 2.5),
            slow_speed: (1.0, 1.0),
            tempo_delay_ms: (100, 2000),
            audio_cue: false,
            audio_cue_src: None,
            max_frame_gap_ms: 100.0,
        }
    }
}

impl NetworkConfig {
    /// Parse a config from a JSON string and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every value the simulation relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dot_count == 0 {
            return Err(ConfigError::NoDots);
        }
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if self.max_radius < 2 {
            return Err(ConfigError::RadiusTooSmall(self.max_radius));
        }
        for (field, value) in [
            ("max_speed", self.max_speed),
            ("line_width", self.line_width),
            ("max_line_distance", self.max_line_distance),
            ("max_frame_gap_ms", self.max_frame_gap_ms),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive { field });
            }
        }
        if !(self.off_screen_margin.is_finite() && self.off_screen_margin >= 0.0) {
            return Err(ConfigError::NegativeMargin);
        }
        for (field, (min, max)) in [("fast_speed", self.fast_speed), ("slow_speed", self.slow_speed)] {
            if !(min.is_finite() && max.is_finite() && min <= max) {
                return Err(ConfigError::InvalidRange { field });
            }
        }
        let (min_delay, max_delay) = self.tempo_delay_ms;
        // Host timers take the delay as an i32.
        if min_delay == 0 || min_delay > max_delay || max_delay > i32::MAX as u32 {
            return Err(ConfigError::InvalidRange { field: "tempo_delay_ms" });
        }
        Ok(())
    }
}

/// Errors produced while loading a [`NetworkConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    Parse(serde_json::Error),
    /// `dot_count` is zero.
    NoDots,
    /// `palette` has no colors.
    EmptyPalette,
    /// `max_radius` is below the minimum radius of 2.
    RadiusTooSmall(u32),
    /// A value that must be positive and finite is not.
    NotPositive { field: &'static str },
    /// `off_screen_margin` is negative or not finite.
    NegativeMargin,
    /// A `(min, max)` range is inverted or not finite.
    InvalidRange { field: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "Failed to parse config: {}", e),
            ConfigError::NoDots => write!(f, "dot_count must be at least 1"),
            ConfigError::EmptyPalette => write!(f, "palette must contain at least one color"),
            ConfigError::RadiusTooSmall(r) => write!(f, "max_radius must be at least 2, got {}", r),
            ConfigError::NotPositive { field } => write!(f, "{} must be a positive number", field),
            ConfigError::NegativeMargin => write!(f, "off_screen_margin must be zero or positive"),
            ConfigError::InvalidRange { field } => write!(f, "{} must be a (min, max) pair with min <= max", field),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}
