//! Settings - caller options merged over defaults
//!
//! `ParallaxOptions` is the partial record a caller supplies (every field
//! optional). `Settings::resolve` merges it over the defaults and derives
//! the fields later steps need.

use serde::{Deserialize, Deserializer};

use crate::error::ParallaxError;

pub const DEFAULT_SPEED: f64 = 100.0;
pub const DEFAULT_DEGREES: f64 = 20.0;
pub const DEFAULT_VENDORS: &[&str] = &["webkit", "moz", "o", "ms"];
pub const DEFAULT_REVERSE: bool = true;
pub const DEFAULT_HARDWARE: bool = true;

/// Which transform the effect drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum Mode {
    /// Translate the element away from (or toward) the pointer
    #[default]
    Flat,
    /// Tilt the element about an axis perpendicular to the pointer offset
    Tilt,
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Flat => "2D",
            Self::Tilt => "3D",
        }
    }
}

// Anything that is not exactly "3D" is the flat mode.
impl From<String> for Mode {
    fn from(value: String) -> Self {
        match value.as_str() {
            "3D" => Self::Tilt,
            _ => Self::Flat,
        }
    }
}

/// Translation primitive emitted in flat mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslateFn {
    Translate,
    Translate3d,
}

impl TranslateFn {
    pub fn for_hardware(hardware: bool) -> Self {
        if hardware { Self::Translate3d } else { Self::Translate }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Translate => "translate",
            Self::Translate3d => "translate3d",
        }
    }
}

/// Partial settings as supplied by the caller.
///
/// Unknown keys are ignored, which includes attempts to set the derived
/// `translate` / `vendorsLength` fields directly. A key that is present must
/// carry a value: `null` is rejected rather than read as "use the default".
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParallaxOptions {
    #[serde(default, deserialize_with = "present")]
    pub mode: Option<Mode>,
    #[serde(default, deserialize_with = "present")]
    pub speed: Option<f64>,
    #[serde(default, deserialize_with = "present")]
    pub degrees: Option<f64>,
    #[serde(default, deserialize_with = "present")]
    pub vendors: Option<Vec<String>>,
    #[serde(default, deserialize_with = "present")]
    pub reverse: Option<bool>,
    #[serde(default, deserialize_with = "present")]
    pub hardware: Option<bool>,
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl ParallaxOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON object. `null` and the empty string mean "no options".
    pub fn from_json(json: &str) -> Result<Self, ParallaxError> {
        let trimmed = json.trim();
        if trimmed.is_empty() || trimmed == "null" {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(trimmed)?)
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = Some(speed);
        self
    }

    pub fn with_degrees(mut self, degrees: f64) -> Self {
        self.degrees = Some(degrees);
        self
    }

    pub fn with_vendors<I, S>(mut self, vendors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vendors = Some(vendors.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = Some(reverse);
        self
    }

    pub fn with_hardware(mut self, hardware: bool) -> Self {
        self.hardware = Some(hardware);
        self
    }
}

/// Resolved settings, immutable once an effect is attached
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    mode: Mode,
    speed: f64,
    degrees: f64,
    vendors: Vec<String>,
    reverse: bool,
    hardware: bool,
    translate: TranslateFn,
    vendors_length: usize,
}

impl Settings {
    /// Merge `options` over the defaults. Supplied values replace defaults
    /// wholesale (a supplied vendor list is not appended to the default one).
    pub fn resolve(options: ParallaxOptions) -> Self {
        let vendors = options
            .vendors
            .unwrap_or_else(|| DEFAULT_VENDORS.iter().map(|v| v.to_string()).collect());
        let hardware = options.hardware.unwrap_or(DEFAULT_HARDWARE);

        Self {
            mode: options.mode.unwrap_or_default(),
            speed: options.speed.unwrap_or(DEFAULT_SPEED),
            degrees: options.degrees.unwrap_or(DEFAULT_DEGREES),
            reverse: options.reverse.unwrap_or(DEFAULT_REVERSE),
            hardware,
            translate: TranslateFn::for_hardware(hardware),
            vendors_length: vendors.len(),
            vendors,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn degrees(&self) -> f64 {
        self.degrees
    }

    pub fn vendors(&self) -> &[String] {
        &self.vendors
    }

    pub fn reverse(&self) -> bool {
        self.reverse
    }

    pub fn hardware(&self) -> bool {
        self.hardware
    }

    pub fn translate(&self) -> TranslateFn {
        self.translate
    }

    pub fn vendors_length(&self) -> usize {
        self.vendors_length
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::resolve(ParallaxOptions::default())
    }
}
