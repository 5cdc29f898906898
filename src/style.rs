//! Style patch - ordered CSS declarations written as one inline style
//!
//! Each write replaces the element's whole `style` attribute, so a patch
//! carries every declaration the element should have after the write.

/// Ordered list of `property: value` declarations
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StylePatch {
    declarations: Vec<(String, String)>,
}

impl StylePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.declarations.push((property.into(), value.into()));
        self
    }

    /// One `transform` declaration per vendor prefix, in the given order
    pub fn set_prefixed(&mut self, vendors: &[String], property: &str, value: &str) -> &mut Self {
        for vendor in vendors {
            self.set(prefixed(vendor, property), value);
        }
        self
    }

    /// `padding` plus the negative `margin` that keeps the top-left anchor
    /// where it was before padding.
    pub fn set_pad(&mut self, pad: f64) -> &mut Self {
        let p = css_number(pad);
        self.set("padding", format!("{p}px"));
        self.set("margin", format!("-{p}px 0 0 -{p}px"))
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn to_css(&self) -> String {
        self.declarations
            .iter()
            .map(|(p, v)| format!("{p}: {v};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// `""` → `transform`, `"webkit"` → `-webkit-transform`.
/// Prefixes already written with dashes are used verbatim.
pub fn prefixed(vendor: &str, property: &str) -> String {
    let vendor = vendor.trim();
    if vendor.is_empty() {
        return property.to_string();
    }
    let vendor = vendor.trim_matches('-');
    format!("-{vendor}-{property}")
}

/// Render a number the way browsers stringify them: no trailing `.0`,
/// `-0` prints as `0`, non-finite values print as `NaN` / `Infinity`.
pub fn css_number(value: f64) -> String {
    match value {
        v if v.is_nan() => "NaN".to_string(),
        f64::INFINITY => "Infinity".to_string(),
        f64::NEG_INFINITY => "-Infinity".to_string(),
        0.0 => "0".to_string(),
        v => format!("{v}"),
    }
}
