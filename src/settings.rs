//! Player options
//!
//! Only two values are persisted: the twinkle preset index and the
//! shooting-stars flag. Where they are stored is up to the host; this module
//! only converts them to and from JSON.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};

/// Boost applied instead of the preset while debug twinkle is on
pub const DEBUG_TWINKLE_BOOST: f32 = 4.0;

/// Twinkle intensity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(try_from = "u8", into = "u8")]
pub enum TwinklePreset {
    Subtle,
    #[default]
    Normal,
    Vivid,
}

impl TwinklePreset {
    pub const ALL: [TwinklePreset; 3] = [
        TwinklePreset::Subtle,
        TwinklePreset::Normal,
        TwinklePreset::Vivid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TwinklePreset::Subtle => "Subtle",
            TwinklePreset::Normal => "Normal",
            TwinklePreset::Vivid => "Vivid",
        }
    }

    /// Accepts a persisted index ("0"-"2") or a preset name in any case
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Ok(index) = s.parse::<u8>() {
            return Self::from_index(index).ok();
        }
        Self::ALL
            .into_iter()
            .find(|preset| preset.as_str().eq_ignore_ascii_case(s))
    }

    /// Persisted index (0-2)
    pub fn index(&self) -> u8 {
        match self {
            TwinklePreset::Subtle => 0,
            TwinklePreset::Normal => 1,
            TwinklePreset::Vivid => 2,
        }
    }

    pub fn from_index(index: u8) -> Result<Self> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or(SimError::InvalidPreset(index))
    }

    /// Multiplier on each star's twinkle amplitude
    pub fn boost(&self) -> f32 {
        match self {
            TwinklePreset::Subtle => 1.0,
            TwinklePreset::Normal => 1.6,
            TwinklePreset::Vivid => 2.4,
        }
    }

    /// Next preset, wrapping Vivid -> Subtle
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() as usize + 1) % Self::ALL.len()]
    }

    /// Previous preset, wrapping Subtle -> Vivid
    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() as usize + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl TryFrom<u8> for TwinklePreset {
    type Error = SimError;

    fn try_from(index: u8) -> Result<Self> {
        Self::from_index(index)
    }
}

impl From<TwinklePreset> for u8 {
    fn from(preset: TwinklePreset) -> u8 {
        preset.index()
    }
}

/// Persisted player options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Background star twinkle intensity
    #[serde(default)]
    pub twinkle: TwinklePreset,
    /// Whether shooting stars are spawned at all
    #[serde(default = "default_shooting_stars")]
    pub shooting_stars: bool,
}

fn default_shooting_stars() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            twinkle: TwinklePreset::Normal,
            shooting_stars: default_shooting_stars(),
        }
    }
}

impl Settings {
    /// Twinkle boost, honouring the runtime-only debug override
    pub fn twinkle_boost(&self, debug: bool) -> f32 {
        if debug {
            DEBUG_TWINKLE_BOOST
        } else {
            self.twinkle.boost()
        }
    }

    pub fn to_json(&self) -> String {
        // Two plain fields; serialisation cannot fail
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Replace the twinkle preset with one named by the user, if it parses
    pub fn with_twinkle_override(mut self, name: Option<&str>) -> Self {
        let Some(name) = name else {
            return self;
        };
        match TwinklePreset::parse(name) {
            Some(preset) => {
                log::info!("Twinkle override: {}", preset.as_str());
                self.twinkle = preset;
            }
            None => log::warn!(
                "Unknown twinkle preset {:?}, keeping {}",
                name,
                self.twinkle.as_str()
            ),
        }
        self
    }

    /// Parse persisted text if the host has any, falling back to defaults
    pub fn load_or_default(json: Option<&str>) -> Self {
        if let Some(json) = json {
            match Self::from_json(json) {
                Ok(settings) => {
                    log::info!("Loaded settings: {:?}", settings);
                    return settings;
                }
                Err(e) => log::warn!("Ignoring stored settings: {}", e),
            }
        }

        log::info!("Using default settings");
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_index_round_trip() {
        for preset in TwinklePreset::ALL {
            assert_eq!(TwinklePreset::from_index(preset.index()).unwrap(), preset);
        }
        assert!(matches!(
            TwinklePreset::from_index(3),
            Err(SimError::InvalidPreset(3))
        ));
    }

    #[test]
    fn test_preset_cycling() {
        assert_eq!(TwinklePreset::Vivid.next(), TwinklePreset::Subtle);
        assert_eq!(TwinklePreset::Subtle.prev(), TwinklePreset::Vivid);
        assert_eq!(TwinklePreset::Normal.next(), TwinklePreset::Vivid);
    }

    #[test]
    fn test_preset_parse() {
        assert_eq!(TwinklePreset::parse("vivid"), Some(TwinklePreset::Vivid));
        assert_eq!(TwinklePreset::parse(" Subtle "), Some(TwinklePreset::Subtle));
        assert_eq!(TwinklePreset::parse("1"), Some(TwinklePreset::Normal));
        assert_eq!(TwinklePreset::parse("3"), None);
        assert_eq!(TwinklePreset::parse("high"), None);
        assert_eq!(TwinklePreset::parse(""), None);
    }

    #[test]
    fn test_twinkle_override() {
        let base = Settings {
            twinkle: TwinklePreset::Normal,
            shooting_stars: false,
        };
        assert_eq!(base.with_twinkle_override(None), base);

        let vivid = base.with_twinkle_override(Some("VIVID"));
        assert_eq!(vivid.twinkle, TwinklePreset::Vivid);
        assert!(!vivid.shooting_stars);

        assert_eq!(base.with_twinkle_override(Some("0")).twinkle, TwinklePreset::Subtle);
        assert_eq!(base.with_twinkle_override(Some("blinding")), base);
    }

    #[test]
    fn test_boost_tiers_increase() {
        assert!(TwinklePreset::Subtle.boost() < TwinklePreset::Normal.boost());
        assert!(TwinklePreset::Normal.boost() < TwinklePreset::Vivid.boost());
        let s = Settings::default();
        assert_eq!(s.twinkle_boost(true), DEBUG_TWINKLE_BOOST);
        assert_eq!(s.twinkle_boost(false), TwinklePreset::Normal.boost());
    }

    #[test]
    fn test_settings_json_uses_index() {
        let s = Settings {
            twinkle: TwinklePreset::Vivid,
            shooting_stars: false,
        };
        let json = s.to_json();
        assert!(json.contains("\"twinkle\":2"));
        assert_eq!(Settings::from_json(&json).unwrap(), s);
    }

    #[test]
    fn test_settings_rejects_bad_preset() {
        assert!(Settings::from_json(r#"{"twinkle":7,"shooting_stars":true}"#).is_err());
        assert!(Settings::from_json("not json").is_err());
    }

    #[test]
    fn test_load_or_default_falls_back() {
        assert_eq!(Settings::load_or_default(None), Settings::default());
        assert_eq!(Settings::load_or_default(Some("{")), Settings::default());
        let loaded = Settings::load_or_default(Some(r#"{"twinkle":0}"#));
        assert_eq!(loaded.twinkle, TwinklePreset::Subtle);
        assert!(loaded.shooting_stars);
    }
}
