use serde::{Deserialize, Serialize};

use crate::{
    types::{TempUnit, Theme, ZoneMode},
    zone::ZoneState,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideNames {
    pub left: String,
    pub right: String,
}

impl Default for SideNames {
    fn default() -> Self {
        Self {
            left: "Left".to_string(),
            right: "Right".to_string(),
        }
    }
}

/// Seed state for one zone at startup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneDefaults {
    pub mode: ZoneMode,
    #[serde(rename = "currentTemp")]
    pub current_temp_f: f32,
    #[serde(rename = "targetTemp")]
    pub target_temp_f: Option<f32>,
}

impl ZoneDefaults {
    pub fn to_zone(self) -> ZoneState {
        ZoneState {
            mode: self.mode,
            current_temp_f: self.current_temp_f,
            target_temp_f: self.target_temp_f,
            schedule: None,
        }
    }
}

/// Session-scoped preferences and demo seed values, threaded through
/// composition rather than read from ambient globals. Nothing here is
/// persisted; the demo starts from `Default` every run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    pub unit: TempUnit,
    pub theme: Theme,
    pub names: SideNames,
    pub left: ZoneDefaults,
    pub right: ZoneDefaults,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            unit: TempUnit::Fahrenheit,
            theme: Theme::Light,
            names: SideNames::default(),
            left: ZoneDefaults {
                mode: ZoneMode::Cool,
                current_temp_f: 72.0,
                target_temp_f: Some(68.0),
            },
            right: ZoneDefaults {
                mode: ZoneMode::Off,
                current_temp_f: 70.0,
                target_temp_f: None,
            },
        }
    }
}

impl DemoConfig {
    pub fn sanitize(&mut self) {
        for defaults in [&mut self.left, &mut self.right] {
            defaults.current_temp_f = defaults.current_temp_f.clamp(55.0, 110.0);
            defaults.target_temp_f = defaults
                .target_temp_f
                .filter(|t| t.is_finite())
                .map(|t| t.clamp(55.0, 110.0));
        }
        if self.names.left.trim().is_empty() {
            self.names.left = "Left".to_string();
        }
        if self.names.right.trim().is_empty() {
            self.names.right = "Right".to_string();
        }
    }
}
