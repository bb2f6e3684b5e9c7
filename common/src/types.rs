use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneMode {
    Off,
    Heat,
    Cool,
}

impl ZoneMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Heat => "heat",
            Self::Cool => "cool",
        }
    }

    pub fn is_active(self) -> bool {
        self != Self::Off
    }
}

/// Display unit for temperatures. Zone state is always stored in
/// Fahrenheit; the unit only affects rendering and input ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TempUnit {
    #[serde(rename = "F")]
    Fahrenheit,
    #[serde(rename = "C")]
    Celsius,
}

impl TempUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fahrenheit => "F",
            Self::Celsius => "C",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Fahrenheit => "°F",
            Self::Celsius => "°C",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ZoneStatus {
    pub label: String,
    pub mode: &'static str,
    #[serde(rename = "currentTempF")]
    pub current_temp_f: f32,
    #[serde(rename = "targetTempF")]
    pub target_temp_f: Option<f32>,
    #[serde(rename = "currentTemp")]
    pub current_display: f32,
    #[serde(rename = "targetTemp")]
    pub target_display: Option<f32>,
    #[serde(rename = "scheduleRunning")]
    pub schedule_running: bool,
    #[serde(rename = "scheduleStart")]
    pub schedule_start: Option<String>,
    pub editing: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct BedStatus {
    pub left: ZoneStatus,
    pub right: ZoneStatus,
    pub editing: &'static str,
    pub unit: &'static str,
    pub theme: &'static str,
    #[serde(rename = "rangeMin")]
    pub range_min: f32,
    #[serde(rename = "rangeMax")]
    pub range_max: f32,
    #[serde(rename = "rangeStep")]
    pub range_step: f32,
}
