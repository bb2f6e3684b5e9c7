use serde::Serialize;

use crate::{
    config::DemoConfig,
    schedule::ZoneSchedule,
    types::{Side, TempUnit, Theme, ZoneMode},
    units::to_display,
    zone::{BedEngine, ZoneState},
};

/// Color role for one bed half, derived from the zone's mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tint {
    Neutral,
    Cool,
    Heat,
}

impl Tint {
    pub fn from_mode(mode: ZoneMode) -> Self {
        match mode {
            ZoneMode::Off => Self::Neutral,
            ZoneMode::Cool => Self::Cool,
            ZoneMode::Heat => Self::Heat,
        }
    }
}

/// Hex color for a tint under the given theme: cool takes the info
/// color, heat the error color, off a neutral grey.
pub fn tint_color(tint: Tint, theme: Theme) -> &'static str {
    match (tint, theme) {
        (Tint::Cool, Theme::Light) => "#0288d1",
        (Tint::Cool, Theme::Dark) => "#29b6f6",
        (Tint::Heat, Theme::Light) => "#d32f2f",
        (Tint::Heat, Theme::Dark) => "#f44336",
        (Tint::Neutral, Theme::Light) => "#bdbdbd",
        (Tint::Neutral, Theme::Dark) => "#757575",
    }
}

/// Label for the state pill on a bed half.
pub fn mode_pill(mode: ZoneMode) -> &'static str {
    match mode {
        ZoneMode::Off => "Off",
        ZoneMode::Heat => "Heating",
        ZoneMode::Cool => "Cooling",
    }
}

/// Caption shown above the dial's value readout.
pub fn dial_caption(mode: ZoneMode) -> &'static str {
    match mode {
        ZoneMode::Off => "Set to",
        ZoneMode::Heat => "Warming to",
        ZoneMode::Cool => "Cooling to",
    }
}

/// Format a canonical Fahrenheit temperature in the display unit:
/// whole degrees for Fahrenheit, halves with one decimal for Celsius.
pub fn format_temp(temp_f: f32, unit: TempUnit) -> String {
    let shown = to_display(temp_f, unit);
    match unit {
        TempUnit::Fahrenheit => format!("{shown:.0}{}", unit.symbol()),
        TempUnit::Celsius => format!("{shown:.1}{}", unit.symbol()),
    }
}

fn schedule_text(schedule: Option<&ZoneSchedule>) -> String {
    match schedule {
        Some(s) if s.running => match s.start_text() {
            Some(start) => format!("Scheduled {start}"),
            None => "Scheduled".to_string(),
        },
        _ => "Schedule off".to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneView {
    pub label: String,
    pub tint: Tint,
    pub color: &'static str,
    pub pill: &'static str,
    pub current: String,
    pub target: Option<String>,
    pub schedule: String,
    pub editing: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BedView {
    pub left: ZoneView,
    pub right: ZoneView,
}

fn zone_view(zone: &ZoneState, label: &str, config: &DemoConfig, editing: bool) -> ZoneView {
    let tint = Tint::from_mode(zone.mode);
    ZoneView {
        label: label.to_string(),
        tint,
        color: tint_color(tint, config.theme),
        pill: mode_pill(zone.mode),
        current: format_temp(zone.current_temp_f, config.unit),
        target: zone.target_temp_f.map(|t| format_temp(t, config.unit)),
        schedule: schedule_text(zone.schedule.as_ref()),
        editing,
    }
}

/// Render the whole bed into a display model. Pure: no state is
/// touched, side selection stays a callback concern of the host.
pub fn bed_view(engine: &BedEngine, config: &DemoConfig) -> BedView {
    BedView {
        left: zone_view(
            engine.zone(Side::Left),
            &config.names.left,
            config,
            engine.editing() == Side::Left,
        ),
        right: zone_view(
            engine.zone(Side::Right),
            &config.names.right,
            config,
            engine.editing() == Side::Right,
        ),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::schedule::parse_start;

    #[test]
    fn tints_follow_modes() {
        assert_eq!(Tint::from_mode(ZoneMode::Cool), Tint::Cool);
        assert_eq!(Tint::from_mode(ZoneMode::Heat), Tint::Heat);
        assert_eq!(Tint::from_mode(ZoneMode::Off), Tint::Neutral);

        assert_eq!(tint_color(Tint::Cool, Theme::Light), "#0288d1");
        assert_ne!(
            tint_color(Tint::Heat, Theme::Light),
            tint_color(Tint::Heat, Theme::Dark)
        );
    }

    #[test]
    fn formats_temperatures_per_unit() {
        assert_eq!(format_temp(68.0, TempUnit::Fahrenheit), "68°F");
        assert_eq!(format_temp(68.0, TempUnit::Celsius), "20.0°C");
        assert_eq!(format_temp(68.9, TempUnit::Celsius), "20.5°C");
        assert_eq!(format_temp(72.4, TempUnit::Fahrenheit), "72°F");
    }

    #[test]
    fn renders_the_default_bed() {
        let config = DemoConfig::default();
        let engine = BedEngine::new(&config);
        let view = bed_view(&engine, &config);

        assert_eq!(view.left.pill, "Cooling");
        assert_eq!(view.left.current, "72°F");
        assert_eq!(view.left.target.as_deref(), Some("68°F"));
        assert!(view.left.editing);

        assert_eq!(view.right.pill, "Off");
        assert_eq!(view.right.tint, Tint::Neutral);
        assert_eq!(view.right.target, None);
        assert!(!view.right.editing);
    }

    #[test]
    fn schedule_text_reflects_running_state() {
        let config = DemoConfig::default();
        let mut engine = BedEngine::new(&config);

        assert_eq!(bed_view(&engine, &config).left.schedule, "Schedule off");

        engine.set_schedule_start(Side::Left, parse_start("21:30").unwrap());
        engine.toggle_schedule(Side::Left, true);
        assert_eq!(bed_view(&engine, &config).left.schedule, "Scheduled 21:30");

        engine.toggle_schedule(Side::Left, false);
        assert_eq!(bed_view(&engine, &config).left.schedule, "Schedule off");
    }

    #[test]
    fn dial_captions_read_naturally() {
        assert_eq!(dial_caption(ZoneMode::Heat), "Warming to");
        assert_eq!(dial_caption(ZoneMode::Cool), "Cooling to");
        assert_eq!(dial_caption(ZoneMode::Off), "Set to");
    }
}
