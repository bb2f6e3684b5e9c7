use chrono::NaiveTime;

use crate::{
    config::DemoConfig,
    schedule::ZoneSchedule,
    types::{BedStatus, Side, TempUnit, ZoneMode, ZoneStatus},
    units::{to_canonical, to_display, DisplayRange},
};

/// Sensor readings outside this band are discarded as noise.
const MIN_VALID_TEMP_F: f32 = -40.0;
const MAX_VALID_TEMP_F: f32 = 150.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ZoneState {
    pub mode: ZoneMode,
    pub current_temp_f: f32,
    pub target_temp_f: Option<f32>,
    pub schedule: Option<ZoneSchedule>,
}

impl ZoneState {
    fn status(&self, label: &str, unit: TempUnit, editing: bool) -> ZoneStatus {
        ZoneStatus {
            label: label.to_string(),
            mode: self.mode.as_str(),
            current_temp_f: self.current_temp_f,
            target_temp_f: self.target_temp_f,
            current_display: to_display(self.current_temp_f, unit),
            target_display: self.target_temp_f.map(|t| to_display(t, unit)),
            schedule_running: self.schedule.map(|s| s.running).unwrap_or(false),
            schedule_start: self.schedule.and_then(|s| s.start_text()),
            editing,
        }
    }
}

/// Conditioning direction implied by a target relative to the sensed
/// temperature: above heats, below cools, equal is off.
fn derive_mode(target_f: f32, current_f: f32) -> ZoneMode {
    if target_f > current_f {
        ZoneMode::Heat
    } else if target_f < current_f {
        ZoneMode::Cool
    } else {
        ZoneMode::Off
    }
}

/// Owns both zones and the side whose controls are shown. All writes
/// go through here; displays and pickers only see read-only state and
/// report intent back.
#[derive(Debug, Clone)]
pub struct BedEngine {
    left: ZoneState,
    right: ZoneState,
    editing: Side,
}

impl BedEngine {
    pub fn new(config: &DemoConfig) -> Self {
        Self {
            left: config.left.to_zone(),
            right: config.right.to_zone(),
            editing: Side::Left,
        }
    }

    pub fn zone(&self, side: Side) -> &ZoneState {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    fn zone_mut(&mut self, side: Side) -> &mut ZoneState {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub fn editing(&self) -> Side {
        self.editing
    }

    pub fn select_editing(&mut self, side: Side) -> bool {
        if self.editing != side {
            self.editing = side;
            true
        } else {
            false
        }
    }

    /// Set a zone's target from a display-unit value. The value is
    /// clamped and grid-aligned rather than rejected, converted to
    /// canonical Fahrenheit, and the mode re-derived from its position
    /// relative to the sensed temperature.
    pub fn set_target(&mut self, side: Side, display_value: f32, unit: TempUnit) -> bool {
        if !display_value.is_finite() {
            return false;
        }

        let range = DisplayRange::for_unit(unit);
        let target_f = to_canonical(range.snap(display_value), unit);

        let zone = self.zone_mut(side);
        let mode = derive_mode(target_f, zone.current_temp_f);
        let changed = zone.target_temp_f != Some(target_f) || zone.mode != mode;
        zone.target_temp_f = Some(target_f);
        zone.mode = mode;
        changed
    }

    /// Move the target one step up or down in display units, seeding
    /// from the range midpoint when the zone has no target yet.
    pub fn nudge_target(&mut self, side: Side, direction: StepDirection, unit: TempUnit) -> bool {
        let range = DisplayRange::for_unit(unit);
        let base = match self.zone(side).target_temp_f {
            Some(target_f) => to_display(target_f, unit),
            None => range.mid,
        };

        let delta = match direction {
            StepDirection::Up => range.step,
            StepDirection::Down => -range.step,
        };
        self.set_target(side, base + delta, unit)
    }

    /// Power toggle. Turning off retains the target so it can resume;
    /// turning on re-derives the mode from the retained target (or the
    /// sensed temperature when there is none, which comes back off).
    pub fn toggle_power(&mut self, side: Side) -> ZoneMode {
        let zone = self.zone_mut(side);
        zone.mode = if zone.mode.is_active() {
            ZoneMode::Off
        } else {
            let target_f = zone.target_temp_f.unwrap_or(zone.current_temp_f);
            derive_mode(target_f, zone.current_temp_f)
        };
        zone.mode
    }

    /// Schedule flag update. Turning the schedule off keeps the start
    /// time around for redisplay, the same way power-off keeps the
    /// target.
    pub fn toggle_schedule(&mut self, side: Side, running: bool) -> bool {
        let zone = self.zone_mut(side);
        let schedule = zone.schedule.get_or_insert_with(ZoneSchedule::default);
        if schedule.running != running {
            schedule.running = running;
            true
        } else {
            false
        }
    }

    pub fn set_schedule_start(&mut self, side: Side, time: NaiveTime) {
        let zone = self.zone_mut(side);
        let schedule = zone.schedule.get_or_insert_with(ZoneSchedule::default);
        schedule.next_start = Some(time);
    }

    /// Telemetry write path for the sensed temperature. The UI's own
    /// controls never call this. While conditioning is active the mode
    /// follows the new reading, so a zone that reaches its target
    /// settles to off.
    pub fn update_current_temp(&mut self, side: Side, temp_f: f32) -> bool {
        if !temp_f.is_finite() || !(MIN_VALID_TEMP_F..=MAX_VALID_TEMP_F).contains(&temp_f) {
            return false;
        }

        let zone = self.zone_mut(side);
        zone.current_temp_f = temp_f;
        if zone.mode.is_active() {
            if let Some(target_f) = zone.target_temp_f {
                zone.mode = derive_mode(target_f, temp_f);
            }
        }
        true
    }

    pub fn status(&self, config: &DemoConfig) -> BedStatus {
        let range = DisplayRange::for_unit(config.unit);
        BedStatus {
            left: self.left.status(
                &config.names.left,
                config.unit,
                self.editing == Side::Left,
            ),
            right: self.right.status(
                &config.names.right,
                config.unit,
                self.editing == Side::Right,
            ),
            editing: self.editing.as_str(),
            unit: config.unit.as_str(),
            theme: config.theme.as_str(),
            range_min: range.min,
            range_max: range.max,
            range_step: range.step,
        }
    }
}
