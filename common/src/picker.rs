use serde::{Deserialize, Serialize};

use crate::units::DisplayRange;

/// Interaction style for the temperature picker. All variants share
/// one contract: given the current display value and an input event,
/// propose a new clamped, grid-aligned value or nothing at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PickerKind {
    Stepper,
    Slider,
    Wheel,
    Dial,
    Entry,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PickerEvent {
    StepUp,
    StepDown,
    /// Slider thumb position as a fraction of the track, 0 at `min`.
    SliderFraction(f32),
    /// Wheel scroll came to rest at `offset`; slot `i` sits centered
    /// at `i * item_width`.
    ScrollSettle { offset: f32, item_width: f32 },
    /// Pointer position over the dial's semicircular track, in track
    /// coordinates.
    Drag { x: f32, y: f32 },
    /// Raw text from the numeric entry field.
    Text(String),
}

pub trait TemperaturePicker {
    fn kind(&self) -> PickerKind;

    fn range(&self) -> &DisplayRange;

    /// Propose a replacement for `value`. `None` means the event is
    /// not for this picker, was unparseable, or would not change the
    /// value; a `Some` result is always in range and on the step grid.
    fn propose(&self, value: f32, event: &PickerEvent) -> Option<f32>;
}

pub fn picker_for(kind: PickerKind, range: DisplayRange) -> Box<dyn TemperaturePicker> {
    match kind {
        PickerKind::Stepper => Box::new(Stepper { range }),
        PickerKind::Slider => Box::new(Slider { range }),
        PickerKind::Wheel => Box::new(Wheel { range }),
        PickerKind::Dial => Box::new(Dial::new(range)),
        PickerKind::Entry => Box::new(Entry { range }),
    }
}

fn changed(range: &DisplayRange, value: f32, next: f32) -> Option<f32> {
    let next = range.snap(next);
    // Grid values are at least one step apart, so half a step cleanly
    // separates "same slot" from a real change.
    if (next - value).abs() > range.step / 2.0 {
        Some(next)
    } else {
        None
    }
}

/// Plus/minus buttons moving by one step.
pub struct Stepper {
    range: DisplayRange,
}

impl TemperaturePicker for Stepper {
    fn kind(&self) -> PickerKind {
        PickerKind::Stepper
    }

    fn range(&self) -> &DisplayRange {
        &self.range
    }

    fn propose(&self, value: f32, event: &PickerEvent) -> Option<f32> {
        let delta = match event {
            PickerEvent::StepUp => self.range.step,
            PickerEvent::StepDown => -self.range.step,
            _ => return None,
        };
        changed(&self.range, value, value + delta)
    }
}

/// Continuous drag mapped linearly onto the range.
pub struct Slider {
    range: DisplayRange,
}

impl TemperaturePicker for Slider {
    fn kind(&self) -> PickerKind {
        PickerKind::Slider
    }

    fn range(&self) -> &DisplayRange {
        &self.range
    }

    fn propose(&self, value: f32, event: &PickerEvent) -> Option<f32> {
        let PickerEvent::SliderFraction(fraction) = event else {
            return None;
        };
        if !fraction.is_finite() {
            return None;
        }
        let fraction = fraction.clamp(0.0, 1.0);
        let next = self.range.min + fraction * (self.range.max - self.range.min);
        changed(&self.range, value, next)
    }
}

/// Scrollable number wheel with one slot per valid value. The slot
/// nearest the rest position wins; overscroll past either end just
/// lands on the boundary slot.
pub struct Wheel {
    range: DisplayRange,
}

impl Wheel {
    /// True when the rest offset lies past the first or last slot,
    /// which is where the UI plays its bounce.
    pub fn overscrolled(&self, offset: f32, item_width: f32) -> bool {
        if item_width <= 0.0 {
            return false;
        }
        offset < 0.0 || offset > (self.range.slots() - 1) as f32 * item_width
    }
}

impl TemperaturePicker for Wheel {
    fn kind(&self) -> PickerKind {
        PickerKind::Wheel
    }

    fn range(&self) -> &DisplayRange {
        &self.range
    }

    fn propose(&self, value: f32, event: &PickerEvent) -> Option<f32> {
        let PickerEvent::ScrollSettle { offset, item_width } = event else {
            return None;
        };
        if !offset.is_finite() || *item_width <= 0.0 {
            return None;
        }

        let last = (self.range.slots() - 1) as f32;
        let slot = (offset / item_width).round().clamp(0.0, last);
        let next = self.range.min + slot * self.range.step;
        changed(&self.range, value, next)
    }
}

/// Radial drag dial: a semicircular track whose pointer angle maps
/// onto the range, min at the left end of the arc.
pub struct Dial {
    range: DisplayRange,
    center_x: f32,
    center_y: f32,
}

/// Track geometry: 200px square, 80px radius, 12px stroke.
const DIAL_CENTER_X: f32 = 100.0;
const DIAL_CENTER_Y: f32 = 86.0;

impl Dial {
    pub fn new(range: DisplayRange) -> Self {
        Self {
            range,
            center_x: DIAL_CENTER_X,
            center_y: DIAL_CENTER_Y,
        }
    }
}

impl TemperaturePicker for Dial {
    fn kind(&self) -> PickerKind {
        PickerKind::Dial
    }

    fn range(&self) -> &DisplayRange {
        &self.range
    }

    fn propose(&self, value: f32, event: &PickerEvent) -> Option<f32> {
        let PickerEvent::Drag { x, y } = event else {
            return None;
        };
        if !x.is_finite() || !y.is_finite() {
            return None;
        }

        let dx = x - self.center_x;
        let dy = self.center_y - y;
        let theta = dy.atan2(dx).clamp(0.0, std::f32::consts::PI);
        let fraction = theta / std::f32::consts::PI;
        let next = self.range.min + (1.0 - fraction) * (self.range.max - self.range.min);
        changed(&self.range, value, next)
    }
}

/// Free-form numeric entry. Anything that does not parse as a number
/// is ignored without comment.
pub struct Entry {
    range: DisplayRange,
}

impl TemperaturePicker for Entry {
    fn kind(&self) -> PickerKind {
        PickerKind::Entry
    }

    fn range(&self) -> &DisplayRange {
        &self.range
    }

    fn propose(&self, value: f32, event: &PickerEvent) -> Option<f32> {
        let PickerEvent::Text(text) = event else {
            return None;
        };
        let parsed = text.trim().parse::<f32>().ok().filter(|v| v.is_finite())?;
        changed(&self.range, value, parsed)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::types::TempUnit;

    fn f_range() -> DisplayRange {
        DisplayRange::for_unit(TempUnit::Fahrenheit)
    }

    fn c_range() -> DisplayRange {
        DisplayRange::for_unit(TempUnit::Celsius)
    }

    fn on_grid(range: &DisplayRange, value: f32) -> bool {
        let steps = (value - range.min) / range.step;
        range.contains(value) && (steps - steps.round()).abs() < 1e-3
    }

    #[test]
    fn stepper_steps_and_stops_at_bounds() {
        let picker = picker_for(PickerKind::Stepper, f_range());

        assert_eq!(picker.propose(70.0, &PickerEvent::StepUp), Some(71.0));
        assert_eq!(picker.propose(70.0, &PickerEvent::StepDown), Some(69.0));
        assert_eq!(picker.propose(110.0, &PickerEvent::StepUp), None);
        assert_eq!(picker.propose(55.0, &PickerEvent::StepDown), None);
    }

    #[test]
    fn slider_maps_fractions_onto_the_range() {
        let picker = picker_for(PickerKind::Slider, f_range());

        assert_eq!(
            picker.propose(70.0, &PickerEvent::SliderFraction(0.0)),
            Some(55.0)
        );
        assert_eq!(
            picker.propose(70.0, &PickerEvent::SliderFraction(1.0)),
            Some(110.0)
        );
        // Dragged past the track ends: clamp, don't reject.
        assert_eq!(
            picker.propose(70.0, &PickerEvent::SliderFraction(3.5)),
            Some(110.0)
        );
        assert_eq!(picker.propose(70.0, &PickerEvent::StepUp), None);
    }

    #[test]
    fn slider_results_stay_on_the_celsius_grid() {
        let picker = picker_for(PickerKind::Slider, c_range());
        for i in 0..=20 {
            let fraction = i as f32 / 20.0;
            if let Some(next) = picker.propose(20.0, &PickerEvent::SliderFraction(fraction)) {
                assert!(on_grid(picker.range(), next), "{fraction} -> {next}");
            }
        }
    }

    #[test]
    fn wheel_settles_on_the_nearest_slot() {
        let picker = picker_for(PickerKind::Wheel, f_range());
        let settle = |offset| PickerEvent::ScrollSettle {
            offset,
            item_width: 40.0,
        };

        assert_eq!(picker.propose(55.0, &settle(0.0)), None);
        assert_eq!(picker.propose(55.0, &settle(41.0)), Some(56.0));
        assert_eq!(picker.propose(55.0, &settle(99.0)), Some(57.0));
        // Overscroll bounces back to the boundary slots.
        assert_eq!(picker.propose(70.0, &settle(-120.0)), Some(55.0));
        assert_eq!(picker.propose(70.0, &settle(1e6)), Some(110.0));
    }

    #[test]
    fn wheel_reports_overscroll_for_the_bounce() {
        let wheel = Wheel { range: f_range() };
        assert!(wheel.overscrolled(-1.0, 40.0));
        assert!(wheel.overscrolled(2241.0, 40.0));
        assert!(!wheel.overscrolled(100.0, 40.0));
        assert!(!wheel.overscrolled(5.0, 0.0));
    }

    #[test]
    fn wheel_ignores_degenerate_geometry() {
        let picker = picker_for(PickerKind::Wheel, f_range());
        assert_eq!(
            picker.propose(
                70.0,
                &PickerEvent::ScrollSettle {
                    offset: 10.0,
                    item_width: 0.0
                }
            ),
            None
        );
    }

    #[test]
    fn dial_maps_arc_ends_to_range_ends() {
        let picker = picker_for(PickerKind::Dial, f_range());

        // Far left of the arc is the minimum.
        assert_eq!(
            picker.propose(70.0, &PickerEvent::Drag { x: 20.0, y: 86.0 }),
            Some(55.0)
        );
        // Far right is the maximum.
        assert_eq!(
            picker.propose(70.0, &PickerEvent::Drag { x: 180.0, y: 86.0 }),
            Some(110.0)
        );
        // Straight up is the middle of the span, snapped to the grid.
        let top = picker
            .propose(55.0, &PickerEvent::Drag { x: 100.0, y: 6.0 })
            .unwrap();
        assert!(on_grid(picker.range(), top));
        assert!((top - 82.5).abs() <= 0.5, "top of arc gave {top}");
    }

    #[test]
    fn dial_drags_below_the_arc_clamp_to_the_ends() {
        let picker = picker_for(PickerKind::Dial, f_range());
        let below_right = picker.propose(70.0, &PickerEvent::Drag { x: 150.0, y: 140.0 });
        assert_eq!(below_right, Some(110.0));
    }

    #[test]
    fn entry_parses_numbers_and_ignores_the_rest() {
        let picker = picker_for(PickerKind::Entry, f_range());

        assert_eq!(
            picker.propose(70.0, &PickerEvent::Text(" 68 ".to_string())),
            Some(68.0)
        );
        assert_eq!(
            picker.propose(70.0, &PickerEvent::Text("200".to_string())),
            Some(110.0)
        );
        for junk in ["", "warm", "6 8", "NaN", "inf"] {
            assert_eq!(
                picker.propose(70.0, &PickerEvent::Text(junk.to_string())),
                None,
                "{junk:?} should be ignored"
            );
        }
    }

    #[test]
    fn every_variant_reports_its_kind() {
        for kind in [
            PickerKind::Stepper,
            PickerKind::Slider,
            PickerKind::Wheel,
            PickerKind::Dial,
            PickerKind::Entry,
        ] {
            assert_eq!(picker_for(kind, f_range()).kind(), kind);
        }
    }
}
