use serde::Serialize;

use crate::types::TempUnit;

pub fn f_to_c(f: f32) -> f32 {
    (f - 32.0) * 5.0 / 9.0
}

pub fn c_to_f(c: f32) -> f32 {
    c * 9.0 / 5.0 + 32.0
}

/// Convert a stored Fahrenheit temperature to the display unit.
/// Fahrenheit is rounded to whole degrees, Celsius to halves.
pub fn to_display(temp_f: f32, unit: TempUnit) -> f32 {
    match unit {
        TempUnit::Fahrenheit => temp_f.round(),
        TempUnit::Celsius => (f_to_c(temp_f) * 2.0).round() / 2.0,
    }
}

/// Convert a display-unit value back to canonical Fahrenheit.
///
/// `to_canonical(to_display(x, u), u)` is not `x` in general; display
/// rounding is lossy and that loss is accepted.
pub fn to_canonical(value: f32, unit: TempUnit) -> f32 {
    match unit {
        TempUnit::Fahrenheit => value,
        TempUnit::Celsius => c_to_f(value),
    }
}

/// Valid input range for one display unit: `[min, max]` with values
/// aligned to multiples of `step` from `min`. `mid` is the seed value
/// used when a zone has no target yet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DisplayRange {
    pub min: f32,
    pub max: f32,
    pub step: f32,
    pub mid: f32,
}

impl DisplayRange {
    pub fn for_unit(unit: TempUnit) -> Self {
        match unit {
            TempUnit::Fahrenheit => Self {
                min: 55.0,
                max: 110.0,
                step: 1.0,
                mid: 82.0,
            },
            TempUnit::Celsius => Self {
                min: 13.0,
                max: 43.5,
                step: 0.5,
                mid: 28.0,
            },
        }
    }

    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }

    /// Clamp and align to the step grid. The result is always a valid
    /// input value for this range.
    pub fn snap(&self, value: f32) -> f32 {
        let steps = ((self.clamp(value) - self.min) / self.step).round();
        self.clamp(self.min + steps * self.step)
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Number of valid values on the grid, endpoints included.
    pub fn slots(&self) -> usize {
        ((self.max - self.min) / self.step).round() as usize + 1
    }

    /// Enumerate every valid value, rounded to one decimal the way the
    /// carousel labels them.
    pub fn values(&self) -> Vec<f32> {
        (0..self.slots())
            .map(|slot| {
                let v = self.min + slot as f32 * self.step;
                (v * 10.0).round() / 10.0
            })
            .collect()
    }
}
