pub mod config;
pub mod picker;
pub mod schedule;
pub mod types;
pub mod units;
pub mod view;
pub mod zone;

pub use config::{DemoConfig, SideNames, ZoneDefaults};
pub use picker::{picker_for, PickerEvent, PickerKind, TemperaturePicker};
pub use schedule::{format_start, parse_start, ScheduleTimeError, ZoneSchedule};
pub use types::{BedStatus, Side, TempUnit, Theme, ZoneMode, ZoneStatus};
pub use units::{c_to_f, f_to_c, to_canonical, to_display, DisplayRange};
pub use view::{bed_view, BedView, Tint, ZoneView};
pub use zone::{BedEngine, StepDirection, ZoneState};
