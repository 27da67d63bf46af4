mod clock;
mod collection;
mod error;
mod mock_data;
mod navigation;
mod operations;
mod range;
mod reassign;
mod state;
mod target;
mod types;
mod view;
mod window;

pub use clock::{Clock, FixedClock, SystemClock};
pub use collection::ShiftCollection;
pub use error::{ConfigError, ReassignError, TargetIdError, ViewModeError};
pub use mock_data::{demo_positions, demo_reference_date, demo_shifts};
pub use navigation::{shift_days, shift_months, Direction, Navigator};
pub use operations::{
    count_shifts_in_month, shifts_in_cell, shifts_in_range, shifts_on_date, validate_positions,
};
pub use range::DateRange;
pub use reassign::{move_shift, reassign, try_reassign};
pub use state::{Command, DragEndEvent, Scheduler, SchedulerOptions};
pub use target::{
    decode, encode, format_date_key, parse_date_key, validate_position_id, DropTarget,
    DropTargetId, DATE_KEY_FORMAT, DROP_TARGET_DELIMITER,
};
pub use types::{CycleLength, Position, Shift, ViewMode};
pub use view::{
    window_title, DayHeader, DaySheet, MonthCell, MonthSheet, MonthSummary, PositionColumn,
    PositionRow, Render, ScheduleView, ShiftCell, ViewBody, ViewTab, WeekGrid, YearSheet,
    HOURS_PER_DAY, WEEKDAY_LABELS,
};
pub use window::{
    compute_window, first_of_month, last_day_of_month, month_dates, month_grid, week_dates,
    week_start, year_months, GridCell, MonthGrid, VisibleWindow, DAYS_PER_WEEK, MONTH_GRID_CELLS,
    WEEK_START,
};
