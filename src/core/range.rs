//! Two-handle range selection over a closed interval.
//!
//! Handles are moved by pixel position along a track. Positions are normalized
//! against the track width, interpolated over the interval, snapped to the step
//! and then clamped so the handles stay at least one step apart.

use std::error::Error as StdError;
use std::fmt;

/// Receives a notification for every accepted handle move.
pub trait FeedbackSink {
    fn notify(&mut self, handle: Handle);
}

/// Sink that discards notifications.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoFeedback;

impl FeedbackSink for NoFeedback {
    fn notify(&mut self, _handle: Handle) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
    Lower,
    Upper,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RangeError {
    /// Step must be a positive, finite number.
    InvalidStep(f64),
    /// The interval must fit at least one step between its bounds.
    IntervalTooNarrow { min: f64, max: f64, step: f64 },
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeError::InvalidStep(step) => write!(f, "Invalid range step: {step}"),
            RangeError::IntervalTooNarrow { min, max, step } => write!(
                f,
                "Range [{min}, {max}] cannot hold two handles {step} apart"
            ),
        }
    }
}

impl StdError for RangeError {}

/// Slack for float noise when counting how many steps fit in the interval.
const GRID_EPSILON: f64 = 1e-9;

/// Handles live on the grid `min + k * step` for `k` in `0..=top`, where the
/// last grid point never exceeds `max`. The lower handle always sits at least
/// one grid point below the upper one.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeSelection {
    min: f64,
    max: f64,
    step: f64,
    top: u64,
    lower: u64,
    upper: u64,
}

impl RangeSelection {
    /// Builds a selection, snapping the initial values onto the step grid and
    /// pulling them back inside the ordering invariant.
    pub fn new(min: f64, max: f64, step: f64, lower: f64, upper: f64) -> Result<Self, RangeError> {
        if !(step.is_finite() && step > 0.0) {
            return Err(RangeError::InvalidStep(step));
        }
        let steps = ((max - min) / step + GRID_EPSILON).floor();
        if !(min.is_finite() && max.is_finite()) || !(steps >= 1.0) {
            return Err(RangeError::IntervalTooNarrow { min, max, step });
        }

        let mut selection = Self {
            min,
            max,
            step,
            top: steps as u64,
            lower: 0,
            upper: 0,
        };
        selection.upper = selection.index_of(upper).max(1);
        selection.lower = selection.index_of(lower).min(selection.upper - 1);
        Ok(selection)
    }

    /// Builds a selection from values already known to satisfy the ordering
    /// and grid invariants.
    pub(crate) fn from_valid_parts(min: f64, max: f64, step: f64, lower: f64, upper: f64) -> Self {
        let top = ((max - min) / step + GRID_EPSILON).floor() as u64;
        let mut selection = Self {
            min,
            max,
            step,
            top,
            lower: 0,
            upper: 0,
        };
        selection.lower = selection.index_of(lower);
        selection.upper = selection.index_of(upper);
        selection
    }

    pub fn lower(&self) -> f64 {
        self.value_of(self.lower)
    }

    pub fn upper(&self) -> f64 {
        self.value_of(self.upper)
    }

    pub fn bounds(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn normalized_lower(&self) -> f64 {
        (self.lower() - self.min) / (self.max - self.min)
    }

    pub fn normalized_upper(&self) -> f64 {
        (self.upper() - self.min) / (self.max - self.min)
    }

    /// Moves the lower handle. Returns `true` when the value changed.
    pub fn drag_lower(
        &mut self,
        position: f64,
        track_width: f64,
        feedback: &mut dyn FeedbackSink,
    ) -> bool {
        let target = self
            .index_of(self.raw_value_at(position, track_width))
            .min(self.upper - 1);
        self.commit(Handle::Lower, target, feedback)
    }

    /// Moves the upper handle. Returns `true` when the value changed.
    pub fn drag_upper(
        &mut self,
        position: f64,
        track_width: f64,
        feedback: &mut dyn FeedbackSink,
    ) -> bool {
        let target = self
            .index_of(self.raw_value_at(position, track_width))
            .max(self.lower + 1);
        self.commit(Handle::Upper, target, feedback)
    }

    /// Which handle a press at `position` should grab: the nearer one, with
    /// ties going to the upper handle when the press is right of both.
    pub fn nearest_handle(&self, position: f64, track_width: f64) -> Handle {
        let value = self.raw_value_at(position, track_width);
        let lower = self.lower();
        let to_lower = (value - lower).abs();
        let to_upper = (value - self.upper()).abs();
        if to_lower < to_upper || (to_lower == to_upper && value < lower) {
            Handle::Lower
        } else {
            Handle::Upper
        }
    }

    fn commit(&mut self, handle: Handle, target: u64, feedback: &mut dyn FeedbackSink) -> bool {
        let slot = match handle {
            Handle::Lower => &mut self.lower,
            Handle::Upper => &mut self.upper,
        };
        if *slot == target {
            return false;
        }
        *slot = target;
        feedback.notify(handle);
        true
    }

    fn raw_value_at(&self, position: f64, track_width: f64) -> f64 {
        let normalized = if track_width > 0.0 && position.is_finite() {
            (position / track_width).clamp(0.0, 1.0)
        } else {
            0.0
        };
        normalized * (self.max - self.min) + self.min
    }

    /// Nearest grid index for `value`, limited to `0..=top`.
    fn index_of(&self, value: f64) -> u64 {
        let index = ((value - self.min) / self.step).round();
        if index.is_nan() || index <= 0.0 {
            0
        } else {
            (index as u64).min(self.top)
        }
    }

    fn value_of(&self, index: u64) -> f64 {
        self.min + index as f64 * self.step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingFeedback {
        lower: usize,
        upper: usize,
    }

    impl FeedbackSink for CountingFeedback {
        fn notify(&mut self, handle: Handle) {
            match handle {
                Handle::Lower => self.lower += 1,
                Handle::Upper => self.upper += 1,
            }
        }
    }

    fn credit_range() -> RangeSelection {
        RangeSelection::new(0.0, 600.0, 1.0, 143.0, 314.0).expect("valid range")
    }

    fn grid_offset(range: &RangeSelection, value: f64) -> f64 {
        let (min, _) = range.bounds();
        let steps = (value - min) / range.step();
        (steps - steps.round()).abs()
    }

    fn assert_ordered(range: &RangeSelection) {
        let (min, max) = range.bounds();
        let gap = (range.upper() - range.lower()) / range.step();
        assert!(gap >= 1.0 - 1e-9, "handles closer than one step: {range:?}");
        assert!(range.lower() >= min && range.upper() <= max + 1e-9);
        assert!(grid_offset(range, range.lower()) < 1e-9);
        assert!(grid_offset(range, range.upper()) < 1e-9);
    }

    #[test]
    fn drag_lower_maps_pixels_linearly_and_rounds_to_step() {
        let mut range = credit_range();
        let mut feedback = CountingFeedback::default();
        assert!(range.drag_lower(50.0, 300.0, &mut feedback));
        assert_eq!(range.lower(), 100.0);
        // 50.2 / 300 * 600 = 100.4 -> 100, no change
        assert!(!range.drag_lower(50.2, 300.0, &mut feedback));
        assert_eq!(feedback.lower, 1);
    }

    #[test]
    fn drag_lower_stops_one_step_below_upper() {
        let mut range = credit_range();
        range.drag_lower(290.0, 300.0, &mut NoFeedback);
        assert_eq!(range.lower(), 313.0);
        assert_eq!(range.upper(), 314.0);
    }

    #[test]
    fn drag_upper_stops_one_step_above_lower() {
        let mut range = credit_range();
        range.drag_upper(0.0, 300.0, &mut NoFeedback);
        assert_eq!(range.upper(), 144.0);
    }

    #[test]
    fn out_of_track_positions_clamp_to_bounds() {
        let mut range = credit_range();
        range.drag_lower(-80.0, 300.0, &mut NoFeedback);
        range.drag_upper(900.0, 300.0, &mut NoFeedback);
        assert_eq!(range.lower(), 0.0);
        assert_eq!(range.upper(), 600.0);
    }

    #[test]
    fn repeated_identical_input_is_idempotent() {
        let mut range = credit_range();
        let mut feedback = CountingFeedback::default();
        range.drag_upper(200.0, 300.0, &mut feedback);
        let snapshot = range.clone();
        for _ in 0..5 {
            assert!(!range.drag_upper(200.0, 300.0, &mut feedback));
        }
        assert_eq!(range, snapshot);
        assert_eq!(feedback.upper, 1);
    }

    #[test]
    fn ordering_holds_for_arbitrary_drag_sequences() {
        let positions = [
            -50.0, 0.0, 12.5, 37.0, 49.9, 50.0, 50.1, 99.0, 100.0, 160.0, 3.0, 71.3,
        ];
        let configs = [
            (0.0, 100.0, 5.0, 20.0, 80.0),
            (1.9, 2.1, 0.1, 1.9, 2.1),
            (0.0, 10.0, 4.0, 0.0, 10.0),
            (0.5, 7.3, 0.7, 2.0, 6.0),
            (-3.0, 3.0, 2.5, -3.0, 3.0),
        ];
        for (min, max, step, lower, upper) in configs {
            let mut range = RangeSelection::new(min, max, step, lower, upper).expect("valid");
            assert_ordered(&range);
            for (i, lower_pos) in positions.iter().enumerate() {
                for upper_pos in positions.iter().skip(i) {
                    range.drag_lower(*lower_pos, 100.0, &mut NoFeedback);
                    assert_ordered(&range);
                    range.drag_upper(*upper_pos, 100.0, &mut NoFeedback);
                    assert_ordered(&range);
                    range.drag_upper(*lower_pos, 100.0, &mut NoFeedback);
                    assert_ordered(&range);
                }
            }
        }
    }

    #[test]
    fn upper_stops_at_last_grid_point_below_max() {
        let mut range = RangeSelection::new(0.0, 10.0, 4.0, 0.0, 4.0).expect("valid");
        range.drag_upper(100.0, 100.0, &mut NoFeedback);
        assert_eq!(range.upper(), 8.0);
        range.drag_lower(100.0, 100.0, &mut NoFeedback);
        assert_eq!(range.lower(), 4.0);
    }

    #[test]
    fn grid_is_anchored_at_min() {
        let mut range = RangeSelection::new(0.5, 10.5, 2.0, 0.5, 10.5).expect("valid");
        range.drag_lower(33.0, 100.0, &mut NoFeedback);
        // 0.5 + 0.33 * 10 = 3.8 -> nearest grid point 4.5
        assert_eq!(range.lower(), 4.5);
        assert_eq!(range.upper(), 10.5);
    }

    #[test]
    fn narrow_fractional_interval_keeps_two_grid_points_apart() {
        let mut range = RangeSelection::new(1.9, 2.1, 0.1, 2.0, 2.0).expect("valid");
        range.drag_lower(100.0, 100.0, &mut NoFeedback);
        range.drag_upper(0.0, 100.0, &mut NoFeedback);
        assert!(range.lower() < range.upper());
        assert_ordered(&range);
    }

    #[test]
    fn zero_width_track_reads_as_start_of_track() {
        let mut range = credit_range();
        range.drag_lower(10.0, 0.0, &mut NoFeedback);
        assert_eq!(range.lower(), 0.0);
    }

    #[test]
    fn new_snaps_and_orders_initial_values() {
        let range = RangeSelection::new(0.0, 100.0, 10.0, 57.0, 41.0).expect("valid");
        assert_eq!(range.upper(), 40.0);
        assert_eq!(range.lower(), 30.0);
        assert_ordered(&range);
    }

    #[test]
    fn new_rejects_invalid_parameters() {
        assert_eq!(
            RangeSelection::new(0.0, 10.0, 0.0, 0.0, 10.0),
            Err(RangeError::InvalidStep(0.0))
        );
        assert!(matches!(
            RangeSelection::new(0.0, 4.0, 5.0, 0.0, 4.0),
            Err(RangeError::IntervalTooNarrow { .. })
        ));
    }

    #[test]
    fn nearest_handle_picks_closer_thumb() {
        let range = credit_range();
        assert_eq!(range.nearest_handle(60.0, 300.0), Handle::Lower);
        assert_eq!(range.nearest_handle(200.0, 300.0), Handle::Upper);
    }

    #[test]
    fn normalized_positions_follow_values() {
        let range = RangeSelection::new(0.0, 600.0, 1.0, 150.0, 450.0).expect("valid");
        assert_eq!(range.normalized_lower(), 0.25);
        assert_eq!(range.normalized_upper(), 0.75);
    }
}
