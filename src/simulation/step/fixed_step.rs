use crate::core::error::PhysicsError;

/// Steps allowed to pile up in one `advance` before the backlog is dropped
pub const MAX_CATCH_UP_STEPS: u32 = 8;

/// Fixed-timestep accumulator for hosts that drive the engine from a frame
/// clock.
///
/// Elapsed frame time goes in, a whole number of `dt` steps comes out and the
/// remainder carries over to the next frame. After a stall long enough to owe
/// `max_steps` or more, the leftover time is discarded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedStep {
    dt: f32,
    accumulator: f32,
    max_steps: u32,
}

impl FixedStep {
    pub fn new(dt: f32) -> Result<Self, PhysicsError> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(PhysicsError::InvalidTimeStep(dt));
        }
        Ok(Self {
            dt,
            accumulator: 0.0,
            max_steps: MAX_CATCH_UP_STEPS,
        })
    }

    /// Cap on steps per `advance`; at least 1
    pub fn with_max_steps(mut self, max_steps: u32) -> Self {
        self.max_steps = max_steps.max(1);
        self
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Time owed but not yet stepped
    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }

    /// Steps owed for `elapsed` seconds of frame time. Negative or
    /// non-finite input counts as no time.
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        if elapsed.is_finite() && elapsed > 0.0 {
            self.accumulator += elapsed;
        }

        let mut steps = 0;
        while self.accumulator >= self.dt && steps < self.max_steps {
            self.accumulator -= self.dt;
            steps += 1;
        }
        if steps == self.max_steps {
            self.accumulator = 0.0;
        }
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn one_frame_of_dt_is_one_step() {
        let dt = 1.0 / 60.0;
        let mut clock = FixedStep::new(dt).unwrap();
        assert_eq!(clock.advance(dt), 1);
        assert_eq!(clock.accumulator(), 0.0);
    }

    #[test]
    fn short_frames_carry_over() {
        let mut clock = FixedStep::new(0.25).unwrap();

        assert_eq!(clock.advance(0.125), 0);
        assert_eq!(clock.accumulator(), 0.125);

        assert_eq!(clock.advance(0.1875), 1);
        assert_eq!(clock.accumulator(), 0.0625);

        assert_eq!(clock.advance(0.1875), 1);
        assert_eq!(clock.accumulator(), 0.0);

        let mut sixtieth = FixedStep::new(1.0 / 60.0).unwrap();
        assert_eq!(sixtieth.advance(0.01), 0);
        assert_relative_eq!(sixtieth.accumulator(), 0.01);
    }

    #[test]
    fn stall_is_capped_and_backlog_dropped() {
        let mut clock = FixedStep::new(0.25).unwrap();

        assert_eq!(clock.advance(10.0), MAX_CATCH_UP_STEPS);
        assert_eq!(clock.accumulator(), 0.0);
        // Nothing left over from the stall.
        assert_eq!(clock.advance(0.1), 0);

        let mut small = FixedStep::new(0.25).unwrap().with_max_steps(2);
        assert_eq!(small.advance(0.75), 2);
        assert_eq!(small.accumulator(), 0.0);
    }

    #[test]
    fn bad_input_is_rejected_or_ignored() {
        for dt in [0.0, -0.1, f32::NAN, f32::INFINITY] {
            assert!(matches!(FixedStep::new(dt), Err(PhysicsError::InvalidTimeStep(_))));
        }

        let mut clock = FixedStep::new(0.25).unwrap().with_max_steps(0);
        assert_eq!(clock.advance(-1.0), 0);
        assert_eq!(clock.advance(f32::NAN), 0);
        assert_eq!(clock.accumulator(), 0.0);
        // Cap is clamped to one step.
        assert_eq!(clock.advance(1.0), 1);
    }
}
