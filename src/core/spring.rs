/// Physical spring parameters for card animations.
///
/// Springs settle based on these parameters rather than a fixed duration.
/// A spring is considered at rest once both its displacement from the target
/// and its speed drop below the rest thresholds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    pub rest_displacement: f64,
    pub rest_speed: f64,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            stiffness: default_stiffness(),
            damping: default_damping(),
            mass: default_mass(),
            rest_displacement: default_rest_displacement(),
            rest_speed: default_rest_speed(),
        }
    }
}

pub(crate) fn default_stiffness() -> f64 { 100.0 }
pub(crate) fn default_damping() -> f64 { 10.0 }
pub(crate) fn default_mass() -> f64 { 1.0 }
pub(crate) fn default_rest_displacement() -> f64 { 0.01 }
pub(crate) fn default_rest_speed() -> f64 { 2.0 }

/// Largest integration step in seconds. Frame deltas above this are split
/// into substeps so the integration stays stable on long frames.
const MAX_STEP_SECS: f64 = 1.0 / 120.0;

/// A single animated value driven toward a target by a damped spring.
///
/// Stepped explicitly with a caller-supplied delta time, which keeps the
/// animation deterministic and testable with a fake clock.
#[derive(Debug, Clone)]
pub struct Spring {
    value: f64,
    velocity: f64,
    target: f64,
    params: SpringParams,
    settled: bool,
}

impl Spring {
    /// Create a spring at `value` moving toward `target` from standstill.
    pub fn new(value: f64, target: f64, params: SpringParams) -> Self {
        let mut spring = Self {
            value,
            velocity: 0.0,
            target,
            params,
            settled: false,
        };
        spring.check_rest();
        spring
    }

    /// A spring already at rest on `value`.
    pub fn at_rest(value: f64, params: SpringParams) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
            params,
            settled: true,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Redirect the spring toward a new target, keeping current momentum.
    pub fn retarget(&mut self, target: f64) {
        self.target = target;
        self.settled = false;
        self.check_rest();
    }

    /// Advance the simulation by `dt` seconds.
    pub fn step(&mut self, dt: f64) {
        if self.settled || dt <= 0.0 {
            return;
        }

        let substeps = (dt / MAX_STEP_SECS).ceil().max(1.0) as usize;
        let h = dt / substeps as f64;

        // Semi-implicit Euler: update velocity first, then position.
        for _ in 0..substeps {
            let displacement = self.value - self.target;
            let acceleration = (-self.params.stiffness * displacement
                - self.params.damping * self.velocity)
                / self.params.mass;
            self.velocity += acceleration * h;
            self.value += self.velocity * h;
        }

        self.check_rest();
    }

    fn check_rest(&mut self) {
        if (self.value - self.target).abs() < self.params.rest_displacement
            && self.velocity.abs() < self.params.rest_speed
        {
            // Snap to the target so rendering lands exactly on the terminal value.
            self.value = self.target;
            self.velocity = 0.0;
            self.settled = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    fn settle(spring: &mut Spring) -> usize {
        let mut frames = 0;
        while !spring.is_settled() {
            spring.step(FRAME);
            frames += 1;
            assert!(frames < 10_000, "spring failed to settle");
        }
        frames
    }

    #[test]
    fn test_settles_on_target() {
        let mut spring = Spring::new(150.0, 400.0, SpringParams::default());
        settle(&mut spring);
        assert_eq!(spring.value(), 400.0);
    }

    #[test]
    fn test_new_at_target_is_settled_immediately() {
        let spring = Spring::new(0.0, 0.0, SpringParams::default());
        assert!(spring.is_settled());
        assert_eq!(spring.value(), 0.0);
    }

    #[test]
    fn test_moves_toward_target_monotonically_in_distance() {
        let mut spring = Spring::new(100.0, 0.0, SpringParams::default());
        let start_distance = (spring.value() - spring.target()).abs();
        for _ in 0..5 {
            spring.step(FRAME);
        }
        assert!((spring.value() - spring.target()).abs() < start_distance);
    }

    #[test]
    fn test_large_frame_delta_stays_stable() {
        let mut spring = Spring::new(0.0, 400.0, SpringParams::default());
        // A half-second hitch should not make the integration blow up.
        spring.step(0.5);
        assert!(spring.value().is_finite());
        assert!(spring.value().abs() < 1_000.0);
        settle(&mut spring);
        assert_eq!(spring.value(), 400.0);
    }

    #[test]
    fn test_retarget_reuses_momentum() {
        let mut spring = Spring::new(0.0, 400.0, SpringParams::default());
        for _ in 0..10 {
            spring.step(FRAME);
        }
        spring.retarget(0.0);
        assert!(!spring.is_settled());
        settle(&mut spring);
        assert_eq!(spring.value(), 0.0);
    }

    #[test]
    fn test_at_rest_does_not_move() {
        let mut spring = Spring::at_rest(42.0, SpringParams::default());
        spring.step(1.0);
        assert_eq!(spring.value(), 42.0);
        assert!(spring.is_settled());
    }
}
