use crate::core::spring::{Spring, SpringParams};
use crate::models::Profile;

/// Horizontal drag distance per degree of card tilt.
pub const ROTATION_DIVISOR: f64 = 20.0;

/// Fraction of the viewport width a drag must cross to commit a swipe.
pub const COMMIT_THRESHOLD_FRACTION: f64 = 0.25;

/// Which way a committed card leaves the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    #[inline]
    fn signum(self) -> f64 {
        match self {
            SwipeDirection::Left => -1.0,
            SwipeDirection::Right => 1.0,
        }
    }
}

/// Outcome of a gesture release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Card flies off to the right; the profile is liked.
    CommitRight,
    /// Card flies off to the left; the profile is passed.
    CommitLeft,
    /// Drag stayed inside the threshold; the card snaps back.
    Cancel,
}

/// Live render transform for the bound card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    pub offset_x: f64,
    pub rotation_deg: f64,
    pub opacity: f64,
}

impl VisualState {
    const REST: VisualState = VisualState {
        offset_x: 0.0,
        rotation_deg: 0.0,
        opacity: 1.0,
    };
}

/// Emitted exactly once per bound profile when a commit animation finishes.
#[derive(Debug, Clone)]
pub struct SwipeOutcome {
    pub direction: SwipeDirection,
    pub profile: Profile,
}

type OutcomeCallback = Box<dyn FnMut(&Profile)>;

enum Phase {
    /// Bound and waiting for input, transform at rest.
    Resting,
    /// Finger down, displacement tracks the drag translation.
    Dragging { offset_x: f64 },
    /// Released inside the threshold, springing back to rest.
    SnappingBack { offset: Spring, rotation: Spring },
    /// Committed, card springing off-screen. Opacity stays at 1 until the
    /// position settles so the card never fades mid-flight.
    CommittingOffset {
        direction: SwipeDirection,
        offset: Spring,
        rotation_deg: f64,
    },
    /// Position settled off-screen, now fading out.
    CommittingOpacity {
        direction: SwipeDirection,
        opacity: Spring,
        rotation_deg: f64,
    },
    /// Terminal for this binding. The outcome callback has fired.
    Done { direction: SwipeDirection },
}

/// Interprets a horizontal drag on one profile card as like, pass, or cancel,
/// and drives the card's animated transform through the decision.
///
/// The controller owns no clock: the render loop reports gesture samples via
/// [`drag`](SwipeController::drag) and [`release`](SwipeController::release)
/// and advances animations with [`tick`](SwipeController::tick). Commit
/// ordering is enforced by the phase machine: the offset spring settles
/// off-screen first, then opacity fades, and only then does the outcome
/// callback fire, so a consumer can swap the card without a visible jump.
pub struct SwipeController {
    viewport_width: f64,
    threshold: f64,
    spring: SpringParams,
    profile: Option<Profile>,
    phase: Phase,
    on_like: Option<OutcomeCallback>,
    on_pass: Option<OutcomeCallback>,
}

impl SwipeController {
    /// Controller for a viewport of the given width. The commit threshold is
    /// a quarter of the viewport width.
    pub fn new(viewport_width: f64) -> Self {
        Self {
            viewport_width,
            threshold: viewport_width * COMMIT_THRESHOLD_FRACTION,
            spring: SpringParams::default(),
            profile: None,
            phase: Phase::Resting,
            on_like: None,
            on_pass: None,
        }
    }

    pub fn with_spring(mut self, params: SpringParams) -> Self {
        self.spring = params;
        self
    }

    /// Callback invoked with the bound profile after a right commit finishes.
    pub fn on_like(mut self, callback: impl FnMut(&Profile) + 'static) -> Self {
        self.on_like = Some(Box::new(callback));
        self
    }

    /// Callback invoked with the bound profile after a left commit finishes.
    pub fn on_pass(mut self, callback: impl FnMut(&Profile) + 'static) -> Self {
        self.on_pass = Some(Box::new(callback));
        self
    }

    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    /// True while no animation is in flight and no drag is active.
    pub fn is_settled(&self) -> bool {
        matches!(self.phase, Phase::Resting | Phase::Done { .. })
    }

    /// Attach a new profile and reset the transform to rest.
    ///
    /// Rebinding hard-cancels any in-flight animation: the previous card's
    /// commit stops where it is and its outcome callback never fires. Callers
    /// that need the callback must wait for [`tick`](SwipeController::tick)
    /// to report the outcome before binding the next profile.
    pub fn bind(&mut self, profile: Profile) {
        self.profile = Some(profile);
        self.phase = Phase::Resting;
    }

    /// Feed one movement sample: the cumulative horizontal translation since
    /// the gesture started.
    ///
    /// Ignored while a commit animation is playing; a drag that starts during
    /// a snap-back takes the card over directly.
    pub fn drag(&mut self, translation_x: f64) {
        if self.profile.is_none() {
            return;
        }
        match self.phase {
            Phase::Resting | Phase::Dragging { .. } | Phase::SnappingBack { .. } => {
                self.phase = Phase::Dragging {
                    offset_x: translation_x,
                };
            }
            Phase::CommittingOffset { .. }
            | Phase::CommittingOpacity { .. }
            | Phase::Done { .. } => {}
        }
    }

    /// Resolve the gesture from its final horizontal translation.
    ///
    /// Safe to call without any prior [`drag`](SwipeController::drag) sample:
    /// a tap-release resolves to [`Decision::Cancel`]. Displacement exactly on
    /// the threshold cancels; committing requires strictly crossing it.
    pub fn release(&mut self, translation_x: f64) -> Decision {
        if self.profile.is_none() {
            return Decision::Cancel;
        }
        match self.phase {
            Phase::Resting | Phase::Dragging { .. } | Phase::SnappingBack { .. } => {}
            // Only one release per gesture; anything after a commit is stale.
            Phase::CommittingOffset { .. }
            | Phase::CommittingOpacity { .. }
            | Phase::Done { .. } => return Decision::Cancel,
        }

        if translation_x > self.threshold {
            self.begin_commit(SwipeDirection::Right, translation_x)
        } else if translation_x < -self.threshold {
            self.begin_commit(SwipeDirection::Left, translation_x)
        } else {
            self.phase = Phase::SnappingBack {
                offset: Spring::new(translation_x, 0.0, self.spring),
                rotation: Spring::new(translation_x / ROTATION_DIVISOR, 0.0, self.spring),
            };
            Decision::Cancel
        }
    }

    fn begin_commit(&mut self, direction: SwipeDirection, translation_x: f64) -> Decision {
        self.phase = Phase::CommittingOffset {
            direction,
            offset: Spring::new(
                translation_x,
                direction.signum() * self.viewport_width,
                self.spring,
            ),
            rotation_deg: translation_x / ROTATION_DIVISOR,
        };
        match direction {
            SwipeDirection::Right => Decision::CommitRight,
            SwipeDirection::Left => Decision::CommitLeft,
        }
    }

    /// Advance animations by `dt` seconds.
    ///
    /// Returns the swipe outcome exactly once, on the tick where the fade
    /// completes; the matching callback fires on the same tick.
    pub fn tick(&mut self, dt: f64) -> Option<SwipeOutcome> {
        match &mut self.phase {
            Phase::SnappingBack { offset, rotation } => {
                offset.step(dt);
                rotation.step(dt);
                if offset.is_settled() && rotation.is_settled() {
                    self.phase = Phase::Resting;
                }
                None
            }
            Phase::CommittingOffset {
                direction,
                offset,
                rotation_deg,
            } => {
                offset.step(dt);
                if offset.is_settled() {
                    let direction = *direction;
                    let rotation_deg = *rotation_deg;
                    self.phase = Phase::CommittingOpacity {
                        direction,
                        opacity: Spring::new(1.0, 0.0, self.spring),
                        rotation_deg,
                    };
                }
                None
            }
            Phase::CommittingOpacity {
                direction, opacity, ..
            } => {
                opacity.step(dt);
                if opacity.is_settled() {
                    let direction = *direction;
                    self.phase = Phase::Done { direction };
                    return self.finish(direction);
                }
                None
            }
            Phase::Resting | Phase::Dragging { .. } | Phase::Done { .. } => None,
        }
    }

    fn finish(&mut self, direction: SwipeDirection) -> Option<SwipeOutcome> {
        let profile = self.profile.clone()?;
        let callback = match direction {
            SwipeDirection::Right => self.on_like.as_mut(),
            SwipeDirection::Left => self.on_pass.as_mut(),
        };
        if let Some(callback) = callback {
            callback(&profile);
        }
        Some(SwipeOutcome { direction, profile })
    }

    /// The current (offset, rotation, opacity) tuple for rendering.
    pub fn visual_state(&self) -> VisualState {
        match &self.phase {
            Phase::Resting => VisualState::REST,
            Phase::Dragging { offset_x } => VisualState {
                offset_x: *offset_x,
                rotation_deg: offset_x / ROTATION_DIVISOR,
                opacity: 1.0,
            },
            Phase::SnappingBack { offset, rotation } => VisualState {
                offset_x: offset.value(),
                rotation_deg: rotation.value(),
                opacity: 1.0,
            },
            Phase::CommittingOffset {
                offset,
                rotation_deg,
                ..
            } => VisualState {
                offset_x: offset.value(),
                rotation_deg: *rotation_deg,
                opacity: 1.0,
            },
            Phase::CommittingOpacity {
                direction,
                opacity,
                rotation_deg,
            } => VisualState {
                offset_x: direction.signum() * self.viewport_width,
                rotation_deg: *rotation_deg,
                opacity: opacity.value(),
            },
            Phase::Done { direction } => VisualState {
                offset_x: direction.signum() * self.viewport_width,
                rotation_deg: 0.0,
                opacity: 0.0,
            },
        }
    }
}
