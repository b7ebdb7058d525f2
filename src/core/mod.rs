// Core client logic exports
pub mod deck;
pub mod gesture;
pub mod onboarding;
pub mod spring;

pub use deck::SwipeDeck;
pub use gesture::{
    Decision, SwipeController, SwipeDirection, SwipeOutcome, VisualState,
    COMMIT_THRESHOLD_FRACTION, ROTATION_DIVISOR,
};
pub use onboarding::{OnboardingAnswers, OnboardingError, OnboardingFlow, Question, QuestionKind};
pub use spring::{Spring, SpringParams};
