//! Lume Client - client-side core for the Lume dating app
//!
//! This library implements the swipe deck used by the Lume client: gesture
//! interpretation and spring-driven card animation, the pending/history
//! profile queue with rewind, the onboarding questionnaire, and the glue to
//! the hosted backend and local state file.

pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    Decision, SwipeController, SwipeDeck, SwipeDirection, SwipeOutcome, VisualState,
};
pub use crate::models::{MatchEntry, PhotoRef, Profile, ProfileDraft, SwipeAction};
