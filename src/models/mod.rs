// Model exports
pub mod documents;
pub mod domain;

pub use documents::ProfileDocument;
pub use domain::{DecidedProfile, MatchEntry, PhotoRef, Profile, ProfileDraft, SwipeAction};
