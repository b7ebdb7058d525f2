use serde::{Deserialize, Serialize};
use validator::Validate;

/// Where a profile photo lives: a bundled asset path or a remote URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PhotoRef {
    /// Path of an image shipped with the client bundle.
    Asset(String),
    /// Absolute URL of an uploaded photo.
    Remote(String),
}

impl PhotoRef {
    pub fn as_str(&self) -> &str {
        match self {
            PhotoRef::Asset(path) => path,
            PhotoRef::Remote(url) => url,
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, PhotoRef::Remote(_))
    }
}

impl From<String> for PhotoRef {
    fn from(value: String) -> Self {
        if value.starts_with("http://") || value.starts_with("https://") {
            PhotoRef::Remote(value)
        } else {
            PhotoRef::Asset(value)
        }
    }
}

impl From<PhotoRef> for String {
    fn from(value: PhotoRef) -> Self {
        match value {
            PhotoRef::Asset(path) => path,
            PhotoRef::Remote(url) => url,
        }
    }
}

/// One candidate profile shown on the swipe deck.
///
/// Immutable for the duration of one swipe decision. The id is opaque and
/// unique within a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub age: u8,
    pub bio: String,
    pub photo: PhotoRef,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub job: Option<String>,
    #[serde(default)]
    pub education: Option<String>,
}

/// What the user did with a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeAction {
    Liked,
    Passed,
}

/// A profile the user already swiped on, retained for rewind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecidedProfile {
    pub profile: Profile,
    pub action: SwipeAction,
    #[serde(rename = "decidedAt")]
    pub decided_at: chrono::DateTime<chrono::Utc>,
}

/// Entry on the matches screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchEntry {
    pub id: String,
    pub name: String,
    pub age: u8,
    #[serde(rename = "photoUrl")]
    pub photo_url: String,
    #[serde(rename = "lastMessage", default)]
    pub last_message: Option<String>,
    #[serde(rename = "matchedAt")]
    pub matched_at: chrono::DateTime<chrono::Utc>,
}

/// Profile data collected from the editor before it is sent to the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ProfileDraft {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 18, max = 120))]
    pub age: u8,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub photo: Option<PhotoRef>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub job: Option<String>,
    #[serde(default)]
    pub education: Option<String>,
}
