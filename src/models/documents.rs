use serde::{Deserialize, Serialize};
use validator::Validate;

use super::domain::{PhotoRef, Profile, ProfileDraft};

/// Profile document as stored in the backend collection.
///
/// Field names follow the collection schema (camelCase). The document id
/// doubles as the profile id on the client.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProfileDocument {
    #[serde(rename = "$id", default)]
    pub document_id: String,
    #[validate(length(min = 1))]
    pub name: String,
    pub age: u8,
    #[serde(default)]
    pub bio: String,
    pub photo: String,
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
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl From<ProfileDocument> for Profile {
    fn from(doc: ProfileDocument) -> Self {
        Profile {
            id: doc.document_id,
            name: doc.name,
            age: doc.age,
            bio: doc.bio,
            photo: PhotoRef::from(doc.photo),
            location: doc.location,
            gender: doc.gender,
            interests: doc.interests,
            job: doc.job,
            education: doc.education,
        }
    }
}

impl ProfileDocument {
    /// Build the document payload for a new profile submission.
    pub fn from_draft(document_id: String, draft: &ProfileDraft) -> Self {
        ProfileDocument {
            document_id,
            name: draft.name.clone(),
            age: draft.age,
            bio: draft.bio.clone(),
            photo: draft
                .photo
                .clone()
                .map(String::from)
                .unwrap_or_default(),
            location: draft.location.clone(),
            gender: draft.gender.clone(),
            interests: draft.interests.clone(),
            job: draft.job.clone(),
            education: draft.education.clone(),
            created_at: Some(chrono::Utc::now()),
        }
    }
}
