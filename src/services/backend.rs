use reqwest::multipart;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

use crate::models::{Profile, ProfileDocument, ProfileDraft};

/// Errors that can occur when talking to the hosted backend
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: invalid API key or project")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Appwrite API client
///
/// The client's only networking: profile records go up, profile records come
/// down, photos go into a storage bucket. Handles:
/// - Listing candidate profiles for the deck
/// - Fetching a single profile
/// - Creating the user's own profile document
/// - Uploading a profile photo and resolving its view URL
pub struct BackendClient {
    base_url: String,
    api_key: String,
    project_id: String,
    database_id: String,
    profiles_collection: String,
    photo_bucket: String,
    client: Client,
}

impl BackendClient {
    /// Create a new backend client
    pub fn new(
        base_url: String,
        api_key: String,
        project_id: String,
        database_id: String,
        profiles_collection: String,
        photo_bucket: String,
    ) -> Result<Self, BackendError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            base_url,
            api_key,
            project_id,
            database_id,
            profiles_collection,
            photo_bucket,
            client,
        })
    }

    fn documents_url(&self) -> String {
        format!(
            "{}/databases/{}/collections/{}/documents",
            self.base_url.trim_end_matches('/'),
            self.database_id,
            self.profiles_collection
        )
    }

    fn check_status(response: &reqwest::Response, what: &str) -> Result<(), BackendError> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(BackendError::Unauthorized);
        }
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(BackendError::NotFound(what.to_string()));
        }
        Err(BackendError::ApiError(format!(
            "Failed to {}: {}",
            what, status
        )))
    }

    /// Fetch candidate profiles for the deck, skipping already-decided ids.
    pub async fn list_profiles(
        &self,
        exclude_ids: &[String],
        limit: usize,
    ) -> Result<Vec<Profile>, BackendError> {
        let mut queries = vec![format!("limit({})", limit)];
        for id in exclude_ids {
            queries.push(format!("notEqual(\"$id\", \"{}\")", id));
        }

        let queries_json = serde_json::to_string(&queries)
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))?;
        let encoded_queries = urlencoding::encode(&queries_json);
        let url = format!("{}?query={}", self.documents_url(), encoded_queries);

        tracing::debug!("Listing profiles from: {}", url);

        let response = self
            .client
            .get(&url)
            .header("X-Appwrite-Key", &self.api_key)
            .header("X-Appwrite-Project", &self.project_id)
            .send()
            .await?;

        Self::check_status(&response, "list profiles")?;

        let json: Value = response.json().await?;

        let total = json.get("total").and_then(|t| t.as_u64()).unwrap_or(0);

        let documents = json
            .get("documents")
            .and_then(|d| d.as_array())
            .ok_or_else(|| BackendError::InvalidResponse("Missing documents array".into()))?;

        let profiles: Vec<Profile> = documents
            .iter()
            .filter_map(|doc| {
                serde_json::from_value::<ProfileDocument>(doc.clone())
                    .map(Profile::from)
                    .ok()
            })
            .filter(|p| !exclude_ids.contains(&p.id))
            .collect();

        tracing::debug!("Fetched {} profiles (total: {})", profiles.len(), total);

        Ok(profiles)
    }

    /// Fetch a single profile document by id.
    pub async fn get_profile(&self, profile_id: &str) -> Result<Profile, BackendError> {
        let url = format!("{}/{}", self.documents_url(), profile_id);

        tracing::debug!("Fetching profile {}", profile_id);

        let response = self
            .client
            .get(&url)
            .header("X-Appwrite-Key", &self.api_key)
            .header("X-Appwrite-Project", &self.project_id)
            .send()
            .await?;

        Self::check_status(&response, &format!("profile {}", profile_id))?;

        let json: Value = response.json().await?;
        serde_json::from_value::<ProfileDocument>(json)
            .map(Profile::from)
            .map_err(|e| BackendError::InvalidResponse(format!("Failed to parse profile: {}", e)))
    }

    /// Create the user's profile document from an editor draft.
    pub async fn create_profile(&self, draft: &ProfileDraft) -> Result<Profile, BackendError> {
        let document_id = uuid::Uuid::new_v4().to_string();
        let document = ProfileDocument::from_draft(document_id.clone(), draft);

        let payload = serde_json::json!({
            "documentId": document_id,
            "data": document,
        });

        let response = self
            .client
            .post(&self.documents_url())
            .header("X-Appwrite-Key", &self.api_key)
            .header("X-Appwrite-Project", &self.project_id)
            .json(&payload)
            .send()
            .await?;

        Self::check_status(&response, "create profile")?;

        let json: Value = response.json().await?;
        let data = json.get("data").unwrap_or(&json);

        let profile = serde_json::from_value::<ProfileDocument>(data.clone())
            .map(Profile::from)
            .map_err(|e| BackendError::InvalidResponse(format!("Failed to parse profile: {}", e)))?;

        tracing::debug!("Created profile {}", profile.id);

        Ok(profile)
    }

    /// Upload a profile photo to the storage bucket and return its view URL.
    pub async fn upload_photo(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<String, BackendError> {
        let url = format!(
            "{}/storage/buckets/{}/files",
            self.base_url.trim_end_matches('/'),
            self.photo_bucket
        );

        let file_id = uuid::Uuid::new_v4().to_string();
        let part = multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = multipart::Form::new()
            .text("fileId", file_id)
            .part("file", part);

        let response = self
            .client
            .post(&url)
            .header("X-Appwrite-Key", &self.api_key)
            .header("X-Appwrite-Project", &self.project_id)
            .multipart(form)
            .send()
            .await?;

        Self::check_status(&response, "upload photo")?;

        let json: Value = response.json().await?;
        let stored_id = json
            .get("$id")
            .and_then(|id| id.as_str())
            .ok_or_else(|| BackendError::InvalidResponse("Missing file id".into()))?;

        let view_url = format!(
            "{}/storage/buckets/{}/files/{}/view?project={}",
            self.base_url.trim_end_matches('/'),
            self.photo_bucket,
            stored_id,
            self.project_id
        );

        tracing::debug!("Uploaded photo {} as {}", file_name, stored_id);

        Ok(view_url)
    }
}
