// Integration tests for the Lume client

use lume_client::config::Settings;
use lume_client::core::gesture::{Decision, SwipeController, SwipeDirection};
use lume_client::core::onboarding::OnboardingFlow;
use lume_client::core::SwipeDeck;
use lume_client::models::{PhotoRef, Profile, ProfileDocument, ProfileDraft};
use lume_client::services::{BackendClient, LocalStore, MockProfiles};
use validator::Validate;

const FRAME: f64 = 1.0 / 60.0;

fn swipe(controller: &mut SwipeController, deck: &mut SwipeDeck, translation_x: f64) -> Decision {
    let profile = deck.current().cloned().expect("deck is empty");
    controller.bind(profile);
    controller.drag(translation_x);
    let decision = controller.release(translation_x);

    for _ in 0..10_000 {
        if let Some(outcome) = controller.tick(FRAME) {
            match outcome.direction {
                SwipeDirection::Right => deck.like(&outcome.profile.id),
                SwipeDirection::Left => deck.pass(&outcome.profile.id),
            };
            return decision;
        }
        if controller.is_settled() {
            return decision;
        }
    }
    panic!("animation never settled");
}

#[test]
fn test_swipe_session_end_to_end() {
    let mut deck = SwipeDeck::new(MockProfiles::generate(10, 7));
    let mut controller = SwipeController::new(400.0);

    assert_eq!(swipe(&mut controller, &mut deck, 150.0), Decision::CommitRight);
    assert_eq!(swipe(&mut controller, &mut deck, -150.0), Decision::CommitLeft);
    assert_eq!(swipe(&mut controller, &mut deck, 60.0), Decision::Cancel);

    // Two commits advanced the deck, the cancel left it alone.
    assert_eq!(deck.pending_len(), 8);
    assert_eq!(deck.history().len(), 2);
    assert_eq!(deck.current().unwrap().id, "3");
    assert_eq!(deck.liked().count(), 1);

    // Rewinding twice restores both decided profiles in reverse order.
    assert_eq!(deck.rewind().unwrap().id, "2");
    assert_eq!(deck.rewind().unwrap().id, "1");
    assert_eq!(deck.pending_len(), 10);
    assert!(deck.history().is_empty());
}

#[test]
fn test_callbacks_fire_after_card_clears_viewport() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let events: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));

    let mut deck = SwipeDeck::new(MockProfiles::generate(3, 1));
    let profile = deck.current().cloned().unwrap();

    let sink = Rc::clone(&events);
    let mut controller = SwipeController::new(400.0)
        .on_like(move |p: &Profile| sink.borrow_mut().push(p.id.clone()));

    controller.bind(profile);
    controller.drag(200.0);
    controller.release(200.0);

    let mut frames = 0;
    while events.borrow().is_empty() {
        controller.tick(FRAME);
        frames += 1;
        assert!(frames < 10_000, "callback never fired");
    }

    // By the time the callback has fired the card is gone.
    let visual = controller.visual_state();
    assert_eq!(visual.offset_x, 400.0);
    assert_eq!(visual.opacity, 0.0);
    assert_eq!(events.borrow().len(), 1);
}

#[test]
fn test_rebinding_supersedes_running_commit() {
    let mut deck = SwipeDeck::new(MockProfiles::generate(2, 5));
    let first = deck.current().cloned().unwrap();

    let mut controller = SwipeController::new(400.0);
    controller.bind(first);
    controller.release(300.0);
    controller.tick(FRAME);

    // Next card arrives before the commit animation finished.
    deck.like("1");
    let second = deck.current().cloned().unwrap();
    controller.bind(second.clone());

    assert!(controller.is_settled());
    assert_eq!(controller.visual_state().offset_x, 0.0);
    assert_eq!(controller.profile().unwrap().id, second.id);
    for _ in 0..10_000 {
        assert!(controller.tick(FRAME).is_none());
    }
}

#[test]
fn test_onboarding_to_submitted_document() {
    let mut flow = OnboardingFlow::new();
    flow.answer_text("Sarah").unwrap();
    flow.next().unwrap();
    flow.answer_text("28").unwrap();
    flow.next().unwrap();
    flow.toggle_option("Long-term relationship").unwrap();
    flow.next().unwrap();
    flow.toggle_option("Kindness").unwrap();
    flow.next().unwrap();
    flow.toggle_option("Outdoors/adventure").unwrap();
    flow.next().unwrap();
    flow.toggle_option("Balanced lifestyle").unwrap();
    flow.next().unwrap();
    flow.toggle_option("Prefer not to say").unwrap();
    flow.next().unwrap();
    flow.toggle_option("Maybe").unwrap();
    flow.next().unwrap();
    flow.toggle_option("Yes").unwrap();
    flow.next().unwrap();
    flow.add_entry("Honesty").unwrap();

    let mut draft = flow.finish().unwrap().into_draft();
    draft.bio = "Loves hiking, coffee, and good books.".to_string();
    draft.location = Some("Denver, CO".to_string());
    draft.photo = Some(PhotoRef::Remote(
        "https://cdn.lume.app/photos/sarah.jpg".to_string(),
    ));
    assert!(draft.validate().is_ok());

    let document = ProfileDocument::from_draft("doc_1".to_string(), &draft);
    let profile = Profile::from(document);
    assert_eq!(profile.id, "doc_1");
    assert_eq!(profile.name, "Sarah");
    assert_eq!(profile.age, 28);
    assert!(profile.photo.is_remote());
}

#[test]
fn test_local_store_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    let mut store = LocalStore::open(&path).unwrap();
    assert!(!store.onboarding_complete());
    store.set_onboarding_complete(true).unwrap();
    drop(store);

    let store = LocalStore::open(&path).unwrap();
    assert!(store.onboarding_complete());
}

#[test]
fn test_settings_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[backend]
endpoint = "https://appwrite.test/v1"
api_key = "key"
project_id = "proj"
database_id = "db"
profiles_collection = "dating-profiles"
photo_bucket = "profile-photos"

[deck]
viewport_width = 800.0
"#,
    )
    .unwrap();

    let settings = Settings::load_from(&path).unwrap();
    assert_eq!(settings.backend.project_id, "proj");
    assert_eq!(settings.deck.viewport_width, 800.0);
    // Unspecified sections fall back to defaults.
    assert_eq!(settings.deck.fetch_limit, 50);
    assert_eq!(settings.spring.stiffness, 100.0);
    assert_eq!(settings.logging.level, "info");
}

fn test_client(server_url: &str) -> BackendClient {
    BackendClient::new(
        server_url.to_string(),
        "test_key".to_string(),
        "test_project".to_string(),
        "test_db".to_string(),
        "dating-profiles".to_string(),
        "profile-photos".to_string(),
    )
    .unwrap()
}

#[tokio::test]
async fn test_list_profiles_parses_documents() {
    let mut server = mockito::Server::new_async().await;

    let body = serde_json::json!({
        "total": 2,
        "documents": [
            {
                "$id": "p1",
                "name": "Jessica",
                "age": 27,
                "bio": "Music, art, and yoga enthusiast.",
                "photo": "https://cdn.lume.app/photos/p1.jpg",
                "location": "Austin, TX",
                "interests": ["Music", "Yoga"],
            },
            {
                "$id": "p2",
                "name": "Daniel",
                "age": 31,
                "bio": "Fitness junkie and movie buff.",
                "photo": "assets/images/pexels-danxavier-1121796.jpg",
            },
        ],
    });

    let mock = server
        .mock(
            "GET",
            mockito::Matcher::Regex(
                r"^/databases/test_db/collections/dating-profiles/documents.*$".to_string(),
            ),
        )
        .match_header("X-Appwrite-Project", "test_project")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await;

    let client = test_client(&server.url());
    let profiles = client.list_profiles(&[], 20).await.unwrap();

    mock.assert_async().await;
    assert_eq!(profiles.len(), 2);
    assert_eq!(profiles[0].id, "p1");
    assert!(profiles[0].photo.is_remote());
    assert!(!profiles[1].photo.is_remote());
}

#[tokio::test]
async fn test_list_profiles_skips_excluded_ids() {
    let mut server = mockito::Server::new_async().await;

    let body = serde_json::json!({
        "total": 1,
        "documents": [{
            "$id": "p1",
            "name": "Jessica",
            "age": 27,
            "bio": "",
            "photo": "assets/images/icon.png",
        }],
    });

    let _mock = server
        .mock(
            "GET",
            mockito::Matcher::Regex(r"^/databases/.*/documents.*$".to_string()),
        )
        .with_status(200)
        .with_body(body.to_string())
        .create_async()
        .await;

    let client = test_client(&server.url());
    let excluded = vec!["p1".to_string()];
    let profiles = client.list_profiles(&excluded, 20).await.unwrap();
    assert!(profiles.is_empty());
}

#[tokio::test]
async fn test_get_profile_not_found() {
    let mut server = mockito::Server::new_async().await;

    let _mock = server
        .mock(
            "GET",
            "/databases/test_db/collections/dating-profiles/documents/missing",
        )
        .with_status(404)
        .with_body("{}")
        .create_async()
        .await;

    let client = test_client(&server.url());
    let err = client.get_profile("missing").await.unwrap_err();
    assert!(matches!(
        err,
        lume_client::services::BackendError::NotFound(_)
    ));
}

#[tokio::test]
async fn test_list_profiles_unauthorized() {
    let mut server = mockito::Server::new_async().await;

    let _mock = server
        .mock(
            "GET",
            mockito::Matcher::Regex(r"^/databases/.*/documents.*$".to_string()),
        )
        .with_status(401)
        .with_body("{}")
        .create_async()
        .await;

    let client = test_client(&server.url());
    let err = client.list_profiles(&[], 20).await.unwrap_err();
    assert!(matches!(
        err,
        lume_client::services::BackendError::Unauthorized
    ));
}

#[tokio::test]
async fn test_create_profile_posts_draft() {
    let mut server = mockito::Server::new_async().await;

    let response = serde_json::json!({
        "$id": "created_1",
        "name": "Sarah",
        "age": 28,
        "bio": "",
        "photo": "",
        "location": "Denver, CO",
    });

    let mock = server
        .mock(
            "POST",
            "/databases/test_db/collections/dating-profiles/documents",
        )
        .match_body(mockito::Matcher::PartialJson(serde_json::json!({
            "data": { "name": "Sarah", "age": 28, "location": "Denver, CO" }
        })))
        .with_status(201)
        .with_body(response.to_string())
        .create_async()
        .await;

    let client = test_client(&server.url());
    let draft = ProfileDraft {
        name: "Sarah".to_string(),
        age: 28,
        location: Some("Denver, CO".to_string()),
        ..ProfileDraft::default()
    };
    let profile = client.create_profile(&draft).await.unwrap();

    mock.assert_async().await;
    assert_eq!(profile.id, "created_1");
    assert_eq!(profile.name, "Sarah");
}

#[tokio::test]
async fn test_upload_photo_returns_view_url() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/storage/buckets/profile-photos/files")
        .with_status(201)
        .with_body(serde_json::json!({ "$id": "file_9" }).to_string())
        .create_async()
        .await;

    let client = test_client(&server.url());
    let url = client
        .upload_photo("me.jpg", vec![0xFF, 0xD8, 0xFF])
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(url.contains("/storage/buckets/profile-photos/files/file_9/view"));
    assert!(url.ends_with("project=test_project"));
}
