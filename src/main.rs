use std::io::{BufRead, Write};

use lume_client::config::Settings;
use lume_client::core::gesture::{SwipeController, SwipeDirection};
use lume_client::core::onboarding::{OnboardingFlow, QuestionKind};
use lume_client::core::SwipeDeck;
use lume_client::models::{MatchEntry, Profile};
use lume_client::services::{self, BackendClient, LocalStore, MockProfiles};
use tracing::{error, info, warn};

/// Frame delta used to drive animations in the demo loop.
const FRAME_SECS: f64 = 1.0 / 60.0;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting Lume client...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    // Open the local state file
    let mut store = LocalStore::open(&settings.storage.state_path).unwrap_or_else(|e| {
        error!("Failed to open local state: {}", e);
        panic!("Local state error: {}", e);
    });

    // Initialize the backend client
    let backend = BackendClient::new(
        settings.backend.endpoint.clone(),
        settings.backend.api_key.clone(),
        settings.backend.project_id.clone(),
        settings.backend.database_id.clone(),
        settings.backend.profiles_collection.clone(),
        settings.backend.photo_bucket.clone(),
    )
    .unwrap_or_else(|e| {
        error!("Failed to initialize backend client: {}", e);
        panic!("Backend client error: {}", e);
    });

    info!("Backend client initialized");

    // Entry decision: the questionnaire runs until it has been completed once
    if !store.onboarding_complete() {
        info!("Onboarding not completed, starting questionnaire");
        if run_onboarding(&mut store, &backend).await.is_none() {
            return Ok(());
        }
    }

    // Fill the deck from the backend, falling back to generated profiles
    let profiles = match backend.list_profiles(&[], settings.deck.fetch_limit).await {
        Ok(profiles) if !profiles.is_empty() => {
            info!("Loaded {} profiles from backend", profiles.len());
            profiles
        }
        Ok(_) => {
            warn!("Backend returned no profiles, using generated ones");
            mock_deck(settings.deck.mock_profile_count)
        }
        Err(e) => {
            warn!("Backend unavailable ({}), using generated profiles", e);
            mock_deck(settings.deck.mock_profile_count)
        }
    };

    let mut deck = SwipeDeck::new(profiles);
    let mut controller = SwipeController::new(settings.deck.viewport_width)
        .with_spring(settings.spring.params())
        .on_like(|p: &Profile| info!("You liked {}", p.name))
        .on_pass(|p: &Profile| info!("You passed on {}", p.name));

    info!(
        "Deck ready: {} profiles, commit threshold {}",
        deck.pending_len(),
        controller.threshold()
    );

    run_deck(&mut controller, &mut deck, &mut store);

    Ok(())
}

fn mock_deck(count: usize) -> Vec<Profile> {
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1);
    MockProfiles::generate(count, seed)
}

/// Interactive questionnaire. Returns None when stdin closes early.
async fn run_onboarding(store: &mut LocalStore, backend: &BackendClient) -> Option<()> {
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    let mut flow = OnboardingFlow::new();

    loop {
        let question = *flow.current();
        let (done, total) = flow.progress();
        println!("\n[{}/{}] {} {}", done + 1, total, question.emoji, question.prompt);
        println!("        {}", question.purpose);

        match question.kind {
            QuestionKind::FreeText => {
                print!("> ");
                std::io::stdout().flush().ok();
                let line = lines.next()?.ok()?;
                if let Err(e) = flow.answer_text(&line) {
                    println!("  {}", e);
                    continue;
                }
            }
            QuestionKind::Select { max_selections } => {
                for (i, option) in question.options.iter().enumerate() {
                    println!("  {}. {}", i + 1, option);
                }
                println!("  (pick up to {}, numbers separated by spaces)", max_selections);
                print!("> ");
                std::io::stdout().flush().ok();
                let line = lines.next()?.ok()?;
                for token in line.split_whitespace() {
                    let Ok(number) = token.parse::<usize>() else {
                        println!("  Not a number: {}", token);
                        continue;
                    };
                    match number.checked_sub(1).and_then(|i| question.options.get(i)) {
                        Some(option) => {
                            if let Err(e) = flow.toggle_option(option) {
                                println!("  {}", e);
                            }
                        }
                        None => println!("  No option {}", number),
                    }
                }
            }
            QuestionKind::FreeList { max_entries } => {
                println!("  (up to {}, separated by commas)", max_entries);
                print!("> ");
                std::io::stdout().flush().ok();
                let line = lines.next()?.ok()?;
                for entry in line.split(',') {
                    if entry.trim().is_empty() {
                        continue;
                    }
                    if let Err(e) = flow.add_entry(entry) {
                        println!("  {}", e);
                    }
                }
            }
        }

        if flow.is_last() && flow.is_complete() {
            break;
        }
        if let Err(e) = flow.next() {
            println!("  {}", e);
        }
    }

    let answers = match flow.finish() {
        Ok(answers) => answers,
        Err(e) => {
            error!("Questionnaire incomplete: {}", e);
            return None;
        }
    };

    println!("\nWhere are you? (lat lon, blank to skip)");
    print!("> ");
    std::io::stdout().flush().ok();
    let location = lines
        .next()
        .and_then(|line| line.ok())
        .and_then(|line| parse_coordinates(&line))
        .and_then(|(lat, lon)| services::nearest_city_label(lat, lon))
        .map(str::to_string);
    if let Some(label) = &location {
        println!("Location set to {}", label);
    }

    let mut draft = answers.into_draft();
    draft.location = location;

    match backend.create_profile(&draft).await {
        Ok(profile) => info!("Profile created: {}", profile.id),
        Err(e) => warn!("Could not submit profile ({}), keeping it local", e),
    }

    if let Err(e) = store.set_onboarding_complete(true) {
        error!("Failed to persist onboarding flag: {}", e);
    }

    Some(())
}

fn parse_coordinates(line: &str) -> Option<(f64, f64)> {
    let mut parts = line.split_whitespace();
    let lat = parts.next()?.parse().ok()?;
    let lon = parts.next()?.parse().ok()?;
    Some((lat, lon))
}

/// Command loop over the swipe deck.
fn run_deck(controller: &mut SwipeController, deck: &mut SwipeDeck, store: &mut LocalStore) {
    println!("\nCommands: show | like | pass | drag <dx> | rewind | matches | quit");
    print_current(deck);

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let mut parts = line.split_whitespace();
        match parts.next() {
            Some("show") => print_current(deck),
            Some("like") => {
                let width = controller.viewport_width();
                run_swipe(controller, deck, store, width * 0.5);
            }
            Some("pass") => {
                let width = controller.viewport_width();
                run_swipe(controller, deck, store, -width * 0.5);
            }
            Some("drag") => match parts.next().and_then(|v| v.parse::<f64>().ok()) {
                Some(dx) => run_swipe(controller, deck, store, dx),
                None => println!("Usage: drag <dx>"),
            },
            Some("rewind") => match deck.rewind() {
                Some(profile) => {
                    println!("Rewound to {}", profile.name);
                    print_current(deck);
                }
                None => println!("Nothing to rewind"),
            },
            Some("matches") => {
                if store.matches().is_empty() {
                    println!("No matches yet");
                }
                for entry in store.matches() {
                    println!("  {} ({}) matched {}", entry.name, entry.age, entry.matched_at);
                }
            }
            Some("quit") => break,
            Some(other) => println!("Unknown command: {}", other),
            None => {}
        }
    }
}

/// Simulate one full gesture: ramp the drag to `translation_x`, release, and
/// drive the animation until it settles.
fn run_swipe(
    controller: &mut SwipeController,
    deck: &mut SwipeDeck,
    store: &mut LocalStore,
    translation_x: f64,
) {
    let Some(profile) = deck.current().cloned() else {
        println!("No more profiles");
        return;
    };

    controller.bind(profile);
    let samples = 8;
    for i in 1..=samples {
        controller.drag(translation_x * i as f64 / samples as f64);
    }
    let decision = controller.release(translation_x);

    let mut outcome = None;
    while !controller.is_settled() {
        if let Some(o) = controller.tick(FRAME_SECS) {
            outcome = Some(o);
            break;
        }
    }

    match outcome {
        Some(o) => {
            match o.direction {
                SwipeDirection::Right => {
                    deck.like(&o.profile.id);
                    maybe_record_match(store, &o.profile);
                }
                SwipeDirection::Left => {
                    deck.pass(&o.profile.id);
                }
            }
            print_current(deck);
        }
        None => println!("Card snapped back ({:?})", decision),
    }
}

/// The demo stands in for the matching service: every third liked profile
/// likes the user back.
fn maybe_record_match(store: &mut LocalStore, profile: &Profile) {
    let mutual = profile
        .id
        .parse::<u64>()
        .map(|n| n % 3 == 0)
        .unwrap_or(false);
    if !mutual {
        return;
    }

    println!("It's a match with {}!", profile.name);
    let entry = MatchEntry {
        id: profile.id.clone(),
        name: profile.name.clone(),
        age: profile.age,
        photo_url: profile.photo.as_str().to_string(),
        last_message: None,
        matched_at: chrono::Utc::now(),
    };
    if let Err(e) = store.add_match(entry) {
        warn!("Failed to save match: {}", e);
    }
}

fn print_current(deck: &SwipeDeck) {
    match deck.current() {
        Some(profile) => {
            println!(
                "\n{} ({}) - {}",
                profile.name,
                profile.age,
                profile.location.as_deref().unwrap_or("somewhere")
            );
            if !profile.interests.is_empty() {
                println!("  {}", profile.interests.join(", "));
            }
            println!("  {}", profile.bio);
            println!(
                "  [{} pending, {} decided]",
                deck.pending_len(),
                deck.history().len()
            );
        }
        None => println!("\nNo more profiles"),
    }
}
