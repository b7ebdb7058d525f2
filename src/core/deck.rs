use std::collections::VecDeque;

use crate::models::{DecidedProfile, Profile, SwipeAction};

/// Pending profiles plus a last-in-first-out history of decided ones.
///
/// A profile lives in exactly one of the two at any time: deciding moves it
/// from the front of pending into history, rewinding moves the most recent
/// history entry back to the front of pending.
#[derive(Debug, Default)]
pub struct SwipeDeck {
    pending: VecDeque<Profile>,
    history: Vec<DecidedProfile>,
}

impl SwipeDeck {
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self {
            pending: profiles.into(),
            history: Vec::new(),
        }
    }

    /// The profile to show next, if any remain.
    pub fn current(&self) -> Option<&Profile> {
        self.pending.front()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn history(&self) -> &[DecidedProfile] {
        &self.history
    }

    pub fn is_exhausted(&self) -> bool {
        self.pending.is_empty()
    }

    /// Record a like for the identified profile.
    pub fn like(&mut self, profile_id: &str) -> bool {
        self.resolve(profile_id, SwipeAction::Liked)
    }

    /// Record a pass for the identified profile.
    pub fn pass(&mut self, profile_id: &str) -> bool {
        self.resolve(profile_id, SwipeAction::Passed)
    }

    /// Move the identified profile from pending into history.
    ///
    /// Returns false when no pending profile has that id, which happens if an
    /// outcome arrives for a card that was already removed.
    pub fn resolve(&mut self, profile_id: &str, action: SwipeAction) -> bool {
        let Some(position) = self.pending.iter().position(|p| p.id == profile_id) else {
            tracing::debug!("Ignoring outcome for unknown profile {}", profile_id);
            return false;
        };
        if let Some(profile) = self.pending.remove(position) {
            self.history.push(DecidedProfile {
                profile,
                action,
                decided_at: chrono::Utc::now(),
            });
            return true;
        }
        false
    }

    /// Undo the most recent decision, reinserting that profile at the front
    /// of pending. Returns the restored profile.
    pub fn rewind(&mut self) -> Option<&Profile> {
        let entry = self.history.pop()?;
        self.pending.push_front(entry.profile);
        self.pending.front()
    }

    /// Profiles the user liked, oldest first. Feeds the matches screen.
    pub fn liked(&self) -> impl Iterator<Item = &Profile> {
        self.history
            .iter()
            .filter(|entry| entry.action == SwipeAction::Liked)
            .map(|entry| &entry.profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PhotoRef;
    use std::collections::HashSet;

    fn deck_of(count: usize) -> SwipeDeck {
        let profiles = (1..=count)
            .map(|i| Profile {
                id: i.to_string(),
                name: format!("User {}", i),
                age: 25,
                bio: String::new(),
                photo: PhotoRef::Asset("assets/images/icon.png".to_string()),
                location: None,
                gender: None,
                interests: vec![],
                job: None,
                education: None,
            })
            .collect();
        SwipeDeck::new(profiles)
    }

    fn assert_partition(deck: &SwipeDeck, total: usize) {
        let mut ids: HashSet<String> = deck.pending.iter().map(|p| p.id.clone()).collect();
        for entry in deck.history() {
            assert!(
                ids.insert(entry.profile.id.clone()),
                "profile {} present in both pending and history",
                entry.profile.id
            );
        }
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn test_decisions_move_profiles_into_history() {
        let mut deck = deck_of(3);
        assert_eq!(deck.current().unwrap().id, "1");

        assert!(deck.like("1"));
        assert_eq!(deck.current().unwrap().id, "2");
        assert!(deck.pass("2"));

        assert_eq!(deck.pending_len(), 1);
        assert_eq!(deck.history().len(), 2);
        assert_eq!(deck.history()[0].action, SwipeAction::Liked);
        assert_eq!(deck.history()[1].action, SwipeAction::Passed);
        assert_partition(&deck, 3);
    }

    #[test]
    fn test_resolve_unknown_id_is_ignored() {
        let mut deck = deck_of(2);
        assert!(!deck.like("99"));
        assert_eq!(deck.pending_len(), 2);
        assert!(deck.history().is_empty());
    }

    #[test]
    fn test_rewind_restores_most_recent_decision_at_front() {
        let mut deck = deck_of(3);
        deck.like("1");
        deck.pass("2");

        let restored = deck.rewind().unwrap();
        assert_eq!(restored.id, "2");
        assert_eq!(deck.current().unwrap().id, "2");
        assert_eq!(deck.history().len(), 1);
        assert_partition(&deck, 3);

        deck.rewind();
        assert_eq!(deck.current().unwrap().id, "1");
        assert!(deck.history().is_empty());
        assert_partition(&deck, 3);
    }

    #[test]
    fn test_rewind_on_empty_history() {
        let mut deck = deck_of(1);
        assert!(deck.rewind().is_none());
    }

    #[test]
    fn test_partition_invariant_over_mixed_sequences() {
        let mut deck = deck_of(8);
        let script: &[(&str, bool)] = &[
            ("1", true),
            ("2", false),
            ("3", true),
            ("4", true),
            ("5", false),
        ];
        for (id, liked) in script {
            if *liked {
                deck.like(id);
            } else {
                deck.pass(id);
            }
            assert_partition(&deck, 8);
        }
        for _ in 0..3 {
            deck.rewind();
            assert_partition(&deck, 8);
        }
        assert_eq!(deck.current().unwrap().id, "3");
        assert_eq!(deck.history().len(), 2);
    }

    #[test]
    fn test_liked_keeps_decision_order() {
        let mut deck = deck_of(4);
        deck.like("1");
        deck.pass("2");
        deck.like("3");

        let liked: Vec<&str> = deck.liked().map(|p| p.id.as_str()).collect();
        assert_eq!(liked, ["1", "3"]);
    }

    #[test]
    fn test_exhausting_the_deck() {
        let mut deck = deck_of(2);
        deck.like("1");
        deck.pass("2");
        assert!(deck.is_exhausted());
        assert!(deck.current().is_none());
    }
}
