use std::collections::HashMap;

use thiserror::Error;

use crate::models::ProfileDraft;

/// How a question collects its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    /// Single free-text field.
    FreeText,
    /// Free-text entries added one at a time, capped.
    FreeList { max_entries: usize },
    /// Pick from the offered options, capped.
    Select { max_selections: usize },
}

/// One question of the profile interview.
#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub id: &'static str,
    pub emoji: &'static str,
    pub prompt: &'static str,
    pub purpose: &'static str,
    pub options: &'static [&'static str],
    pub kind: QuestionKind,
}

/// The onboarding interview, in presentation order.
pub const QUESTIONS: &[Question] = &[
    Question {
        id: "name",
        emoji: "\u{1F464}",
        prompt: "What is your name?",
        purpose: "People will see this name on your profile.",
        options: &[],
        kind: QuestionKind::FreeText,
    },
    Question {
        id: "age",
        emoji: "\u{1F464}",
        prompt: "What is your age?",
        purpose: "People will see this age on your profile.",
        options: &[],
        kind: QuestionKind::FreeText,
    },
    Question {
        id: "looking-for",
        emoji: "\u{1F511}",
        prompt: "What are you looking for?",
        purpose: "Establish intent compatibility.",
        options: &[
            "Long-term relationship",
            "Marriage",
            "Casual dating",
            "Friendship",
            "Not sure yet",
        ],
        kind: QuestionKind::Select { max_selections: 2 },
    },
    Question {
        id: "values",
        emoji: "\u{1F9E0}",
        prompt: "What are your core values?",
        purpose: "Match based on life philosophy and beliefs.",
        options: &[
            "Faith/spirituality",
            "Family",
            "Ambition",
            "Kindness",
            "Integrity",
            "Humor",
            "Independence",
            "Creativity",
            "Adventure",
            "Simplicity",
        ],
        kind: QuestionKind::Select { max_selections: 3 },
    },
    Question {
        id: "weekend",
        emoji: "\u{1F5D3}",
        prompt: "What does a typical weekend look like for you?",
        purpose: "Gauge lifestyle and activity compatibility.",
        options: &[
            "Outdoors/adventure",
            "Gym/fitness",
            "Netflix & relax",
            "Social gatherings",
            "Church/faith-based events",
            "Creative projects",
            "Travel",
        ],
        kind: QuestionKind::Select { max_selections: 3 },
    },
    Question {
        id: "lifestyle",
        emoji: "\u{1F4BC}",
        prompt: "What best describes your current lifestyle?",
        purpose: "Helps match by work-life balance and stability.",
        options: &[
            "Career-focused",
            "Student",
            "Entrepreneur",
            "Stay-at-home",
            "Balanced lifestyle",
            "In transition",
        ],
        kind: QuestionKind::Select { max_selections: 2 },
    },
    Question {
        id: "faith",
        emoji: "\u{271D}",
        prompt: "Do your faith or spiritual beliefs play a role in your life?",
        purpose: "Crucial for value-aligned matching.",
        options: &[
            "Very important",
            "Somewhat important",
            "Not important",
            "Prefer not to say",
        ],
        kind: QuestionKind::Select { max_selections: 1 },
    },
    Question {
        id: "kids",
        emoji: "\u{1F46A}",
        prompt: "Do you want kids (or more kids) someday?",
        purpose: "Align future life goals.",
        options: &["Yes", "No", "Maybe", "Already have kids"],
        kind: QuestionKind::Select { max_selections: 2 },
    },
    Question {
        id: "relocation",
        emoji: "\u{1F30D}",
        prompt: "Are you open to relocating for love?",
        purpose: "Prevent geographic dealbreakers.",
        options: &["Yes", "Maybe", "No"],
        kind: QuestionKind::Select { max_selections: 1 },
    },
    Question {
        id: "non-negotiables",
        emoji: "\u{1F91D}",
        prompt: "What are three things non-negotiable in a partner?",
        purpose: "Surface user-defined dealbreakers for matching.",
        options: &[],
        kind: QuestionKind::FreeList { max_entries: 3 },
    },
];

#[derive(Debug, Error)]
pub enum OnboardingError {
    #[error("question {0} expects a different answer kind")]
    WrongAnswerKind(&'static str),

    #[error("option {0:?} is not offered by question {1}")]
    UnknownOption(String, &'static str),

    #[error("question {0} has no answer yet")]
    Unanswered(&'static str),

    #[error("{0:?} is not a valid age")]
    InvalidAge(String),
}

/// Answer to one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    Selections(Vec<String>),
}

/// Walks the interview question by question, collecting answers.
///
/// Selection questions toggle: picking a selected option removes it again,
/// and picking past the question's cap is a no-op, so the stored answer can
/// never exceed the cap.
#[derive(Debug)]
pub struct OnboardingFlow {
    questions: &'static [Question],
    index: usize,
    answers: HashMap<&'static str, Answer>,
}

impl Default for OnboardingFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl OnboardingFlow {
    pub fn new() -> Self {
        Self::with_questions(QUESTIONS)
    }

    pub fn with_questions(questions: &'static [Question]) -> Self {
        Self {
            questions,
            index: 0,
            answers: HashMap::new(),
        }
    }

    pub fn current(&self) -> &Question {
        &self.questions[self.index]
    }

    /// (answered so far, total), for the progress header.
    pub fn progress(&self) -> (usize, usize) {
        (self.index, self.questions.len())
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == self.questions.len()
    }

    pub fn answer(&self, question_id: &str) -> Option<&Answer> {
        self.answers.get(question_id)
    }

    /// Record the free-text answer for the current question.
    pub fn answer_text(&mut self, text: &str) -> Result<(), OnboardingError> {
        let question = self.current();
        if question.kind != QuestionKind::FreeText {
            return Err(OnboardingError::WrongAnswerKind(question.id));
        }
        let text = text.trim();
        if text.is_empty() {
            return Err(OnboardingError::Unanswered(question.id));
        }
        self.answers
            .insert(question.id, Answer::Text(text.to_string()));
        Ok(())
    }

    /// Toggle one offered option on the current selection question.
    pub fn toggle_option(&mut self, option: &str) -> Result<(), OnboardingError> {
        let question = *self.current();
        let QuestionKind::Select { max_selections } = question.kind else {
            return Err(OnboardingError::WrongAnswerKind(question.id));
        };
        if !question.options.contains(&option) {
            return Err(OnboardingError::UnknownOption(
                option.to_string(),
                question.id,
            ));
        }

        let entry = self
            .answers
            .entry(question.id)
            .or_insert_with(|| Answer::Selections(Vec::new()));
        let Answer::Selections(selected) = entry else {
            return Err(OnboardingError::WrongAnswerKind(question.id));
        };

        if let Some(position) = selected.iter().position(|s| s == option) {
            selected.remove(position);
        } else if selected.len() < max_selections {
            selected.push(option.to_string());
        }
        Ok(())
    }

    /// Append one entry to the current free-list question. Entries past the
    /// cap are dropped.
    pub fn add_entry(&mut self, text: &str) -> Result<(), OnboardingError> {
        let question = *self.current();
        let QuestionKind::FreeList { max_entries } = question.kind else {
            return Err(OnboardingError::WrongAnswerKind(question.id));
        };
        let text = text.trim();
        if text.is_empty() {
            return Err(OnboardingError::Unanswered(question.id));
        }

        let entry = self
            .answers
            .entry(question.id)
            .or_insert_with(|| Answer::Selections(Vec::new()));
        if let Answer::Selections(entries) = entry {
            if entries.len() < max_entries {
                entries.push(text.to_string());
            }
        }
        Ok(())
    }

    /// Advance past the current question. Fails while it is unanswered.
    pub fn next(&mut self) -> Result<(), OnboardingError> {
        let question = self.current();
        match self.answers.get(question.id) {
            Some(Answer::Text(text)) if !text.is_empty() => {}
            Some(Answer::Selections(items)) if !items.is_empty() => {}
            _ => return Err(OnboardingError::Unanswered(question.id)),
        }
        if !self.is_last() {
            self.index += 1;
        }
        Ok(())
    }

    pub fn back(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub fn is_complete(&self) -> bool {
        self.questions.iter().all(|q| {
            matches!(
                self.answers.get(q.id),
                Some(Answer::Text(t)) if !t.is_empty()
            ) || matches!(
                self.answers.get(q.id),
                Some(Answer::Selections(s)) if !s.is_empty()
            )
        })
    }

    /// Consume the flow into its validated answer set.
    pub fn finish(self) -> Result<OnboardingAnswers, OnboardingError> {
        let text = |id: &'static str| -> Result<String, OnboardingError> {
            match self.answers.get(id) {
                Some(Answer::Text(t)) if !t.is_empty() => Ok(t.clone()),
                _ => Err(OnboardingError::Unanswered(id)),
            }
        };
        let selections = |id: &'static str| -> Result<Vec<String>, OnboardingError> {
            match self.answers.get(id) {
                Some(Answer::Selections(s)) if !s.is_empty() => Ok(s.clone()),
                _ => Err(OnboardingError::Unanswered(id)),
            }
        };

        let age_text = text("age")?;
        let age: u8 = age_text
            .parse()
            .map_err(|_| OnboardingError::InvalidAge(age_text.clone()))?;

        Ok(OnboardingAnswers {
            name: text("name")?,
            age,
            looking_for: selections("looking-for")?,
            core_values: selections("values")?,
            weekend: selections("weekend")?,
            lifestyle: selections("lifestyle")?,
            faith: selections("faith")?,
            kids: selections("kids")?,
            relocation: selections("relocation")?,
            non_negotiables: selections("non-negotiables")?,
        })
    }
}

/// Completed interview answers.
#[derive(Debug, Clone)]
pub struct OnboardingAnswers {
    pub name: String,
    pub age: u8,
    pub looking_for: Vec<String>,
    pub core_values: Vec<String>,
    pub weekend: Vec<String>,
    pub lifestyle: Vec<String>,
    pub faith: Vec<String>,
    pub kids: Vec<String>,
    pub relocation: Vec<String>,
    pub non_negotiables: Vec<String>,
}

impl OnboardingAnswers {
    /// Seed a profile draft from the interview. The editor fills in the rest
    /// (bio, photo, location) before submission.
    pub fn into_draft(self) -> ProfileDraft {
        ProfileDraft {
            name: self.name,
            age: self.age,
            interests: self.core_values,
            ..ProfileDraft::default()
        }
    }
}
