//! Questions and the fixed, ordered question bank.

use crate::quiz::error::{QuestionBankError, QuestionViolation};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Checked = Validation<(), NonEmptyVec<QuestionViolation>>;

/// Immutable multiple-choice question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub text: String,
    pub choices: Vec<String>,
    pub correct_answer: String,
}

impl Question {
    pub fn new<I, T>(
        id: impl Into<String>,
        text: impl Into<String>,
        choices: I,
        correct_answer: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            id: id.into(),
            text: text.into(),
            choices: choices.into_iter().map(Into::into).collect(),
            correct_answer: correct_answer.into(),
        }
    }

    /// Whether `choice` is exactly the correct answer.
    pub fn is_correct(&self, choice: &str) -> bool {
        self.correct_answer == choice
    }
}

/// Fixed, ordered sequence of questions.
///
/// The bank is validated once on construction and never mutated afterwards;
/// clones share the same storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Arc<[Question]>,
}

impl QuestionBank {
    /// Validate and wrap a list of questions.
    ///
    /// All violations are reported together rather than stopping at the first.
    ///
    /// ```rust
    /// use quizset::quiz::{Question, QuestionBank, QuestionBankError};
    ///
    /// let result = QuestionBank::new(vec![
    ///     Question::new("1", "Pick one", ["a"], "b"),
    /// ]);
    ///
    /// match result {
    ///     Err(QuestionBankError::Invalid { violations }) => assert_eq!(violations.len(), 2),
    ///     other => panic!("expected violations, got {other:?}"),
    /// }
    /// ```
    pub fn new(questions: Vec<Question>) -> Result<Self, QuestionBankError> {
        match validate(&questions) {
            Validation::Success(()) => Ok(Self::from_trusted(questions)),
            Validation::Failure(violations) => Err(QuestionBankError::Invalid {
                violations: violations.iter().cloned().collect(),
            }),
        }
    }

    /// Parse a JSON array of `{id, text, choices, correctAnswer}` records.
    pub fn from_json(json: &str) -> Result<Self, QuestionBankError> {
        let questions: Vec<Question> = serde_json::from_str(json)?;
        Self::new(questions)
    }

    /// The built-in three question bank.
    pub fn sample() -> Self {
        Self::from_trusted(vec![
            Question::new(
                "1",
                "What is the capital of France?",
                ["London", "Berlin", "Paris", "Madrid"],
                "Paris",
            ),
            Question::new("2", "What is 2 + 2?", ["3", "4", "5", "6"], "4"),
            Question::new(
                "3",
                "What is the largest planet in our solar system?",
                ["Earth", "Mars", "Jupiter", "Saturn"],
                "Jupiter",
            ),
        ])
    }

    fn from_trusted(questions: Vec<Question>) -> Self {
        Self {
            questions: questions.into(),
        }
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    pub fn as_slice(&self) -> &[Question] {
        &self.questions
    }
}

fn validate(questions: &[Question]) -> Checked {
    let mut checks: Vec<Checked> = Vec::new();

    if questions.is_empty() {
        checks.push(Validation::fail(QuestionViolation::EmptyBank));
    }

    let mut seen = HashSet::new();
    for question in questions {
        if !seen.insert(question.id.as_str()) {
            checks.push(Validation::fail(QuestionViolation::DuplicateId {
                id: question.id.clone(),
            }));
        }
        checks.extend(validate_question(question));
    }

    Validation::all_vec(checks).map(|_| ())
}

fn validate_question(question: &Question) -> Vec<Checked> {
    let mut checks = Vec::new();

    if question.choices.len() < 2 {
        checks.push(Validation::fail(QuestionViolation::TooFewChoices {
            id: question.id.clone(),
            count: question.choices.len(),
        }));
    }

    let occurrences = question
        .choices
        .iter()
        .filter(|choice| question.is_correct(choice.as_str()))
        .count();
    match occurrences {
        0 => checks.push(Validation::fail(QuestionViolation::MissingCorrectAnswer {
            id: question.id.clone(),
            answer: question.correct_answer.clone(),
        })),
        1 => checks.push(Validation::success(())),
        _ => checks.push(Validation::fail(
            QuestionViolation::AmbiguousCorrectAnswer {
                id: question.id.clone(),
                answer: question.correct_answer.clone(),
                occurrences,
            },
        )),
    }

    checks
}
