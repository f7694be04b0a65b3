//! The fixed five-question survey and the answers a user gives to it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const QUESTION_COUNT: usize = 5;

#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub index: usize,
    pub text: &'static str,
    pub options: [&'static str; 3],
}

pub static QUESTIONS: [Question; QUESTION_COUNT] = [
    Question {
        index: 0,
        text: "1. Which working style do you prefer?",
        options: [
            "Working alone with deep focus",
            "Teamwork and collaboration",
            "Talking with clients and stakeholders",
        ],
    },
    Question {
        index: 1,
        text: "2. What matters most to you?",
        options: [
            "High salary",
            "Work-life balance",
            "Room for growth and challenge",
        ],
    },
    Question {
        index: 2,
        text: "3. What kind of environment do you prefer?",
        options: [
            "Predictable, high-stability environment",
            "Fast-moving environment full of change",
            "Free environment that rewards creativity",
        ],
    },
    Question {
        index: 3,
        text: "4. Which technical field interests you?",
        options: [
            "Frontend/UI development",
            "Backend/system development",
            "Data/AI/ML",
        ],
    },
    Question {
        index: 4,
        text: "5. What do you value most at work?",
        options: [
            "Job stability and security",
            "Innovation and creativity",
            "Continuous growth and learning",
        ],
    },
];

/// Answers keyed by question index. Blank answers are treated as missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SurveyAnswers(BTreeMap<usize, String>);

impl SurveyAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, question: usize, answer: impl Into<String>) -> Self {
        self.0.insert(question, answer.into());
        self
    }

    /// The answer text for `question`, or `None` if unanswered or blank.
    pub fn get(&self, question: usize) -> Option<&str> {
        self.0
            .get(&question)
            .map(String::as_str)
            .filter(|a| !a.trim().is_empty())
    }

    /// Answered questions in index order.
    pub fn answered(&self) -> impl Iterator<Item = (usize, &str)> {
        self.0
            .iter()
            .map(|(i, a)| (*i, a.as_str()))
            .filter(|(_, a)| !a.trim().is_empty())
    }

    /// Indices of survey questions without a usable answer.
    pub fn missing(&self) -> Vec<usize> {
        (0..QUESTION_COUNT).filter(|i| self.get(*i).is_none()).collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }

    /// Answered questions whose answer is not one of that question's options.
    pub fn off_list_answers(&self) -> Vec<usize> {
        self.answered()
            .filter(|(i, answer)| {
                QUESTIONS
                    .get(*i)
                    .is_some_and(|q| !q.options.iter().any(|option| option == answer))
            })
            .map(|(i, _)| i)
            .collect()
    }

    /// Indices that do not belong to the survey.
    pub fn unknown_questions(&self) -> Vec<usize> {
        self.0
            .keys()
            .copied()
            .filter(|i| *i >= QUESTION_COUNT)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full() -> SurveyAnswers {
        QUESTIONS
            .iter()
            .fold(SurveyAnswers::new(), |acc, q| acc.with(q.index, q.options[0]))
    }

    #[test]
    fn test_question_indices_match_positions() {
        for (pos, q) in QUESTIONS.iter().enumerate() {
            assert_eq!(q.index, pos);
        }
    }

    #[test]
    fn test_complete_answers() {
        let answers = full();
        assert!(answers.is_complete());
        assert!(answers.missing().is_empty());
    }

    #[test]
    fn test_blank_answer_counts_as_missing() {
        let answers = full().with(2, "   ");
        assert_eq!(answers.get(2), None);
        assert_eq!(answers.missing(), vec![2]);
        assert!(!answers.is_complete());
        assert_eq!(answers.answered().count(), 4);
    }

    #[test]
    fn test_deserializes_from_string_keyed_object() {
        let answers: SurveyAnswers =
            serde_json::from_str(r#"{"0": "Teamwork and collaboration", "3": "Data/AI/ML"}"#)
                .unwrap();
        assert_eq!(answers.get(0), Some("Teamwork and collaboration"));
        assert_eq!(answers.get(3), Some("Data/AI/ML"));
        assert_eq!(answers.missing(), vec![1, 2, 4]);
    }

    #[test]
    fn test_unknown_questions_detected() {
        let answers = full().with(7, "extra");
        assert_eq!(answers.unknown_questions(), vec![7]);
    }

    #[test]
    fn test_off_list_answers_detected() {
        let answers = full().with(1, "I like {jobs}").with(3, "data/ai/ml");
        assert_eq!(answers.off_list_answers(), vec![1, 3]);
        assert!(full().off_list_answers().is_empty());
    }
}
