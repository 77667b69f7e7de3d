//! JSON question catalogs, for swapping in a question set other than the built-in one.
//!
//! ```json
//! { "questions": [ { "prompt": "...", "answers": [ { "text": "...", "category": "cat" } ] } ] }
//! ```

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::info;

use quiz_core::{Answer, BankError, Category, Question, QuestionBank};

use crate::error::CatalogError;

#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile<C> {
    questions: Vec<QuestionRecord<C>>,
}

#[derive(Debug, Serialize, Deserialize)]
struct QuestionRecord<C> {
    prompt: String,
    answers: Vec<AnswerRecord<C>>,
}

#[derive(Debug, Serialize, Deserialize)]
struct AnswerRecord<C> {
    text: String,
    category: C,
}

/// Parse and validate a catalog.
///
/// # Errors
///
/// Returns `CatalogError::Parse` for malformed JSON or unknown categories.
/// Returns `CatalogError::Bank` if a question or the bank itself fails validation.
pub fn parse_catalog<C>(json: &str) -> Result<QuestionBank<C>, CatalogError>
where
    C: Category + DeserializeOwned,
{
    let file: CatalogFile<C> = serde_json::from_str(json)?;

    let questions = file
        .questions
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let answers = record
                .answers
                .into_iter()
                .map(|answer| Answer::new(answer.text, answer.category))
                .collect();
            Question::new(record.prompt, answers)
                .map_err(|source| BankError::Question { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(QuestionBank::new(questions)?)
}

/// Read a catalog from disk.
///
/// # Errors
///
/// Returns `CatalogError::Io` if the file cannot be read, otherwise as `parse_catalog`.
pub fn load_catalog<C>(path: &Path) -> Result<QuestionBank<C>, CatalogError>
where
    C: Category + DeserializeOwned,
{
    let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let bank = parse_catalog(&json)?;
    info!(path = %path.display(), questions = bank.len(), "loaded question catalog");
    Ok(bank)
}

/// Serialize a bank in catalog format.
///
/// # Errors
///
/// Returns `CatalogError::Parse` if serialization fails.
pub fn to_json<C>(bank: &QuestionBank<C>) -> Result<String, CatalogError>
where
    C: Category + Serialize,
{
    let file = CatalogFile {
        questions: bank
            .iter()
            .map(|question| QuestionRecord {
                prompt: question.prompt().to_string(),
                answers: question
                    .answers()
                    .iter()
                    .map(|answer| AnswerRecord {
                        text: answer.text().to_string(),
                        category: answer.category(),
                    })
                    .collect(),
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&file)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::{Animal, QuestionError};

    #[test]
    fn reference_bank_survives_export_and_reload() {
        let bank = QuestionBank::reference();
        let json = to_json(&bank).unwrap();
        assert!(json.contains("\"category\": \"hamster\""));
        let reloaded: QuestionBank<Animal> = parse_catalog(&json).unwrap();
        assert_eq!(reloaded, bank);
    }

    #[test]
    fn unknown_category_is_rejected() {
        let json = r#"{"questions":[{"prompt":"Pick","answers":[{"text":"Awoo","category":"wolf"}]}]}"#;
        let err = parse_catalog::<Animal>(json).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)), "{err:?}");
    }

    #[test]
    fn invalid_question_reports_its_index() {
        let json = r#"{"questions":[
            {"prompt":"Fine","answers":[{"text":"Meow","category":"cat"}]},
            {"prompt":"No options","answers":[]}
        ]}"#;
        let err = parse_catalog::<Animal>(json).unwrap_err();
        assert!(
            matches!(
                err,
                CatalogError::Bank(BankError::Question {
                    index: 1,
                    source: QuestionError::NoAnswers
                })
            ),
            "{err:?}"
        );
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let err = parse_catalog::<Animal>(r#"{"questions":[]}"#).unwrap_err();
        assert!(matches!(err, CatalogError::Bank(BankError::Empty)), "{err:?}");
    }

    #[test]
    fn load_reads_file_and_reports_missing_path() {
        let dir = std::env::temp_dir();
        let path = dir.join(format!("quiz-catalog-{}.json", std::process::id()));
        std::fs::write(&path, to_json(&QuestionBank::reference()).unwrap()).unwrap();

        let bank: QuestionBank<Animal> = load_catalog(&path).unwrap();
        assert_eq!(bank.len(), 5);
        std::fs::remove_file(&path).unwrap();

        let err = load_catalog::<Animal>(&path).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }), "{err:?}");
    }
}
