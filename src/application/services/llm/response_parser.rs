//! Parsing of free-text model output into a question/answer pair
//!
//! The model is asked for a question and usually, but not always, adds an
//! `Answer:` line. The first non-blank line is the question. Without an
//! answer line, the answer is recovered from the record: the first field
//! (in record order) whose name appears in the question and whose value is
//! text.

use crate::domain::entities::TriviaQuestion;
use crate::domain::value_objects::DataRecord;

const ANSWER_PREFIX: &str = "answer:";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResponseParseError {
    #[error("Invalid model response")]
    InvalidResponse,
    #[error("Model response does not contain a question")]
    NoQuestion,
}

/// Parse raw model text against the record it was generated from
pub fn parse_model_output(
    text: &str,
    record: &DataRecord,
) -> Result<TriviaQuestion, ResponseParseError> {
    if text.is_empty() {
        return Err(ResponseParseError::InvalidResponse);
    }

    let lines: Vec<&str> = text.split('\n').filter(|l| !l.trim().is_empty()).collect();
    let (first, rest) = lines
        .split_first()
        .ok_or(ResponseParseError::NoQuestion)?;

    let question = first.trim();

    let answer = rest
        .iter()
        .find_map(|line| explicit_answer(line))
        .or_else(|| answer_from_record(question, record))
        .unwrap_or(TriviaQuestion::UNABLE_TO_DETERMINE);

    Ok(TriviaQuestion::new(question, answer))
}

fn explicit_answer(line: &str) -> Option<&str> {
    let prefix = line.get(..ANSWER_PREFIX.len())?;
    if prefix.eq_ignore_ascii_case(ANSWER_PREFIX) {
        Some(line[ANSWER_PREFIX.len()..].trim())
    } else {
        None
    }
}

fn answer_from_record<'a>(question: &str, record: &'a DataRecord) -> Option<&'a str> {
    let question = question.to_lowercase();

    record.fields().find_map(|(field, value)| {
        let text = value.as_str()?;
        question.contains(&field.to_lowercase()).then_some(text)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_answer_line() {
        let parsed = parse_model_output("What color are Yoda's eyes?\nAnswer: green", &DataRecord::new())
            .unwrap();

        assert_eq!(parsed.question(), "What color are Yoda's eyes?");
        assert_eq!(parsed.answer(), "green");
    }

    #[test]
    fn test_answer_prefix_is_case_insensitive_and_skips_blank_lines() {
        let text = "\n\n  Who built the Millennium Falcon?  \n\nSome chatter\nANSWER:   Corellian Engineering Corporation  \nanswer: ignored";
        let parsed = parse_model_output(text, &DataRecord::new()).unwrap();

        assert_eq!(parsed.question(), "Who built the Millennium Falcon?");
        assert_eq!(parsed.answer(), "Corellian Engineering Corporation");
    }

    #[test]
    fn test_answer_line_edge_cases() {
        let cases = [
            ("Q?\r\nAnswer: A\r\n", "Q?", "A"),
            ("Who is it?\nAnswer:", "Who is it?", ""),
            ("Who is it?\nAnswer:    \nAnswer: Han", "Who is it?", ""),
            (
                "Who is it?\n  Answer: Han",
                "Who is it?",
                TriviaQuestion::UNABLE_TO_DETERMINE,
            ),
            ("Who is it?\nanswer:Chewbacca", "Who is it?", "Chewbacca"),
        ];

        for (text, question, answer) in cases {
            let parsed = parse_model_output(text, &DataRecord::new()).unwrap();
            assert_eq!(parsed.question(), question, "{:?}", text);
            assert_eq!(parsed.answer(), answer, "{:?}", text);
        }
    }

    #[test]
    fn test_answer_on_first_line_is_not_an_answer() {
        let parsed = parse_model_output("Answer: 42", &DataRecord::new()).unwrap();

        assert_eq!(parsed.question(), "Answer: 42");
        assert_eq!(parsed.answer(), TriviaQuestion::UNABLE_TO_DETERMINE);
    }

    #[test]
    fn test_recovers_answer_from_first_matching_field() {
        let record = DataRecord::new()
            .with_field("name", "Tatooine")
            .with_field("climate", "arid")
            .with_field("terrain", "desert");

        let parsed = parse_model_output("What is the terrain and climate of Tatooine?", &record)
            .unwrap();
        assert_eq!(parsed.answer(), "arid");
    }

    #[test]
    fn test_recovery_skips_non_text_values() {
        let record = DataRecord::new()
            .with_field("crew", 4)
            .with_field("model", "YT-1300");

        let parsed = parse_model_output("What crew and model does it have?", &record).unwrap();
        assert_eq!(parsed.answer(), "YT-1300");
    }

    #[test]
    fn test_recovery_matches_field_names_case_insensitively() {
        let record = DataRecord::new().with_field("Eye_Color", "yellow");

        let parsed = parse_model_output("What is Vader's EYE_COLOR?", &record).unwrap();
        assert_eq!(parsed.answer(), "yellow");
    }

    #[test]
    fn test_no_answer_and_no_matching_field() {
        let record = DataRecord::new()
            .with_field("name", "Slave I")
            .with_field("manufacturer", "Kuat Systems");

        let parsed = parse_model_output("Tell me about this starship.", &record).unwrap();
        assert_eq!(parsed.question(), "Tell me about this starship.");
        assert_eq!(parsed.answer(), TriviaQuestion::UNABLE_TO_DETERMINE);
    }

    #[test]
    fn test_rejects_empty_and_blank_text() {
        assert_eq!(
            parse_model_output("", &DataRecord::new()),
            Err(ResponseParseError::InvalidResponse)
        );
        assert_eq!(
            parse_model_output(" \n\t\n  ", &DataRecord::new()),
            Err(ResponseParseError::NoQuestion)
        );
    }
}
