use super::answer::QuestionAnswer;
use crate::error::BarcodeError;
use std::fmt;
use std::str::FromStr;

/// Number of questions on an exam sheet
pub const QUESTION_COUNT: usize = 85;

/// Answers for every question of one sheet, in original question order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSet {
    answers: Vec<QuestionAnswer>,
}

impl AnswerSet {
    /// Wrap exactly [`QUESTION_COUNT`] answers
    pub fn new(answers: Vec<QuestionAnswer>) -> Result<Self, BarcodeError> {
        if answers.len() != QUESTION_COUNT {
            return Err(BarcodeError::QuestionCount {
                expected: QUESTION_COUNT,
                found: answers.len(),
            });
        }
        Ok(Self { answers })
    }

    /// Every question unanswered
    pub fn empty() -> Self {
        Self {
            answers: vec![QuestionAnswer::EMPTY; QUESTION_COUNT],
        }
    }

    /// Answers indexed from 0
    pub fn as_slice(&self) -> &[QuestionAnswer] {
        &self.answers
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [QuestionAnswer] {
        &mut self.answers
    }

    /// Answer for a 1-based question number
    pub fn question(&self, number: usize) -> Option<QuestionAnswer> {
        number
            .checked_sub(1)
            .and_then(|i| self.answers.get(i))
            .copied()
    }

    /// Number of questions with at least one option selected
    pub fn answered(&self) -> usize {
        self.answers.iter().filter(|a| !a.is_empty()).count()
    }
}

impl FromStr for AnswerSet {
    type Err = BarcodeError;

    /// Parse the `"<n> <letters>"` line format
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut answers = Vec::with_capacity(QUESTION_COUNT);
        let mut last_line = 0;

        for (idx, line) in s.lines().enumerate() {
            let line_no = idx + 1;
            let mut fields = line.split_whitespace();
            let Some(number) = fields.next() else {
                continue;
            };
            last_line = line_no;
            let letters = fields.next().unwrap_or("");
            if fields.next().is_some() {
                return Err(format_error(line_no, "too many fields"));
            }

            let number: usize = number
                .parse()
                .map_err(|_| format_error(line_no, &format!("bad question number {number:?}")))?;
            let expected = answers.len() + 1;
            if number != expected {
                return Err(format_error(
                    line_no,
                    &format!("expected question {expected}, found {number}"),
                ));
            }

            let answer = QuestionAnswer::parse_letters(letters).map_err(|c| {
                format_error(line_no, &format!("unexpected answer character {c:?}"))
            })?;
            answers.push(answer);
        }

        if answers.len() != QUESTION_COUNT {
            return Err(format_error(
                last_line,
                &format!(
                    "expected {} questions, found {}",
                    QUESTION_COUNT,
                    answers.len()
                ),
            ));
        }
        Ok(Self { answers })
    }
}

fn format_error(line: usize, reason: &str) -> BarcodeError {
    BarcodeError::AnswerFormat {
        line,
        reason: reason.to_string(),
    }
}

impl fmt::Display for AnswerSet {
    /// One `"<n> <letters>"` line per question, no trailing newline
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, answer) in self.answers.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{} {}", i + 1, answer)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Choice;

    fn sheet_text(letters: impl Fn(usize) -> &'static str) -> String {
        (1..=QUESTION_COUNT)
            .map(|n| format!("{} {}", n, letters(n)))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_parse_and_format() {
        let text = sheet_text(|n| if n % 2 == 0 { "BD" } else { "A" });
        let set: AnswerSet = text.parse().unwrap();
        assert_eq!(set.question(1).unwrap().to_string(), "A");
        assert!(set.question(2).unwrap().contains(Choice::D));
        assert_eq!(set.question(0), None);
        assert_eq!(set.question(86), None);
        assert_eq!(set.to_string(), text);
    }

    #[test]
    fn test_parse_accepts_empty_and_unresolved_answers() {
        let mut text = sheet_text(|_| "C");
        text = text.replacen("1 C\n", "1\n", 1);
        text = text.replacen("2 C\n", "2 x\n", 1);
        text.push('\n');
        let set: AnswerSet = text.parse().unwrap();
        assert!(set.question(1).unwrap().is_empty());
        assert!(set.question(2).unwrap().is_empty());
        assert_eq!(set.answered(), QUESTION_COUNT - 2);
    }

    #[test]
    fn test_parse_rejects_gaps() {
        let text = sheet_text(|_| "A").replacen("\n3 A", "\n4 A", 1);
        match text.parse::<AnswerSet>() {
            Err(BarcodeError::AnswerFormat { line, .. }) => assert_eq!(line, 3),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_bad_letters_and_short_files() {
        let bad = sheet_text(|n| if n == 10 { "AZ" } else { "A" });
        assert!(matches!(
            bad.parse::<AnswerSet>(),
            Err(BarcodeError::AnswerFormat { line: 10, .. })
        ));
        assert!("1 A\n2 B".parse::<AnswerSet>().is_err());
        assert!(matches!(
            AnswerSet::new(vec![QuestionAnswer::EMPTY; 3]),
            Err(BarcodeError::QuestionCount {
                expected: QUESTION_COUNT,
                found: 3
            })
        ));
    }

    #[test]
    fn test_empty_set_formats_blank_letters() {
        let text = AnswerSet::empty().to_string();
        assert!(text.starts_with("1 \n2 \n"));
        assert!(text.ends_with("85 "));
    }
}
