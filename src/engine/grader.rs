//! Pure grading, one function per answer shape.
//!
//! Nothing here holds state; the controller owns the answered-guard and
//! calls in with the question's embedded answer data.

use crate::events::ChoiceVerdict;
use crate::models::Choice;

/// Outcome of grading one submitted response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub correct: bool,
    /// One entry per selected choice; empty for fill-in-the-blank.
    pub choices: Vec<ChoiceVerdict>,
}

/// Grade a single-choice (or true-false) selection.
pub fn grade_single(choices: &[Choice], selected_id: &str) -> Verdict {
    let correct = choices.iter().any(|c| c.id == selected_id && c.correct);
    Verdict {
        correct,
        choices: vec![ChoiceVerdict {
            choice_id: selected_id.to_string(),
            correct,
        }],
    }
}

/// Grade a multi-select submission.
///
/// Correct iff the selected set is exactly the correct set: every correct
/// choice selected, no incorrect choice selected. The per-choice verdicts
/// mark each selected choice on its own and are informational; the
/// aggregate verdict comes from the exact-match rule alone.
pub fn grade_multi(choices: &[Choice], selected_ids: &[String]) -> Verdict {
    let verdicts: Vec<ChoiceVerdict> = selected_ids
        .iter()
        .map(|id| ChoiceVerdict {
            choice_id: id.clone(),
            correct: choices.iter().any(|c| &c.id == id && c.correct),
        })
        .collect();

    let every_correct_selected = choices
        .iter()
        .filter(|c| c.correct)
        .all(|c| selected_ids.contains(&c.id));
    let no_incorrect_selected = verdicts.iter().all(|v| v.correct);

    Verdict {
        correct: every_correct_selected && no_incorrect_selected,
        choices: verdicts,
    }
}

/// Grade a typed answer against the expected string.
///
/// No partial credit and no fuzzy matching; both sides are normalized
/// and compared for equality.
pub fn grade_text(expected: &str, submitted: &str) -> Verdict {
    Verdict {
        correct: normalize(expected) == normalize(submitted),
        choices: Vec::new(),
    }
}

/// Comparison form for typed answers: surrounding whitespace and letter
/// case are ignored.
pub fn normalize(answer: &str) -> String {
    answer.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choices(flags: &[bool]) -> Vec<Choice> {
        flags
            .iter()
            .enumerate()
            .map(|(i, &correct)| Choice {
                id: i.to_string(),
                text: format!("choice {}", i),
                correct,
                feedback: None,
            })
            .collect()
    }

    fn ids(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_choice_grading() {
        let cs = choices(&[false, true]);
        assert!(grade_single(&cs, "1").correct);
        assert!(!grade_single(&cs, "0").correct);
        assert!(!grade_single(&cs, "7").correct);

        let verdict = grade_single(&cs, "0");
        assert_eq!(verdict.choices.len(), 1);
        assert_eq!(verdict.choices[0].choice_id, "0");
        assert!(!verdict.choices[0].correct);
    }

    #[test]
    fn test_multi_select_exact_match() {
        // A correct, B correct, C incorrect
        let cs = choices(&[true, true, false]);

        assert!(grade_multi(&cs, &ids(&["0", "1"])).correct);
        assert!(!grade_multi(&cs, &ids(&["0"])).correct);
        assert!(!grade_multi(&cs, &ids(&["0", "1", "2"])).correct);
        assert!(!grade_multi(&cs, &ids(&[])).correct);
    }

    #[test]
    fn test_multi_select_per_choice_verdicts() {
        let cs = choices(&[true, true, false]);
        let verdict = grade_multi(&cs, &ids(&["0", "2"]));
        assert!(!verdict.correct);
        assert_eq!(verdict.choices.len(), 2);
        assert!(verdict.choices[0].correct);
        assert!(!verdict.choices[1].correct);
    }

    #[test]
    fn test_multi_select_duplicate_selection_is_not_exact() {
        let cs = choices(&[true, true]);
        // Selecting the same correct choice twice still leaves one
        // correct choice unselected.
        assert!(!grade_multi(&cs, &ids(&["0", "0"])).correct);
    }

    #[test]
    fn test_text_case_and_whitespace_insensitive() {
        for submitted in ["Paris", " paris ", "PARIS"] {
            assert!(grade_text("Paris", submitted).correct);
        }
        assert!(!grade_text("Paris", "Lyon").correct);
        assert!(!grade_text("42", "41").correct);
    }
}
