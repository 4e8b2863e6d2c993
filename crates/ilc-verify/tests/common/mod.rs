use ilc_verify::{MatchResult, QuestionCategory, check_answer};

/// Check an answer and fail with a readable message if it is rejected.
#[track_caller]
pub fn assert_accepted(user: &str, spec: &str, category: QuestionCategory) -> MatchResult {
    let result = check_answer(user, spec, category);
    assert!(
        result.is_correct,
        "expected {user:?} to be accepted for {spec:?} ({category})"
    );
    result
}

/// Check an answer and fail with a readable message if it is accepted.
#[track_caller]
pub fn assert_rejected(user: &str, spec: &str, category: QuestionCategory) -> MatchResult {
    let result = check_answer(user, spec, category);
    assert!(
        !result.is_correct,
        "expected {user:?} to be rejected for {spec:?} ({category}), matched by {:?}",
        result.matched_by
    );
    result
}
