// tests for message screening

use aidvice::Screen;

#[test]
fn test_whole_word_match() {
    assert!(Screen::check("I am dealing with grief right now").intercept);
}

#[test]
fn test_case_insensitive() {
    assert!(Screen::check("THERAPY was suggested to me").intercept);
    assert!(Screen::check("Facing a Legal Issue at work").intercept);
}

#[test]
fn test_substring_does_not_match() {
    // "depress" must not fire inside a longer word
    assert!(!Screen::check("the depressionist painted all day").intercept);
}

#[test]
fn test_harmony_is_not_harm() {
    assert!(!Screen::check("we sang in perfect harmony").intercept);
}

#[test]
fn test_empty_input() {
    assert!(!Screen::check("").intercept);
}

#[test]
fn test_casual_chat_passes() {
    assert!(!Screen::check("What are some tips for managing stress?").intercept);
    assert!(!Screen::check("How can I stay motivated?").intercept);
}

#[test]
fn test_punctuation_boundary() {
    assert!(Screen::check("I can't shake this anxiety.").intercept);
    assert!(Screen::check("(emergency)").intercept);
}

#[test]
fn test_keyword_at_start_and_end() {
    assert!(Screen::check("trauma changed everything").intercept);
    assert!(Screen::check("I am struggling with addiction").intercept);
}

#[test]
fn test_anxious_matches() {
    assert!(Screen::check("I feel anxious about my exam").intercept);
}

#[test]
fn test_phrase_matches() {
    assert!(Screen::check("I have a legal issue with my landlord").intercept);
}

#[test]
fn test_phrase_inner_spacing_is_exact() {
    // only the outer edges of a phrase are boundary-checked; a doubled
    // inner space is a miss
    assert!(!Screen::check("I have a legal  issue with my landlord").intercept);
}

#[test]
fn test_matched_term_is_reported() {
    let screen = Screen::check("thinking about divorce");
    assert!(screen.intercept);
    assert_eq!(screen.matched, Some("divorce"));
}

#[test]
fn test_no_match_reports_none() {
    let screen = Screen::check("hello there");
    assert!(!screen.intercept);
    assert!(screen.matched.is_none());
}
