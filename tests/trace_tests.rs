// Integration tests for the trace generator

use tacocat::trace::{generate_trace, is_palindrome, StepKind};

/// Invariants every trace must satisfy: non-empty, contiguous indices,
/// results only on the trailing step, mismatch always last.
fn assert_well_formed(input: &str) {
    let trace = generate_trace(input);
    assert!(!trace.is_empty(), "trace for {:?} is empty", input);

    for (i, step) in trace.steps().iter().enumerate() {
        assert_eq!(step.index, i, "index gap in trace for {:?}", input);
    }

    let last = trace.len() - 1;
    for step in &trace.steps()[..last] {
        assert_eq!(
            step.result, None,
            "non-terminal step {} of {:?} carries a result",
            step.index, input
        );
    }
    assert!(
        trace.steps()[last].result.is_some(),
        "trace for {:?} has no terminal result",
        input
    );
}

#[test]
fn test_traces_are_well_formed() {
    for input in [
        "",
        "!!!",
        "a",
        "ab",
        "aa",
        "abba",
        "racecar",
        "hello",
        "A man, a plan, a canal: Panama",
        "race a car",
        "Was it a car or a cat I saw?",
        "12321",
        "ÉvÉ",
    ] {
        assert_well_formed(input);
    }
}

#[test]
fn test_empty_input_single_step() {
    let trace = generate_trace("");
    assert_eq!(trace.len(), 1);

    let step = &trace.steps()[0];
    assert_eq!(step.result, Some(true));
    assert!(!step.comparing);
    assert_eq!(step.left, 0);
    assert_eq!(step.right, 0);
    assert!(step.highlights.is_empty());
}

#[test]
fn test_non_alphanumeric_input_behaves_like_empty() {
    let trace = generate_trace("!!!");
    assert_eq!(trace.len(), 1);
    assert!(trace.cleaned().is_empty());
    assert_eq!(trace.verdict(), Some(true));
    assert!(trace.steps()[0].highlights.is_empty());
}

#[test]
fn test_single_character_skips_comparison() {
    let trace = generate_trace("x");
    // Initialization step, then straight to the success step
    assert_eq!(trace.len(), 2);
    assert_eq!(trace.steps()[0].kind(), StepKind::Init);
    assert_eq!(trace.steps()[1].kind(), StepKind::Done);
    assert!(!trace.steps().iter().any(|s| s.comparing));
    assert_eq!(trace.verdict(), Some(true));
}

#[test]
fn test_racecar_succeeds() {
    let trace = generate_trace("racecar");
    // init, cmp(0,6), adv(1,5), cmp(1,5), adv(2,4), cmp(2,4), done
    assert_eq!(trace.len(), 7);
    assert_eq!(trace.verdict(), Some(true));

    let kinds: Vec<StepKind> = trace.steps().iter().map(|s| s.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            StepKind::Init,
            StepKind::Compare,
            StepKind::Advance,
            StepKind::Compare,
            StepKind::Advance,
            StepKind::Compare,
            StepKind::Done,
        ]
    );

    // Pointers meet in the middle before the terminal step
    let done = trace.steps().last().unwrap();
    assert_eq!(done.left, 3);
    assert_eq!(done.right, 3);
    assert!(done.highlights.is_empty());
}

#[test]
fn test_hello_fails_at_first_comparison() {
    let trace = generate_trace("hello");
    // init, cmp(0,4), mismatch
    assert_eq!(trace.len(), 3);
    assert_eq!(trace.verdict(), Some(false));

    let compare = &trace.steps()[1];
    assert!(compare.comparing);
    assert_eq!(compare.description, "Compare 'h' and 'o'");

    let mismatch = trace.steps().last().unwrap();
    assert_eq!(mismatch.result, Some(false));
    assert!(!mismatch.comparing);
    assert_eq!(mismatch.left, 0);
    assert_eq!(mismatch.right, 4);
    assert_eq!(mismatch.highlights, vec![0, 4]);
}

#[test]
fn test_panama_normalizes_and_succeeds() {
    let trace = generate_trace("A man, a plan, a canal: Panama");
    let cleaned: String = trace.cleaned().iter().collect();
    assert_eq!(cleaned, "amanaplanacanalpanama");
    assert_eq!(trace.verdict(), Some(true));
}

#[test]
fn test_race_a_car_fails() {
    let trace = generate_trace("race a car");
    let cleaned: String = trace.cleaned().iter().collect();
    assert_eq!(cleaned, "raceacar");
    assert_eq!(trace.verdict(), Some(false));

    // The mismatch is found at 'e' vs 'a' (positions 3 and 4)
    let mismatch = trace.steps().last().unwrap();
    assert_eq!(mismatch.left, 3);
    assert_eq!(mismatch.right, 4);
}

#[test]
fn test_mismatch_short_circuits() {
    let trace = generate_trace("abcba ... x");
    // cleaned is "abcbax": the first comparison already fails
    let mismatch_pos = trace
        .steps()
        .iter()
        .position(|s| s.result == Some(false))
        .expect("no mismatch step");
    assert_eq!(mismatch_pos, trace.len() - 1, "mismatch step is not last");
}

#[test]
fn test_no_advance_step_when_pointers_meet() {
    let trace = generate_trace("abba");
    // init, cmp(0,3), adv(1,2), cmp(1,2), done - no advance after the last
    // comparison because the pointers would have crossed
    assert_eq!(trace.len(), 5);
    let kinds: Vec<StepKind> = trace.steps().iter().map(|s| s.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            StepKind::Init,
            StepKind::Compare,
            StepKind::Advance,
            StepKind::Compare,
            StepKind::Done,
        ]
    );
}

#[test]
fn test_comparison_steps_highlight_both_pointers() {
    let trace = generate_trace("Was it a car or a cat I saw?");
    for step in trace.steps() {
        if step.comparing {
            assert_eq!(step.highlights, vec![step.left, step.right]);
        }
    }
}

#[test]
fn test_unicode_input_case_folds() {
    let trace = generate_trace("ÉvÉ");
    let cleaned: String = trace.cleaned().iter().collect();
    assert_eq!(cleaned, "évé");
    assert_eq!(trace.verdict(), Some(true));
}

#[test]
fn test_is_palindrome_matches_trace_verdict() {
    for input in [
        "",
        "!!!",
        "a",
        "ab",
        "abba",
        "racecar",
        "hello",
        "A man, a plan, a canal: Panama",
        "race a car",
        "Madam",
        "No lemon, no melon",
    ] {
        assert_eq!(
            Some(is_palindrome(input)),
            generate_trace(input).verdict(),
            "verdict mismatch for {:?}",
            input
        );
    }
}

#[test]
fn test_trace_keeps_input_and_cleaned() {
    let trace = generate_trace("Madam");
    assert_eq!(trace.input(), "Madam");
    let cleaned: String = trace.cleaned().iter().collect();
    assert_eq!(cleaned, "madam");
}
