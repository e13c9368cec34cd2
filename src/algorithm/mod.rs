//! Static content describing the visualized algorithm: metadata, pseudocode,
//! example inputs, and multi-language reference implementations.

pub mod implementations;

use crate::trace::StepKind;

/// Asymptotic complexity with prose explanations.
pub struct Complexity {
    pub time: &'static str,
    pub space: &'static str,
    pub time_explanation: &'static str,
    pub space_explanation: &'static str,
}

/// Descriptive metadata for an algorithm.
pub struct AlgorithmInfo {
    pub name: &'static str,
    pub category: &'static str,
    pub difficulty: &'static str,
    pub description: &'static str,
    pub key_ideas: &'static [&'static str],
    pub complexity: Complexity,
}

pub const PALINDROME_INFO: AlgorithmInfo = AlgorithmInfo {
    name: "Palindrome Check",
    category: "Two Pointers",
    difficulty: "Easy",
    description: "Check whether a string reads the same forwards and backwards, \
                  ignoring case and non-alphanumeric characters.",
    key_ideas: &[
        "Two pointers start at opposite ends and move toward each other",
        "Normalize first: lowercase, alphanumeric characters only",
        "A single mismatch decides the answer immediately",
        "Only half the string is ever compared",
    ],
    complexity: Complexity {
        time: "O(n)",
        space: "O(n)",
        time_explanation: "Each character is visited at most once as the pointers \
                           move toward the middle.",
        space_explanation: "The cleaned copy of the input dominates; the pointers \
                            themselves are O(1).",
    },
};

/// Pseudocode shown alongside the visualization. Empty strings render as
/// spacer lines.
pub const PSEUDOCODE: [&str; 12] = [
    "FUNCTION isPalindrome(string):",
    "  cleaned <- remove non-alphanumeric chars and lowercase",
    "  left <- 0",
    "  right <- length(cleaned) - 1",
    "",
    "  WHILE left < right:",
    "    IF cleaned[left] != cleaned[right]:",
    "      RETURN false",
    "    left <- left + 1",
    "    right <- right - 1",
    "",
    "  RETURN true",
];

/// Which pseudocode line (0-based into [`PSEUDOCODE`]) a step executes.
pub fn pseudocode_line(kind: StepKind) -> usize {
    match kind {
        StepKind::Init => 2,
        StepKind::Compare => 6,
        StepKind::Mismatch => 7,
        StepKind::Advance => 8,
        StepKind::Done => 11,
    }
}

/// Ready-made inputs offered by the input prompt.
pub const EXAMPLE_STRINGS: [&str; 6] = [
    "A man, a plan, a canal: Panama",
    "race a car",
    "Was it a car or a cat I saw?",
    "Madam",
    "racecar",
    "hello",
];
