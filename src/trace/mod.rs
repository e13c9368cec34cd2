// Trace generation for the two-pointer palindrome check

/// One recorded moment of the algorithm's execution.
///
/// Steps are immutable once produced. `left` and `right` index into the
/// *cleaned* character sequence (see [`Trace::cleaned`]); for the empty-input
/// trace both are conventionally 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Position in the trace, 0-based and contiguous.
    pub index: usize,
    /// Human-readable narration of what happened at this step.
    pub description: String,
    /// Left pointer into the cleaned sequence.
    pub left: usize,
    /// Right pointer into the cleaned sequence.
    pub right: usize,
    /// Whether this step is an active character comparison.
    pub comparing: bool,
    /// Set only on terminal steps: `Some(true)` = palindrome,
    /// `Some(false)` = mismatch found (always the last step).
    pub result: Option<bool>,
    /// Cleaned-sequence positions the display layer should emphasize.
    pub highlights: Vec<usize>,
}

/// What a step represents, derived from its fields.
///
/// Not part of the stored step data; used to map a step onto the pseudocode
/// line it corresponds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// Pointers placed at both ends.
    Init,
    /// Active comparison of `cleaned[left]` and `cleaned[right]`.
    Compare,
    /// Pointers moved inward after a match.
    Advance,
    /// Terminal step: mismatch found.
    Mismatch,
    /// Terminal step: all characters matched.
    Done,
}

impl Step {
    /// Classify this step for display purposes.
    pub fn kind(&self) -> StepKind {
        match self.result {
            Some(true) => StepKind::Done,
            Some(false) => StepKind::Mismatch,
            None if self.comparing => StepKind::Compare,
            None if self.index == 0 => StepKind::Init,
            None => StepKind::Advance,
        }
    }
}

/// The full ordered step sequence for one input string.
///
/// Created once per visualize action and handed to the playback controller,
/// which owns it exclusively until replaced. Carries the raw input and the
/// cleaned character sequence so display layers never re-normalize.
#[derive(Debug, Clone, Default)]
pub struct Trace {
    input: String,
    cleaned: Vec<char>,
    steps: Vec<Step>,
}

impl Trace {
    /// The raw input string this trace was generated from.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The cleaned sequence: lowercase alphanumeric characters only.
    pub fn cleaned(&self) -> &[char] {
        &self.cleaned
    }

    /// All steps in emission order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Get a step by index.
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// Number of steps in the trace.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the trace holds no steps (only true for the default trace;
    /// [`generate_trace`] always produces at least one step).
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The algorithm's verdict, if the trace reaches a terminal step.
    pub fn verdict(&self) -> Option<bool> {
        self.steps.last().and_then(|s| s.result)
    }
}

/// Reduce an input string to its cleaned sequence: alphanumeric characters
/// only, case-folded to lowercase.
fn clean(input: &str) -> Vec<char> {
    input
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(|c| c.to_lowercase())
        .collect()
}

/// Plain two-pointer palindrome check without step recording.
pub fn is_palindrome(input: &str) -> bool {
    let cleaned = clean(input);
    let mut left = 0;
    let mut right = cleaned.len().saturating_sub(1);

    while left < right {
        if cleaned[left] != cleaned[right] {
            return false;
        }
        left += 1;
        right -= 1;
    }

    true
}

/// Generate the full step trace of the two-pointer palindrome check.
///
/// Total over all inputs: any string, including the empty string and strings
/// with no alphanumeric characters, produces a valid non-empty trace. Step
/// indices are assigned sequentially from 0 in emission order.
pub fn generate_trace(input: &str) -> Trace {
    let cleaned = clean(input);
    let mut steps: Vec<Step> = Vec::new();

    if cleaned.is_empty() {
        steps.push(Step {
            index: 0,
            description: "Empty string - considered a palindrome".to_string(),
            left: 0,
            right: 0,
            comparing: false,
            result: Some(true),
            highlights: Vec::new(),
        });
        return Trace {
            input: input.to_string(),
            cleaned,
            steps,
        };
    }

    let mut left = 0;
    let mut right = cleaned.len() - 1;

    steps.push(Step {
        index: steps.len(),
        description: "Initialize pointers at both ends".to_string(),
        left,
        right,
        comparing: false,
        result: None,
        highlights: vec![left, right],
    });

    while left < right {
        steps.push(Step {
            index: steps.len(),
            description: format!("Compare '{}' and '{}'", cleaned[left], cleaned[right]),
            left,
            right,
            comparing: true,
            result: None,
            highlights: vec![left, right],
        });

        if cleaned[left] != cleaned[right] {
            // Short-circuit: the mismatch step is always the last one.
            steps.push(Step {
                index: steps.len(),
                description: "Characters don't match - not a palindrome!".to_string(),
                left,
                right,
                comparing: false,
                result: Some(false),
                highlights: vec![left, right],
            });
            return Trace {
                input: input.to_string(),
                cleaned,
                steps,
            };
        }

        left += 1;
        right -= 1;

        // No advance step when the pointers have met or crossed; the loop
        // exits straight to the terminal success step.
        if left < right {
            steps.push(Step {
                index: steps.len(),
                description: "Characters match - move pointers inward".to_string(),
                left,
                right,
                comparing: false,
                result: None,
                highlights: vec![left, right],
            });
        }
    }

    steps.push(Step {
        index: steps.len(),
        description: "All characters matched - it's a palindrome!".to_string(),
        left,
        right,
        comparing: false,
        result: Some(true),
        highlights: Vec::new(),
    });

    Trace {
        input: input.to_string(),
        cleaned,
        steps,
    }
}
