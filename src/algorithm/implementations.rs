//! Reference implementations of the two-pointer palindrome check in several
//! languages, shown in the code pane.

/// One language's implementation.
pub struct CodeSample {
    pub language: &'static str,
    pub code: &'static str,
}

pub const SAMPLES: [CodeSample; 4] = [
    CodeSample {
        language: "Python",
        code: r#"def is_palindrome(s: str) -> bool:
    # Remove non-alphanumeric and convert to lowercase
    cleaned = ''.join(c.lower() for c in s if c.isalnum())

    # Initialize pointers at both ends
    left, right = 0, len(cleaned) - 1

    # Move pointers inward, comparing characters
    while left < right:
        if cleaned[left] != cleaned[right]:
            return False
        left += 1
        right -= 1

    return True"#,
    },
    CodeSample {
        language: "JavaScript",
        code: r#"function isPalindrome(s) {
  // Remove non-alphanumeric and convert to lowercase
  const cleaned = s.toLowerCase().replace(/[^a-z0-9]/g, '');

  // Initialize pointers at both ends
  let left = 0;
  let right = cleaned.length - 1;

  // Move pointers inward, comparing characters
  while (left < right) {
    if (cleaned[left] !== cleaned[right]) {
      return false;
    }
    left++;
    right--;
  }

  return true;
}"#,
    },
    CodeSample {
        language: "Java",
        code: r#"public static boolean isPalindrome(String s) {
    // Remove non-alphanumeric and convert to lowercase
    String cleaned = s.toLowerCase().replaceAll("[^a-z0-9]", "");

    // Initialize pointers at both ends
    int left = 0;
    int right = cleaned.length() - 1;

    // Move pointers inward, comparing characters
    while (left < right) {
        if (cleaned.charAt(left) != cleaned.charAt(right)) {
            return false;
        }
        left++;
        right--;
    }

    return true;
}"#,
    },
    CodeSample {
        language: "C++",
        code: r#"bool isPalindrome(const std::string& s) {
    // Remove non-alphanumeric and convert to lowercase
    std::string cleaned;
    for (char c : s) {
        if (std::isalnum(static_cast<unsigned char>(c))) {
            cleaned += std::tolower(static_cast<unsigned char>(c));
        }
    }

    // Initialize pointers at both ends
    int left = 0;
    int right = static_cast<int>(cleaned.size()) - 1;

    // Move pointers inward, comparing characters
    while (left < right) {
        if (cleaned[left] != cleaned[right]) {
            return false;
        }
        ++left;
        --right;
    }

    return true;
}"#,
    },
];
