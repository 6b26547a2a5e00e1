//! Pluralization for summary lines.

/// Format count with noun, handling pluralization
///
/// - `plural_count(0, "warning")` -> `"0 warnings"`
/// - `plural_count(1, "warning")` -> `"1 warning"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} {noun}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(0, "error"), "0 errors");
        assert_eq!(plural_count(1, "error"), "1 error");
        assert_eq!(plural_count(3, "issue"), "3 issues");
    }
}
