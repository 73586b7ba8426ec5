/// A half-open code-point range `[start, end)` inside block text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    /// Inclusive start offset.
    pub start: usize,
    /// Exclusive end offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length in code points. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }
}

/// Finds the span of a columnar span list that holds `pos`.
///
/// `starts` and `ends` are parallel, sorted ascending and non-overlapping.
/// Binary search for the first span ending after `pos`; that span is the
/// only candidate that can contain it.
pub fn contains(starts: &[usize], ends: &[usize], pos: usize) -> Option<usize> {
    let idx = ends.partition_point(|&end| end <= pos);
    match (starts.get(idx), ends.get(idx)) {
        (Some(&start), Some(&end)) if start <= pos && pos < end => Some(idx),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, None)]
    #[case(1, None)]
    #[case(2, Some(0))]
    #[case(4, Some(0))]
    #[case(5, None)]
    #[case(8, None)]
    #[case(9, Some(1))]
    #[case(11, Some(1))]
    #[case(12, None)]
    #[case(100, None)]
    fn finds_containing_span(#[case] pos: usize, #[case] expected: Option<usize>) {
        assert_eq!(contains(&[2, 9], &[5, 12], pos), expected);
    }

    #[test]
    fn empty_layer_contains_nothing() {
        assert_eq!(contains(&[], &[], 0), None);
    }

    #[test]
    fn adjacent_spans_resolve_to_the_later_one() {
        // [0,3) and [3,6) share a boundary; 3 belongs to the second span only.
        assert_eq!(contains(&[0, 3], &[3, 6], 2), Some(0));
        assert_eq!(contains(&[0, 3], &[3, 6], 3), Some(1));
    }

    #[test]
    fn span_len() {
        assert_eq!(Span::new(2, 5).len(), 3);
        assert!(Span::new(4, 4).is_empty());
        assert!(Span::new(5, 4).is_empty());
    }
}
