use thiserror::Error;

/// An out-of-bounds condition detected by a checked slice operation.
///
/// Every variant describes the same failure, an access or range outside the
/// viewed elements. The variant records which check caught it.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundsError {
    /// An element index was not less than the length of the view.
    #[error("index out of bounds: the len is {len} but the index is {index}")]
    Index { index: usize, len: usize },

    /// A sub-range ended past the end of the view.
    #[error("range {start}..{end} out of bounds for slice of length {len}")]
    Range { start: usize, end: usize, len: usize },

    /// A sub-range started after it ended.
    #[error("slice index starts at {start} but ends at {end}")]
    Inverted { start: usize, end: usize },

    /// A view over a buffer would extend past the buffer's capacity.
    #[error("range end {end} exceeds buffer capacity {capacity}")]
    Capacity { end: usize, capacity: usize },

    /// Two views that must have equal length did not.
    #[error("source slice length ({actual}) does not match destination slice length ({expected})")]
    LengthMismatch { expected: usize, actual: usize },
}

impl BoundsError {
    /// Returns true if a single-element access failed.
    pub fn is_index(&self) -> bool {
        matches!(self, Self::Index { .. })
    }

    /// Returns true if constructing a view over a sub-range failed.
    pub fn is_range(&self) -> bool {
        matches!(
            self,
            Self::Range { .. } | Self::Inverted { .. } | Self::Capacity { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::BoundsError;

    #[test]
    fn messages() {
        let e = BoundsError::Index { index: 5, len: 5 };
        assert_eq!(
            e.to_string(),
            "index out of bounds: the len is 5 but the index is 5"
        );
        let e = BoundsError::Range {
            start: 1,
            end: 9,
            len: 4,
        };
        assert_eq!(
            e.to_string(),
            "range 1..9 out of bounds for slice of length 4"
        );
        let e = BoundsError::Capacity {
            end: 6,
            capacity: 5,
        };
        assert_eq!(e.to_string(), "range end 6 exceeds buffer capacity 5");
    }

    #[test]
    fn classification() {
        assert!(BoundsError::Index { index: 0, len: 0 }.is_index());
        assert!(BoundsError::Inverted { start: 2, end: 1 }.is_range());
        assert!(BoundsError::Capacity { end: 1, capacity: 0 }.is_range());
        let mismatch = BoundsError::LengthMismatch {
            expected: 1,
            actual: 2,
        };
        assert!(!mismatch.is_index());
        assert!(!mismatch.is_range());
    }
}
