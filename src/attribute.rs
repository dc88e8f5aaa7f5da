//! Single-assignment attribute cell used to detect run boundaries.

/// A cell that accepts one value and afterwards only agrees with it.
///
/// The first commit always succeeds. Later commits succeed only when they
/// carry the same value; a differing value is rejected and the committed one
/// is kept. Segmentation uses a rejection as the signal that the current fix
/// starts a new segment.
///
/// # Example
/// ```
/// use maptimeline::AttributeCell;
///
/// let mut cell = AttributeCell::new();
/// assert!(cell.try_commit(3));
/// assert!(cell.try_commit(3));
/// assert!(!cell.try_commit(4));
/// assert_eq!(cell.get(), Some(&3));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeCell<T> {
    value: Option<T>,
}

impl<T> Default for AttributeCell<T> {
    fn default() -> Self {
        Self { value: None }
    }
}

impl<T: PartialEq> AttributeCell<T> {
    /// Create an empty cell.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit `value`, returning `false` if a different value is already held.
    pub fn try_commit(&mut self, value: T) -> bool {
        match &self.value {
            Some(committed) if *committed != value => false,
            Some(_) => true,
            None => {
                self.value = Some(value);
                true
            }
        }
    }

    /// The committed value, if any.
    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Whether a value has been committed yet.
    pub fn is_committed(&self) -> bool {
        self.value.is_some()
    }
}

impl<T: Copy> AttributeCell<T> {
    /// The committed value by copy.
    pub fn value(&self) -> Option<T> {
        self.value
    }
}
