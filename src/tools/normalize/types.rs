/// Count-bounded view of a list, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequencePreview<'a, T> {
    /// Leading items, in original order.
    pub items: &'a [T],
    /// Items beyond the limit.
    pub remaining: usize,
    /// Whether the list was present and non-empty.
    pub present: bool,
}

impl<'a, T> SequencePreview<'a, T> {
    pub fn empty() -> Self {
        Self {
            items: &[],
            remaining: 0,
            present: false,
        }
    }

    /// Total length of the original list.
    pub fn total(&self) -> usize {
        self.items.len() + self.remaining
    }
}
