//! Stack with history
//!
//! A LIFO stack that never underflows. Popped slots are not cleared; when
//! the cursor would drop below the bottom, it wraps around to the top of
//! the lowest [`HISTORY_CAPACITY`] slots and keeps handing those values out
//! again. A postfix stream that supplies too few operands therefore reuses
//! recent material instead of failing.
//!
//! ```text
//! buffer:  [ a ][ b ][ c ][ d ]          push a, b, c, d
//!                               ↑ cursor = 4
//!
//! pop ×4 → d, c, b, a                    cursor = 0
//! pop    → d   (cursor wraps to min(4, 8) - 1 = 3)
//! push x → overwrites slot 3             [ a ][ b ][ c ][ x ]
//! ```
//!
//! Popping an empty stack returns `T::default()`.

/// Number of bottom slots reused as history after underflow
pub const HISTORY_CAPACITY: usize = 8;

#[derive(Debug, Clone)]
pub struct HistoryStack<T> {
    buffer: Vec<T>,
    /// Index of the next free slot; `cursor - 1` is the logical top
    cursor: usize,
}

impl<T> Default for HistoryStack<T> {
    fn default() -> Self {
        HistoryStack {
            buffer: Vec::new(),
            cursor: 0,
        }
    }
}

impl<T: Clone + Default> HistoryStack<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a value, reusing a slot freed by an earlier pop if there is one
    pub fn push(&mut self, value: T) {
        if self.cursor < self.buffer.len() {
            self.buffer[self.cursor] = value;
        } else {
            self.buffer.push(value);
        }
        self.cursor += 1;
    }

    /// Pop one value, falling back to history on underflow
    pub fn pop(&mut self) -> T {
        if self.buffer.is_empty() {
            return T::default();
        }
        self.cursor = match self.cursor.checked_sub(1) {
            Some(cursor) => cursor,
            None => {
                let wrapped = self.buffer.len().min(HISTORY_CAPACITY) - 1;
                tracing::debug!(slot = wrapped, "stack underflow, reusing history");
                wrapped
            }
        };
        self.buffer[self.cursor].clone()
    }

    /// Pop `num` values, returned in the order they were popped
    pub fn pop_n(&mut self, num: usize) -> Vec<T> {
        (0..num).map(|_| self.pop()).collect()
    }

    /// Number of values logically on the stack
    pub fn depth(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.cursor == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack_of(values: &[i32]) -> HistoryStack<i32> {
        let mut stack = HistoryStack::new();
        for v in values {
            stack.push(*v);
        }
        stack
    }

    #[test]
    fn test_lifo_without_underflow() {
        let mut stack = stack_of(&[1, 2, 3, 4]);
        assert_eq!(stack.depth(), 4);
        assert_eq!(stack.pop_n(4), vec![4, 3, 2, 1]);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_empty_pop_returns_default() {
        let mut stack: HistoryStack<i32> = HistoryStack::new();
        assert_eq!(stack.pop(), 0);
        assert_eq!(stack.pop_n(3), vec![0, 0, 0]);
    }

    #[test]
    fn test_underflow_reuses_history() {
        let mut stack = stack_of(&[1, 2, 3]);
        assert_eq!(stack.pop_n(3), vec![3, 2, 1]);
        // Cursor wraps to min(3, 8) - 1 and walks down again
        assert_eq!(stack.pop_n(4), vec![3, 2, 1, 3]);
    }

    #[test]
    fn test_history_window_is_lowest_eight_slots() {
        let values: Vec<i32> = (1..=10).collect();
        let mut stack = stack_of(&values);
        assert_eq!(stack.pop_n(10), vec![10, 9, 8, 7, 6, 5, 4, 3, 2, 1]);
        // Slots 9 and 10 fall outside the ring
        assert_eq!(stack.pop_n(9), vec![8, 7, 6, 5, 4, 3, 2, 1, 8]);
    }

    #[test]
    fn test_push_overwrites_popped_slot() {
        let mut stack = stack_of(&[1, 2, 3]);
        stack.pop();
        stack.pop();
        stack.push(9);
        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.pop_n(2), vec![9, 1]);
        // Slot 2 still holds the stale 3
        assert_eq!(stack.pop_n(3), vec![3, 9, 1]);
    }

    #[test]
    fn test_push_after_underflow_lands_in_ring() {
        let mut stack = stack_of(&[1, 2]);
        stack.pop_n(3); // 2, 1, then wrap to slot 1
        stack.push(7);
        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.pop(), 7);
        assert_eq!(stack.pop(), 1);
    }
}
