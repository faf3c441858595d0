//! Explicit LIFO stack used to simulate recursive calls.
//!
//! The backing storage may hold more slots than the logical stack. Slots
//! above the cursor are left over from earlier pushes and get overwritten
//! by later ones, so the storage only grows when the logical depth reaches
//! a new maximum.

/// A growable stack of pending subproblems with a separate top-of-stack cursor.
#[derive(Debug, Clone)]
pub struct CallStack<T> {
    slots: Vec<T>,
    // Number of live entries; the top sits at `depth - 1`.
    depth: usize,
}

impl<T: Copy> CallStack<T> {
    /// Creates a stack holding exactly one pending value.
    pub fn with_root(value: T) -> Self {
        Self {
            slots: vec![value],
            depth: 1,
        }
    }

    /// Pushes a value at the slot just above the cursor.
    pub fn push(&mut self, value: T) {
        if self.depth == self.slots.len() {
            self.slots.push(value);
        } else {
            self.slots[self.depth] = value;
        }
        self.depth += 1;
    }

    /// Reads the top value and moves the cursor down.
    ///
    /// The slot itself is kept for reuse.
    pub fn pop(&mut self) -> Option<T> {
        let top = self.top()?;
        self.depth = top;
        Some(self.slots[top])
    }

    /// Index of the top-of-stack slot, or `None` when the stack is empty.
    pub fn top(&self) -> Option<usize> {
        self.depth.checked_sub(1)
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of backing slots, live or scratch.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.depth == 0
    }
}
