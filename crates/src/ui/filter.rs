/// Bounded edit buffer behind filter entry.
///
/// Only ASCII letters, digits, space, `-` and `.` are ever stored, so byte
/// offsets and character offsets coincide. `len() <= capacity - 1` and
/// `cursor() <= len()` hold after every operation; out-of-range edits are
/// no-ops.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterBuffer {
    text: String,
    cursor: usize,
    capacity: usize,
}

pub fn accepts(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == ' ' || c == '-' || c == '.'
}

impl FilterBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            text: String::with_capacity(capacity),
            cursor: 0,
            capacity,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_full(&self) -> bool {
        self.len() + 1 >= self.capacity
    }

    pub fn insert(&mut self, c: char) -> bool {
        if self.is_full() || !accepts(c) {
            return false;
        }
        self.text.insert(self.cursor, c);
        self.cursor += 1;
        true
    }

    pub fn delete_backward(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.text.remove(self.cursor);
        true
    }

    pub fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.len() {
            return false;
        }
        self.text.remove(self.cursor);
        true
    }

    pub fn delete_to_start(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.text.drain(..self.cursor);
        self.cursor = 0;
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.len() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.len();
    }
}
