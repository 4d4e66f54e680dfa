/// Cursor-addressed text buffer backing a form field.
///
/// Single-line by construction; multi-line content is entered through
/// `insert_newline`, which callers expose only on fields that allow it.
pub struct InputState {
    buffer: String,
    cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev = self.buffer[..self.cursor].chars().next_back().unwrap();
            self.cursor -= prev.len_utf8();
            self.buffer.remove(self.cursor);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.buffer.len() {
            self.buffer.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            let prev = self.buffer[..self.cursor].chars().next_back().unwrap();
            self.cursor -= prev.len_utf8();
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.buffer.len() {
            let next = self.buffer[self.cursor..].chars().next().unwrap();
            self.cursor += next.len_utf8();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.buffer.len();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn cursor_pos(&self) -> usize {
        self.cursor
    }

    /// (line, column) of the cursor in character terms, for terminal
    /// cursor placement in multi-line fields.
    pub fn cursor_line_col(&self) -> (usize, usize) {
        let before = &self.buffer[..self.cursor];
        let line = before.matches('\n').count();
        let col = before
            .rsplit('\n')
            .next()
            .map(|tail| tail.chars().count())
            .unwrap_or(0);
        (line, col)
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let input = InputState::new();
        assert!(input.is_empty());
        assert_eq!(input.cursor_pos(), 0);
        assert_eq!(input.as_str(), "");
    }

    #[test]
    fn test_insert_char_at_middle() {
        let mut input = InputState::new();
        input.insert_char('a');
        input.insert_char('c');
        input.move_left();
        input.insert_char('b');
        assert_eq!(input.as_str(), "abc");
        assert_eq!(input.cursor_pos(), 2);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut input = InputState::new();
        input.backspace();
        assert_eq!(input.as_str(), "");

        input.insert_char('a');
        input.move_home();
        input.backspace();
        assert_eq!(input.as_str(), "a");
        assert_eq!(input.cursor_pos(), 0);
    }

    #[test]
    fn test_delete_removes_char_at_cursor() {
        let mut input = InputState::new();
        input.insert_char('a');
        input.insert_char('b');
        input.move_home();
        input.delete();
        assert_eq!(input.as_str(), "b");
        assert_eq!(input.cursor_pos(), 0);
    }

    #[test]
    fn test_cursor_movement_clamps() {
        let mut input = InputState::new();
        input.move_left();
        assert_eq!(input.cursor_pos(), 0);
        input.insert_char('x');
        input.move_right();
        assert_eq!(input.cursor_pos(), 1);
    }

    #[test]
    fn test_multibyte_chars() {
        let mut input = InputState::new();
        input.insert_char('é');
        input.insert_char('b');
        input.move_left();
        input.move_left();
        assert_eq!(input.cursor_pos(), 0);
        input.delete();
        assert_eq!(input.as_str(), "b");
    }

    #[test]
    fn test_insert_newline() {
        let mut input = InputState::new();
        input.insert_char('a');
        input.insert_newline();
        input.insert_char('b');
        assert_eq!(input.as_str(), "a\nb");
    }

    #[test]
    fn test_cursor_line_col() {
        let mut input = InputState::new();
        assert_eq!(input.cursor_line_col(), (0, 0));
        input.insert_char('a');
        input.insert_char('b');
        assert_eq!(input.cursor_line_col(), (0, 2));
        input.insert_newline();
        input.insert_char('c');
        assert_eq!(input.cursor_line_col(), (1, 1));
    }

    #[test]
    fn test_clear_resets_cursor() {
        let mut input = InputState::new();
        input.insert_char('a');
        input.insert_char('b');
        input.clear();
        assert!(input.is_empty());
        assert_eq!(input.cursor_pos(), 0);
    }
}
