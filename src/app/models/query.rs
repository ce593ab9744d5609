//! # Query Model
//!
//! Model for the company-name input line: the text itself plus a cursor,
//! with single-line editing operations. The query is replaced
//! unconditionally on every keystroke; there is no validation at edit
//! time beyond the trimmed non-emptiness check that gates submission.

/// Single-line query input model
#[derive(Debug, Clone, Default)]
pub struct QueryModel {
    text: String,
    /// Cursor position in characters (not bytes)
    cursor: usize,
}

impl QueryModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in characters
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True iff the trimmed query is non-empty
    ///
    /// This is the input half of the submission gate; the session half
    /// (not currently loading) lives on the view model.
    pub fn has_submittable_text(&self) -> bool {
        !self.text.trim().is_empty()
    }

    pub fn insert_char(&mut self, ch: char) {
        let byte_idx = self.byte_index(self.cursor);
        self.text.insert(byte_idx, ch);
        self.cursor += 1;
    }

    /// Delete the character before the cursor; returns false at line start
    pub fn delete_char_before_cursor(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let byte_idx = self.byte_index(self.cursor - 1);
        self.text.remove(byte_idx);
        self.cursor -= 1;
        true
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_cursor_to_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_to_end(&mut self) {
        self.cursor = self.char_count();
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Byte offset of the given character position
    fn byte_index(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(idx, _)| idx)
            .unwrap_or(self.text.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_model_should_start_empty() {
        let query = QueryModel::new();
        assert_eq!(query.text(), "");
        assert_eq!(query.cursor(), 0);
        assert!(!query.has_submittable_text());
    }

    #[test]
    fn query_model_should_insert_at_cursor() {
        let mut query = QueryModel::new();
        for ch in "Zomato".chars() {
            query.insert_char(ch);
        }
        assert_eq!(query.text(), "Zomato");
        assert_eq!(query.cursor(), 6);

        query.move_cursor_to_start();
        query.insert_char('*');
        assert_eq!(query.text(), "*Zomato");
        assert_eq!(query.cursor(), 1);
    }

    #[test]
    fn query_model_should_delete_before_cursor() {
        let mut query = QueryModel::new();
        for ch in "abc".chars() {
            query.insert_char(ch);
        }

        assert!(query.delete_char_before_cursor());
        assert_eq!(query.text(), "ab");

        query.move_cursor_to_start();
        assert!(!query.delete_char_before_cursor());
        assert_eq!(query.text(), "ab");
    }

    #[test]
    fn query_model_should_handle_multibyte_text() {
        let mut query = QueryModel::new();
        for ch in "日本語".chars() {
            query.insert_char(ch);
        }
        assert_eq!(query.cursor(), 3);

        query.move_cursor_left();
        query.insert_char('x');
        assert_eq!(query.text(), "日本x語");
    }

    #[test]
    fn whitespace_only_query_should_not_be_submittable() {
        let mut query = QueryModel::new();
        for ch in "   ".chars() {
            query.insert_char(ch);
        }
        assert!(!query.has_submittable_text());

        query.insert_char('Z');
        assert!(query.has_submittable_text());
    }

    #[test]
    fn cursor_should_clamp_to_text_bounds() {
        let mut query = QueryModel::new();
        query.move_cursor_left();
        query.move_cursor_right();
        assert_eq!(query.cursor(), 0);

        query.insert_char('a');
        query.move_cursor_right();
        assert_eq!(query.cursor(), 1);
    }
}
