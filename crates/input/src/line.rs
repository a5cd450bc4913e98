//! Line editor for the prompt.

use arrayvec::ArrayString;

use crate::map::LineAction;

/// Longest line the prompt accepts. Extra characters are dropped.
pub const MAX_LINE_LEN: usize = 32;

/// Result of an action that ends the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEvent {
    Submitted(String),
    Cancelled,
}

/// The line currently being typed.
#[derive(Debug, Clone, Default)]
pub struct LineEditor {
    buf: ArrayString<MAX_LINE_LEN>,
}

impl LineEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        self.buf.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Apply one action. Returns an event when the line is submitted or cancelled,
    /// and the editor is empty again afterwards.
    pub fn apply(&mut self, action: LineAction) -> Option<LineEvent> {
        match action {
            LineAction::Insert(c) => {
                // Full buffer: ignore the character.
                let _ = self.buf.try_push(c);
                None
            }
            LineAction::Backspace => {
                self.buf.pop();
                None
            }
            LineAction::Submit => {
                let line = self.buf.as_str().to_owned();
                self.buf.clear();
                Some(LineEvent::Submitted(line))
            }
            LineAction::Cancel => {
                self.buf.clear();
                Some(LineEvent::Cancelled)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(editor: &mut LineEditor, s: &str) {
        for c in s.chars() {
            assert_eq!(editor.apply(LineAction::Insert(c)), None);
        }
    }

    #[test]
    fn test_type_and_submit() {
        let mut editor = LineEditor::new();
        type_str(&mut editor, "2 3 d");
        assert_eq!(editor.as_str(), "2 3 d");
        assert_eq!(
            editor.apply(LineAction::Submit),
            Some(LineEvent::Submitted("2 3 d".to_string()))
        );
        assert!(editor.is_empty());
    }

    #[test]
    fn test_backspace() {
        let mut editor = LineEditor::new();
        type_str(&mut editor, "12");
        editor.apply(LineAction::Backspace);
        assert_eq!(editor.as_str(), "1");
        editor.apply(LineAction::Backspace);
        editor.apply(LineAction::Backspace);
        assert!(editor.is_empty());
    }

    #[test]
    fn test_cancel_clears() {
        let mut editor = LineEditor::new();
        type_str(&mut editor, "width");
        assert_eq!(editor.apply(LineAction::Cancel), Some(LineEvent::Cancelled));
        assert!(editor.is_empty());
    }

    #[test]
    fn test_overflow_is_dropped() {
        let mut editor = LineEditor::new();
        type_str(&mut editor, &"9".repeat(MAX_LINE_LEN + 5));
        assert_eq!(editor.as_str().len(), MAX_LINE_LEN);
    }
}
