//! Cursor over the unconsumed suffix of the input

/// Line/column position of the cursor
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pos {
    /// Byte offset into the original input
    pub offset: usize,
    /// Line number (1-based)
    pub line: usize,
    /// Column number (1-based, in characters)
    pub column: usize,
}

impl Default for Pos {
    fn default() -> Self {
        Self {
            offset: 0,
            line: 1,
            column: 1,
        }
    }
}

/// Holds the remaining input and the position of its first character.
///
/// `advance` is the only mutating operation. Counts are byte lengths, which
/// callers take from `str::find` so they always land on a char boundary.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    rest: &'a str,
    pos: Pos,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            rest: input,
            pos: Pos::default(),
        }
    }

    /// Remove and return the first `n` bytes of the remaining input.
    ///
    /// A count past the end, or inside a multi-byte character, consumes the
    /// whole remainder.
    pub fn advance(&mut self, n: usize) -> &'a str {
        let (head, tail) = self.rest.split_at_checked(n).unwrap_or((self.rest, ""));
        self.track(head);
        self.rest = tail;
        head
    }

    fn track(&mut self, consumed: &str) {
        self.pos.offset += consumed.len();
        for ch in consumed.chars() {
            if ch == '\n' {
                self.pos.line += 1;
                self.pos.column = 1;
            } else {
                self.pos.column += 1;
            }
        }
    }

    pub fn remaining(&self) -> &'a str {
        self.rest
    }

    pub fn is_eof(&self) -> bool {
        self.rest.is_empty()
    }

    pub fn peek(&self) -> Option<char> {
        self.rest.chars().next()
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        self.rest.starts_with(prefix)
    }

    /// Byte index of the next `needle` in the remaining input
    pub fn find(&self, needle: char) -> Option<usize> {
        self.rest.find(needle)
    }

    pub fn position(&self) -> Pos {
        self.pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_splits_remaining() {
        let mut cursor = Cursor::new("hello world");
        assert_eq!(cursor.advance(5), "hello");
        assert_eq!(cursor.remaining(), " world");
        assert_eq!(cursor.peek(), Some(' '));
    }

    #[test]
    fn test_advance_zero() {
        let mut cursor = Cursor::new("abc");
        assert_eq!(cursor.advance(0), "");
        assert_eq!(cursor.remaining(), "abc");
        assert_eq!(cursor.position(), Pos::default());
    }

    #[test]
    fn test_advance_past_end_consumes_all() {
        let mut cursor = Cursor::new("abc");
        assert_eq!(cursor.advance(10), "abc");
        assert!(cursor.is_eof());
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn test_position_tracks_lines_and_columns() {
        let mut cursor = Cursor::new("ab\ncd\néf");
        let _ = cursor.advance(4);
        assert_eq!(cursor.position().line, 2);
        assert_eq!(cursor.position().column, 2);

        let _ = cursor.advance(cursor.find('f').unwrap_or_default());
        let pos = cursor.position();
        assert_eq!(pos.line, 3);
        assert_eq!(pos.column, 2);
        assert_eq!(pos.offset, "ab\ncd\né".len());
    }

    #[test]
    fn test_find_and_starts_with() {
        let cursor = Cursor::new("text</a>");
        assert_eq!(cursor.find('<'), Some(4));
        assert_eq!(cursor.find('#'), None);
        assert!(cursor.starts_with("text"));
        assert!(!cursor.starts_with("</"));
    }
}
