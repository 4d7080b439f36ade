use crate::Parser;

/// A text buffer together with the cursor of one top-level parse.
///
/// The cursor is only ever lent out to one parser at a time, through [`Input::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Input<'a> {
    text: &'a str,
    position: usize,
}

impl<'a> Input<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, position: 0 }
    }

    /// Runs `parser` at the current position, advancing past whatever it consumed.
    pub fn run<P: Parser + ?Sized>(&mut self, parser: &P) -> Option<P::Output> {
        let start = self.position;
        let output = parser.parse(self.text, &mut self.position);
        debug_assert!(
            output.is_some() || self.position == start,
            "parser failed but moved the cursor from {start} to {}",
            self.position
        );
        output
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    /// The part of the text that has not been consumed yet.
    pub fn rest(&self) -> &'a str {
        self.text.get(self.position..).unwrap_or_default()
    }

    pub fn is_exhausted(&self) -> bool {
        self.position >= self.text.len()
    }
}
