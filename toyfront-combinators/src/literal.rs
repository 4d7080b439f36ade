use crate::Parser;

/// Matches a fixed piece of text at the cursor.
///
/// The empty literal always matches and consumes nothing, as long as the cursor is
/// inside the input (the end of the input counts as inside).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Literal<'t> {
    text: &'t str,
}

impl<'t> Literal<'t> {
    pub const fn new(text: &'t str) -> Self {
        Self { text }
    }

    pub fn text(&self) -> &'t str {
        self.text
    }
}

impl Parser for Literal<'_> {
    type Output = ();

    fn parse(&self, input: &str, cursor: &mut usize) -> Option<()> {
        let rest = input.get(*cursor..)?;
        if !rest.starts_with(self.text) {
            return None;
        }

        log::trace!("matched {:?} at {}", self.text, *cursor);
        *cursor += self.text.len();
        Some(())
    }
}
