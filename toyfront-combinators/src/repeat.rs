use crate::Parser;

/// Zero or more `element`s, each followed by a `separator`.
///
/// Matching alternates between `element` and `separator` and stops at the first one
/// that fails. A `Repeat` never fails itself: zero elements is a successful match.
///
/// The separator after the last element is optional. When `element` matches but the
/// `separator` after it does not, that element is kept and the cursor ends right after
/// it. The output is the number of elements accepted.
///
/// An iteration that consumes nothing ends the loop (after counting that element once),
/// so a pair of parsers that both match the empty string cannot loop forever.
#[derive(Debug, Clone, Copy)]
pub struct Repeat<E, S> {
    element: E,
    separator: S,
}

impl<E, S> Repeat<E, S> {
    pub fn new(element: E, separator: S) -> Self {
        Self { element, separator }
    }
}

impl<E: Parser, S: Parser> Parser for Repeat<E, S> {
    type Output = usize;

    fn parse(&self, input: &str, cursor: &mut usize) -> Option<usize> {
        let start = *cursor;
        let mut count = 0;

        loop {
            let iteration_start = *cursor;
            if !self.element.matches(input, cursor) {
                *cursor = iteration_start;
                break;
            }
            count += 1;

            let after_element = *cursor;
            if !self.separator.matches(input, cursor) {
                *cursor = after_element;
                break;
            }

            if *cursor == iteration_start {
                break;
            }
        }

        log::trace!("repeated {count} times from {start} to {}", *cursor);
        Some(count)
    }
}
