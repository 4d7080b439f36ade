use crate::Parser;
use std::fmt::{Debug, Formatter};

/// Ordered choice: the first alternative that matches wins.
///
/// Every alternative is tried from the same starting cursor. Alternatives after the
/// winning one are never invoked. If none matches, the cursor is left untouched.
pub struct Either<'a, O> {
    alternatives: Vec<Box<dyn Parser<Output = O> + 'a>>,
}

impl<'a, O> Either<'a, O> {
    /// An `Either` without alternatives, which never matches.
    pub fn new() -> Self {
        Self {
            alternatives: Vec::new(),
        }
    }

    /// Appends an alternative, tried after all the ones added before it.
    pub fn or(mut self, alternative: impl Parser<Output = O> + 'a) -> Self {
        self.alternatives.push(Box::new(alternative));
        self
    }

    pub fn len(&self) -> usize {
        self.alternatives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }
}

impl<O> Default for Either<'_, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, O> From<Vec<Box<dyn Parser<Output = O> + 'a>>> for Either<'a, O> {
    fn from(alternatives: Vec<Box<dyn Parser<Output = O> + 'a>>) -> Self {
        Self { alternatives }
    }
}

impl<O> Debug for Either<'_, O> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Either")
            .field("alternatives", &self.alternatives.len())
            .finish()
    }
}

impl<O> Parser for Either<'_, O> {
    type Output = O;

    fn parse(&self, input: &str, cursor: &mut usize) -> Option<O> {
        let start = *cursor;

        for (index, alternative) in self.alternatives.iter().enumerate() {
            *cursor = start;
            if let Some(output) = alternative.parse(input, cursor) {
                log::trace!("alternative {index} matched at {start}");
                return Some(output);
            }
        }

        *cursor = start;
        None
    }
}

#[cfg(test)]
mod tests {
    use crate::{either, Either, Literal, Parser};
    use std::cell::Cell;

    /// Counts how often it is invoked, and matches whatever `inner` matches.
    struct Probe<'c, P> {
        inner: P,
        calls: &'c Cell<usize>,
    }

    impl<P: Parser> Parser for Probe<'_, P> {
        type Output = P::Output;

        fn parse(&self, input: &str, cursor: &mut usize) -> Option<P::Output> {
            self.calls.set(self.calls.get() + 1);
            self.inner.parse(input, cursor)
        }
    }

    /// Consumes a character and then reports failure without restoring the cursor.
    struct Sloppy;

    impl Parser for Sloppy {
        type Output = ();

        fn parse(&self, _input: &str, cursor: &mut usize) -> Option<()> {
            *cursor += 1;
            None
        }
    }

    #[test]
    fn first_match_wins() {
        let p = either![Literal::new("a").map(|()| 1), Literal::new("ab").map(|()| 2)];
        let mut cursor = 0;
        assert_eq!(p.parse("ab", &mut cursor), Some(1));
        assert_eq!(cursor, 1);
    }

    #[test]
    fn later_alternative_matches() {
        let p = either![Literal::new("x"), Literal::new("y"), Literal::new("z")];
        let mut cursor = 1;
        assert!(p.matches("az", &mut cursor));
        assert_eq!(cursor, 2);
    }

    #[test]
    fn short_circuit() {
        let calls = Cell::new(0);
        let p = either![
            Literal::new("true"),
            Probe {
                inner: Literal::new("t"),
                calls: &calls,
            },
        ];

        let mut cursor = 0;
        assert!(p.matches("true", &mut cursor));
        assert_eq!(cursor, 4);
        assert_eq!(calls.get(), 0);

        // the probe is reached once the first alternative fails
        let mut cursor = 0;
        assert!(p.matches("tx", &mut cursor));
        assert_eq!(cursor, 1);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn all_fail() {
        let p = either![Literal::new(" "), Literal::new("\t"), Literal::new("\n")];
        let mut cursor = 0;
        assert!(!p.matches("x", &mut cursor));
        assert_eq!(cursor, 0);
    }

    #[test]
    fn empty_never_matches() {
        let p: Either<'_, ()> = Either::new();
        assert!(p.is_empty());
        let mut cursor = 0;
        assert!(!p.matches("", &mut cursor));
        assert_eq!(cursor, 0);
    }

    #[test]
    fn attempts_start_from_the_same_cursor() {
        let p = either![Sloppy, Literal::new("ab")];
        let mut cursor = 0;
        assert!(p.matches("ab", &mut cursor));
        assert_eq!(cursor, 2);

        let p = either![Sloppy, Sloppy];
        let mut cursor = 0;
        assert!(!p.matches("ab", &mut cursor));
        assert_eq!(cursor, 0);
    }

    #[test]
    fn from_boxed_alternatives() {
        let alternatives: Vec<Box<dyn Parser<Output = bool>>> = vec![
            Box::new(Literal::new("yes").map(|()| true)),
            Box::new(Literal::new("no").map(|()| false)),
        ];
        let p = Either::from(alternatives);
        assert_eq!(p.len(), 2);

        let mut cursor = 0;
        assert_eq!(p.parse("no", &mut cursor), Some(false));
        assert_eq!(cursor, 2);
    }
}
