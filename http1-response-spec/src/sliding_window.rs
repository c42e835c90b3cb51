use crate::{CR, LF};

//
//
//
/// Tracks whether the most recently consumed items end with a fixed delimiter.
///
/// Flag `i` is set iff the last `i + 1` items equal the first `i + 1` items of the
/// delimiter, so the delimiter is matched once the last flag is set. Matched items are not
/// buffered here; the caller keeps its own copy of the raw input.
#[derive(Debug, Clone)]
pub struct SlidingWindowMask<T, F = fn(&T, &T) -> bool> {
    mask: Box<[T]>,
    windows: Box<[bool]>,
    eq: F,
}

impl<T> SlidingWindowMask<T>
where
    T: PartialEq,
{
    pub fn new(mask: impl Into<Vec<T>>) -> Option<Self> {
        Self::with_eq(mask, <T as PartialEq>::eq)
    }
}

impl SlidingWindowMask<u8> {
    pub fn crlf() -> Self {
        Self {
            mask: Box::new([CR, LF]),
            windows: Box::new([false, false]),
            eq: <u8 as PartialEq>::eq,
        }
    }
}

impl<T, F> SlidingWindowMask<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    /// Returns `None` for an empty delimiter.
    pub fn with_eq(mask: impl Into<Vec<T>>, eq: F) -> Option<Self> {
        let mask = mask.into().into_boxed_slice();
        if mask.is_empty() {
            return None;
        }
        let windows = vec![false; mask.len()].into_boxed_slice();

        Some(Self { mask, windows, eq })
    }

    pub fn len(&self) -> usize {
        self.mask.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Shifts the window by one item and returns whether the whole delimiter now matches.
    pub fn slide(&mut self, item: &T) -> bool {
        // Each flag is computed from the previous flag as it was before this item.
        let mut previous = true;
        for (window, expected) in self.windows.iter_mut().zip(self.mask.iter()) {
            let current = *window;
            *window = previous && (self.eq)(item, expected);
            previous = current;
        }

        self.is_masked()
    }

    pub fn is_masked(&self) -> bool {
        self.windows[self.windows.len() - 1]
    }

    pub fn reset(&mut self) {
        self.windows.iter_mut().for_each(|window| *window = false);
    }
}
