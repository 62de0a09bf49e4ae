//! Compact range representation for zero-copy text references.
//!
//! Uses `u32` offsets to keep code-span tables small (8 bytes per entry).
//! Offsets past 4GB do not fit and are rejected, never truncated.

/// Compact byte range into a `str`.
///
/// # Example
/// ```
/// use md2steam::Range;
///
/// let text = "Hello, World!";
/// let range = Range::new(0, 5);
/// assert_eq!(range.slice(text), "Hello");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Range {
    pub start: u32,
    pub end: u32,
}

const _: () = assert!(std::mem::size_of::<Range>() == 8);

impl Range {
    /// Create a new range.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Create a range from usize offsets, or `None` if either exceeds
    /// `u32::MAX`.
    #[inline]
    pub fn try_from_usize(start: usize, end: usize) -> Option<Self> {
        Some(Self {
            start: u32::try_from(start).ok()?,
            end: u32::try_from(end).ok()?,
        })
    }

    /// Get the text this range refers to.
    ///
    /// The range must lie on char boundaries of `text`; every range handed
    /// out by this crate is delimited by ASCII bytes, so it does.
    #[inline]
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start_usize()..self.end_usize()]
    }

    #[inline]
    pub const fn start_usize(&self) -> usize {
        self.start as usize
    }

    #[inline]
    pub const fn end_usize(&self) -> usize {
        self.end as usize
    }
}
