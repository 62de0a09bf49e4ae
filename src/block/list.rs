//! List nesting state.
//!
//! Open lists form a stack of frames whose indents strictly increase from
//! bottom to top. Every push writes an opening tag and every pop writes the
//! matching closing tag, so tags always balance.

use smallvec::SmallVec;

use crate::render::BbcodeWriter;

/// Kind of list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `-`, `+` or `*` items, rendered as `[list]`.
    Unordered,
    /// `1.` items, rendered as `[olist]`.
    Ordered,
}

impl ListKind {
    /// BBCode tag name.
    #[inline]
    pub const fn tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "list",
            ListKind::Ordered => "olist",
        }
    }
}

/// One open list nesting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListFrame {
    pub kind: ListKind,
    pub indent: usize,
}

/// Stack of open lists.
#[derive(Debug, Default)]
pub struct ListStack {
    frames: SmallVec<[ListFrame; 8]>,
}

impl ListStack {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Innermost open frame.
    #[inline]
    pub fn top(&self) -> Option<ListFrame> {
        self.frames.last().copied()
    }

    /// Reconcile the stack with an item of `kind` at `indent`, writing any
    /// closing and opening tags this needs.
    pub fn open_item(&mut self, kind: ListKind, indent: usize, writer: &mut BbcodeWriter) {
        let Some(top) = self.top() else {
            self.push(kind, indent, writer);
            return;
        };

        if indent > top.indent {
            self.push(kind, indent, writer);
        } else if indent < top.indent {
            while self.top().is_some_and(|frame| frame.indent > indent) {
                self.pop(writer);
            }
            match self.top() {
                Some(frame) if frame.indent == indent => {
                    if frame.kind != kind {
                        self.pop(writer);
                        self.push(kind, indent, writer);
                    }
                }
                // Dedented to a level that was never opened.
                _ => self.push(kind, indent, writer),
            }
        } else if top.kind != kind {
            self.pop(writer);
            self.push(kind, indent, writer);
        }
    }

    /// Close every open list, innermost first.
    pub fn close_all(&mut self, writer: &mut BbcodeWriter) {
        while !self.frames.is_empty() {
            self.pop(writer);
        }
    }

    fn push(&mut self, kind: ListKind, indent: usize, writer: &mut BbcodeWriter) {
        self.frames.push(ListFrame { kind, indent });
        writer.list_start(kind);
    }

    fn pop(&mut self, writer: &mut BbcodeWriter) {
        if let Some(frame) = self.frames.pop() {
            writer.list_end(frame.kind);
        }
    }
}
