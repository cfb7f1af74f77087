// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Indentation-aware, append-only text buffer used by every generator.
//!
//! The buffer stores the fragments exactly as written. [`EmissionBuffer::undo`] may
//! drop fragments from the tail, but nothing ever reorders them, so
//! [`EmissionBuffer::materialize`] always returns text in append order.
//!
//! Underflow (undoing more fragments than exist, or closing a block at depth zero)
//! is a bug in the calling generator. Debug builds fail the `debug_assert!`;
//! release builds clamp at the start of the buffer.

/// One indentation level.
pub const INDENT: &str = "    ";

/// Append-only fragment buffer with an indentation depth.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmissionBuffer {
    fragments: Vec<String>,
    depth: usize,
}

impl EmissionBuffer {
    /// Creates an empty buffer at depth zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty buffer starting at `depth`.
    ///
    /// Used for auxiliary sections that are later [`append`](Self::append)ed into a
    /// buffer already nested `depth` levels deep.
    pub fn with_depth(depth: usize) -> Self {
        Self {
            fragments: Vec::new(),
            depth,
        }
    }

    /// Current indentation depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of fragments currently held.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Returns `true` when nothing has been written (or everything was undone).
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Appends `fragment` verbatim.
    pub fn write(&mut self, fragment: impl Into<String>) {
        self.fragments.push(fragment.into());
    }

    /// Appends `indent + text + "\n"` as one fragment.
    ///
    /// Empty text yields a bare newline so blank lines carry no trailing whitespace.
    pub fn write_line(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        if text.is_empty() {
            self.write("\n");
        } else {
            self.write(format!("{}{text}\n", INDENT.repeat(self.depth)));
        }
    }

    /// Writes a blank line.
    pub fn blank_line(&mut self) {
        self.write("\n");
    }

    /// Writes `header {` and enters a new indentation level.
    pub fn open_block(&mut self, header: impl AsRef<str>) {
        self.write_line(format!("{} {{", header.as_ref()));
        self.depth += 1;
    }

    /// Leaves the current indentation level and writes `}`.
    pub fn close_block(&mut self) {
        self.close_block_with("");
    }

    /// Leaves the current indentation level and writes `}` followed by `trailer`.
    pub fn close_block_with(&mut self, trailer: &str) {
        debug_assert!(self.depth > 0, "close_block at depth 0");
        self.depth = self.depth.saturating_sub(1);
        self.write_line(format!("}}{trailer}"));
    }

    /// Removes the last `n` fragments.
    pub fn undo(&mut self, n: usize) {
        debug_assert!(
            n <= self.fragments.len(),
            "undo({n}) past the start of a buffer holding {} fragments",
            self.fragments.len()
        );
        let keep = self.fragments.len().saturating_sub(n);
        self.fragments.truncate(keep);
    }

    /// Writes each item followed by `separator`, then drops the trailing separator.
    pub fn write_separated<I, T>(&mut self, items: I, separator: &str)
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut wrote_any = false;
        for item in items {
            self.write(item);
            self.write(separator);
            wrote_any = true;
        }
        if wrote_any {
            self.undo(1);
        }
    }

    /// Inlines `other`'s materialized text as a single fragment.
    pub fn append(&mut self, other: &Self) {
        self.write(other.materialize());
    }

    /// Concatenates all fragments in append order.
    pub fn materialize(&self) -> String {
        self.fragments.concat()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocks_indent_their_contents() {
        let mut buf = EmissionBuffer::new();
        buf.open_block("pub mod demo");
        buf.write_line("use super::*;");
        buf.blank_line();
        buf.open_block("pub struct Point");
        buf.write_line("pub x: f32,");
        buf.close_block();
        buf.close_block();
        assert_eq!(
            buf.materialize(),
            "pub mod demo {\n    use super::*;\n\n    pub struct Point {\n        pub x: f32,\n    }\n}\n"
        );
        assert_eq!(buf.depth(), 0);
    }

    #[test]
    fn close_block_with_trailer() {
        let mut buf = EmissionBuffer::new();
        buf.open_block("let v = Foo");
        buf.close_block_with(";");
        assert_eq!(buf.materialize(), "let v = Foo {\n};\n");
    }

    #[test]
    fn undo_drops_tail_fragments_only() {
        let mut buf = EmissionBuffer::new();
        buf.write("a");
        buf.write("b");
        buf.write("c");
        buf.undo(2);
        buf.write("d");
        assert_eq!(buf.materialize(), "ad");
    }

    #[test]
    fn write_separated_has_no_trailing_separator() {
        let mut buf = EmissionBuffer::new();
        buf.write("(");
        buf.write_separated(["x", "y", "z"], ", ");
        buf.write(")");
        assert_eq!(buf.materialize(), "(x, y, z)");

        let mut empty = EmissionBuffer::new();
        empty.write("(");
        empty.write_separated(Vec::<String>::new(), ", ");
        empty.write(")");
        assert_eq!(empty.materialize(), "()");
    }

    #[test]
    fn append_inlines_nested_buffer() {
        let mut main = EmissionBuffer::new();
        main.open_block("pub mod outer");
        let mut aux = EmissionBuffer::with_depth(main.depth());
        aux.open_block("pub mod inner");
        aux.write_line("pub fn f() {}");
        aux.close_block();
        main.append(&aux);
        main.close_block();
        assert_eq!(
            main.materialize(),
            "pub mod outer {\n    pub mod inner {\n        pub fn f() {}\n    }\n}\n"
        );
    }

    #[test]
    fn materialize_is_idempotent() {
        let mut buf = EmissionBuffer::new();
        buf.write_line("fn main() {}");
        assert_eq!(buf.materialize(), buf.materialize());
    }

    #[test]
    #[should_panic(expected = "past the start")]
    #[cfg(debug_assertions)]
    fn undo_underflow_fails_in_debug() {
        let mut buf = EmissionBuffer::new();
        buf.write("only");
        buf.undo(2);
    }
}
