//! Output buffer for the line-scanning block passes.

/// Accumulates the output of a pass that walks its input line by line.
///
/// Passed-through lines are separated by `\n`. Structural markup is appended
/// directly after whatever came before it, so a block that replaces several
/// lines leaves no line breaks of its own behind.
#[derive(Debug, Default)]
pub struct LineWriter {
    out: String,
    pending_newline: bool,
}

impl LineWriter {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            out: String::with_capacity(capacity),
            pending_newline: false,
        }
    }

    /// Append markup produced by the pass.
    pub fn markup(&mut self, markup: &str) {
        self.flush_newline();
        self.out.push_str(markup);
    }

    /// Append an input line that the pass leaves unchanged.
    pub fn line(&mut self, line: &str) {
        self.flush_newline();
        self.out.push_str(line);
        self.pending_newline = true;
    }

    /// Finish the pass. A passed-through final line gets no trailing break.
    pub fn finish(self) -> String {
        self.out
    }

    fn flush_newline(&mut self) {
        if self.pending_newline {
            self.out.push('\n');
            self.pending_newline = false;
        }
    }
}
