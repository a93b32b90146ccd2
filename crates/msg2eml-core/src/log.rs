//! The progress/diagnostic log sink.
//!
//! One conversion emits zero or more human-readable lines through a single
//! sink, in call order. This is the only contractual side channel of the
//! converter; `tracing` events are emitted alongside it for hosts that have
//! a subscriber installed.

/// Receives human-readable progress and diagnostic lines.
pub trait LogSink {
    /// Delivers one line. Expected to be fast and non-blocking.
    fn line(&mut self, text: &str);
}

/// Adapts any `FnMut(&str)` callback into a [`LogSink`].
#[derive(Debug)]
pub struct FnSink<F: FnMut(&str)>(pub F);

impl<F: FnMut(&str)> LogSink for FnSink<F> {
    fn line(&mut self, text: &str) {
        (self.0)(text);
    }
}

/// Collects lines for later inspection.
impl LogSink for Vec<String> {
    fn line(&mut self, text: &str) {
        self.push(text.to_string());
    }
}

/// Sink that forwards every line to `tracing::info!`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn line(&mut self, text: &str) {
        tracing::info!("{text}");
    }
}

/// Sink that discards all lines.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl LogSink for NullSink {
    fn line(&mut self, _text: &str) {}
}

/// Indentation prefix for one nesting level: two spaces per level.
pub(crate) fn indent(depth: usize) -> String {
    "  ".repeat(depth)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fn_sink_forwards_lines() {
        let mut lines = Vec::new();
        {
            let mut sink = FnSink(|text: &str| lines.push(text.to_string()));
            sink.line("first");
            sink.line("second");
        }
        assert_eq!(lines, vec!["first", "second"]);
    }

    #[test]
    fn test_vec_sink_collects_lines() {
        let mut lines: Vec<String> = Vec::new();
        lines.line("only");
        assert_eq!(lines, vec!["only"]);
    }

    #[test]
    fn test_indent() {
        assert_eq!(indent(0), "");
        assert_eq!(indent(2), "    ");
    }
}
