use crate::utils::error::Result;

/// Destination for the lines produced by `print_number`.
pub trait OutputSink {
    /// Writes one line. Implementations append the line terminator.
    fn write_line(&mut self, line: &str) -> Result<()>;
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn write_line(&mut self, line: &str) -> Result<()> {
        (**self).write_line(line)
    }
}
