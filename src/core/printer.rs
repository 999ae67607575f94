use crate::adapters::StdoutSink;
use crate::core::OutputSink;
use crate::domain::model::{format_message, NonNegativeNumber};
use crate::utils::error::Result;

pub struct NumberPrinter<S: OutputSink> {
    sink: S,
}

impl<S: OutputSink> NumberPrinter<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Validates `n` and writes one message line for it.
    ///
    /// Negative values fail with `PrinterError::InvalidArgument` before
    /// anything reaches the sink.
    pub fn print_number(&mut self, n: i64) -> Result<()> {
        let number = match NonNegativeNumber::try_from(n) {
            Ok(number) => number,
            Err(e) => {
                tracing::debug!(value = n, "rejected print_number argument");
                return Err(e);
            }
        };

        tracing::debug!(value = n, "printing number");
        self.sink.write_line(&format_message(number))
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

/// Prints the message for `n` to stdout.
pub fn print_number(n: i64) -> Result<()> {
    NumberPrinter::new(StdoutSink).print_number(n)
}
