/// Destination for the diagnostic records that mirror on-screen log lines.
pub trait DiagnosticSink {
    fn info(&self, message: &str);
}

/// Writes records through the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn info(&self, message: &str) {
        log::info!("{}", message);
    }
}
