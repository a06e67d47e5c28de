//! Logging collaborator for the trigger lifecycle.
//!
//! Every step logs through one [`ActionLog`] handle selected once at
//! startup; call sites never branch on which sink is active. The preferred
//! sink is a `tracing` subscriber ([`ServiceLog`]); when the subscriber
//! cannot be installed (one is already registered by an embedding process,
//! for instance) the console fallback [`ConsoleLog`] keeps the exact same
//! sequence of log points alive, so observability is never silently dropped.

use std::io::Write;
use std::sync::Mutex;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// The one capability the trigger needs: record a labeled textual event for
/// a named service.
pub trait ActionLog {
    /// Record a normal lifecycle event.
    fn action(&self, message: &str);
    /// Record a failure. Terminal failures are still followed by process
    /// exit in the CLI layer; this only reports them.
    fn failure(&self, message: &str);
}

/// Install the fmt subscriber and hand back the appropriate collaborator.
///
/// `RUST_LOG` is honored when set; the default level is `info` so every
/// request stays traceable from the log alone, out of the box.
pub fn init(service: &str) -> Box<dyn ActionLog> {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();

    match installed {
        Ok(()) => Box::new(ServiceLog::new(service)),
        Err(_) => Box::new(ConsoleLog::new(service)),
    }
}

/// Primary collaborator: events flow through `tracing` with the service name
/// attached as a field.
pub struct ServiceLog {
    service: String,
}

impl ServiceLog {
    pub fn new(service: &str) -> Self {
        Self {
            service: service.to_string(),
        }
    }
}

impl ActionLog for ServiceLog {
    fn action(&self, message: &str) {
        info!(service = %self.service, "{}", message);
    }

    fn failure(&self, message: &str) {
        error!(service = %self.service, "{}", message);
    }
}

/// Console fallback: timestamped `LEVEL [service] message` lines, stdout by
/// default. The writer is injectable so tests can capture the output.
pub struct ConsoleLog {
    service: String,
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleLog {
    pub fn new(service: &str) -> Self {
        Self::with_writer(service, Box::new(std::io::stdout()))
    }

    pub fn with_writer(service: &str, out: Box<dyn Write + Send>) -> Self {
        Self {
            service: service.to_string(),
            out: Mutex::new(out),
        }
    }

    fn write_line(&self, level: &str, message: &str) {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        if let Ok(mut out) = self.out.lock() {
            let _ = writeln!(out, "{timestamp} {level} [{}] {message}", self.service);
        }
    }
}

impl ActionLog for ConsoleLog {
    fn action(&self, message: &str) {
        self.write_line("INFO", message);
    }

    fn failure(&self, message: &str) {
        self.write_line("ERROR", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    /// `Write` handle whose contents stay readable after being boxed into
    /// the logger.
    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn console_action_lines_carry_level_service_and_message() {
        let buf = SharedBuf::default();
        let log = ConsoleLog::with_writer("trigger-vectorization-pipeline", Box::new(buf.clone()));

        log.action("Starting vectorization pipeline trigger");

        let line = buf.contents();
        assert!(line.contains("INFO"));
        assert!(line.contains("[trigger-vectorization-pipeline]"));
        assert!(line.contains("Starting vectorization pipeline trigger"));
    }

    #[test]
    fn console_failures_log_at_error_level() {
        let buf = SharedBuf::default();
        let log = ConsoleLog::with_writer("svc", Box::new(buf.clone()));

        log.failure("Error sending request: connection refused");

        let line = buf.contents();
        assert!(line.contains("ERROR"));
        assert!(line.contains("connection refused"));
    }

    #[test]
    fn console_log_preserves_event_order() {
        let buf = SharedBuf::default();
        let log = ConsoleLog::with_writer("svc", Box::new(buf.clone()));

        log.action("first");
        log.action("second");
        log.failure("third");

        let out = buf.contents();
        let first = out.find("first").unwrap();
        let second = out.find("second").unwrap();
        let third = out.find("third").unwrap();
        assert!(first < second && second < third);
    }
}
