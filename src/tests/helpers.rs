// Test Helper Utilities for tablemind-errors
//
// Shared fixtures for unit tests: a complete roster of failure values
// (one per kind, in declaration order) and an in-memory log capture for
// asserting on structured logging output without touching global state.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::MakeWriter;

use crate::failure::DomainFailure;

/// One failure of every kind, in declaration order, with representative
/// payloads for the kinds that carry them.
pub fn one_of_each() -> Vec<DomainFailure> {
    vec![
        DomainFailure::no_character(),
        DomainFailure::no_active_brew(),
        DomainFailure::external_import_error("import rejected the sheet"),
        DomainFailure::invalid_argument("expected a number"),
        DomainFailure::evaluation_error("division by zero"),
        DomainFailure::function_requires_character(None),
        DomainFailure::outdated_sheet(None),
        DomainFailure::no_spell_dc(),
        DomainFailure::no_spell_ab(),
        DomainFailure::invalid_save_type(),
        DomainFailure::consumable_not_found(),
        DomainFailure::counter_out_of_bounds(),
        DomainFailure::no_reset(),
        DomainFailure::invalid_spell_level(),
        DomainFailure::no_selection_elements(None),
        DomainFailure::selection_cancelled(),
        DomainFailure::login_failure(),
        DomainFailure::insert_failure("duplicate key"),
        DomainFailure::combat_not_found(),
        DomainFailure::requires_context(),
        DomainFailure::channel_in_combat(),
        DomainFailure::combat_channel_not_found(),
        DomainFailure::no_combatants(),
    ]
}

/// Run `f` with a scoped subscriber and return everything it logged.
///
/// Uses a thread-local default subscriber, so parallel tests never see
/// each other's output.
pub fn capture_logs(f: impl FnOnce()) -> String {
    let capture = LogCapture::new();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(capture.clone())
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    capture.contents()
}

/// In-memory writer for capturing log output in tests.
#[derive(Clone, Default)]
pub struct LogCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded.
    pub fn contents(&self) -> String {
        let buffer = self.buffer.lock().unwrap();
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

impl Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
