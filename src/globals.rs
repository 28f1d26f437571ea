//! Global diagnostic instances.
//!
//! The firmware runs on a single task; these statics exist so the handshake,
//! the acquisition loop and the log drain can share them without threading
//! references through the entry point.

use crate::fault::FaultState;
use crate::logging::LogStream;

/// Diagnostic log ring, drained to the diagnostic UART between cycles.
pub static DIAG_LOG: LogStream = LogStream::new();

/// Runtime faults (rejected configuration, failed reads).
pub static FAULTS: FaultState = FaultState::new();
