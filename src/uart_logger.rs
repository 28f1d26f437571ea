//! Diagnostic UART output.
//!
//! The host UART carries only the data protocol. Diagnostics go out on a
//! separate TX-only UART to an external USB-UART adapter.
//!
//! # Hardware Setup
//!
//! ```text
//! ESP32-S3 GPIO17 (UART1 TX) ──────▶ USB-UART RX
//!                                     └─▶ PC Serial Monitor
//! ```

use core::fmt::Write;

use crate::fault::{FaultSnapshot, FaultState};
use crate::logging::{LogEntry, LogStream};

#[cfg(target_os = "espidf")]
use esp_idf_svc::hal::gpio;
#[cfg(target_os = "espidf")]
use esp_idf_svc::hal::peripheral::Peripheral;
#[cfg(target_os = "espidf")]
use esp_idf_svc::hal::uart::{self, UartTxDriver};

/// UART configuration for diagnostics.
pub struct UartLoggerConfig {
    pub baud_rate: u32,
    pub tx_pin: u8,
}

impl Default for UartLoggerConfig {
    fn default() -> Self {
        Self {
            baud_rate: 115200,
            tx_pin: 17,
        }
    }
}

/// Format a log entry as `[stamp] LEVEL: message\r\n`.
pub fn format_log_entry(entry: &LogEntry, out: &mut dyn Write) -> core::fmt::Result {
    write!(
        out,
        "[{:8}] {}: {}\r\n",
        entry.stamp,
        entry.level.as_str(),
        entry.text()
    )
}

/// Drain up to `max` entries into `out`, then report dropped messages.
///
/// Bounded so a burst of diagnostics cannot stretch an acquisition cycle.
/// Returns the number of entries written.
pub fn drain<const N: usize>(stream: &LogStream<N>, out: &mut dyn Write, max: usize) -> usize {
    let mut written = 0;
    while written < max {
        let Some(entry) = stream.drain() else { break };
        let _ = format_log_entry(&entry, out);
        written += 1;
    }

    let dropped = stream.dropped();
    if dropped > 0 {
        let _ = write!(out, "[WARN] Dropped: {}\r\n", dropped);
        stream.reset_dropped();
    }

    written
}

/// Format a fault snapshot as `[FAULT] ...\r\n`.
pub fn format_fault_summary(snapshot: &FaultSnapshot, out: &mut dyn Write) -> core::fmt::Result {
    if !snapshot.active {
        return write!(out, "[FAULT] none\r\n");
    }
    write!(
        out,
        "[FAULT] last={:?} data={} count={}\r\n",
        snapshot.code, snapshot.data, snapshot.count
    )
}

/// Write a one-line summary of `faults`.
pub fn report_faults(faults: &FaultState, out: &mut dyn Write) {
    let _ = format_fault_summary(&faults.snapshot(), out);
}

/// Initialize UART1 TX-only for diagnostic output.
#[cfg(target_os = "espidf")]
pub fn init_uart_logger<'d>(
    uart: impl Peripheral<P = esp_idf_svc::hal::uart::UART1> + 'd,
    tx_pin: impl Peripheral<P = impl gpio::OutputPin> + 'd,
    config: &UartLoggerConfig,
) -> Result<DiagUart<'d>, esp_idf_svc::sys::EspError> {
    let uart_config = uart::config::Config::default()
        .baudrate(esp_idf_svc::hal::units::Hertz(config.baud_rate));

    let tx = UartTxDriver::new(
        uart,
        tx_pin,
        Option::<gpio::AnyIOPin>::None, // CTS
        Option::<gpio::AnyIOPin>::None, // RTS
        &uart_config,
    )?;
    Ok(DiagUart { tx })
}

/// `fmt::Write` adapter over the diagnostic UART.
#[cfg(target_os = "espidf")]
pub struct DiagUart<'d> {
    tx: UartTxDriver<'d>,
}

#[cfg(target_os = "espidf")]
impl Write for DiagUart<'_> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        // Diagnostics are best effort
        let _ = self.tx.write(s.as_bytes());
        Ok(())
    }
}
