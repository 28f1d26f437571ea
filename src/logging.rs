//! Diagnostic logging for the PASC firmware.
//!
//! The host UART carries the data protocol, so diagnostics never go there.
//! They are queued in a lock-free ring and drained to the diagnostic UART
//! between acquisition cycles:
//!
//! ```text
//! handshake / loop        LogStream             diagnostic UART
//! ────────────────        ─────────             ───────────────
//! diag_warn!() ─────────▶ [L0][L1][L2] ───────▶ "[stamp] WARN: ..."
//! fixed stack buffer      drop when full        uart_logger::drain
//! ```
//!
//! - Pushing never blocks and never allocates.
//! - Messages are truncated to [`MAX_MSG_LEN`] bytes.
//! - Messages are dropped (and counted) when the ring is full.

use core::cell::UnsafeCell;
use core::sync::atomic::{AtomicU32, Ordering};

/// Maximum message length.
pub const MAX_MSG_LEN: usize = 120;

/// Log ring size (number of entries).
pub const LOG_BUFFER_SIZE: usize = 32;

/// Log level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum LogLevel {
    Error = 0,
    Warn = 1,
    Info = 2,
    Debug = 3,
}

impl LogLevel {
    /// Convert to string for output.
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }
}

/// A single log entry.
#[derive(Clone, Copy)]
#[repr(C)]
pub struct LogEntry {
    /// Acquisition cycle the entry was logged in (0 during the handshake).
    pub stamp: u32,
    pub level: LogLevel,
    /// Message length.
    pub len: u8,
    /// Message bytes (not null-terminated).
    pub msg: [u8; MAX_MSG_LEN],
}

impl LogEntry {
    const EMPTY: LogEntry = LogEntry {
        stamp: 0,
        level: LogLevel::Info,
        len: 0,
        msg: [0; MAX_MSG_LEN],
    };

    /// Message text, or a marker if the bytes are not UTF-8.
    pub fn text(&self) -> &str {
        core::str::from_utf8(&self.msg[..self.len as usize]).unwrap_or("<invalid utf8>")
    }
}

impl Default for LogEntry {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Lock-free log ring: one producer, one consumer.
pub struct LogStream<const N: usize = LOG_BUFFER_SIZE> {
    entries: UnsafeCell<[LogEntry; N]>,
    write_idx: AtomicU32,
    read_idx: AtomicU32,
    dropped: AtomicU32,
}

// SAFETY: the producer only writes the slot at write_idx after checking it is
// free; the single consumer only reads slots below write_idx.
unsafe impl<const N: usize> Sync for LogStream<N> {}
unsafe impl<const N: usize> Send for LogStream<N> {}

impl<const N: usize> LogStream<N> {
    const MASK: usize = N - 1;

    /// Create a new empty log stream.
    pub const fn new() -> Self {
        assert!(N.is_power_of_two(), "Log buffer size must be power of 2");

        Self {
            entries: UnsafeCell::new([LogEntry::EMPTY; N]),
            write_idx: AtomicU32::new(0),
            read_idx: AtomicU32::new(0),
            dropped: AtomicU32::new(0),
        }
    }

    /// Queue a log entry. Never blocks.
    ///
    /// Returns `false` if the message was dropped (ring full).
    #[inline]
    pub fn push(&self, stamp: u32, level: LogLevel, msg: &[u8]) -> bool {
        let write = self.write_idx.load(Ordering::Acquire);
        let read = self.read_idx.load(Ordering::Acquire);

        // Full: leave write_idx untouched so the consumer never sees a hole.
        if write.wrapping_sub(read) >= N as u32 {
            self.dropped.fetch_add(1, Ordering::Relaxed);
            return false;
        }

        let write = self.write_idx.fetch_add(1, Ordering::AcqRel);
        let idx = (write as usize) & Self::MASK;

        // SAFETY: slot is free (checked above) and owned by the producer.
        unsafe {
            let entry = &mut (*self.entries.get())[idx];
            entry.stamp = stamp;
            entry.level = level;
            entry.len = msg.len().min(MAX_MSG_LEN) as u8;
            entry.msg[..entry.len as usize].copy_from_slice(&msg[..entry.len as usize]);
        }

        true
    }

    /// Take the oldest entry, if any.
    #[inline]
    pub fn drain(&self) -> Option<LogEntry> {
        let read = self.read_idx.load(Ordering::Relaxed);
        let write = self.write_idx.load(Ordering::Acquire);

        if read == write {
            return None;
        }

        let idx = (read as usize) & Self::MASK;

        // SAFETY: single consumer, slot below write_idx
        let entry = unsafe { (*self.entries.get())[idx] };

        self.read_idx.store(read.wrapping_add(1), Ordering::Release);
        Some(entry)
    }

    /// Count of dropped messages.
    #[inline]
    pub fn dropped(&self) -> u32 {
        self.dropped.load(Ordering::Relaxed)
    }

    /// Reset dropped counter (after reporting).
    #[inline]
    pub fn reset_dropped(&self) {
        self.dropped.store(0, Ordering::Relaxed);
    }

    /// Number of entries waiting to be drained.
    #[inline]
    pub fn pending(&self) -> u32 {
        let read = self.read_idx.load(Ordering::Relaxed);
        let write = self.write_idx.load(Ordering::Acquire);
        write.wrapping_sub(read)
    }
}

impl<const N: usize> Default for LogStream<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a message into a buffer, truncating at the end of the buffer.
///
/// Returns the number of bytes written.
#[inline]
pub fn format_to_buffer(buf: &mut [u8], args: core::fmt::Arguments<'_>) -> usize {
    use core::fmt::Write;

    struct BufWriter<'a> {
        buf: &'a mut [u8],
        pos: usize,
    }

    impl<'a> Write for BufWriter<'a> {
        fn write_str(&mut self, s: &str) -> core::fmt::Result {
            let bytes = s.as_bytes();
            let remaining = self.buf.len() - self.pos;
            let mut to_write = bytes.len().min(remaining);
            // Keep the truncated message valid UTF-8
            while !s.is_char_boundary(to_write) {
                to_write -= 1;
            }
            self.buf[self.pos..self.pos + to_write].copy_from_slice(&bytes[..to_write]);
            self.pos += to_write;
            Ok(())
        }
    }

    let mut writer = BufWriter { buf, pos: 0 };
    let _ = core::fmt::write(&mut writer, args);
    writer.pos
}

/// Queue a formatted diagnostic message.
///
/// ```ignore
/// diag_log!(LogLevel::Info, DIAG_LOG, cycle, "delay {} ms", delay_ms);
/// ```
#[macro_export]
macro_rules! diag_log {
    ($level:expr, $stream:expr, $stamp:expr, $($arg:tt)*) => {{
        let mut buf = [0u8; $crate::logging::MAX_MSG_LEN];
        let len = $crate::logging::format_to_buffer(&mut buf, format_args!($($arg)*));
        $stream.push($stamp, $level, &buf[..len]);
    }};
}

#[macro_export]
macro_rules! diag_info {
    ($stream:expr, $stamp:expr, $($arg:tt)*) => {
        $crate::diag_log!($crate::logging::LogLevel::Info, $stream, $stamp, $($arg)*)
    };
}

#[macro_export]
macro_rules! diag_warn {
    ($stream:expr, $stamp:expr, $($arg:tt)*) => {
        $crate::diag_log!($crate::logging::LogLevel::Warn, $stream, $stamp, $($arg)*)
    };
}

#[macro_export]
macro_rules! diag_error {
    ($stream:expr, $stamp:expr, $($arg:tt)*) => {
        $crate::diag_log!($crate::logging::LogLevel::Error, $stream, $stamp, $($arg)*)
    };
}

#[macro_export]
macro_rules! diag_debug {
    ($stream:expr, $stamp:expr, $($arg:tt)*) => {
        $crate::diag_log!($crate::logging::LogLevel::Debug, $stream, $stamp, $($arg)*)
    };
}
