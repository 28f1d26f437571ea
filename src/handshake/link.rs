//! Host serial link capability

/// Byte-level access to the host serial port.
///
/// Output goes through `core::fmt::Write`; lines end with
/// [`crate::LINE_END`].
pub trait HostLink: core::fmt::Write {
    /// Bytes received and not yet read.
    fn bytes_available(&mut self) -> usize;

    /// Next received byte, without blocking.
    fn read_byte(&mut self) -> Option<u8>;
}
