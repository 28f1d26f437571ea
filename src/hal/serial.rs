//! Host UART link.
//!
//! Wraps the UART0 driver (USB-UART bridge on the dev board) as a
//! [`HostLink`]: non-blocking byte reads for the handshake, blocking writes
//! for the data stream.

use core::fmt;

use esp_idf_svc::hal::delay::NON_BLOCK;
use esp_idf_svc::hal::uart::UartDriver;
use esp_idf_svc::sys::{self, esp};

use crate::handshake::HostLink;

/// Host serial link over a UART driver.
pub struct UartLink<'d> {
    uart: UartDriver<'d>,
}

impl<'d> UartLink<'d> {
    pub fn new(uart: UartDriver<'d>) -> Self {
        Self { uart }
    }
}

impl HostLink for UartLink<'_> {
    fn bytes_available(&mut self) -> usize {
        let mut len: usize = 0;
        // SAFETY: the driver is installed for this port while `uart` lives
        match esp!(unsafe { sys::uart_get_buffered_data_len(self.uart.port(), &mut len) }) {
            Ok(()) => len,
            Err(_) => 0,
        }
    }

    fn read_byte(&mut self) -> Option<u8> {
        let mut byte = [0u8; 1];
        match self.uart.read(&mut byte, NON_BLOCK) {
            Ok(1) => Some(byte[0]),
            _ => None,
        }
    }
}

impl fmt::Write for UartLink<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let mut bytes = s.as_bytes();
        while !bytes.is_empty() {
            let n = self.uart.write(bytes).map_err(|_| fmt::Error)?;
            bytes = &bytes[n..];
        }
        Ok(())
    }
}
