//! Host configuration handshake
//!
//! Runs once at startup, before any sampling:
//! banner, prompt, wait for the host, parse, resolve. Never repeated; there is
//! no runtime reconfiguration path.

pub mod handshake;
pub mod line_buffer;
pub mod link;
pub mod parser;

pub use handshake::{Handshake, HOST_READ_TIMEOUT_MS, POLL_INTERVAL_MS, VERSION, WAITING_LINE};
pub use line_buffer::LineBuffer;
pub use link::HostLink;
pub use parser::{next_int, parse_host_response};
