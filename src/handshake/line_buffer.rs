//! Line buffer for the host response

/// Maximum response length
pub const LINE_SIZE: usize = 32;

/// Fixed-size input line
pub struct LineBuffer {
    buf: [u8; LINE_SIZE],
    len: usize,
}

impl LineBuffer {
    /// Create empty buffer
    pub const fn new() -> Self {
        Self {
            buf: [0u8; LINE_SIZE],
            len: 0,
        }
    }

    /// Push a byte; ignored once full
    pub fn push(&mut self, c: u8) {
        if self.len < LINE_SIZE {
            self.buf[self.len] = c;
            self.len += 1;
        }
    }

    /// Clear buffer
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Raw received bytes, not necessarily UTF-8
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == LINE_SIZE
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_read_back() {
        let mut buf = LineBuffer::new();
        for b in b"50\t2" {
            buf.push(*b);
        }
        assert_eq!(buf.as_bytes(), b"50\t2");
        assert_eq!(buf.len(), 4);
    }

    #[test]
    fn test_overflow_truncates() {
        let mut buf = LineBuffer::new();
        for i in 0..(LINE_SIZE + 8) {
            buf.push(b'0' + (i % 10) as u8);
        }
        assert!(buf.is_full());
        assert_eq!(buf.len(), LINE_SIZE);

        buf.clear();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_non_utf8_bytes_kept() {
        let mut buf = LineBuffer::new();
        for b in [0xFF, b'1', 0xC3] {
            buf.push(b);
        }
        assert_eq!(buf.as_bytes(), &[0xFF, b'1', 0xC3]);
    }
}
