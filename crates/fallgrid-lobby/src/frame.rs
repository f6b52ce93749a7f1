/// Capacity of a [`FrameParser`]'s ring buffer, in bytes.
pub const PARSER_BUFFER_SIZE: usize = 16;

/// Fixed-capacity ring buffer that reassembles an inbound byte stream
/// into 4-byte event records, whatever chunking the transport used.
#[derive(Debug, Clone)]
pub struct FrameParser {
    buffer: [u8; PARSER_BUFFER_SIZE],
    read_pos: usize,
    write_pos: usize,
}

impl FrameParser {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buffer: [0; PARSER_BUFFER_SIZE],
            read_pos: 0,
            write_pos: 0,
        }
    }

    /// Appends bytes to the buffer. Returns `false` once the write cursor
    /// catches the read cursor; the caller should treat that as a protocol
    /// violation and drop the connection, since framing is lost.
    pub fn push(&mut self, data: &[u8]) -> bool {
        for &byte in data {
            self.buffer[self.write_pos] = byte;
            self.write_pos = (self.write_pos + 1) % PARSER_BUFFER_SIZE;
            if self.write_pos == self.read_pos {
                return false;
            }
        }
        true
    }

    /// Bytes buffered but not yet consumed.
    #[must_use]
    pub const fn available(&self) -> usize {
        (self.write_pos + PARSER_BUFFER_SIZE - self.read_pos) % PARSER_BUFFER_SIZE
    }

    /// Pops the next complete 4-byte record, if one is buffered.
    pub fn next_record(&mut self) -> Option<[u8; 4]> {
        if self.available() < 4 {
            return None;
        }
        let mut record = [0; 4];
        for byte in &mut record {
            *byte = self.buffer[self.read_pos];
            self.read_pos = (self.read_pos + 1) % PARSER_BUFFER_SIZE;
        }
        Some(record)
    }
}

impl Default for FrameParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_input_yields_no_record() {
        let mut parser = FrameParser::new();
        assert!(parser.push(&[1, 2, 3]));
        assert_eq!(parser.available(), 3);
        assert_eq!(parser.next_record(), None);
    }

    #[test]
    fn records_survive_arbitrary_chunking() {
        let mut parser = FrameParser::new();
        assert!(parser.push(&[3, 0]));
        assert_eq!(parser.next_record(), None);
        assert!(parser.push(&[0, 0, 2, 1]));
        assert_eq!(parser.next_record(), Some([3, 0, 0, 0]));
        assert_eq!(parser.next_record(), None);
        assert!(parser.push(&[0, 5]));
        assert_eq!(parser.next_record(), Some([2, 1, 0, 5]));
    }

    #[test]
    fn cursors_wrap_around_the_buffer() {
        let mut parser = FrameParser::new();
        // Push and pop enough records to lap the 16-byte buffer twice.
        for i in 0..10_u8 {
            let record = [i, i, i, i];
            assert!(parser.push(&record));
            assert_eq!(parser.next_record(), Some(record));
        }
        assert_eq!(parser.available(), 0);
    }

    #[test]
    fn overflow_is_reported() {
        let mut parser = FrameParser::new();
        // The write cursor may never catch the read cursor, so capacity
        // is one byte short of the buffer size.
        assert!(parser.push(&[0; PARSER_BUFFER_SIZE - 1]));
        assert!(!parser.push(&[0]));
    }

    #[test]
    fn oversized_push_is_reported() {
        let mut parser = FrameParser::new();
        assert!(!parser.push(&[7; PARSER_BUFFER_SIZE + 4]));
    }
}
