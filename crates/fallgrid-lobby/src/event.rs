/// What a lobby event asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum EventKind {
    Connect = 0,
    Disconnect = 1,
    Key = 2,
    Tick = 3,
}

/// One decoded lobby event.
///
/// The wire format is a fixed 4-byte record: kind, client id, and a
/// 16-bit big-endian payload. Only `Key` events use the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub kind: EventKind,
    pub client_id: u8,
    pub payload: u16,
}

#[derive(Debug, Clone, Copy, derive_more::Display, derive_more::Error)]
#[display("unknown event kind {kind:#04x}")]
pub struct UnknownEventKindError {
    pub kind: u8,
}

impl Event {
    /// Size of one encoded event on the wire.
    pub const ENCODED_LEN: usize = 4;

    pub fn decode(record: [u8; Self::ENCODED_LEN]) -> Result<Self, UnknownEventKindError> {
        let kind = match record[0] {
            0 => EventKind::Connect,
            1 => EventKind::Disconnect,
            2 => EventKind::Key,
            3 => EventKind::Tick,
            kind => return Err(UnknownEventKindError { kind }),
        };
        Ok(Self {
            kind,
            client_id: record[1],
            payload: u16::from_be_bytes([record[2], record[3]]),
        })
    }

    #[must_use]
    pub fn encode(self) -> [u8; Self::ENCODED_LEN] {
        let [hi, lo] = self.payload.to_be_bytes();
        [self.kind as u8, self.client_id, hi, lo]
    }
}
