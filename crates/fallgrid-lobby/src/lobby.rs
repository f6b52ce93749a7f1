use std::collections::HashMap;

use fallgrid_engine::{BagRandomizer, GameConfig, GameState, Key, Randomizer};

use crate::{
    event::{Event, EventKind},
    frame::FrameParser,
};

/// Key event payloads, in wire order.
const KEY_PAYLOADS: [Key; 8] = [
    Key::Left,
    Key::Right,
    Key::Clockwise,
    Key::Anticlockwise,
    Key::Flip,
    Key::SoftDrop,
    Key::HardDrop,
    Key::Hold,
];

/// The engine key named by a `Key` event payload.
#[must_use]
pub fn key_from_payload(payload: u16) -> Option<Key> {
    KEY_PAYLOADS.get(usize::from(payload)).copied()
}

/// The wire payload naming an engine key.
#[must_use]
#[expect(clippy::cast_possible_truncation)]
pub fn key_to_payload(key: Key) -> u16 {
    KEY_PAYLOADS
        .iter()
        .position(|&candidate| candidate == key)
        .map_or(0, |index| index as u16)
}

/// Hosts one game per connected client and routes lobby events to them.
///
/// Clients live in a capacity-bounded map keyed by their one-byte id;
/// joins beyond `max_clients` are refused. Each client gets its own
/// [`FrameParser`], so a misbehaving byte stream only ever takes down
/// its own connection.
#[derive(Debug)]
pub struct Lobby {
    config: GameConfig,
    max_clients: usize,
    seed: Option<u64>,
    games: HashMap<u8, GameState>,
    parsers: HashMap<u8, FrameParser>,
}

impl Lobby {
    /// A lobby whose matches are seeded from OS entropy.
    #[must_use]
    pub fn new(config: GameConfig, max_clients: usize) -> Self {
        Self {
            config,
            max_clients,
            seed: None,
            games: HashMap::new(),
            parsers: HashMap::new(),
        }
    }

    /// A fully reproducible lobby: each client's match is seeded from
    /// `seed` and the client id.
    #[must_use]
    pub fn with_seed(config: GameConfig, max_clients: usize, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::new(config, max_clients)
        }
    }

    fn make_randomizer(&self, client_id: u8) -> Box<dyn Randomizer> {
        match self.seed {
            Some(seed) => Box::new(BagRandomizer::new(seed.wrapping_add(u64::from(client_id)))),
            None => Box::new(BagRandomizer::from_entropy()),
        }
    }

    /// Admits a client and starts their match. Refuses ids already in the
    /// lobby and joins beyond the capacity bound.
    pub fn client_connect(&mut self, client_id: u8) -> bool {
        if self.games.contains_key(&client_id) || self.games.len() >= self.max_clients {
            return false;
        }
        let randomizer = self.make_randomizer(client_id);
        let game = GameState::new(self.config.clone(), randomizer);
        self.games.insert(client_id, game);
        self.parsers.insert(client_id, FrameParser::new());
        true
    }

    /// Drops a client's match and any half-parsed input.
    pub fn client_disconnect(&mut self, client_id: u8) {
        self.games.remove(&client_id);
        self.parsers.remove(&client_id);
    }

    /// Feeds raw bytes from a client's connection, dispatching every
    /// complete event they finish. Returns `false` and disconnects the
    /// client if their parser overflows (framing is unrecoverable), or if
    /// the client is unknown. Events with an unknown kind are skipped.
    pub fn receive(&mut self, client_id: u8, data: &[u8]) -> bool {
        let Some(parser) = self.parsers.get_mut(&client_id) else {
            return false;
        };
        let intact = parser.push(data);
        let mut records = Vec::new();
        while let Some(record) = parser.next_record() {
            records.push(record);
        }
        for record in records {
            if let Ok(event) = Event::decode(record) {
                self.handle_event(event);
            }
        }
        if !intact {
            self.client_disconnect(client_id);
        }
        intact
    }

    /// Applies one decoded event.
    pub fn handle_event(&mut self, event: Event) {
        match event.kind {
            EventKind::Connect => {
                self.client_connect(event.client_id);
            }
            EventKind::Disconnect => self.client_disconnect(event.client_id),
            EventKind::Key => {
                if let (Some(game), Some(key)) = (
                    self.games.get_mut(&event.client_id),
                    key_from_payload(event.payload),
                ) {
                    game.key_down(key);
                }
            }
            EventKind::Tick => self.tick(),
        }
    }

    /// Advances every hosted match by one tick.
    pub fn tick(&mut self) {
        for game in self.games.values_mut() {
            game.tick();
        }
    }

    #[must_use]
    pub fn game(&self, client_id: u8) -> Option<&GameState> {
        self.games.get(&client_id)
    }

    #[must_use]
    pub fn client_count(&self) -> usize {
        self.games.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}
