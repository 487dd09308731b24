pub const INITIAL_CHIPS: i32 = 100;
pub const MINIMUM_BET: i32 = 1;
pub const MIN_ROUNDS: u32 = 4;
pub const MAX_ROUNDS: u32 = 26;
pub const MAX_NAME_LEN: usize = 20;

/// Face-down cards each side buries per war battle; the face-up card makes four.
pub const WAR_FACE_DOWN: usize = 3;
pub const WAR_CARDS_PER_SIDE: usize = WAR_FACE_DOWN + 1;

pub const JACK_STEAL: usize = 2;
pub const QUEEN_BONUS: i32 = 5;
pub const KING_MULTIPLIER: i32 = 2;

/// Chips handed from the solvent side to a bankrupt one.
pub const BANKRUPTCY_TRANSFER: i32 = 100;

pub const COMPUTER_NAME: &str = "Computer";
