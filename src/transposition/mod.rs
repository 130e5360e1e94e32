pub mod spelling;

pub use spelling::{effective_pitch, key_bias, resolve_spelling, FLAT_KEYS, SHARP_KEYS};
