//! Test fixtures - reusable asset contents.

/// Three-byte image
pub const BOARD_PNG: &[u8] = &[0x01, 0x02, 0x03];

/// One-byte sound
pub const MUSIC_OGG: &[u8] = &[0xff];

/// The two-file media directory used by most tests
pub const SAMPLE_MEDIA: &[(&str, &[u8])] = &[("board.png", BOARD_PNG), ("music.ogg", MUSIC_OGG)];
