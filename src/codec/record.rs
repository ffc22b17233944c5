//! Fixed-size record block encode/decode
//!
//! The block layout mirrors the original fixed-width record: each text
//! field occupies capacity + 1 bytes (NUL terminator included), followed by
//! three little-endian i32 values.

use crate::player::{Player, ID_LEN, NAME_MAX, POSITION_MAX, TEAM_MAX};

// Buffer sizes include the NUL terminator.
const ID_BUF: usize = ID_LEN + 1; // offset 0
const NAME_BUF: usize = NAME_MAX + 1; // offset 13
const TEAM_BUF: usize = TEAM_MAX + 1; // offset 34
const POSITION_BUF: usize = POSITION_MAX + 1; // offset 65
const INT_BUF: usize = 4; // height 76, weight 80, jersey 84

/// Size of one on-disk record block in bytes
pub const RECORD_SIZE: usize = ID_BUF + NAME_BUF + TEAM_BUF + POSITION_BUF + 3 * INT_BUF;

/// Encode a record into its fixed-size block
///
/// Text is clamped to the buffer capacity at a character boundary. Records
/// accepted by the validator always fit; clamping only ever applies to
/// unvalidated data that arrived via load.
pub fn encode(player: &Player) -> [u8; RECORD_SIZE] {
    let mut block = [0u8; RECORD_SIZE];
    let mut offset = 0;

    offset = put_text(&mut block, offset, ID_BUF, &player.id);
    offset = put_text(&mut block, offset, NAME_BUF, &player.name);
    offset = put_text(&mut block, offset, TEAM_BUF, &player.team);
    offset = put_text(&mut block, offset, POSITION_BUF, &player.position);

    offset = put_i32(&mut block, offset, player.height);
    offset = put_i32(&mut block, offset, player.weight);
    put_i32(&mut block, offset, player.jersey);

    block
}

/// Decode a record from its fixed-size block
///
/// The file is trusted: bytes up to the first NUL are taken as-is, with
/// invalid UTF-8 replaced rather than rejected. No field validation runs
/// here.
pub fn decode(block: &[u8; RECORD_SIZE]) -> Player {
    let mut offset = 0;

    let (id, next) = take_text(block, offset, ID_BUF);
    offset = next;
    let (name, next) = take_text(block, offset, NAME_BUF);
    offset = next;
    let (team, next) = take_text(block, offset, TEAM_BUF);
    offset = next;
    let (position, next) = take_text(block, offset, POSITION_BUF);
    offset = next;

    let (height, next) = take_i32(block, offset);
    offset = next;
    let (weight, next) = take_i32(block, offset);
    offset = next;
    let (jersey, _) = take_i32(block, offset);

    Player {
        id,
        name,
        team,
        position,
        height,
        weight,
        jersey,
    }
}

/// Write a NUL-terminated text buffer of `size` bytes, returning the next offset
fn put_text(block: &mut [u8], offset: usize, size: usize, text: &str) -> usize {
    let capacity = size - 1;
    let mut end = text.len().min(capacity);
    // Back off to a character boundary if the clamp split a code point.
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    block[offset..offset + end].copy_from_slice(&text.as_bytes()[..end]);
    offset + size
}

fn put_i32(block: &mut [u8], offset: usize, value: i32) -> usize {
    block[offset..offset + INT_BUF].copy_from_slice(&value.to_le_bytes());
    offset + INT_BUF
}

/// Read a NUL-terminated text buffer of `size` bytes
fn take_text(block: &[u8], offset: usize, size: usize) -> (String, usize) {
    let buf = &block[offset..offset + size];
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    (
        String::from_utf8_lossy(&buf[..end]).into_owned(),
        offset + size,
    )
}

fn take_i32(block: &[u8], offset: usize) -> (i32, usize) {
    let bytes: [u8; INT_BUF] = block[offset..offset + INT_BUF].try_into().unwrap();
    (i32::from_le_bytes(bytes), offset + INT_BUF)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_size_matches_layout_table() {
        // 13 + 21 + 31 + 11 + 4 + 4 + 4
        assert_eq!(RECORD_SIZE, 88);
    }

    #[test]
    fn field_offsets_match_layout_table() {
        let player = Player {
            id: "202400010001".to_string(),
            name: "Alice".to_string(),
            team: "Engineering".to_string(),
            position: "C".to_string(),
            height: 200,
            weight: 100,
            jersey: 10,
        };
        let block = encode(&player);

        assert_eq!(&block[0..12], b"202400010001");
        assert_eq!(block[12], 0);
        assert_eq!(&block[13..18], b"Alice");
        assert_eq!(&block[34..45], b"Engineering");
        assert_eq!(&block[65..66], b"C");
        assert_eq!(&block[76..80], &200i32.to_le_bytes());
        assert_eq!(&block[80..84], &100i32.to_le_bytes());
        assert_eq!(&block[84..88], &10i32.to_le_bytes());
    }

    #[test]
    fn round_trips_every_field() {
        let player = Player {
            id: "199900020042".to_string(),
            name: "Bo".to_string(),
            team: String::new(),
            position: "PF".to_string(),
            height: 211,
            weight: 118,
            jersey: 0,
        };
        let decoded = decode(&encode(&player));
        assert_eq!(decoded, player);
    }

    #[test]
    fn overlong_text_is_clamped_at_char_boundary() {
        let player = Player {
            id: "202400010001".to_string(),
            name: "七".repeat(10), // 30 bytes of UTF-8, capacity is 20
            team: String::new(),
            position: "C".to_string(),
            height: 200,
            weight: 100,
            jersey: 1,
        };
        let decoded = decode(&encode(&player));
        assert_eq!(decoded.name, "七".repeat(6)); // 18 bytes, next char would split
    }
}
