//! Whole-file save and load
//!
//! The roster is persisted as one truncating write of every record in
//! collection order, and loaded back by reading fixed-size blocks until
//! end-of-file.

use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::Path;

use tracing::{debug, warn};

use crate::config::Config;
use crate::error::Result;
use crate::roster::Roster;
use crate::validate::validate;

use super::record::{decode, encode, RECORD_SIZE};

/// Codec bound to a configured data file
pub struct PlayerCodec {
    config: Config,
}

impl PlayerCodec {
    /// Create a codec for the given configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Write every record to the configured data file
    ///
    /// See [`save_to`].
    pub fn save(&self, roster: &Roster) -> Result<usize> {
        save_to(roster, &self.config.data_file)
    }

    /// Replace the roster's contents from the configured data file
    ///
    /// See [`load_from`].
    pub fn load(&self, roster: &mut Roster) -> Result<usize> {
        load_from(roster, &self.config.data_file, self.config.validate_on_load)
    }

    /// The configuration this codec was built with
    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Save every record to `path`, truncating any existing content
///
/// Records are written in collection order, head first, and the count
/// written is returned. A failed open or mid-write failure surfaces as an
/// `Io` error; there is no partial-write recovery, so a failed save can
/// leave the file truncated. Known weakness, kept for compatibility with
/// the original format's whole-list-write contract.
pub fn save_to(roster: &Roster, path: &Path) -> Result<usize> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;
    let mut writer = BufWriter::new(file);

    let mut saved = 0;
    for player in roster.all() {
        writer.write_all(&encode(player))?;
        saved += 1;
    }
    writer.flush()?;

    debug!(count = saved, path = %path.display(), "saved roster");
    Ok(saved)
}

/// Replace the roster's entire contents from `path`
///
/// The in-memory collection is cleared first — load always replaces, never
/// merges. A missing file is not an error: the roster is simply left empty
/// and the count is 0. Reading stops without error at a partial trailing
/// block (presumed crash-mid-write residue). Loaded records are trusted and
/// not re-validated; with `report_invalid` each record that would fail
/// validation is logged as a warning but kept anyway.
pub fn load_from(roster: &mut Roster, path: &Path, report_invalid: bool) -> Result<usize> {
    roster.clear();

    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no data file, starting empty");
            return Ok(0);
        }
        Err(e) => return Err(e.into()),
    };
    let mut reader = BufReader::new(file);

    let mut players = Vec::new();
    let mut block = [0u8; RECORD_SIZE];
    loop {
        match read_block(&mut reader, &mut block)? {
            BlockRead::Full => {}
            BlockRead::Partial(n) => {
                if n > 0 {
                    warn!(
                        trailing_bytes = n,
                        path = %path.display(),
                        "dropping incomplete trailing record"
                    );
                }
                break;
            }
        }

        let player = decode(&block);
        if report_invalid {
            if let Err(e) = validate(&player) {
                warn!(id = %player.id, %e, "loaded record fails validation, keeping it");
            }
        }
        players.push(player);
    }

    let loaded = players.len();
    roster.replace_all(players);

    debug!(count = loaded, path = %path.display(), "loaded roster");
    Ok(loaded)
}

enum BlockRead {
    Full,
    /// Bytes actually read before EOF (0 = clean end of file)
    Partial(usize),
}

/// Read exactly one block, tolerating a short final read
fn read_block(reader: &mut impl Read, block: &mut [u8; RECORD_SIZE]) -> Result<BlockRead> {
    let mut filled = 0;
    while filled < RECORD_SIZE {
        match reader.read(&mut block[filled..]) {
            Ok(0) => return Ok(BlockRead::Partial(filled)),
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(BlockRead::Full)
}
