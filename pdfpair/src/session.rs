//! Selection state: the two slots a user fills before merging.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::validation::{ensure_still_present, validate_candidate};

/// One of the two inputs. Pages of [`Slot::First`] always come first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Document whose pages open the merged output.
    First,
    /// Document whose pages follow.
    Second,
}

impl Slot {
    /// Both slots in merge order.
    pub const ALL: [Slot; 2] = [Slot::First, Slot::Second];

    fn index(self) -> usize {
        match self {
            Slot::First => 0,
            Slot::Second => 1,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::First => write!(f, "PDF 1"),
            Slot::Second => write!(f, "PDF 2"),
        }
    }
}

/// The two optional file selections of one run of the application.
///
/// A non-empty slot always holds a path that passed [`validate_candidate`]
/// when it was set. The file may disappear afterwards; that is only noticed
/// by [`Session::ready_pair`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    slots: [Option<PathBuf>; 2],
}

impl Session {
    /// Create a session with both slots empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer `path` for `slot`.
    ///
    /// On success the slot's previous value is replaced and the stored
    /// (absolute) path is returned.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PdfPairError::InvalidFile`] and leaves the slot
    /// untouched if the path is not an existing `.pdf` file.
    pub fn set_slot(&mut self, slot: Slot, path: &Path) -> Result<&Path> {
        let accepted = validate_candidate(path)?;
        let stored = self.slots[slot.index()].insert(accepted);
        Ok(stored.as_path())
    }

    /// Current value of `slot`.
    pub fn get(&self, slot: Slot) -> Option<&Path> {
        self.slots[slot.index()].as_deref()
    }

    /// Empty both slots.
    pub fn clear(&mut self) {
        self.slots = [None, None];
    }

    /// True when both slots hold a path.
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Both paths in merge order, provided each still exists as a file.
    pub fn ready_pair(&self) -> Option<(&Path, &Path)> {
        let first = self.get(Slot::First)?;
        let second = self.get(Slot::Second)?;

        if ensure_still_present(first).is_err() || ensure_still_present(second).is_err() {
            return None;
        }

        Some((first, second))
    }
}
