//! Board store: owns the board file path and the load/save cycle.
//!
//! The board lives in `.bangbang.md` inside the chosen directory. Opening a
//! store against a directory with no board file writes the default board;
//! a failure there is logged and deferred — the next `load` reports
//! `BoardNotFound` until a write succeeds.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::board::{Board, Column};
use crate::error::{Error, Result};
use crate::frontmatter;
use crate::lock::{self, FileLock, DEFAULT_LOCK_TIMEOUT_MS};

/// Name of the board file within the board directory
pub const BOARD_FILENAME: &str = ".bangbang.md";

/// File-backed store for a single board.
#[derive(Debug, Clone)]
pub struct BoardStore {
    path: PathBuf,
}

impl BoardStore {
    /// Open the store for the board file in `dir`, bootstrapping the default
    /// board when the file is absent.
    pub fn open(dir: impl AsRef<Path>) -> Self {
        let path = dir.as_ref().join(BOARD_FILENAME);
        let store = Self { path };

        if !store.path.exists() {
            if let Err(err) = store.save(&default_board()) {
                warn!(
                    path = %store.path.display(),
                    error = %err,
                    "failed to write default board"
                );
            } else {
                debug!(path = %store.path.display(), "created default board");
            }
        }

        store
    }

    /// Path to the board file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Acquire the store's exclusive lock, serializing load-mutate-save
    /// cycles across processes. Held until the returned guard drops.
    pub fn lock(&self) -> Result<FileLock> {
        let lock_path = PathBuf::from(format!("{}.lock", self.path.display()));
        FileLock::acquire(lock_path, DEFAULT_LOCK_TIMEOUT_MS)
    }

    /// Read and decode the board file.
    pub fn load(&self) -> Result<Board> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(Error::BoardNotFound(self.path.clone()));
            }
            Err(err) => return Err(err.into()),
        };

        frontmatter::decode(&raw)
    }

    /// Encode and atomically rewrite the board file.
    pub fn save(&self, board: &Board) -> Result<()> {
        let text = frontmatter::encode(board)?;
        lock::write_atomic(&self.path, text.as_bytes())?;
        debug!(path = %self.path.display(), columns = board.columns.len(), "saved board");
        Ok(())
    }
}

/// The board written on first open: "My Board" with the four standard
/// empty columns.
pub fn default_board() -> Board {
    Board {
        title: "My Board".to_string(),
        rules: None,
        columns: vec![
            Column {
                id: "todo".to_string(),
                title: "To Do".to_string(),
                tasks: vec![],
            },
            Column {
                id: "in-progress".to_string(),
                title: "In Progress".to_string(),
                tasks: vec![],
            },
            Column {
                id: "review".to_string(),
                title: "Review".to_string(),
                tasks: vec![],
            },
            Column {
                id: "done".to_string(),
                title: "Done".to_string(),
                tasks: vec![],
            },
        ],
    }
}
