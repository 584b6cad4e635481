use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tempfile::NamedTempFile;

use crate::model::Task;

const DATA_DIR: &str = ".tick";
const DATA_FILE: &str = "tasks.json";

/// Error type for store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not determine a home directory")]
    NoHomeDir,
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    Format {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// On-disk home of the task list: one JSON file in a per-user directory.
///
/// Translates between the in-memory sequence and the file; business rules
/// (ids, bounds, validation) live in the model, not here.
#[derive(Debug, Clone)]
pub struct Store {
    file_path: PathBuf,
}

impl Store {
    /// Store at the fixed per-user location, `~/.tick/tasks.json`. Creates
    /// the data directory on first use. The missing home directory is the
    /// one startup error this program treats as fatal.
    pub fn open_default() -> Result<Self, StoreError> {
        let home = dirs::home_dir().ok_or(StoreError::NoHomeDir)?;
        Store::at(&home.join(DATA_DIR))
    }

    /// Store rooted at an arbitrary directory. The interactive path always
    /// goes through `open_default`; this exists for tests.
    pub fn at(dir: &Path) -> Result<Self, StoreError> {
        fs::create_dir_all(dir).map_err(|e| StoreError::Write {
            path: dir.to_path_buf(),
            source: e,
        })?;
        Ok(Store {
            file_path: dir.join(DATA_FILE),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// The directory holding the backing file (and the optional config).
    pub fn dir(&self) -> &Path {
        self.file_path.parent().unwrap_or(Path::new("."))
    }

    /// Load the stored tasks. A missing file is first-run state, not an
    /// error; an unreadable or malformed file is.
    pub fn load(&self) -> Result<Vec<Task>, StoreError> {
        if !self.file_path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.file_path).map_err(|e| StoreError::Read {
            path: self.file_path.clone(),
            source: e,
        })?;
        serde_json::from_str(&data).map_err(|e| StoreError::Format {
            path: self.file_path.clone(),
            source: e,
        })
    }

    /// Interactive-path load: never fails. A malformed file is moved aside
    /// to a timestamped backup first, so a later save cannot clobber it.
    /// Returns the tasks plus an optional warning for the notice line.
    pub fn load_or_empty(&self) -> (Vec<Task>, Option<String>) {
        match self.load() {
            Ok(tasks) => (tasks, None),
            Err(StoreError::Format { .. }) => {
                let notice = match self.sidestep_corrupt() {
                    Ok(bak) => format!(
                        "task file was unreadable; kept as {}, starting empty",
                        bak.file_name().unwrap_or_default().to_string_lossy()
                    ),
                    Err(e) => format!("task file unreadable ({}); starting empty", e),
                };
                (Vec::new(), Some(notice))
            }
            Err(err) => (Vec::new(), Some(format!("{}; starting empty", err))),
        }
    }

    /// Replace the stored sequence with `tasks`, atomically and in full.
    /// Pretty-printed so the file stays inspectable by hand.
    pub fn save(&self, tasks: &[Task]) -> Result<(), StoreError> {
        let data = serde_json::to_string_pretty(tasks).map_err(|e| StoreError::Write {
            path: self.file_path.clone(),
            source: std::io::Error::other(e),
        })?;
        atomic_write(&self.file_path, data.as_bytes()).map_err(|e| StoreError::Write {
            path: self.file_path.clone(),
            source: e,
        })
    }

    /// Copy the store file to a timestamped sibling
    /// (`tasks.json.bak-YYYYMMDD-HHMMSS`). No-op when nothing is stored yet;
    /// returns the backup path otherwise.
    pub fn backup(&self) -> Result<Option<PathBuf>, StoreError> {
        if !self.file_path.exists() {
            return Ok(None);
        }
        let bak = self.stamped_backup_path();
        fs::copy(&self.file_path, &bak).map_err(|e| StoreError::Write {
            path: bak.clone(),
            source: e,
        })?;
        Ok(Some(bak))
    }

    /// Move (not copy) the corrupt store file out of the way.
    fn sidestep_corrupt(&self) -> Result<PathBuf, std::io::Error> {
        let bak = self.stamped_backup_path();
        fs::rename(&self.file_path, &bak)?;
        Ok(bak)
    }

    fn stamped_backup_path(&self) -> PathBuf {
        let stamp = Utc::now().format("%Y%m%d-%H%M%S");
        let mut name = self.file_path.clone().into_os_string();
        name.push(format!(".bak-{}", stamp));
        PathBuf::from(name)
    }
}

// ---------------------------------------------------------------------------
// Atomic file write
// ---------------------------------------------------------------------------

/// Write `content` to `path` atomically using a temp file + rename.
fn atomic_write(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
