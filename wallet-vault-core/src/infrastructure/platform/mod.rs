//! Platform storage backends
//!
//! Byte-level keyed storage the wallet store persists its collection
//! through. `FileStorage` is the durable backend; `MemoryStorage` keeps
//! everything in process and is used for ephemeral vaults and tests.
//!
//! Writes through `FileStorage` go to a temp file in the vault's own staging
//! directory, are fsynced, and are then renamed over the target, so a crash leaves either the old or the new
//! document, never a torn one.

use crate::shared::error::WalletError;
use crate::shared::WalletResult;
use rand::distributions::{Alphanumeric, DistString};
use std::collections::HashMap;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

const DOCUMENT_EXTENSION: &str = "json";
const TEMP_EXTENSION: &str = "tmp";
const TEMP_SUFFIX_LEN: usize = 16;
/// Writes are staged here; nothing outside the vault lives in it
const STAGING_DIR_NAME: &str = ".staging";

/// Platform-specific storage implementation
pub trait PlatformStorage: Send + Sync {
    /// Store data, replacing any previous value atomically
    fn store(&self, key: &str, data: &[u8]) -> WalletResult<()>;

    /// Retrieve data; `None` if nothing was ever stored under `key`
    fn retrieve(&self, key: &str) -> WalletResult<Option<Vec<u8>>>;
}

fn is_valid_key(key: &str) -> bool {
    !key.is_empty() && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Keys become file names, so only a conservative character set is allowed
fn validate_key(key: &str) -> WalletResult<()> {
    if !is_valid_key(key) {
        return Err(WalletError::storage(format!("Invalid storage key: {:?}", key)));
    }
    Ok(())
}

/// True for names of the form `{key}.{16 alphanumerics}.tmp`
fn is_staged_write(name: &str) -> bool {
    let mut parts = name.rsplitn(3, '.');
    let (Some(ext), Some(suffix), Some(key)) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    ext == TEMP_EXTENSION
        && suffix.len() == TEMP_SUFFIX_LEN
        && suffix.chars().all(|c| c.is_ascii_alphanumeric())
        && is_valid_key(key)
}

/// Create `dir` if missing; a directory we create is private to the user
fn ensure_private_dir(dir: &Path) -> WalletResult<()> {
    if dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir)
        .map_err(|e| WalletError::storage(format!("Failed to create {}: {}", dir.display(), e)))?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(dir, fs::Permissions::from_mode(0o700))?;
    }
    Ok(())
}

/// Durable file storage rooted at a data directory
pub struct FileStorage {
    base_dir: PathBuf,
    staging_dir: PathBuf,
}

impl FileStorage {
    pub fn new(base_dir: impl Into<PathBuf>) -> WalletResult<Self> {
        let base_dir = base_dir.into();
        ensure_private_dir(&base_dir)?;
        let staging_dir = base_dir.join(STAGING_DIR_NAME);
        ensure_private_dir(&staging_dir)?;

        let storage = Self { base_dir, staging_dir };
        storage.remove_stale_staged_writes();
        Ok(storage)
    }

    // Helper: Get file path for a given key
    fn file_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{}.{}", key, DOCUMENT_EXTENSION))
    }

    // Leftovers from writes interrupted before their rename
    fn remove_stale_staged_writes(&self) {
        let Ok(entries) = fs::read_dir(&self.staging_dir) else {
            return;
        };
        for entry in entries.flatten() {
            let name = entry.file_name();
            if name.to_str().is_some_and(is_staged_write) {
                let path = entry.path();
                log::warn!("Removing interrupted write {}", path.display());
                let _ = fs::remove_file(&path);
            }
        }
    }

    #[cfg(unix)]
    fn sync_dir(&self) -> std::io::Result<()> {
        File::open(&self.base_dir)?.sync_all()
    }

    #[cfg(not(unix))]
    fn sync_dir(&self) -> std::io::Result<()> {
        Ok(())
    }
}

impl PlatformStorage for FileStorage {
    fn store(&self, key: &str, data: &[u8]) -> WalletResult<()> {
        validate_key(key)?;
        let path = self.file_path(key);
        let suffix = Alphanumeric.sample_string(&mut rand::thread_rng(), TEMP_SUFFIX_LEN);
        let tmp_path = self.staging_dir.join(format!("{}.{}.{}", key, suffix, TEMP_EXTENSION));

        let write = || -> std::io::Result<()> {
            let mut options = OpenOptions::new();
            options.write(true).create_new(true);
            #[cfg(unix)]
            {
                use std::os::unix::fs::OpenOptionsExt;
                options.mode(0o600);
            }
            let mut file = options.open(&tmp_path)?;
            file.write_all(data)?;
            file.sync_all()?;
            drop(file);

            // rename is atomic on the filesystems we target
            fs::rename(&tmp_path, &path)
        };

        write().map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            WalletError::storage(format!("Failed to write {}: {}", path.display(), e))
        })?;

        // The new document is in place; a failed directory sync only weakens
        // durability of the rename itself
        if let Err(e) = self.sync_dir() {
            log::warn!("Failed to sync {}: {}", self.base_dir.display(), e);
        }
        Ok(())
    }

    fn retrieve(&self, key: &str) -> WalletResult<Option<Vec<u8>>> {
        validate_key(key)?;
        match fs::read(self.file_path(key)) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-process storage; contents vanish with the value
#[derive(Default)]
pub struct MemoryStorage {
    data: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> WalletResult<std::sync::MutexGuard<'_, HashMap<String, Vec<u8>>>> {
        self.data
            .lock()
            .map_err(|_| WalletError::internal("Memory storage lock poisoned"))
    }
}

impl PlatformStorage for MemoryStorage {
    fn store(&self, key: &str, data: &[u8]) -> WalletResult<()> {
        validate_key(key)?;
        self.lock()?.insert(key.to_string(), data.to_vec());
        Ok(())
    }

    fn retrieve(&self, key: &str) -> WalletResult<Option<Vec<u8>>> {
        Ok(self.lock()?.get(key).cloned())
    }
}
