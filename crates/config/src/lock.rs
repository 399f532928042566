use std::{fs, io, path::PathBuf};

/// Inter-process mutual exclusion on a lock-file path. `create_new`
/// fails if another writer holds the lock; the file is removed when
/// the guard drops, after the write or the failure alike.
pub(crate) struct LockFile {
    path: PathBuf,
}

impl LockFile {
    pub(crate) fn acquire(path: PathBuf) -> io::Result<Self> {
        fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)?;
        Ok(Self { path })
    }
}

impl Drop for LockFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}
