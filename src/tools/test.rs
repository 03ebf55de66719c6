#[cfg(test)]
pub mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::SystemTime;

    static TEMP_DIR_COUNT: AtomicUsize = AtomicUsize::new(0);

    /// A new empty directory, unique to the calling test.
    pub fn temp_dir() -> PathBuf {
        let micros = SystemTime::now().duration_since(SystemTime::UNIX_EPOCH).unwrap().as_micros();
        let count = TEMP_DIR_COUNT.fetch_add(1, Ordering::SeqCst);
        let buf = std::env::temp_dir().join(format!("gym-manager-{micros}-{count}"));
        fs::create_dir_all(&buf).unwrap();

        buf
    }
}
