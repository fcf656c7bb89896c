use std::fs::{create_dir_all, remove_dir_all, write};
use std::path::{Path, PathBuf};

/// scratch directory for a single test, removed on drop so that temporary
/// word lists get cleaned up even after a panic
pub struct TestCleanup {
    // individual test dirs to enable test cases to run in parallel
    test_dir: Option<PathBuf>,
}

impl TestCleanup {
    pub fn new<P: AsRef<Path>>(test_dir: P) -> Self {
        let test_dir = test_dir.as_ref().to_path_buf();
        create_dir_all(&test_dir).unwrap();
        Self {
            test_dir: Some(test_dir),
        }
    }

    pub fn path(&self) -> &Path {
        self.test_dir
            .as_deref()
            .expect("test directory is only taken on drop")
    }

    /// write one word per line into `file_name` inside the test directory
    pub fn write_word_list(&self, file_name: &str, words: &[&str]) -> PathBuf {
        let path = self.path().join(file_name);
        write(&path, words.join("\n")).unwrap();
        path
    }
}

impl Drop for TestCleanup {
    fn drop(&mut self) {
        if let Some(dir) = self.test_dir.take() {
            remove_dir_all(dir).unwrap();
        }
    }
}
