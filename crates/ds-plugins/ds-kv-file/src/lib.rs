//! # ds-kv-file
//! devshowcase/crates/ds-plugins/ds-kv-file/src/lib.rs
//! Local filesystem implementation of `KvStore`: one JSON document per
//! key under a root directory, written in full on every put.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use ds_core::traits::KvStore;
use tokio::fs;

pub struct FileKvStore {
    /// Root directory for all collections (e.g., "./data/store")
    root_path: PathBuf,
}

impl FileKvStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root_path: root }
    }

    /// Maps a logical key to "<root>/<key>.json", replacing anything that
    /// is not filename-safe.
    fn key_path(&self, key: &str) -> PathBuf {
        let safe: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
            .collect();
        self.root_path.join(format!("{safe}.json"))
    }
}

#[async_trait]
impl KvStore for FileKvStore {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        match fs::read_to_string(self.key_path(key)).await {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn put(&self, key: &str, value: String) -> anyhow::Result<()> {
        fs::create_dir_all(&self.root_path).await?;
        fs::write(self.key_path(key), value).await?;
        Ok(())
    }
}
