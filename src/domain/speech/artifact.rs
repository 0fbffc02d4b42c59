use anyhow::Context;
use chrono::{DateTime, Duration, Utc};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Directory of temporary audio artifacts. Writers create uniquely-named
/// files, so concurrent synthesis never collides and no locking is needed.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    /// Open the store, creating the directory if needed
    pub fn new(dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Persist audio bytes as a fresh uniquely-named MP3 artifact
    pub async fn create(&self, audio: &[u8]) -> std::io::Result<AudioArtifact> {
        let path = self.dir.join(format!("{}.mp3", Uuid::new_v4()));
        tokio::fs::write(&path, audio).await?;
        Ok(AudioArtifact { path })
    }

    /// Delete artifacts older than `max_age`. Returns how many were removed.
    pub async fn sweep_older_than(&self, max_age: Duration) -> anyhow::Result<usize> {
        let cutoff = Utc::now() - max_age;
        let mut removed = 0usize;

        let mut entries = tokio::fs::read_dir(&self.dir)
            .await
            .with_context(|| format!("reading artifact dir {}", self.dir.display()))?;

        while let Some(entry) = entries.next_entry().await? {
            let metadata = match entry.metadata().await {
                Ok(m) if m.is_file() => m,
                _ => continue,
            };
            let modified = match metadata.modified() {
                Ok(t) => DateTime::<Utc>::from(t),
                Err(_) => continue,
            };
            if modified < cutoff {
                if tokio::fs::remove_file(entry.path()).await.is_ok() {
                    tracing::info!(path = %entry.path().display(), "Swept old audio artifact");
                    removed += 1;
                }
            }
        }

        Ok(removed)
    }
}

/// Handle to one temporary audio file. The holder owns the file and is
/// expected to call `remove` after the audio has been delivered; the
/// periodic sweep catches anything left behind.
#[derive(Debug)]
pub struct AudioArtifact {
    path: PathBuf,
}

impl AudioArtifact {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn read(&self) -> std::io::Result<Vec<u8>> {
        tokio::fs::read(&self.path).await
    }

    pub async fn remove(self) -> std::io::Result<()> {
        tokio::fs::remove_file(&self.path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_create_writes_unique_mp3_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path()).unwrap();

        let a = store.create(b"first").await.unwrap();
        let b = store.create(b"second").await.unwrap();

        assert_ne!(a.path(), b.path());
        assert_eq!(a.path().extension().unwrap(), "mp3");
        assert_eq!(a.read().await.unwrap(), b"first");
        assert_eq!(b.read().await.unwrap(), b"second");
    }

    #[tokio::test]
    async fn test_remove_deletes_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path()).unwrap();

        let artifact = store.create(b"bytes").await.unwrap();
        let path = artifact.path().to_path_buf();
        assert!(path.exists());

        artifact.remove().await.unwrap();
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_sweep_ignores_fresh_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path()).unwrap();

        let artifact = store.create(b"fresh").await.unwrap();
        let removed = store.sweep_older_than(Duration::hours(24)).await.unwrap();

        assert_eq!(removed, 0);
        assert!(artifact.path().exists());
    }

    #[tokio::test]
    async fn test_sweep_removes_aged_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path()).unwrap();

        let artifact = store.create(b"old").await.unwrap();
        // A negative age puts the cutoff in the future, so everything is swept
        let removed = store.sweep_older_than(Duration::seconds(-5)).await.unwrap();

        assert_eq!(removed, 1);
        assert!(!artifact.path().exists());
    }
}
