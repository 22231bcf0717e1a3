//! Multi-file image upload: validation, quota and preview pairing
//!
//! The browser hands a batch of picked files to [`UploadQueue::add_batch`].
//! Accepted files get a [`FileId`] on the spot; the data-URL previews are
//! read asynchronously afterwards and attached by id, so the order in which
//! the reads finish does not matter.

use serde::{Deserialize, Serialize};

use crate::error::UploadError;

const BYTES_PER_MB: u64 = 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadPolicy {
    pub max_files: usize,
    pub max_size_mb: u64,
    /// MIME type prefix, e.g. `image/`
    pub accept: String,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_files: crate::DEFAULT_MAX_FILES,
            max_size_mb: crate::DEFAULT_MAX_FILE_SIZE_MB,
            accept: crate::DEFAULT_ACCEPT.to_string(),
        }
    }
}

impl UploadPolicy {
    pub fn max_bytes(&self) -> u64 {
        self.max_size_mb.saturating_mul(BYTES_PER_MB)
    }

    pub fn accepts(&self, mime: &str) -> bool {
        mime.starts_with(&self.accept)
    }

    /// Value for the `accept` attribute of the file input
    pub fn accept_attr(&self) -> String {
        if self.accept.ends_with('/') {
            format!("{}*", self.accept)
        } else {
            self.accept.clone()
        }
    }

    /// Check a single file against size and type limits
    pub fn check<F: FileMeta + ?Sized>(&self, file: &F) -> Result<(), UploadError> {
        if file.size() > self.max_bytes() {
            return Err(UploadError::FileTooLarge {
                name: file.name(),
                max_mb: self.max_size_mb,
            });
        }
        if !self.accepts(&file.mime()) {
            return Err(UploadError::WrongType {
                name: file.name(),
                expected: self.accept.clone(),
            });
        }
        Ok(())
    }
}

/// What the queue needs to know about a picked file
pub trait FileMeta {
    fn name(&self) -> String;
    fn size(&self) -> u64;
    fn mime(&self) -> String;
}

/// Plain file metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingFile {
    pub name: String,
    pub size: u64,
    pub mime: String,
}

impl IncomingFile {
    pub fn new(name: impl Into<String>, size: u64, mime: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime: mime.into(),
        }
    }
}

impl FileMeta for IncomingFile {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn mime(&self) -> String {
        self.mime.clone()
    }
}

/// Identity of a selected file, assigned when the file is accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(u64);

impl FileId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub id: FileId,
    pub name: String,
    pub size: u64,
    /// Data URL, `None` while the read is pending
    pub preview: Option<String>,
}

/// Image already stored on the server (edit forms)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExistingImage {
    pub url: String,
    pub removed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadQueue {
    policy: UploadPolicy,
    existing: Vec<ExistingImage>,
    selected: Vec<SelectedFile>,
    errors: Vec<UploadError>,
    next_id: u64,
}

impl UploadQueue {
    pub fn new(policy: UploadPolicy) -> Self {
        Self {
            policy,
            ..Default::default()
        }
    }

    pub fn with_existing(mut self, urls: impl IntoIterator<Item = String>) -> Self {
        self.existing = urls
            .into_iter()
            .map(|url| ExistingImage {
                url,
                removed: false,
            })
            .collect();
        self
    }

    pub fn policy(&self) -> &UploadPolicy {
        &self.policy
    }

    pub fn selected(&self) -> &[SelectedFile] {
        &self.selected
    }

    pub fn existing(&self) -> &[ExistingImage] {
        &self.existing
    }

    /// Messages from the most recent batch
    pub fn errors(&self) -> &[UploadError] {
        &self.errors
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Images that will be present after saving
    pub fn count(&self) -> usize {
        self.existing.iter().filter(|e| !e.removed).count() + self.selected.len()
    }

    pub fn remaining(&self) -> usize {
        self.policy.max_files.saturating_sub(self.count())
    }

    /// Validate a batch of picked files.
    ///
    /// A batch that would exceed the quota is rejected as a whole with a
    /// single message. Otherwise each file is checked on its own; rejected
    /// files produce a message and the rest are accepted. Returns the
    /// accepted files paired with their new ids.
    pub fn add_batch<F: FileMeta>(&mut self, files: Vec<F>) -> Vec<(FileId, F)> {
        self.errors.clear();

        if self.count() + files.len() > self.policy.max_files {
            tracing::debug!(
                incoming = files.len(),
                current = self.count(),
                max = self.policy.max_files,
                "upload batch over quota"
            );
            self.errors.push(UploadError::TooManyFiles {
                max: self.policy.max_files,
            });
            return Vec::new();
        }

        let mut accepted = Vec::with_capacity(files.len());
        for file in files {
            if let Err(e) = self.policy.check(&file) {
                self.errors.push(e);
                continue;
            }

            let id = FileId(self.next_id);
            self.next_id += 1;
            self.selected.push(SelectedFile {
                id,
                name: file.name(),
                size: file.size(),
                preview: None,
            });
            accepted.push((id, file));
        }
        accepted
    }

    /// Attach a finished preview. Returns `false` when the file is gone.
    pub fn attach_preview(&mut self, id: FileId, data_url: impl Into<String>) -> bool {
        match self.selected.iter_mut().find(|f| f.id == id) {
            Some(file) => {
                file.preview = Some(data_url.into());
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: FileId) -> bool {
        let before = self.selected.len();
        self.selected.retain(|f| f.id != id);
        self.selected.len() != before
    }

    /// Toggle the removal mark of an existing image.
    ///
    /// Restoring an image counts against the quota; when the queue is
    /// already full the mark stays and a `TooManyFiles` message is set.
    /// Returns `false` when nothing changed.
    pub fn toggle_existing(&mut self, url: &str) -> bool {
        let full = self.count() >= self.policy.max_files;
        let Some(image) = self.existing.iter_mut().find(|e| e.url == url) else {
            return false;
        };

        self.errors.clear();
        if image.removed && full {
            self.errors.push(UploadError::TooManyFiles {
                max: self.policy.max_files,
            });
            return false;
        }
        image.removed = !image.removed;
        true
    }

    /// URLs of existing images marked for removal
    pub fn removed_existing(&self) -> Vec<String> {
        self.existing
            .iter()
            .filter(|e| e.removed)
            .map(|e| e.url.clone())
            .collect()
    }

    pub fn pending_previews(&self) -> usize {
        self.selected.iter().filter(|f| f.preview.is_none()).count()
    }

    pub fn ids(&self) -> Vec<FileId> {
        self.selected.iter().map(|f| f.id).collect()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
        self.errors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MB: u64 = BYTES_PER_MB;

    fn policy(max_files: usize) -> UploadPolicy {
        UploadPolicy {
            max_files,
            max_size_mb: 2,
            accept: "image/".into(),
        }
    }

    fn png(name: &str, size: u64) -> IncomingFile {
        IncomingFile::new(name, size, "image/png")
    }

    #[test]
    fn test_oversized_file_excluded_rest_selected() {
        let mut queue = UploadQueue::new(policy(10));
        let accepted = queue.add_batch(vec![
            png("a.png", MB),
            png("huge.png", 3 * MB),
            png("b.png", 2 * MB),
        ]);

        assert_eq!(accepted.len(), 2);
        assert_eq!(queue.selected().len(), 2);
        assert_eq!(queue.errors().len(), 1);
        assert_eq!(queue.errors()[0].file_name(), Some("huge.png"));
        assert!(queue.error_messages()[0].contains("huge.png"));
    }

    #[test]
    fn test_wrong_type_excluded() {
        let mut queue = UploadQueue::new(policy(10));
        let accepted = queue.add_batch(vec![
            IncomingFile::new("notes.pdf", 10, "application/pdf"),
            png("a.png", 10),
        ]);
        assert_eq!(accepted.len(), 1);
        assert!(matches!(
            queue.errors()[0],
            UploadError::WrongType { ref name, .. } if name == "notes.pdf"
        ));
    }

    #[test]
    fn test_batch_over_quota_adds_nothing() {
        let mut queue = UploadQueue::new(policy(3)).with_existing(vec!["/img/1.png".to_string()]);
        queue.add_batch(vec![png("a.png", 1)]);
        assert_eq!(queue.count(), 2);

        let accepted = queue.add_batch(vec![png("b.png", 1), png("c.png", 1)]);
        assert!(accepted.is_empty());
        assert_eq!(queue.count(), 2);
        assert_eq!(queue.errors(), &[UploadError::TooManyFiles { max: 3 }]);
    }

    #[test]
    fn test_quota_counts_invalid_files_in_batch() {
        let mut queue = UploadQueue::new(policy(2));
        let accepted = queue.add_batch(vec![
            png("a.png", 1),
            png("b.png", 1),
            png("huge.png", 5 * MB),
        ]);
        assert!(accepted.is_empty());
        assert_eq!(queue.errors().len(), 1);
    }

    #[test]
    fn test_errors_reset_per_batch() {
        let mut queue = UploadQueue::new(policy(5));
        queue.add_batch(vec![png("huge.png", 9 * MB)]);
        assert_eq!(queue.errors().len(), 1);
        queue.add_batch(vec![png("ok.png", 1)]);
        assert!(queue.errors().is_empty());
    }

    #[test]
    fn test_previews_pair_by_id_in_any_order() {
        let mut queue = UploadQueue::new(policy(5));
        let accepted = queue.add_batch(vec![png("a.png", 1), png("b.png", 1), png("c.png", 1)]);
        let ids: Vec<FileId> = accepted.iter().map(|(id, _)| *id).collect();
        assert_eq!(queue.pending_previews(), 3);

        assert!(queue.attach_preview(ids[2], "data:c"));
        assert!(queue.attach_preview(ids[0], "data:a"));
        assert!(queue.remove(ids[1]));
        // The read for a removed file finishes late and is dropped
        assert!(!queue.attach_preview(ids[1], "data:b"));

        let previews: Vec<(&str, Option<&str>)> = queue
            .selected()
            .iter()
            .map(|f| (f.name.as_str(), f.preview.as_deref()))
            .collect();
        assert_eq!(
            previews,
            vec![("a.png", Some("data:a")), ("c.png", Some("data:c"))]
        );
        assert_eq!(queue.pending_previews(), 0);
    }

    #[test]
    fn test_ids_are_unique_across_batches() {
        let mut queue = UploadQueue::new(policy(5));
        let first = queue.add_batch(vec![png("a.png", 1)]);
        queue.remove(first[0].0);
        let second = queue.add_batch(vec![png("a.png", 1)]);
        assert_ne!(first[0].0, second[0].0);
    }

    #[test]
    fn test_existing_images_can_be_removed() {
        let mut queue = UploadQueue::new(policy(2))
            .with_existing(vec!["/img/1.png".to_string(), "/img/2.png".to_string()]);
        assert_eq!(queue.remaining(), 0);

        queue.toggle_existing("/img/1.png");
        assert_eq!(queue.removed_existing(), vec!["/img/1.png".to_string()]);
        assert_eq!(queue.remaining(), 1);
        assert_eq!(queue.add_batch(vec![png("a.png", 1)]).len(), 1);

        queue.remove(queue.ids()[0]);
        assert!(queue.toggle_existing("/img/1.png"));
        assert!(queue.removed_existing().is_empty());
    }

    #[test]
    fn test_restoring_existing_image_respects_quota() {
        let mut queue = UploadQueue::new(policy(2))
            .with_existing(vec!["/img/1.png".to_string(), "/img/2.png".to_string()]);
        assert!(queue.toggle_existing("/img/1.png"));
        assert_eq!(queue.add_batch(vec![png("a.png", 1)]).len(), 1);

        assert!(!queue.toggle_existing("/img/1.png"));
        assert_eq!(queue.count(), 2);
        assert_eq!(queue.removed_existing(), vec!["/img/1.png".to_string()]);
        assert_eq!(queue.errors(), &[UploadError::TooManyFiles { max: 2 }]);

        // Dropping the new file frees the slot again
        queue.remove(queue.ids()[0]);
        assert!(queue.toggle_existing("/img/1.png"));
        assert!(queue.errors().is_empty());
        assert_eq!(queue.count(), 2);
    }

    #[test]
    fn test_toggle_unknown_image_is_ignored() {
        let mut queue = UploadQueue::new(policy(2)).with_existing(vec!["/img/1.png".to_string()]);
        assert!(!queue.toggle_existing("/img/9.png"));
        assert!(queue.errors().is_empty());
    }

    #[test]
    fn test_accept_attr() {
        assert_eq!(UploadPolicy::default().accept_attr(), "image/*");
        let pdf = UploadPolicy {
            accept: "application/pdf".into(),
            ..Default::default()
        };
        assert_eq!(pdf.accept_attr(), "application/pdf");
    }
}
