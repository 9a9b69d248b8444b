//! Delivery sinks for finished documents.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::RenderedDocument;

/// Destination for rendered documents.
///
/// Delivery runs only after a document has been generated in full, so a sink
/// never sees partial output.
pub trait Delivery {
    fn deliver(&mut self, filename: &str, document: &RenderedDocument) -> io::Result<()>;
}

impl<D: Delivery + ?Sized> Delivery for &mut D {
    fn deliver(&mut self, filename: &str, document: &RenderedDocument) -> io::Result<()> {
        (**self).deliver(filename, document)
    }
}

/// Writes each document into a directory, creating it if needed.
#[derive(Debug, Clone)]
pub struct DirectoryDelivery {
    dir: PathBuf,
}

impl DirectoryDelivery {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path a document named `filename` is written to.
    pub fn path_for(&self, filename: &str) -> io::Result<PathBuf> {
        let plain = Path::new(filename)
            .file_name()
            .is_some_and(|name| name == filename);
        if !plain || filename.contains(['/', '\\']) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("not a plain file name: {filename:?}"),
            ));
        }
        Ok(self.dir.join(filename))
    }
}

impl Delivery for DirectoryDelivery {
    fn deliver(&mut self, filename: &str, document: &RenderedDocument) -> io::Result<()> {
        let path = self.path_for(filename)?;
        fs::create_dir_all(&self.dir)?;

        // Write beside the target and rename, so the final name only ever
        // holds a complete file.
        let partial = self.dir.join(format!(".{filename}.part"));
        fs::write(&partial, &document.bytes)?;
        if let Err(e) = fs::rename(&partial, &path) {
            let _ = fs::remove_file(&partial);
            return Err(e);
        }

        debug!(path = %path.display(), bytes = document.len(), "wrote document");
        Ok(())
    }
}

/// Keeps delivered documents in memory, in delivery order.
#[derive(Debug, Clone, Default)]
pub struct MemoryDelivery {
    files: Vec<(String, RenderedDocument)>,
}

impl MemoryDelivery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files(&self) -> &[(String, RenderedDocument)] {
        &self.files
    }

    /// The most recent document delivered under `filename`.
    pub fn get(&self, filename: &str) -> Option<&RenderedDocument> {
        self.files
            .iter()
            .rev()
            .find(|(name, _)| name == filename)
            .map(|(_, doc)| doc)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn into_files(self) -> Vec<(String, RenderedDocument)> {
        self.files
    }
}

impl Delivery for MemoryDelivery {
    fn deliver(&mut self, filename: &str, document: &RenderedDocument) -> io::Result<()> {
        self.files.push((filename.to_string(), document.clone()));
        Ok(())
    }
}
