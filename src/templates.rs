//! HTML page rendering.

use std::{
    io,
    path::{Path, PathBuf},
};

use async_trait::async_trait;

use crate::{FflError, Result};

pub const INDEX_TEMPLATE: &str = "index.html";

#[async_trait]
pub trait TemplateRenderer: Send + Sync {
    async fn render(&self, name: &str) -> Result<String>;
}

/// Serves templates straight from a directory, re-read on every request.
#[derive(Debug, Clone)]
pub struct FileTemplates {
    dir: PathBuf,
}

impl FileTemplates {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn resolve(&self, name: &str) -> Option<PathBuf> {
        let relative = Path::new(name);
        // Only bare file names; no traversal out of the template directory.
        if relative.components().count() != 1 || relative.file_name().is_none() {
            return None;
        }
        Some(self.dir.join(relative))
    }
}

#[async_trait]
impl TemplateRenderer for FileTemplates {
    async fn render(&self, name: &str) -> Result<String> {
        let missing = || FflError::TemplateMissing {
            name: name.to_string(),
        };
        let path = self.resolve(name).ok_or_else(missing)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(html) => Ok(html),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(missing()),
            Err(e) => Err(e.into()),
        }
    }
}
