use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use image::{GrayImage, RgbImage};
use log::warn;

use crate::error::PipelineError;

/// Output directory of one run, plus the composite counter that names the
/// `img{N}.jpg` files in match-discovery order.
pub struct RunDir {
    root: PathBuf,
    composites: usize,
}

impl RunDir {
    /// Creates the output directory, named by the local wall-clock timestamp
    /// unless overridden. Creation failure is reported but not fatal: a
    /// second run within the same second lands in the first run's directory
    /// and the two runs' files intermingle. Known limitation, kept as-is.
    pub fn create(override_path: Option<&Path>) -> RunDir {
        let root = match override_path {
            Some(path) => path.to_path_buf(),
            None => PathBuf::from(Local::now().format("%Y%m%d %H:%M:%S").to_string()),
        };
        if let Err(err) = fs::create_dir(&root) {
            warn!("creation of the directory {} failed: {}", root.display(), err);
        }
        RunDir {
            root,
            composites: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    pub fn save_mask(&self, name: &str, mask: &GrayImage) -> Result<(), PipelineError> {
        let path = self.root.join(name);
        mask.save(&path)
            .map_err(|source| PipelineError::ImageWrite { path, source })
    }

    /// Writes the next `img{N}.jpg`; the counter only advances on success.
    pub fn save_composite(&mut self, composite: &RgbImage) -> Result<PathBuf, PipelineError> {
        let path = self.root.join(format!("img{}.jpg", self.composites));
        composite.save(&path).map_err(|source| PipelineError::ImageWrite {
            path: path.clone(),
            source,
        })?;
        self.composites += 1;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    #[test]
    fn composites_are_numbered_from_zero() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("run");
        let mut run_dir = RunDir::create(Some(&target));

        let canvas = RgbImage::new(8, 8);
        let first = run_dir.save_composite(&canvas).unwrap();
        let second = run_dir.save_composite(&canvas).unwrap();
        assert_eq!(first, target.join("img0.jpg"));
        assert_eq!(second, target.join("img1.jpg"));
        assert!(first.exists() && second.exists());
    }

    #[test]
    fn existing_directory_is_reused() {
        let tmp = tempfile::tempdir().unwrap();
        // second create hits the already-existing directory and carries on
        let mut run_dir = RunDir::create(Some(tmp.path()));
        let saved = run_dir.save_composite(&RgbImage::new(4, 4)).unwrap();
        assert!(saved.exists());
    }
}
