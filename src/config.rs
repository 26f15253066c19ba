use std::path::PathBuf;

/// Tunables for one pipeline run. Tests construct these directly instead of
/// poking at globals.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Side of the square box-blur kernel applied before thresholding.
    pub blur_size: u32,
    /// Strict lower bound on both dimensions of a retained region.
    pub min_region_size: u32,
    /// Invert the mask after Otsu, for objects shot on a light background.
    pub light_background: bool,
    /// Write the binary masks (th1.jpg / th2.jpg) into the run directory.
    pub debug_masks: bool,
    /// Overrides the timestamp-named output directory.
    pub output_dir: Option<PathBuf>,
}

impl PipelineConfig {
    /// Padding added around a region before cropping, three blur kernels wide
    /// so thresholding artifacts at the blob edge stay inside the crop.
    pub fn crop_padding(&self) -> u32 {
        self.blur_size * 3
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            blur_size: 5,
            min_region_size: 50,
            light_background: false,
            debug_masks: false,
            output_dir: None,
        }
    }
}
