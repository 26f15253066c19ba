use image::imageops;
use image::{GrayImage, RgbImage};
use imageproc::contrast::{otsu_level, threshold, ThresholdType};
use imageproc::filter::box_filter;

use crate::config::PipelineConfig;

/// Turns a color photograph into a 0/255 blob mask: grayscale, box blur to
/// knock down sensor noise, then Otsu binarization so the threshold adapts to
/// each shot's lighting.
pub fn preprocess(img: &RgbImage, config: &PipelineConfig) -> GrayImage {
    let gray = imageops::grayscale(img);

    // box_filter takes radii, kernel side = 2r + 1
    let radius = config.blur_size / 2;
    let blurred = box_filter(&gray, radius, radius);

    let level = otsu_level(&blurred);
    let threshold_type = if config.light_background {
        ThresholdType::BinaryInverted
    } else {
        ThresholdType::Binary
    };
    threshold(&blurred, level, threshold_type)
}
