pub mod compose;
pub mod config;
pub mod error;
pub mod matching;
pub mod output;
pub mod preprocess;
pub mod regions;

use std::path::Path;

use image::RgbImage;
use log::info;

use config::PipelineConfig;
use error::PipelineError;
use output::RunDir;

/// Runs the whole pipeline once: preprocess each photo, extract blob boxes,
/// match them across the two photos and write a side-by-side composite per
/// match. With a single input photo the matching stage is skipped and every
/// detected region is written out as a padded crop instead.
pub fn run(
    file_a: &Path,
    file_b: Option<&Path>,
    config: &PipelineConfig,
) -> Result<(), PipelineError> {
    let mut run_dir = RunDir::create(config.output_dir.as_deref());

    let image_a = load_rgb(file_a)?;
    let mask_a = preprocess::preprocess(&image_a, config);
    if config.debug_masks {
        run_dir.save_mask("th1.jpg", &mask_a)?;
    }
    let boxes_a = regions::extract_boxes(&mask_a, config);
    info!("{}: {} region(s)", file_a.display(), boxes_a.len());

    let Some(file_b) = file_b else {
        for region in &boxes_a {
            let crop = compose::crop_region(&image_a, region, config.crop_padding());
            run_dir.save_composite(&crop)?;
        }
        return Ok(());
    };

    let image_b = load_rgb(file_b)?;
    let mask_b = preprocess::preprocess(&image_b, config);
    if config.debug_masks {
        run_dir.save_mask("th2.jpg", &mask_b)?;
    }
    let boxes_b = regions::extract_boxes(&mask_b, config);
    info!("{}: {} region(s)", file_b.display(), boxes_b.len());

    let pairs = matching::match_boxes(&boxes_a, &boxes_b);
    info!("{} matched pair(s)", pairs.len());
    for (box_a, box_b) in pairs {
        let composite = compose::compose(&image_a, &box_a, &image_b, &box_b, config);
        run_dir.save_composite(&composite)?;
    }

    Ok(())
}

fn load_rgb(path: &Path) -> Result<RgbImage, PipelineError> {
    let img = image::open(path).map_err(|source| PipelineError::ImageRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(img.to_rgb8())
}
