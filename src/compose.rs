use image::imageops;
use image::RgbImage;

use crate::config::PipelineConfig;
use crate::regions::BoundingBox;

/// Crops `region` out of `img` with `padding` pixels of margin on every side,
/// clamped so the crop never reads outside the source.
pub fn crop_region(img: &RgbImage, region: &BoundingBox, padding: u32) -> RgbImage {
    let x0 = region.x.saturating_sub(padding);
    let y0 = region.y.saturating_sub(padding);
    let x1 = (region.x + region.width + padding).min(img.width());
    let y1 = (region.y + region.height + padding).min(img.height());
    imageops::crop_imm(img, x0, y0, x1 - x0, y1 - y0).to_image()
}

/// Crops both matched regions and lays them out side by side for inspection.
pub fn compose(
    img_a: &RgbImage,
    box_a: &BoundingBox,
    img_b: &RgbImage,
    box_b: &BoundingBox,
    config: &PipelineConfig,
) -> RgbImage {
    let padding = config.crop_padding();
    let crop_a = crop_region(img_a, box_a, padding);
    let crop_b = crop_region(img_b, box_b, padding);
    side_by_side(&crop_a, &crop_b)
}

/// Paints both crops top-aligned onto a black canvas, the second immediately
/// to the right of the first. Whatever the shorter crop leaves uncovered
/// stays black.
pub fn side_by_side(crop_a: &RgbImage, crop_b: &RgbImage) -> RgbImage {
    let width = crop_a.width() + crop_b.width();
    let height = crop_a.height().max(crop_b.height());
    let mut canvas = RgbImage::new(width, height);
    imageops::replace(&mut canvas, crop_a, 0, 0);
    imageops::replace(&mut canvas, crop_b, crop_a.width() as i64, 0);
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn patterned(width: u32, height: u32, seed: u8) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| {
            Rgb([seed, (x % 256) as u8, (y % 256) as u8])
        })
    }

    #[test]
    fn canvas_fits_both_crops_exactly() {
        let crop_a = patterned(40, 30, 1);
        let crop_b = patterned(50, 45, 2);
        let canvas = side_by_side(&crop_a, &crop_b);
        assert_eq!(canvas.dimensions(), (90, 45));

        for y in 0..30 {
            for x in 0..40 {
                assert_eq!(canvas.get_pixel(x, y), crop_a.get_pixel(x, y));
            }
        }
        for y in 0..45 {
            for x in 0..50 {
                assert_eq!(canvas.get_pixel(40 + x, y), crop_b.get_pixel(x, y));
            }
        }
        // below the shorter crop the canvas stays black
        for y in 30..45 {
            for x in 0..40 {
                assert_eq!(canvas.get_pixel(x, y), &Rgb([0, 0, 0]));
            }
        }
    }

    #[test]
    fn crop_padding_is_clamped_to_image_bounds() {
        let img = patterned(100, 100, 3);
        let region = BoundingBox {
            x: 0,
            y: 0,
            width: 60,
            height: 60,
        };
        let crop = crop_region(&img, &region, 15);
        assert_eq!(crop.dimensions(), (75, 75));
        assert_eq!(crop.get_pixel(0, 0), img.get_pixel(0, 0));
    }

    #[test]
    fn interior_crop_carries_full_padding() {
        let img = patterned(200, 200, 4);
        let region = BoundingBox {
            x: 50,
            y: 50,
            width: 60,
            height: 60,
        };
        let crop = crop_region(&img, &region, 15);
        assert_eq!(crop.dimensions(), (90, 90));
        assert_eq!(crop.get_pixel(0, 0), img.get_pixel(35, 35));
    }
}
