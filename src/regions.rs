use image::GrayImage;
use imageproc::contours::find_contours;
use imageproc::point::Point;
use imageproc::rect::Rect;

use crate::config::PipelineConfig;

/// Axis-aligned bounding box of one detected blob, in pixel coordinates of
/// its source image. Never mutated after extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl BoundingBox {
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub(crate) fn to_rect(self) -> Rect {
        Rect::at(self.x as i32, self.y as i32).of_size(self.width, self.height)
    }

    fn enclosing(points: &[Point<u32>]) -> Option<BoundingBox> {
        let first = points.first()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in points {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Some(BoundingBox {
            x: min_x,
            y: min_y,
            width: max_x - min_x + 1,
            height: max_y - min_y + 1,
        })
    }
}

/// Finds every contour in the mask and keeps the bounding boxes whose width
/// and height both strictly exceed `min_region_size`. The full contour
/// hierarchy is traced but only the outline geometry matters here. Discovery
/// order is whatever the tracer produces; nothing downstream relies on it.
pub fn extract_boxes(mask: &GrayImage, config: &PipelineConfig) -> Vec<BoundingBox> {
    find_contours::<u32>(mask)
        .iter()
        .filter_map(|contour| BoundingBox::enclosing(&contour.points))
        .filter(|b| b.width > config.min_region_size && b.height > config.min_region_size)
        .collect()
}
