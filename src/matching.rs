use log::trace;

use crate::regions::BoundingBox;

/// Two blobs within 20% of each other's area are plausibly the same coin.
const AREA_RATIO_TOLERANCE: f64 = 0.2;

/// Decides whether two boxes, one from each photograph, show the same object.
/// The areas must agree within [`AREA_RATIO_TOLERANCE`] and the boxes must
/// overlap when intersected as if both photos shared one coordinate space.
/// That overlap test is a positional heuristic: it only holds up when the two
/// shots were framed alike.
pub fn boxes_match(a: &BoundingBox, b: &BoundingBox) -> bool {
    // larger over smaller keeps the test symmetric in its arguments
    let (larger, smaller) = if a.area() >= b.area() {
        (a.area(), b.area())
    } else {
        (b.area(), a.area())
    };
    if larger as f64 / smaller as f64 - 1.0 > AREA_RATIO_TOLERANCE {
        return false;
    }
    a.to_rect().intersect(b.to_rect()).is_some()
}

/// Dense cross product of the two box lists. Every passing pair is reported
/// independently, so a box can show up in several pairs; no one-to-one
/// assignment is attempted.
pub fn match_boxes(
    boxes_a: &[BoundingBox],
    boxes_b: &[BoundingBox],
) -> Vec<(BoundingBox, BoundingBox)> {
    let mut pairs = Vec::new();
    for a in boxes_a {
        for b in boxes_b {
            if boxes_match(a, b) {
                trace!("matched {:?} <-> {:?}", a, b);
                pairs.push((*a, *b));
            }
        }
    }
    pairs
}
