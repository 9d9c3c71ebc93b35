use image::GrayImage;
use imageproc::contours::{find_contours, BorderType};
use serde::Serialize;

/// Axis-aligned box around one detected component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl BoundingBox {
    /// Keep only boxes at least `min_side` wide and tall and `min_height` tall
    pub fn is_glyph_sized(&self, min_side: u32, min_height: u32) -> bool {
        self.width >= min_side && self.height >= min_side && self.height >= min_height
    }
}

/// Bounding boxes of the outermost borders in `mask`, in discovery order.
/// Borders of holes and anything nested inside them are ignored.
pub fn external_boxes(mask: &GrayImage) -> Vec<BoundingBox> {
    find_contours::<u32>(mask)
        .into_iter()
        .filter(|contour| {
            matches!(contour.border_type, BorderType::Outer) && contour.parent.is_none()
        })
        .filter_map(|contour| {
            let first = contour.points.first()?;
            let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
            for p in &contour.points {
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
        })
        .collect()
}
