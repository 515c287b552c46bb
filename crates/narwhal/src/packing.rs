//! Packing of component bounding boxes.

use crate::geometry::IPoint;

/// Places axis-aligned boxes without overlap.
///
/// `boxes[i]` is a size (`x` = width, `y` = height); the result holds the lower-left corner of
/// box `i` at index `i`.
pub trait CcPacker {
    fn pack(&self, boxes: &[IPoint], target_ratio: f64) -> Vec<IPoint>;
}

/// Greedy row packer.
///
/// Boxes are taken tallest first. Each one is appended to the existing row or opens the new row
/// that keeps the overall drawing smallest once stretched to `target_ratio` (width / height).
#[derive(Debug, Clone, Copy, Default)]
pub struct TileToRowsPacker;

#[derive(Debug, Clone, Copy)]
struct Row {
    y: i64,
    width: i64,
    height: i64,
}

impl TileToRowsPacker {
    fn score(width: i64, height: i64, ratio: f64) -> f64 {
        (width as f64).max(height as f64 * ratio)
    }
}

impl CcPacker for TileToRowsPacker {
    fn pack(&self, boxes: &[IPoint], target_ratio: f64) -> Vec<IPoint> {
        let ratio = if target_ratio.is_finite() && target_ratio > 0.0 {
            target_ratio
        } else {
            1.0
        };

        let mut order: Vec<usize> = (0..boxes.len()).collect();
        order.sort_by_key(|&i| std::cmp::Reverse(boxes[i].y));

        let mut rows: Vec<Row> = Vec::new();
        let mut total_width: i64 = 0;
        let mut total_height: i64 = 0;
        let mut offsets = vec![IPoint::origin(); boxes.len()];

        for i in order {
            let size = boxes[i];

            // `None` stands for a fresh row.
            let mut best: Option<usize> = None;
            let mut best_score = Self::score(
                total_width.max(size.x),
                total_height + size.y,
                ratio,
            );
            for (r, row) in rows.iter().enumerate() {
                if size.y > row.height {
                    continue;
                }
                let score = Self::score(total_width.max(row.width + size.x), total_height, ratio);
                let better = match best {
                    None => score <= best_score,
                    Some(_) => score < best_score,
                };
                if better {
                    best = Some(r);
                    best_score = score;
                }
            }

            let r = match best {
                Some(r) => r,
                None => {
                    rows.push(Row {
                        y: total_height,
                        width: 0,
                        height: size.y,
                    });
                    total_height += size.y;
                    rows.len() - 1
                }
            };
            let row = &mut rows[r];
            offsets[i] = IPoint::new(row.width, row.y);
            row.width += size.x;
            total_width = total_width.max(row.width);
        }

        tracing::trace!(
            boxes = boxes.len(),
            rows = rows.len(),
            width = total_width,
            height = total_height,
            "packed component boxes"
        );
        offsets
    }
}
