use std::collections::BTreeMap;

use karst_world::RegionDims;

use crate::store::FloorRect;

/// Greedily merges one layer bucket (flat tile index, ascending, to texture
/// id) into maximal axis-aligned rectangles.
///
/// The lowest remaining index anchors each rectangle. Width grows rightward
/// while the next tile carries the same texture; height then grows a full row
/// at a time, all-or-nothing. Entries are consumed as they are covered, so the
/// bucket is empty on return and no tile is emitted twice. Growth is clamped
/// to the chunk's horizontal extent (`base_x`/`base_y`) and the region edge;
/// a rectangle never spans two chunks even when a run continues across the
/// boundary.
pub fn merge_layer_rects(
    bucket: &mut BTreeMap<usize, u32>,
    dims: &RegionDims,
    base_x: usize,
    base_y: usize,
) -> Vec<FloorRect> {
    let mut out = Vec::new();
    let x_limit = (base_x + dims.chunk).min(dims.width);
    let y_limit = (base_y + dims.chunk).min(dims.height);

    while let Some((anchor, tex)) = bucket.pop_first() {
        let (ax, ay, az) = dims.tile_coords(anchor);

        // Rows are contiguous in x, so the neighbor to the right is anchor + w.
        let mut w = 1usize;
        while ax + w < x_limit {
            let next = anchor + w;
            if bucket.get(&next) != Some(&tex) {
                break;
            }
            bucket.remove(&next);
            w += 1;
        }

        let mut h = 1usize;
        'rows: while ay + h < y_limit {
            let row = ay + h;
            for gx in ax..ax + w {
                if bucket.get(&dims.tile_index(gx, row, az)) != Some(&tex) {
                    break 'rows;
                }
            }
            for gx in ax..ax + w {
                bucket.remove(&dims.tile_index(gx, row, az));
            }
            h += 1;
        }

        out.push(FloorRect {
            x: ax as i32,
            y: ay as i32,
            z: az as i32,
            w: w as i32,
            h: h as i32,
            tex,
        });
    }
    out
}
