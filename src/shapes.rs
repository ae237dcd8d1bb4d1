//! Line rasterization for pixel-perfect strokes.
//!
//! Converts a segment between two grid coordinates into the ordered list of
//! integer cells it passes through.

/// Rasterize a line using Bresenham's line algorithm.
///
/// Returns cells in order from `p0` to `p1`, both endpoints included. The
/// path is 8-connected. Coordinates are not clipped; callers skip points
/// that fall outside their grid.
///
/// # Examples
///
/// ```
/// use pixelpad::shapes::rasterize_line;
///
/// let pixels = rasterize_line((0, 0), (3, 3));
/// assert_eq!(pixels, vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
///
/// assert_eq!(rasterize_line((5, 5), (5, 5)), vec![(5, 5)]);
/// ```
pub fn rasterize_line(p0: (i32, i32), p1: (i32, i32)) -> Vec<(i32, i32)> {
    let (mut x0, mut y0) = p0;
    let (x1, y1) = p1;

    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = (x1 - x0).signum();
    let sy = (y1 - y0).signum();
    let mut err = dx - dy;

    let mut pixels = Vec::with_capacity(dx.max(dy) as usize + 1);

    loop {
        pixels.push((x0, y0));

        if x0 == x1 && y0 == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x0 += sx;
        }
        if e2 < dx {
            err += dx;
            y0 += sy;
        }
    }

    pixels
}
