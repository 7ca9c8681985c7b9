use std::sync::LazyLock;

use rewarp_image::Image;

use crate::error::WarpError;

/// A 4x4 bicubic weight matrix indexed as `[row][col]`.
pub type Weights4x4 = [[f32; 4]; 4];

/// Keys cubic convolution kernel with `a = -0.5`.
///
/// # Arguments
///
/// * `d` - Signed distance between the sample point and a pixel center.
///
/// # Returns
///
/// The weight of that pixel. It is 1 at `d = 0`, 0 at every other integer distance and
/// 0 for `|d| >= 2`.
///
/// # Example
///
/// ```
/// use rewarp_imgproc::interpolation::cubic_weight;
///
/// assert_eq!(cubic_weight(0.0), 1.0);
/// assert_eq!(cubic_weight(1.0), 0.0);
/// assert_eq!(cubic_weight(-2.5), 0.0);
/// ```
pub fn cubic_weight(d: f32) -> f32 {
    let d = d.abs();
    if d < 1.0 {
        1.5 * d * d * d - 2.5 * d * d + 1.0
    } else if d < 2.0 {
        -0.5 * d * d * d + 2.5 * d * d - 4.0 * d + 2.0
    } else {
        0.0
    }
}

/// The half of the pixel cell a sample falls into, relative to its nearest pixel.
///
/// A sample left of (above) its nearest pixel takes its 4-sample window one pixel further
/// left (up) than a sample right of (below) it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    /// Left and above the nearest pixel.
    TopLeft,
    /// Right and above the nearest pixel.
    TopRight,
    /// Left and below the nearest pixel.
    BottomLeft,
    /// Right and below the nearest pixel.
    BottomRight,
}

impl Quadrant {
    /// All quadrants in table order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    /// Selects the quadrant from the offsets to the nearest pixel, each in `[-0.5, 0.5]`.
    pub fn from_offsets(tx: f32, ty: f32) -> Self {
        match (tx < 0.0, ty < 0.0) {
            (true, true) => Quadrant::TopLeft,
            (false, true) => Quadrant::TopRight,
            (true, false) => Quadrant::BottomLeft,
            (false, false) => Quadrant::BottomRight,
        }
    }

    /// Window origin `(x, y)` relative to the nearest pixel.
    pub fn origin(&self) -> (isize, isize) {
        match self {
            Quadrant::TopLeft => (-2, -2),
            Quadrant::TopRight => (-1, -2),
            Quadrant::BottomLeft => (-2, -1),
            Quadrant::BottomRight => (-1, -1),
        }
    }

    fn representative_offsets(&self) -> (f32, f32) {
        match self {
            Quadrant::TopLeft => (-0.25, -0.25),
            Quadrant::TopRight => (0.25, -0.25),
            Quadrant::BottomLeft => (-0.25, 0.25),
            Quadrant::BottomRight => (0.25, 0.25),
        }
    }

    fn index(&self) -> usize {
        match self {
            Quadrant::TopLeft => 0,
            Quadrant::TopRight => 1,
            Quadrant::BottomLeft => 2,
            Quadrant::BottomRight => 3,
        }
    }
}

fn axis_weights(t: f32, origin: isize) -> [f32; 4] {
    let mut weights = [0.0; 4];
    for (k, w) in weights.iter_mut().enumerate() {
        *w = cubic_weight(t - (origin + k as isize) as f32);
    }
    weights
}

/// Builds the 4x4 weight matrix for offsets `(tx, ty)` to the nearest pixel.
pub fn weight_matrix(tx: f32, ty: f32) -> Weights4x4 {
    let (ox, oy) = Quadrant::from_offsets(tx, ty).origin();
    let wx = axis_weights(tx, ox);
    let wy = axis_weights(ty, oy);

    let mut weights = [[0.0; 4]; 4];
    for (row, wy) in weights.iter_mut().zip(wy) {
        for (w, wx) in row.iter_mut().zip(wx) {
            *w = wy * wx;
        }
    }
    weights
}

static QUADRANT_WEIGHTS: LazyLock<[Weights4x4; 4]> = LazyLock::new(|| {
    Quadrant::ALL.map(|q| {
        let (tx, ty) = q.representative_offsets();
        weight_matrix(tx, ty)
    })
});

/// The memoized weight table of a quadrant, built at offsets `(±0.25, ±0.25)`.
pub fn quadrant_weights(quadrant: Quadrant) -> &'static Weights4x4 {
    &QUADRANT_WEIGHTS[quadrant.index()]
}

/// Kernel for bicubic convolution interpolation
///
/// The sample at `(u, v)` is the Frobenius inner product of the 4x4 pixel window chosen by
/// its [`Quadrant`] and a 4x4 weight matrix. The weights come from the exact offsets, or
/// from the memoized quadrant table when `quantized` is set.
///
/// # Arguments
///
/// * `image` - The (usually padded) input image.
/// * `u` - The x coordinate of the pixel to interpolate, in `image` coordinates.
/// * `v` - The y coordinate of the pixel to interpolate, in `image` coordinates.
/// * `quantized` - Use the per-quadrant tables instead of exact weights.
///
/// # Errors
///
/// Returns [`WarpError::OutOfRangeWindow`] if the window does not fit inside `image`.
pub(crate) fn bicubic_interpolation(
    image: &Image<u8>,
    u: f32,
    v: f32,
    quantized: bool,
) -> Result<f32, WarpError> {
    let (rows, cols) = (image.rows(), image.cols());

    let (nu, nv) = (u.round(), v.round());
    let (tx, ty) = (u - nu, v - nv);
    let quadrant = Quadrant::from_offsets(tx, ty);
    let (ox, oy) = quadrant.origin();

    let x0 = nu as isize + ox;
    let y0 = nv as isize + oy;
    if x0 < 0 || y0 < 0 || x0 + 4 > cols as isize || y0 + 4 > rows as isize {
        return Err(WarpError::OutOfRangeWindow(x0, y0, cols, rows));
    }
    let (x0, y0) = (x0 as usize, y0 as usize);

    let exact;
    let weights = if quantized {
        quadrant_weights(quadrant)
    } else {
        exact = weight_matrix(tx, ty);
        &exact
    };

    let mut acc = 0.0;
    for (r, weight_row) in weights.iter().enumerate() {
        for (c, w) in weight_row.iter().enumerate() {
            acc += w * *image.get_unchecked(x0 + c, y0 + r) as f32;
        }
    }

    Ok(acc)
}
