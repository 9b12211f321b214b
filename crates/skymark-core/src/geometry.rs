use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Checks if both x and y coordinates are zero
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the hypotenuse (Euclidean distance from origin)
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Creates a square size with equal width and height
    pub const fn square(side: f32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }
}

/// A 2D affine transform stored as a 4×4 homogeneous matrix.
///
/// The matrix is column-major and restricted in practice to translation,
/// rotation about the Z axis and non-uniform XY scaling. The combinators
/// compose in *local* space (post-multiplication), so
///
/// ```
/// use skymark_core::geometry::Transform;
///
/// let transform = Transform::identity()
///     .translate(10.0, 20.0)
///     .rotate_z(std::f32::consts::FRAC_PI_2)
///     .scale(2.0, 3.0);
/// # let _ = transform;
/// ```
///
/// first scales a local point, then rotates it, then translates it — the
/// scale is applied in unscaled local space last, which lets drawing
/// routines operate in a normalized `[-1, 1]` square regardless of the
/// requested on-screen size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// `cols[c][r]` holds row `r` of column `c`.
    cols: [[f32; 4]; 4],
}

impl Transform {
    /// Returns the identity transform.
    pub const fn identity() -> Self {
        Self {
            cols: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Multiplies this transform by `other` on the right (`self * other`),
    /// composing `other` in this transform's local space.
    fn compose(self, other: Self) -> Self {
        let mut cols = [[0.0; 4]; 4];
        for (c, col) in cols.iter_mut().enumerate() {
            for (r, cell) in col.iter_mut().enumerate() {
                *cell = (0..4).map(|k| self.cols[k][r] * other.cols[c][k]).sum();
            }
        }
        Self { cols }
    }

    /// Returns this transform followed by a local translation.
    pub fn translate(self, x: f32, y: f32) -> Self {
        let mut translation = Self::identity();
        translation.cols[3][0] = x;
        translation.cols[3][1] = y;
        self.compose(translation)
    }

    /// Returns this transform followed by a local rotation of `angle`
    /// radians about the Z axis.
    pub fn rotate_z(self, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        let mut rotation = Self::identity();
        rotation.cols[0][0] = cos;
        rotation.cols[0][1] = sin;
        rotation.cols[1][0] = -sin;
        rotation.cols[1][1] = cos;
        self.compose(rotation)
    }

    /// Returns this transform followed by a local non-uniform XY scale.
    pub fn scale(self, x: f32, y: f32) -> Self {
        let mut scaling = Self::identity();
        scaling.cols[0][0] = x;
        scaling.cols[1][1] = y;
        self.compose(scaling)
    }

    /// Applies the transform to a 2D point (homogeneous `w = 1`).
    pub fn apply(self, point: Point) -> Point {
        let x = point.x();
        let y = point.y();
        Point::new(
            self.cols[0][0] * x + self.cols[1][0] * y + self.cols[3][0],
            self.cols[0][1] * x + self.cols[1][1] * y + self.cols[3][1],
        )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
