use std::ops::{Neg, Add, AddAssign, Sub, SubAssign, Mul, Div, DivAssign, Index};
use std::fmt;

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use bytemuck::{Pod, Zeroable};

use crate::error::{QuatError, QuatResult};

/// Three component vector used as the imaginary part of a quaternion
/// and as the point type for rotations.
#[repr(C)]
#[derive(PartialEq, Clone, Copy, Default, Debug, Pod, Zeroable)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}
impl Vec3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub fn len(&self) -> f64 {
        self.len_sq().sqrt()
    }

    pub fn len_sq(&self) -> f64 {
        self.dot(*self)
    }

    pub fn dot(&self, vec: Vec3) -> f64 {
        self.x*vec.x + self.y*vec.y + self.z*vec.z
    }

    pub fn cross(&self, vec: Vec3) -> Self {
        Self::new(
            self.y*vec.z - self.z*vec.y,
            self.z*vec.x - self.x*vec.z,
            self.x*vec.y - self.y*vec.x,
        )
    }

    /// Divides by the vector's own length. A zero vector yields NaN components.
    pub fn normalized(&self) -> Self {
        *self / self.len()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    pub fn to_array(self) -> [f64; 3] {
        self.into()
    }
}

impl Neg for Vec3 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    fn mul(self, other: f64) -> Self::Output {
        Self::new(self.x * other, self.y * other, self.z * other)
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;

    fn mul(self, other: Vec3) -> Self::Output {
        other * self
    }
}

impl Div<f64> for Vec3 {
    type Output = Self;

    fn div(self, other: f64) -> Self::Output {
        Self::new(self.x / other, self.y / other, self.z / other)
    }
}

impl DivAssign<f64> for Vec3 {
    fn div_assign(&mut self, other: f64) {
        *self = *self / other;
    }
}

impl Index<usize> for Vec3 {
    type Output = f64;

    /// Panics for an index above 2, like array indexing.
    fn index(&self, i: usize) -> &f64 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 index out of range: {i}"),
        }
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from(arr: [f64; 3]) -> Vec3 {
        Vec3::new(arr[0], arr[1], arr[2])
    }
}

impl From<Vec3> for [f64; 3] {
    fn from(vec: Vec3) -> [f64; 3] {
        [vec.x, vec.y, vec.z]
    }
}

impl TryFrom<&[f64]> for Vec3 {
    type Error = QuatError;

    fn try_from(elems: &[f64]) -> QuatResult<Vec3> {
        match *elems {
            [x, y, z] => Ok(Vec3::new(x, y, z)),
            _ => Err(
                QuatError::InvalidArgument(
                    format!("expected 3 vector elements, got {}", elems.len())
                )
            ),
        }
    }
}

impl From<cgmath::Vector3<f64>> for Vec3 {
    fn from(vec: cgmath::Vector3<f64>) -> Vec3 {
        Vec3::new(vec.x, vec.y, vec.z)
    }
}

impl From<Vec3> for cgmath::Vector3<f64> {
    fn from(vec: Vec3) -> cgmath::Vector3<f64> {
        cgmath::Vector3::new(vec.x, vec.y, vec.z)
    }
}

impl AbsDiffEq for Vec3 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        f64::abs_diff_eq(&self.x, &other.x, epsilon)
            && f64::abs_diff_eq(&self.y, &other.y, epsilon)
            && f64::abs_diff_eq(&self.z, &other.z, epsilon)
    }
}

impl RelativeEq for Vec3 {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        f64::relative_eq(&self.x, &other.x, epsilon, max_relative)
            && f64::relative_eq(&self.y, &other.y, epsilon, max_relative)
            && f64::relative_eq(&self.z, &other.z, epsilon, max_relative)
    }
}

impl UlpsEq for Vec3 {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        f64::ulps_eq(&self.x, &other.x, epsilon, max_ulps)
            && f64::ulps_eq(&self.y, &other.y, epsilon, max_ulps)
            && f64::ulps_eq(&self.z, &other.z, epsilon, max_ulps)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}, {:?}, {:?}]", self.x, self.y, self.z)
    }
}


#[test]
fn cross_test() {
    let v  = Vec3::new(4.0, 3.0, 6.0);
    let v2 = Vec3::new(2.0, 9.0, 3.0);

    let cross = v.cross(v2);
    assert!(cross == Vec3::new(-45.0, 0.0, 30.0));
}

#[test]
fn dot_test() {
    let v  = Vec3::new(4.0, 3.0, 6.0);
    let v2 = Vec3::new(2.0, 9.0, 3.0);

    let dot = v.dot(v2);
    assert!(dot == 53.0);
}

#[test]
fn cross_matches_cgmath() {
    use cgmath::Vector3;

    let v  = Vec3::new(1.5, -2.0, 0.25);
    let v2 = Vec3::new(-3.0, 0.5, 4.0);

    let expected: Vec3 = Vector3::from(v).cross(Vector3::from(v2)).into();
    assert_eq!(v.cross(v2), expected);
}

#[test]
fn normalized_has_unit_length() {
    let v = Vec3::new(4.0, 3.0, 6.0).normalized();
    approx::assert_abs_diff_eq!(v.len(), 1.0, epsilon = 1e-12);
}

#[test]
fn normalized_zero_is_nan() {
    assert!(!Vec3::zero().normalized().is_finite());
}

#[test]
fn index_by_position() {
    let v = Vec3::new(1.0, 2.0, 3.0);
    assert_eq!([v[0], v[1], v[2]], [1.0, 2.0, 3.0]);
}

#[test]
fn try_from_slice_checks_length() {
    let ok = Vec3::try_from(&[1.0, 2.0, 3.0][..]);
    assert_eq!(ok.unwrap(), Vec3::new(1.0, 2.0, 3.0));

    let short = Vec3::try_from(&[1.0, 2.0][..]);
    assert!(matches!(short, Err(QuatError::InvalidArgument(_))));
}

#[test]
fn display_form() {
    assert_eq!(Vec3::new(2.0, 3.0, 4.0).to_string(), "[2.0, 3.0, 4.0]");
}
