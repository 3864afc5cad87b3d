use std::ops::{Neg, Add, Sub, Mul, Div};
use std::fmt;

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use bytemuck::{Pod, Zeroable};

use crate::error::{QuatError, QuatResult};
use crate::vector::Vec3;

/// `w + x*i + y*j + z*k`, stored as a scalar part and a vector part.
///
/// Equality is exact. Use the `approx` traits for tolerance based comparison.
#[repr(C)]
#[derive(PartialEq, Clone, Copy, Default, Debug, Pod, Zeroable)]
pub struct Quaternion {
    pub w: f64,
    pub v: Vec3,
}
impl Quaternion {
    pub fn new(w: f64, xi: f64, yj: f64, zk: f64) -> Self {
        Self {
            w,
            v: Vec3::new(xi, yj, zk),
        }
    }

    /// Build from a scalar and a vector part, given either as a `Vec3` or as
    /// `[x, y, z]`. The vector is copied in.
    pub fn from_parts<V: Into<Vec3>>(w: f64, v: V) -> Self {
        Self { w, v: v.into() }
    }

    /// Build from a scalar and a runtime sized vector part.
    pub fn from_scalar_slice(w: f64, v: &[f64]) -> QuatResult<Self> {
        Ok(Self::from_parts(w, Vec3::try_from(v)?))
    }

    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Unit quaternion for a rotation of `theta` radians around `axis`.
    /// The axis is normalized first; a zero axis gives NaN components.
    pub fn rotation<V: Into<Vec3>>(axis: V, theta: f64) -> Self {
        let axis = axis.into().normalized();
        let half = theta / 2.0;
        let q = Self::from_parts(half.cos(), axis * half.sin());

        log::trace!("rotation of {theta} rad around {axis}: {q}");
        degenerate_check("rotation", &q);
        q
    }

    /// Same as [`Quaternion::rotation`] for an axis whose length is only
    /// known at runtime.
    pub fn try_rotation(axis: &[f64], theta: f64) -> QuatResult<Self> {
        Ok(Self::rotation(Vec3::try_from(axis)?, theta))
    }

    pub fn get<I: IntoSlot>(&self, index: I) -> QuatResult<Component> {
        let comp = match index.into_slot()? {
            Slot::W => Component::Scalar(self.w),
            Slot::X => Component::Scalar(self.v.x),
            Slot::Y => Component::Scalar(self.v.y),
            Slot::Z => Component::Scalar(self.v.z),
            Slot::V => Component::Vector(self.v),
        };
        Ok(comp)
    }

    /// Replace one slot, leaving the others untouched.
    pub fn set<I, C>(&mut self, index: I, value: C) -> QuatResult<()>
    where
        I: IntoSlot,
        C: Into<Component>,
    {
        let slot = index.into_slot()?;
        match (slot, value.into()) {
            (Slot::W, Component::Scalar(s)) => self.w = s,
            (Slot::X, Component::Scalar(s)) => self.v.x = s,
            (Slot::Y, Component::Scalar(s)) => self.v.y = s,
            (Slot::Z, Component::Scalar(s)) => self.v.z = s,
            (Slot::V, Component::Vector(v)) => self.v = v,
            (Slot::V, Component::Scalar(_)) => {
                return Err(
                    QuatError::InvalidArgument(
                        String::from("slot v takes a 3 element vector")
                    )
                );
            }
            (slot, Component::Vector(_)) => {
                return Err(
                    QuatError::InvalidArgument(
                        format!("slot {slot} takes a scalar")
                    )
                );
            }
        }
        Ok(())
    }

    pub fn conjugate(&self) -> Self {
        Self::from_parts(self.w, -self.v)
    }

    pub fn norm_squared(&self) -> f64 {
        self.w*self.w + self.v.dot(self.v)
    }

    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    pub fn magnitude(&self) -> f64 {
        self.norm()
    }

    /// Conjugate divided by the square of the norm. The zero quaternion has
    /// no inverse and yields NaN components.
    pub fn inverse(&self) -> Self {
        let inv = self.conjugate() / self.norm().powi(2);
        degenerate_check("inverse", &inv);
        inv
    }

    pub fn normalize(&self) -> Self {
        let unit = *self / self.magnitude();
        degenerate_check("normalize", &unit);
        unit
    }

    /// Divide this quaternion by its own magnitude and hand it back for
    /// chaining.
    pub fn normalize_in_place(&mut self) -> &mut Self {
        let m = self.magnitude();

        self.w /= m;
        self.v /= m;

        degenerate_check("normalize_in_place", self);
        self
    }

    /// Rotate `point` by the sandwich product `q * (0, point) * q'`.
    ///
    /// The quaternion is assumed to be of unit length. Otherwise the result
    /// is also scaled by the squared norm.
    pub fn rotate<P>(&self, point: P) -> P
    where
        P: Into<Vec3> + From<Vec3>,
    {
        let p = Self::from_parts(0.0, point);
        let res = *self * p * self.conjugate();
        P::from(res.v)
    }

    /// Multiply by an operand whose kind is only known at runtime.
    pub fn checked_mul<O: Into<Operand>>(&self, other: O) -> QuatResult<Self> {
        match other.into() {
            Operand::Quaternion(q) => Ok(*self * q),
            Operand::Scalar(s) => Ok(*self * s),
            Operand::Vector(v) => Err(
                QuatError::InvalidArgument(
                    format!("cannot multiply a quaternion by vector {v}")
                )
            ),
        }
    }

    /// Divide by an operand whose kind is only known at runtime. Only
    /// scalars are accepted.
    pub fn checked_div<O: Into<Operand>>(&self, other: O) -> QuatResult<Self> {
        match other.into() {
            Operand::Scalar(s) => Ok(*self / s),
            Operand::Quaternion(q) => Err(
                QuatError::InvalidArgument(
                    format!("division by quaternion {q} is not supported")
                )
            ),
            Operand::Vector(v) => Err(
                QuatError::InvalidArgument(
                    format!("cannot divide a quaternion by vector {v}")
                )
            ),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.w.is_finite() && self.v.is_finite()
    }

    /// View as `[w, x, y, z]`.
    pub fn as_array(&self) -> &[f64; 4] {
        bytemuck::cast_ref(self)
    }

    fn scale(self, s: f64) -> Self {
        Self::from_parts(self.w * s, self.v * s)
    }
}

fn degenerate_check(op: &str, q: &Quaternion) {
    if !q.is_finite() {
        log::debug!("{op} produced a non-finite quaternion: {q}");
    }
}

/// The five addressable parts of a quaternion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    W,
    X,
    Y,
    Z,
    V,
}
impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Slot::W => "w",
            Slot::X => "x",
            Slot::Y => "y",
            Slot::Z => "z",
            Slot::V => "v",
        };
        f.write_str(name)
    }
}

/// Anything that can name a quaternion slot: positions 0 to 3, the names
/// w, x, y, z, v, or a `Slot` itself.
pub trait IntoSlot {
    fn into_slot(self) -> QuatResult<Slot>;
}
impl IntoSlot for Slot {
    fn into_slot(self) -> QuatResult<Slot> {
        Ok(self)
    }
}
impl IntoSlot for usize {
    fn into_slot(self) -> QuatResult<Slot> {
        match self {
            0 => Ok(Slot::W),
            1 => Ok(Slot::X),
            2 => Ok(Slot::Y),
            3 => Ok(Slot::Z),
            _ => Err(QuatError::InvalidIndex(self.to_string())),
        }
    }
}
impl IntoSlot for &str {
    fn into_slot(self) -> QuatResult<Slot> {
        match self {
            "w" => Ok(Slot::W),
            "x" => Ok(Slot::X),
            "y" => Ok(Slot::Y),
            "z" => Ok(Slot::Z),
            "v" => Ok(Slot::V),
            _ => Err(QuatError::InvalidIndex(self.to_string())),
        }
    }
}
impl IntoSlot for char {
    fn into_slot(self) -> QuatResult<Slot> {
        let mut buf = [0; 4];
        let name: &str = self.encode_utf8(&mut buf);
        name.into_slot()
    }
}

/// Value stored in a slot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Component {
    Scalar(f64),
    Vector(Vec3),
}
impl From<f64> for Component {
    fn from(s: f64) -> Self {
        Self::Scalar(s)
    }
}
impl From<Vec3> for Component {
    fn from(v: Vec3) -> Self {
        Self::Vector(v)
    }
}
impl From<[f64; 3]> for Component {
    fn from(v: [f64; 3]) -> Self {
        Self::Vector(v.into())
    }
}

/// Right hand side of a runtime dispatched multiplication or division.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operand {
    Scalar(f64),
    Vector(Vec3),
    Quaternion(Quaternion),
}
impl From<f64> for Operand {
    fn from(s: f64) -> Self {
        Self::Scalar(s)
    }
}
impl From<Vec3> for Operand {
    fn from(v: Vec3) -> Self {
        Self::Vector(v)
    }
}
impl From<Quaternion> for Operand {
    fn from(q: Quaternion) -> Self {
        Self::Quaternion(q)
    }
}

impl Neg for Quaternion {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from_parts(-self.w, -self.v)
    }
}

impl Add for Quaternion {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self::from_parts(self.w + other.w, self.v + other.v)
    }
}

impl Sub for Quaternion {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Self::from_parts(self.w - other.w, self.v - other.v)
    }
}

impl Mul for Quaternion {
    type Output = Self;

    /// Hamilton product.
    fn mul(self, other: Self) -> Self::Output {
        let w = self.w*other.w - self.v.dot(other.v);
        let v = other.v*self.w + self.v*other.w + self.v.cross(other.v);

        Self::from_parts(w, v)
    }
}

// Scalars on either side of `*` scale every component. Division only takes
// a scalar on the right.
macro_rules! impl_scalar_ops {
    ($($t:ty),*) => {$(
        impl Mul<$t> for Quaternion {
            type Output = Self;

            fn mul(self, other: $t) -> Self::Output {
                self.scale(f64::from(other))
            }
        }

        impl Mul<Quaternion> for $t {
            type Output = Quaternion;

            fn mul(self, other: Quaternion) -> Self::Output {
                other * self
            }
        }

        impl Div<$t> for Quaternion {
            type Output = Self;

            fn div(self, other: $t) -> Self::Output {
                let s = f64::from(other);
                Self::from_parts(self.w / s, self.v / s)
            }
        }
    )*};
}
impl_scalar_ops!(f64, i32);

impl From<[f64; 4]> for Quaternion {
    fn from(arr: [f64; 4]) -> Quaternion {
        bytemuck::cast(arr)
    }
}

impl From<Quaternion> for [f64; 4] {
    fn from(quat: Quaternion) -> [f64; 4] {
        bytemuck::cast(quat)
    }
}

impl TryFrom<&[f64]> for Quaternion {
    type Error = QuatError;

    fn try_from(elems: &[f64]) -> QuatResult<Quaternion> {
        match *elems {
            [w, x, y, z] => Ok(Quaternion::new(w, x, y, z)),
            _ => Err(
                QuatError::InvalidArgument(
                    format!("expected 4 quaternion elements, got {}", elems.len())
                )
            ),
        }
    }
}

impl From<cgmath::Quaternion<f64>> for Quaternion {
    fn from(quat: cgmath::Quaternion<f64>) -> Quaternion {
        Quaternion::from_parts(quat.s, Vec3::from(quat.v))
    }
}

impl From<Quaternion> for cgmath::Quaternion<f64> {
    fn from(quat: Quaternion) -> cgmath::Quaternion<f64> {
        cgmath::Quaternion::from_sv(quat.w, quat.v.into())
    }
}

impl AbsDiffEq for Quaternion {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        f64::abs_diff_eq(&self.w, &other.w, epsilon)
            && Vec3::abs_diff_eq(&self.v, &other.v, epsilon)
    }
}

impl RelativeEq for Quaternion {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        f64::relative_eq(&self.w, &other.w, epsilon, max_relative)
            && Vec3::relative_eq(&self.v, &other.v, epsilon, max_relative)
    }
}

impl UlpsEq for Quaternion {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        f64::ulps_eq(&self.w, &other.w, epsilon, max_ulps)
            && Vec3::ulps_eq(&self.v, &other.v, epsilon, max_ulps)
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Quaternion({:?}; {})", self.w, self.v)
    }
}


#[cfg(test)]
use approx::{assert_abs_diff_eq, assert_relative_eq};

#[cfg(test)]
fn sample() -> Quaternion {
    Quaternion::new(1.0, 2.0, 3.0, 4.0)
}

#[test]
fn construction_forms_agree() {
    for &(w, x, y, z) in &[(1.0, 2.0, 3.0, 4.0), (-0.5, 0.0, 7.25, -3.0), (0.0, 0.0, 0.0, 0.0)] {
        let q = Quaternion::new(w, x, y, z);
        assert_eq!(q, Quaternion::from_parts(w, [x, y, z]));
        assert_eq!(q, Quaternion::from_parts(w, Vec3::new(x, y, z)));
        assert_eq!(q, Quaternion::from_scalar_slice(w, &[x, y, z]).unwrap());
        assert_eq!(q, Quaternion::try_from(&[w, x, y, z][..]).unwrap());
    }
}

#[test]
fn construction_copies_vector() {
    let mut v = Vec3::new(2.0, 3.0, 4.0);
    let q = Quaternion::from_parts(1.0, v);
    v.x = 100.0;

    assert_eq!(q.v.x, 2.0);
    assert_eq!(v.x, 100.0);
}

#[test]
fn construction_rejects_wrong_lengths() {
    let short = Quaternion::from_scalar_slice(1.0, &[2.0, 3.0]);
    assert!(matches!(short, Err(QuatError::InvalidArgument(_))));

    let long = Quaternion::try_from(&[1.0, 2.0, 3.0, 4.0, 5.0][..]);
    assert!(matches!(long, Err(QuatError::InvalidArgument(_))));

    let pair = Quaternion::try_from(&[1.0, 2.0][..]);
    assert!(matches!(pair, Err(QuatError::InvalidArgument(_))));
}

#[test]
fn getter() {
    let q = sample();

    assert_eq!(q.get(0).unwrap(), Component::Scalar(1.0));
    assert_eq!(q.get("w").unwrap(), Component::Scalar(1.0));

    assert_eq!(q.get(1).unwrap(), Component::Scalar(2.0));
    assert_eq!(q.get("x").unwrap(), Component::Scalar(2.0));

    assert_eq!(q.get(2).unwrap(), Component::Scalar(3.0));
    assert_eq!(q.get('y').unwrap(), Component::Scalar(3.0));

    assert_eq!(q.get(3).unwrap(), Component::Scalar(4.0));
    assert_eq!(q.get(Slot::Z).unwrap(), Component::Scalar(4.0));

    assert_eq!(q.get("v").unwrap(), Component::Vector(Vec3::new(2.0, 3.0, 4.0)));
}

#[test]
fn positional_and_named_access_agree() {
    let q = Quaternion::new(-1.5, 0.25, 8.0, -2.0);
    for (pos, name) in ["w", "x", "y", "z"].iter().enumerate() {
        assert_eq!(q.get(pos).unwrap(), q.get(*name).unwrap());
    }
}

#[test]
fn getter_rejects_unknown_index() {
    let q = sample();

    assert!(matches!(q.get(4), Err(QuatError::InvalidIndex(_))));
    assert!(matches!(q.get("i"), Err(QuatError::InvalidIndex(_))));
    assert!(matches!(q.get('q'), Err(QuatError::InvalidIndex(_))));
}

#[test]
fn setter() {
    let mut q = sample();

    q.set(0, -1.0).unwrap();
    assert_eq!(q, Quaternion::new(-1.0, 2.0, 3.0, 4.0));

    q.set(1, -2.0).unwrap();
    assert_eq!(q, Quaternion::new(-1.0, -2.0, 3.0, 4.0));

    q.set("y", -3.0).unwrap();
    assert_eq!(q, Quaternion::new(-1.0, -2.0, -3.0, 4.0));

    q.set(3, -4.0).unwrap();
    assert_eq!(q, Quaternion::new(-1.0, -2.0, -3.0, -4.0));

    q.set("v", Vec3::new(5.0, 6.0, 7.0)).unwrap();
    assert_eq!(q, Quaternion::new(-1.0, 5.0, 6.0, 7.0));

    q.set(Slot::V, [8.0, 9.0, 10.0]).unwrap();
    assert_eq!(q, Quaternion::new(-1.0, 8.0, 9.0, 10.0));
}

#[test]
fn setter_rejects_mismatched_values() {
    let mut q = sample();

    assert!(matches!(q.set("v", 1.0), Err(QuatError::InvalidArgument(_))));
    assert!(matches!(q.set(0, [1.0, 2.0, 3.0]), Err(QuatError::InvalidArgument(_))));
    assert!(matches!(q.set(7, 1.0), Err(QuatError::InvalidIndex(_))));
    assert_eq!(q, sample());
}

#[test]
fn compare() {
    assert!(sample() == Quaternion::new(1.0, 2.0, 3.0, 4.0));
    assert!(sample() != Quaternion::new(1.0, 2.0, 3.0, 4.000001));
}

#[test]
fn add_and_subtract() {
    let q1 = sample();
    let q2 = Quaternion::new(5.0, 6.0, 7.0, 8.0);
    assert_eq!(q1 + q2, Quaternion::new(6.0, 8.0, 10.0, 12.0));

    let q3 = Quaternion::new(5.0, 4.0, 3.0, 2.0);
    assert_eq!(q1 - q3, Quaternion::new(-4.0, -2.0, 0.0, 2.0));
}

#[test]
fn additive_inverse() {
    for q in [sample(), Quaternion::new(-0.3, 1e6, -2.5, 0.0)] {
        assert_eq!(q + (-1.0) * q, Quaternion::zero());
        assert_eq!(q + (-q), Quaternion::zero());
    }
}

#[test]
fn multiplier() {
    let q = sample();
    let expected = Quaternion::new(2.0, 4.0, 6.0, 8.0);
    assert_eq!(expected, q * 2);
    assert_eq!(expected, 2 * q);
    assert_eq!(expected, 2.0 * q);

    let q1 = Quaternion::new(1.0, 4.0, 5.0, 6.0);
    assert_eq!(q * q1, Quaternion::new(-46.0, 4.0, 12.0, 8.0));
}

#[test]
fn scalar_multiplication_commutes() {
    let q = Quaternion::new(0.3, -1.7, 2.2, 9.5);
    for s in [0.0, -1.0, 0.125, 3.7, 1e-9] {
        assert_eq!(q * s, s * q);
    }
}

#[test]
fn hamilton_product_matches_cgmath() {
    let a = Quaternion::new(0.3, -1.7, 2.2, 9.5);
    let b = Quaternion::new(-4.1, 0.6, 0.0, 1.25);

    let expected: Quaternion = (cgmath::Quaternion::from(a) * cgmath::Quaternion::from(b)).into();
    assert_relative_eq!(a * b, expected, epsilon = 1e-12);
}

#[test]
fn checked_operations() {
    let q = sample();
    let q1 = Quaternion::new(1.0, 4.0, 5.0, 6.0);

    assert_eq!(q.checked_mul(q1).unwrap(), q * q1);
    assert_eq!(q.checked_mul(2.0).unwrap(), q * 2.0);
    assert!(matches!(q.checked_mul(Vec3::zero()), Err(QuatError::InvalidArgument(_))));

    assert_eq!(q.checked_div(2.0).unwrap(), q / 2.0);
    assert!(matches!(q.checked_div(q1), Err(QuatError::InvalidArgument(_))));
    assert!(matches!(q.checked_div(Vec3::zero()), Err(QuatError::InvalidArgument(_))));
}

#[test]
fn divide() {
    assert_eq!(sample() / 2.0, Quaternion::new(0.5, 1.0, 1.5, 2.0));
    assert_eq!(sample() / 2, Quaternion::new(0.5, 1.0, 1.5, 2.0));
}

#[test]
fn conjugate() {
    assert_eq!(sample().conjugate(), Quaternion::new(1.0, -2.0, -3.0, -4.0));
}

#[test]
fn norm() {
    assert_abs_diff_eq!(sample().norm(), 30.0f64.sqrt(), epsilon = 1e-12);
    assert_eq!(sample().norm(), sample().magnitude());
    assert_eq!(Quaternion::zero().norm(), 0.0);
    assert!(Quaternion::new(-1.0, 0.0, 0.0, 0.0).norm() > 0.0);
}

#[test]
fn inverse() {
    let q = sample();
    let expected = Quaternion::new(1.0 / 30.0, -2.0 / 30.0, -3.0 / 30.0, -4.0 / 30.0);

    assert_eq!(q.inverse(), expected);
    assert_abs_diff_eq!(q * q.inverse(), Quaternion::identity(), epsilon = 1e-12);
}

#[test]
fn inverse_divides_by_squared_norm() {
    let q = Quaternion::new(4.251780324267058, -2.982646465279968, -4.729700748308315, -4.317615937169021);
    let n = q.norm();

    assert_eq!(q.inverse(), q.conjugate() / (n * n));
    assert_eq!(q.inverse().w, 0.06253933987306642);
}

#[test]
fn inverse_of_zero_is_not_finite() {
    assert!(!Quaternion::zero().inverse().is_finite());
    assert!(!Quaternion::zero().normalize().is_finite());
}

#[test]
fn normalize() {
    let m = 30.0f64.sqrt();
    let expected = Quaternion::new(1.0 / m, 2.0 / m, 3.0 / m, 4.0 / m);

    assert_eq!(sample().normalize(), expected);
}

#[test]
fn normalize_in_place() {
    let m = 30.0f64.sqrt();
    let expected = Quaternion::new(1.0 / m, 2.0 / m, 3.0 / m, 4.0 / m);
    let mut q = sample();
    q.normalize_in_place();

    assert_eq!(q, expected);
    assert_eq!(q, sample().normalize());
}

#[test]
fn normalize_in_place_chains() {
    let mut q = Quaternion::new(0.0, 3.0, 0.0, 4.0);
    let w = q.normalize_in_place().conjugate();

    assert_eq!(w, Quaternion::new(0.0, -0.6, 0.0, -0.8));
}

#[test]
fn normalize_is_idempotent() {
    let unit = Quaternion::new(0.3, -1.7, 2.2, 9.5).normalize();

    assert_abs_diff_eq!(unit.norm(), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(unit.normalize(), unit, epsilon = 1e-12);
}

#[test]
fn rotate_point() {
    let qrot = Quaternion::rotation([1.0, 1.0, 1.0], std::f64::consts::FRAC_PI_2);

    let rotated = qrot.rotate([1.0, 0.0, 0.0]);
    let expected = [0.3333333333333334, 0.9106836025229592, -0.24401693585629253];
    for i in 0..3 {
        assert_abs_diff_eq!(rotated[i], expected[i], epsilon = 1e-6);
    }

    let rotated = qrot.rotate(Vec3::new(1.0, 0.0, 0.0));
    assert_abs_diff_eq!(rotated, Vec3::from(expected), epsilon = 1e-6);
}

#[test]
fn rotation_matches_cgmath() {
    use cgmath::{InnerSpace, Rad, Rotation, Rotation3, Vector3};

    let axis = Vec3::new(0.2, -1.0, 3.5);
    let theta = 1.234;
    let point = Vec3::new(-2.0, 0.5, 7.0);

    let reference = cgmath::Quaternion::from_axis_angle(Vector3::from(axis).normalize(), Rad(theta));
    let ours = Quaternion::rotation(axis, theta);

    assert_abs_diff_eq!(ours, Quaternion::from(reference), epsilon = 1e-12);
    assert_abs_diff_eq!(
        ours.rotate(point),
        Vec3::from(reference.rotate_vector(point.into())),
        epsilon = 1e-9
    );
}

#[test]
fn rotation_is_unit() {
    let axes = [[1.0, 1.0, 1.0], [0.0, 0.0, -3.0], [1e-3, 2.0, -7.5]];
    for axis in axes {
        for theta in [0.0, 0.1, 1.0, std::f64::consts::PI, 5.0, -2.5] {
            assert_abs_diff_eq!(Quaternion::rotation(axis, theta).norm(), 1.0, epsilon = 1e-12);
        }
    }
}

#[test]
fn rotation_from_slice() {
    let q = Quaternion::try_rotation(&[0.0, 0.0, 2.0], std::f64::consts::PI).unwrap();
    assert_abs_diff_eq!(q.rotate([1.0, 0.0, 0.0])[0], -1.0, epsilon = 1e-12);

    let bad = Quaternion::try_rotation(&[0.0, 1.0], 1.0);
    assert!(matches!(bad, Err(QuatError::InvalidArgument(_))));
}

#[test]
fn rotation_around_zero_axis_is_not_finite() {
    assert!(!Quaternion::rotation(Vec3::zero(), 1.0).is_finite());
}

#[test]
fn rotate_with_non_unit_scales() {
    let q = Quaternion::identity() * 2.0;
    assert_eq!(q.rotate([1.0, 2.0, 3.0]), [4.0, 8.0, 12.0]);
}

#[test]
fn array_view() {
    let q = sample();
    assert_eq!(q.as_array(), &[1.0, 2.0, 3.0, 4.0]);
    assert_eq!(<[f64; 4]>::from(q), [1.0, 2.0, 3.0, 4.0]);
    assert_eq!(Quaternion::from([1.0, 2.0, 3.0, 4.0]), q);

    let pair = [q, q.conjugate()];
    let raw: &[f64] = bytemuck::cast_slice(&pair);
    assert_eq!(raw, &[1.0, 2.0, 3.0, 4.0, 1.0, -2.0, -3.0, -4.0]);
}

#[test]
fn display() {
    assert_eq!(sample().to_string(), "Quaternion(1.0; [2.0, 3.0, 4.0])");
}
