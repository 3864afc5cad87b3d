//! Quaternion arithmetic: Hamilton products, conjugates, norms, inverses and
//! axis-angle rotations of 3D points.
//!
//! ```
//! use quaternion::Quaternion;
//!
//! let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
//! assert_eq!(q * Quaternion::new(1.0, 4.0, 5.0, 6.0), Quaternion::new(-46.0, 4.0, 12.0, 8.0));
//! assert_eq!(2.0 * q, q * 2.0);
//!
//! let qrot = Quaternion::rotation([0.0, 0.0, 1.0], std::f64::consts::PI);
//! let p = qrot.rotate([1.0, 0.0, 0.0]);
//! assert!((p[0] + 1.0).abs() < 1e-12);
//! ```
//!
//! `Quaternion` is a plain `Copy` value. Every operation returns a new value
//! except `set` and `normalize_in_place`, which take `&mut self`, so the borrow
//! checker already rules out reading an instance while it is being mutated.
//!
//! Zero-length inputs to `inverse`, `normalize`, `normalize_in_place` and
//! `rotation` are not guarded and produce NaN components.

pub mod error;
pub mod vector;
pub mod quaternion;
pub mod config;

pub use crate::error::{QuatError, QuatResult};
pub use crate::quaternion::{Quaternion, Slot, IntoSlot, Component, Operand};
pub use crate::vector::Vec3;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[test]
fn has_version() {
    assert!(!VERSION.is_empty());
}
