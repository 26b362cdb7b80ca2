//! Alternative rotation formalisms and rotation sampling helpers used when
//! parameterizing camera and object poses over a viewing sphere.

use crate::{UnitQuat, Vector3};
use parry3d_f64::na::{Quaternion, Unit};
use rand::Rng;
use std::f64::consts::{PI, TAU};

/// A three-angle rotation built on spherical coordinates. Two angles pick a
/// point on a unit sphere around the object -- `theta` the azimuth and `phi`
/// the polar angle from the +Z pole -- which defines the direction the
/// object's +Z axis is rotated onto; `roll` then twists about that direction.
///
/// The identity rotation is `(0, 0, 0)`. Like every three-value rotation
/// representation this one has singularities: at the poles `theta` and `roll`
/// are redundant and only their sum matters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spherical {
    /// Azimuthal angle in radians, normalized into `[0, 2*pi)`
    pub theta: f64,

    /// Polar angle in radians, 0 at the north pole
    pub phi: f64,

    /// Twist about the viewing direction in radians
    pub roll: f64,
}

impl Spherical {
    /// Create a spherical rotation; each angle is reduced modulo `2*pi` into
    /// `[0, 2*pi)`.
    pub fn new(theta: f64, phi: f64, roll: f64) -> Self {
        Self {
            theta: theta.rem_euclid(TAU),
            phi: phi.rem_euclid(TAU),
            roll: roll.rem_euclid(TAU),
        }
    }

    /// Recover the spherical angles from a quaternion by tracking where it
    /// sends the +Z axis and extracting the residual twist.
    pub fn from_quaternion(q: &UnitQuat) -> Self {
        let z = q * Vector3::z();
        let theta = z.y.atan2(z.x);
        let phi = z.z.clamp(-1.0, 1.0).acos();

        // Undo the axis-moving part of the rotation; what is left is the roll
        // about +Z. The rotation_between fallback covers the antipodal case.
        let unrotate = UnitQuat::rotation_between(&z, &Vector3::z())
            .unwrap_or_else(|| UnitQuat::from_axis_angle(&Vector3::x_axis(), PI));
        let residual = unrotate * *q;
        let (_, _, yaw) = residual.euler_angles();

        Self::new(theta, phi, yaw - theta)
    }

    /// The equivalent quaternion: a twist of `roll + theta` about +Z followed
    /// by tipping the pole down to the `(theta, phi)` direction.
    pub fn to_quaternion(&self) -> UnitQuat {
        let twist = UnitQuat::from_axis_angle(&Vector3::z_axis(), self.roll + self.theta);
        let tangent = Unit::new_normalize(Vector3::new(-self.theta.sin(), self.theta.cos(), 0.0));
        let tip = UnitQuat::from_axis_angle(&tangent, self.phi);
        tip * twist
    }
}

/// Generates `n` rotations sampled uniformly from SO(3), using Shoemake's
/// subgroup algorithm so that only uniform variates are needed.
pub fn random_rotations(n: usize, rng: &mut impl Rng) -> Vec<UnitQuat> {
    (0..n)
        .map(|_| {
            let u1: f64 = rng.random();
            let a: f64 = rng.random::<f64>() * TAU;
            let b: f64 = rng.random::<f64>() * TAU;
            let q = Quaternion::new(
                (1.0 - u1).sqrt() * a.sin(),
                (1.0 - u1).sqrt() * a.cos(),
                u1.sqrt() * b.sin(),
                u1.sqrt() * b.cos(),
            );
            UnitQuat::from_quaternion(q)
        })
        .collect()
}

/// Generates `n` approximately evenly spaced directions over a sphere using
/// the golden spiral, returned as `(theta, phi)` pairs of azimuthal and polar
/// angles.
pub fn uniform_sphere(n: usize) -> Vec<(f64, f64)> {
    (0..n)
        .map(|i| {
            // Half-integer offsets keep the spiral off the poles
            let k = i as f64 + 0.5;
            let phi = (2.0 * k / n as f64 - 1.0).acos();
            let theta = (PI * (1.0 + 5.0_f64.sqrt()) * k).rem_euclid(TAU);
            (theta, phi)
        })
        .collect()
}
