// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Runtime behavior of the generated vector types.
#![allow(missing_docs, clippy::unwrap_used, clippy::float_cmp)]

use linmath::{dvec2, ivec3, vec3, DVec2, DVec3, IVec2, IVec3, IndexOutOfRange, Vec2, Vec3, Vec4};

const EPS: f32 = 1e-6;

fn approx(a: Vec3, b: Vec3) {
    assert!((a - b).length() <= EPS, "{a} vs {b}");
}

#[test]
fn constructors_flatten_groups_left_to_right() {
    let v = Vec3::from_xy_z(Vec2::new(1.0, 2.0), 3.0);
    assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(Vec3::from_x_yz(1.0, Vec2::new(2.0, 3.0)), v);
    assert_eq!(
        Vec4::from_x_yz_w(1.0, Vec2::new(2.0, 3.0), 4.0),
        Vec4::new(1.0, 2.0, 3.0, 4.0)
    );
    assert_eq!(
        Vec4::from_xyz_w(v, 4.0),
        Vec4::from_xy_zw(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0))
    );
    assert_eq!(Vec3::splat(2.0), Vec3::from(2.0_f32));
    assert_eq!(Vec3::from([1.0, 2.0, 3.0]), v);
    assert_eq!(Vec3::from((1.0, 2.0, 3.0)), v);
}

#[test]
fn constants_and_layout() {
    let units = Vec3::UNIT_X + Vec3::UNIT_Y + Vec3::UNIT_Z;
    assert_eq!(Vec3::ZERO + units, Vec3::ONES);
    assert_eq!(Vec3::COUNT, 3);
    assert_eq!(Vec3::SIZE_IN_BYTES, 12);
    assert_eq!(DVec3::SIZE_IN_BYTES, 24);
    assert_eq!(core::mem::size_of::<Vec4>(), Vec4::SIZE_IN_BYTES);
}

#[test]
fn swizzles_read_and_write() {
    let mut v = Vec3::new(1.0, 2.0, 3.0);
    assert_eq!(v.xy(), Vec2::new(1.0, 2.0));
    assert_eq!(v.zyx(), Vec3::new(3.0, 2.0, 1.0));
    assert_eq!(v.xx(), Vec2::new(1.0, 1.0));

    v.set_xy(Vec2::new(7.0, 8.0));
    assert_eq!(v, Vec3::new(7.0, 8.0, 3.0));
    v.set_zx(Vec2::new(5.0, 6.0));
    assert_eq!(v, Vec3::new(6.0, 8.0, 5.0));
}

#[test]
fn aggregates() {
    let v = Vec3::new(1.0, 2.0, 2.0);
    assert_eq!(v.sum(), 5.0);
    assert_eq!(v.sqlength(), 9.0);
    assert_eq!(v.length(), 3.0);
    approx(v.normalized(), Vec3::new(1.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0));
    assert_eq!(Vec3::UNIT_X.cross(Vec3::UNIT_Y), Vec3::UNIT_Z);
    assert_eq!(IVec2::new(3, 4).length(), 5.0_f64);
}

#[test]
fn arithmetic_is_component_wise() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(4.0, 5.0, 6.0);
    assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
    assert_eq!(b - a, Vec3::splat(3.0));
    assert_eq!(a * b, Vec3::new(4.0, 10.0, 18.0));
    assert_eq!(b / a, Vec3::new(4.0, 2.5, 2.0));
    assert_eq!(a * 2.0, 2.0 * a);
    assert_eq!(12.0 / Vec3::new(1.0, 2.0, 3.0), Vec3::new(12.0, 6.0, 4.0));
    assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));
    assert_eq!(a.dot(b), 32.0);
}

#[test]
fn checked_and_panicking_indexing() {
    let mut v = Vec3::new(1.0, 2.0, 3.0);
    assert_eq!(v.get(2), Ok(3.0));
    v.set(0, 9.0).unwrap();
    v[1] = 8.0;
    assert_eq!((v[0], v[1]), (9.0, 8.0));

    let err = v.get(3).unwrap_err();
    assert_eq!(err, IndexOutOfRange::new(3, "Vec3"));
    assert_eq!(err.to_string(), "index 3 is out of range for Vec3");
    assert!(v.set(7, 0.0).is_err());
}

#[test]
#[should_panic(expected = "index 4 is out of range for IVec3")]
fn index_operator_panics_out_of_range() {
    let v = IVec3::new(1, 2, 3);
    let value: i32 = v[4];
    assert_eq!(value, 0);
}

#[test]
fn widening_is_implicit_and_narrowing_explicit() {
    let i = IVec3::new(1, 2, 3);
    assert_eq!(Vec3::from(i), Vec3::new(1.0, 2.0, 3.0));
    let d: DVec3 = Vec3::new(0.5, 1.5, 2.5).into();
    assert_eq!(d, DVec3::new(0.5, 1.5, 2.5));

    assert_eq!(Vec3::new(1.5, 2.5, 3.5).as_ivec3(), IVec3::new(1, 2, 3));
    assert_eq!(Vec3::new(-1.7, 0.2, 9.99).as_ivec3(), IVec3::new(-1, 0, 9));
    let d = DVec3::new(1.0, 2.0, 3.0);
    assert_eq!(d.as_vec3(), Vec3::new(1.0, 2.0, 3.0));
}

#[test]
fn deconstruct_and_display() {
    let v = Vec3::new(1.0, 2.5, -3.0);
    let (x, y, z) = v.deconstruct();
    assert_eq!((x, y, z), (1.0, 2.5, -3.0));
    let t: (f32, f32, f32) = v.into();
    assert_eq!(t, (1.0, 2.5, -3.0));
    assert_eq!(v.to_array(), [1.0, 2.5, -3.0]);
    assert_eq!(v.to_string(), "(1, 2.5, -3)");
    assert_eq!(IVec2::new(-4, 5).to_string(), "(-4, 5)");
}

#[test]
fn companion_functions() {
    let a = Vec3::new(1.25, -2.5, 4.0);
    assert_eq!(vec3::math::floor(a), Vec3::new(1.0, -3.0, 4.0));
    assert_eq!(vec3::math::fract(a), Vec3::new(0.25, 0.5, 0.0));
    assert_eq!(vec3::math::abs(a), Vec3::new(1.25, 2.5, 4.0));
    assert_eq!(
        vec3::math::min(a, Vec3::ZERO),
        Vec3::new(0.0, -2.5, 0.0)
    );
    assert_eq!(
        vec3::math::lerp(Vec3::ZERO, Vec3::splat(10.0), Vec3::splat(0.25)),
        Vec3::splat(2.5)
    );

    let p0 = Vec3::ZERO;
    let p1 = Vec3::new(1.0, 2.0, 0.0);
    let p2 = Vec3::new(2.0, 0.0, 0.0);
    assert_eq!(vec3::math::bezier(p0, p1, p2, Vec3::ZERO), p0);
    approx(vec3::math::bezier(p0, p1, p2, Vec3::ONES), p2);
    let mid = vec3::math::bezier(p0, p1, p2, Vec3::splat(0.5));
    approx(mid, Vec3::new(1.0, 1.0, 0.0));

    let reflected = vec3::math::reflect(Vec3::new(1.0, -1.0, 0.0), Vec3::new(0.0, 2.0, 0.0));
    approx(reflected, Vec3::new(1.0, 1.0, 0.0));
    assert_eq!(
        linmath::ivec2::math::max(IVec2::new(1, 5), IVec2::new(3, 2)),
        IVec2::new(3, 5)
    );
}

#[test]
fn transcendental_companions() {
    use core::f32::consts::{FRAC_PI_2, FRAC_PI_4};

    let a = Vec3::new(4.0, 9.0, 0.25);
    assert_eq!(vec3::math::sqrt(a), Vec3::new(2.0, 3.0, 0.5));
    approx(
        vec3::math::pow(Vec3::splat(2.0), Vec3::new(0.0, 1.0, 3.0)),
        Vec3::new(1.0, 2.0, 8.0),
    );

    let angles = Vec3::new(0.0, FRAC_PI_2, -FRAC_PI_2);
    approx(vec3::math::sin(angles), Vec3::new(0.0, 1.0, -1.0));
    approx(vec3::math::cos(angles), Vec3::new(1.0, 0.0, 0.0));
    approx(
        vec3::math::tan(Vec3::new(0.0, FRAC_PI_4, -FRAC_PI_4)),
        Vec3::new(0.0, 1.0, -1.0),
    );
    assert_eq!(vec3::math::dot(a, Vec3::UNIT_Y), 9.0);
}

#[test]
fn double_companions() {
    let a = DVec2::new(2.25, -0.5);
    let roots = dvec2::math::sqrt(DVec2::new(2.25, 16.0));
    assert_eq!(roots, DVec2::new(1.5, 4.0));
    assert_eq!(dvec2::math::floor(a), DVec2::new(2.0, -1.0));
    assert_eq!(dvec2::math::abs(a), DVec2::new(2.25, 0.5));
    assert_eq!(dvec2::math::max(a, DVec2::ZERO), DVec2::new(2.25, 0.0));
    assert_eq!(
        dvec2::math::lerp(DVec2::ZERO, DVec2::new(4.0, 8.0), DVec2::splat(0.5)),
        DVec2::new(2.0, 4.0)
    );
    assert!((dvec2::math::cos(DVec2::ZERO) - DVec2::ONES).length() < 1e-12);
}

#[test]
fn integer_companions() {
    let a = IVec3::new(-3, 4, 0);
    let b = IVec3::new(2, -5, 7);
    assert_eq!(ivec3::math::abs(a), IVec3::new(3, 4, 0));
    assert_eq!(ivec3::math::min(a, b), IVec3::new(-3, -5, 0));
    assert_eq!(ivec3::math::max(a, b), IVec3::new(2, 4, 7));
    assert_eq!(ivec3::math::dot(a, b), -26);
    assert_eq!(
        ivec3::math::lerp(IVec3::ZERO, IVec3::splat(10), IVec3::new(0, 1, 2)),
        IVec3::new(0, 10, 20)
    );

    // Integer quadratic Bézier hits its endpoints exactly.
    let (p0, p1, p2) = (IVec3::ZERO, IVec3::new(1, 2, 0), IVec3::new(2, 0, 0));
    assert_eq!(ivec3::math::bezier(p0, p1, p2, IVec3::ZERO), p0);
    assert_eq!(ivec3::math::bezier(p0, p1, p2, IVec3::ONES), p2);
}
