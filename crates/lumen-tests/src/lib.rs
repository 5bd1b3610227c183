//! Integration tests for the lumen-rs crates.
//!
//! Two suites live here:
//!
//! - algebraic property tests over the generic vector types, driven by
//!   proptest;
//! - the differential suite holding the SIMD fast path (`Vec3A`) and the
//!   generic `Vec3<f32>` to the same results on the first three
//!   components, over random and edge-case inputs.

#[cfg(test)]
mod properties {
    use approx::relative_eq;
    use lumen_math::{find_interval, Bounds, Vec3};
    use proptest::prelude::*;

    // Mixes magnitudes so the suite sees more than comfortable mid-range
    // values.
    fn component() -> impl Strategy<Value = f32> {
        prop_oneof![
            4 => -1.0e4_f32..1.0e4_f32,
            2 => -1.0_f32..1.0_f32,
            1 => Just(0.0_f32),
            1 => Just(1.0_f32),
            1 => Just(-1.0_f32),
        ]
    }

    fn vec3() -> impl Strategy<Value = Vec3<f32>> {
        (component(), component(), component()).prop_map(|(x, y, z)| Vec3::new(x, y, z))
    }

    // Scaled absolute tolerance: the error of a float expression grows
    // with the magnitudes involved, not with the result.
    fn close(a: f32, b: f32, scale: f32) -> bool {
        (a - b).abs() <= 1e-3 * scale.abs().max(1.0)
    }

    fn close3(a: Vec3<f32>, b: Vec3<f32>, scale: f32) -> bool {
        close(a.x, b.x, scale) && close(a.y, b.y, scale) && close(a.z, b.z, scale)
    }

    proptest! {
        #[test]
        fn add_then_sub_is_identity(a in vec3(), b in vec3()) {
            let r = a + b - b;
            let scale = a.abs().max_element().max(b.abs().max_element());
            prop_assert!(close3(r, a, scale), "{:?} != {:?}", r, a);
        }

        #[test]
        fn scale_then_unscale_is_identity(
            a in vec3(),
            s in prop_oneof![-1.0e3_f32..-1.0e-3, 1.0e-3_f32..1.0e3],
        ) {
            let r = (a * s) / s;
            let scale = a.abs().max_element();
            prop_assert!(close3(r, a, scale), "{:?} != {:?}", r, a);
        }

        #[test]
        fn dot_is_commutative(a in vec3(), b in vec3()) {
            // Same products, same summation order: exactly equal.
            prop_assert_eq!(a.dot(b), b.dot(a));
        }

        #[test]
        fn cross_is_anticommutative(a in vec3(), b in vec3()) {
            prop_assert_eq!(a.cross(b), -(b.cross(a)));
        }

        #[test]
        fn cross_is_orthogonal(a in vec3(), b in vec3()) {
            let c = a.cross(b);
            let scale = a.abs().max_element() * b.abs().max_element();
            prop_assert!(close(c.dot(a), 0.0, scale * 10.0));
            prop_assert!(close(c.dot(b), 0.0, scale * 10.0));
        }

        #[test]
        fn normalize_then_rescale_roundtrips(a in vec3()) {
            prop_assume!(a.length() > 1e-3);
            let r = a.normalized() * a.length();
            prop_assert!(
                relative_eq!(r.x, a.x, max_relative = 1e-4, epsilon = 1e-4)
                    && relative_eq!(r.y, a.y, max_relative = 1e-4, epsilon = 1e-4)
                    && relative_eq!(r.z, a.z, max_relative = 1e-4, epsilon = 1e-4),
                "{:?} != {:?}", r, a
            );
        }

        #[test]
        fn union_is_minimal(seed in vec3(), p1 in vec3(), p2 in vec3()) {
            let b = Bounds::from_point(seed)
                .union_point(p1)
                .union_point(p2);

            // Component-wise min/max over the three points, directly.
            let lo = seed.min(p1).min(p2);
            let hi = seed.max(p1).max(p2);
            prop_assert_eq!(b.min, lo);
            prop_assert_eq!(b.max, hi);

            // And the accumulated box contains strict interior points.
            let c = (lo + hi) * 0.5;
            if lo.x < c.x && c.x < hi.x && lo.y < c.y && c.y < hi.y && lo.z < c.z && c.z < hi.z {
                prop_assert!(b.contains(c));
            }
        }

        #[test]
        fn offset_maps_corners_to_unit_cube(a in vec3(), extent in 1e-2_f32..1e3) {
            let b = Bounds::new(a, a + Vec3::splat(extent));
            prop_assert_eq!(b.offset(b.min), Vec3::zero());
            prop_assert_eq!(b.offset(b.max), Vec3::splat(1.0));
        }

        #[test]
        fn find_interval_matches_linear_scan(
            size in 0usize..64,
            crossing in 0usize..80,
        ) {
            let pred = |i: usize| i < crossing;

            let mut first = 0;
            while first < size && pred(first) {
                first += 1;
            }
            let expect = (first as isize - 1).min(size as isize - 2).max(0) as usize;

            prop_assert_eq!(find_interval(size, pred), expect);
            if size >= 2 {
                prop_assert!(find_interval(size, pred) <= size - 2);
            }
        }
    }
}

#[cfg(test)]
mod differential {
    use approx::relative_eq;
    use lumen_math::{Vec3, Vec3A};
    use proptest::prelude::*;

    // The contract: for every public operation the fast path agrees
    // with the generic implementation on components 0..3 within
    // reordering-level rounding.
    const TOL: f32 = 1e-6;

    fn component() -> impl Strategy<Value = f32> {
        prop_oneof![
            4 => -1.0e4_f32..1.0e4_f32,
            2 => -1.0_f32..1.0_f32,
            1 => Just(0.0_f32),
            1 => Just(1.0_f32),
        ]
    }

    fn pair() -> impl Strategy<Value = (Vec3<f32>, Vec3A)> {
        (component(), component(), component())
            .prop_map(|(x, y, z)| (Vec3::new(x, y, z), Vec3A::new(x, y, z)))
    }

    fn agree(g: Vec3<f32>, s: Vec3A) -> bool {
        agree_scalar(g.x, s.x) && agree_scalar(g.y, s.y) && agree_scalar(g.z, s.z)
    }

    // NaN-aware: both paths must produce NaN together (e.g. normalizing
    // the zero vector).
    fn agree_scalar(g: f32, s: f32) -> bool {
        if g.is_nan() || s.is_nan() {
            return g.is_nan() && s.is_nan();
        }
        if g.is_infinite() || s.is_infinite() {
            return g == s;
        }
        relative_eq!(g, s, max_relative = TOL, epsilon = TOL)
    }

    proptest! {
        #[test]
        fn binary_ops_agree((ga, sa) in pair(), (gb, sb) in pair()) {
            prop_assert!(agree(ga + gb, sa + sb));
            prop_assert!(agree(ga - gb, sa - sb));
            prop_assert!(agree(ga * gb, sa * sb));
            prop_assert!(agree(ga.min(gb), sa.min(sb)));
            prop_assert!(agree(ga.max(gb), sa.max(sb)));
            prop_assert!(agree(ga.cross(gb), sa.cross(sb)));
            prop_assert!(agree_scalar(ga.dot(gb), sa.dot(sb)));
            prop_assert!(agree_scalar(
                ga.distance_squared(gb),
                sa.distance_squared(sb)
            ));
        }

        #[test]
        fn division_agrees((ga, sa) in pair(), (gb, sb) in pair()) {
            prop_assume!(gb.x.abs() > 1e-3 && gb.y.abs() > 1e-3 && gb.z.abs() > 1e-3);
            prop_assert!(agree(ga / gb, sa / sb));
        }

        #[test]
        fn scalar_ops_agree((g, s) in pair(), k in -1.0e3_f32..1.0e3) {
            prop_assert!(agree(g * k, s * k));
            prop_assert!(agree(k * g, k * s));
            prop_assert!(agree(-g, -s));
            if k.abs() > 1e-3 {
                prop_assert!(agree(g / k, s / k));
            }
        }

        #[test]
        fn norms_agree((g, s) in pair()) {
            prop_assert!(agree_scalar(g.length(), s.length()));
            prop_assert!(agree_scalar(g.length_squared(), s.length_squared()));
            prop_assert!(agree(g.normalized(), s.normalized()));
        }

        #[test]
        fn compound_assign_agrees((ga, sa) in pair(), (gb, sb) in pair()) {
            let (mut g, mut s) = (ga, sa);
            g += gb;
            s += sb;
            prop_assert!(agree(g, s));
            g *= gb;
            s *= sb;
            prop_assert!(agree(g, s));
            g -= gb;
            s -= sb;
            prop_assert!(agree(g, s));
        }

        #[test]
        fn indexing_agrees((g, s) in pair(), i in 0usize..3) {
            prop_assert_eq!(g[i], s[i]);
        }
    }

    // Inputs proptest's distribution would rarely or never hit.
    #[test]
    fn edge_cases_agree() {
        let cases: [[f32; 3]; 8] = [
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
            [1.0e18, -1.0e18, 1.0e18],
            [1.0e-18, 1.0e-18, -1.0e-18],
            [-0.0, 0.0, -0.0],
            [3.5, -7.25, 0.125],
        ];

        for &a in &cases {
            for &b in &cases {
                let (ga, sa) = (Vec3::from_array(a), Vec3A::from_array(a));
                let (gb, sb) = (Vec3::from_array(b), Vec3A::from_array(b));

                assert!(agree(ga + gb, sa + sb), "add {:?} {:?}", a, b);
                assert!(agree(ga - gb, sa - sb), "sub {:?} {:?}", a, b);
                assert!(agree(ga * gb, sa * sb), "mul {:?} {:?}", a, b);
                assert!(agree_scalar(ga.dot(gb), sa.dot(sb)), "dot {:?} {:?}", a, b);
                assert!(agree(ga.cross(gb), sa.cross(sb)), "cross {:?} {:?}", a, b);
            }

            let (g, s) = (Vec3::from_array(a), Vec3A::from_array(a));
            assert!(agree_scalar(g.length(), s.length()), "length {:?}", a);
            // Normalizing the zero vector must go non-finite on both
            // paths, not just one.
            assert!(agree(g.normalized(), s.normalized()), "normalized {:?}", a);
        }
    }

    #[test]
    fn layouts_are_compatible() {
        // The fast path stores x, y, z at the same offsets as the
        // generic type, padded to 16 bytes.
        assert_eq!(std::mem::size_of::<Vec3<f32>>(), 12);
        assert_eq!(std::mem::size_of::<Vec3A>(), 16);
        assert_eq!(std::mem::align_of::<Vec3A>(), 16);

        let v = Vec3A::new(1.0, 2.0, 3.0);
        let g: Vec3<f32> = v.into();
        assert_eq!(g.to_array(), v.to_array());
    }
}
