use densglobe_geom::{Mat4, Vec3, lerp};
use proptest::prelude::*;

fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

fn angle() -> impl Strategy<Value = f32> {
    -10.0f32..10.0
}

fn unit_coord() -> impl Strategy<Value = f32> {
    -1.0f32..1.0
}

fn arb_point() -> impl Strategy<Value = Vec3> {
    (unit_coord(), unit_coord(), unit_coord()).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

proptest! {
    // Rotations preserve distance from the origin
    #[test]
    fn rotations_preserve_length(p in arb_point(), a in angle(), b in angle()) {
        let m = Mat4::rotation_y(a) * Mat4::rotation_x(b);
        let q = m.transform_point(p);
        prop_assert!(approx(q.length(), p.length(), 1e-4));
    }

    // Multiplying by identity on either side is a no-op
    #[test]
    fn identity_is_neutral(p in arb_point(), a in angle()) {
        let m = Mat4::rotation_x(a);
        let lhs = (Mat4::IDENTITY * m).transform_point(p);
        let rhs = (m * Mat4::IDENTITY).transform_point(p);
        let direct = m.transform_point(p);
        prop_assert!((lhs - direct).length() <= 1e-6);
        prop_assert!((rhs - direct).length() <= 1e-6);
    }

    // Matrix product equals sequential application
    #[test]
    fn product_matches_sequential_application(p in arb_point(), a in angle(), t in arb_point()) {
        let r = Mat4::rotation_y(a);
        let tr = Mat4::translation(t);
        let combined = (r * tr).transform_point(p);
        let sequential = r.transform_point(tr.transform_point(p));
        prop_assert!((combined - sequential).length() <= 1e-4);
    }

    // lerp hits both endpoints
    #[test]
    fn lerp_endpoints(a in -100.0f32..100.0, b in -100.0f32..100.0) {
        prop_assert!(approx(lerp(a, b, 0.0), a, 1e-4));
        prop_assert!(approx(lerp(a, b, 1.0), b, 1e-4));
    }
}
