//! Unit tests for aq-core primitives.

#[cfg(test)]
mod ids {
    use crate::{FishId, FoodId};

    #[test]
    fn next_is_monotonic() {
        assert_eq!(FishId(0).next(), FishId(1));
        assert!(FoodId(4) < FoodId(4).next());
    }

    #[test]
    fn display() {
        assert_eq!(FishId(7).to_string(), "FishId(7)");
        assert_eq!(FoodId(3).to_string(), "FoodId(3)");
    }
}

#[cfg(test)]
mod geo {
    use crate::{Bounds, Vec2};

    #[test]
    fn normalized_has_unit_length() {
        let v = Vec2::new(3.0, 4.0).normalized().unwrap();
        assert!((v.length() - 1.0).abs() < 1e-12);
        assert!(Vec2::ZERO.normalized().is_none());
    }

    #[test]
    fn clamp_length_only_shrinks() {
        let long = Vec2::new(10.0, 0.0).clamp_length(2.0);
        assert!((long.length() - 2.0).abs() < 1e-12);
        let short = Vec2::new(0.5, 0.5);
        assert_eq!(short.clamp_length(2.0), short);
    }

    #[test]
    fn angle_of_zero_vector_is_undefined() {
        assert!(Vec2::ZERO.angle().is_none());
        let a = Vec2::new(0.0, 1.0).angle().unwrap();
        assert!((a - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn lerp_endpoints() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(2.0, 4.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Vec2::new(1.0, 2.0));
    }

    #[test]
    fn bounds_rejects_degenerate_sizes() {
        assert!(Bounds::new(0.0, 10.0).is_none());
        assert!(Bounds::new(10.0, -1.0).is_none());
        assert!(Bounds::new(f64::NAN, 10.0).is_none());
        assert!(Bounds::new(640.0, 480.0).is_some());
    }

    #[test]
    fn bounds_clamp_to_nearest_edge_point() {
        let b = Bounds::new(100.0, 50.0).unwrap();
        assert_eq!(b.clamp(Vec2::new(-5.0, 20.0)), Vec2::new(0.0, 20.0));
        assert_eq!(b.clamp(Vec2::new(150.0, 80.0)), Vec2::new(100.0, 50.0));
        assert_eq!(b.clamp(Vec2::new(f64::NAN, 10.0)), Vec2::new(0.0, 10.0));
        assert!(b.contains(b.clamp(Vec2::new(1e9, -1e9))));
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn next_advances_by_one() {
        assert_eq!(Tick::ZERO.next(), Tick(1));
        assert!(Tick(10) < Tick(10).next());
    }

    #[test]
    fn display() {
        assert_eq!(Tick(42).to_string(), "T42");
    }
}

#[cfg(test)]
mod rng {
    use crate::{FishId, FishRng, FixedEntropy, SimRng};

    #[test]
    fn fish_rng_is_deterministic() {
        let mut a = FishRng::new(42, FishId(3));
        let mut b = FishRng::new(42, FishId(3));
        let xs: Vec<f64> = (0..8).map(|_| a.random()).collect();
        let ys: Vec<f64> = (0..8).map(|_| b.random()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn different_fish_get_different_streams() {
        let mut a = FishRng::new(42, FishId(0));
        let mut b = FishRng::new(42, FishId(1));
        let xa: u64 = a.random();
        let xb: u64 = b.random();
        assert_ne!(xa, xb);
    }

    #[test]
    fn symmetric_stays_in_bound() {
        let mut r = FishRng::new(7, FishId(0));
        for _ in 0..1_000 {
            let v = r.symmetric(0.3);
            assert!((-0.3..=0.3).contains(&v));
        }
        assert_eq!(r.symmetric(0.0), 0.0);
    }

    #[test]
    fn sim_rng_children_diverge() {
        let mut root = SimRng::new(1);
        let mut c1 = root.child(1);
        let mut c2 = root.child(2);
        let a: u64 = c1.random();
        let b: u64 = c2.random();
        assert_ne!(a, b);
    }

    #[test]
    fn fixed_entropy_is_used_only_without_seed() {
        let mut cfg = crate::AquariumConfig::default();
        assert_eq!(cfg.resolve_seed(&mut FixedEntropy(99)), 99);
        cfg.seed = Some(5);
        assert_eq!(cfg.resolve_seed(&mut FixedEntropy(99)), 5);
    }
}

#[cfg(test)]
mod config {
    use crate::{AqError, AquariumConfig};

    #[test]
    fn default_is_valid() {
        AquariumConfig::default().validate().unwrap();
        AquariumConfig::seeded_empty(1).validate().unwrap();
    }

    #[test]
    fn seeded_empty_has_no_school() {
        let cfg = AquariumConfig::seeded_empty(9);
        assert_eq!(cfg.initial_fish, 0);
        assert_eq!(cfg.seed, Some(9));
    }

    #[test]
    fn turn_rate_out_of_range_rejected() {
        let cfg = AquariumConfig { turn_rate: 0.0, ..AquariumConfig::default() };
        assert!(matches!(cfg.validate(), Err(AqError::Config(_))));
        let cfg = AquariumConfig { turn_rate: 1.5, ..AquariumConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn inverted_ranges_rejected() {
        let cfg = AquariumConfig { fish_size_range: (20.0, 10.0), ..AquariumConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = AquariumConfig { cruise_speed_range: (1.0, 0.5), ..AquariumConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn non_finite_rejected() {
        let cfg = AquariumConfig { sensing_radius: f64::INFINITY, ..AquariumConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = AquariumConfig { boundary_gain: f64::NAN, ..AquariumConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn floor_level_must_sit_inside_the_tank() {
        for level in [0.0, -0.1, 1.01, f64::NAN] {
            let cfg = AquariumConfig { floor_level: level, ..AquariumConfig::default() };
            assert!(cfg.validate().is_err(), "floor_level {level} accepted");
        }
        let cfg = AquariumConfig { floor_level: 1.0, ..AquariumConfig::default() };
        cfg.validate().unwrap();
    }

    #[test]
    fn floor_y_scales_with_height() {
        let cfg = AquariumConfig::default();
        let bounds = crate::Bounds::new(800.0, 600.0).unwrap();
        assert!((cfg.floor_y(bounds) - 540.0).abs() < 1e-9);
    }

    #[test]
    fn top_speed_includes_boost() {
        let cfg = AquariumConfig::default();
        assert!((cfg.top_speed() - 1.1).abs() < 1e-12);
    }
}
