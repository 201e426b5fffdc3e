use super::*;

fn all_eases() -> Vec<Ease> {
    let curves = [
        Curve::Linear,
        Curve::Power1,
        Curve::Power2,
        Curve::Power3,
        Curve::Power4,
        Curve::Sine,
        Curve::Expo,
        Curve::Circ,
        Curve::Back,
        Curve::Elastic,
        Curve::Bounce,
    ];
    let dirs = [EaseDir::In, EaseDir::Out, EaseDir::InOut];
    curves
        .iter()
        .flat_map(|&curve| dirs.iter().map(move |&dir| Ease::new(curve, dir)))
        .collect()
}

#[test]
fn endpoints_are_exact_for_every_ease() {
    for ease in all_eases() {
        assert_eq!(ease.apply(0.0), 0.0, "{ease:?}");
        assert_eq!(ease.apply(1.0), 1.0, "{ease:?}");
    }
}

#[test]
fn inputs_outside_unit_interval_clamp() {
    for ease in all_eases() {
        assert_eq!(ease.apply(-0.5), 0.0, "{ease:?}");
        assert_eq!(ease.apply(1.5), 1.0, "{ease:?}");
    }
}

#[test]
fn monotonic_spot_check_for_monotone_curves() {
    for curve in [
        Curve::Linear,
        Curve::Power1,
        Curve::Power2,
        Curve::Power3,
        Curve::Power4,
        Curve::Sine,
        Curve::Expo,
        Curve::Circ,
    ] {
        for dir in [EaseDir::In, EaseDir::Out, EaseDir::InOut] {
            let ease = Ease::new(curve, dir);
            let a = ease.apply(0.25);
            let b = ease.apply(0.5);
            let c = ease.apply(0.75);
            assert!(a < b, "{ease:?}");
            assert!(b < c, "{ease:?}");
        }
    }
}

#[test]
fn back_overshoots_below_zero_near_start() {
    let ease = Ease::new(Curve::Back, EaseDir::In);
    assert!(ease.apply(0.2) < 0.0);
}

#[test]
fn from_name_resolves_registry_names() {
    assert_eq!(
        Ease::from_name("power1.inOut").unwrap(),
        Ease::new(Curve::Power1, EaseDir::InOut)
    );
    assert_eq!(
        Ease::from_name("back.inOut").unwrap(),
        Ease::new(Curve::Back, EaseDir::InOut)
    );
    assert_eq!(
        Ease::from_name("bounce.out").unwrap(),
        Ease::new(Curve::Bounce, EaseDir::Out)
    );
    assert_eq!(
        Ease::from_name("quad.in").unwrap(),
        Ease::new(Curve::Power1, EaseDir::In)
    );
    assert_eq!(Ease::from_name("linear").unwrap(), Ease::default());
    assert_eq!(Ease::from_name("none").unwrap(), Ease::default());
}

#[test]
fn from_name_rejects_unknown_names() {
    assert!(Ease::from_name("power9.in").is_err());
    assert!(Ease::from_name("back.sideways").is_err());
    assert!(Ease::from_name("bounce").is_err());
    assert!(Ease::from_name("").is_err());
}

#[test]
fn flipped_reflects_pointwise() {
    for ease in all_eases() {
        let flipped = ease.flipped();
        for i in 0..=20 {
            let t = f64::from(i) / 20.0;
            let want = 1.0 - ease.apply(1.0 - t);
            assert!(
                (flipped.apply(t) - want).abs() < 1e-12,
                "{ease:?} at t={t}"
            );
        }
    }
}

#[test]
fn flipped_swaps_in_and_out() {
    let ease = Ease::new(Curve::Power2, EaseDir::In);
    assert_eq!(ease.flipped().dir, EaseDir::Out);
    assert_eq!(ease.flipped().flipped(), ease);
}
