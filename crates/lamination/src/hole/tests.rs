use super::*;
use crate::error::HoleError;

#[test]
fn plain_hole_has_no_capability() {
    let h = Hole::from(PlainHole::default());
    assert!(h.is_plain());
    assert!(h.shape().is_none());
    assert!(h.radius_bounds().is_none());
    assert_eq!(h.class_name(), "Hole");
    assert!(h.check().is_ok());
}

#[test]
fn circular_duct_spans_its_diameter() {
    let h = Hole::from(VentilationCirc::new(8, 0.01, 0.05));
    let (lo, hi) = h.radius_bounds().unwrap().unwrap();
    assert!((lo - 0.045).abs() < 1e-15);
    assert!((hi - 0.055).abs() < 1e-15);
    assert_eq!(h.zh(), 8);
}

#[test]
fn polar_duct_spans_its_depth() {
    let h = VentilationPolar::new(6, 0.02, 0.04, 0.3);
    let (lo, hi) = h.radius_bounds().unwrap();
    assert_eq!(lo, 0.04);
    assert!((hi - 0.06).abs() < 1e-15);
    assert!(h.check().is_ok());
}

#[test]
fn trapezoid_bounds_are_exact() {
    // Bottom edge x = 1 (|y| <= 0.5), top edge x = 3 (|y| <= 1).
    let h = VentilationTrap::new(4, 2.0, 1.0, 1.0, 2.0);
    let (lo, hi) = h.radius_bounds().unwrap();
    assert!((lo - 1.0).abs() < 1e-12);
    assert!((hi - 10f64.sqrt()).abs() < 1e-12);
}

#[test]
fn alpha0_does_not_move_radial_bounds() {
    let mut h = VentilationTrap::new(4, 0.01, 0.03, 0.004, 0.008);
    let before = h.radius_bounds().unwrap();
    h.alpha0 = 1.234;
    assert_eq!(h.radius_bounds().unwrap(), before);
}

#[test]
fn degenerate_user_polygon_fails_bounds() {
    let h = Hole::from(HoleUD::new(1, vec![[0.1, 0.0], [0.2, 0.0]]));
    assert_eq!(
        h.radius_bounds().unwrap(),
        Err(HoleError::DegeneratePolygon { vertices: 2 })
    );
    assert!(h.check().is_err());
}

#[test]
fn check_rejects_bad_parameters() {
    let neg_d0 = VentilationCirc::new(1, -0.01, 0.05);
    assert!(matches!(
        neg_d0.check(),
        Err(HoleError::OutOfRange { field: "D0", .. })
    ));
    let nan_h0 = VentilationCirc::new(1, 0.01, f64::NAN);
    assert!(matches!(
        nan_h0.check(),
        Err(HoleError::NonFinite { field: "H0", .. })
    ));
    let wide = VentilationPolar::new(1, 0.01, 0.05, 7.0);
    assert!(matches!(
        wide.check(),
        Err(HoleError::OutOfRange { field: "W1", .. })
    ));
    let flat = VentilationTrap::new(1, 0.01, 0.05, 0.0, 0.0);
    assert!(flat.check().is_err());
    let no_holes = Hole::Plain(PlainHole { zh: 0 });
    assert!(matches!(
        no_holes.check(),
        Err(HoleError::OutOfRange { field: "Zh", .. })
    ));
}

#[test]
fn documents_use_class_tags_and_library_field_names() {
    let doc = r#"[
        {"__class__": "Hole"},
        {"__class__": "VentilationCirc", "Zh": 8, "D0": 0.01, "H0": 0.05},
        {"__class__": "VentilationPolar", "Alpha0": 0.1, "D0": 0.01, "H0": 0.05, "W1": 0.2},
        {"__class__": "VentilationTrap", "D0": 0.01, "H0": 0.05, "W1": 0.004, "W2": 0.006},
        {"__class__": "HoleUD", "vertices": [[0.1, 0.0], [0.2, 0.0], [0.2, 0.1]]}
    ]"#;
    let holes: Vec<Hole> = serde_json::from_str(doc).unwrap();
    let names: Vec<_> = holes.iter().map(Hole::class_name).collect();
    assert_eq!(
        names,
        ["Hole", "VentilationCirc", "VentilationPolar", "VentilationTrap", "HoleUD"]
    );
    assert_eq!(holes[0], Hole::Plain(PlainHole { zh: 1 }));
    assert_eq!(holes[1].zh(), 8);
    assert!(holes.iter().all(|h| h.check().is_ok()));

    let back = serde_json::to_value(&holes[1]).unwrap();
    assert_eq!(back["__class__"], "VentilationCirc");
    assert_eq!(back["H0"], 0.05);
}

#[test]
fn unknown_class_is_rejected() {
    let doc = r#"{"__class__": "HoleM50", "H0": 0.01}"#;
    assert!(serde_json::from_str::<Hole>(doc).is_err());
}
