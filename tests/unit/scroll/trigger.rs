use super::*;

#[test]
fn progress_is_a_clamped_affine_map() {
    let region = TriggerRegion::new(100.0, 300.0).unwrap();
    assert_eq!(region.progress_at(100.0), 0.0);
    assert_eq!(region.progress_at(200.0), 0.5);
    assert_eq!(region.progress_at(300.0), 1.0);
    assert_eq!(region.progress_at(-50.0), 0.0);
    assert_eq!(region.progress_at(1e9), 1.0);
}

#[test]
fn reversed_regions_invert_direction() {
    let region = TriggerRegion::new(300.0, 100.0).unwrap();
    assert_eq!(region.progress_at(300.0), 0.0);
    assert_eq!(region.progress_at(100.0), 1.0);
    assert_eq!(region.progress_at(250.0), 0.25);
}

#[test]
fn re_entry_resumes_from_the_boundary() {
    let region = TriggerRegion::new(0.0, 100.0).unwrap();
    // Scroll far past, come back, leave above, return: pure function of
    // position, no drift.
    let walk = [500.0, 50.0, -200.0, 50.0, 500.0, 50.0];
    let progresses: Vec<f64> = walk.iter().map(|&p| region.progress_at(p)).collect();
    assert_eq!(progresses, vec![1.0, 0.5, 0.0, 0.5, 1.0, 0.5]);
}

#[test]
fn degenerate_region_is_rejected() {
    assert!(TriggerRegion::new(5.0, 5.0).is_err());
    assert!(TriggerRegion::new(f64::NAN, 1.0).is_err());
    assert!(TriggerRegion::new(0.0, f64::INFINITY).is_err());
}

#[test]
fn marks_parse_keywords_and_percentages() {
    assert_eq!(
        Mark::parse("bottom bottom").unwrap(),
        Mark {
            element_edge: 1.0,
            viewport_anchor: 1.0
        }
    );
    assert_eq!(
        Mark::parse("top 20%").unwrap(),
        Mark {
            element_edge: 0.0,
            viewport_anchor: 0.2
        }
    );
    assert_eq!(
        Mark::parse("center 50%").unwrap(),
        Mark {
            element_edge: 0.5,
            viewport_anchor: 0.5
        }
    );
    assert!(Mark::parse("bottom").is_err());
    assert!(Mark::parse("bottom bottom bottom").is_err());
    assert!(Mark::parse("left top").is_err());
    assert!(Mark::parse("top 20px").is_err());
}

#[test]
fn mark_resolution_matches_viewport_geometry() {
    // Element at y=2000, 80 tall, viewport 800 tall.
    let bottom_bottom = Mark::parse("bottom bottom").unwrap();
    assert_eq!(bottom_bottom.resolve(2000.0, 80.0, 800.0), 2000.0 + 80.0 - 800.0);

    let top_20 = Mark::parse("top 20%").unwrap();
    assert_eq!(top_20.resolve(2000.0, 80.0, 800.0), 2000.0 - 160.0);
}

#[test]
fn regions_build_from_marks() {
    let region = TriggerRegion::from_marks(
        Mark::parse("bottom bottom").unwrap(),
        Mark::parse("top 20%").unwrap(),
        2000.0,
        80.0,
        800.0,
    )
    .unwrap();
    assert_eq!(region.start, 1280.0);
    assert_eq!(region.end, 1840.0);
    assert_eq!(region.progress_at(1560.0), 0.5);
}
