use super::*;

fn table() -> Schedule {
    Schedule::builder()
        .window("hero", [0.0, 0.0, 0.0, 0.08])
        .unwrap()
        .window("logos", [0.14, 0.18, 0.26, 0.30])
        .unwrap()
        .trigger("strategy", 0.30, 0.10, 0.05)
        .unwrap()
        .build()
        .unwrap()
}

#[test]
fn keeps_declaration_order() {
    let s = table();
    let names: Vec<&str> = s.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["hero", "logos", "strategy"]);
    assert_eq!(s.index_of("logos"), Some(1));
}

#[test]
fn crossfading_sections_overlap() {
    let s = Schedule::builder()
        .window("logos", [0.14, 0.18, 0.26, 0.30])
        .unwrap()
        .window("strategy", [0.26, 0.30, 0.42, 0.46])
        .unwrap()
        .build()
        .unwrap();
    let p = Progress::new(0.28);
    let a = s.opacity("logos", p).unwrap();
    let b = s.opacity("strategy", p).unwrap();
    assert!(a > 0.0 && b > 0.0);
    assert!((a + b - 1.0).abs() < 1e-9);
}

#[test]
fn unknown_section_is_an_error() {
    let s = table();
    assert!(matches!(
        s.opacity("cta", Progress::START),
        Err(TimelineError::Schedule(_))
    ));
}

#[test]
fn duplicate_names_are_rejected() {
    let err = Schedule::builder()
        .window("hero", [0.0, 0.0, 0.0, 0.08])
        .unwrap()
        .window("hero", [0.1, 0.2, 0.3, 0.4])
        .unwrap()
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("duplicate section 'hero'"));
}

#[test]
fn empty_name_and_bad_lift_are_rejected() {
    let w = FadeWindow::new(0.1, 0.2, 0.3, 0.4).unwrap();
    assert!(
        Schedule::builder()
            .section(SectionSpec::new("", w))
            .build()
            .is_err()
    );
    assert!(
        Schedule::builder()
            .section(SectionSpec::new("hero", w).with_lift(f64::INFINITY))
            .build()
            .is_err()
    );
}

#[test]
fn phase_lookup_by_name() {
    let s = table();
    assert_eq!(
        s.phase("hero", Progress::new(0.04)).unwrap(),
        SectionPhase::FadingOut
    );
    assert_eq!(
        s.phase("logos", Progress::new(0.04)).unwrap(),
        SectionPhase::Hidden
    );
}
