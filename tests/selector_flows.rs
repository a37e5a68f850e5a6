use sky_backdrop::engine::{
    AnimationConfig, AnimationSession, RunState, Simulation, VariantKind, Viewport,
    variant_for_condition,
};

fn session() -> AnimationSession {
    AnimationSession::new(
        Viewport::new(800.0, 600.0),
        80,
        24,
        AnimationConfig::default(),
    )
}

#[test]
fn rain_start_builds_a_full_pool_inside_the_viewport() {
    let mut s = session();
    s.start("Rain", 0);
    assert_eq!(s.variant(), Some(VariantKind::Rain));

    let Some(Simulation::Rain(rain)) = s.simulation() else {
        panic!("rain condition selected something else");
    };
    assert_eq!(rain.drops.len(), 100);
    for drop in &rain.drops {
        assert!(drop.x >= 0.0 && drop.x < 800.0);
        assert!(drop.y >= 0.0 && drop.y < 600.0);
        assert!(drop.length >= 10.0 && drop.length < 20.0);
    }

    // one paced step later every drop has fallen or been recycled above
    // the top edge
    let before: Vec<(f32, f32)> = rain.drops.iter().map(|d| (d.y, d.speed)).collect();
    assert!(s.frame(33));
    let Some(Simulation::Rain(rain)) = s.simulation() else {
        panic!("variant changed mid-run");
    };
    for (drop, (y_before, speed)) in rain.drops.iter().zip(before) {
        let advanced = (drop.y - (y_before + speed)).abs() < f32::EPSILON;
        let recycled = drop.y < 0.0;
        assert!(advanced || recycled);
    }
}

#[test]
fn squall_and_tornado_share_the_windy_variant() {
    for condition in ["Squall", "Tornado"] {
        assert_eq!(variant_for_condition(condition), VariantKind::Windy);
    }
}

#[test]
fn unknown_condition_falls_back_to_clear() {
    let mut s = session();
    s.start("UnknownXYZ", 0);
    assert_eq!(s.variant(), Some(VariantKind::Clear));
    assert_eq!(s.run_state(), RunState::Running);
    assert!(s.frame(33));
}

#[test]
fn switching_conditions_never_leaves_two_simulations() {
    let mut s = session();
    let script = [
        ("Thunderstorm", VariantKind::Thunder),
        ("Snow", VariantKind::Snow),
        ("Drizzle", VariantKind::Rain),
        ("Fog", VariantKind::Mist),
        ("Clouds", VariantKind::Cloudy),
    ];
    for (condition, expected) in script {
        s.start(condition, 0);
        assert_eq!(s.variant(), Some(expected));
        let sim = s.simulation().expect("one active simulation");
        assert!(sim.particle_count() > 0, "{condition}: empty pool after switch");
    }
}

#[test]
fn stop_then_start_runs_a_fresh_simulation() {
    let mut s = session();
    s.start("Mist", 0);
    s.stop();
    assert!(s.simulation().is_none());
    s.start("Snow", 0);
    assert_eq!(s.variant(), Some(VariantKind::Snow));
    assert!(s.frame(33));
}
