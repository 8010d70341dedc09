use matflow_engine::Simulation;

#[test]
fn perf_smoke_step() {
    let mut sim = Simulation::new(640, 480);
    sim.enable_perf_metrics(true);
    sim.spawn_in_radius(320.0, 120.0, 80.0, 0, 400); // sand
    sim.step();
    let stats = sim.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.particle_count(), 400);
}

#[test]
fn frame_layout_tracks_extract() {
    let mut sim = Simulation::new(640, 480);
    sim.spawn_in_radius(320.0, 120.0, 80.0, 1, 50); // gravel
    sim.step();

    let count = sim.extract_frame();
    assert_eq!(count, 50);

    let layout = sim.frame_layout();
    assert_eq!(layout.positions_len_elements(), 100);
    assert_eq!(layout.positions_len_bytes(), 400);
    assert_eq!(layout.colors_len_elements(), 50);
    assert_eq!(layout.colors_len_bytes(), 200);
    assert_eq!(layout.radii_len_elements(), 50);
    assert_ne!(layout.positions_ptr(), 0);
}
