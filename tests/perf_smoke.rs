use physic_engine::{Engine, Point, ShapeKind, Vec2};

#[test]
fn perf_smoke_step() {
    let mut engine = Engine::new();
    engine.enable_perf_metrics(true);
    for x in 0..32 {
        for y in 0..16 {
            let h = engine.create_body(
                ShapeKind::Circle,
                Point::new(40.0 + x as f32 * 60.0, 40.0 + y as f32 * 60.0),
                Vec2::new(5.0, 0.0),
                1.0,
            );
            engine.add_body(h);
        }
    }
    engine.step(1.0 / 60.0).unwrap();
    let stats = engine.perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.bodies_indexed(), 512);
    assert!(stats.tree_depth() >= 2);
}
