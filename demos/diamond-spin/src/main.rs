use std::time::Duration;

use blockform::layout::{diamond, hourglass, pyramid};
use blockform::{Scene, ShapeFactory, StageConfig, Vector3};

fn main() -> anyhow::Result<()> {
    if let Err(e) = env_logger::try_init() {
        println!("Warning: Could not initialize logger: {}", e);
    };

    let config = match std::env::args().nth(1) {
        Some(path) => StageConfig::from_path(path)?,
        None => StageConfig::default(),
    };
    let mut factory = ShapeFactory::from_config_seed(config.seed);
    let mut scene = Scene::new(&config);

    let mut centerpiece = diamond::build(
        &mut factory,
        config.layers,
        config.base_size,
        config.gap,
        None,
    );
    centerpiece.set_spinning(true);
    scene.add(centerpiece);

    let span = 2.0 * config.layers as f32 * config.pitch();
    let mut left = pyramid::build(
        &mut factory,
        config.layers,
        config.base_size,
        config.gap,
        None,
    );
    left.translate(Vector3::new(-span, 0.0, 0.0));
    scene.add(left);

    let mut right = hourglass::build(
        &mut factory,
        config.layers,
        config.base_size,
        config.gap,
        None,
    );
    right.translate(Vector3::new(span, 0.0, 0.0));
    scene.add(right);

    // Three seconds of stage time at 60 steps per second, enough for the
    // one-shot recolor to fire.
    let step = Duration::from_millis(16);
    for _ in 0..180 {
        scene.update(step);
    }

    let batches = scene.to_batches();
    println!(
        "{} groups, {} instances across {} colors after {:?}",
        scene.len(),
        batches.total_instances(),
        batches.len(),
        scene.elapsed()
    );
    for batch in batches.iter() {
        println!(
            "  {}: {} instances ({} bytes of instance data)",
            batch.color(),
            batch.count(),
            batch.bytes().len()
        );
    }
    let angles = scene.spin_angles();
    println!(
        "spin angles: x {:.2} y {:.2} z {:.2}",
        angles.x, angles.y, angles.z
    );
    Ok(())
}
