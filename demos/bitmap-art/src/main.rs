use blockform::layout::grid;
use blockform::resources::pixels::DEFAULT_SCALE;
use blockform::{PixelGrid, Scene, StageConfig};

fn main() -> anyhow::Result<()> {
    if let Err(e) = env_logger::try_init() {
        println!("Warning: Could not initialize logger: {}", e);
    };

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        anyhow::bail!("usage: bitmap-art <image> [scale] [payload-out.json]");
    };
    // Unparseable scales turn into NaN and fall back to the default
    // inside the importer.
    let scale = args
        .next()
        .map(|raw| raw.parse::<f32>().unwrap_or(f32::NAN))
        .unwrap_or(DEFAULT_SCALE);

    let pixels = PixelGrid::from_path(&path, scale)?;
    println!(
        "{} scaled to {}x{} ({} pixels)",
        path,
        pixels.width,
        pixels.height,
        pixels.len()
    );

    let config = StageConfig::default();
    let group = grid::from_pixels(&pixels, config.base_size, config.gap);
    println!("placed {} cubes", group.len());

    let mut scene = Scene::new(&config);
    scene.add(group);
    let batches = scene.to_batches();
    println!(
        "{} colors, {} instances",
        batches.len(),
        batches.total_instances()
    );

    if let Some(out) = args.next() {
        std::fs::write(&out, pixels.to_json()?)?;
        println!("wrote pixel payload to {}", out);
    }
    Ok(())
}
