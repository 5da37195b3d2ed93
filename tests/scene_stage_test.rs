use std::time::Duration;

use blockform::{
    Category, Color, ColorBatches, Group, Instance, InstanceRaw, Rad, Rotation3, Scene, Shape,
    ShapeKind, StageConfig, Vector3,
};

use crate::common::test_utils::{assert_close, init_logger, test_config};

mod common;

fn v(x: f32, y: f32, z: f32) -> Vector3<f32> {
    Vector3::new(x, y, z)
}

fn cube(color: Color, category: Category) -> Shape {
    Shape::new(ShapeKind::Cube, 1.0, color, category)
}

const RED: Color = Color::from_hex(0xff0000);
const BLUE: Color = Color::from_hex(0x0000ff);

#[test]
fn should_reuse_slots_of_removed_groups() {
    let mut scene = Scene::new(&test_config());
    assert!(scene.is_empty());

    let mut one_cube = Group::new();
    one_cube.place(cube(RED, Category::Inner), v(0.0, 0.0, 0.0));
    let mut two_cubes = Group::new();
    two_cubes.place(cube(RED, Category::Inner), v(0.0, 0.0, 0.0));
    two_cubes.place(cube(BLUE, Category::Inner), v(1.0, 0.0, 0.0));

    let first = scene.add(one_cube.clone());
    let second = scene.add(one_cube);
    assert_eq!((first, second), (0, 1));

    assert!(scene.remove(first).is_some());
    assert!(scene.remove(first).is_none());
    assert_eq!(scene.len(), 1);

    // The freed slot is taken before the vector grows.
    let third = scene.add(two_cubes);
    assert_eq!(third, first);
    assert_eq!(scene.len(), 2);
    assert_eq!(scene.group(third).unwrap().len(), 2);
    assert_eq!(scene.groups().count(), 2);

    scene.clear();
    assert!(scene.is_empty());
    assert!(scene.group(second).is_none());
}

#[test]
fn should_accumulate_spin_angles_over_time() {
    let mut scene = Scene::new(&test_config());
    scene.update(Duration::from_millis(100));
    let angles = scene.spin_angles();
    assert_close(angles.x, 0.06);
    assert_close(angles.y, 0.18);
    assert_close(angles.z, 0.3);

    scene.update(Duration::from_millis(100));
    let angles = scene.spin_angles();
    assert_close(angles.x, 0.12);
    assert_close(angles.y, 0.36);
    assert_close(angles.z, 0.6);
    assert_eq!(scene.elapsed(), Duration::from_millis(200));
}

#[test]
fn should_briefly_reverse_the_y_spin_on_wobble_ticks() {
    // Ticks landing on a multiple of 21 elapsed milliseconds reverse the
    // y rate for that step only.
    let mut scene = Scene::new(&test_config());
    scene.update(Duration::from_millis(21));
    assert!(scene.spin_angles().y < 0.0);
    assert!(scene.spin_angles().x > 0.0);
    assert!(scene.spin_angles().z > 0.0);

    let mut scene = Scene::new(&test_config());
    scene.update(Duration::from_millis(20));
    assert!(scene.spin_angles().y > 0.0);
}

#[test]
fn should_recolor_inner_shapes_once_after_the_delay() {
    let mut scene = Scene::new(&test_config());
    let mut group = Group::new();
    group.place(cube(RED, Category::Inner), v(0.0, 0.0, 0.0));
    group.place(cube(Color::WHITE, Category::Corner), v(1.0, 0.0, 0.0));
    group.place(cube(Color::from_hex(0xc6c6c6), Category::Edge), v(2.0, 0.0, 0.0));
    let id = scene.add(group);

    let colors = |scene: &Scene| -> Vec<Color> {
        scene
            .group(id)
            .unwrap()
            .members()
            .iter()
            .map(|p| p.shape.color())
            .collect()
    };

    scene.update(Duration::from_millis(999));
    assert_eq!(colors(&scene)[0], RED);

    scene.update(Duration::from_millis(1));
    let after = colors(&scene);
    assert_ne!(after[0], RED, "inner shapes pick up a new color");
    assert_eq!(after[1], Color::WHITE, "corner shapes keep theirs");
    assert_eq!(after[2], Color::from_hex(0xc6c6c6), "border shapes keep theirs");

    // The recolor never fires a second time.
    scene.update(Duration::from_millis(2000));
    assert_eq!(colors(&scene), after);
}

#[test]
fn should_reproduce_recolors_for_a_seeded_scene() {
    let run = || {
        let mut scene = Scene::new(&test_config());
        let mut group = Group::new();
        group.place(cube(RED, Category::Inner), v(0.0, 0.0, 0.0));
        let id = scene.add(group);
        scene.update(Duration::from_millis(1500));
        scene.group(id).unwrap().members()[0].shape.color()
    };
    assert_eq!(run(), run());
}

#[test]
fn should_flatten_groups_into_color_batches() {
    let mut scene = Scene::new(&test_config());

    let mut shifted = Group::new();
    shifted.place(cube(RED, Category::Inner), v(1.0, 2.0, 3.0));
    shifted.translate(v(10.0, 0.0, 0.0));
    let shifted_id = scene.add(shifted);

    let mut centered = Group::new();
    centered.place(cube(RED, Category::Inner), v(0.0, 0.0, 0.0));
    centered.place(cube(BLUE, Category::Inner), v(4.0, 5.0, 6.0));
    scene.add(centered);

    let batches = scene.to_batches();
    assert_eq!(batches.len(), 2);
    assert_eq!(batches.total_instances(), 3);

    let red = batches.get(RED).unwrap();
    assert_eq!(red.count(), 2);
    // Groups flatten in slot order, so the shifted cube comes first.
    let world = red.raw()[0].model[3];
    assert_close(world[0], 11.0);
    assert_close(world[1], 2.0);
    assert_close(world[2], 3.0);

    let blue = batches.get(BLUE).unwrap();
    assert_eq!(blue.count(), 1);
    let raw = &blue.raw()[0];
    assert_close(raw.model[3][0], 4.0);
    assert_close(raw.model[3][1], 5.0);
    assert_close(raw.model[3][2], 6.0);
    assert_close(raw.color[2], 1.0);
    assert_close(raw.color[0], 0.0);
    assert_close(raw.color[3], 1.0);

    // A removed group's instances disappear from the next flatten.
    let removed = scene.remove(shifted_id).unwrap();
    assert_eq!(removed.len(), 1);
    let batches = scene.to_batches();
    assert_eq!(batches.get(RED).unwrap().count(), 1);
    assert_eq!(batches.total_instances(), 2);
}

#[test]
fn should_fold_size_and_opacity_into_instances() {
    let mut scene = Scene::new(&test_config());
    let mut group = Group::new();
    let mut shape = Shape::new(ShapeKind::Cube, 2.0, RED, Category::Inner);
    shape.set_opacity(0.55);
    group.place(shape, v(1.0, 1.0, 1.0));
    group.translate(v(0.0, 10.0, 0.0));
    scene.add(group);

    let batches = scene.to_batches();
    let raw = &batches.get(RED).unwrap().raw()[0];
    // Shape size lands in the scale part of the matrix.
    assert_close(raw.model[0][0], 2.0);
    assert_close(raw.model[1][1], 2.0);
    assert_close(raw.model[3][0], 1.0);
    assert_close(raw.model[3][1], 11.0);
    assert_close(raw.color[3], 0.55);
}

#[test]
fn should_spin_members_in_place() {
    let mut scene = Scene::new(&test_config());
    let mut group = Group::new();
    group.place(cube(RED, Category::Inner), v(3.0, 0.0, 0.0));
    group.set_spinning(true);
    assert!(group.is_spinning());
    scene.add(group);

    let mut fixed = Group::new();
    fixed.place(cube(BLUE, Category::Inner), v(3.0, 0.0, 0.0));
    scene.add(fixed);

    scene.update(Duration::from_millis(100));
    let batches = scene.to_batches();

    // The spinning cube rotates around its own center: the rotation part
    // of the matrix moves, the translation part stays put.
    let spun = &batches.get(RED).unwrap().raw()[0];
    assert!((spun.model[0][0] - 1.0).abs() > 1e-3);
    assert_close(spun.model[3][0], 3.0);
    assert_close(spun.model[3][1], 0.0);
    assert_close(spun.model[3][2], 0.0);

    let still = &batches.get(BLUE).unwrap().raw()[0];
    assert_close(still.model[0][0], 1.0);
    assert_close(still.model[0][1], 0.0);
    assert_close(still.model[3][0], 3.0);
}

#[test]
fn should_cap_batches_and_drop_overflow() {
    init_logger();
    let config = StageConfig {
        max_instances: 2,
        ..test_config()
    };
    let mut scene = Scene::new(&config);
    let mut group = Group::new();
    for i in 0..3 {
        group.place(cube(RED, Category::Inner), v(i as f32, 0.0, 0.0));
    }
    scene.add(group);
    assert_eq!(scene.to_batches().total_instances(), 2);

    let mut batches = ColorBatches::with_limit(1);
    assert!(batches.add(RED, v(0.0, 0.0, 0.0)));
    assert!(!batches.add(RED, v(1.0, 0.0, 0.0)));
    assert_eq!(batches.get(RED).unwrap().count(), 1);
}

#[test]
fn should_merge_batches_on_recolor() {
    init_logger();
    let mut batches = ColorBatches::new();
    batches.add_instance(RED, &Instance::from(v(0.0, 0.0, 0.0)), 0.5);
    batches.add_instance(RED, &Instance::from(v(1.0, 0.0, 0.0)), 1.0);
    batches.add(BLUE, v(2.0, 0.0, 0.0));

    batches.recolor(RED, BLUE);
    assert!(batches.get(RED).is_none());

    let blue = batches.get(BLUE).unwrap();
    assert_eq!(blue.count(), 3);
    // Moved instances take the target color but keep their own alpha.
    let moved = &blue.raw()[1];
    assert_close(moved.color[2], 1.0);
    assert_close(moved.color[0], 0.0);
    assert_close(moved.color[3], 0.5);

    // Recoloring a missing or identical color changes nothing.
    batches.recolor(Color::from_hex(0x00ff00), BLUE);
    batches.recolor(BLUE, BLUE);
    assert_eq!(batches.get(BLUE).unwrap().count(), 3);
}

#[test]
fn should_view_raw_instances_as_buffer_bytes() {
    assert_eq!(std::mem::size_of::<InstanceRaw>(), 80);

    let mut batches = ColorBatches::new();
    for i in 0..3 {
        batches.add(RED, v(i as f32, 0.0, 0.0));
    }
    let batch = batches.get(RED).unwrap();
    assert_eq!(batch.bytes().len(), batch.count() * 80);
    assert_eq!(batch.color(), RED);
    assert!(!batch.is_empty());
}

#[test]
fn should_compose_instances_hierarchically() {
    let parent = Instance {
        position: v(1.0, 0.0, 0.0),
        rotation: blockform::Quaternion::from_angle_y(Rad(std::f32::consts::FRAC_PI_2)),
        scale: v(2.0, 2.0, 2.0),
    };
    let child = Instance::from(v(1.0, 1.0, 1.0));

    let world = &parent * &child;
    assert_close(world.position.x, 3.0);
    assert_close(world.position.y, 2.0);
    assert_close(world.position.z, -2.0);
    assert_close(world.scale.x, 2.0);

    // The by-value form composes the same way.
    let world = parent.clone() * child;
    assert_close(world.position.z, -2.0);
}

#[test]
fn should_start_the_clock_on_the_first_tick() {
    let mut scene = Scene::new(&test_config());
    scene.tick();
    assert_eq!(scene.elapsed(), Duration::ZERO);

    std::thread::sleep(Duration::from_millis(10));
    scene.tick();
    assert!(scene.elapsed() >= Duration::from_millis(10));
}
