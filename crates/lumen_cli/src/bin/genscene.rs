// Generate a random demo scene for the render binary.
// Run with: cargo run --release --bin genscene -- <output-dir> [mesh.obj]
//
// Writes scene.json, config.json, and camera.json into the output
// directory. Pass an OBJ path to drop a mesh into the scene as well.

use std::env;
use std::path::Path;

use anyhow::{Context, Result};
use log::LevelFilter;
use lumen_core::scene_file::{AccelDesc, LightDesc, MaterialDesc, ObjectDesc, SceneFile};
use lumen_core::{Camera, Config};
use lumen_math::Vec3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn random_color(rng: &mut SmallRng) -> Vec3 {
    Vec3::new(rng.gen_range(0.1..1.0), rng.gen_range(0.1..1.0), rng.gen_range(0.1..1.0))
}

fn random_material(rng: &mut SmallRng) -> MaterialDesc {
    match rng.gen_range(0..3) {
        0 => MaterialDesc::Lambertian {
            albedo: random_color(rng),
        },
        1 => MaterialDesc::Metal {
            albedo: random_color(rng),
            reflectivity: rng.gen_range(0.5..0.95),
            shininess: rng.gen_range(8.0..64.0),
            fuzz: rng.gen_range(0.0..0.5),
        },
        _ => MaterialDesc::Dielectric {
            index: rng.gen_range(1.1..2.4),
            reflectivity: rng.gen_range(0.5..0.95),
            shininess: rng.gen_range(16.0..64.0),
        },
    }
}

fn build_scene(rng: &mut SmallRng, mesh_path: Option<&str>) -> SceneFile {
    let mut scene = SceneFile::default();

    scene.add_object(
        "ground",
        ObjectDesc::Plane {
            position: Vec3::new(0.0, -1.0, 0.0),
            normal: Vec3::Y,
            material: MaterialDesc::Phong {
                albedo: Vec3::splat(0.6),
                reflectivity: 0.1,
                shininess: 4.0,
            },
        },
    );

    // A loose grid of small spheres with jittered positions
    for i in 0..6 {
        for j in 0..6 {
            let center = Vec3::new(
                (i as f32 - 2.5) * 2.5 + rng.gen_range(-0.6..0.6),
                -0.6,
                -4.0 - j as f32 * 2.5 + rng.gen_range(-0.6..0.6),
            );
            scene.add_object(
                format!("sphere_{}_{}", i, j),
                ObjectDesc::Sphere {
                    origin: center,
                    radius: 0.4,
                    material: random_material(rng),
                },
            );
        }
    }

    if let Some(path) = mesh_path {
        scene.add_object(
            "mesh",
            ObjectDesc::Mesh {
                path: path.to_string(),
                scale: Vec3::splat(1.0),
                translation: Vec3::new(0.0, 0.0, -8.0),
                accel: AccelDesc::Kd,
                material: MaterialDesc::Metal {
                    albedo: Vec3::splat(0.85),
                    reflectivity: 0.7,
                    shininess: 32.0,
                    fuzz: 0.05,
                },
            },
        );
    }

    scene.add_light(
        "key",
        LightDesc {
            position: Vec3::new(5.0, 12.0, 2.0),
            color: Vec3::ONE,
            power: 0.8,
        },
    );
    scene.add_light(
        "fill",
        LightDesc {
            position: Vec3::new(-8.0, 6.0, -2.0),
            color: Vec3::new(0.9, 0.9, 1.0),
            power: 0.3,
        },
    );

    scene
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <output-dir> [mesh.obj]", args[0]);
        std::process::exit(1);
    }
    let out_dir = Path::new(&args[1]);
    let mesh_path = args.get(2).map(String::as_str);

    let seed: u64 = rand::random();
    log::info!("Generating scene with seed {}", seed);
    let mut rng = SmallRng::seed_from_u64(seed);

    let scene = build_scene(&mut rng, mesh_path);
    let config = Config::default();
    let camera = Camera::from_look_at(
        Vec3::new(0.0, 2.0, 4.0),
        Vec3::new(0.0, -0.5, -8.0),
        Vec3::Y,
        55.0,
        config.aspect(),
    );

    scene
        .save(out_dir.join("scene.json"))
        .context("writing scene.json")?;
    config
        .save(out_dir.join("config.json"))
        .context("writing config.json")?;
    camera
        .save(out_dir.join("camera.json"))
        .context("writing camera.json")?;

    log::info!(
        "Wrote scene.json ({} objects, {} lights), config.json, camera.json to {}",
        scene.objects.len(),
        scene.lights.len(),
        out_dir.display()
    );
    Ok(())
}
