use clap::Parser;
use log::{error, info, warn};

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;
use raysphere::hittable::Hittable;
use raysphere::hittable_list::HittableList;
use raysphere::interval::Interval;
use raysphere::probe::Probe;
use raysphere::random;
use raysphere::scene::SceneConfig;

/// Load the requested scene, or the built-in one
fn load_world(args: &Args) -> Result<HittableList, Box<dyn std::error::Error>> {
    let scene = match &args.scene {
        Some(path) => {
            info!("Loading scene from {}", path);
            SceneConfig::load(path)?
        }
        None => {
            info!("Using built-in scene");
            SceneConfig::builtin()?
        }
    };
    scene.build()
}

/// Print object and scene bounds for the probe's time span
fn print_bounds(world: &HittableList, time: f64) {
    for (i, object) in world.objects.iter().enumerate() {
        let bbox = object.bounding_box(time, time);
        println!("object {:>3}: min {:?} max {:?}", i, bbox.min, bbox.max);
    }
    let bbox = world.bounding_box(time, time);
    println!("scene      : min {:?} max {:?}", bbox.min, bbox.max);
}

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.clone().into());

    info!("raysphere - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));

    if args.direction.length_squared() == 0.0 {
        error!("Ray direction must not be zero");
        std::process::exit(1);
    }
    if args.t_min >= args.t_max {
        warn!("Empty ray interval ({}, {}): nothing can be hit", args.t_min, args.t_max);
    }

    let world = match load_world(&args) {
        Ok(world) => world,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    if args.bounds {
        print_bounds(&world, args.time);
    }

    let mut probe = Probe::new(args.origin, args.direction);
    probe.time = args.time;
    probe.ray_t = Interval::new(args.t_min, args.t_max);

    let bbox = world.bounding_box(args.time, args.time);
    if !bbox.hit(&probe.ray(), probe.ray_t) {
        info!("Ray misses the scene bounds");
    }

    match probe.fire(&world) {
        Some(rec) => {
            println!("hit   t = {}", rec.t);
            println!("point   = {:?}", rec.p);
            let face = if rec.front_face { "front" } else { "back" };
            println!("normal  = {:?} ({} face)", rec.normal, face);
            println!("uv      = ({}, {})", rec.u, rec.v);
            println!("material= {:?}", rec.material);
        }
        None => println!("miss"),
    }

    if let Some(count) = args.batch {
        if let Some(seed) = args.seed {
            // Seed every rayon worker differently but reproducibly
            rayon::broadcast(|ctx| random::seed_thread_rng(seed.wrapping_add(ctx.index() as u64)));
        }
        probe.show_progress = true;
        let stats = probe.batch(&world, count);
        println!(
            "batch: {} rays, {} hits ({} front face), nearest t = {:?}, mean t = {:?}",
            stats.rays,
            stats.hits,
            stats.front_faces,
            stats.nearest_t,
            stats.mean_t()
        );
    }
}
