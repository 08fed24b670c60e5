use std::sync::Arc;

use glam::DVec3;
use raysphere::hittable::Hittable;
use raysphere::interval::Interval;
use raysphere::material::Material;
use raysphere::ray::Ray;
use raysphere::scene::SceneConfig;
use raysphere::sphere::Sphere;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn hollow_glass_sphere_in_builtin_scene() {
    let world = SceneConfig::builtin().unwrap().build().unwrap();
    let ray = Ray::new(DVec3::new(0.0, 1.0, 5.0), DVec3::new(0.0, 0.0, -1.0));

    // Outer shell
    let outer = world.hit(&ray, Interval::new(0.001, f64::INFINITY)).unwrap();
    assert!(close(outer.t, 4.0));
    assert!(outer.front_face);
    assert!(matches!(outer.material, Material::Dielectric { .. }));

    // Inner shell has a negative radius, so it is seen from its back side
    let inner = world.hit(&ray, Interval::new(outer.t + 0.001, f64::INFINITY)).unwrap();
    assert!(close(inner.t, 4.1));
    assert!(!inner.front_face);
    assert!(close(inner.normal.z, 1.0));
}

#[test]
fn shrinking_interval_walks_every_surface_in_order() {
    let world = SceneConfig::builtin().unwrap().build().unwrap();
    let ray = Ray::new(DVec3::new(0.0, 1.0, 5.0), DVec3::new(0.0, 0.0, -1.0));

    let mut ts = Vec::new();
    let mut t_min = 0.001;
    while let Some(rec) = world.hit(&ray, Interval::new(t_min, f64::INFINITY)) {
        ts.push(rec.t);
        t_min = rec.t;
    }

    let expected = [4.0, 4.1, 5.9, 6.0];
    assert_eq!(ts.len(), expected.len());
    for (t, e) in ts.iter().zip(expected) {
        assert!(close(*t, e), "{} != {}", t, e);
    }
}

#[test]
fn scene_box_contains_every_object() {
    let world = SceneConfig::builtin().unwrap().build().unwrap();
    let scene_box = world.bounding_box(0.0, 1.0);
    for object in &world.objects {
        let b = object.bounding_box(0.0, 1.0);
        assert!(b.min.cmpge(scene_box.min).all());
        assert!(b.max.cmple(scene_box.max).all());
    }
}

#[test]
fn loads_scene_from_file() {
    let path = std::env::temp_dir().join(format!("raysphere-scene-{}.json", std::process::id()));
    std::fs::write(
        &path,
        r#"{
            "materials": { "red": { "type": "lambertian", "albedo": [0.9, 0.1, 0.1] } },
            "spheres": [
                { "center": [0, 0, -3], "radius": 1, "material": "red" },
                { "center": [0, 0, -6], "radius": 1, "material": "red" }
            ]
        }"#,
    )
    .unwrap();

    let scene = SceneConfig::load(&path);
    std::fs::remove_file(&path).ok();
    let world = scene.unwrap().build().unwrap();

    let ray = Ray::new(DVec3::ZERO, DVec3::new(0.0, 0.0, -1.0));
    let near = world.hit(&ray, Interval::new(0.001, f64::INFINITY)).unwrap();
    let far = world.hit(&ray, Interval::new(4.5, f64::INFINITY)).unwrap();
    assert!(close(near.t, 2.0));
    assert!(close(far.t, 5.0));
    // Both spheres share one material allocation
    assert!(std::ptr::eq(near.material, far.material));
}

#[test]
fn missing_scene_file_reports_path() {
    let err = SceneConfig::load("/definitely/not/here.json").err().unwrap();
    assert!(err.to_string().contains("/definitely/not/here.json"));
}

#[test]
fn concurrent_queries_agree() {
    let sphere = Arc::new(Sphere::new(
        DVec3::new(0.0, 0.0, -2.0),
        0.75,
        Arc::new(Material::Metal {
            albedo: DVec3::splat(0.9),
            fuzz: 0.2,
        }),
    ));
    let ray = Ray::new(DVec3::new(0.1, 0.05, 0.0), DVec3::new(0.0, 0.0, -1.0));
    let expected = sphere.hit(&ray, Interval::new(0.0, 100.0)).unwrap();
    let (t, u, v) = (expected.t, expected.u, expected.v);

    std::thread::scope(|s| {
        for _ in 0..8 {
            let sphere = Arc::clone(&sphere);
            s.spawn(move || {
                for _ in 0..1000 {
                    let rec = sphere.hit(&ray, Interval::new(0.0, 100.0)).unwrap();
                    assert_eq!(rec.t.to_bits(), t.to_bits());
                    assert_eq!((rec.u.to_bits(), rec.v.to_bits()), (u.to_bits(), v.to_bits()));
                }
            });
        }
    });
}
