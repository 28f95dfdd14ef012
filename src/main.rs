use driftfield::prelude::*;

fn main() {
    let result = FieldSimulation::new()
        .with_particle_count(100)
        .with_mode(Mode::RisingSmoke)
        .with_visuals(|v| {
            v.blend_mode(BlendMode::Additive);
            v.glow(0.4);
        })
        .run();

    if let Err(e) = result {
        eprintln!("driftfield: {}", e);
        std::process::exit(1);
    }
}
