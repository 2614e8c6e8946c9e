//! Ear-clipping driver built on the public ring API.
//!
//! Usage:
//!   cargo run -p polyring --example ear_clip -- [seed] [vertices]
//!
//! Samples a star-shaped polygon, then repeatedly clips the first ear found
//! and prints each triangle until a single triangle remains.

use polyring::sample::{draw_star_ring, ReplayToken, StarCfg};

fn main() {
    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(2025);
    let n = args.next().and_then(|s| s.parse().ok()).unwrap_or(10);
    let cfg = StarCfg::with_vertices(n);
    let mut ring = draw_star_ring(cfg, ReplayToken { seed, index: 0 }).unwrap();
    println!("polygon: {} vertices, area2 = {}", ring.len(), ring.area2());

    while ring.len() > 3 {
        let ear = ring.vertices().find(|&v| ring.is_ear(v).unwrap_or(false));
        let Some(ear) = ear else {
            eprintln!("no ear found; input is not a simple polygon");
            return;
        };
        let (a, b) = ring.adjacent(ear).unwrap();
        let [pa, pv, pb] = [a, ear, b].map(|v| ring.point(v).unwrap());
        println!(
            "ear ({}, {}) ({}, {}) ({}, {})",
            pa.x, pa.y, pv.x, pv.y, pb.x, pb.y
        );
        ring.remove(ear).unwrap();
    }
    let last: Vec<String> = ring
        .points()
        .iter()
        .map(|p| format!("({}, {})", p.x, p.y))
        .collect();
    println!("last {}", last.join(" "));
}
