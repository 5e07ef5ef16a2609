//! Build a few polylines and print their path lengths.
//!
//! Usage:
//!   cargo run -p polyline --example path_lengths -- [seed]

use polyline::prelude::*;

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(2025);

    let tri = isosceles(60.0_f64, 2.0).expect("valid triangle parameters");
    println!("triangle {tri} length={:.6}", tri.length());

    for index in 0..3 {
        let tok = ReplayToken::new(seed, index);
        let walk = Polyline::<f64>::random_replay(5, -1.0, 1.0, tok).expect("valid bounds");
        let closed = &walk + walk[0];
        println!(
            "walk[{index}] open={:.6} closed={:.6}",
            walk.length(),
            closed.length()
        );
    }
}
