//! Demo frame loop: re-evaluates a few declarative timelines once per sample
//! and prints what fires. `TIMELINE_FRAMES` sets the number of samples and
//! `RUST_LOG=timeline=trace` shows every window hit.
use itertools::Itertools as _;
use timeline::{Config, Result, Timeline};
use tracing::info;
use tracing_subscriber::EnvFilter;

type Tl = Timeline<i64>;

fn main() -> Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    info!("Driving {} frames", config.frames);
    let frames = 0..config.frames.max(0);

    println!("=== Span ===");
    for t in frames.clone() {
        Timeline::new(t)
            .span(3, |tl| println!("t={t}: in span [0,3), elapsed={}", tl.elapsed()))
            .span(3, |tl| println!("t={t}: in span [3,6), elapsed={}", tl.elapsed()))
            .once(|| println!("t={t}: spans finished"));
    }

    println!("=== Repeat N ===");
    for t in frames.clone() {
        Timeline::new(t).repeat_n(4, 2, |n, tl: Tl| {
            println!(
                "t={t}: loop {n}, elapsed={}, ratio={}",
                tl.elapsed(),
                tl.ratio()
            )
        });
    }

    println!("=== Repeat ===");
    for t in frames.clone() {
        Timeline::new(t).repeat(3, |n, tl: Tl| {
            println!("t={t}: infinite loop {n}, elapsed={}", tl.elapsed())
        });
    }

    println!("=== Ratio ===");
    let mut ratios = Vec::new();
    for t in frames.clone() {
        Timeline::new(t)
            .span(5, |tl| ratios.push(tl.ratio()))
            .span(10, |tl| ratios.push(tl.ratio()));
    }
    println!("{}", ratios.iter().join(" "));

    println!("=== Nested ===");
    for t in frames {
        Timeline::new(t)
            .span(6, |outer| {
                outer.repeat(3, |n, tl: Tl| {
                    println!("t={t}: outer span 1, inner loop {n} (elapsed={})", tl.elapsed())
                });
            })
            .span(6, |outer| {
                let print = |name: &str, tl: Tl| {
                    println!("t={t}: outer span 2, inner span {name} (ratio={:.1})", tl.ratio())
                };
                outer
                    .span(2, |tl| print("A", tl))
                    .span(2, |tl| print("B", tl))
                    .span(2, |tl| print("C", tl));
            });
    }

    Ok(())
}
