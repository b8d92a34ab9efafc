#![cfg(test)]
pub use rstest::*;

pub fn common_init() {
    use std::sync::Once;
    use tracing_subscriber::EnvFilter;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        // Only initialize once for all tests
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env()) // <- reads RUST_LOG
            .with_test_writer() // ensures it integrates with `cargo test` output
            .init();
    });
}

/// Evaluates `chain` once per sample in `samples`, collecting whatever each
/// evaluation reports. Mirrors a frame loop re-running the same declarative
/// chain every tick.
pub fn per_sample<T, R>(
    samples: impl IntoIterator<Item = T>,
    mut chain: impl FnMut(T, &mut Vec<R>),
) -> Vec<R> {
    common_init();
    let mut out = Vec::new();
    for t in samples {
        chain(t, &mut out);
    }
    out
}
