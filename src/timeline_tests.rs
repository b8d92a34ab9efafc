#![cfg(test)]
use crate::*;
use rand::Rng;

type Tl = Timeline<i32>;

mod span_chains {
    use super::*;

    #[test]
    fn back_to_back_spans_split_the_axis() {
        let fired = per_sample(0..8, |t, out| {
            Timeline::new(t)
                .span(3, |tl| out.push(('a', t, tl.elapsed())))
                .span(3, |tl| out.push(('b', t, tl.elapsed())));
        });
        assert_eq!(
            fired,
            [
                ('a', 0, 0),
                ('a', 1, 1),
                ('a', 2, 2),
                ('b', 3, 0),
                ('b', 4, 1),
                ('b', 5, 2),
            ]
        );
    }

    #[test]
    fn ratios_across_uneven_spans() {
        let ratios = per_sample(0..15, |t, out| {
            Timeline::new(t)
                .span(5, |tl| out.push(tl.ratio()))
                .span(10, |tl| out.push(tl.ratio()));
        });
        assert_eq!(
            ratios,
            [
                0.0, 0.2, 0.4, 0.6, 0.8, 0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9
            ]
        );
    }

    #[rstest]
    #[case(1, 1)]
    #[case(4, 7)]
    #[case(10, 3)]
    fn only_the_second_span_fires_in_its_window(#[case] d1: i32, #[case] d2: i32) {
        for t in d1..d1 + d2 {
            let (mut first, mut second) = (false, None);
            Timeline::new(t)
                .span(d1, |_| first = true)
                .span(d2, |tl| second = Some(tl.elapsed()));
            assert!(!first, "t={t}");
            assert_eq!(second, Some(t - d1), "t={t}");
        }
    }

    #[test]
    fn at_most_one_span_fires_per_sample() {
        let durations = [2, 0, 5, 1, 3];
        for t in -2..15 {
            let mut hits = 0;
            let mut tl = Timeline::new(t);
            for d in durations {
                tl = tl.span(d, |_| hits += 1);
            }
            let total: i32 = durations.iter().sum();
            assert_eq!(hits, usize::from((0..total).contains(&t)), "t={t}");
            assert_eq!(tl.from(), total);
        }
    }

    #[test]
    fn once_marks_each_span_start() {
        let starts = per_sample(0..6, |t, out| {
            Timeline::new(t)
                .once(|| out.push(t))
                .skip(2)
                .once(|| out.push(t))
                .skip(2)
                .once(|| out.push(t));
        });
        assert_eq!(starts, [0, 2, 4]);
    }
}

mod repetition {
    use super::*;

    #[test]
    fn bounded_repeat_then_continue() {
        let fired = per_sample(0..10, |t, out| {
            Timeline::new(t).repeat_n(4, 2, |n, tl: Tl| out.push((t, n, tl.elapsed(), tl.ratio())));
        });
        assert_eq!(
            fired,
            [
                (0, 0, 0, 0.0),
                (1, 0, 1, 0.25),
                (2, 0, 2, 0.5),
                (3, 0, 3, 0.75),
                (4, 1, 0, 0.0),
                (5, 1, 1, 0.25),
                (6, 1, 2, 0.5),
                (7, 1, 3, 0.75),
            ]
        );
    }

    #[test]
    fn unbounded_repeat_counts_periods() {
        let fired = per_sample(0..8, |t, out| {
            Timeline::new(t).repeat(3, |n, tl| out.push((n, tl.elapsed())));
        });
        assert_eq!(
            fired,
            [(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2), (2, 0), (2, 1)]
        );
    }

    #[test]
    fn repeat_after_span_starts_at_seam() {
        let fired = per_sample(0..9, |t, out| {
            Timeline::new(t)
                .span(3, |_| out.push((t, -1)))
                .repeat(2, |n, _| out.push((t, n)));
        });
        assert_eq!(
            fired,
            [
                (0, -1),
                (1, -1),
                (2, -1),
                (3, 0),
                (4, 0),
                (5, 1),
                (6, 1),
                (7, 2),
                (8, 2)
            ]
        );
    }

    #[test]
    fn chain_continues_after_bounded_repeat() {
        let mut tail = None;
        let seam = Timeline::new(13)
            .repeat_n(3, 4, |_, _| panic!("13 is past 4 periods of 3"))
            .span(5, |tl| tail = Some(tl.elapsed()));
        assert_eq!(tail, Some(1));
        assert_eq!(seam.from(), 17);
    }
}

mod nesting {
    use super::*;

    #[test]
    fn inner_chains_are_relative_to_the_outer_window() {
        let log = per_sample(0..12, |t, out| {
            Timeline::new(t)
                .span(6, |outer| {
                    outer.repeat(3, |n, tl| out.push(format!("1:loop {n} e={}", tl.elapsed())));
                })
                .span(6, |outer| {
                    outer
                        .span(2, |tl| out.push(format!("2:A r={:.1}", tl.ratio())))
                        .span(2, |tl| out.push(format!("2:B r={:.1}", tl.ratio())))
                        .span(2, |tl| out.push(format!("2:C r={:.1}", tl.ratio())));
                });
        });
        assert_eq!(
            log,
            [
                "1:loop 0 e=0",
                "1:loop 0 e=1",
                "1:loop 0 e=2",
                "1:loop 1 e=0",
                "1:loop 1 e=1",
                "1:loop 1 e=2",
                "2:A r=0.0",
                "2:A r=0.5",
                "2:B r=0.0",
                "2:B r=0.5",
                "2:C r=0.0",
                "2:C r=0.5",
            ]
        );
    }
}

mod properties {
    use super::*;

    const SAMPLES: usize = 200;

    #[test]
    fn span_reports_elapsed_and_ratio_inside_window() {
        let mut rng = rand::rng();
        for _ in 0..SAMPLES {
            let duration: i64 = rng.random_range(1..1_000);
            let t = rng.random_range(-1_000..2_000);
            let mut seen = Vec::new();
            Timeline::new(t).span(duration, |tl| seen.push((tl.elapsed(), tl.ratio())));
            if (0..duration).contains(&t) {
                assert_eq!(seen, [(t, t as f64 / duration as f64)], "t={t} d={duration}");
            } else {
                assert!(seen.is_empty(), "t={t} d={duration}");
            }
        }
    }

    #[test]
    fn repeat_matches_division_and_remainder() {
        let mut rng = rand::rng();
        for _ in 0..SAMPLES {
            let period: i32 = rng.random_range(1..50);
            let t = rng.random_range(-100..10_000);
            let mut seen = None;
            Timeline::new(t).repeat(period, |n, tl| seen = Some((n, tl.elapsed())));
            if t >= 0 {
                assert_eq!(seen, Some((i64::from(t / period), t % period)), "t={t} p={period}");
            } else {
                assert_eq!(seen, None, "t={t} p={period}");
            }
        }
    }

    #[test]
    fn repeat_n_fires_only_within_count() {
        let mut rng = rand::rng();
        for _ in 0..SAMPLES {
            let period: i16 = rng.random_range(1..20);
            let n: i64 = rng.random_range(0..10);
            let t = rng.random_range(0..300);
            let mut seen = None;
            let seam = Timeline::new(t).repeat_n(period, n, |m, _| seen = Some(m));
            let expected = i64::from(t / period);
            assert_eq!(seen, (expected < n).then_some(expected), "t={t} p={period} n={n}");
            assert_eq!(i64::from(seam.from()), n * i64::from(period));
        }
    }

    #[test]
    fn works_with_every_signed_width() {
        fn probe<T: Int>(now: T, duration: T) -> Option<f64> {
            let mut ratio = None;
            Timeline::new(now).span(duration, |tl| ratio = Some(tl.ratio()));
            ratio
        }
        assert_eq!(probe(1i8, 4), Some(0.25));
        assert_eq!(probe(1i16, 4), Some(0.25));
        assert_eq!(probe(1i32, 4), Some(0.25));
        assert_eq!(probe(1i64, 4), Some(0.25));
        assert_eq!(probe(1i128, 4), Some(0.25));
        assert_eq!(probe(1isize, 4), Some(0.25));
    }
}
