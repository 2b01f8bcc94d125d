use alivegpt::core::membership::Membership;
use alivegpt::core::random::SeededRandom;
use alivegpt::core::range::{NoFeedback, RangeSelection};
use alivegpt::core::session::{ChatSession, SessionLimits};
use alivegpt::core::smart_match::MatchKind;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

fn bench_session(turns: usize) -> ChatSession {
    let limits = SessionLimits {
        starting_credits: i64::MAX / 2,
        chat_limit: turns * 2 + 2,
        ..SessionLimits::default()
    };
    ChatSession::new(limits, Membership::Max, Box::new(SeededRandom::from_seed(7)))
}

fn run_turns(session: &mut ChatSession, turns: usize) {
    for index in 0..turns {
        let outcome = if index % 5 == 4 {
            session.request_smart_match(MatchKind::Session)
        } else {
            session.submit_text("I have been feeling stressed about work lately")
        };
        if let Some(turn) = outcome.scheduled() {
            black_box(session.resolve_turn(turn.turn_id));
        }
        session.dismiss_alert();
    }
}

fn bench_turn_cycle(c: &mut Criterion) {
    for &turns in &[10usize, 100] {
        let mut group = c.benchmark_group("turn_cycle");
        group.throughput(Throughput::Elements(turns as u64));
        group.bench_with_input(BenchmarkId::from_parameter(turns), &turns, |b, &turns| {
            b.iter(|| {
                let mut session = bench_session(turns);
                run_turns(&mut session, turns);
                black_box(session.messages().len())
            })
        });
        group.finish();
    }
}

fn bench_slider_sweep(c: &mut Criterion) {
    c.bench_function("slider_sweep_600", |b| {
        b.iter(|| {
            let mut range =
                RangeSelection::new(0.0, 600.0, 1.0, 143.0, 314.0).expect("valid range");
            let mut sink = NoFeedback;
            for position in 0..=120u16 {
                range.drag_lower(f64::from(position), 120.0, &mut sink);
                range.drag_upper(f64::from(120 - position), 120.0, &mut sink);
            }
            black_box((range.lower(), range.upper()))
        })
    });
}

criterion_group!(benches, bench_turn_cycle, bench_slider_sweep);
criterion_main!(benches);
