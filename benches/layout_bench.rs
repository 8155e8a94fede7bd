// Benchmark for grid layout
// Measures full layout and render cost for growing numbers of events

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use weekly_schedule::models::schedule::{ScheduleConfig, ScheduleEvent};
use weekly_schedule::models::weekday::WeekDay;
use weekly_schedule::services::layout::layout;
use weekly_schedule::ui_html::{configure, CardTheme};

fn config_with_events(count: usize) -> ScheduleConfig {
    let events = (0..count)
        .map(|i| {
            let day = WeekDay::ALL[i % WeekDay::ALL.len()];
            let start = 6 + (i % 12) as u8;
            ScheduleEvent::new(format!("Event {}", i)).entry(day, start, start + 1)
        })
        .collect();
    ScheduleConfig {
        start_hour: 6,
        end_hour: 22,
        show_weekend: true,
        events,
        ..Default::default()
    }
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    for count in [0usize, 10, 50, 200] {
        let config = config_with_events(count);
        group.bench_with_input(BenchmarkId::new("grid", count), &config, |b, config| {
            b.iter(|| layout(black_box(config)))
        });
        group.bench_with_input(BenchmarkId::new("render", count), &config, |b, config| {
            b.iter(|| configure(black_box(config), &CardTheme::default()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
