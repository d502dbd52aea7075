use criterion::{black_box, criterion_group, criterion_main, Criterion};
use herald_core::{Event, EventBus, EventType, Subscription};

fn bench_dispatch(c: &mut Criterion) {
    let bus = EventBus::new();

    // 256 handlers, half of them interested in key presses.
    let _subscriptions: Vec<Subscription> = (0..256)
        .map(|i| {
            let mask = if i % 2 == 0 {
                EventType::KEY_PRESSED
            } else {
                EventType::KEY_RELEASED
            };
            bus.subscribe_fn(mask, |event| black_box(event.kind()).is_empty())
        })
        .collect();

    let mut group = c.benchmark_group("EventBus Dispatch");

    group.bench_function("Drain 100 events (full propagation)", |b| {
        b.iter(|| {
            for _ in 0..100 {
                bus.enqueue(Event::new(EventType::KEY_PRESSED));
            }
            black_box(bus.process_queue());
        });
    });

    group.bench_function("Subscribe and drop", |b| {
        b.iter(|| {
            let subscription = bus.subscribe_fn(EventType::KEYBOARD, |_| false);
            black_box(subscription.id());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_dispatch);
criterion_main!(benches);
