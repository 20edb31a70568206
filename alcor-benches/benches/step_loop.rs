use criterion::BenchmarkGroup;
use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use std::hint::black_box;
use tokio::runtime::Builder;
use tokio::runtime::Runtime;

use alcor::fiber::Fiber;
use alcor::lang::Term;
use alcor::lang::Tick;
use alcor::proc::Microprocess;
use alcor::sched::Scheduler;

const POOL_SIZES: &[usize] = &[1, 4, 16];

fn runtime() -> Runtime {
  Builder::new_current_thread().build().unwrap()
}

fn bench_fiber_resume(criterion: &mut Criterion) {
  let runtime: Runtime = runtime();

  criterion.bench_function("fiber_resume_1000", |bench| {
    bench.iter(|| {
      runtime.block_on(async {
        let mut fiber: Fiber = Fiber::spawn(|mut context| async move {
          loop {
            context.pause().await;
          }
        });

        for _ in 0..1000 {
          black_box(fiber.resume(Term::new(Tick)).await);
        }
      })
    })
  });
}

fn bench_scheduler_cycles(criterion: &mut Criterion) {
  let runtime: Runtime = runtime();
  let mut group: BenchmarkGroup<_> = criterion.benchmark_group("scheduler_cycles");

  for pooled in POOL_SIZES {
    let id: BenchmarkId = BenchmarkId::new("drain_100_steps_each", pooled);

    group.bench_with_input(id, pooled, |bench, &pooled| {
      bench.iter(|| {
        runtime.block_on(async {
          let mut scheduler: Scheduler = Scheduler::new();

          for _ in 0..pooled {
            scheduler.register(Microprocess::new(|mut context| async move {
              for _ in 0..100 {
                context.pause().await;
              }
            }));
          }

          scheduler.activate();
          scheduler.run().await;

          black_box(scheduler.pending())
        })
      })
    });
  }

  group.finish();
}

criterion_group!(benches, bench_fiber_resume, bench_scheduler_cycles);
criterion_main!(benches);
