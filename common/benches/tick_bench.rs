use criterion::{criterion_group, criterion_main, Criterion};
use snake_common::games::snake::{
    ClockState, Direction, GameController, GameEvent, GameSnapshot, ManualTickScheduler,
    SnakeSettings,
};
use snake_common::games::{GameBroadcaster, SessionRng};

struct NullBroadcaster;

impl GameBroadcaster for NullBroadcaster {
    fn broadcast_state(&mut self, _snapshot: &GameSnapshot) {}

    fn broadcast_event(&mut self, _event: &GameEvent) {}

    fn play_eat_cue(&mut self) -> Result<(), String> {
        Ok(())
    }
}

fn play_rounds(ticks: usize) {
    let mut controller = GameController::new(
        SnakeSettings::default(),
        ManualTickScheduler::default(),
        NullBroadcaster,
        SessionRng::new(1234),
    )
    .expect("default settings are valid");
    let mut steer = SessionRng::new(99);
    let _ = controller.start("Bench");

    for _ in 0..ticks {
        let direction = Direction::ALL[steer.random_range(0..4usize)];
        controller.request_direction_change(direction);
        controller.tick();
        if controller.state() == ClockState::GameOver {
            let _ = controller.start("Bench");
        }
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("tick_10000_random_turns", |b| b.iter(|| play_rounds(10_000)));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
