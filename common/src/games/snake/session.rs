use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::{log, GameError};
use crate::games::{GameBroadcaster, SessionRng};
use super::clock::TickScheduler;
use super::controller::GameController;
use super::settings::SnakeSettings;
use super::types::Direction;

#[derive(Debug)]
pub enum SessionMessage {
    /// Timer tick, stamped with the generation of the timer that sent it.
    Tick(u64),
    Start {
        name: String,
        reply: Option<oneshot::Sender<Result<(), GameError>>>,
    },
    Turn(Direction),
    TogglePause,
    Restart,
    Shutdown,
}

/// Drives the clock with a spawned tokio interval task. Holds only a weak
/// sender so a pending timer never keeps the session alive.
pub struct TokioTickScheduler {
    sender: mpsc::WeakUnboundedSender<SessionMessage>,
    handle: Option<JoinHandle<()>>,
}

impl TokioTickScheduler {
    pub fn new(sender: &mpsc::UnboundedSender<SessionMessage>) -> Self {
        Self {
            sender: sender.downgrade(),
            handle: None,
        }
    }
}

impl TickScheduler for TokioTickScheduler {
    fn arm(&mut self, interval: Duration, generation: u64) {
        self.cancel();

        let sender = self.sender.clone();
        self.handle = Some(tokio::spawn(async move {
            let mut timer = interval_at(Instant::now() + interval, interval);
            timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                timer.tick().await;
                let Some(sender) = sender.upgrade() else {
                    break;
                };
                if sender.send(SessionMessage::Tick(generation)).is_err() {
                    break;
                }
            }
        }));
    }

    fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl Drop for TokioTickScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionSummary {
    pub high_score: u32,
    pub games_played: u32,
    pub ticks: u64,
}

pub type SnakeSessionController<B> = GameController<TokioTickScheduler, B>;

pub struct SnakeSession;

impl SnakeSession {
    pub fn create<B: GameBroadcaster>(
        settings: SnakeSettings,
        broadcaster: B,
        rng: SessionRng,
    ) -> Result<
        (
            SnakeSessionController<B>,
            mpsc::UnboundedSender<SessionMessage>,
            mpsc::UnboundedReceiver<SessionMessage>,
        ),
        GameError,
    > {
        let (sender, receiver) = mpsc::unbounded_channel();
        let scheduler = TokioTickScheduler::new(&sender);
        let controller = GameController::new(settings, scheduler, broadcaster, rng)?;
        Ok((controller, sender, receiver))
    }

    /// Processes messages one at a time until `Shutdown` arrives or every
    /// sender is gone.
    pub async fn run<B: GameBroadcaster>(
        mut controller: SnakeSessionController<B>,
        mut receiver: mpsc::UnboundedReceiver<SessionMessage>,
    ) -> SessionSummary {
        let mut ticks = 0u64;

        while let Some(message) = receiver.recv().await {
            match message {
                SessionMessage::Tick(generation) => {
                    if controller.handle_timer(generation).is_some() {
                        ticks += 1;
                    }
                }
                SessionMessage::Start { name, reply } => {
                    let result = controller.start(&name);
                    if let Err(ref e) = result {
                        log!("Start rejected: {}", e);
                    }
                    if let Some(reply) = reply {
                        let _ = reply.send(result);
                    }
                }
                SessionMessage::Turn(direction) => {
                    controller.request_direction_change(direction);
                }
                SessionMessage::TogglePause => {
                    controller.toggle_pause();
                }
                SessionMessage::Restart => controller.restart(),
                SessionMessage::Shutdown => break,
            }
        }

        let summary = SessionSummary {
            high_score: controller.high_score(),
            games_played: controller.games_played(),
            ticks,
        };
        log!(
            "Session finished: {} games, {} ticks, high score {}",
            summary.games_played,
            summary.ticks,
            summary.high_score
        );
        summary
    }
}
