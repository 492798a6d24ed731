use std::collections::HashSet;
use std::io::Write;

use snake_common::games::GameBroadcaster;
use snake_common::games::snake::{GameEvent, GameOverReason, GameSnapshot, Point};

const HEAD: char = '@';
const BODY: char = 'o';
const FOOD: char = '*';
const EMPTY: char = '.';

/// Draws each snapshot as a text frame on stdout.
pub struct TerminalBroadcaster {
    grid_size: u32,
}

impl TerminalBroadcaster {
    pub fn new(grid_size: u32) -> Self {
        Self { grid_size }
    }
}

pub fn render_frame(snapshot: &GameSnapshot, grid_size: u32) -> String {
    let size = grid_size as i32;
    let body: HashSet<Point> = snapshot.segments.iter().skip(1).copied().collect();
    let head = snapshot.segments.first().copied();

    let mut frame = format!(
        "Score: {:03}  High score: {:03}  Tick: {}\n",
        snapshot.score, snapshot.high_score, snapshot.tick
    );
    for y in 1..=size {
        for x in 1..=size {
            let cell = Point::new(x, y);
            let glyph = if Some(cell) == head {
                HEAD
            } else if body.contains(&cell) {
                BODY
            } else if cell == snapshot.food {
                FOOD
            } else {
                EMPTY
            };
            frame.push(glyph);
        }
        frame.push('\n');
    }
    frame
}

pub fn describe_event(event: &GameEvent) -> String {
    match event {
        GameEvent::Started { player } => format!("Good luck, {}! Steer with w/a/s/d, p pauses.", player),
        GameEvent::Paused => "Paused. Press p to resume.".to_string(),
        GameEvent::Resumed => "Resumed.".to_string(),
        GameEvent::GameOver {
            reason,
            score,
            high_score,
        } => {
            let cause = match reason {
                GameOverReason::BoundaryCollision => "You hit the wall",
                GameOverReason::SelfCollision => "You ran into yourself",
                GameOverReason::BoardFull => "You filled the whole board",
            };
            format!(
                "{}. Score {}, high score {}. Type `start` to play again or `q` to quit.",
                cause, score, high_score
            )
        }
    }
}

impl GameBroadcaster for TerminalBroadcaster {
    fn broadcast_state(&mut self, snapshot: &GameSnapshot) {
        print!("{}", render_frame(snapshot, self.grid_size));
    }

    fn broadcast_event(&mut self, event: &GameEvent) {
        println!("{}", describe_event(event));
    }

    fn play_eat_cue(&mut self) -> Result<(), String> {
        let mut stdout = std::io::stdout();
        stdout
            .write_all(b"\x07")
            .and_then(|_| stdout.flush())
            .map_err(|e| format!("Failed to ring terminal bell: {}", e))
    }
}
