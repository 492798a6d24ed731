mod config;
mod input;
mod renderer;

use clap::Parser;
use snake_common::games::SessionRng;
use snake_common::games::snake::{SessionMessage, SnakeSession};
use snake_common::{log, logger};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::{mpsc, oneshot};

use config::{get_config_manager, CONFIG_FILE};
use input::{parse_line, InputCommand};
use renderer::TerminalBroadcaster;

#[derive(Parser)]
#[command(name = "snake_console")]
struct Args {
    /// YAML file with game settings; defaults apply when it is missing.
    #[arg(long, default_value = CONFIG_FILE)]
    config: String,

    /// Start right away with this player name.
    #[arg(long)]
    name: Option<String>,

    /// Seed for food placement, for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = get_config_manager(&args.config).get_config()?;

    let prefix = if args.use_log_prefix || config.use_log_prefix {
        Some("Console".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Loaded config from {}, seed {}", args.config, rng.seed());

    let broadcaster = TerminalBroadcaster::new(config.game.grid_size);
    let (controller, sender, receiver) = SnakeSession::create(config.game.clone(), broadcaster, rng)?;
    let session = tokio::spawn(SnakeSession::run(controller, receiver));

    let default_name = args.name.or(config.player_name);
    match default_name {
        Some(ref name) => request_start(&sender, name.clone()).await,
        None => println!("Type `start <name>` to begin."),
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let Some(command) = parse_line(&line) else {
            continue;
        };

        let message = match command {
            InputCommand::Turn(direction) => SessionMessage::Turn(direction),
            InputCommand::TogglePause => SessionMessage::TogglePause,
            InputCommand::Restart => SessionMessage::Restart,
            InputCommand::Start(name) => {
                match name.or_else(|| default_name.clone()) {
                    Some(name) => request_start(&sender, name).await,
                    None => println!("Type `start <name>` with a name made of letters and digits."),
                }
                continue;
            }
            InputCommand::Quit => break,
        };

        if sender.send(message).is_err() {
            break;
        }
    }

    let _ = sender.send(SessionMessage::Shutdown);
    let summary = session.await?;
    println!(
        "Played {} game(s), best score {}.",
        summary.games_played, summary.high_score
    );
    Ok(())
}

async fn request_start(sender: &mpsc::UnboundedSender<SessionMessage>, name: String) {
    let (reply_tx, reply_rx) = oneshot::channel();
    if sender
        .send(SessionMessage::Start {
            name,
            reply: Some(reply_tx),
        })
        .is_err()
    {
        return;
    }

    if let Ok(Err(e)) = reply_rx.await {
        println!("{}", e);
    }
}
