use snake_common::games::snake::Direction;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputCommand {
    Turn(Direction),
    /// Name from the line, if one was typed.
    Start(Option<String>),
    TogglePause,
    Restart,
    Quit,
}

pub fn parse_line(line: &str) -> Option<InputCommand> {
    let mut parts = line.split_whitespace();
    let keyword = parts.next()?.to_ascii_lowercase();

    let command = match keyword.as_str() {
        "w" | "up" | "k" => InputCommand::Turn(Direction::Up),
        "s" | "down" | "j" => InputCommand::Turn(Direction::Down),
        "a" | "left" | "h" => InputCommand::Turn(Direction::Left),
        "d" | "right" | "l" => InputCommand::Turn(Direction::Right),
        "start" | "enter" => InputCommand::Start(parts.next().map(str::to_string)),
        "p" | "pause" => InputCommand::TogglePause,
        "r" | "restart" => InputCommand::Restart,
        "q" | "quit" | "exit" => InputCommand::Quit,
        _ => return None,
    };
    Some(command)
}
