use tictactoe_common::games::tictactoe::CELL_COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place(usize),
    Restart,
    Quit,
}

/// Cells are numbered 1..=9 for the player and 0..9 internally.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let trimmed = line.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "q" | "quit" => return Ok(Command::Quit),
        "r" | "restart" => return Ok(Command::Restart),
        _ => {}
    }

    let number: usize = trimmed
        .parse()
        .map_err(|_| format!("'{}' is not a cell number, restart or quit", trimmed))?;
    if !(1..=CELL_COUNT).contains(&number) {
        return Err(format!("Cell number must be between 1 and {}", CELL_COUNT));
    }
    Ok(Command::Place(number - 1))
}
