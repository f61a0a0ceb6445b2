//! Terminal 2048 runner (default binary).
//!
//! Seed and mode are read from plain stdin before the TUI starts, so a
//! session can be scripted (`echo "42 E" | ...` works with newlines).
//! Gameplay then runs in the crossterm alternate screen: arrows or U/D/L/R
//! slide, Q quits. The final "You win!" / "You lose." line is printed after
//! the terminal is restored.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Result};
use crossterm::event::{self, Event, KeyEventKind};

use tui_2048::core::GameState;
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::term::{GameView, TerminalRenderer, Viewport};
use tui_2048::types::Difficulty;

fn main() -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let seed = prompt_seed(&mut lines)?;
    let difficulty = prompt_mode(&mut lines)?;

    let mut game = GameState::new(difficulty, seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();
    result?;

    if game.won() {
        println!("You win!");
    } else if game.game_over() {
        println!("You lose.");
    }
    Ok(())
}

fn run(term: &mut TerminalRenderer, game: &mut GameState) -> Result<()> {
    let view = GameView::default();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&game.snapshot(), Viewport::new(w, h));
        term.draw(&fb)?;

        // Leave the final frame (with its overlay) up until a key is pressed.
        if game.won() || game.game_over() {
            wait_for_key()?;
            return Ok(());
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(direction) = handle_key_event(key) {
                    game.apply_move(direction);
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}

fn wait_for_key() -> Result<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}

fn prompt_seed(lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<u32> {
    loop {
        print!("Enter random seed: ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            bail!("stdin closed before a seed was entered");
        };
        match line?.trim().parse::<u32>() {
            Ok(seed) => return Ok(seed),
            Err(_) => println!("Error: Invalid seed."),
        }
    }
}

fn prompt_mode(lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<Difficulty> {
    loop {
        print!("Choose game mode: Easy (E), Medium (M), or Hard (H): ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            bail!("stdin closed before a mode was chosen");
        };
        match Difficulty::from_str(line?.trim()) {
            Some(mode) => return Ok(mode),
            None => println!("Error: Invalid mode."),
        }
    }
}
