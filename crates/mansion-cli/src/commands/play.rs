//! Interactive terminal play.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::Arc;

use mansion_engine::{Game, GameConfig, GameSession, Input, Renderer, parse_input};

use crate::terminal::TerminalRenderer;

pub fn run(manifest: &Path, luck: Option<i32>, reveal_deltas: bool) -> Result<(), String> {
    let story = super::load_story(manifest)?;

    let mut config = GameConfig::from_story(&story).with_reveal_deltas(reveal_deltas);
    if let Some(luck) = luck {
        config = config.with_initial_luck(luck);
    }

    let title = story.title().to_string();
    let session = GameSession::new(Arc::new(story.store), config);

    let stdin = io::stdin();
    play(session, &title, stdin.lock(), io::stdout().lock())?;
    Ok(())
}

/// Run the read-submit-render loop until input ends or the player quits.
fn play<I: BufRead, W: Write>(
    session: GameSession,
    title: &str,
    input: I,
    output: W,
) -> Result<TerminalRenderer<W>, String> {
    let mut game = Game::new(session, TerminalRenderer::new(output));
    game.renderer_mut().banner(title);
    game.start();
    flush(&mut game)?;

    for line in input.lines() {
        let line = line.map_err(|e| format!("cannot read input: {e}"))?;

        match parse_input(&line) {
            Input::Action(action) => {
                if let Err(e) = game.submit(action) {
                    game.renderer_mut().notice(&e.to_string());
                }
            }
            Input::Restart => game.restart(),
            Input::Luck => {
                let luck = game.session().luck();
                game.renderer_mut().report_luck(luck);
            }
            Input::Help => game.renderer_mut().help(),
            Input::Quit => break,
            Input::Unknown(text) => game
                .renderer_mut()
                .notice(&format!("unknown command: {text}. Type 'help' for commands.")),
        }
        flush(&mut game)?;
    }

    Ok(game.into_renderer())
}

fn flush<W: Write>(game: &mut Game<TerminalRenderer<W>>) -> Result<(), String> {
    game.renderer_mut()
        .take_error()
        .map_err(|e| format!("cannot write output: {e}"))
}
