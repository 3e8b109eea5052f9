//! Line protocol for driving a session from a terminal or a pipe.
//!
//! Each input line is either a JSON [`Command`] issued by the current player,
//! e.g. `{"type":"BuildRoad","payload":[[0.667,-0.333,-0.333],[0.333,0.333,-0.667]]}`,
//! or one of the verbs below. Every line gets exactly one JSON [`Reply`] line back.
//!
//! - `view`: full session snapshot
//! - `spots`: legal settlement and road spots for the current player
//! - `roll`: roll the dice
//! - `end`: end the current turn
//! - `quit`: stop reading

use serde::Serialize;
use settlers_core::view::SessionView;
use settlers_core::{Command, GameEvent, PlayerId};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{info, warn};

use crate::actor::{SessionHandle, Spots};
use crate::config::HostError;

#[derive(Debug, Serialize)]
#[serde(tag = "type", content = "payload")]
pub enum Reply {
    Events(Vec<GameEvent>),
    View(Box<SessionView>),
    Spots { player: PlayerId, spots: Spots },
    Error(String),
}

enum Line {
    Command(Command),
    View,
    Spots,
    Quit,
}

fn parse_line(line: &str) -> Result<Line, serde_json::Error> {
    Ok(match line {
        "view" => Line::View,
        "spots" => Line::Spots,
        "roll" => Line::Command(Command::RollDice),
        "end" => Line::Command(Command::EndTurn),
        "quit" => Line::Quit,
        json => Line::Command(serde_json::from_str(json)?),
    })
}

/// Serve the line protocol until `quit` or end of input
pub async fn run<R, W>(handle: SessionHandle, input: R, mut output: W) -> Result<(), HostError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let reply = match parse_line(line) {
            Ok(Line::Quit) => break,
            Ok(Line::View) => Reply::View(Box::new(handle.view().await?)),
            Ok(Line::Spots) => {
                let player = handle.current_player().await?;
                Reply::Spots {
                    player,
                    spots: handle.spots(player).await?,
                }
            }
            Ok(Line::Command(command)) => {
                let player = handle.current_player().await?;
                match handle.apply(player, command).await {
                    Ok(events) => Reply::Events(events),
                    Err(HostError::Game(err)) => Reply::Error(err.to_string()),
                    Err(err) => return Err(err),
                }
            }
            Err(err) => {
                warn!("Unreadable line {:?}: {}", line, err);
                Reply::Error(format!("unreadable command: {}", err))
            }
        };

        let mut text = serde_json::to_string(&reply)?;
        text.push('\n');
        output.write_all(text.as_bytes()).await?;
        output.flush().await?;
    }

    info!("Input closed");
    Ok(())
}
