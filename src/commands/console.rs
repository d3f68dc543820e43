//! Terminal front end: one line in, Flowey's reaction out.
//!
//! `/state` prints the character state as JSON, `/quit` leaves.

use super::character::{get_character_state, render_debug, send_message, CommandError};
use crate::ai::heartbeat::heartbeat_loop;
use crate::ai::idle_chatter::IdleChatter;
use crate::ai::session::FloweySession;
use crate::config::FloweyConfig;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::{mpsc, Mutex};

#[derive(Debug, PartialEq)]
enum Input<'a> {
    Quit,
    State,
    Message(&'a str),
}

fn parse_input(line: &str) -> Input<'_> {
    match line.trim() {
        "/quit" | "/exit" => Input::Quit,
        "/state" => Input::State,
        _ => Input::Message(line),
    }
}

pub async fn run_console(config: FloweyConfig) -> anyhow::Result<()> {
    let session = Arc::new(Mutex::new(config.session()));
    let (tx, mut idle_rx) = mpsc::channel(8);
    let heartbeat = tokio::spawn(heartbeat_loop(
        session.clone(),
        IdleChatter::new(config.idle_chatter()),
        tx,
        config.heartbeat_interval(),
    ));

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    if let Some(prompt) = session.lock().await.prompt_line() {
        write_line(&mut stdout, prompt).await?;
    }

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match parse_input(&line) {
                    Input::Quit => break,
                    Input::State => {
                        let state = get_character_state(&*session.lock().await);
                        write_line(&mut stdout, &serde_json::to_string_pretty(&state)?).await?;
                    }
                    Input::Message(text) => {
                        let output = respond(&session, text, config.show_debug).await;
                        for out in output {
                            write_line(&mut stdout, &out).await?;
                        }
                    }
                }
            }
            Some(idle) = idle_rx.recv() => {
                write_line(&mut stdout, idle.text()).await?;
            }
        }
    }

    drop(idle_rx);
    heartbeat.await?;
    Ok(())
}

async fn respond<S>(session: &Mutex<FloweySession<S>>, text: &str, show_debug: bool) -> Vec<String>
where
    S: crate::ai::sentiment::LexiconScorer,
{
    let mut session = session.lock().await;
    match send_message(&mut session, text) {
        Ok(resp) => {
            let mut out = vec![format!("[{}] {}", resp.expression, resp.text)];
            if show_debug {
                if let Some(verdict) = session.last_verdict() {
                    out.extend(render_debug(verdict).into_iter().map(|l| format!("    {}", l)));
                }
            }
            out
        }
        // Blank lines are simply ignored, like an empty submit.
        Err(CommandError::EmptyMessage) => Vec::new(),
        Err(CommandError::Busy(msg)) => vec![format!("* (YOU CANNOT - {})", msg)],
    }
}

async fn write_line(stdout: &mut tokio::io::Stdout, line: &str) -> std::io::Result<()> {
    stdout.write_all(line.as_bytes()).await?;
    stdout.write_all(b"\n").await?;
    stdout.flush().await
}
