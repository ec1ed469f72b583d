use crate::{
    db::{records::Records, tasks::Tasks},
    libs::{
        config::Config,
        formatter::{format_countdown, phase_label},
        messages::Message,
        orchestrator::SessionOrchestrator,
        record::Phase,
        runner::{Intent, TimerRunner},
        task::TaskCollaborator,
        timer::{CompletionEvent, Timer, TimerState},
    },
    msg_error, msg_info, msg_success, msg_warning,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io::{stdout, Write};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

const KEY_POLL_INTERVAL: Duration = Duration::from_millis(200);

#[derive(Debug, Args)]
pub struct StartArgs {
    /// Phase to begin with
    #[arg(short, long, value_enum, default_value = "work")]
    phase: Phase,

    /// Wait for [p] instead of starting the countdown right away
    #[arg(long)]
    paused: bool,
}

pub async fn cmd(args: StartArgs) -> Result<()> {
    let config = Config::read()?;
    let settings = config.settings()?;
    let tasks = Arc::new(Tasks::new()?);

    let mut orchestrator = SessionOrchestrator::new(Arc::new(Records::new()?), tasks.clone(), settings);
    orchestrator.set_active_task(config.active_task.clone());
    announce_active_task(tasks.as_ref(), config.active_task.as_deref());

    let mut timer = Timer::new(settings);
    timer.switch_phase(args.phase)?;
    if !args.paused {
        timer.toggle(Local::now().naive_local());
    }
    msg_info!(Message::TimerStarting(phase_label(args.phase).to_string()));
    msg_info!(Message::TimerControls);

    let mut handle = TimerRunner::new(timer).spawn();
    let raw_mode = RawMode::enable()?;
    let reader = spawn_key_reader(handle.intent_sender());
    render(&handle.snapshots.borrow());

    loop {
        tokio::select! {
            changed = handle.snapshots.changed() => {
                if changed.is_err() {
                    break;
                }
                render(&handle.snapshots.borrow_and_update());
            }
            event = handle.completions.recv() => match event {
                Some(event) => raw_mode.suspended(|| on_completion(&orchestrator, &event)),
                None => break,
            },
        }
    }

    drop(raw_mode);
    println!();
    let timer = handle.shutdown().await?;
    let _ = reader.join();
    msg_success!(Message::TimerStopped(timer.state().completed_work_count));
    Ok(())
}

fn announce_active_task(tasks: &dyn TaskCollaborator, active_task: Option<&str>) {
    match active_task.map(|id| tasks.find_task(id)) {
        Some(Ok(Some(task))) => msg_info!(Message::WorkingOn(task.title)),
        Some(Ok(None)) => msg_warning!(Message::ActiveTaskNotFound(active_task.unwrap_or_default().to_string())),
        Some(Err(e)) => msg_warning!(Message::TaskLookupFailed(e.to_string())),
        None => msg_info!(Message::NoActiveTask),
    }
}

fn on_completion(orchestrator: &SessionOrchestrator, event: &CompletionEvent) {
    print!("\x07");
    msg_info!(Message::PhaseCompleted(phase_label(event.phase).to_string()));

    let record = orchestrator.build_record(event);
    let result = match orchestrator.record(record.clone()) {
        Err(e) if e.is_retryable() => {
            msg_warning!(Message::SessionCommitRetrying(e.to_string()));
            orchestrator.record(record)
        }
        result => result,
    };

    match result {
        Ok(record) if record.phase == Phase::Work => msg_success!(Message::SessionRecorded(record.task_title)),
        Ok(_) => {}
        Err(e) => msg_error!(Message::SessionCommitFailed(e.to_string())),
    }

    msg_info!(Message::NextPhaseReady(phase_label(event.next_phase).to_string()));
}

fn render(state: &TimerState) {
    let status = if state.is_running { "▶" } else { "⏸" };
    print!(
        "\r🍅 {:<11} {} {}  completed: {}   ",
        phase_label(state.phase),
        format_countdown(state.remaining_seconds),
        status,
        state.completed_work_count
    );
    let _ = stdout().flush();
}

fn key_intent(key: KeyEvent) -> Option<Intent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Intent::Quit);
    }
    match key.code {
        KeyCode::Char('p') | KeyCode::Char(' ') => Some(Intent::Toggle),
        KeyCode::Char('r') => Some(Intent::Reset),
        KeyCode::Char('w') => Some(Intent::Switch(Phase::Work)),
        KeyCode::Char('s') => Some(Intent::Switch(Phase::ShortBreak)),
        KeyCode::Char('l') => Some(Intent::Switch(Phase::LongBreak)),
        KeyCode::Char('q') | KeyCode::Esc => Some(Intent::Quit),
        _ => None,
    }
}

/// Reads keys on a plain thread; crossterm's reads block.
fn spawn_key_reader(intents: UnboundedSender<Intent>) -> thread::JoinHandle<()> {
    thread::spawn(move || loop {
        if intents.is_closed() {
            break;
        }
        match event::poll(KEY_POLL_INTERVAL) {
            Ok(true) => {}
            Ok(false) => continue,
            Err(_) => break,
        }
        let Ok(Event::Key(key)) = event::read() else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if let Some(intent) = key_intent(key) {
            let quit = intent == Intent::Quit;
            if intents.send(intent).is_err() || quit {
                break;
            }
        }
    })
}

/// Keeps the terminal in raw mode while alive.
struct RawMode;

impl RawMode {
    fn enable() -> Result<Self> {
        enable_raw_mode()?;
        Ok(RawMode)
    }

    /// Runs `f` with normal line handling so regular messages print cleanly.
    fn suspended(&self, f: impl FnOnce()) {
        let _ = disable_raw_mode();
        println!();
        f();
        let _ = enable_raw_mode();
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_key_bindings() {
        assert_eq!(key_intent(key(KeyCode::Char('p'))), Some(Intent::Toggle));
        assert_eq!(key_intent(key(KeyCode::Char('s'))), Some(Intent::Switch(Phase::ShortBreak)));
        assert_eq!(key_intent(key(KeyCode::Char('q'))), Some(Intent::Quit));
        assert_eq!(key_intent(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)), Some(Intent::Quit));
        assert_eq!(key_intent(key(KeyCode::Char('x'))), None);
    }
}
