use std::io::BufRead;
use std::path::Path;
use std::sync::{mpsc, Arc};
use std::thread;

use anyhow::{Context, Result};
use app_logging::{app_info, app_warn};
use resumo_core::{update, AppState, Msg, Toast};
use resumo_engine::{toast_from_meta, ChannelToastSink, EngineHandle, ToastEvent};

use super::commands::{self, Input};
use super::config::AppConfig;
use super::effects::EffectRunner;
use super::ui;

pub fn run_app(config: AppConfig) -> Result<()> {
    let (input_tx, input_rx) = mpsc::channel::<Input>();
    let (toast_tx, toast_rx) = mpsc::channel::<ToastEvent>();

    let engine = EngineHandle::new(
        config.client.clone(),
        Some(Arc::new(ChannelToastSink::new(toast_tx))),
    )
    .context("failed to start engine")?;
    let runner = EffectRunner::new(engine, input_tx.clone());

    spawn_toast_forwarder(toast_rx, input_tx.clone());
    spawn_stdin_reader(input_tx);

    app_info!("Resumo started against {}", config.client.base_url);
    if let Some(page) = &config.landing_page {
        match landing_page_toast(page) {
            Ok(Some(toast)) => {
                runner.engine().toasts().notify(toast);
            }
            Ok(None) => {}
            Err(err) => app_warn!("{:#}", err),
        }
    }

    let mut state = AppState::with_config(config.workflow);
    println!("{}", ui::render::render(&state.view()));

    for input in input_rx {
        match input {
            Input::Msg(msg) => dispatch(&mut state, msg, &runner),
            Input::Toast(event) => println!("{}", ui::render::render_toast_event(&event)),
            Input::DismissToast(id) => {
                if !runner.engine().toasts().dismiss(id) {
                    println!("no toast #{id}");
                }
            }
            Input::Demo => {
                for msg in commands::demo_script() {
                    dispatch(&mut state, msg, &runner);
                }
            }
            Input::Help => println!("{}", commands::HELP),
            Input::Quit => break,
        }
    }

    app_info!("Resumo stopped");
    Ok(())
}

fn dispatch(state: &mut AppState, msg: Msg, runner: &EffectRunner) {
    let (next, effects) = update(std::mem::take(state), msg);
    *state = next;
    runner.run(effects);
    if state.consume_dirty() {
        println!("{}", ui::render::render(&state.view()));
    }
}

/// Reads a server-rendered page and returns the toast its meta tags carry.
fn landing_page_toast(path: &Path) -> Result<Option<Toast>> {
    let html = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read landing page {}", path.display()))?;
    Ok(toast_from_meta(&html))
}

fn spawn_toast_forwarder(toast_rx: mpsc::Receiver<ToastEvent>, input_tx: mpsc::Sender<Input>) {
    thread::spawn(move || {
        for event in toast_rx {
            if input_tx.send(Input::Toast(event)).is_err() {
                break;
            }
        }
    });
}

fn spawn_stdin_reader(input_tx: mpsc::Sender<Input>) {
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    app_warn!("stdin closed: {}", err);
                    break;
                }
            };
            match commands::parse_line(&line) {
                Ok(Some(input)) => {
                    if input_tx.send(input).is_err() {
                        return;
                    }
                }
                Ok(None) => {}
                Err(message) => eprintln!("{message}"),
            }
        }
        let _ = input_tx.send(Input::Quit);
    });
}
