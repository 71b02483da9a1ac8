use std::sync::{mpsc, Arc};
use std::thread;

use app_logging::{app_info, app_warn};
use resumo_core::{Effect, Msg};
use resumo_engine::{AnalysisRequest, EngineEvent, EngineHandle, OptimizationRequest};

use super::commands::Input;

pub struct EffectRunner {
    engine: Arc<EngineHandle>,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle, input_tx: mpsc::Sender<Input>) -> Self {
        let runner = Self {
            engine: Arc::new(engine),
        };
        runner.spawn_event_loop(input_tx);
        runner
    }

    pub fn engine(&self) -> &EngineHandle {
        &self.engine
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ShowToast(toast) => {
                    self.engine.toasts().notify(toast);
                }
                Effect::StartAnalysis {
                    request_id,
                    resume,
                    job_description,
                } => self.engine.analyze(
                    request_id,
                    AnalysisRequest {
                        resume,
                        job_description,
                    },
                ),
                Effect::StartOptimization {
                    request_id,
                    resume,
                    job_description,
                    missing_skills,
                } => self.engine.optimize(
                    request_id,
                    OptimizationRequest {
                        resume,
                        job_description,
                        missing_skills,
                    },
                ),
                Effect::CancelRequest { request_id } => self.engine.cancel(request_id),
                Effect::RequestScore {
                    resume_id,
                    job_description,
                } => self.engine.score(resume_id, job_description),
                Effect::Navigate { path } => {
                    app_info!("Navigating to {}", path);
                    self.engine.navigate(path);
                }
                Effect::Download { format, content } => {
                    app_info!(
                        "Download requested format={} bytes={}",
                        format.extension(),
                        content.len()
                    );
                }
            }
        }
    }

    fn spawn_event_loop(&self, input_tx: mpsc::Sender<Input>) {
        let engine = self.engine.clone();
        thread::spawn(move || {
            while let Some(event) = engine.recv() {
                let Some(msg) = map_event(event) else {
                    continue;
                };
                if input_tx.send(Input::Msg(msg)).is_err() {
                    break;
                }
            }
        });
    }
}

fn map_event(event: EngineEvent) -> Option<Msg> {
    match event {
        EngineEvent::AnalysisCompleted { request_id, result } => Some(Msg::AnalysisCompleted {
            request_id,
            result: result.map_err(|err| err.to_string()),
        }),
        EngineEvent::OptimizationCompleted { request_id, result } => {
            Some(Msg::OptimizationCompleted {
                request_id,
                result: result.map_err(|err| err.to_string()),
            })
        }
        EngineEvent::ScoreCompleted { result } => Some(Msg::ScoreCompleted {
            result: result.map_err(|err| err.to_string()),
        }),
        EngineEvent::Navigated { path, result } => {
            if let Err(err) = result {
                app_warn!("Page {} could not be loaded: {}", path, err);
            }
            None
        }
    }
}
