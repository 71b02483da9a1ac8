use std::collections::HashMap;
use std::sync::{mpsc, Arc, Mutex, PoisonError};
use std::thread;
use std::time::Duration;

use app_logging::{app_error, app_info, app_warn};
use resumo_core::RequestId;
use tokio::runtime::Runtime;
use tokio_util::sync::CancellationToken;

use crate::analyzer::{DemoAnalyzer, ResumeAnalyzer};
use crate::http::{ClientSettings, HttpClient, ToastInterceptor};
use crate::score::{ReqwestScoreClient, ScoreClient};
use crate::toast_center::{ToastCenter, ToastSink};
use crate::{AnalysisRequest, ApiError, EngineError, EngineEvent, OptimizationRequest};

enum EngineCommand {
    Run(Job),
    Cancel { request_id: RequestId },
}

/// Work spawned onto the runtime.
enum Job {
    Analyze {
        request_id: RequestId,
        request: AnalysisRequest,
    },
    Optimize {
        request_id: RequestId,
        request: OptimizationRequest,
    },
    Score {
        resume_id: String,
        job_description: String,
    },
    Navigate {
        path: String,
    },
}

/// Collaborators the engine dispatches work to.
pub struct EngineServices {
    pub analyzer: Arc<dyn ResumeAnalyzer>,
    pub scorer: Arc<dyn ScoreClient>,
    pub http: HttpClient,
}

type PendingRequests = Arc<Mutex<HashMap<RequestId, CancellationToken>>>;

pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    // Behind a mutex so the handle can be shared with an event-forwarding thread.
    event_rx: Mutex<mpsc::Receiver<EngineEvent>>,
    toasts: ToastCenter,
}

impl EngineHandle {
    /// Starts the engine with the demo analyzer and the HTTP score client.
    pub fn new(
        settings: ClientSettings,
        toast_sink: Option<Arc<dyn ToastSink>>,
    ) -> Result<Self, EngineError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;
        let handle = runtime.handle().clone();
        let toasts = match toast_sink {
            Some(sink) => ToastCenter::with_sink(handle, sink),
            None => ToastCenter::new(handle),
        };
        let http = HttpClient::new(&settings)?
            .with_interceptor(Arc::new(ToastInterceptor::new(toasts.clone())));
        let services = EngineServices {
            analyzer: Arc::new(DemoAnalyzer::new(
                settings.demo_analysis_delay,
                settings.demo_optimize_delay,
            )),
            scorer: Arc::new(ReqwestScoreClient::new(http.clone())),
            http,
        };
        Ok(Self::with_services(runtime, toasts, services))
    }

    /// The runtime moves onto the engine's worker thread and shuts down when
    /// the handle is dropped.
    pub fn with_services(runtime: Runtime, toasts: ToastCenter, services: EngineServices) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let services = Arc::new(services);
        let worker_toasts = toasts.clone();

        thread::spawn(move || {
            let pending: PendingRequests = Arc::default();
            while let Ok(command) = cmd_rx.recv() {
                let job = match command {
                    EngineCommand::Cancel { request_id } => {
                        cancel_pending(&pending, request_id);
                        continue;
                    }
                    EngineCommand::Run(job) => job,
                };
                let token = match &job {
                    Job::Analyze { request_id, .. } | Job::Optimize { request_id, .. } => {
                        let token = CancellationToken::new();
                        lock_pending(&pending).insert(*request_id, token.clone());
                        Some(token)
                    }
                    _ => None,
                };
                let services = services.clone();
                let toasts = worker_toasts.clone();
                let pending = pending.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    run_job(&services, &toasts, job, token, &pending, event_tx).await;
                });
            }
        });

        Self {
            cmd_tx,
            event_rx: Mutex::new(event_rx),
            toasts,
        }
    }

    pub fn toasts(&self) -> &ToastCenter {
        &self.toasts
    }

    pub fn analyze(&self, request_id: RequestId, request: AnalysisRequest) {
        self.send(EngineCommand::Run(Job::Analyze {
            request_id,
            request,
        }));
    }

    pub fn optimize(&self, request_id: RequestId, request: OptimizationRequest) {
        self.send(EngineCommand::Run(Job::Optimize {
            request_id,
            request,
        }));
    }

    pub fn score(&self, resume_id: impl Into<String>, job_description: impl Into<String>) {
        self.send(EngineCommand::Run(Job::Score {
            resume_id: resume_id.into(),
            job_description: job_description.into(),
        }));
    }

    pub fn navigate(&self, path: impl Into<String>) {
        self.send(EngineCommand::Run(Job::Navigate { path: path.into() }));
    }

    /// Cancels an analysis or optimization; no event is sent for it.
    pub fn cancel(&self, request_id: RequestId) {
        self.send(EngineCommand::Cancel { request_id });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.events().try_recv().ok()
    }

    /// Blocks until the next event. `None` once the worker has stopped.
    /// Other readers wait while a `recv` is blocked, so use one consumer.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.events().recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.events().recv_timeout(timeout).ok()
    }

    fn events(&self) -> std::sync::MutexGuard<'_, mpsc::Receiver<EngineEvent>> {
        self.event_rx.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn send(&self, command: EngineCommand) {
        if self.cmd_tx.send(command).is_err() {
            app_warn!("Engine worker stopped; command dropped");
        }
    }
}

async fn run_job(
    services: &EngineServices,
    toasts: &ToastCenter,
    job: Job,
    token: Option<CancellationToken>,
    pending: &PendingRequests,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let token = token.unwrap_or_default();
    match job {
        Job::Analyze {
            request_id,
            request,
        } => {
            app_info!("Analysis {} started", request_id);
            tokio::select! {
                result = services.analyzer.analyze(&request) => {
                    lock_pending(pending).remove(&request_id);
                    if let Err(err) = &result {
                        app_error!("Error analyzing resume (request {}): {}", request_id, err);
                    }
                    let _ = event_tx.send(EngineEvent::AnalysisCompleted { request_id, result });
                }
                _ = token.cancelled() => {
                    app_info!("Analysis {} cancelled", request_id);
                }
            }
        }
        Job::Optimize {
            request_id,
            request,
        } => {
            app_info!("Optimization {} started", request_id);
            tokio::select! {
                result = services.analyzer.optimize(&request) => {
                    lock_pending(pending).remove(&request_id);
                    if let Err(err) = &result {
                        app_error!("Error optimizing resume (request {}): {}", request_id, err);
                    }
                    let _ = event_tx.send(EngineEvent::OptimizationCompleted { request_id, result });
                }
                _ = token.cancelled() => {
                    app_info!("Optimization {} cancelled", request_id);
                }
            }
        }
        Job::Score {
            resume_id,
            job_description,
        } => {
            app_info!("Scoring resume {}", resume_id);
            let result = services.scorer.score(&resume_id, &job_description).await;
            if let Err(err) = &result {
                app_error!("Error scoring resume: {}", err);
            }
            let _ = event_tx.send(EngineEvent::ScoreCompleted { result });
        }
        Job::Navigate { path } => {
            let result: Result<(), ApiError> = services
                .http
                .load_page(&path, toasts)
                .await
                .map(|_| ());
            if let Err(err) = &result {
                app_warn!("Navigation to {} failed: {}", path, err);
            }
            let _ = event_tx.send(EngineEvent::Navigated { path, result });
        }
    }
}

fn cancel_pending(pending: &PendingRequests, request_id: RequestId) {
    if let Some(token) = lock_pending(pending).remove(&request_id) {
        token.cancel();
    }
}

fn lock_pending(
    pending: &PendingRequests,
) -> std::sync::MutexGuard<'_, HashMap<RequestId, CancellationToken>> {
    pending.lock().unwrap_or_else(PoisonError::into_inner)
}
