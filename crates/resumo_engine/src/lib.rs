//! Resumo engine: toast overlay, toast signaling, HTTP plumbing and effect execution.
mod analyzer;
mod engine;
mod http;
mod score;
mod signal;
mod toast_center;
mod types;

pub use analyzer::{DemoAnalyzer, ResumeAnalyzer};
pub use engine::{EngineHandle, EngineServices};
pub use http::{ClientSettings, HttpClient, ResponseInterceptor, ToastInterceptor};
pub use score::{ReqwestScoreClient, ScoreClient, ScoreResponse};
pub use signal::{
    apply_toast_headers, inject_toast_script, toast_from_headers, toast_from_meta,
    toast_meta_tags, SignalError, TOAST_DURATION_HEADER, TOAST_MESSAGE_HEADER, TOAST_TYPE_HEADER,
};
pub use toast_center::{
    ActiveToast, ChannelToastSink, DismissReason, ToastCenter, ToastEvent, ToastId, ToastSink,
};
pub use types::{
    AnalysisRequest, ApiError, EngineError, EngineEvent, OptimizationRequest,
};
