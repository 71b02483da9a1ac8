//! Resumo core: pure workflow state machine, toast values and view-model helpers.
pub mod demo;
mod effect;
mod msg;
mod state;
mod toast;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{
    AnalysisReport, AppState, OptimizationOutput, OutputFormat, RequestId, ScoreModalState,
    ScoreResults, Step, Suggestion, SuggestionId, UploadKind, WorkflowConfig, WorkflowState,
    FINAL_BONUS, MAX_SCORE, SCORE_INCREMENT,
};
pub use toast::{
    parse_duration_ms, Accent, Toast, ToastKind, ToastPresentation, DEFAULT_TOAST_DURATION_MS,
};
pub use update::{
    update, ANALYSIS_FAILED, MISSING_JOB_DESCRIPTION, NO_RECOMMENDATION, NO_RESUME_SELECTED,
    OPTIMIZATION_FAILED, RESUME_ID_NOT_FOUND, SCORING_FAILED,
};
pub use view_model::{AppViewModel, ScoreModalView, SuggestionView, WorkflowView};
