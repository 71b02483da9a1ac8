use crate::{AppState, Effect, Msg, Step, Toast, UploadKind};

pub const MISSING_JOB_DESCRIPTION: &str =
    "Please enter a job description to score your resume against.";
pub const NO_RESUME_SELECTED: &str = "No resume selected. Please try again.";
pub const SCORING_FAILED: &str = "There was a problem scoring your resume. Please try again.";
pub const RESUME_ID_NOT_FOUND: &str = "Resume ID not found. Please try again.";
pub const ANALYSIS_FAILED: &str = "There was a problem analyzing your resume. Please try again.";
pub const OPTIMIZATION_FAILED: &str =
    "There was a problem optimizing your resume. Please try again.";
pub const NO_RECOMMENDATION: &str = "No specific recommendations available.";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::ResumeSelected { file_name } => {
            if state.workflow.step != Step::Upload {
                return (state, Vec::new());
            }
            if !UploadKind::Resume.accepts(&file_name) {
                return (state, vec![unsupported_file(&file_name, UploadKind::Resume)]);
            }
            state.workflow.resume = Some(file_name);
            state.mark_dirty();
            Vec::new()
        }
        Msg::ResumeCleared => {
            if state.workflow.step == Step::Upload && state.workflow.resume.take().is_some() {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::JobDescriptionChanged(text) => {
            if state.workflow.step == Step::Upload && state.workflow.job_description != text {
                state.workflow.job_description = text;
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::JobDescriptionFileSelected { file_name, text } => {
            if state.workflow.step != Step::Upload {
                return (state, Vec::new());
            }
            if !UploadKind::JobDescription.accepts(&file_name) {
                return (
                    state,
                    vec![unsupported_file(&file_name, UploadKind::JobDescription)],
                );
            }
            state.workflow.job_description_file = Some(file_name);
            state.workflow.job_description = text;
            state.mark_dirty();
            Vec::new()
        }
        Msg::JobDescriptionFileCleared => {
            if state.workflow.step == Step::Upload
                && state.workflow.job_description_file.take().is_some()
            {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::NextClicked => match state.workflow.step {
            Step::Upload => begin_analysis(&mut state),
            Step::Analysis => {
                if state.workflow.analysis_complete && !state.workflow.is_analyzing {
                    begin_optimization(&mut state)
                } else {
                    Vec::new()
                }
            }
            Step::Optimize => {
                let config = state.config;
                state.workflow.refresh_final_score(&config);
                state.workflow.step = Step::Download;
                state.mark_dirty();
                Vec::new()
            }
            Step::Download => Vec::new(),
        },
        Msg::BackClicked => match state.workflow.step.previous() {
            Some(target) => go_back_to(&mut state, target),
            None => Vec::new(),
        },
        Msg::StepSelected(target) => {
            if target < state.workflow.step {
                go_back_to(&mut state, target)
            } else {
                Vec::new()
            }
        }
        Msg::AnalysisCompleted { request_id, result } => {
            if state.workflow.analysis_request != Some(request_id) {
                return (state, Vec::new());
            }
            state.workflow.analysis_request = None;
            state.workflow.is_analyzing = false;
            state.mark_dirty();
            match result {
                Ok(report) => {
                    state.workflow.apply_analysis(report);
                    Vec::new()
                }
                Err(_) => vec![Effect::ShowToast(Toast::error(ANALYSIS_FAILED))],
            }
        }
        Msg::OptimizationCompleted { request_id, result } => {
            if state.workflow.optimization_request != Some(request_id) {
                return (state, Vec::new());
            }
            state.workflow.optimization_request = None;
            state.workflow.is_optimizing = false;
            state.mark_dirty();
            match result {
                Ok(output) => {
                    state.workflow.optimized_content = output.content;
                    if state.workflow.suggestions.is_empty() && state.config.refill_empty_suggestions
                    {
                        state.workflow.suggestions = output.default_suggestions;
                    }
                    Vec::new()
                }
                Err(_) => vec![Effect::ShowToast(Toast::error(OPTIMIZATION_FAILED))],
            }
        }
        Msg::SuggestionApplied(id) => {
            let config = state.config;
            if state.workflow.apply_suggestion(id, &config) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::FormatSelected(format) => {
            if state.workflow.format != format {
                state.workflow.format = format;
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::DownloadClicked => {
            if state.workflow.step == Step::Download {
                vec![Effect::Download {
                    format: state.workflow.format,
                    content: state.workflow.optimized_content.clone(),
                }]
            } else {
                Vec::new()
            }
        }
        Msg::StartOverClicked => {
            let effects = state
                .workflow
                .in_flight()
                .map(|request_id| Effect::CancelRequest { request_id })
                .collect();
            state.workflow.reset();
            state.mark_dirty();
            effects
        }
        Msg::ScoreResumeClicked { resume_id } => {
            // A blank id counts as no selection.
            state.scoring.resume_id = Some(resume_id).filter(|id| !id.trim().is_empty());
            state.scoring.job_description.clear();
            state.scoring.modal_open = true;
            state.mark_dirty();
            Vec::new()
        }
        Msg::ScoreJobDescriptionChanged(text) => {
            state.scoring.job_description = text;
            state.mark_dirty();
            Vec::new()
        }
        Msg::ScoreModalCancelled => {
            state.scoring.modal_open = false;
            state.scoring.resume_id = None;
            state.mark_dirty();
            Vec::new()
        }
        Msg::ScoreSubmitted => submit_score(&mut state),
        Msg::ScoreCompleted { result } => {
            // Cleared on every outcome so the modal never stays busy.
            state.scoring.is_scoring = false;
            state.mark_dirty();
            match result {
                Ok(mut results) => {
                    if results.recommendation.trim().is_empty() {
                        results.recommendation = NO_RECOMMENDATION.to_string();
                    }
                    state.scoring.results = results;
                    state.scoring.modal_open = false;
                    state.scoring.results_open = true;
                    Vec::new()
                }
                Err(_) => vec![Effect::ShowToast(Toast::error(SCORING_FAILED))],
            }
        }
        Msg::ScoreResultsClosed => {
            state.scoring.results_open = false;
            state.scoring.resume_id = None;
            state.mark_dirty();
            Vec::new()
        }
        Msg::OptimizeFromScoreClicked => match state.scoring.resume_id.clone() {
            None => vec![Effect::ShowToast(Toast::error(RESUME_ID_NOT_FOUND))],
            Some(resume_id) => {
                state.scoring.results_open = false;
                state.mark_dirty();
                vec![Effect::Navigate {
                    path: format!("/resume/{resume_id}/optimize"),
                }]
            }
        },
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn begin_analysis(state: &mut AppState) -> Vec<Effect> {
    if !state.workflow.can_advance_from_upload() {
        return Vec::new();
    }
    let Some(resume) = state.workflow.resume.clone() else {
        return Vec::new();
    };

    let mut effects = Vec::with_capacity(2);
    if let Some(stale) = state.workflow.analysis_request.take() {
        effects.push(Effect::CancelRequest { request_id: stale });
    }
    let request_id = state.allocate_request_id();
    state.workflow.analysis_request = Some(request_id);
    state.workflow.step = Step::Analysis;
    state.workflow.is_analyzing = true;
    state.workflow.analysis_complete = false;
    state.mark_dirty();

    effects.push(Effect::StartAnalysis {
        request_id,
        resume,
        job_description: state.workflow.job_description.clone(),
    });
    effects
}

fn begin_optimization(state: &mut AppState) -> Vec<Effect> {
    let resume = state.workflow.resume.clone().unwrap_or_default();

    let mut effects = Vec::with_capacity(2);
    if let Some(stale) = state.workflow.optimization_request.take() {
        effects.push(Effect::CancelRequest { request_id: stale });
    }
    let request_id = state.allocate_request_id();
    state.workflow.optimization_request = Some(request_id);
    state.workflow.step = Step::Optimize;
    state.workflow.is_optimizing = true;
    state.mark_dirty();

    effects.push(Effect::StartOptimization {
        request_id,
        resume,
        job_description: state.workflow.job_description.clone(),
        missing_skills: state.workflow.missing_skills.clone(),
    });
    effects
}

/// Moves to an earlier step, cancelling requests that belong to the steps
/// being left.
fn go_back_to(state: &mut AppState, target: Step) -> Vec<Effect> {
    let mut effects = Vec::new();
    if target < Step::Analysis {
        if let Some(request_id) = state.workflow.analysis_request.take() {
            state.workflow.is_analyzing = false;
            effects.push(Effect::CancelRequest { request_id });
        }
    }
    if target < Step::Optimize {
        if let Some(request_id) = state.workflow.optimization_request.take() {
            state.workflow.is_optimizing = false;
            effects.push(Effect::CancelRequest { request_id });
        }
    }
    state.workflow.step = target;
    state.mark_dirty();
    effects
}

fn submit_score(state: &mut AppState) -> Vec<Effect> {
    if state.scoring.is_scoring {
        return Vec::new();
    }
    let job_description = state.scoring.job_description.trim().to_string();
    if job_description.is_empty() {
        return vec![Effect::ShowToast(Toast::warning(MISSING_JOB_DESCRIPTION))];
    }
    let Some(resume_id) = state.scoring.resume_id.clone() else {
        return vec![Effect::ShowToast(Toast::error(NO_RESUME_SELECTED))];
    };

    state.scoring.is_scoring = true;
    state.mark_dirty();
    vec![Effect::RequestScore {
        resume_id,
        job_description,
    }]
}

fn unsupported_file(file_name: &str, kind: UploadKind) -> Effect {
    let accepted = kind
        .accepted_extensions()
        .iter()
        .map(|ext| format!(".{ext}"))
        .collect::<Vec<_>>()
        .join(", ");
    Effect::ShowToast(Toast::warning(format!(
        "Unsupported file '{file_name}'. Accepted types: {accepted}."
    )))
}
