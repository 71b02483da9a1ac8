#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User picked a resume file (drop or file dialog).
    ResumeSelected { file_name: String },
    ResumeCleared,
    /// User edited the pasted job description.
    JobDescriptionChanged(String),
    /// User picked a job description file; `text` is its extracted content.
    JobDescriptionFileSelected { file_name: String, text: String },
    JobDescriptionFileCleared,
    /// Forward control on the current step.
    NextClicked,
    BackClicked,
    /// User clicked an earlier step in the progress stepper.
    StepSelected(crate::Step),
    AnalysisCompleted {
        request_id: crate::RequestId,
        result: Result<crate::AnalysisReport, String>,
    },
    OptimizationCompleted {
        request_id: crate::RequestId,
        result: Result<crate::OptimizationOutput, String>,
    },
    SuggestionApplied(crate::SuggestionId),
    FormatSelected(crate::OutputFormat),
    DownloadClicked,
    StartOverClicked,
    /// Score button on a stored resume.
    ScoreResumeClicked { resume_id: String },
    ScoreJobDescriptionChanged(String),
    ScoreSubmitted,
    ScoreModalCancelled,
    ScoreCompleted {
        result: Result<crate::ScoreResults, String>,
    },
    ScoreResultsClosed,
    OptimizeFromScoreClicked,
    /// Fallback for placeholder wiring.
    NoOp,
}
