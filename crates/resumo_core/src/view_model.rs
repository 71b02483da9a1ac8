use crate::{OutputFormat, ScoreResults, Step, SuggestionId};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub workflow: WorkflowView,
    pub score: ScoreModalView,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WorkflowView {
    pub step: Step,
    /// Whether the forward control should be enabled on the current step.
    pub can_advance: bool,
    pub can_go_back: bool,
    pub resume: Option<String>,
    pub job_description: String,
    pub job_description_file: Option<String>,
    pub is_analyzing: bool,
    pub analysis_complete: bool,
    pub is_optimizing: bool,
    pub match_score: u8,
    pub final_match_score: u8,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub suggestions: Vec<SuggestionView>,
    pub format: OutputFormat,
    pub optimized_content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionView {
    pub id: SuggestionId,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScoreModalView {
    pub modal_open: bool,
    pub results_open: bool,
    pub is_scoring: bool,
    pub resume_id: Option<String>,
    pub job_description: String,
    pub results: ScoreResults,
}
