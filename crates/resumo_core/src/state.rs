use crate::view_model::{AppViewModel, ScoreModalView, SuggestionView, WorkflowView};

pub type SuggestionId = u32;
pub type RequestId = u64;

pub const SCORE_INCREMENT: u8 = 5;
pub const FINAL_BONUS: u8 = 15;
pub const MAX_SCORE: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Step {
    #[default]
    Upload = 1,
    Analysis = 2,
    Optimize = 3,
    Download = 4,
}

impl Step {
    pub const ALL: [Step; 4] = [Step::Upload, Step::Analysis, Step::Optimize, Step::Download];

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Step::Upload => "Upload",
            Step::Analysis => "Analysis",
            Step::Optimize => "Optimize",
            Step::Download => "Download",
        }
    }

    pub fn previous(self) -> Option<Step> {
        match self {
            Step::Upload => None,
            Step::Analysis => Some(Step::Upload),
            Step::Optimize => Some(Step::Analysis),
            Step::Download => Some(Step::Optimize),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    #[default]
    Pdf,
    Docx,
    Txt,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Pdf, OutputFormat::Docx, OutputFormat::Txt];

    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Pdf => "pdf",
            OutputFormat::Docx => "docx",
            OutputFormat::Txt => "txt",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|format| format.extension().eq_ignore_ascii_case(raw))
    }
}

/// Which file input an upload came through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Resume,
    JobDescription,
}

impl UploadKind {
    pub fn accepted_extensions(self) -> &'static [&'static str] {
        match self {
            UploadKind::Resume => &["pdf", "docx"],
            UploadKind::JobDescription => &["pdf", "docx", "txt"],
        }
    }

    pub fn accepts(self, file_name: &str) -> bool {
        let Some((stem, ext)) = file_name.trim().rsplit_once('.') else {
            return false;
        };
        !stem.is_empty()
            && self
                .accepted_extensions()
                .iter()
                .any(|accepted| accepted.eq_ignore_ascii_case(ext))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub id: SuggestionId,
    pub title: String,
    pub description: String,
}

impl Suggestion {
    pub fn new(id: SuggestionId, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Result of the external analysis collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisReport {
    pub match_score: u8,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub suggestions: Vec<Suggestion>,
}

/// Result of the external optimization collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizationOutput {
    pub content: String,
    /// Used to refill an empty suggestion list, see `WorkflowConfig`.
    pub default_suggestions: Vec<Suggestion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScoreResults {
    pub ats_score: u8,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub recommendation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkflowConfig {
    pub score_increment: u8,
    pub final_bonus: u8,
    /// Refill an empty suggestion list when optimization completes.
    pub refill_empty_suggestions: bool,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            score_increment: SCORE_INCREMENT,
            final_bonus: FINAL_BONUS,
            refill_empty_suggestions: true,
        }
    }
}

/// View state of the four-step guided workflow.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WorkflowState {
    pub(crate) step: Step,
    pub(crate) resume: Option<String>,
    pub(crate) job_description: String,
    pub(crate) job_description_file: Option<String>,
    pub(crate) is_analyzing: bool,
    pub(crate) analysis_complete: bool,
    pub(crate) is_optimizing: bool,
    pub(crate) match_score: u8,
    pub(crate) final_match_score: u8,
    pub(crate) matched_skills: Vec<String>,
    pub(crate) missing_skills: Vec<String>,
    pub(crate) suggestions: Vec<Suggestion>,
    pub(crate) format: OutputFormat,
    pub(crate) optimized_content: String,
    pub(crate) analysis_request: Option<RequestId>,
    pub(crate) optimization_request: Option<RequestId>,
}

impl WorkflowState {
    pub fn step(&self) -> Step {
        self.step
    }

    pub fn can_advance_from_upload(&self) -> bool {
        self.resume.is_some()
            && (!self.job_description.trim().is_empty() || self.job_description_file.is_some())
    }

    /// Restores every field to its initial value and returns to `Upload`.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Requests still waiting for a completion, analysis first.
    pub(crate) fn in_flight(&self) -> impl Iterator<Item = RequestId> {
        self.analysis_request
            .into_iter()
            .chain(self.optimization_request)
    }

    pub(crate) fn apply_analysis(&mut self, report: AnalysisReport) {
        self.match_score = report.match_score.min(MAX_SCORE);
        self.matched_skills = report.matched_skills;
        self.missing_skills = report.missing_skills;
        self.suggestions = report.suggestions;
        self.analysis_complete = true;
    }

    /// Returns false when no pending suggestion has the id.
    pub(crate) fn apply_suggestion(&mut self, id: SuggestionId, config: &WorkflowConfig) -> bool {
        let Some(index) = self.suggestions.iter().position(|s| s.id == id) else {
            return false;
        };
        self.suggestions.remove(index);
        self.match_score = self
            .match_score
            .saturating_add(config.score_increment)
            .min(MAX_SCORE);
        self.refresh_final_score(config);
        true
    }

    pub(crate) fn refresh_final_score(&mut self, config: &WorkflowConfig) {
        self.final_match_score = self
            .match_score
            .saturating_add(config.final_bonus)
            .min(MAX_SCORE);
    }

    fn view(&self) -> WorkflowView {
        WorkflowView {
            step: self.step,
            can_advance: match self.step {
                Step::Upload => self.can_advance_from_upload(),
                Step::Analysis => self.analysis_complete && !self.is_analyzing,
                Step::Optimize => true,
                Step::Download => false,
            },
            can_go_back: self.step.previous().is_some(),
            resume: self.resume.clone(),
            job_description: self.job_description.clone(),
            job_description_file: self.job_description_file.clone(),
            is_analyzing: self.is_analyzing,
            analysis_complete: self.analysis_complete,
            is_optimizing: self.is_optimizing,
            match_score: self.match_score,
            final_match_score: self.final_match_score,
            matched_skills: self.matched_skills.clone(),
            missing_skills: self.missing_skills.clone(),
            suggestions: self
                .suggestions
                .iter()
                .map(|s| SuggestionView {
                    id: s.id,
                    title: s.title.clone(),
                    description: s.description.clone(),
                })
                .collect(),
            format: self.format,
            optimized_content: self.optimized_content.clone(),
        }
    }
}

/// State behind the score-resume and score-results modals.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScoreModalState {
    pub(crate) modal_open: bool,
    pub(crate) results_open: bool,
    pub(crate) is_scoring: bool,
    pub(crate) resume_id: Option<String>,
    pub(crate) job_description: String,
    pub(crate) results: ScoreResults,
}

impl ScoreModalState {
    fn view(&self) -> ScoreModalView {
        ScoreModalView {
            modal_open: self.modal_open,
            results_open: self.results_open,
            is_scoring: self.is_scoring,
            resume_id: self.resume_id.clone(),
            job_description: self.job_description.clone(),
            results: self.results.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    pub(crate) workflow: WorkflowState,
    pub(crate) scoring: ScoreModalState,
    pub(crate) config: WorkflowConfig,
    next_request_id: RequestId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: WorkflowConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn workflow(&self) -> &WorkflowState {
        &self.workflow
    }

    pub fn config(&self) -> &WorkflowConfig {
        &self.config
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            workflow: self.workflow.view(),
            score: self.scoring.view(),
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn allocate_request_id(&mut self) -> RequestId {
        self.next_request_id += 1;
        self.next_request_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_kinds_check_extensions() {
        assert!(UploadKind::Resume.accepts("cv.pdf"));
        assert!(UploadKind::Resume.accepts("CV.DOCX"));
        assert!(!UploadKind::Resume.accepts("cv.txt"));
        assert!(!UploadKind::Resume.accepts("pdf"));
        assert!(!UploadKind::Resume.accepts(".pdf"));
        assert!(UploadKind::JobDescription.accepts("posting.txt"));
        assert!(!UploadKind::JobDescription.accepts("posting.md"));
    }

    #[test]
    fn output_format_parses_extension() {
        assert_eq!(OutputFormat::parse("DOCX"), Some(OutputFormat::Docx));
        assert_eq!(OutputFormat::parse(" txt "), Some(OutputFormat::Txt));
        assert_eq!(OutputFormat::parse("odt"), None);
    }

    #[test]
    fn step_previous_walks_back_to_upload() {
        assert_eq!(Step::Download.previous(), Some(Step::Optimize));
        assert_eq!(Step::Upload.previous(), None);
        assert_eq!(Step::Optimize.number(), 3);
    }
}
