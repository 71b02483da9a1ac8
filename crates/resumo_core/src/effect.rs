use crate::{OutputFormat, RequestId, Toast};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ShowToast(Toast),
    StartAnalysis {
        request_id: RequestId,
        resume: String,
        job_description: String,
    },
    StartOptimization {
        request_id: RequestId,
        resume: String,
        job_description: String,
        missing_skills: Vec<String>,
    },
    /// A started request was superseded; its completion will be ignored.
    CancelRequest { request_id: RequestId },
    RequestScore {
        resume_id: String,
        job_description: String,
    },
    Navigate { path: String },
    Download {
        format: OutputFormat,
        content: String,
    },
}
