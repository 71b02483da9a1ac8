use std::time::Duration;

use resumo_core::{demo, AnalysisReport, OptimizationOutput};

use crate::{AnalysisRequest, ApiError, OptimizationRequest};

/// The analysis and optimization backend. Scoring and text generation live
/// behind this trait.
#[async_trait::async_trait]
pub trait ResumeAnalyzer: Send + Sync {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisReport, ApiError>;

    async fn optimize(
        &self,
        request: &OptimizationRequest,
    ) -> Result<OptimizationOutput, ApiError>;
}

/// Answers with the fixed demo data after a simulated delay.
#[derive(Debug, Clone)]
pub struct DemoAnalyzer {
    analysis_delay: Duration,
    optimize_delay: Duration,
}

impl DemoAnalyzer {
    pub fn new(analysis_delay: Duration, optimize_delay: Duration) -> Self {
        Self {
            analysis_delay,
            optimize_delay,
        }
    }
}

#[async_trait::async_trait]
impl ResumeAnalyzer for DemoAnalyzer {
    async fn analyze(&self, _request: &AnalysisRequest) -> Result<AnalysisReport, ApiError> {
        tokio::time::sleep(self.analysis_delay).await;
        Ok(demo::analysis_report())
    }

    async fn optimize(
        &self,
        _request: &OptimizationRequest,
    ) -> Result<OptimizationOutput, ApiError> {
        tokio::time::sleep(self.optimize_delay).await;
        Ok(demo::optimization_output())
    }
}
