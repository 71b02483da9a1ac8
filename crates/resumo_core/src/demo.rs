//! Fixed sample data used by the demo front end in place of real backend
//! responses.

use crate::{AnalysisReport, OptimizationOutput, Suggestion};

pub const RESUME_FILE_NAME: &str = "john_doe_resume.pdf";

pub fn resume_content() -> String {
    concat!(
        "<p><strong>John Doe</strong><br>Software Engineer<br>john.doe@email.com</p>",
        "<p><strong>Experience</strong><br>Senior Developer, ABC Tech (2020-Present)<br>",
        "- Developed web applications using React and Node.js<br>",
        "- Implemented CI/CD pipelines</p>",
        "<p><strong>Skills</strong><br>JavaScript, React, Node.js, Git, Agile</p>",
        "<p><strong>Education</strong><br>BS Computer Science, University of Technology (2016-2020)</p>",
    )
    .to_string()
}

/// Stands in for text extracted from an uploaded job description file.
pub fn job_description_text() -> String {
    "We are looking for a skilled Software Engineer with experience in React, Node.js, and \
     Python. The ideal candidate should have knowledge of AWS, CI/CD, and Docker. Experience \
     with TypeScript and GraphQL is preferred."
        .to_string()
}

pub fn default_suggestions() -> Vec<Suggestion> {
    vec![
        Suggestion::new(
            1,
            "Add Python experience",
            "The job requires Python but it's not mentioned in your resume. If you have \
             experience with Python, add it to your skills section.",
        ),
        Suggestion::new(
            2,
            "Highlight AWS experience",
            "AWS knowledge is required. Include any AWS experience you have or mention \
             relevant cloud experience.",
        ),
        Suggestion::new(
            3,
            "Add Docker to your skills",
            "Docker experience is required. If you have containerization experience, add it \
             to your skills section.",
        ),
    ]
}

pub fn analysis_report() -> AnalysisReport {
    AnalysisReport {
        match_score: 65,
        matched_skills: to_strings(&["JavaScript", "React", "Node.js"]),
        missing_skills: to_strings(&["Python", "AWS", "Docker", "TypeScript", "GraphQL"]),
        suggestions: default_suggestions(),
    }
}

pub fn optimization_output() -> OptimizationOutput {
    let content = concat!(
        "<p><strong>John Doe</strong><br>Software Engineer<br>john.doe@email.com</p>\n",
        "<p><strong>Experience</strong><br>Senior Developer, ABC Tech (2020-Present)<br>\n",
        "- Developed scalable web applications using React and Node.js<br>\n",
        "- Implemented CI/CD pipelines for automated testing and deployment<br>\n",
        "- Collaborated with cross-functional teams on AWS-based solutions</p>\n",
        "<p><strong>Skills</strong><br>\n",
        "JavaScript, React, Node.js, Git, Agile, Python, AWS, Docker</p>\n",
        "<p><strong>Education</strong><br>BS Computer Science, University of Technology (2016-2020)</p>\n",
    );
    OptimizationOutput {
        content: content.to_string(),
        default_suggestions: default_suggestions(),
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
