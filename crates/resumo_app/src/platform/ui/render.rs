use std::fmt::Write;

use resumo_core::{AppViewModel, ScoreModalView, Step, WorkflowView, NO_RECOMMENDATION};
use resumo_engine::{DismissReason, ToastEvent};

pub fn render(view: &AppViewModel) -> String {
    let mut out = String::new();
    render_stepper(&mut out, &view.workflow);
    render_step(&mut out, &view.workflow);
    render_score(&mut out, &view.score);
    out
}

pub fn render_toast_event(event: &ToastEvent) -> String {
    match event {
        ToastEvent::Shown(active) => {
            let presentation = active.toast.kind.presentation();
            format!(
                "[{} {} #{}] {} ({} ms)",
                presentation.icon,
                presentation.label,
                active.id,
                active.toast.message,
                active.toast.duration_ms
            )
        }
        ToastEvent::Dismissed { id, reason } => match reason {
            DismissReason::Expired => format!("[toast #{id} expired]"),
            DismissReason::User => format!("[toast #{id} dismissed]"),
        },
    }
}

fn render_stepper(out: &mut String, view: &WorkflowView) {
    let steps: Vec<String> = Step::ALL
        .into_iter()
        .map(|step| {
            let marker = if step == view.step {
                '>'
            } else if step < view.step {
                '✓'
            } else {
                ' '
            };
            format!("{marker}{} {}", step.number(), step.label())
        })
        .collect();
    let _ = writeln!(out, "{}", steps.join("  "));
}

fn render_step(out: &mut String, view: &WorkflowView) {
    match view.step {
        Step::Upload => {
            let _ = writeln!(
                out,
                "  resume: {}",
                view.resume.as_deref().unwrap_or("(none)")
            );
            let _ = writeln!(
                out,
                "  job description: {}",
                describe_job_description(view)
            );
        }
        Step::Analysis => {
            if view.is_analyzing {
                let _ = writeln!(out, "  analyzing resume...");
            } else if view.analysis_complete {
                let _ = writeln!(out, "  match score: {}%", view.match_score);
                let _ = writeln!(out, "  matched: {}", list(&view.matched_skills));
                let _ = writeln!(out, "  missing: {}", list(&view.missing_skills));
            } else {
                let _ = writeln!(out, "  analysis not available, go back and retry");
            }
        }
        Step::Optimize => {
            if view.is_optimizing {
                let _ = writeln!(out, "  optimizing resume...");
            } else {
                let _ = writeln!(out, "  match score: {}%", view.match_score);
                for suggestion in &view.suggestions {
                    let _ = writeln!(
                        out,
                        "  [{}] {}: {}",
                        suggestion.id, suggestion.title, suggestion.description
                    );
                }
                if view.suggestions.is_empty() {
                    let _ = writeln!(out, "  all suggestions applied");
                }
            }
        }
        Step::Download => {
            let _ = writeln!(
                out,
                "  score: {}% -> {}%",
                view.match_score, view.final_match_score
            );
            let _ = writeln!(out, "  format: {}", view.format.extension());
        }
    }

    let mut controls = Vec::new();
    if view.can_go_back {
        controls.push("back");
    }
    if view.can_advance {
        controls.push("next");
    }
    if !controls.is_empty() {
        let _ = writeln!(out, "  ({})", controls.join(" | "));
    }
}

fn render_score(out: &mut String, view: &ScoreModalView) {
    if view.modal_open {
        let _ = writeln!(
            out,
            "Score resume {}{}",
            view.resume_id.as_deref().unwrap_or("?"),
            if view.is_scoring { " (scoring...)" } else { "" }
        );
        let _ = writeln!(out, "  job description: {}", truncate(&view.job_description));
    }
    if view.results_open {
        let results = &view.results;
        let _ = writeln!(out, "ATS score: {}%", results.ats_score);
        let _ = writeln!(out, "  matching: {}", list(&results.matching_skills));
        let _ = writeln!(out, "  missing: {}", list(&results.missing_skills));
        let recommendation = if results.recommendation.is_empty() {
            NO_RECOMMENDATION
        } else {
            results.recommendation.as_str()
        };
        let _ = writeln!(out, "  {recommendation}");
    }
}

fn describe_job_description(view: &WorkflowView) -> String {
    match &view.job_description_file {
        Some(file) => format!("{file} ({} chars)", view.job_description.chars().count()),
        None if view.job_description.trim().is_empty() => "(none)".to_string(),
        None => truncate(&view.job_description),
    }
}

fn truncate(text: &str) -> String {
    const LIMIT: usize = 60;
    let first_line = text.lines().next().unwrap_or_default();
    if first_line.chars().count() > LIMIT || text.lines().nth(1).is_some() {
        let head: String = first_line.chars().take(LIMIT).collect();
        format!("{head}...")
    } else {
        first_line.to_string()
    }
}

fn list(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}
