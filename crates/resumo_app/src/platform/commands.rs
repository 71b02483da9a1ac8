use resumo_core::{demo, Msg, OutputFormat, Step};
use resumo_engine::{ToastEvent, ToastId};

/// Everything the event loop reacts to.
#[derive(Debug)]
pub enum Input {
    Msg(Msg),
    DismissToast(ToastId),
    Toast(ToastEvent),
    /// Loads the sample resume and job description, then starts analysis.
    Demo,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  resume <file>         select a resume (.pdf, .docx)
  resume-clear          remove the selected resume
  jd <text>             paste a job description
  jd-file <file>        attach a job description file (.pdf, .docx, .txt)
  jd-file-clear         remove the job description file
  next | back           move through the workflow
  step <1-4>            jump back to an earlier step
  apply <id>            apply a suggestion
  format <pdf|docx|txt> choose the download format
  download              download the optimized resume
  start-over            reset the workflow
  score <resume-id>     open the score modal for a stored resume
  score-jd <text>       job description for scoring
  score-submit          submit the score request
  score-cancel          close the score modal
  results-close         close the score results
  results-optimize      optimize the scored resume
  dismiss <toast-id>    dismiss a toast
  demo                  load sample inputs and start analysis
  help | quit";

/// Parses one line of user input. Empty lines yield `None`.
pub fn parse_line(line: &str) -> Result<Option<Input>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    let msg = match command {
        "resume" => Msg::ResumeSelected {
            file_name: required(command, rest)?.to_string(),
        },
        "resume-clear" => Msg::ResumeCleared,
        "jd" => Msg::JobDescriptionChanged(rest.to_string()),
        "jd-file" => Msg::JobDescriptionFileSelected {
            file_name: required(command, rest)?.to_string(),
            // Text extraction happens server-side; the sample text stands in.
            text: demo::job_description_text(),
        },
        "jd-file-clear" => Msg::JobDescriptionFileCleared,
        "next" => Msg::NextClicked,
        "back" => Msg::BackClicked,
        "step" => Msg::StepSelected(parse_step(required(command, rest)?)?),
        "apply" => Msg::SuggestionApplied(parse_number(command, rest)?),
        "format" => {
            let raw = required(command, rest)?;
            Msg::FormatSelected(
                OutputFormat::parse(raw).ok_or_else(|| format!("unknown format '{raw}'"))?,
            )
        }
        "download" => Msg::DownloadClicked,
        "start-over" => Msg::StartOverClicked,
        "score" => Msg::ScoreResumeClicked {
            resume_id: required(command, rest)?.to_string(),
        },
        "score-jd" => Msg::ScoreJobDescriptionChanged(rest.to_string()),
        "score-submit" => Msg::ScoreSubmitted,
        "score-cancel" => Msg::ScoreModalCancelled,
        "results-close" => Msg::ScoreResultsClosed,
        "results-optimize" => Msg::OptimizeFromScoreClicked,
        "dismiss" => return Ok(Some(Input::DismissToast(parse_number(command, rest)?))),
        "demo" => return Ok(Some(Input::Demo)),
        "help" | "?" => return Ok(Some(Input::Help)),
        "quit" | "exit" => return Ok(Some(Input::Quit)),
        other => return Err(format!("unknown command '{other}', try 'help'")),
    };
    Ok(Some(Input::Msg(msg)))
}

/// Messages the `demo` command feeds through the reducer.
pub fn demo_script() -> Vec<Msg> {
    vec![
        Msg::ResumeSelected {
            file_name: demo::RESUME_FILE_NAME.to_string(),
        },
        Msg::JobDescriptionChanged(demo::job_description_text()),
        Msg::NextClicked,
    ]
}

fn required<'a>(command: &str, rest: &'a str) -> Result<&'a str, String> {
    if rest.is_empty() {
        Err(format!("'{command}' needs an argument"))
    } else {
        Ok(rest)
    }
}

fn parse_number<T: std::str::FromStr>(command: &str, rest: &str) -> Result<T, String> {
    let raw = required(command, rest)?;
    raw.parse()
        .map_err(|_| format!("'{command}' expects a number, got '{raw}'"))
}

fn parse_step(raw: &str) -> Result<Step, String> {
    Step::ALL
        .into_iter()
        .find(|step| raw == step.number().to_string() || raw.eq_ignore_ascii_case(step.label()))
        .ok_or_else(|| format!("no step '{raw}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(line: &str) -> Msg {
        match parse_line(line) {
            Ok(Some(Input::Msg(msg))) => msg,
            other => panic!("{line}: {other:?}"),
        }
    }

    #[test]
    fn blank_lines_are_ignored() {
        assert!(matches!(parse_line("   "), Ok(None)));
    }

    #[test]
    fn workflow_commands_map_to_messages() {
        assert_eq!(
            msg("resume  cv.pdf "),
            Msg::ResumeSelected {
                file_name: "cv.pdf".to_string()
            }
        );
        assert_eq!(
            msg("jd Senior engineer, Python"),
            Msg::JobDescriptionChanged("Senior engineer, Python".to_string())
        );
        assert_eq!(msg("jd"), Msg::JobDescriptionChanged(String::new()));
        assert_eq!(msg("next"), Msg::NextClicked);
        assert_eq!(msg("step 2"), Msg::StepSelected(Step::Analysis));
        assert_eq!(msg("step upload"), Msg::StepSelected(Step::Upload));
        assert_eq!(msg("apply 3"), Msg::SuggestionApplied(3));
        assert_eq!(msg("format DOCX"), Msg::FormatSelected(OutputFormat::Docx));
    }

    #[test]
    fn score_commands_keep_free_text() {
        assert_eq!(
            msg("score r-42"),
            Msg::ScoreResumeClicked {
                resume_id: "r-42".to_string()
            }
        );
        assert_eq!(
            msg("score-jd needs AWS and Docker"),
            Msg::ScoreJobDescriptionChanged("needs AWS and Docker".to_string())
        );
    }

    #[test]
    fn control_commands() {
        assert!(matches!(parse_line("dismiss 7"), Ok(Some(Input::DismissToast(7)))));
        assert!(matches!(parse_line("quit"), Ok(Some(Input::Quit))));
        assert!(matches!(parse_line("help"), Ok(Some(Input::Help))));
        assert!(matches!(parse_line("demo"), Ok(Some(Input::Demo))));
    }

    #[test]
    fn malformed_commands_are_rejected() {
        assert!(parse_line("apply first").is_err());
        assert!(parse_line("resume").is_err());
        assert!(parse_line("score").is_err());
        assert!(parse_line("step 9").is_err());
        assert!(parse_line("format rtf").is_err());
        assert!(parse_line("launch").is_err());
    }
}
