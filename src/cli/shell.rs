//! Interactive shell mode
//!
//! A REPL over a single search form, with command history and tab completion.
//! Each line edits one field or runs one form action, so the form can be
//! filled in, submitted, inspected and reset step by step.

use anyhow::Result;
use clap::{Parser, Subcommand};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Editor, Helper};
use std::path::PathBuf;

use super::commands::search::search_and_notify;
use super::output::{format_results_table, print_error};
use crate::config::Config;
use crate::form::FormState;
use crate::matching::MockJobMatcher;
use crate::notify::LogNotifier;
use crate::resume::ResumeFile;

const COMMANDS: &[&str] = &[
    "resume", "titles", "count", "submit", "refresh", "theme", "show", "help", "exit", "quit",
];

/// One line of shell input
#[derive(Parser, Debug)]
#[command(
    name = "jobmatch",
    no_binary_name = true,
    disable_help_flag = true,
    disable_version_flag = true,
    disable_help_subcommand = true
)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand, Debug)]
enum ShellCommand {
    /// Select a resume file; with no path the selection is cleared
    Resume { path: Option<PathBuf> },

    /// Set the job titles
    Titles {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },

    /// Set the number of jobs to return
    Count {
        #[arg(allow_hyphen_values = true)]
        text: Option<String>,
    },

    /// Validate the form and find matching jobs
    Submit,

    /// Clear the form
    Refresh,

    /// Toggle dark mode
    Theme,

    /// Show the current form
    Show,
}

/// Command completer for the shell
struct ShellCompleter;

impl Completer for ShellCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        // Only the command word is completed
        if line.contains(char::is_whitespace) {
            return Ok((pos, vec![]));
        }

        let candidates = COMMANDS
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Hinter for ShellCompleter {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &rustyline::Context<'_>) -> Option<String> {
        None
    }
}

impl Highlighter for ShellCompleter {}
impl Validator for ShellCompleter {}
impl Helper for ShellCompleter {}

/// Parse a command line into arguments, handling quotes
fn parse_args(line: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut quote_char = ' ';

    for c in line.chars() {
        match c {
            '"' | '\'' if !in_quotes => {
                in_quotes = true;
                quote_char = c;
            }
            c if c == quote_char && in_quotes => {
                in_quotes = false;
            }
            c if c.is_whitespace() && !in_quotes => {
                if !current.is_empty() {
                    args.push(std::mem::take(&mut current));
                }
            }
            _ => current.push(c),
        }
    }

    if !current.is_empty() {
        args.push(current);
    }

    args
}

/// Form state for one shell session
struct ShellSession {
    form: FormState,
    config: Config,
}

impl ShellSession {
    fn new(config: Config) -> Self {
        Self {
            form: FormState::new(config.launcher.display_mode()),
            config,
        }
    }

    /// Run one command and return the text to print
    async fn execute(&mut self, command: ShellCommand) -> Result<String> {
        match command {
            ShellCommand::Resume { path } => {
                if let Some(ref path) = path {
                    if !path.is_file() {
                        anyhow::bail!("Resume file not found: {}", path.display());
                    }
                }
                self.form.select_resume_file(path.map(ResumeFile::from_path))?;
                let name = self.form.selected_file().map(|f| f.file_name()).unwrap_or_default();
                Ok(format!("Selected {}", name))
            }
            ShellCommand::Titles { words } => {
                self.form.set_job_titles_text(words.join(" "));
                Ok(format!("Job titles: {}", self.form.job_titles_text()))
            }
            ShellCommand::Count { text } => {
                self.form.set_job_count_text(text.unwrap_or_default());
                Ok(format!("Number of jobs: {}", self.form.job_count_text()))
            }
            ShellCommand::Submit => {
                let results = search_and_notify(
                    &mut self.form,
                    &MockJobMatcher,
                    &LogNotifier,
                    &self.config.notify,
                )
                .await?;
                Ok(format!(
                    "Job Matches ({})\n\n{}",
                    results.len(),
                    format_results_table(results.listings())
                ))
            }
            ShellCommand::Refresh => {
                self.form.refresh();
                Ok("Form cleared".to_string())
            }
            ShellCommand::Theme => {
                let mode = self.form.toggle_display_mode();
                Ok(format!("Display mode: {}", mode.name()))
            }
            ShellCommand::Show => Ok(self.describe()),
        }
    }

    fn describe(&self) -> String {
        let form = &self.form;
        let mut lines = vec![
            format!(
                "Resume:         {}",
                form.selected_file().map(|f| f.file_name()).unwrap_or("<none>")
            ),
            format!("Job titles:     {}", form.job_titles_text()),
            format!("Number of jobs: {}", form.job_count_text()),
            format!("Display mode:   {}", form.display_mode().name()),
            format!("State:          {:?}", form.phase()),
        ];
        if !form.error_message().is_empty() {
            lines.push(format!("Error:          {}", form.error_message()));
        }
        if !form.results().is_empty() {
            lines.push(String::new());
            lines.push(format_results_table(form.results().listings()));
        }
        lines.join("\n")
    }
}

fn print_help() {
    println!(
        r#"Job Matcher Interactive Shell

Commands:
  resume <path>            Select a resume (must be a PDF)
  titles <text>            Set the job titles
  count <n>                Set the number of jobs to return
  submit                   Find matching jobs
  refresh                  Clear the form
  theme                    Toggle dark mode
  show                     Show the current form

  help                     Show this help
  exit, quit               Exit the shell
"#
    );
}

/// Get the history file path
fn history_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "jobmatch", "Jobmatch")
        .map(|dirs| dirs.data_dir().join("shell_history"))
}

/// Run the interactive shell
pub async fn run() -> Result<()> {
    println!("Job Matcher Interactive Shell v{}", env!("CARGO_PKG_VERSION"));
    println!("Type 'help' for available commands, 'exit' to quit.\n");

    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {}", e);
        Config::default()
    });
    let mut session = ShellSession::new(config);

    let rl_config = rustyline::Config::builder()
        .history_ignore_space(true)
        .completion_type(rustyline::CompletionType::List)
        .build();

    let mut rl = Editor::with_config(rl_config)?;
    rl.set_helper(Some(ShellCompleter));

    if let Some(path) = history_path() {
        let _ = rl.load_history(&path);
    }

    loop {
        match rl.readline("jobmatch> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                rl.add_history_entry(line)?;

                let args = parse_args(line);
                match args.first().map(String::as_str) {
                    Some("help") => {
                        print_help();
                        continue;
                    }
                    Some("exit") | Some("quit") => break,
                    _ => {}
                }

                let command = match ShellLine::try_parse_from(&args) {
                    Ok(parsed) => parsed.command,
                    Err(e) => {
                        println!("{}", e);
                        continue;
                    }
                };

                match session.execute(command).await {
                    Ok(message) => println!("{}", message),
                    Err(e) => print_error(&e.to_string()),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("exit");
                break;
            }
            Err(err) => {
                eprintln!("Error: {:?}", err);
                break;
            }
        }
    }

    if let Some(path) = history_path() {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let _ = rl.save_history(&path);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{DisplayMode, FormPhase};
    use tempfile::TempDir;

    fn parse(line: &str) -> ShellCommand {
        ShellLine::try_parse_from(parse_args(line)).unwrap().command
    }

    #[test]
    fn test_parse_args_handles_quotes() {
        assert_eq!(
            parse_args(r#"titles "Software Engineer" 'Data Scientist'"#),
            vec!["titles", "Software Engineer", "Data Scientist"]
        );
        assert_eq!(parse_args("  count   3 "), vec!["count", "3"]);
        assert!(parse_args("   ").is_empty());
    }

    #[test]
    fn test_parse_shell_commands() {
        assert!(matches!(parse("count -1"), ShellCommand::Count { text: Some(t) } if t == "-1"));
        assert!(matches!(parse("resume"), ShellCommand::Resume { path: None }));
        assert!(matches!(parse("titles Data Scientist"), ShellCommand::Titles { words } if words.len() == 2));
        assert!(ShellLine::try_parse_from(["launch"]).is_err());
    }

    #[tokio::test]
    async fn test_session_fill_submit_refresh() {
        let dir = TempDir::new().unwrap();
        let resume = dir.path().join("resume.pdf");
        std::fs::write(&resume, b"%PDF-1.4").unwrap();

        let mut session = ShellSession::new(Config::default());

        let message = session
            .execute(ShellCommand::Resume { path: Some(resume) })
            .await
            .unwrap();
        assert_eq!(message, "Selected resume.pdf");

        session.execute(parse("titles Software Engineer")).await.unwrap();
        assert_eq!(session.form.job_titles_text(), "Software Engineer");

        session.execute(parse("count 2")).await.unwrap();
        let output = session.execute(ShellCommand::Submit).await.unwrap();
        assert!(output.starts_with("Job Matches (2)"));
        assert!(output.contains("TechCorp"));
        assert_eq!(session.form.phase(), FormPhase::ReadyResults);

        session.execute(ShellCommand::Theme).await.unwrap();
        session.execute(ShellCommand::Refresh).await.unwrap();
        assert_eq!(session.form.phase(), FormPhase::Empty);
        assert_eq!(session.form.display_mode(), DisplayMode::Dark);
    }

    #[tokio::test]
    async fn test_session_reports_validation_errors() {
        let mut session = ShellSession::new(Config::default());

        let err = session.execute(ShellCommand::Submit).await.unwrap_err();
        assert_eq!(err.to_string(), "Please upload a resume.");
        assert!(session.describe().contains("Error:          Please upload a resume."));

        let dir = TempDir::new().unwrap();
        let notes = dir.path().join("notes.txt");
        std::fs::write(&notes, b"hello").unwrap();
        let err = session
            .execute(ShellCommand::Resume { path: Some(notes) })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Please upload a PDF file.");
    }

    #[tokio::test]
    async fn test_missing_file_leaves_form_untouched() {
        let mut session = ShellSession::new(Config::default());
        let err = session
            .execute(ShellCommand::Resume { path: Some(PathBuf::from("/definitely/missing.pdf")) })
            .await
            .unwrap_err();

        assert!(err.to_string().starts_with("Resume file not found"));
        assert_eq!(session.form.phase(), FormPhase::Empty);
    }
}
