use std::env;
use std::process::Command;
use std::thread;
use tokio::sync::oneshot;

/// Environment variable naming the external speech-to-text command
pub const SPEECH_CMD_ENV: &str = "LETSDO_SPEECH_CMD";

/// Notice shown when no recognizer is available
pub const UNAVAILABLE_NOTICE: &str = "Voice input is not supported in your terminal.";

/// Result of a single recognition attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechOutcome {
    Transcript(String),
    /// No recognizer is configured
    Unavailable,
    /// The recognizer ran but produced no usable transcript
    Failed,
}

/// A one-shot speech-to-text capability
pub trait SpeechRecognizer {
    /// Whether recognition can be attempted at all
    fn is_available(&self) -> bool;

    /// Start one recognition attempt; the receiver resolves exactly once
    fn recognize(&self) -> oneshot::Receiver<SpeechOutcome>;
}

/// Recognizer that shells out to a user-provided command and takes the first
/// non-empty line it prints as the transcript
#[derive(Debug, Clone, Default)]
pub struct CommandRecognizer {
    command: Option<String>,
}

impl CommandRecognizer {
    pub fn new(command: Option<String>) -> Self {
        Self {
            command: command.filter(|c| !c.trim().is_empty()),
        }
    }

    /// Configure from the LETSDO_SPEECH_CMD environment variable
    pub fn from_env() -> Self {
        Self::new(env::var(SPEECH_CMD_ENV).ok())
    }
}

impl SpeechRecognizer for CommandRecognizer {
    fn is_available(&self) -> bool {
        self.command.is_some()
    }

    fn recognize(&self) -> oneshot::Receiver<SpeechOutcome> {
        let (tx, rx) = oneshot::channel();

        let Some(command) = self.command.clone() else {
            let _ = tx.send(SpeechOutcome::Unavailable);
            return rx;
        };

        thread::spawn(move || {
            let outcome = run_command(&command);
            // Receiver may already be gone if the app quit
            let _ = tx.send(outcome);
        });

        rx
    }
}

fn run_command(command: &str) -> SpeechOutcome {
    let output = if cfg!(target_os = "windows") {
        Command::new("cmd").args(["/C", command]).output()
    } else {
        Command::new("sh").args(["-c", command]).output()
    };

    match output {
        Ok(output) if output.status.success() => {
            let stdout = String::from_utf8_lossy(&output.stdout);
            match first_transcript(&stdout) {
                Some(text) => SpeechOutcome::Transcript(text),
                None => {
                    tracing::warn!("speech command produced no transcript");
                    SpeechOutcome::Failed
                }
            }
        }
        Ok(output) => {
            tracing::warn!(status = %output.status, "speech command failed");
            SpeechOutcome::Failed
        }
        Err(e) => {
            tracing::warn!(error = %e, "could not run speech command");
            SpeechOutcome::Failed
        }
    }
}

/// First non-empty trimmed line of the command output
fn first_transcript(stdout: &str) -> Option<String> {
    stdout
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}
