//! External command execution.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, instrument};

/// What to do with a child's stdout and stderr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Collect output; stdout is returned, stderr is logged.
    #[default]
    Capture,
    /// Let the child write straight to the terminal.
    Inherit,
    /// Like `Inherit`, but the child's stdout goes to our stderr.
    Stderr,
    /// Throw all child output away.
    Discard,
}

/// A single external command to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
    pub output: OutputMode,
}

impl Invocation {
    pub fn new(program: impl Into<String>, cwd: impl AsRef<Path>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: cwd.as_ref().to_path_buf(),
            output: OutputMode::Capture,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn inherit_output(self) -> Self {
        self.with_output(OutputMode::Inherit)
    }

    pub fn with_output(mut self, output: OutputMode) -> Self {
        self.output = output;
        self
    }

    /// First argument, e.g. `commit` for `git commit -m ...`.
    pub fn subcommand(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            if arg.contains(char::is_whitespace) {
                write!(f, " \"{arg}\"")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

/// Result of a command that was started.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` if the child was killed by a signal.
    pub code: Option<i32>,
    /// Captured stdout; empty unless [`OutputMode::Capture`] was used.
    pub stdout: String,
}

impl CommandOutput {
    pub fn exited(code: i32) -> Self {
        Self {
            code: Some(code),
            stdout: String::new(),
        }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Errors starting a command.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("{program}: command not found")]
    NotFound { program: String },

    #[error("failed to run {program}: {source}")]
    Io {
        program: String,
        #[source]
        source: io::Error,
    },
}

impl RunError {
    fn from_spawn(program: &str, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotFound {
                program: program.to_string(),
            }
        } else {
            Self::Io {
                program: program.to_string(),
                source,
            }
        }
    }
}

/// Starts external programs on behalf of the setup tasks.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run to completion. A non-zero exit is `Ok`; only failing to start is `Err`.
    async fn run(&self, invocation: &Invocation) -> Result<CommandOutput, RunError>;

    /// Whether `program` resolves on the command search path.
    fn probe(&self, program: &str) -> bool;
}

/// Runs real processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandRunner for SystemRunner {
    #[instrument(skip(self, invocation), fields(command = %invocation))]
    async fn run(&self, invocation: &Invocation) -> Result<CommandOutput, RunError> {
        debug!(cwd = %invocation.cwd.display(), "Executing command");

        let mut command = Command::new(&invocation.program);
        command
            .args(&invocation.args)
            .current_dir(&invocation.cwd)
            .stdin(Stdio::null());

        let output = match invocation.output {
            OutputMode::Capture => {
                let out = command
                    .output()
                    .await
                    .map_err(|e| RunError::from_spawn(&invocation.program, e))?;
                if !out.stderr.is_empty() {
                    debug!(stderr = %String::from_utf8_lossy(&out.stderr).trim_end(), "Command stderr");
                }
                CommandOutput {
                    code: out.status.code(),
                    stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
                }
            }
            OutputMode::Inherit | OutputMode::Stderr | OutputMode::Discard => {
                let (stdout, stderr) = match invocation.output {
                    OutputMode::Stderr => (Stdio::from(io::stderr()), Stdio::inherit()),
                    OutputMode::Discard => (Stdio::null(), Stdio::null()),
                    _ => (Stdio::inherit(), Stdio::inherit()),
                };
                let status = command
                    .stdout(stdout)
                    .stderr(stderr)
                    .status()
                    .await
                    .map_err(|e| RunError::from_spawn(&invocation.program, e))?;
                CommandOutput {
                    code: status.code(),
                    stdout: String::new(),
                }
            }
        };

        debug!(code = ?output.code, "Command finished");
        Ok(output)
    }

    fn probe(&self, program: &str) -> bool {
        let found = which::which(program);
        debug!(program, found = found.is_ok(), "Probed for tool");
        found.is_ok()
    }
}
