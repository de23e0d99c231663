//! Test doubles for the setup pipeline.
//!
//! [`FakeRunner`] stands in for real processes and [`SharedBuffer`]
//! captures everything a [`Reporter`] prints.

use std::collections::{HashMap, HashSet};
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::reporter::{IconContext, Reporter};
use crate::runner::{CommandOutput, CommandRunner, Invocation, RunError};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// In-memory, cloneable `Write` sink.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&lock(&self.0)).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        lock(&self.0).extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A reporter with unicode icons and no color, plus the buffer it writes to.
pub fn capture_reporter() -> (Reporter, SharedBuffer) {
    let buf = SharedBuffer::new();
    let reporter = Reporter::new(buf.clone(), IconContext::unicode(), false);
    (reporter, buf)
}

/// Scripted response for a program or subcommand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FakeResponse {
    Exit(i32),
    Missing,
    SpawnError,
}

/// A [`CommandRunner`] that never spawns anything.
///
/// Every program exits 0 unless told otherwise. Probes succeed only for
/// tools registered with [`FakeRunner::with_tools`].
#[derive(Debug, Default)]
pub struct FakeRunner {
    responses: HashMap<(String, Option<String>), FakeResponse>,
    stdout: HashMap<String, String>,
    tools: HashSet<String>,
    calls: Mutex<Vec<Invocation>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `probe` report these tools as installed.
    pub fn with_tools(mut self, tools: &[&str]) -> Self {
        self.tools.extend(tools.iter().map(|t| t.to_string()));
        self
    }

    /// Every invocation of `program` fails to start with "not found".
    pub fn missing(mut self, program: &str) -> Self {
        self.tools.remove(program);
        self.responses
            .insert((program.to_string(), None), FakeResponse::Missing);
        self
    }

    /// Every invocation of `program` exits with `code`.
    pub fn exit_code(mut self, program: &str, code: i32) -> Self {
        self.responses
            .insert((program.to_string(), None), FakeResponse::Exit(code));
        self
    }

    /// Only `program <subcommand> ...` exits with `code`.
    pub fn fail_subcommand(mut self, program: &str, subcommand: &str, code: i32) -> Self {
        self.responses.insert(
            (program.to_string(), Some(subcommand.to_string())),
            FakeResponse::Exit(code),
        );
        self
    }

    /// Every invocation of `program` fails to start with a non-"not found" error.
    pub fn spawn_error(mut self, program: &str) -> Self {
        self.responses
            .insert((program.to_string(), None), FakeResponse::SpawnError);
        self
    }

    /// Captured stdout returned for `program`.
    pub fn stdout(mut self, program: &str, text: &str) -> Self {
        self.stdout.insert(program.to_string(), text.to_string());
        self
    }

    /// Everything `run` was asked to execute, in order.
    pub fn calls(&self) -> Vec<Invocation> {
        lock(&self.calls).clone()
    }

    /// Invocations rendered as command lines.
    pub fn command_lines(&self) -> Vec<String> {
        self.calls().iter().map(ToString::to_string).collect()
    }

    fn response_for(&self, invocation: &Invocation) -> FakeResponse {
        let program = invocation.program.clone();
        let sub = invocation.subcommand().map(str::to_string);

        self.responses
            .get(&(program.clone(), sub))
            .or_else(|| self.responses.get(&(program, None)))
            .cloned()
            .unwrap_or(FakeResponse::Exit(0))
    }
}

#[async_trait]
impl CommandRunner for FakeRunner {
    async fn run(&self, invocation: &Invocation) -> Result<CommandOutput, RunError> {
        lock(&self.calls).push(invocation.clone());

        match self.response_for(invocation) {
            FakeResponse::Exit(code) => Ok(CommandOutput {
                code: Some(code),
                stdout: self
                    .stdout
                    .get(&invocation.program)
                    .cloned()
                    .unwrap_or_default(),
            }),
            FakeResponse::Missing => Err(RunError::NotFound {
                program: invocation.program.clone(),
            }),
            FakeResponse::SpawnError => Err(RunError::Io {
                program: invocation.program.clone(),
                source: io::Error::from(io::ErrorKind::PermissionDenied),
            }),
        }
    }

    fn probe(&self, program: &str) -> bool {
        self.tools.contains(program)
    }
}
