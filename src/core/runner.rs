//! External process execution.
//!
//! Every tool dl drives (yt-dlp, scp, mount, mkdir, wslpath) goes through the
//! [`CommandRunner`] trait so the calling code can be exercised with a fake.

use std::fmt;
use std::io::{BufRead, BufReader, Read};
use std::process::{Command, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crate::error::{DlError, Result};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Program plus arguments, passed to the OS as argv (never through a shell)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new<S: Into<String>>(program: S) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg<S: Into<String>>(mut self, arg: S) -> Self {
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

    /// Prefix the command with `sudo`
    pub fn privileged(self) -> Self {
        CommandSpec::new("sudo").arg(self.program).args(self.args)
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " '{}'", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// Captured result of a finished process
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    /// Exit code, `None` when the process was killed by a signal
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }

    pub fn status_text(&self) -> String {
        match self.status {
            Some(code) => format!("exit status: {}", code),
            None => "terminated by signal".to_string(),
        }
    }
}

pub trait CommandRunner {
    fn run(&self, spec: &CommandSpec) -> Result<CommandOutput>;

    /// Run and turn a nonzero exit into [`DlError::ExternalCommandFailed`]
    fn run_checked(&self, spec: &CommandSpec) -> Result<CommandOutput> {
        let output = self.run(spec)?;
        if output.success() {
            Ok(output)
        } else {
            let detail = if output.stderr.trim().is_empty() {
                output.stdout.clone()
            } else {
                output.stderr.clone()
            };
            Err(DlError::ExternalCommandFailed {
                command: spec.to_string(),
                status: output.status_text(),
                output: detail,
            })
        }
    }
}

/// Runs commands on the host
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
    /// Stream process output to the terminal while it runs
    pub echo: bool,
    /// Kill the process once this much time has passed
    pub timeout: Option<Duration>,
}

impl SystemRunner {
    pub fn new(echo: bool, timeout: Option<Duration>) -> Self {
        Self { echo, timeout }
    }

    fn collect(&self, output: &mut CommandOutput, (stream, line): (Stream, String)) {
        if self.echo {
            println!("{}", line);
        }
        let buffer = match stream {
            Stream::Out => &mut output.stdout,
            Stream::Err => &mut output.stderr,
        };
        buffer.push_str(&line);
        buffer.push('\n');
    }
}

#[derive(Clone, Copy)]
enum Stream {
    Out,
    Err,
}

fn drain<R: Read + Send + 'static>(
    reader: R,
    stream: Stream,
    tx: mpsc::Sender<(Stream, String)>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let reader = BufReader::new(reader);
        for line in reader.lines() {
            let Ok(line) = line else { break };
            if tx.send((stream, line)).is_err() {
                break;
            }
        }
    })
}

impl CommandRunner for SystemRunner {
    fn run(&self, spec: &CommandSpec) -> Result<CommandOutput> {
        log::debug!("Executing {}", spec);

        let mut child = Command::new(&spec.program)
            .args(&spec.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| DlError::ExternalCommandFailed {
                command: spec.to_string(),
                status: "not started".to_string(),
                output: e.to_string(),
            })?;

        let (tx, rx) = mpsc::channel();
        let mut readers = Vec::new();
        if let Some(stdout) = child.stdout.take() {
            readers.push(drain(stdout, Stream::Out, tx.clone()));
        }
        if let Some(stderr) = child.stderr.take() {
            readers.push(drain(stderr, Stream::Err, tx.clone()));
        }
        drop(tx);

        let mut output = CommandOutput::default();

        let started = Instant::now();
        let status = loop {
            while let Ok(message) = rx.try_recv() {
                self.collect(&mut output, message);
            }
            if let Some(status) = child.try_wait()? {
                break status;
            }
            if let Some(limit) = self.timeout {
                if started.elapsed() >= limit {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(DlError::ExternalCommandFailed {
                        command: spec.to_string(),
                        status: format!("timed out after {}s", limit.as_secs()),
                        output: output.stderr,
                    });
                }
            }
            thread::sleep(POLL_INTERVAL);
        };

        for reader in readers {
            let _ = reader.join();
        }
        for message in rx.try_iter() {
            self.collect(&mut output, message);
        }

        output.status = status.code();
        log::debug!("{} finished with {}", spec.program, output.status_text());
        Ok(output)
    }
}
