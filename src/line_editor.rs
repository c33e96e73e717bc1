//! Terminal input through `rustyline`, driven from a dedicated thread.
//!
//! The editor blocks in `readline`, so it lives on its own OS thread rather
//! than the runtime's blocking pool; shutting the runtime down never waits
//! on a pending read.

use crate::console::Input;
use crate::error::StaffError;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::future::Future;
use std::io;
use std::sync::mpsc;
use std::thread;
use tokio::sync::oneshot;
use tracing::debug;

type Reply = oneshot::Sender<io::Result<Option<String>>>;

pub struct LineEditor {
    requests: mpsc::Sender<(String, Reply)>,
}

impl LineEditor {
    pub fn spawn() -> Result<Self, StaffError> {
        let (requests, inbox) = mpsc::channel::<(String, Reply)>();
        let (ready_tx, ready_rx) = mpsc::channel::<io::Result<()>>();

        thread::Builder::new()
            .name("line-editor".to_string())
            .spawn(move || {
                let mut editor = match DefaultEditor::new() {
                    Ok(editor) => {
                        let _ = ready_tx.send(Ok(()));
                        editor
                    }
                    Err(e) => {
                        let _ = ready_tx.send(Err(readline_io_error(e)));
                        return;
                    }
                };
                for (prompt, reply) in inbox {
                    let _ = reply.send(read_one(&mut editor, &prompt));
                }
                debug!("line editor stopped");
            })?;

        ready_rx
            .recv()
            .map_err(|_| io::Error::other("line editor failed to start"))??;
        Ok(Self { requests })
    }
}

/// Ctrl-C and Ctrl-D at the prompt both end the input.
fn read_one(editor: &mut DefaultEditor, prompt: &str) -> io::Result<Option<String>> {
    match editor.readline(prompt) {
        Ok(line) => {
            if !line.trim().is_empty() {
                let _ = editor.add_history_entry(line.as_str());
            }
            Ok(Some(line))
        }
        Err(ReadlineError::Eof | ReadlineError::Interrupted) => Ok(None),
        Err(e) => Err(readline_io_error(e)),
    }
}

fn readline_io_error(e: ReadlineError) -> io::Error {
    match e {
        ReadlineError::Io(e) => e,
        other => io::Error::other(other.to_string()),
    }
}

impl Input for LineEditor {
    fn draws_prompt(&self) -> bool {
        true
    }

    fn next_line(
        &mut self,
        prompt: &str,
    ) -> impl Future<Output = io::Result<Option<String>>> + Send {
        let (reply, answer) = oneshot::channel();
        let sent = self.requests.send((prompt.to_string(), reply));
        async move {
            sent.map_err(|_| io::Error::other("line editor thread stopped"))?;
            answer
                .await
                .map_err(|_| io::Error::other("line editor thread stopped"))?
        }
    }
}
