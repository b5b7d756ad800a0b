use std::env;
use std::io::Write;
use std::process::{Command, Stdio};
use tracing::debug;

use super::{ClipboardReader, ClipboardWriter};
use crate::error::{Result, TidbitsError};

const BACKEND: &str = "command";

/// An external program plus its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ToolCommand {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self { program: program.to_string(), args: args.iter().map(|a| a.to_string()).collect() }
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }
}

/// Clipboard backed by platform command-line tools.
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    copy: ToolCommand,
    paste: Option<ToolCommand>,
}

/// (copy, paste) pairs in preference order for the current platform.
fn platform_tools() -> Vec<(ToolCommand, Option<ToolCommand>)> {
    if cfg!(target_os = "macos") {
        return vec![(ToolCommand::new("pbcopy", &[]), Some(ToolCommand::new("pbpaste", &[])))];
    }
    if cfg!(target_os = "windows") {
        return vec![(
            ToolCommand::new("clip.exe", &[]),
            Some(ToolCommand::new("powershell.exe", &["-NoProfile", "-Command", "Get-Clipboard"])),
        )];
    }

    let mut tools = Vec::new();
    if env::var_os("WAYLAND_DISPLAY").is_some() {
        tools.push((
            ToolCommand::new("wl-copy", &[]),
            Some(ToolCommand::new("wl-paste", &["--no-newline"])),
        ));
    }
    tools.push((
        ToolCommand::new("xclip", &["-selection", "clipboard"]),
        Some(ToolCommand::new("xclip", &["-selection", "clipboard", "-o"])),
    ));
    tools.push((
        ToolCommand::new("xsel", &["--clipboard", "--input"]),
        Some(ToolCommand::new("xsel", &["--clipboard", "--output"])),
    ));
    // WSL exposes the Windows tools on PATH.
    tools.push((
        ToolCommand::new("clip.exe", &[]),
        Some(ToolCommand::new("powershell.exe", &["-NoProfile", "-Command", "Get-Clipboard"])),
    ));
    tools
}

fn on_path(program: &str) -> bool {
    let Some(paths) = env::var_os("PATH") else {
        return false;
    };
    env::split_paths(&paths).any(|dir| dir.join(program).is_file())
}

impl CommandClipboard {
    pub fn new(copy: ToolCommand, paste: Option<ToolCommand>) -> Self {
        Self { copy, paste }
    }

    /// Pick the first platform tool found on `PATH`.
    pub fn detect() -> Result<Self> {
        let (copy, paste) = platform_tools()
            .into_iter()
            .find(|(copy, _)| on_path(&copy.program))
            .ok_or_else(|| TidbitsError::unavailable(BACKEND, "no clipboard tool found on PATH"))?;
        debug!(program = %copy.program, "using clipboard command");
        Ok(Self::new(copy, paste))
    }
}

fn spawn_error(tool: &ToolCommand, err: std::io::Error) -> TidbitsError {
    TidbitsError::unavailable(BACKEND, format!("failed to run {}: {err}", tool.program))
}

fn exit_error(tool: &ToolCommand, status: std::process::ExitStatus, stderr: &[u8]) -> TidbitsError {
    let stderr = String::from_utf8_lossy(stderr);
    let message = match stderr.trim() {
        "" => format!("{} exited with {status}", tool.program),
        detail => format!("{} exited with {status}: {detail}", tool.program),
    };
    TidbitsError::unavailable(BACKEND, message)
}

impl ClipboardWriter for CommandClipboard {
    fn name(&self) -> &'static str {
        BACKEND
    }

    fn set_text(&mut self, text: &str) -> Result<()> {
        // xclip and wl-copy leave a child behind that owns the selection and
        // inherits our handles, so no output pipe is read here.
        let mut child = self
            .copy
            .command()
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| spawn_error(&self.copy, e))?;

        if let Some(mut stdin) = child.stdin.take() {
            // A tool that exits early closes the pipe; its exit status says why.
            if let Err(err) = stdin.write_all(text.as_bytes()) {
                if err.kind() != std::io::ErrorKind::BrokenPipe {
                    return Err(spawn_error(&self.copy, err));
                }
            }
        }

        let status = child.wait().map_err(|e| spawn_error(&self.copy, e))?;
        if !status.success() {
            return Err(exit_error(&self.copy, status, &[]));
        }
        Ok(())
    }
}

impl ClipboardReader for CommandClipboard {
    fn get_text(&mut self) -> Result<String> {
        let paste = self
            .paste
            .as_ref()
            .ok_or_else(|| TidbitsError::unavailable(BACKEND, "no paste command configured"))?;
        let output = paste.command().output().map_err(|e| spawn_error(paste, e))?;
        if !output.status.success() {
            return Err(exit_error(paste, output.status, &output.stderr));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
