//! Simulated terminal: a fixed command table, an output log and an input history.
//!
//! Nothing here spawns processes. Every command resolves to canned output.

use std::collections::VecDeque;

const DEFAULT_SCROLLBACK_LINES: usize = 5000;

const GREETING: &str = "Welcome to the zide terminal. Type 'help' for available commands.";

/// Commands listed by `help`, in display order.
pub const COMMANDS: &[&str] = &[
    "help",
    "clear",
    "echo <text>",
    "ls",
    "pwd",
    "whoami",
    "history",
    "git status",
    "git branch",
    "npm install",
    "npm start",
    "npm test",
    "npm run build",
    "node --version",
    "python --version",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalLineKind {
    Input,
    Output,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalLine {
    pub kind: TerminalLineKind,
    pub text: String,
}

impl TerminalLine {
    fn input(text: impl Into<String>) -> Self {
        Self {
            kind: TerminalLineKind::Input,
            text: text.into(),
        }
    }

    fn output(text: impl Into<String>) -> Self {
        Self {
            kind: TerminalLineKind::Output,
            text: text.into(),
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            kind: TerminalLineKind::Error,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum CommandOutcome {
    Output(String),
    Error(String),
    Clear,
}

#[derive(Debug)]
pub struct TerminalState {
    log: VecDeque<TerminalLine>,
    history: Vec<String>,
    history_cursor: Option<usize>,
    pub prompt: String,
    /// Prompt line being typed.
    pub input: String,
    /// Char index into `input`.
    pub input_cursor: usize,
    pub scroll_offset: usize,
    pub scrollback_lines: usize,
}

impl Default for TerminalState {
    fn default() -> Self {
        Self::new("$", DEFAULT_SCROLLBACK_LINES)
    }
}

impl TerminalState {
    pub fn new(prompt: impl Into<String>, scrollback_lines: usize) -> Self {
        let mut state = Self {
            log: VecDeque::new(),
            history: Vec::new(),
            history_cursor: None,
            prompt: prompt.into(),
            input: String::new(),
            input_cursor: 0,
            scroll_offset: 0,
            scrollback_lines,
        };
        state.push_line(TerminalLine::output(GREETING));
        state
    }

    pub fn log(&self) -> impl ExactSizeIterator<Item = &TerminalLine> + DoubleEndedIterator {
        self.log.iter()
    }

    pub fn log_len(&self) -> usize {
        self.log.len()
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Runs `raw` against the command table, appending the echoed input and the result to
    /// the log. Blank input is ignored.
    pub fn execute(&mut self, raw: &str) -> bool {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return false;
        }

        self.history.push(trimmed.to_string());
        self.history_cursor = None;
        self.push_line(TerminalLine::input(format!("{} {trimmed}", self.prompt)));

        match self.resolve(trimmed) {
            CommandOutcome::Output(text) => {
                for line in text.lines() {
                    self.push_line(TerminalLine::output(line));
                }
                if text.is_empty() {
                    self.push_line(TerminalLine::output(""));
                }
            }
            CommandOutcome::Error(text) => {
                tracing::debug!(command = trimmed, "terminal command not found");
                self.push_line(TerminalLine::error(text));
            }
            CommandOutcome::Clear => {
                self.log.clear();
                self.scroll_offset = 0;
            }
        }

        true
    }

    /// Submits the current prompt line.
    pub fn submit_input(&mut self) -> bool {
        let line = std::mem::take(&mut self.input);
        self.input_cursor = 0;
        let executed = self.execute(&line);
        executed || !line.is_empty()
    }

    pub fn insert_char(&mut self, ch: char) -> bool {
        let byte = self.input_byte(self.input_cursor);
        self.input.insert(byte, ch);
        self.input_cursor += 1;
        true
    }

    pub fn backspace(&mut self) -> bool {
        if self.input_cursor == 0 {
            return false;
        }
        let start = self.input_byte(self.input_cursor - 1);
        let end = self.input_byte(self.input_cursor);
        self.input.replace_range(start..end, "");
        self.input_cursor -= 1;
        true
    }

    pub fn move_input_cursor(&mut self, delta: isize) -> bool {
        let len = self.input.chars().count();
        let prev = self.input_cursor;
        self.input_cursor = if delta < 0 {
            prev.saturating_sub(delta.unsigned_abs())
        } else {
            prev.saturating_add(delta as usize).min(len)
        };
        self.input_cursor != prev
    }

    /// Recalls the previous history entry into the prompt line. Stops at the oldest entry.
    pub fn history_prev(&mut self) -> Option<&str> {
        if self.history.is_empty() {
            return None;
        }
        let next = match self.history_cursor {
            None => self.history.len() - 1,
            Some(idx) => idx.saturating_sub(1),
        };
        self.history_cursor = Some(next);
        self.set_input(self.history[next].clone());
        Some(&self.history[next])
    }

    /// Recalls the next history entry. Past the newest entry the prompt line is emptied and
    /// recall stops.
    pub fn history_next(&mut self) -> Option<&str> {
        let idx = self.history_cursor?;
        if idx + 1 < self.history.len() {
            self.history_cursor = Some(idx + 1);
            self.set_input(self.history[idx + 1].clone());
            Some(&self.history[idx + 1])
        } else {
            self.history_cursor = None;
            self.set_input(String::new());
            None
        }
    }

    pub fn history_cursor(&self) -> Option<usize> {
        self.history_cursor
    }

    pub fn scroll(&mut self, delta: isize) -> bool {
        let max = self.log.len().saturating_sub(1);
        let prev = self.scroll_offset;
        self.scroll_offset = if delta < 0 {
            prev.saturating_sub(delta.unsigned_abs())
        } else {
            prev.saturating_add(delta as usize).min(max)
        };
        self.scroll_offset != prev
    }

    fn set_input(&mut self, text: String) {
        self.input_cursor = text.chars().count();
        self.input = text;
    }

    fn input_byte(&self, char_idx: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.input.len())
    }

    fn push_line(&mut self, line: TerminalLine) {
        self.log.push_back(line);
        if self.scrollback_lines > 0 {
            while self.log.len() > self.scrollback_lines {
                self.log.pop_front();
            }
        }
    }

    fn resolve(&self, trimmed: &str) -> CommandOutcome {
        let normalized = trimmed.to_lowercase();

        if let Some(arg) = echo_argument(trimmed) {
            return CommandOutcome::Output(arg.to_string());
        }

        let text = match normalized.as_str() {
            "help" => {
                let mut out = String::from("Available commands:");
                for cmd in COMMANDS {
                    out.push_str("\n  ");
                    out.push_str(cmd);
                }
                out
            }
            "clear" => return CommandOutcome::Clear,
            "history" => self
                .history
                .iter()
                .enumerate()
                .map(|(i, cmd)| format!("{:>4}  {cmd}", i + 1))
                .collect::<Vec<_>>()
                .join("\n"),
            "ls" => "src/  public/  package.json  README.md".to_string(),
            "pwd" => "/home/developer/my-project".to_string(),
            "whoami" => "developer".to_string(),
            "git status" => "On branch main\n\
                Your branch is up to date with 'origin/main'.\n\
                \n\
                nothing to commit, working tree clean"
                .to_string(),
            "git branch" => "* main\n  feature/sidebar".to_string(),
            "npm install" => "added 1423 packages, and audited 1424 packages in 12s\n\
                found 0 vulnerabilities"
                .to_string(),
            "npm start" => "> my-project@1.0.0 start\n\
                > react-scripts start\n\
                \n\
                Compiled successfully!\n\
                Local:            http://localhost:3000"
                .to_string(),
            "npm test" => "PASS  src/App.test.js\n\
                Tests:       3 passed, 3 total"
                .to_string(),
            "npm run build" => "> my-project@1.0.0 build\n\
                > react-scripts build\n\
                \n\
                Creating an optimized production build...\n\
                Compiled successfully."
                .to_string(),
            "node --version" => "v18.17.0".to_string(),
            "python --version" => "Python 3.11.4".to_string(),
            _ => {
                return CommandOutcome::Error(format!("command not found: {trimmed}"));
            }
        };

        CommandOutcome::Output(text)
    }
}

/// Text after `echo` and one separating whitespace char, kept verbatim.
fn echo_argument(line: &str) -> Option<&str> {
    if !line.get(..4)?.eq_ignore_ascii_case("echo") {
        return None;
    }
    let rest = &line[4..];
    let mut chars = rest.chars();
    match chars.next() {
        None => Some(""),
        Some(sep) if sep.is_whitespace() => Some(chars.as_str()),
        Some(_) => None,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/terminal.rs"]
mod tests;
