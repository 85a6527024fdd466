use super::*;

fn fresh() -> TerminalState {
    let mut term = TerminalState::default();
    term.execute("clear");
    term
}

fn texts(term: &TerminalState) -> Vec<(TerminalLineKind, String)> {
    term.log().map(|l| (l.kind, l.text.clone())).collect()
}

#[test]
fn new_terminal_starts_with_greeting() {
    let term = TerminalState::default();
    assert_eq!(term.log_len(), 1);
    assert!(term.history().is_empty());
}

#[test]
fn echo_preserves_argument_case() {
    let mut term = fresh();
    assert!(term.execute("echo hello world"));
    let lines = texts(&term);
    assert_eq!(lines[0], (TerminalLineKind::Input, "$ echo hello world".to_string()));
    assert_eq!(lines[1], (TerminalLineKind::Output, "hello world".to_string()));

    term.execute("  ECHO Mixed Case  ");
    let last = term.log().last().unwrap();
    assert_eq!(last.text, "Mixed Case");
}

#[test]
fn echo_keeps_inner_whitespace_and_accepts_any_separator() {
    let mut term = fresh();

    term.execute("echo   indented");
    assert_eq!(term.log().last().unwrap().text, "  indented");

    term.execute("echo\tx");
    let last = term.log().last().unwrap();
    assert_eq!(last.kind, TerminalLineKind::Output);
    assert_eq!(last.text, "x");

    term.execute("echo");
    assert_eq!(term.log().last().unwrap().text, "");

    term.execute("echoes");
    assert_eq!(term.log().last().unwrap().kind, TerminalLineKind::Error);
}

#[test]
fn commands_are_normalized_before_lookup() {
    let mut term = fresh();
    term.execute("  PWD ");
    let last = term.log().last().unwrap();
    assert_eq!(last.kind, TerminalLineKind::Output);
    assert_eq!(last.text, "/home/developer/my-project");
}

#[test]
fn help_lists_every_command() {
    let mut term = fresh();
    term.execute("help");
    let output: Vec<String> = term
        .log()
        .filter(|l| l.kind == TerminalLineKind::Output)
        .map(|l| l.text.clone())
        .collect();
    assert_eq!(output[0], "Available commands:");
    assert_eq!(output.len(), COMMANDS.len() + 1);
    for (line, cmd) in output.iter().skip(1).zip(COMMANDS) {
        assert_eq!(line.trim(), *cmd);
    }
}

#[test]
fn clear_empties_log_but_keeps_history() {
    let mut term = fresh();
    term.execute("ls");
    term.execute("whoami");
    assert!(term.log_len() > 0);

    term.execute("clear");
    assert_eq!(term.log_len(), 0);
    assert_eq!(
        term.history(),
        ["clear".to_string(), "ls".to_string(), "whoami".to_string(), "clear".to_string()]
    );
}

#[test]
fn unknown_command_is_an_error_mentioning_it() {
    let mut term = fresh();
    term.execute("foo");
    let last = term.log().last().unwrap();
    assert_eq!(last.kind, TerminalLineKind::Error);
    assert!(last.text.contains("foo"));
}

#[test]
fn blank_input_is_ignored() {
    let mut term = fresh();
    assert!(!term.execute("   "));
    assert_eq!(term.log_len(), 0);
    assert_eq!(term.history().len(), 1);
}

#[test]
fn history_recall_stops_at_both_ends() {
    let mut term = TerminalState::default();
    term.execute("ls");
    term.execute("pwd");

    assert_eq!(term.history_prev(), Some("pwd"));
    assert_eq!(term.history_prev(), Some("ls"));
    assert_eq!(term.history_prev(), Some("ls"));
    assert_eq!(term.input, "ls");

    assert_eq!(term.history_next(), Some("pwd"));
    assert_eq!(term.history_next(), None);
    assert_eq!(term.input, "");
    assert_eq!(term.history_next(), None);
    assert_eq!(term.history_cursor(), None);
}

#[test]
fn history_prev_on_empty_history_is_none() {
    let mut term = TerminalState::default();
    assert_eq!(term.history_prev(), None);
    assert_eq!(term.input, "");
}

#[test]
fn submit_input_runs_prompt_line() {
    let mut term = fresh();
    for ch in "echo hi".chars() {
        term.insert_char(ch);
    }
    assert!(term.submit_input());
    assert_eq!(term.input, "");
    assert_eq!(term.input_cursor, 0);
    assert_eq!(term.log().last().unwrap().text, "hi");
}

#[test]
fn prompt_line_editing_handles_multibyte_chars() {
    let mut term = TerminalState::default();
    term.insert_char('a');
    term.insert_char('é');
    term.insert_char('b');
    term.move_input_cursor(-1);
    assert!(term.backspace());
    assert_eq!(term.input, "ab");
    assert_eq!(term.input_cursor, 1);
    term.move_input_cursor(-5);
    assert_eq!(term.input_cursor, 0);
    assert!(!term.backspace());
}

#[test]
fn history_command_numbers_entries() {
    let mut term = fresh();
    term.execute("ls");
    term.execute("history");
    let lines: Vec<String> = term
        .log()
        .filter(|l| l.kind == TerminalLineKind::Output)
        .map(|l| l.text.trim().to_string())
        .collect();
    assert!(lines.contains(&"2  ls".to_string()));
    assert!(lines.contains(&"3  history".to_string()));
}

#[test]
fn scrollback_drops_oldest_lines() {
    let mut term = TerminalState::new("$", 4);
    term.execute("echo one");
    term.execute("echo two");
    term.execute("echo three");
    assert_eq!(term.log_len(), 4);
    assert_eq!(term.log().last().unwrap().text, "three");
    assert_eq!(term.log().next().unwrap().text, "$ echo two");
}

#[test]
fn multi_line_output_is_split_into_entries() {
    let mut term = fresh();
    term.execute("git branch");
    let lines = texts(&term);
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[2].1, "  feature/sidebar");
}
