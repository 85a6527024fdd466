use super::{TabHit, Workbench};
use crate::core::Command;
use crate::kernel::editor::line_at;
use crate::kernel::editor::line_count;
use crate::kernel::language::{file_name, LanguageId};
use crate::kernel::services::adapters::KeybindingContext;
use crate::kernel::{
    Action as KernelAction, ChatRole, EditorAction, FocusTarget, TerminalLineKind, TranscriptLine,
};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

pub(super) fn render(workbench: &mut Workbench, frame: &mut Frame, area: Rect) {
    workbench.last_cursor = None;
    if area.width == 0 || area.height == 0 {
        return;
    }

    let [header_area, body_area, status_area] = Layout::vertical([
        Constraint::Length(super::HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(super::STATUS_HEIGHT),
    ])
    .areas(area);

    let explorer_width = percent_of(body_area.width, super::EXPLORER_WIDTH_PERCENT)
        .max(super::EXPLORER_MIN_WIDTH)
        .min(body_area.width);
    let assistant_width = if workbench.state().assistant.visible {
        percent_of(body_area.width, super::ASSISTANT_WIDTH_PERCENT)
            .max(super::ASSISTANT_MIN_WIDTH)
            .min(body_area.width.saturating_sub(explorer_width))
    } else {
        0
    };
    let [explorer_area, center_area, assistant_area] = Layout::horizontal([
        Constraint::Length(explorer_width),
        Constraint::Min(0),
        Constraint::Length(assistant_width),
    ])
    .areas(body_area);

    let terminal_height = (center_area.height / 3)
        .max(super::TERMINAL_MIN_HEIGHT)
        .min(center_area.height);
    let [editor_area, terminal_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(terminal_height),
    ])
    .areas(center_area);

    render_header(workbench, frame, header_area);
    render_explorer(workbench, frame, explorer_area);
    render_editor(workbench, frame, editor_area);
    render_terminal(workbench, frame, terminal_area);
    if assistant_width > 0 {
        render_assistant(workbench, frame, assistant_area);
    } else {
        workbench.last_assistant_area = None;
    }
    render_status(workbench, frame, status_area);

    if let Some(pos) = workbench.last_cursor {
        frame.set_cursor_position(pos);
    }
}

fn percent_of(total: u16, percent: u16) -> u16 {
    (u32::from(total) * u32::from(percent) / 100) as u16
}

fn pane_block<'a>(workbench: &Workbench, title: String, focused: bool) -> Block<'a> {
    Block::bordered()
        .title(Span::styled(title, workbench.theme.title(focused)))
        .border_style(workbench.theme.border(focused))
}

fn render_header(workbench: &Workbench, frame: &mut Frame, area: Rect) {
    let theme = &workbench.theme;
    let workspace = &workbench.state().workspace;

    let mut spans = vec![Span::styled(
        " zide ",
        Style::default()
            .fg(theme.header_fg)
            .add_modifier(Modifier::BOLD),
    )];
    match workspace.active_path() {
        Some(path) => {
            spans.push(Span::raw(" "));
            spans.push(Span::raw(path.to_string()));
        }
        None => spans.push(Span::styled(" no file open", theme.muted())),
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_explorer(workbench: &mut Workbench, frame: &mut Frame, area: Rect) {
    workbench.last_explorer_area = Some(area);
    let focused = workbench.focus() == FocusTarget::Explorer;

    let root_name = {
        let tree = workbench.state().explorer.tree();
        tree.get_name(tree.root()).unwrap_or_default().to_string()
    };
    let block = pane_block(workbench, format!(" {root_name} "), focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    workbench.last_explorer_inner_area = Some(inner);

    let height = inner.height as usize;
    if height == 0 {
        return;
    }
    if height != workbench.state().explorer.view_height {
        let _ = workbench.dispatch_kernel(KernelAction::ExplorerSetViewHeight { height });
    }

    let theme = &workbench.theme;
    let explorer = &workbench.state().explorer;
    let selected = explorer.selected();
    let lines: Vec<Line> = explorer
        .rows
        .iter()
        .skip(explorer.scroll_offset)
        .take(height)
        .map(|row| {
            let indent = "  ".repeat(row.depth as usize);
            let icon = match (row.is_dir, row.is_expanded) {
                (true, true) => "▾ ",
                (true, false) => "▸ ",
                (false, _) => "  ",
            };
            let style = if Some(row.id) == selected {
                theme.selected()
            } else if row.is_dir {
                Style::default().fg(theme.accent_fg)
            } else {
                Style::default()
            };
            Line::from(Span::styled(format!("{indent}{icon}{}", row.name), style))
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_editor(workbench: &mut Workbench, frame: &mut Frame, area: Rect) {
    workbench.last_editor_area = Some(area);
    workbench.last_tab_hits.clear();
    let focused = workbench.focus() == FocusTarget::Editor;

    let title = match workbench.state().workspace.active_path() {
        Some(path) => format!(" Editor · {} ", LanguageId::from_path(path).display_name()),
        None => " Editor ".to_string(),
    };
    let block = pane_block(workbench, title, focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height < 2 || inner.width == 0 {
        return;
    }

    let [tabs_area, text_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);

    let view_height = text_area.height as usize;
    if view_height != workbench.state().editor.view_height {
        let _ = workbench.dispatch_kernel(KernelAction::Editor(EditorAction::SetViewHeight {
            height: view_height,
        }));
    }

    let (hits, cursor) = {
        let theme = &workbench.theme;
        let state = workbench.state();
        let workspace = &state.workspace;
        let active = workspace.active_path();

        let mut hits = Vec::new();
        let mut spans = Vec::new();
        let right = tabs_area.x.saturating_add(tabs_area.width);
        let mut x = tabs_area.x;
        for path in workspace.open_paths() {
            if x >= right {
                break;
            }
            let label = format!(" {} ", file_name(path));
            let width = (label.width() as u16).min(right - x);
            hits.push(TabHit {
                area: Rect::new(x, tabs_area.y, width, 1),
                path: path.clone(),
            });
            let style = if active == Some(path.as_str()) {
                theme.selected()
            } else {
                theme.muted()
            };
            spans.push(Span::styled(label, style));
            spans.push(Span::styled("│", theme.muted()));
            x = x.saturating_add(width).saturating_add(1);
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), tabs_area);

        let Some(path) = active else {
            let hint = Line::from(Span::styled(
                "No file open. Select a file in the explorer.",
                theme.muted(),
            ));
            frame.render_widget(Paragraph::new(hint), text_area);
            workbench.last_tab_hits = hits;
            return;
        };

        let text = workspace.content(path).unwrap_or_default();
        let total = line_count(text);
        let scroll = state.editor.scroll_offset(path).min(total.saturating_sub(1));
        let gutter = if workbench.show_line_numbers {
            total.to_string().len().max(3) + 1
        } else {
            0
        };

        let lines: Vec<Line> = text
            .split('\n')
            .enumerate()
            .skip(scroll)
            .take(view_height)
            .map(|(idx, line)| {
                let mut spans = Vec::with_capacity(2);
                if gutter > 0 {
                    spans.push(Span::styled(
                        format!("{:>width$} ", idx + 1, width = gutter - 1),
                        theme.muted(),
                    ));
                }
                spans.push(Span::raw(line.to_string()));
                Line::from(spans)
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), text_area);

        let cursor = if focused {
            let pos = state.editor.cursor(path);
            let line = pos.line.min(total.saturating_sub(1));
            (line >= scroll && line < scroll + view_height).then(|| {
                let prefix: usize = line_at(text, line)
                    .graphemes(true)
                    .take(pos.col)
                    .map(UnicodeWidthStr::width)
                    .sum();
                let max_x = text_area.x + text_area.width.saturating_sub(1);
                let x = (text_area.x as usize + gutter + prefix).min(max_x as usize) as u16;
                (x, text_area.y + (line - scroll) as u16)
            })
        } else {
            None
        };
        (hits, cursor)
    };

    workbench.last_tab_hits = hits;
    if cursor.is_some() {
        workbench.last_cursor = cursor;
    }
}

fn render_terminal(workbench: &mut Workbench, frame: &mut Frame, area: Rect) {
    workbench.last_terminal_area = Some(area);
    let focused = workbench.focus() == FocusTarget::Terminal;

    let block = pane_block(workbench, " Terminal ".to_string(), focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let height = inner.height as usize;
    if height == 0 || inner.width == 0 {
        return;
    }

    let theme = &workbench.theme;
    let terminal = &workbench.state().terminal;
    let mut lines: Vec<Line> = terminal
        .log()
        .map(|line| {
            let style = match line.kind {
                TerminalLineKind::Input => Style::default().fg(theme.accent_fg),
                TerminalLineKind::Output => Style::default(),
                TerminalLineKind::Error => Style::default().fg(theme.error_fg),
            };
            Line::from(Span::styled(line.text.clone(), style))
        })
        .collect();
    let prompt = format!("{} ", terminal.prompt);
    lines.push(Line::from(vec![
        Span::styled(prompt.clone(), Style::default().fg(theme.accent_fg)),
        Span::raw(terminal.input.clone()),
    ]));

    let total = lines.len();
    let offset = terminal.scroll_offset.min(total.saturating_sub(1));
    let end = total - offset;
    let start = end.saturating_sub(height);
    let cursor = (focused && offset == 0).then(|| {
        let typed: String = terminal.input.chars().take(terminal.input_cursor).collect();
        let max_x = inner.x + inner.width.saturating_sub(1);
        let x = (inner.x as usize + prompt.width() + typed.width()).min(max_x as usize) as u16;
        (x, inner.y + (end - 1 - start) as u16)
    });
    lines.truncate(end);
    frame.render_widget(Paragraph::new(lines.split_off(start)), inner);

    if cursor.is_some() {
        workbench.last_cursor = cursor;
    }
}

fn render_assistant(workbench: &mut Workbench, frame: &mut Frame, area: Rect) {
    workbench.last_assistant_area = Some(area);
    let focused = workbench.focus() == FocusTarget::Assistant;

    let title = if workbench.state().assistant.is_waiting() {
        " Assistant · thinking… ".to_string()
    } else {
        " Assistant ".to_string()
    };
    let block = pane_block(workbench, title, focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height < 2 || inner.width == 0 {
        return;
    }

    let [transcript_area, input_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    let width = transcript_area.width as usize;
    let height = transcript_area.height as usize;
    let assistant = &workbench.state().assistant;
    if (width, height) != (assistant.view_width, assistant.view_height) {
        let _ = workbench.dispatch_kernel(KernelAction::AssistantSetViewSize { width, height });
    }

    let theme = &workbench.theme;
    let assistant = &workbench.state().assistant;
    let mut lines: Vec<Line> = assistant
        .transcript_lines()
        .into_iter()
        .map(|line| match line {
            TranscriptLine::Header(role) => {
                let (label, color) = match role {
                    ChatRole::User => ("You", theme.user_fg),
                    ChatRole::Assistant => ("Assistant", theme.assistant_fg),
                };
                Line::from(Span::styled(
                    format!("{label}:"),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ))
            }
            TranscriptLine::Text(text) => Line::from(text),
            TranscriptLine::Blank => Line::default(),
            TranscriptLine::Typing => {
                Line::from(Span::styled("Assistant is typing…", theme.muted()))
            }
        })
        .collect();

    let total = lines.len();
    let offset = assistant.scroll_offset.min(total.saturating_sub(height));
    let end = total - offset;
    let start = end.saturating_sub(height);
    lines.truncate(end);
    frame.render_widget(Paragraph::new(lines.split_off(start)), transcript_area);

    let input_line = Line::from(vec![
        Span::styled("> ", Style::default().fg(theme.accent_fg)),
        Span::raw(assistant.input.clone()),
    ]);
    frame.render_widget(Paragraph::new(input_line), input_area);

    if focused {
        let max_x = input_area.x + input_area.width.saturating_sub(1);
        let x = (input_area.x as usize + 2 + assistant.input.width()).min(max_x as usize) as u16;
        workbench.last_cursor = Some((x, input_area.y));
    }
}

fn render_status(workbench: &Workbench, frame: &mut Frame, area: Rect) {
    let theme = &workbench.theme;
    let state = workbench.state();

    let focus_label = match state.ui.focus {
        FocusTarget::Explorer => "EXPLORER",
        FocusTarget::Editor => "EDITOR",
        FocusTarget::Terminal => "TERMINAL",
        FocusTarget::Assistant => "ASSISTANT",
    };
    let mut spans = vec![Span::styled(format!(" {focus_label} "), theme.selected())];

    if let Some(path) = state.workspace.active_path() {
        let cursor = state.editor.cursor(path);
        spans.push(Span::raw(format!(
            " Ln {}, Col {} ",
            cursor.line + 1,
            cursor.col + 1
        )));
        spans.push(Span::styled(
            format!(" {} ", LanguageId::from_path(path).display_name()),
            Style::default().fg(theme.accent_fg),
        ));
    }
    if state.assistant.is_waiting() {
        spans.push(Span::styled(
            " ● assistant ",
            Style::default().fg(theme.assistant_fg),
        ));
    }

    let hints = [
        (Command::FocusNext, "focus"),
        (Command::ToggleAssistant, "assistant"),
        (Command::Quit, "quit"),
    ];
    for (command, label) in hints {
        if let Some(key) = workbench.keybindings.key_for(KeybindingContext::Global, &command) {
            spans.push(Span::styled(format!(" {key} {label} "), theme.muted()));
        }
    }

    if let Some(last) = workbench.logs.back() {
        spans.push(Span::styled(format!(" {last}"), theme.muted()));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
