//! Frame rendering for the tab panel.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Tabs},
    Frame,
};

use super::panel::PanelApp;
use crate::render::span::to_line;
use crate::shell::Session;
use crate::theme::Theme;

/// Areas of the panel; `None` for parts hidden by the current mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelLayout {
    pub tab_bar: Option<Rect>,
    pub output: Option<Rect>,
    pub footer: Rect,
}

/// Split the frame according to the minimized/expanded flags.
///
/// - normal: tab bar, output, footer
/// - expanded: output, footer
/// - minimized: tab bar, footer
pub fn build_layout(area: Rect, minimized: bool, expanded: bool) -> PanelLayout {
    if minimized {
        let chunks = Layout::vertical([Constraint::Length(1), Constraint::Min(0), Constraint::Length(1)])
            .split(area);
        return PanelLayout {
            tab_bar: Some(chunks[0]),
            output: None,
            footer: chunks[2],
        };
    }
    if expanded {
        let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(area);
        return PanelLayout {
            tab_bar: None,
            output: Some(chunks[0]),
            footer: chunks[1],
        };
    }
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .split(area);
    PanelLayout {
        tab_bar: Some(chunks[0]),
        output: Some(chunks[1]),
        footer: chunks[2],
    }
}

pub fn render(frame: &mut Frame, app: &PanelApp) {
    let layout = build_layout(
        frame.area(),
        app.panel.is_minimized(),
        app.panel.is_expanded(),
    );

    if let Some(area) = layout.tab_bar {
        render_tab_bar(frame, app, area);
    }
    if let Some(area) = layout.output {
        render_output(frame, app, area);
    }
    render_footer(frame, app, layout.footer);
}

fn render_tab_bar(frame: &mut Frame, app: &PanelApp, area: Rect) {
    let titles: Vec<String> = app
        .panel
        .tabs()
        .iter()
        .map(|t| format!(" {} ", t.title))
        .collect();
    let selected = app
        .panel
        .tabs()
        .iter()
        .position(|t| t.id == app.panel.active_id())
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(app.theme.tab_inactive_style())
        .highlight_style(app.theme.tab_active_style())
        .divider("│");
    frame.render_widget(tabs, area);
}

fn render_output(frame: &mut Frame, app: &PanelApp, area: Rect) {
    let session = &app.panel.active().session;
    let mut lines: Vec<Line> = session
        .styled_lines(&app.tokenizer)
        .iter()
        .map(|tokens| to_line(tokens))
        .collect();
    lines.push(prompt_line(session, &app.theme));

    // Keep the prompt in view
    let scroll = lines.len().saturating_sub(area.height as usize);
    let scroll = u16::try_from(scroll).unwrap_or(u16::MAX);
    let output = Paragraph::new(lines)
        .style(app.theme.text_style())
        .scroll((scroll, 0));
    frame.render_widget(output, area);
}

/// Prompt, input, and a block cursor over the character at the cursor.
pub fn prompt_line(session: &Session, theme: &Theme) -> Line<'static> {
    let (before, after) = session.split_input();
    let mut rest = after.chars();
    let under_cursor = rest.next().map_or(" ".to_string(), |c| c.to_string());

    Line::from(vec![
        Span::raw(format!("{}{}", session.prompt(), before)),
        Span::styled(under_cursor, theme.cursor_style()),
        Span::raw(rest.as_str().to_string()),
    ])
}

fn render_footer(frame: &mut Frame, app: &PanelApp, area: Rect) {
    let theme = &app.theme;
    let footer = match &app.status {
        Some(message) => Line::from(Span::styled(format!(" {}", message), theme.error_style())),
        None => Line::from(vec![
            Span::styled(" ^T", theme.accent_bold_style()),
            Span::styled(" new  ", theme.text_secondary_style()),
            Span::styled("^W", theme.accent_bold_style()),
            Span::styled(" close  ", theme.text_secondary_style()),
            Span::styled("Tab", theme.accent_bold_style()),
            Span::styled(" switch  ", theme.text_secondary_style()),
            Span::styled("F10/F11", theme.accent_bold_style()),
            Span::styled(" min/max  ", theme.text_secondary_style()),
            Span::styled("Esc", theme.accent_bold_style()),
            Span::styled(" quit", theme.text_secondary_style()),
        ]),
    };
    frame.render_widget(Paragraph::new(footer), area);
}
