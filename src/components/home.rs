//! Home component - Main application screen
//!
//! Displays the countdown header, collection tabs, the active tab's entry
//! list, budget totals, and the status/help bars. Owns navigation state.

use crate::action::Action;
use crate::component::Component;
use crate::components::calculate_main_layout;
use crate::model::budget::format_amount;
use crate::model::modal::{AmountField, ImportKind};
use crate::model::{AppState, Tab, TaskStatus};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

// ═══════════════════════════════════════════════════════════════════════════════
// Home Component
// ═══════════════════════════════════════════════════════════════════════════════

/// Home component for the main application view
///
/// Owns the active tab and list selection; the planning data itself lives on
/// `App` and is passed in for rendering.
pub struct HomeComponent {
    /// Current active tab
    pub active_tab: Tab,

    /// List selection state for the active tab
    pub list_state: ListState,
}

impl Default for HomeComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeComponent {
    pub fn new() -> Self {
        Self {
            active_tab: Tab::Tasks,
            list_state: ListState::default(),
        }
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.list_state.selected()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    /// Switch to the next tab; selection restarts at the top
    pub fn next_tab(&mut self, len_of_new_tab: impl Fn(Tab) -> usize) {
        let tabs = Tab::all();
        let current = tabs.iter().position(|t| *t == self.active_tab).unwrap();
        self.active_tab = tabs[(current + 1) % tabs.len()];
        self.select_first(len_of_new_tab(self.active_tab));
    }

    /// Switch to the previous tab; selection restarts at the top
    pub fn previous_tab(&mut self, len_of_new_tab: impl Fn(Tab) -> usize) {
        let tabs = Tab::all();
        let current = tabs.iter().position(|t| *t == self.active_tab).unwrap();
        let prev = if current == 0 { tabs.len() - 1 } else { current - 1 };
        self.active_tab = tabs[prev];
        self.select_first(len_of_new_tab(self.active_tab));
    }

    /// Select the next item, wrapping to the top
    pub fn next(&mut self, len: usize) {
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let next = match self.list_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.list_state.select(Some(next));
    }

    /// Select the previous item, wrapping to the bottom
    pub fn previous(&mut self, len: usize) {
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let prev = match self.list_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(prev));
    }

    pub fn select_first(&mut self, len: usize) {
        self.list_state.select(if len == 0 { None } else { Some(0) });
    }

    pub fn select_last(&mut self, len: usize) {
        self.list_state
            .select(if len == 0 { None } else { Some(len - 1) });
    }

    /// Keep the selection valid after a deletion or import changed the list
    pub fn clamp_selection(&mut self, len: usize) {
        match self.list_state.selected() {
            _ if len == 0 => self.list_state.select(None),
            Some(i) if i >= len => self.list_state.select(Some(len - 1)),
            None => self.list_state.select(Some(0)),
            _ => {}
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for HomeComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            // Navigation
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextItem),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevItem),
            KeyCode::Tab => Some(Action::NextTab),
            KeyCode::BackTab => Some(Action::PrevTab),
            KeyCode::Char('g') => Some(Action::FirstItem),
            KeyCode::Char('G') => Some(Action::LastItem),

            // Entry operations
            KeyCode::Char('a') => match self.active_tab {
                Tab::Tasks => Some(Action::OpenTaskEntry),
                Tab::Roster => Some(Action::OpenRosterForm),
                Tab::Budget => Some(Action::OpenBudgetForm),
            },
            KeyCode::Char('x') | KeyCode::Delete => Some(Action::DeleteEntry),
            KeyCode::Char(' ') if self.active_tab == Tab::Tasks => Some(Action::CycleStatus),
            KeyCode::Char('c') if self.active_tab == Tab::Tasks => Some(Action::ClearDone),
            KeyCode::Char('e') if self.active_tab == Tab::Budget => {
                Some(Action::OpenAmountEdit(AmountField::Estimated))
            }
            KeyCode::Char('u') if self.active_tab == Tab::Budget => {
                Some(Action::OpenAmountEdit(AmountField::Actual))
            }

            // Event date
            KeyCode::Char('d') => Some(Action::OpenEventDate),

            // Persistence
            KeyCode::Char('s') => Some(Action::SaveState),
            KeyCode::Char('r') => Some(Action::OpenResetDialog),

            // Import / Export
            KeyCode::Char('E') => Some(Action::ExportCsv),
            KeyCode::Char('J') => Some(Action::ExportJson),
            KeyCode::Char('I') => Some(Action::OpenImport(ImportKind::StateJson)),
            KeyCode::Char('R') => Some(Action::OpenImport(ImportKind::RosterCsv)),

            // Dialogs
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),

            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing is done through draw_home_screen which takes full context
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering Functions
// ═══════════════════════════════════════════════════════════════════════════════

/// Context needed for rendering the home screen
pub struct HomeRenderContext<'a> {
    pub state: &'a AppState,
    /// Countdown label, recomputed by the caller on every draw
    pub countdown: &'a str,
    /// Formatted event date line, if a date is set
    pub event_date_line: Option<&'a str>,
    pub error: Option<&'a str>,
    pub status_message: Option<&'a str>,
}

/// Draw the home screen
pub fn draw_home_screen(
    frame: &mut Frame,
    area: Rect,
    home: &mut HomeComponent,
    ctx: &HomeRenderContext,
) -> Result<()> {
    let layout = calculate_main_layout(area);

    render_header(frame, layout.header, ctx);
    render_tabs(frame, layout.tabs, home);
    match home.active_tab {
        Tab::Tasks => render_task_list(frame, layout.list, home, ctx),
        Tab::Roster => render_roster_list(frame, layout.list, home, ctx),
        Tab::Budget => render_budget_list(frame, layout.list, home, ctx),
    }
    render_status_bar(frame, layout.status, ctx);
    render_help_bar(frame, layout.help, home);

    Ok(())
}

fn render_header(frame: &mut Frame, area: Rect, ctx: &HomeRenderContext) {
    let mut lines = vec![Line::from(vec![
        Span::styled("Countdown: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            ctx.countdown,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ])];

    if let Some(date_line) = ctx.event_date_line {
        lines.push(Line::from(Span::styled(
            date_line,
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "No event date set - press 'd'",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Event Planner ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(paragraph, area);
}

fn render_tabs(frame: &mut Frame, area: Rect, home: &HomeComponent) {
    let all_tabs = Tab::all();
    let titles: Vec<&str> = all_tabs.iter().map(|t| t.name()).collect();
    let selected = all_tabs
        .iter()
        .position(|t| *t == home.active_tab)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::BOTTOM))
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

fn status_style(status: TaskStatus) -> Style {
    match status {
        TaskStatus::Pending => Style::default().fg(Color::Yellow),
        TaskStatus::InProgress => Style::default().fg(Color::Cyan),
        TaskStatus::Done => Style::default().fg(Color::Green),
    }
}

fn render_task_list(frame: &mut Frame, area: Rect, home: &mut HomeComponent, ctx: &HomeRenderContext) {
    let name_width = (area.width as usize).saturating_sub(30).max(10);

    let items: Vec<ListItem> = ctx
        .state
        .tasks
        .iter()
        .map(|task| {
            let due = if task.deadline.is_empty() {
                "—".to_string()
            } else {
                task.deadline.clone()
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("[{:^11}] ", task.status.name()),
                    status_style(task.status),
                ),
                Span::styled(
                    truncate_to_width(&task.task, name_width),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!("  {} • {} • due {}", task.category, task.owner, due),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    render_entry_list(frame, area, home, items, "Tasks", ctx.state.tasks.len());
}

fn render_roster_list(
    frame: &mut Frame,
    area: Rect,
    home: &mut HomeComponent,
    ctx: &HomeRenderContext,
) {
    let items: Vec<ListItem> = ctx
        .state
        .roster
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    entry.name.clone(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {} • {}", entry.role, entry.contact),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    render_entry_list(frame, area, home, items, "Roster", ctx.state.roster.len());
}

fn render_budget_list(
    frame: &mut Frame,
    area: Rect,
    home: &mut HomeComponent,
    ctx: &HomeRenderContext,
) {
    let mut items: Vec<ListItem> = ctx
        .state
        .budget
        .iter()
        .map(|item| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    item.item.clone(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}", item.category),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!(
                        "  est {}  act {}",
                        format_amount(item.estimated),
                        format_amount(item.actual)
                    ),
                    Style::default().fg(Color::Cyan),
                ),
            ]))
        })
        .collect();

    // Totals footer, recomputed on every render
    let totals = ctx.state.budget_totals();
    items.push(ListItem::new(Line::from("")));
    items.push(ListItem::new(Line::from(Span::styled(
        format!(
            "Total estimated: {}   Total actual: {}",
            format_amount(totals.estimated),
            format_amount(totals.actual)
        ),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))));

    render_entry_list(frame, area, home, items, "Budget", ctx.state.budget.len());
}

fn render_entry_list(
    frame: &mut Frame,
    area: Rect,
    home: &mut HomeComponent,
    items: Vec<ListItem>,
    name: &str,
    count: usize,
) {
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ({}) ", name, count))
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(list, area, &mut home.list_state);
}

fn render_status_bar(frame: &mut Frame, area: Rect, ctx: &HomeRenderContext) {
    let line = if let Some(error) = ctx.error {
        Line::from(Span::styled(
            format!(" {} ", error),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),
        ))
    } else if let Some(message) = ctx.status_message {
        Line::from(Span::styled(
            format!(" {} ", message),
            Style::default().fg(Color::Black).bg(Color::Green),
        ))
    } else {
        Line::from("")
    };

    frame.render_widget(Paragraph::new(line), area);
}

fn render_help_bar(frame: &mut Frame, area: Rect, home: &HomeComponent) {
    let tab_hints = match home.active_tab {
        Tab::Tasks => "a add  Space status  c clear done  x delete",
        Tab::Roster => "a add  x delete  R import CSV",
        Tab::Budget => "a add  e estimate  u actual  x delete",
    };

    let line = Line::from(vec![
        Span::styled(tab_hints, Style::default().fg(Color::White)),
        Span::styled(
            "  │  Tab switch  d date  s save  E/J export  I import  r reset  ? help  q quit",
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(paragraph, area);
}

/// Truncate a string to a display width, appending an ellipsis when cut
fn truncate_to_width(s: &str, max: usize) -> String {
    if UnicodeWidthStr::width(s) <= max {
        return s.to_string();
    }

    let mut out = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + ch_width > max.saturating_sub(1) {
            break;
        }
        out.push(ch);
        width += ch_width;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_wraps_both_ways() {
        let mut home = HomeComponent::new();
        home.select_first(3);
        assert_eq!(home.selected_index(), Some(0));

        home.previous(3);
        assert_eq!(home.selected_index(), Some(2));
        home.next(3);
        assert_eq!(home.selected_index(), Some(0));
    }

    #[test]
    fn test_clamp_selection_after_shrink() {
        let mut home = HomeComponent::new();
        home.select_last(5);
        home.clamp_selection(2);
        assert_eq!(home.selected_index(), Some(1));
        home.clamp_selection(0);
        assert_eq!(home.selected_index(), None);
    }

    #[test]
    fn test_tab_switch_resets_selection() {
        let mut home = HomeComponent::new();
        home.select_last(5);
        home.next_tab(|_| 2);
        assert_eq!(home.active_tab, Tab::Roster);
        assert_eq!(home.selected_index(), Some(0));

        home.previous_tab(|_| 0);
        assert_eq!(home.active_tab, Tab::Tasks);
        assert_eq!(home.selected_index(), None);
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("a very long task name", 8), "a very …");
    }
}
