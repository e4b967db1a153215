use crate::models::Advisory;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget, Wrap},
};

pub struct AdvisoriesScreen<'a> {
    pub advisories: &'a [Advisory],
    pub selected_index: usize,
}

impl<'a> AdvisoriesScreen<'a> {
    pub fn new(advisories: &'a [Advisory]) -> Self {
        Self {
            advisories,
            selected_index: 0,
        }
    }

    pub fn with_selection(mut self, index: usize) -> Self {
        self.selected_index = index;
        self
    }
}

impl Widget for AdvisoriesScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Min(10),   // Content
                Constraint::Length(1), // Nav
            ])
            .split(area);

        let title = Line::from(vec![
            Span::styled("Advisories", Theme::title()),
            Span::styled(format!(" ({})", self.advisories.len()), Theme::dim()),
        ]);
        Paragraph::new(title).render(chunks[0], buf);

        let content = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(chunks[1]);

        self.render_list(content[0], buf);
        self.render_details(content[1], buf);

        let nav = Line::from(vec![
            Span::styled("[↑↓]", Theme::nav_key()),
            Span::styled("Navigate ", Theme::nav_label()),
            Span::styled("[r]", Theme::nav_key()),
            Span::styled("Refresh ", Theme::nav_label()),
            Span::styled("[Esc]", Theme::nav_key()),
            Span::styled("Back", Theme::nav_label()),
        ]);
        Paragraph::new(nav).render(chunks[2], buf);
    }
}

impl AdvisoriesScreen<'_> {
    fn render_list(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Active")
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        if self.advisories.is_empty() {
            Paragraph::new(Span::styled("No active advisories", Theme::dim())).render(inner, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .advisories
            .iter()
            .enumerate()
            .map(|(i, advisory)| {
                let style = if i == self.selected_index {
                    Theme::selected()
                } else {
                    Style::default()
                };

                let color_style = Style::default().fg(advisory.color.color());
                let line = Line::from(vec![
                    Span::styled(format!("{} ", advisory.color.symbol()), color_style),
                    Span::styled(advisory.category.as_str(), color_style),
                ]);

                ListItem::new(line).style(style)
            })
            .collect();

        List::new(items).render(inner, buf);
    }

    fn render_details(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Details")
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let advisory = match self.advisories.get(self.selected_index) {
            Some(a) => a,
            None => {
                Paragraph::new(Span::styled(
                    "Select an advisory to view details",
                    Theme::dim(),
                ))
                .render(inner, buf);
                return;
            }
        };

        let color = advisory.color.color();
        let lines = vec![
            Line::from(Span::styled(advisory.title.clone(), Theme::header())),
            Line::default(),
            Line::from(vec![
                Span::styled("Category: ", Theme::dim()),
                Span::styled(advisory.category.as_str(), Style::default().fg(color)),
                Span::styled("  Severity: ", Theme::dim()),
                Span::styled(advisory.color.as_str(), Style::default().fg(color)),
            ]),
            Line::default(),
            Line::from(Span::styled(advisory.message.clone(), Theme::normal())),
        ];

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
