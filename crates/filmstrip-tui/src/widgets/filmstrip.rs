use filmstrip_core::Geometry;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::app::App;

/// Horizontal strip of cards, sized and faded by focus weight
pub struct FilmstripWidget;

impl FilmstripWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        frame.render_widget(Block::default().style(Style::default().bg(theme.bg0)), area);
        if area.width == 0 || area.height == 0 {
            return;
        }

        let viewport = &app.viewport;
        let layout = viewport.layout();
        let card_cols = viewport.to_columns(layout.item_width).max(1);
        let active = app.active_slot();
        let base_height = app.config.ui.item_height.max(3) as f64;

        let visible = layout.visible_slots(viewport.scroll_offset(), viewport.viewport_width());

        for slot in visible {
            let left = viewport.to_column(layout.offset(slot));
            let weight = app.weight(slot);
            let height = (base_height * weight.scale).round().max(3.0) as u16;
            let Some(card) = Self::clip(area, left, card_cols, height) else {
                continue;
            };

            let is_active = active == Some(slot);
            let border_color = if is_active { theme.accent } else { theme.grey1 };
            let text_color = if is_active { theme.fg1 } else { theme.fg0 };

            let mut borders = Borders::TOP | Borders::BOTTOM;
            if left >= 0 {
                borders |= Borders::LEFT;
            }
            if left + card_cols <= area.width as i32 {
                borders |= Borders::RIGHT;
            }

            let block = Block::default()
                .borders(borders)
                .border_style(Style::default().fg(theme.fade(border_color, weight.opacity)))
                .style(Style::default().bg(theme.bg1));

            let label = truncate(app.label(slot), card.width.saturating_sub(2) as usize);
            let mut title_style = Style::default().fg(theme.fade(text_color, weight.opacity));
            if is_active {
                title_style = title_style.add_modifier(Modifier::BOLD);
            }

            let mut lines = Vec::new();
            let inner_rows = card.height.saturating_sub(2) as usize;
            // Vertically center the label inside the card
            let pad = inner_rows.saturating_sub(2) / 2;
            lines.extend(std::iter::repeat(Line::default()).take(pad));
            lines.push(Line::from(Span::styled(label, title_style)));
            if inner_rows >= 2 {
                lines.push(Line::from(Span::styled(
                    Self::caption(app, slot),
                    Style::default().fg(theme.fade(theme.grey2, weight.opacity)),
                )));
            }

            let paragraph = Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(paragraph, card);
        }
    }

    /// Screen rect of a card whose left edge is `left` columns into `area`,
    /// cut to the area. `None` when nothing of it is on screen.
    fn clip(area: Rect, left: i32, width: i32, height: u16) -> Option<Rect> {
        let start = left.max(0);
        let end = (left + width).min(area.width as i32);
        if end <= start {
            return None;
        }
        let height = height.min(area.height);
        Some(Rect {
            x: area.x + start as u16,
            y: area.y + (area.height - height) / 2,
            width: (end - start) as u16,
            height,
        })
    }

    fn caption(app: &App, slot: usize) -> String {
        match app.strip.as_ref().and_then(|s| s.registry().item(slot)) {
            Some(item) if item.band.is_clone() => format!("#{} ·", item.logical_index + 1),
            Some(item) => format!("#{}", item.logical_index + 1),
            None => format!("#{}", slot + 1),
        }
    }
}

/// Cut `text` to at most `max` display columns, marking the cut with an ellipsis
fn truncate(text: &str, max: usize) -> String {
    let width: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if width <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_respects_display_width() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("Longer title", 6), "Longe…");
        assert_eq!(truncate("日本語タイトル", 5), "日本…");
        assert_eq!(truncate("anything", 0), "");
    }

    #[test]
    fn test_clip_cuts_at_edges() {
        let area = Rect::new(2, 1, 40, 10);
        assert_eq!(
            FilmstripWidget::clip(area, -5, 24, 6),
            Some(Rect::new(2, 3, 19, 6))
        );
        assert_eq!(
            FilmstripWidget::clip(area, 30, 24, 12),
            Some(Rect::new(32, 1, 10, 10))
        );
        assert_eq!(FilmstripWidget::clip(area, -24, 24, 6), None);
        assert_eq!(FilmstripWidget::clip(area, 40, 24, 6), None);
    }
}
