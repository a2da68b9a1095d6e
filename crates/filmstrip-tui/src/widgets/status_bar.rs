use filmstrip_core::{Band, Geometry};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Mode};

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let (mode_str, mode_color) = match app.mode() {
            Mode::Playing => ("AUTO", theme.accent),
            Mode::Paused => ("PAUSED", theme.paused),
            Mode::Reduced => ("REDUCED", theme.info),
            Mode::Inert => ("INERT", theme.warning),
        };

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else {
            Self::summary(app)
        };

        let help_hint = " ←/→:step h/l:scroll tab:focus q:quit ";
        let used = mode_str.width() + 2 + status_text.width() + help_hint.width();
        let padding_len = (area.width as usize).saturating_sub(used);

        let bar = Style::default().bg(theme.bg2);
        let line = Line::from(vec![
            Span::styled(format!(" {} ", mode_str), Style::default().fg(theme.bg0).bg(mode_color)),
            Span::styled(status_text, bar.fg(theme.fg0)),
            Span::styled(" ".repeat(padding_len), bar),
            Span::styled(help_hint, bar.fg(theme.grey2)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }

    fn summary(app: &App) -> String {
        let position = match app.active_item() {
            Some(item) => {
                let band = match item.band {
                    Band::Leading => " (leading clone)",
                    Band::Trailing => " (trailing clone)",
                    Band::Primary => "",
                };
                format!("{}/{}{}", item.logical_index + 1, app.logical_len(), band)
            }
            None => "-".to_string(),
        };
        let shift = app
            .strip
            .as_ref()
            .and_then(|strip| strip.loop_shift())
            .map(|shift| format!("{:.0}px", shift))
            .unwrap_or_else(|| "n/a".to_string());
        let focus = if app.has_keyboard_focus() { " | focused" } else { "" };

        format!(
            " Item {} | Scroll {:.0}px | Shift {}{}",
            position,
            app.viewport.scroll_offset(),
            shift,
            focus
        )
    }
}
