//! Notice popup widget.
//!
//! One-shot user-visible notices (permission denials, unexpected failures).
//! Dismissed by any key; there is no retry path behind a notice.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

/// Notice severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Informational notice.
    Info,
    /// Warning notice.
    Warn,
    /// Error notice.
    Error,
}

/// A pending notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Popup title.
    pub title: String,
    /// Popup body.
    pub message: String,
    /// Severity.
    pub level: NoticeLevel,
}

impl Notice {
    /// Creates a warning notice.
    #[must_use]
    pub fn warn(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            level: NoticeLevel::Warn,
        }
    }

    /// Creates an error notice.
    #[must_use]
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            level: NoticeLevel::Error,
        }
    }
}

/// Widget rendering a notice in the top-right corner.
pub struct NoticePopup<'a> {
    notice: &'a Notice,
}

impl<'a> NoticePopup<'a> {
    /// Creates a popup for the notice.
    #[must_use]
    pub const fn new(notice: &'a Notice) -> Self {
        Self { notice }
    }
}

impl Widget for NoticePopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" {} ", self.notice.title);
        let message = &self.notice.message;

        let max_popup_width = 50.min(area.width.saturating_sub(2));
        let width = u16::try_from(message.width())
            .unwrap_or(u16::MAX)
            .max(u16::try_from(title.width()).unwrap_or(0))
            .saturating_add(4)
            .min(max_popup_width);

        let inner_width = width.saturating_sub(2).max(1);
        let content_width = u16::try_from(message.width()).unwrap_or(0);
        let lines = content_width.div_ceil(inner_width);
        let height = lines.saturating_add(2).clamp(3, 8);

        let x = area.width.saturating_sub(width).saturating_sub(2);
        let popup_area = Rect::new(x, 1, width, height);

        let intersection = area.intersection(popup_area);
        if intersection.area() == 0 {
            return;
        }

        let color = match self.notice.level {
            NoticeLevel::Info => Color::Cyan,
            NoticeLevel::Warn => Color::Yellow,
            NoticeLevel::Error => Color::Red,
        };

        Clear.render(intersection, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(title)
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

        let paragraph = Paragraph::new(message.as_str())
            .block(block)
            .wrap(Wrap { trim: true });

        paragraph.render(intersection, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::widgets::testing::render_to_text;

    #[test]
    fn popup_shows_title_and_message() {
        let notice = Notice::warn("Permiso denegado", "No se pudo acceder a la camara");
        let text = render_to_text(NoticePopup::new(&notice), 60, 8);

        assert!(text.contains("Permiso denegado"));
        assert!(text.contains("camara"));
    }
}
