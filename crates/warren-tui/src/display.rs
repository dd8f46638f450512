//! Frame rendering: blit a composed view buffer into the terminal.

use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use warren_core::player::ViewMode;
use warren_core::view::ViewBuffer;

/// Draw the view buffer centered in the terminal with a help footer.
pub fn render(frame: &mut Frame, buffer: &ViewBuffer, mode: ViewMode) {
    let title = match mode {
        ViewMode::FirstPerson => " warren ",
        ViewMode::Overhead => " warren - map ",
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_bottom(" w/s move  a/d turn  e map  q quit ");

    let lines: Vec<Line> = buffer.rows().map(Line::from).collect();
    let paragraph = Paragraph::new(lines).block(block);

    let area = view_area(frame.area(), buffer.width() as u16 + 2, buffer.height() as u16 + 2);
    frame.render_widget(paragraph, area);
}

/// Center a width x height window in the available area, clipped to it.
fn view_area(available: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(available.width);
    let height = height.min(available.height);
    Rect {
        x: available.x + (available.width - width) / 2,
        y: available.y + (available.height - height) / 2,
        width,
        height,
    }
}
