//! The pieces layered around the text widget: the line-number gutter and
//! the current-line highlight.
//!
//! Both are plain widget trees rebuilt on every view pass, so they track the
//! buffer for free: the gutter re-derives its width from the line count, and
//! the highlight follows the cursor.

use iced::widget::{column, container, text, Column, Space};
use iced::{Background, Border, Element, Length};

use strata_core::gutter;

use crate::app::Message;
use crate::style::{Metrics, EDITOR_PADDING};
use crate::theme::Theme;

/// Returns the line to highlight, if any.
///
/// Read-only buffers get no highlight; the emphasis exists to show where
/// typed text will land, which a read-only buffer cannot accept.
pub fn active_line(read_only: bool, enabled: bool, cursor_line: usize) -> Option<usize> {
    if read_only || !enabled {
        None
    } else {
        Some(cursor_line)
    }
}

/// Builds the line-number gutter.
///
/// Width is derived from the digit count of the largest line number, so it
/// grows exactly at powers of ten. Rows use the same font metrics as the
/// editor and scroll with it.
pub fn gutter<'a>(
    line_count: usize,
    cursor_line: usize,
    metrics: Metrics,
    theme: &Theme,
) -> Element<'a, Message> {
    let width = gutter::width(line_count, metrics.digit_advance());

    let number_color = theme.gutter.line_number.to_iced();
    let active_color = theme.gutter.active_line_number.to_iced();
    let background = theme.gutter.background.to_iced();

    let mut numbers: Vec<Element<'a, Message>> = Vec::with_capacity(line_count.max(1));
    for i in 0..line_count.max(1) {
        let color = if i == cursor_line {
            active_color
        } else {
            number_color
        };
        numbers.push(
            text(format!("{}", i + 1))
                .size(metrics.font_size)
                .line_height(text::LineHeight::Relative(metrics.line_height))
                .font(iced::Font::MONOSPACE)
                .color(color)
                .width(Length::Fill)
                .align_x(iced::alignment::Horizontal::Right)
                .into(),
        );
    }

    container(Column::with_children(numbers).spacing(0))
        .width(Length::Fixed(width))
        .padding(iced::Padding {
            top: EDITOR_PADDING,
            right: gutter::PADDING,
            bottom: EDITOR_PADDING,
            left: 0.0,
        })
        .style(move |_: &iced::Theme| container::Style {
            background: Some(Background::Color(background)),
            ..Default::default()
        })
        .into()
}

/// Builds the full-width current-line highlight layer.
///
/// Rendered underneath a transparent-background text editor, so the band
/// shows through behind the text of the cursor's line only.
pub fn highlight_layer<'a>(line: usize, metrics: Metrics, theme: &Theme) -> Element<'a, Message> {
    let row_height = metrics.row_height();
    let offset = EDITOR_PADDING + line as f32 * row_height;
    let color = theme.background.line_highlight.to_iced();

    column![
        Space::new(Length::Shrink, Length::Fixed(offset)),
        container(Space::new(Length::Fill, Length::Fixed(row_height))).style(
            move |_: &iced::Theme| container::Style {
                background: Some(Background::Color(color)),
                border: Border::default(),
                ..Default::default()
            }
        ),
    ]
    .width(Length::Fill)
    .into()
}
