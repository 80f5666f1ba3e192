use iced::widget::{
    column, container, horizontal_space, row, scrollable, stack, text, text_editor, Space,
};
use iced::{Background, Border, Element, Font, Length};

use crate::app::{App, Message};
use crate::components;
use crate::keybinds;
use crate::style::{Metrics, EDITOR_PADDING};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        column![self.view_editor_area(), self.view_status_bar()]
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn view_editor_area(&self) -> Element<'_, Message> {
        let config = self.editor.config();
        let metrics = Metrics::new(config.ui.font_size, config.ui.line_height);
        let line_count = self.content.line_count();
        let (cursor_line, _) = self.content.cursor_position();

        let editor_bg = self.theme.background.primary.to_iced();
        let value_color = self.theme.foreground.primary.to_iced();
        let muted_color = self.theme.foreground.muted.to_iced();
        let selection_color = self.theme.background.selection.to_iced();

        // Transparent background so the highlight layer underneath shows
        // through behind the cursor's line.
        let editor = text_editor(&self.content)
            .height(Length::Shrink)
            .padding(EDITOR_PADDING)
            .font(Font::MONOSPACE)
            .size(metrics.font_size)
            .line_height(text::LineHeight::Relative(metrics.line_height))
            .style(move |_theme: &iced::Theme, _status| text_editor::Style {
                background: Background::Color(iced::Color::TRANSPARENT),
                border: Border {
                    width: 0.0,
                    radius: 0.0.into(),
                    color: iced::Color::TRANSPARENT,
                },
                icon: muted_color,
                placeholder: muted_color,
                value: value_color,
                selection: selection_color,
            })
            .key_binding(|key_press| keybinds::binding(&self.editor, key_press))
            .on_action(Message::EditorAction);

        let highlight = components::active_line(
            self.read_only,
            config.ui.highlight_current_line,
            cursor_line,
        )
        .map(|line| components::highlight_layer(line, metrics, &self.theme));

        let body: Element<'_, Message> = match highlight {
            Some(layer) => stack![layer, editor].width(Length::Fill).into(),
            None => editor.into(),
        };

        let mut strip = row![];
        if config.ui.line_numbers {
            strip = strip.push(components::gutter(
                line_count,
                cursor_line,
                metrics,
                &self.theme,
            ));
        }
        strip = strip.push(body);

        // One scrollable owns the whole strip, so the gutter and the text
        // scroll in lock step. The editor itself is Shrink-height and never
        // scrolls on its own.
        let area = scrollable(strip.width(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill);

        container(area)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_| container::Style {
                background: Some(Background::Color(editor_bg)),
                ..Default::default()
            })
            .into()
    }

    fn view_status_bar(&self) -> Element<'_, Message> {
        let (line, column) = self.content.cursor_position();
        let line_count = self.content.line_count();

        let accent = self.theme.foreground.accent.to_iced();
        let primary = self.theme.foreground.primary.to_iced();
        let secondary = self.theme.foreground.secondary.to_iced();
        let bar_bg = self.theme.background.secondary.to_iced();

        let buffer_label = format!(
            "{}{}{}",
            self.name,
            if self.modified { " *" } else { "" },
            if self.read_only { " [RO]" } else { "" },
        );

        let bar = row![
            text(self.editor.mode().label())
                .size(12)
                .font(Font::MONOSPACE)
                .color(accent),
            Space::with_width(16),
            text(buffer_label).size(12).color(primary),
            horizontal_space(),
            text(self.status_message.as_str()).size(12).color(secondary),
            Space::with_width(16),
            text(format!("Ln {}, Col {}", line + 1, column + 1))
                .size(12)
                .color(secondary),
            Space::with_width(16),
            text(format!("{} lines", line_count)).size(12).color(secondary),
        ]
        .align_y(iced::Alignment::Center);

        container(bar)
            .width(Length::Fill)
            .padding(iced::Padding {
                top: 4.0,
                right: 10.0,
                bottom: 4.0,
                left: 10.0,
            })
            .style(move |_| container::Style {
                background: Some(Background::Color(bar_bg)),
                ..Default::default()
            })
            .into()
    }
}
