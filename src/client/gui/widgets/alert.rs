// Error banner shown above the results grid
use iced::widget::{Container, Row, Text};
use iced::{Alignment, Color, Element, Font, Length};

use crate::client::models::messages::Message;

const ERROR_TEXT: Color = Color::from_rgb(0.86, 0.15, 0.15);
const ERROR_BG: Color = Color::from_rgb(1.0, 0.94, 0.94);
const EMOJI_FONT: Font = Font::with_name("Segoe UI Emoji");

fn alert_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(ERROR_BG)),
        text_color: Some(ERROR_TEXT),
        border: iced::Border {
            width: 1.0,
            color: Color::from_rgb(0.98, 0.80, 0.80),
            radius: 8.0.into(),
        },
        shadow: iced::Shadow::default(),
    }
}

pub fn view(msg: &str) -> Element<'_, Message> {
    Container::new(
        Row::new()
            .spacing(8)
            .align_items(Alignment::Center)
            .push(Text::new("⚠️").font(EMOJI_FONT).size(16))
            .push(Text::new(msg).size(14).style(ERROR_TEXT)),
    )
    .padding([8, 12])
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(alert_appearance)))
    .into()
}
