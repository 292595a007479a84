// Grey placeholder that mimics the shape of a result card
use iced::widget::{Column, Container, Row, Space};
use iced::{Color, Element, Length};

use crate::client::models::messages::Message;

const SKELETON: Color = Color::from_rgb(0.90, 0.90, 0.92);

fn block_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(SKELETON)),
        border: iced::Border {
            radius: 6.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn block<'a>(width: Length, height: f32) -> Element<'a, Message> {
    Container::new(Space::new(Length::Fill, Length::Fill))
        .width(width)
        .height(Length::Fixed(height))
        .style(iced::theme::Container::Custom(Box::new(block_appearance)))
        .into()
}

pub fn view<'a>() -> Element<'a, Message> {
    Column::new()
        .spacing(16)
        .width(Length::Fill)
        .push(block(Length::Fill, 128.0))
        .push(
            Row::new()
                .push(block(Length::Fixed(112.0), 16.0))
                .push(Space::with_width(Length::Fill))
                .push(block(Length::Fixed(96.0), 16.0)),
        )
        .push(
            Row::new()
                .push(block(Length::FillPortion(1), 16.0))
                .push(Space::with_width(Length::FillPortion(1))),
        )
        .into()
}
