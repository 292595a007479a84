// Card for a single recipe: image, title, publisher and a few facts.
use iced::widget::image::Handle;
use iced::widget::{Button, Column, Container, Image, Row, Text};
use iced::{Alignment, Color, ContentFit, Element, Font, Length};

use crate::client::models::app_state::{CardModel, ImageSlot};
use crate::client::models::messages::Message;
use crate::common::models::Recipe;
use crate::common::palette::CardColors;

const IMAGE_HEIGHT: f32 = 128.0;
const PLACEHOLDER_BG: Color = Color::from_rgb(0.88, 0.88, 0.90);
const MUTED_TEXT: Color = Color::from_rgb(0.40, 0.40, 0.45);
const EMOJI_FONT: Font = Font::with_name("Segoe UI Emoji");
const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

fn placeholder_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(PLACEHOLDER_BG)),
        text_color: Some(MUTED_TEXT),
        border: iced::Border {
            radius: 6.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn image_area(slot: &ImageSlot) -> Element<'_, Message> {
    match slot {
        ImageSlot::Loaded(handle) => Image::<Handle>::new(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(IMAGE_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        ImageSlot::Loading => placeholder(Text::new("…").size(20).into()),
        ImageSlot::Broken => placeholder(
            Column::new()
                .align_items(Alignment::Center)
                .spacing(4)
                .push(Text::new("🖼️").font(EMOJI_FONT).size(24))
                .push(Text::new("Image unavailable").size(12))
                .into(),
        ),
    }
}

fn placeholder(content: Element<'_, Message>) -> Element<'_, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(IMAGE_HEIGHT))
        .center_x()
        .center_y()
        .style(iced::theme::Container::Custom(Box::new(placeholder_appearance)))
        .into()
}

fn badge<'a>(label: &'a str, colors: CardColors) -> Element<'a, Message> {
    let text_color = colors.text;
    Container::new(Text::new(label).size(11).style(text_color))
        .padding([2, 8])
        .style(iced::theme::Container::Custom(Box::new(move |_: &iced::Theme| {
            iced::widget::container::Appearance {
                background: Some(iced::Background::Color(Color { a: 0.12, ..text_color })),
                border: iced::Border {
                    radius: 10.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        })))
        .into()
}

/// "620 kcal / serving · 45 min", or `None` when the provider gave neither.
pub fn facts_line(recipe: &Recipe) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(kcal) = recipe.calories_per_serving() {
        parts.push(format!("{:.0} kcal / serving", kcal));
    }
    if let Some(minutes) = recipe.total_minutes() {
        parts.push(format!("{} min", minutes));
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" · "))
    }
}

pub fn view(card: &CardModel) -> Element<'_, Message> {
    let recipe = &card.recipe;
    let colors = card.colors;

    let mut title = Button::new(Text::new(&recipe.label).font(BOLD_FONT).size(16).style(colors.text))
        .style(iced::theme::Button::Text)
        .padding(0);
    if !recipe.url.is_empty() {
        title = title.on_press(Message::OpenRecipe(recipe.url.clone()));
    }

    let badges = recipe
        .cuisine_type
        .iter()
        .chain(recipe.meal_type.iter())
        .take(3)
        .fold(Row::new().spacing(6), |row, label| row.push(badge(label, colors)));

    let mut content = Column::new()
        .spacing(8)
        .push(image_area(&card.image))
        .push(title)
        .push(badges);

    if !recipe.source.is_empty() {
        content = content.push(Text::new(format!("by {}", recipe.source)).size(12).style(MUTED_TEXT));
    }
    if let Some(facts) = facts_line(recipe) {
        content = content.push(Text::new(facts).size(12).style(colors.text));
    }

    let background = colors.background;
    Container::new(content.padding(12))
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(move |_: &iced::Theme| {
            iced::widget::container::Appearance {
                background: Some(iced::Background::Color(background)),
                text_color: None,
                border: iced::Border {
                    width: 0.0,
                    color: Color::TRANSPARENT,
                    radius: 10.0.into(),
                },
                shadow: iced::Shadow {
                    offset: iced::Vector::new(0.0, 2.0),
                    blur_radius: 6.0,
                    color: Color::from_rgba(0.0, 0.0, 0.0, 0.12),
                },
            }
        })))
        .into()
}
