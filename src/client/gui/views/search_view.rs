use iced::widget::{Column, Container, Row, Scrollable, Space, Text, TextInput};
use iced::{Alignment, Color, Element, Font, Length};

use crate::client::gui::widgets::{alert, result_card, skeleton};
use crate::client::models::app_state::{ResultsRegion, SearchAppState};
use crate::client::models::messages::Message;

const GRID_COLUMNS: usize = 3;
const MAX_CONTENT_WIDTH: f32 = 1024.0;

const BG_MAIN: Color = Color::from_rgb(0.98, 0.976, 0.984);
const INPUT_BG: Color = Color::WHITE;
const TEXT_PRIMARY: Color = Color::from_rgb(0.09, 0.09, 0.11);
const TEXT_SECONDARY: Color = Color::from_rgb(0.39, 0.45, 0.55);

const EMOJI_FONT: Font = Font::with_name("Segoe UI Emoji");
const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

fn bg_main_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(BG_MAIN)),
        text_color: Some(TEXT_PRIMARY),
        ..Default::default()
    }
}

fn search_box_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(INPUT_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 1.0,
            color: Color::from_rgb(0.85, 0.85, 0.88),
            radius: 8.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 4.0),
            blur_radius: 8.0,
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.08),
        },
    }
}

/// Lays cells out row by row, padding the last row so columns stay aligned.
fn grid<'a>(cells: Vec<Element<'a, Message>>, columns: usize) -> Element<'a, Message> {
    let mut rows = Column::new().spacing(12);
    let mut row = Row::new().spacing(12);
    let mut in_row = 0;

    for cell in cells {
        row = row.push(Container::new(cell).width(Length::FillPortion(1)));
        in_row += 1;
        if in_row == columns {
            rows = rows.push(row);
            row = Row::new().spacing(12);
            in_row = 0;
        }
    }
    if in_row > 0 {
        for _ in in_row..columns {
            row = row.push(Space::with_width(Length::FillPortion(1)));
        }
        rows = rows.push(row);
    }
    rows.into()
}

fn results_region(state: &SearchAppState) -> Element<'_, Message> {
    let cells: Vec<Element<'_, Message>> = match state.results_region() {
        ResultsRegion::Skeletons(count) => (0..count).map(|_| skeleton::view()).collect(),
        ResultsRegion::Cards(cards) => cards.iter().map(result_card::view).collect(),
    };
    grid(cells, GRID_COLUMNS)
}

pub fn view(state: &SearchAppState) -> Element<'_, Message> {
    let search_input = TextInput::new("What do you want to cook today?", &state.search_input)
        .on_input(Message::SearchInputChanged)
        .on_submit(Message::SubmitSearch)
        .padding(10)
        .size(14)
        .width(Length::Fill);

    let search_box = Container::new(
        Row::new()
            .spacing(8)
            .align_items(Alignment::Center)
            .push(Text::new("🔍").font(EMOJI_FONT).size(20))
            .push(search_input),
    )
    .padding([4, 12])
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(search_box_appearance)));

    let mut content = Column::new()
        .spacing(8)
        .max_width(MAX_CONTENT_WIDTH)
        .push(search_box)
        .push(Space::with_height(Length::Fixed(8.0)))
        .push(Text::new("Recommended Recipes").font(BOLD_FONT).size(36).style(TEXT_PRIMARY))
        .push(Text::new("Popular choices").size(14).style(TEXT_SECONDARY));

    if let Some(error) = &state.error_message {
        content = content.push(alert::view(error));
    }

    content = content.push(results_region(state));

    Container::new(
        Scrollable::new(
            Container::new(content)
                .padding(40)
                .width(Length::Fill)
                .center_x(),
        )
        .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(bg_main_appearance)))
    .into()
}
