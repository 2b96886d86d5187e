use iced::font::Weight;
use iced::widget::{Space, button, column, container, row, text};
use iced::{Background, Border, Color, Element, Font, Length, Theme};

use crate::surface::{Slot, ToastElements};

const TOAST_WIDTH: f32 = 360.0;

/// Maps a style marker to its color, for the markers the toast uses.
pub fn marker_color(marker: &str) -> Option<Color> {
    let color = match marker {
        "bg-green-100" => Color::from_rgb8(0xdc, 0xfc, 0xe7),
        "border-green-400" => Color::from_rgb8(0x4a, 0xde, 0x80),
        "bg-red-100" => Color::from_rgb8(0xfe, 0xe2, 0xe2),
        "border-red-400" => Color::from_rgb8(0xf8, 0x71, 0x71),
        _ => return None,
    };
    Some(color)
}

/// Background and border colors for the toast's category markers.
pub fn colors(elements: &ToastElements) -> (Color, Color) {
    let category_colors = elements.category().map(|category| {
        let mut colors = category.markers().iter().filter_map(|m| marker_color(m));
        (colors.next(), colors.next())
    });

    match category_colors {
        Some((Some(background), Some(border))) => (background, border),
        _ => (Color::WHITE, Color::from_rgb8(0xd1, 0xd5, 0xdb)),
    }
}

pub fn view<'a, Message: Clone + 'a>(
    elements: &'a ToastElements,
    on_dismiss: Message,
) -> Element<'a, Message> {
    if !elements.is_shown() {
        return Space::new(Length::Shrink, Length::Shrink).into();
    }

    let (background, border) = colors(elements);

    let heading = text(elements.text(Slot::Title)).size(18).font(Font {
        weight: Weight::Bold,
        ..Font::default()
    });

    let content = row![
        text(elements.text(Slot::Icon)).size(24),
        column![heading, text(elements.text(Slot::Message))]
            .spacing(4)
            .width(Length::Fill),
        button(text("×")).on_press(on_dismiss).padding([2, 8]),
    ]
    .spacing(12);

    container(content)
        .width(Length::Fixed(TOAST_WIDTH))
        .padding(12)
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(background)),
            border: Border {
                color: border,
                width: 1.0,
                radius: 6.0.into(),
            },
            text_color: Some(Color::BLACK),
            ..container::Style::default()
        })
        .into()
}
