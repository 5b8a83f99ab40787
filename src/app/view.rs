use super::messages::Message;
use super::state::{App, DOCUMENT_SCROLL_ID, MARKER_RAIL_WIDTH, TOP_BAR_HEIGHT};
use crate::markers::MARKER_KINDS;
use crate::scrollmap::SECTION_COUNT;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{
    Column, Space, button, column, container, horizontal_space, mouse_area, pick_list, row,
    scrollable, text,
};
use iced::{Color, Element, Length, Theme};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let top_bar = self.top_bar();

        let mut body = row![self.document_area()].spacing(4);
        if !self.config.marker_kind.is_none() {
            body = body.push(self.marker_rail());
        }
        body = body.push(self.indicator_track());

        column![top_bar, body.height(Length::Fill)].into()
    }

    fn top_bar(&self) -> Element<'_, Message> {
        let page_caption = if self.map.page_count() > 0 {
            format!("Page {} of {}", self.map.current_page(), self.map.page_count())
        } else {
            String::from("Loading…")
        };

        let theme_label = match self.config.theme {
            crate::config::ThemeMode::Day => "Night Mode",
            crate::config::ThemeMode::Night => "Day Mode",
        };

        let bar = row![
            text(self.document.display_name()).size(16),
            text(page_caption).size(14),
            horizontal_space(),
            pick_list(
                MARKER_KINDS,
                Some(self.config.marker_kind),
                Message::MarkerKindChanged,
            )
            .text_size(14),
            button(theme_label).on_press(Message::ToggleTheme),
        ]
        .spacing(12)
        .align_y(Vertical::Center)
        .width(Length::Fill);

        container(bar)
            .height(Length::Fixed(TOP_BAR_HEIGHT))
            .padding([8, 12])
            .into()
    }

    /// The document surface: one placeholder frame per page, each exactly
    /// one viewport tall so the content height matches the mapper's extent.
    fn document_area(&self) -> Element<'_, Message> {
        if let Some(error) = &self.document.load_error {
            return container(
                text(format!("Could not open this document.\n\n{error}"))
                    .size(16)
                    .style(|theme: &Theme| text::Style {
                        color: Some(theme.extended_palette().danger.base.color),
                    }),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .into();
        }

        let viewport = self.map.viewport_height();
        let mut pages = Column::new().width(Length::Fill);
        for page in 1..=self.map.page_count().max(1) {
            pages = pages.push(
                container(text(format!("Page {page}")).size(18))
                    .width(Length::Fill)
                    .height(Length::Fixed(viewport))
                    .align_x(Horizontal::Center)
                    .align_y(Vertical::Center)
                    .style(container::bordered_box),
            );
        }

        scrollable(pages)
            .on_scroll(|viewport| Message::Scrolled {
                offset: viewport.absolute_offset().y,
                viewport_height: viewport.bounds().height,
                content_height: viewport.content_bounds().height,
            })
            .id(DOCUMENT_SCROLL_ID.clone())
            .direction(scrollable::Direction::Vertical(
                // The custom indicator replaces the native scrollbar.
                scrollable::Scrollbar::new().width(0.0).scroller_width(0.0),
            ))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn marker_rail(&self) -> Element<'_, Message> {
        let kind = self.config.marker_kind;
        let mut rail = Column::new()
            .width(Length::Fixed(MARKER_RAIL_WIDTH))
            .height(Length::Fill)
            .align_x(Horizontal::Center);

        for index in 0..SECTION_COUNT {
            let Some(label) = kind.label(index) else {
                continue;
            };
            let opacity = self.map.marker_opacity(index);
            let accent = kind.accent(index);
            let marker = text(label)
                .size(15)
                .style(move |theme: &Theme| text::Style {
                    color: Some(match accent {
                        Some(color) => Color { a: opacity, ..color },
                        None => Color {
                            a: opacity,
                            ..theme.palette().text
                        },
                    }),
                });

            rail = rail.push(
                container(
                    button(marker)
                        .style(button::text)
                        .padding(2)
                        .on_press(Message::MarkerPressed(index)),
                )
                .height(Length::FillPortion(1))
                .align_y(Vertical::Center),
            );
        }

        rail.into()
    }

    fn indicator_track(&self) -> Element<'_, Message> {
        let thumb = container(Space::with_height(Length::Fixed(self.map.indicator_height())))
            .width(Length::Fill)
            .style(|theme: &Theme| container::Style {
                background: Some(theme.palette().primary.into()),
                border: iced::border::rounded(4.0),
                ..container::Style::default()
            });

        let track = container(
            column![
                Space::with_height(Length::Fixed(self.map.indicator_offset())),
                thumb,
            ]
            .width(Length::Fill),
        )
        .width(Length::Fixed(self.config.indicator_width))
        .height(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            ..container::Style::default()
        });

        mouse_area(track)
            .on_press(Message::IndicatorPressed)
            .on_release(Message::IndicatorReleased)
            .on_move(|point| Message::IndicatorMoved(point.y))
            .into()
    }
}
