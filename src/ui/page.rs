// SPDX-License-Identifier: MPL-2.0
//! A rendered site page: text sections, thumbnail galleries and one
//! lightbox per gallery section that declares complete modal markup.

use crate::config::ViewerSettings;
use crate::i18n::fluent::I18n;
use crate::media::DimensionCache;
use crate::site::{LoadedPage, Section, Thumbnail};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::modal::{self, ModalFixture, Viewer};
use crate::ui::styles;
use iced::widget::{button, image, Column, Row, Text};
use iced::{ContentFit, Element, Length, Task};

#[derive(Debug, Clone)]
pub enum Message {
    Viewer {
        section: usize,
        message: modal::Message,
    },
}

#[derive(Debug)]
pub struct State {
    loaded: LoadedPage,
    /// Parallel to `loaded.page.sections`; `None` where no lightbox is wired.
    viewers: Vec<Option<Viewer>>,
}

impl State {
    #[must_use]
    pub fn new(loaded: LoadedPage, settings: ViewerSettings, viewport_width: f32) -> Self {
        let viewers = loaded
            .page
            .sections
            .iter()
            .enumerate()
            .map(|(index, section)| {
                if section.modal.is_none() {
                    return None;
                }
                let name = section_name(section, index);
                ModalFixture::wire(section.modal.as_ref(), &name)
                    .map(|fixture| Viewer::new(fixture, settings, viewport_width))
            })
            .collect();
        Self { loaded, viewers }
    }

    #[must_use]
    pub fn loaded(&self) -> &LoadedPage {
        &self.loaded
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.loaded.page.title
    }

    #[must_use]
    pub fn viewer(&self, section: usize) -> Option<&Viewer> {
        self.viewers.get(section).and_then(Option::as_ref)
    }

    /// Whether any lightbox on the page is showing.
    #[must_use]
    pub fn has_open_viewer(&self) -> bool {
        self.viewers.iter().flatten().any(Viewer::is_open)
    }

    pub fn update(&mut self, message: Message, cache: &mut DimensionCache) -> Task<Message> {
        match message {
            Message::Viewer { section, message } => {
                let Some(viewer) = self.viewers.get_mut(section).and_then(Option::as_mut) else {
                    return Task::none();
                };
                viewer
                    .update(message, cache)
                    .map(move |message| Message::Viewer { section, message })
            }
        }
    }

    /// Sends a window-level event to every lightbox. Closed ones ignore
    /// what does not concern them.
    pub fn broadcast(&mut self, message: &modal::Message, cache: &mut DimensionCache) -> Task<Message> {
        let tasks: Vec<_> = self
            .viewers
            .iter_mut()
            .enumerate()
            .filter_map(|(section, viewer)| {
                let viewer = viewer.as_mut()?;
                Some(
                    viewer
                        .update(message.clone(), cache)
                        .map(move |message| Message::Viewer { section, message }),
                )
            })
            .collect();
        Task::batch(tasks)
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let page = &self.loaded.page;
        let mut column = Column::new()
            .spacing(spacing::LG)
            .padding(spacing::XL)
            .push(Text::new(page.title.as_str()).size(typography::TITLE_LG));

        if let Some(summary) = &page.summary {
            column = column.push(Text::new(summary.as_str()).size(typography::BODY));
        }

        if page.sections.is_empty() && page.summary.is_none() {
            column = column.push(Text::new(i18n.tr("page-empty")).size(typography::BODY));
        }

        for (index, section) in page.sections.iter().enumerate() {
            column = column.push(self.view_section(index, section));
        }

        column.width(Length::Fill).into()
    }

    fn view_section<'a>(&'a self, index: usize, section: &'a Section) -> Element<'a, Message> {
        let mut column = Column::new().spacing(spacing::SM);
        if let Some(heading) = &section.heading {
            column = column.push(Text::new(heading.as_str()).size(typography::TITLE_MD));
        }
        if let Some(body) = &section.body {
            column = column.push(Text::new(body.as_str()).size(typography::BODY));
        }
        if !section.images.is_empty() {
            let wired = self.viewer(index).is_some();
            let gallery = section
                .images
                .iter()
                .fold(Row::new().spacing(spacing::SM), |row, thumbnail| {
                    row.push(self.view_thumbnail(index, thumbnail, wired))
                });
            column = column.push(gallery.wrap().vertical_spacing(spacing::SM));
        }
        column.into()
    }

    fn view_thumbnail<'a>(
        &'a self,
        section: usize,
        thumbnail: &'a Thumbnail,
        wired: bool,
    ) -> Element<'a, Message> {
        let source = self.loaded.image_path(thumbnail);
        let picture = image(image::Handle::from_path(&source))
            .width(Length::Fixed(sizing::THUMBNAIL_WIDTH))
            .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
            .content_fit(ContentFit::Cover);

        let mut tile = Column::new().spacing(spacing::XXS).push(picture);
        if let Some(caption) = &thumbnail.caption {
            tile = tile.push(Text::new(caption.as_str()).size(typography::CAPTION));
        }

        if !wired {
            return tile.into();
        }
        button(tile)
            .padding(spacing::XXS)
            .style(styles::button::thumbnail)
            .on_press(Message::Viewer {
                section,
                message: modal::Message::Open {
                    source,
                    caption: thumbnail.caption.clone(),
                },
            })
            .into()
    }

    /// The open lightbox, drawn over the whole window.
    pub fn overlay<'a>(&'a self, i18n: &'a I18n) -> Option<Element<'a, Message>> {
        self.viewers
            .iter()
            .enumerate()
            .find_map(|(section, viewer)| {
                let element = viewer.as_ref()?.view(i18n)?;
                Some(element.map(move |message| Message::Viewer { section, message }))
            })
    }
}

fn section_name(section: &Section, index: usize) -> String {
    section
        .heading
        .clone()
        .unwrap_or_else(|| format!("section {}", index + 1))
}
