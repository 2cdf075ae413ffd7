//! Resume list and detail pages.

use iced::widget::{Column, Row, button, column, container, image, row, scrollable, text};
use iced::{ContentFit, Element, Length};
use resumind_core::{PreviewResolver, PreviewState, ResumeSummary, Route};

use super::{bold, secondary_text};
use crate::message::Message;
use crate::model::ImageFactory;
use crate::style::widgets::{
    card_style, link_button_style, outline_button_style, preview_placeholder_style,
    score_badge_style,
};

const CARD_WIDTH: f32 = 380.0;
const PREVIEW_HEIGHT: f32 = 350.0;

/// Renders the home page listing submitted resumes.
pub fn view_resume_list<'a>(
    resumes: &'a [ResumeSummary],
    previews: &'a PreviewResolver<ImageFactory>,
    scroll_locked: bool,
) -> Element<'a, Message> {
    let mut page = Column::new()
        .spacing(24)
        .push(text("Track your applications & resume ratings").size(32).font(bold()));

    if resumes.is_empty() {
        page = page.push(
            text("No resumes yet. Upload one to get feedback.")
                .size(16)
                .style(secondary_text),
        );
    } else {
        page = page.push(
            text("Review your submissions and check AI-powered feedback.").style(secondary_text),
        );
        let cards = resumes
            .iter()
            .map(|resume| view_card(resume, previews.state(&resume.id)));
        page = page.push(Row::with_children(cards).spacing(24).wrap());
    }

    page_body(
        container(page).padding([32, 24]).width(Length::Fill),
        scroll_locked,
    )
}

/// Wraps a page in a scrollable, or a clipped fixed container while a
/// top-level layer holds the scroll lock.
fn page_body<'a>(
    content: impl Into<Element<'a, Message>>,
    scroll_locked: bool,
) -> Element<'a, Message> {
    if scroll_locked {
        container(content).height(Length::Fill).clip(true).into()
    } else {
        scrollable(content).height(Length::Fill).into()
    }
}

fn view_card<'a>(
    resume: &'a ResumeSummary,
    preview: Option<&'a PreviewState<image::Handle>>,
) -> Element<'a, Message> {
    let card = container(
        column![
            view_card_header(resume),
            view_preview(resume, preview, PREVIEW_HEIGHT)
        ]
        .spacing(20),
    )
    .padding(24)
    .width(Length::Fixed(CARD_WIDTH))
    .style(card_style);

    button(card)
        .padding(0)
        .style(link_button_style)
        .on_press(Message::Navigate(Route::Resume(resume.id.clone())))
        .into()
}

fn view_card_header(resume: &ResumeSummary) -> Element<'_, Message> {
    let mut titles = column![text(resume.heading()).size(20).font(bold())].spacing(4);
    if let Some(sub) = resume.subheading() {
        titles = titles.push(text(sub).size(16).style(secondary_text));
    }

    row![titles.width(Length::Fill), view_score(resume.feedback.display_score())]
        .spacing(16)
        .into()
}

fn view_score(score: u8) -> Element<'static, Message> {
    container(text(format!("{score}/100")).size(15).font(bold()))
        .padding([14, 10])
        .style(score_badge_style(score))
        .into()
}

fn view_preview<'a>(
    resume: &'a ResumeSummary,
    preview: Option<&'a PreviewState<image::Handle>>,
    height: f32,
) -> Element<'a, Message> {
    if let Some(PreviewState::Ready(handle)) = preview {
        return image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .content_fit(ContentFit::Cover)
            .into();
    }

    let body: Element<'a, Message> = match preview {
        Some(PreviewState::Missing) => column![
            text("Preview unavailable"),
            view_retry(resume),
        ]
        .spacing(8)
        .align_x(iced::Alignment::Center)
        .into(),
        Some(PreviewState::Failed(reason)) => column![
            text("Preview failed to load"),
            text(reason).size(12).style(secondary_text),
            view_retry(resume),
        ]
        .spacing(8)
        .align_x(iced::Alignment::Center)
        .into(),
        _ => text("Loading preview...").into(),
    };

    container(body)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(height))
        .style(preview_placeholder_style)
        .into()
}

fn view_retry(resume: &ResumeSummary) -> Element<'static, Message> {
    button(text("Retry").size(13))
        .padding([6, 12])
        .style(outline_button_style)
        .on_press(Message::RetryPreview(resume.id.clone()))
        .into()
}

/// Renders one resume with a large preview.
pub fn view_resume_detail<'a>(
    resume: &'a ResumeSummary,
    previews: &'a PreviewResolver<ImageFactory>,
    scroll_locked: bool,
) -> Element<'a, Message> {
    let mut details = column![view_card_header(resume)].spacing(8);
    if let Some(submitted) = resume.submitted_at {
        details = details.push(
            text(format!("Submitted {}", submitted.format("%Y-%m-%d %H:%M")))
                .size(13)
                .style(secondary_text),
        );
    }

    let page = column![
        button(text("\u{2190} Back to resumes").size(14))
            .padding(0)
            .style(link_button_style)
            .on_press(Message::Navigate(Route::Home)),
        details,
        view_preview(resume, previews.state(&resume.id), 720.0),
    ]
    .spacing(20)
    .max_width(760.0);

    page_body(
        container(page)
            .padding([32, 24])
            .width(Length::Fill)
            .center_x(Length::Fill),
        scroll_locked,
    )
}
