//! Messages page: conversation list beside the open thread.

use iced::widget::{button, column, horizontal_rule, row, text, text_input, Space};
use iced::{Command, Element, Length};
use strum::IntoEnumIterator;
use uuid::Uuid;

use crate::core::messages::InboxFilter;
use crate::data;
use crate::models::Page;
use crate::ui::app::{MedVision, Message};

#[derive(Debug, Clone)]
pub enum Event {
    Select(Uuid),
    SearchChanged(String),
    SetFilter(InboxFilter),
    ComposeChanged(String),
    Send,
}

pub fn update(app: &mut MedVision, event: Event) -> Command<Message> {
    match event {
        Event::Select(id) => app.inbox.select(id),
        Event::SearchChanged(value) => app.inbox.search = value,
        Event::SetFilter(filter) => app.inbox.filter = filter,
        Event::ComposeChanged(value) => app.inbox.compose = value,
        Event::Send => {
            let sender = app
                .session
                .role()
                .map(|role| data::profile_for(role).full_name)
                .unwrap_or_else(|| "You".into());
            app.inbox.send(&sender);
        }
    }
    Command::none()
}

fn conversation_list(app: &MedVision) -> Element<Message> {
    let mut filters = row![].spacing(6);
    for filter in InboxFilter::iter() {
        let label = if filter == app.inbox.filter {
            format!("[{filter}]")
        } else {
            filter.to_string()
        };
        filters = filters
            .push(button(text(label).size(12)).on_press(Message::Inbox(Event::SetFilter(filter))));
    }

    let mut list = column![
        text_input("Search messages...", &app.inbox.search)
            .on_input(|value| Message::Inbox(Event::SearchChanged(value))),
        filters,
    ]
    .spacing(10);

    for conversation in app.inbox.filtered(data::conversations()) {
        let unread_marker = if conversation.unread { "● " } else { "" };
        list = list.push(
            button(
                column![
                    text(format!("{unread_marker}{}", conversation.sender)).size(14),
                    text(conversation.subject.clone()).size(12),
                    text(conversation.timestamp.clone()).size(11),
                ]
                .spacing(2),
            )
            .width(Length::Fill)
            .on_press(Message::Inbox(Event::Select(conversation.id))),
        );
    }
    list.into()
}

fn thread_panel(app: &MedVision) -> Element<Message> {
    let header: Element<Message> =
        match app.inbox.selected_conversation(data::conversations()) {
            Some(conversation) => column![
                text(conversation.sender.clone()).size(16),
                text(conversation.sender_role.clone()).size(12),
                text(conversation.subject.clone()).size(13),
            ]
            .spacing(2)
            .into(),
            None => text("Select a conversation").size(14).into(),
        };

    let mut thread = column![].spacing(10);
    for message in &app.inbox.thread {
        let bubble = column![
            text(message.sender.clone()).size(11),
            text(message.body.clone()).size(13),
            text(message.timestamp.clone()).size(10),
        ]
        .spacing(2)
        .width(Length::FillPortion(3));
        let line: Element<Message> = if message.outgoing {
            row![Space::with_width(Length::FillPortion(1)), bubble].into()
        } else {
            row![bubble, Space::with_width(Length::FillPortion(1))].into()
        };
        thread = thread.push(line);
    }

    column![
        header,
        horizontal_rule(1),
        thread,
        Space::with_height(Length::Fill),
        row![
            text_input("Type your message...", &app.inbox.compose)
                .on_input(|value| Message::Inbox(Event::ComposeChanged(value)))
                .on_submit(Message::Inbox(Event::Send)),
            button(text("Send").size(14)).on_press(Message::Inbox(Event::Send)),
        ]
        .spacing(8),
    ]
    .spacing(12)
    .into()
}

pub fn view(app: &MedVision) -> Element<Message> {
    let content = row![
        column![conversation_list(app)].width(Length::FillPortion(1)),
        column![thread_panel(app)].width(Length::FillPortion(2)),
    ]
    .spacing(20)
    .height(Length::Fill);
    crate::ui::components::shell(app, Page::Messages, content.into())
}
