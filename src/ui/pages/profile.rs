//! Profile page: summary card plus the editable detail form.

use iced::widget::{button, column, horizontal_rule, row, text, text_input};
use iced::{Command, Element, Length};

use crate::models::{Page, Role};
use crate::ui::app::{MedVision, Message};
use crate::ui::components;

#[derive(Debug, Clone)]
pub enum Event {
    BeginEdit,
    Cancel,
    Save,
    FullName(String),
    Email(String),
    Phone(String),
    DateOfBirth(String),
    Address(String),
    EmergencyContact(String),
    EmergencyPhone(String),
    Specialty(String),
    LicenseNumber(String),
    Hospital(String),
}

pub fn update(app: &mut MedVision, event: Event) -> Command<Message> {
    let Some(view) = app.profile.as_mut() else {
        return Command::none();
    };
    match event {
        Event::BeginEdit => view.begin_edit(),
        Event::Cancel => view.cancel(),
        Event::Save => {
            view.save();
        }
        Event::FullName(value) => {
            view.draft.full_name = value;
            view.clear_error("full_name");
        }
        Event::Email(value) => {
            view.draft.email = value;
            view.clear_error("email");
        }
        Event::Phone(value) => {
            view.draft.phone = value;
            view.clear_error("phone");
        }
        Event::DateOfBirth(value) => view.draft.date_of_birth = value,
        Event::Address(value) => view.draft.address = value,
        Event::EmergencyContact(value) => view.draft.emergency_contact = Some(value),
        Event::EmergencyPhone(value) => view.draft.emergency_phone = Some(value),
        Event::Specialty(value) => view.draft.specialty = Some(value),
        Event::LicenseNumber(value) => view.draft.license_number = Some(value),
        Event::Hospital(value) => view.draft.hospital = Some(value),
    }
    Command::none()
}

fn detail<'a>(
    label: &str,
    value: &str,
    editing: bool,
    error: Option<&str>,
    on_input: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    if editing {
        column![
            text(label.to_string()).size(13),
            text_input("", value).on_input(on_input),
            components::field_error(error),
        ]
        .spacing(3)
        .into()
    } else {
        column![text(label.to_string()).size(12), text(value.to_string()).size(14)]
            .spacing(2)
            .into()
    }
}

pub fn view(app: &MedVision) -> Element<Message> {
    let Some(profile_view) = &app.profile else {
        // Unreachable behind the navigation guard.
        return components::shell(app, Page::Profile, text("No profile loaded").into());
    };
    let editing = profile_view.editing;
    let shown = if editing {
        &profile_view.draft
    } else {
        profile_view.profile()
    };
    let role = shown.role;

    let mut summary = column![
        text(shown.initials()).size(30),
        text(shown.full_name.clone()).size(18),
    ]
    .spacing(4);
    if role == Role::Doctor {
        if let Some(specialty) = &shown.specialty {
            summary = summary.push(text(specialty.clone()).size(13));
        }
    }
    summary = summary
        .push(text(match role {
            Role::Doctor => "Medical Professional",
            Role::Patient => "Patient",
        })
        .size(12))
        .push(horizontal_rule(1))
        .push(text(shown.email.clone()).size(12))
        .push(text(shown.phone.clone()).size(12))
        .push(text(shown.address.clone()).size(12));
    if !editing {
        summary = summary.push(
            button(text("Edit Profile").size(14))
                .width(Length::Fill)
                .on_press(Message::Profile(Event::BeginEdit)),
        );
    }

    let mut details = column![
        text("Personal Information").size(16),
        row![
            detail(
                "Full Name",
                &shown.full_name,
                editing,
                profile_view.errors.get("full_name").map(String::as_str),
                |value| Message::Profile(Event::FullName(value)),
            ),
            detail(
                "Email Address",
                &shown.email,
                editing,
                profile_view.errors.get("email").map(String::as_str),
                |value| Message::Profile(Event::Email(value)),
            ),
        ]
        .spacing(16),
        row![
            detail(
                "Phone Number",
                &shown.phone,
                editing,
                profile_view.errors.get("phone").map(String::as_str),
                |value| Message::Profile(Event::Phone(value)),
            ),
            detail(
                "Date of Birth",
                &shown.date_of_birth,
                editing,
                None,
                |value| Message::Profile(Event::DateOfBirth(value)),
            ),
        ]
        .spacing(16),
        detail("Address", &shown.address, editing, None, |value| {
            Message::Profile(Event::Address(value))
        }),
    ]
    .spacing(12);

    match role {
        Role::Patient => {
            details = details.push(horizontal_rule(1)).push(
                row![
                    detail(
                        "Emergency Contact",
                        shown.emergency_contact.as_deref().unwrap_or(""),
                        editing,
                        None,
                        |value| Message::Profile(Event::EmergencyContact(value)),
                    ),
                    detail(
                        "Emergency Phone",
                        shown.emergency_phone.as_deref().unwrap_or(""),
                        editing,
                        None,
                        |value| Message::Profile(Event::EmergencyPhone(value)),
                    ),
                ]
                .spacing(16),
            );
        }
        Role::Doctor => {
            details = details.push(horizontal_rule(1)).push(
                row![
                    detail(
                        "Specialty",
                        shown.specialty.as_deref().unwrap_or(""),
                        editing,
                        None,
                        |value| Message::Profile(Event::Specialty(value)),
                    ),
                    detail(
                        "License Number",
                        shown.license_number.as_deref().unwrap_or(""),
                        editing,
                        None,
                        |value| Message::Profile(Event::LicenseNumber(value)),
                    ),
                    detail(
                        "Hospital",
                        shown.hospital.as_deref().unwrap_or(""),
                        editing,
                        None,
                        |value| Message::Profile(Event::Hospital(value)),
                    ),
                ]
                .spacing(16),
            );
        }
    }

    if editing {
        details = details.push(
            row![
                button(text("Cancel").size(14)).on_press(Message::Profile(Event::Cancel)),
                button(text("Save Changes").size(14))
                    .width(Length::Fill)
                    .on_press(Message::Profile(Event::Save)),
            ]
            .spacing(12),
        );
    }

    let content = column![
        components::page_heading("My Profile", "Manage your personal information and preferences"),
        row![
            column![summary].width(Length::FillPortion(1)),
            column![details].width(Length::FillPortion(2)),
        ]
        .spacing(20),
    ]
    .spacing(18);

    components::shell(app, Page::Profile, content.into())
}
