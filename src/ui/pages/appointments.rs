//! Appointments page: filterable list plus the booking dialog.

use iced::widget::{button, column, horizontal_rule, pick_list, row, text, text_input, Space};
use iced::{Command, Element, Length};
use strum::IntoEnumIterator;

use crate::core::appointments::{StatusFilter, ViewMode};
use crate::data;
use crate::models::{Page, Role};
use crate::ui::app::{MedVision, Message};
use crate::ui::components;

#[derive(Debug, Clone)]
pub enum Event {
    SetMode(ViewMode),
    SetFilter(StatusFilter),
    OpenBooking,
    CloseBooking,
    ConfirmBooking,
    DoctorPicked(String),
    DateChanged(String),
    TimePicked(String),
    ReasonChanged(String),
}

pub fn update(app: &mut MedVision, event: Event) -> Command<Message> {
    let view = &mut app.appointments;
    match event {
        Event::SetMode(mode) => view.mode = mode,
        Event::SetFilter(filter) => view.filter = filter,
        Event::OpenBooking => view.open_booking(),
        Event::CloseBooking => view.close_booking(),
        Event::ConfirmBooking => {
            view.confirm_booking();
        }
        Event::DoctorPicked(value) => {
            if let Some(draft) = view.booking.as_mut() {
                draft.doctor = value;
            }
            view.clear_booking_error("doctor");
        }
        Event::DateChanged(value) => {
            if let Some(draft) = view.booking.as_mut() {
                draft.date = value;
            }
            view.clear_booking_error("date");
        }
        Event::TimePicked(value) => {
            if let Some(draft) = view.booking.as_mut() {
                draft.time = value;
            }
            view.clear_booking_error("time");
        }
        Event::ReasonChanged(value) => {
            if let Some(draft) = view.booking.as_mut() {
                draft.reason = value;
            }
            view.clear_booking_error("reason");
        }
    }
    Command::none()
}

fn booking_form(app: &MedVision) -> Element<Message> {
    let Some(draft) = &app.appointments.booking else {
        return Space::with_height(Length::Shrink).into();
    };
    let errors = &app.appointments.booking_errors;

    let doctors = data::bookable_doctors();
    let selected_doctor = doctors.iter().find(|d| **d == draft.doctor).copied();
    let slots = data::time_slots();
    let selected_slot = slots.iter().find(|s| **s == draft.time).copied();

    column![
        text("Book New Appointment").size(18),
        column![
            text("Select Doctor *").size(13),
            pick_list(doctors, selected_doctor, |choice: &'static str| {
                Message::Appointments(Event::DoctorPicked(choice.to_string()))
            })
            .placeholder("Choose a doctor"),
            components::field_error(errors.get("doctor").map(String::as_str)),
        ]
        .spacing(4),
        row![
            column![
                text("Date *").size(13),
                text_input("YYYY-MM-DD", &draft.date)
                    .on_input(|value| Message::Appointments(Event::DateChanged(value))),
                components::field_error(errors.get("date").map(String::as_str)),
            ]
            .spacing(4),
            column![
                text("Time *").size(13),
                pick_list(slots, selected_slot, |choice: &'static str| {
                    Message::Appointments(Event::TimePicked(choice.to_string()))
                })
                .placeholder("Select time"),
                components::field_error(errors.get("time").map(String::as_str)),
            ]
            .spacing(4),
        ]
        .spacing(16),
        column![
            text("Reason for Visit *").size(13),
            text_input(
                "Please describe the reason for your appointment...",
                &draft.reason,
            )
            .on_input(|value| Message::Appointments(Event::ReasonChanged(value))),
            components::field_error(errors.get("reason").map(String::as_str)),
        ]
        .spacing(4),
        column![
            text("Appointment Reminders").size(13),
            text("✓ Email reminder 24 hours before").size(12),
            text("✓ SMS reminder 2 hours before").size(12),
        ]
        .spacing(2),
        row![
            button(text("Cancel").size(14))
                .width(Length::Fill)
                .on_press(Message::Appointments(Event::CloseBooking)),
            button(text("Confirm Booking").size(14))
                .width(Length::Fill)
                .on_press(Message::Appointments(Event::ConfirmBooking)),
        ]
        .spacing(12),
    ]
    .spacing(12)
    .into()
}

fn appointment_list(app: &MedVision, role: Role) -> Element<Message> {
    let mut list = column![].spacing(12);
    let filtered = app.appointments.filtered(data::appointments());

    if filtered.is_empty() {
        return column![
            text("No Appointments Found").size(16),
            text("You don't have any appointments matching this filter.").size(13),
            button(text("Book Your First Appointment").size(14))
                .on_press(Message::Appointments(Event::OpenBooking)),
        ]
        .spacing(8)
        .into();
    }

    for appointment in filtered {
        let counterpart = match role {
            Role::Doctor => &appointment.patient_name,
            Role::Patient => &appointment.doctor_name,
        };
        let mut card = column![
            row![
                text(appointment.date.format("%b %-d").to_string()).size(16),
                column![
                    text(counterpart.clone()).size(15),
                    text(appointment.reason.clone()).size(13),
                ]
                .spacing(2),
                Space::with_width(Length::Fill),
                text(appointment.status.to_string()).size(12),
            ]
            .spacing(16),
            row![
                text(appointment.time.clone()).size(12),
                text(appointment.location.clone()).size(12),
                text(appointment.kind.clone()).size(12),
            ]
            .spacing(16),
        ]
        .spacing(6);

        if appointment.status == crate::models::AppointmentStatus::Upcoming {
            card = card.push(
                row![
                    button(text("View Details").size(12)),
                    button(text("Reschedule").size(12)),
                    button(text("Cancel").size(12)),
                ]
                .spacing(8),
            );
        }
        list = list.push(card).push(horizontal_rule(1));
    }
    list.into()
}

pub fn view(app: &MedVision) -> Element<Message> {
    let role = app.session.role().unwrap_or(Role::Patient);

    let mut filters = row![].spacing(8);
    for filter in StatusFilter::iter() {
        let label = if filter == app.appointments.filter {
            format!("[{filter}]")
        } else {
            filter.to_string()
        };
        filters = filters.push(
            button(text(label).size(13)).on_press(Message::Appointments(Event::SetFilter(filter))),
        );
    }

    let toggles = row![
        button(text("List View").size(13))
            .on_press(Message::Appointments(Event::SetMode(ViewMode::List))),
        button(text("Calendar View").size(13))
            .on_press(Message::Appointments(Event::SetMode(ViewMode::Calendar))),
    ]
    .spacing(8);

    let body: Element<Message> = if app.appointments.booking.is_some() {
        booking_form(app)
    } else {
        match app.appointments.mode {
            ViewMode::List => appointment_list(app, role),
            ViewMode::Calendar => column![
                text("Calendar View").size(16),
                text("Interactive calendar view coming soon. For now, please use the list view.")
                    .size(13),
            ]
            .spacing(6)
            .into(),
        }
    };

    let content = column![
        row![
            components::page_heading(
                "Appointments",
                "Manage your scheduled appointments and consultations",
            ),
            Space::with_width(Length::Fill),
            button(text("Book New Appointment").size(14))
                .on_press(Message::Appointments(Event::OpenBooking)),
        ],
        row![toggles, Space::with_width(Length::Fill), filters],
        body,
    ]
    .spacing(18);

    components::shell(app, Page::Appointments, content.into())
}
