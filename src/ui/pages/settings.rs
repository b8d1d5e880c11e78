//! Settings page: preferences, security, and the danger zone.

use iced::widget::{button, checkbox, column, pick_list, row, text, text_input};
use iced::{Command, Element, Length};
use strum::IntoEnumIterator;

use crate::core::settings::{Language, Timezone, Visibility};
use crate::models::Page;
use crate::ui::app::{MedVision, Message};
use crate::ui::components;

#[derive(Debug, Clone)]
pub enum Event {
    LanguagePicked(Language),
    TimezonePicked(Timezone),
    VisibilityPicked(Visibility),
    EmailNotifications(bool),
    SmsNotifications(bool),
    AppNotifications(bool),
    AppointmentReminders(bool),
    ResultsNotifications(bool),
    MarketingEmails(bool),
    DataSharing(bool),
    TwoFactor(bool),
    OpenPasswordChange,
    CancelPasswordChange,
    SubmitPasswordChange,
    CurrentPassword(String),
    NewPassword(String),
    ConfirmPassword(String),
    ToggleDeleteConfirm,
}

pub fn update(app: &mut MedVision, event: Event) -> Command<Message> {
    let view = &mut app.settings;
    match event {
        Event::LanguagePicked(language) => view.prefs.language = language,
        Event::TimezonePicked(timezone) => view.prefs.timezone = timezone,
        Event::VisibilityPicked(visibility) => view.prefs.profile_visibility = visibility,
        Event::EmailNotifications(value) => view.prefs.email_notifications = value,
        Event::SmsNotifications(value) => view.prefs.sms_notifications = value,
        Event::AppNotifications(value) => view.prefs.app_notifications = value,
        Event::AppointmentReminders(value) => view.prefs.appointment_reminders = value,
        Event::ResultsNotifications(value) => view.prefs.results_notifications = value,
        Event::MarketingEmails(value) => view.prefs.marketing_emails = value,
        Event::DataSharing(value) => view.prefs.data_sharing = value,
        Event::TwoFactor(value) => view.prefs.two_factor_auth = value,
        Event::OpenPasswordChange => view.open_password_change(),
        Event::CancelPasswordChange => view.cancel_password_change(),
        Event::SubmitPasswordChange => {
            view.submit_password_change();
        }
        Event::CurrentPassword(value) => {
            if let Some(change) = view.password.as_mut() {
                change.current = value;
            }
            view.clear_password_error("current");
        }
        Event::NewPassword(value) => {
            if let Some(change) = view.password.as_mut() {
                change.new_password = value;
            }
            view.clear_password_error("new_password");
        }
        Event::ConfirmPassword(value) => {
            if let Some(change) = view.password.as_mut() {
                change.confirm = value;
            }
            view.clear_password_error("confirm");
        }
        Event::ToggleDeleteConfirm => view.confirm_delete = !view.confirm_delete,
    }
    Command::none()
}

fn toggle<'a>(
    label: &'static str,
    checked: bool,
    on_toggle: impl Fn(bool) -> Message + 'a,
) -> Element<'a, Message> {
    checkbox(label, checked).on_toggle(on_toggle).into()
}

fn password_section(app: &MedVision) -> Element<Message> {
    let view = &app.settings;
    let Some(change) = &view.password else {
        return column![
            text("Security").size(16),
            toggle("Two-Factor Authentication", view.prefs.two_factor_auth, |value| {
                Message::Settings(Event::TwoFactor(value))
            }),
            button(text("Change Password").size(14))
                .on_press(Message::Settings(Event::OpenPasswordChange)),
        ]
        .spacing(8)
        .into();
    };

    let errors = &view.password_errors;
    column![
        text("Change Password").size(16),
        column![
            text("Current Password").size(13),
            text_input("", &change.current)
                .secure(true)
                .on_input(|value| Message::Settings(Event::CurrentPassword(value))),
            components::field_error(errors.get("current").map(String::as_str)),
        ]
        .spacing(3),
        column![
            text("New Password").size(13),
            text_input("", &change.new_password)
                .secure(true)
                .on_input(|value| Message::Settings(Event::NewPassword(value))),
            components::field_error(errors.get("new_password").map(String::as_str)),
        ]
        .spacing(3),
        column![
            text("Confirm New Password").size(13),
            text_input("", &change.confirm)
                .secure(true)
                .on_input(|value| Message::Settings(Event::ConfirmPassword(value))),
            components::field_error(errors.get("confirm").map(String::as_str)),
        ]
        .spacing(3),
        row![
            button(text("Cancel").size(14))
                .on_press(Message::Settings(Event::CancelPasswordChange)),
            button(text("Update Password").size(14))
                .on_press(Message::Settings(Event::SubmitPasswordChange)),
        ]
        .spacing(12),
    ]
    .spacing(8)
    .into()
}

pub fn view(app: &MedVision) -> Element<Message> {
    let prefs = &app.settings.prefs;

    let general = column![
        text("General Settings").size(16),
        column![
            text("Language").size(13),
            pick_list(
                Language::iter().collect::<Vec<_>>(),
                Some(prefs.language),
                |language| Message::Settings(Event::LanguagePicked(language)),
            ),
        ]
        .spacing(3),
        column![
            text("Timezone").size(13),
            pick_list(
                Timezone::iter().collect::<Vec<_>>(),
                Some(prefs.timezone),
                |timezone| Message::Settings(Event::TimezonePicked(timezone)),
            ),
        ]
        .spacing(3),
    ]
    .spacing(8);

    let notifications = column![
        text("Notification Preferences").size(16),
        toggle("Email Notifications", prefs.email_notifications, |value| {
            Message::Settings(Event::EmailNotifications(value))
        }),
        toggle("SMS Notifications", prefs.sms_notifications, |value| {
            Message::Settings(Event::SmsNotifications(value))
        }),
        toggle("In-App Notifications", prefs.app_notifications, |value| {
            Message::Settings(Event::AppNotifications(value))
        }),
        toggle(
            "Appointment Reminders",
            prefs.appointment_reminders,
            |value| Message::Settings(Event::AppointmentReminders(value)),
        ),
        toggle(
            "Results Notifications",
            prefs.results_notifications,
            |value| Message::Settings(Event::ResultsNotifications(value)),
        ),
        toggle("Marketing Emails", prefs.marketing_emails, |value| {
            Message::Settings(Event::MarketingEmails(value))
        }),
    ]
    .spacing(6);

    let privacy = column![
        text("Privacy").size(16),
        toggle(
            "Share anonymized data for research",
            prefs.data_sharing,
            |value| Message::Settings(Event::DataSharing(value)),
        ),
        column![
            text("Profile Visibility").size(13),
            pick_list(
                Visibility::iter().collect::<Vec<_>>(),
                Some(prefs.profile_visibility),
                |visibility| Message::Settings(Event::VisibilityPicked(visibility)),
            ),
        ]
        .spacing(3),
    ]
    .spacing(8);

    let danger: Element<Message> = if app.settings.confirm_delete {
        column![
            text("Delete Account").size(16),
            text("Account deletion is not available in this demo. Your data only lives in memory and disappears when the app closes.")
                .size(13),
            button(text("Close").size(14))
                .on_press(Message::Settings(Event::ToggleDeleteConfirm)),
        ]
        .spacing(8)
        .into()
    } else {
        column![
            text("Danger Zone").size(16),
            button(text("Delete Account").size(14))
                .on_press(Message::Settings(Event::ToggleDeleteConfirm)),
        ]
        .spacing(8)
        .into()
    };

    let content = column![
        components::page_heading(
            "Settings",
            "Manage your account preferences and privacy settings",
        ),
        general,
        notifications,
        privacy,
        password_section(app),
        danger,
        button(text("Save Settings").size(14)).width(Length::Fill),
    ]
    .spacing(20);

    components::shell(app, Page::Settings, content.into())
}
