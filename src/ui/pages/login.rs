//! Sign-in page: brand panel on the left, the form on the right.

use std::time::Duration;

use iced::widget::{button, checkbox, column, container, horizontal_rule, row, text, text_input};
use iced::{Command, Element, Length};

use crate::models::{Page, Role};
use crate::ui::app::{MedVision, Message};

/// Marketing copy for the left panel.
const FEATURES: [(&str, &str); 3] = [
    (
        "Evidence-Based Analysis",
        "Uses a machine learning model trained on real clinical data to help distinguish between benign and malignant cases.",
    ),
    (
        "Your Privacy Matters",
        "All data you enter is processed locally and not stored or shared. This tool is designed for educational use with your privacy in mind.",
    ),
    (
        "Get Your Results Instantly",
        "Input your clinical measurements and receive an immediate prediction. No waiting, no appointments, just fast insight to help guide your next steps.",
    ),
];

#[derive(Debug, Clone)]
pub enum Event {
    EmailChanged(String),
    PasswordChanged(String),
    ToggleShowPassword,
    RememberToggled(bool),
    Submit,
    /// Fired after the simulated confirmation delay.
    Confirmed(Role),
    GoToSignup,
}

pub fn update(app: &mut MedVision, event: Event) -> Command<Message> {
    match event {
        Event::EmailChanged(value) => {
            app.login.set_email(value);
            Command::none()
        }
        Event::PasswordChanged(value) => {
            app.login.set_password(value);
            Command::none()
        }
        Event::ToggleShowPassword => {
            app.login.toggle_show_password();
            Command::none()
        }
        Event::RememberToggled(value) => {
            app.login.remember = value;
            Command::none()
        }
        Event::Submit => match app.login.submit() {
            Some(role) => Command::perform(
                tokio::time::sleep(Duration::from_millis(1000)),
                move |_| Message::Login(Event::Confirmed(role)),
            ),
            None => Command::none(),
        },
        Event::Confirmed(role) => {
            app.session.login(role);
            let landing = app.session.page();
            app.login = Default::default();
            app.enter(landing);
            Command::none()
        }
        Event::GoToSignup => {
            app.goto(Page::Signup);
            Command::none()
        }
    }
}

pub fn view(app: &MedVision) -> Element<Message> {
    let form = &app.login;

    let mut left = column![
        text(&app.config.app.title).size(26),
        text(&app.config.app.tagline).size(14),
        text("Your Personal Breast Cancer Screening Detection Platform").size(17),
        text("Advanced machine learning technology for accurate, reliable breast cancer screening and early detection.")
            .size(13),
    ]
    .spacing(10);
    for (title, description) in FEATURES {
        left = left.push(
            column![text(title).size(15), text(description).size(13)].spacing(4),
        );
    }

    let mut email_input = text_input("your.email@example.com", &form.email);
    let mut password_input =
        text_input("••••••••", &form.password).secure(!form.show_password);
    if !form.loading {
        email_input = email_input.on_input(|value| Message::Login(Event::EmailChanged(value)));
        password_input = password_input
            .on_input(|value| Message::Login(Event::PasswordChanged(value)))
            .on_submit(Message::Login(Event::Submit));
    }

    let mut submit = button(
        text(if form.loading { "Signing in..." } else { "Sign In" }).size(15),
    )
    .width(Length::Fill);
    if !form.loading {
        submit = submit.on_press(Message::Login(Event::Submit));
    }

    let mut right = column![
        text("Welcome Back").size(20),
        text("Sign in to access your account").size(13),
    ]
    .spacing(12);
    if let Some(error) = &form.error {
        right = right.push(text(format!("⚠ {error}")).size(13));
    }
    right = right
        .push(column![text("Email Address *").size(13), email_input].spacing(4))
        .push(
            column![
                text("Password *").size(13),
                row![
                    password_input,
                    button(
                        text(if form.show_password { "Hide" } else { "Show" }).size(12),
                    )
                    .on_press(Message::Login(Event::ToggleShowPassword)),
                ]
                .spacing(8),
            ]
            .spacing(4),
        )
        .push(
            row![
                checkbox("Remember me", form.remember)
                    .on_toggle(|value| Message::Login(Event::RememberToggled(value))),
                button(text("Forgot Password?").size(13)),
            ]
            .spacing(16),
        )
        .push(submit)
        .push(horizontal_rule(1))
        .push(text("New to MedVision?").size(13))
        .push(
            button(text("Create an Account").size(14))
                .width(Length::Fill)
                .on_press(Message::Login(Event::GoToSignup)),
        )
        .push(
            column![
                text("Demo Credentials:").size(12),
                text("Patient: patient@example.com").size(12),
                text("Doctor: doctor@example.com").size(12),
            ]
            .spacing(2),
        );

    container(
        row![
            left.width(Length::FillPortion(1)),
            right.width(Length::FillPortion(1)),
        ]
        .spacing(40),
    )
    .padding(32)
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}
