//! Three-step signup page.

use iced::widget::{button, checkbox, column, container, horizontal_rule, pick_list, radio, row, text, text_input};
use iced::{Command, Element, Length};
use strum::IntoEnumIterator;

use crate::core::signup::{Gender, Specialty, Step};
use crate::models::{Page, Role};
use crate::ui::app::{MedVision, Message};
use crate::ui::components;

#[derive(Debug, Clone)]
pub enum Event {
    RolePicked(Role),
    Back,
    FullName(String),
    Email(String),
    Phone(String),
    DateOfBirth(String),
    GenderPicked(Gender),
    Address(String),
    EmergencyContact(String),
    EmergencyPhone(String),
    SpecialtyPicked(Specialty),
    LicenseNumber(String),
    Hospital(String),
    Password(String),
    ConfirmPassword(String),
    ToggleShowPassword,
    ToggleShowConfirm,
    AcceptTerms(bool),
    Continue,
    Submit,
    GoToLogin,
}

pub fn update(app: &mut MedVision, event: Event) -> Command<Message> {
    let wizard = &mut app.signup;
    match event {
        Event::RolePicked(role) => wizard.choose_role(role),
        Event::Back => wizard.back(),
        Event::FullName(value) => {
            wizard.personal.full_name = value;
            wizard.clear_error("full_name");
        }
        Event::Email(value) => {
            wizard.personal.email = value;
            wizard.clear_error("email");
        }
        Event::Phone(value) => {
            wizard.personal.phone = value;
            wizard.clear_error("phone");
        }
        Event::DateOfBirth(value) => {
            wizard.personal.date_of_birth = value;
            wizard.clear_error("date_of_birth");
        }
        Event::GenderPicked(gender) => {
            wizard.gender = Some(gender);
            wizard.clear_error("gender");
        }
        Event::Address(value) => {
            wizard.personal.address = value;
            wizard.clear_error("address");
        }
        Event::EmergencyContact(value) => {
            wizard.emergency.emergency_contact = value;
            wizard.clear_error("emergency_contact");
        }
        Event::EmergencyPhone(value) => {
            wizard.emergency.emergency_phone = value;
            wizard.clear_error("emergency_phone");
        }
        Event::SpecialtyPicked(specialty) => {
            wizard.specialty = Some(specialty);
            wizard.clear_error("specialty");
        }
        Event::LicenseNumber(value) => {
            wizard.credentials.license_number = value;
            wizard.clear_error("license_number");
        }
        Event::Hospital(value) => {
            wizard.credentials.hospital = value;
            wizard.clear_error("hospital");
        }
        Event::Password(value) => {
            wizard.security.password = value;
            wizard.clear_error("password");
        }
        Event::ConfirmPassword(value) => {
            wizard.security.confirm_password = value;
            wizard.clear_error("confirm_password");
        }
        Event::ToggleShowPassword => wizard.show_password = !wizard.show_password,
        Event::ToggleShowConfirm => wizard.show_confirm = !wizard.show_confirm,
        Event::AcceptTerms(value) => {
            wizard.accept_terms = value;
            wizard.clear_error("accept_terms");
        }
        Event::Continue => {
            wizard.advance();
        }
        Event::Submit => {
            if wizard.submit() {
                app.goto(Page::Login);
            }
        }
        Event::GoToLogin => app.goto(Page::Login),
    }
    Command::none()
}

fn step_indicator(current: Step) -> Element<'static, Message> {
    let mut bar = row![].spacing(24);
    for step in [Step::Role, Step::Details, Step::Security] {
        let marker = if step.position() < current.position() {
            "✓".to_string()
        } else {
            step.position().to_string()
        };
        let emphasis = if step == current { "● " } else { "" };
        bar = bar.push(text(format!("{emphasis}{marker} {}", step.label())).size(13));
    }
    bar.into()
}

fn labeled_input<'a>(
    label: &str,
    placeholder: &str,
    value: &str,
    error: Option<&str>,
    on_input: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    column![
        text(format!("{label} *")).size(13),
        text_input(placeholder, value).on_input(on_input),
        components::field_error(error),
    ]
    .spacing(4)
    .into()
}

fn role_selection() -> Element<'static, Message> {
    column![
        text("Choose Your Account Type").size(22),
        text("Select the option that best describes you").size(14),
        row![
            button(
                column![
                    text("I'm a Patient").size(16),
                    text("Check your breast health by entering your clinical test results and get instant AI-powered analysis")
                        .size(13),
                ]
                .spacing(6),
            )
            .padding(20)
            .width(Length::Fill)
            .on_press(Message::Signup(Event::RolePicked(Role::Patient))),
            button(
                column![
                    text("I'm a Medical Professional").size(16),
                    text("Review patient cases, manage appointments, and collaborate with healthcare teams")
                        .size(13),
                ]
                .spacing(6),
            )
            .padding(20)
            .width(Length::Fill)
            .on_press(Message::Signup(Event::RolePicked(Role::Doctor))),
        ]
        .spacing(20),
    ]
    .spacing(16)
    .into()
}

fn personal_info(app: &MedVision) -> Element<Message> {
    let wizard = &app.signup;

    let mut form = column![
        text("Personal Information").size(22),
        text("Please fill in all required fields to continue").size(14),
        row![
            labeled_input(
                "Full Name",
                "John Doe",
                &wizard.personal.full_name,
                wizard.error("full_name"),
                |value| Message::Signup(Event::FullName(value)),
            ),
            labeled_input(
                "Email Address",
                "john@example.com",
                &wizard.personal.email,
                wizard.error("email"),
                |value| Message::Signup(Event::Email(value)),
            ),
        ]
        .spacing(16),
        row![
            labeled_input(
                "Phone Number",
                "+20 10 1234 5678",
                &wizard.personal.phone,
                wizard.error("phone"),
                |value| Message::Signup(Event::Phone(value)),
            ),
            labeled_input(
                "Date of Birth",
                "YYYY-MM-DD",
                &wizard.personal.date_of_birth,
                wizard.error("date_of_birth"),
                |value| Message::Signup(Event::DateOfBirth(value)),
            ),
        ]
        .spacing(16),
        column![
            text("Gender *").size(13),
            row![
                radio("Male", Gender::Male, wizard.gender, |gender| {
                    Message::Signup(Event::GenderPicked(gender))
                }),
                radio("Female", Gender::Female, wizard.gender, |gender| {
                    Message::Signup(Event::GenderPicked(gender))
                }),
            ]
            .spacing(20),
            components::field_error(wizard.error("gender")),
        ]
        .spacing(4),
        labeled_input(
            "Address",
            "123 Main St, City, State, ZIP",
            &wizard.personal.address,
            wizard.error("address"),
            |value| Message::Signup(Event::Address(value)),
        ),
    ]
    .spacing(14);

    match wizard.role {
        Some(Role::Patient) => {
            form = form.push(horizontal_rule(1)).push(
                column![
                    text("Emergency Contact Information").size(16),
                    row![
                        labeled_input(
                            "Emergency Contact Name",
                            "Jane Doe",
                            &wizard.emergency.emergency_contact,
                            wizard.error("emergency_contact"),
                            |value| Message::Signup(Event::EmergencyContact(value)),
                        ),
                        labeled_input(
                            "Emergency Contact Phone",
                            "+20 11 9876 5432",
                            &wizard.emergency.emergency_phone,
                            wizard.error("emergency_phone"),
                            |value| Message::Signup(Event::EmergencyPhone(value)),
                        ),
                    ]
                    .spacing(16),
                ]
                .spacing(10),
            );
        }
        Some(Role::Doctor) => {
            form = form.push(horizontal_rule(1)).push(
                column![
                    text("Professional Information").size(16),
                    row![
                        column![
                            text("Medical Specialty *").size(13),
                            pick_list(
                                Specialty::iter().collect::<Vec<_>>(),
                                wizard.specialty,
                                |specialty| Message::Signup(Event::SpecialtyPicked(specialty)),
                            )
                            .placeholder("Select Specialty"),
                            components::field_error(wizard.error("specialty")),
                        ]
                        .spacing(4),
                        labeled_input(
                            "Medical License Number",
                            "MD-123456",
                            &wizard.credentials.license_number,
                            wizard.error("license_number"),
                            |value| Message::Signup(Event::LicenseNumber(value)),
                        ),
                    ]
                    .spacing(16),
                    labeled_input(
                        "Hospital/Clinic Affiliation",
                        "Medical Center Name",
                        &wizard.credentials.hospital,
                        wizard.error("hospital"),
                        |value| Message::Signup(Event::Hospital(value)),
                    ),
                ]
                .spacing(10),
            );
        }
        None => {}
    }

    form = form.push(
        row![
            button(text("Back").size(14)).on_press(Message::Signup(Event::Back)),
            button(text("Continue").size(14))
                .width(Length::Fill)
                .on_press(Message::Signup(Event::Continue)),
        ]
        .spacing(12),
    );

    form.into()
}

fn security_info(app: &MedVision) -> Element<Message> {
    let wizard = &app.signup;
    let checks = wizard.password_checks();
    let requirement = |label: &str, ok: bool| {
        text(format!("{} {label}", if ok { "✓" } else { "○" })).size(13)
    };

    column![
        text("Secure Your Account").size(22),
        text("Create a strong password to protect your information").size(14),
        column![
            text("Password *").size(13),
            row![
                text_input("Create a strong password", &wizard.security.password)
                    .secure(!wizard.show_password)
                    .on_input(|value| Message::Signup(Event::Password(value))),
                button(text(if wizard.show_password { "Hide" } else { "Show" }).size(12))
                    .on_press(Message::Signup(Event::ToggleShowPassword)),
            ]
            .spacing(8),
            components::field_error(wizard.error("password")),
        ]
        .spacing(4),
        column![
            text("Confirm Password *").size(13),
            row![
                text_input("Re-enter your password", &wizard.security.confirm_password)
                    .secure(!wizard.show_confirm)
                    .on_input(|value| Message::Signup(Event::ConfirmPassword(value))),
                button(text(if wizard.show_confirm { "Hide" } else { "Show" }).size(12))
                    .on_press(Message::Signup(Event::ToggleShowConfirm)),
            ]
            .spacing(8),
            components::field_error(wizard.error("confirm_password")),
        ]
        .spacing(4),
        column![
            text("Password Requirements").size(14),
            requirement("At least 8 characters", checks.min_length),
            requirement("One uppercase letter", checks.uppercase),
            requirement("One lowercase letter", checks.lowercase),
            requirement("One number", checks.digit),
        ]
        .spacing(4),
        column![
            checkbox(
                "I agree to the Terms of Service and Privacy Policy. I understand that my data \
                 will be securely stored and handled in compliance with privacy regulations.",
                wizard.accept_terms,
            )
            .on_toggle(|value| Message::Signup(Event::AcceptTerms(value))),
            components::field_error(wizard.error("accept_terms")),
        ]
        .spacing(4),
        row![
            button(text("Back").size(14)).on_press(Message::Signup(Event::Back)),
            button(text("Create Account").size(14))
                .width(Length::Fill)
                .on_press(Message::Signup(Event::Submit)),
        ]
        .spacing(12),
    ]
    .spacing(14)
    .into()
}

pub fn view(app: &MedVision) -> Element<Message> {
    let step_content = match app.signup.step {
        Step::Role => role_selection(),
        Step::Details => personal_info(app),
        Step::Security => security_info(app),
    };

    let page = column![
        text(&app.config.app.title).size(24),
        text(&app.config.app.tagline).size(13),
        step_indicator(app.signup.step),
        step_content,
        horizontal_rule(1),
        row![
            text("Already have an account?").size(13),
            button(text("Sign In").size(13)).on_press(Message::Signup(Event::GoToLogin)),
        ]
        .spacing(8),
    ]
    .spacing(18);

    iced::widget::scrollable(container(page).padding(32).width(Length::Fill)).into()
}
