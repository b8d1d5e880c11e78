//! Role-conditional layout chrome shared by the authenticated pages.
//!
//! The header and sidebar are a pure branch on the session role; neither
//! holds state of its own.

use iced::widget::{button, column, container, horizontal_rule, row, scrollable, text, Space};
use iced::{Element, Length};

use crate::data;
use crate::models::{Page, Role};
use crate::ui::app::{MedVision, Message};

/// Pages listed in the sidebar for each role, with their labels.
fn nav_items(role: Role) -> Vec<(Page, String)> {
    let messages = format!("Messages ({})", data::unread_messages(role));
    match role {
        Role::Patient => vec![
            (Page::PatientDashboard, "Dashboard".into()),
            (Page::Screening, "New Screening".into()),
            (Page::Appointments, "Appointments".into()),
            (Page::Messages, messages),
            (Page::Profile, "My Profile".into()),
            (Page::Settings, "Settings".into()),
        ],
        Role::Doctor => vec![
            (Page::DoctorDashboard, "Patient Cases".into()),
            (Page::Appointments, "Appointments".into()),
            (Page::Messages, messages),
            (Page::Profile, "My Profile".into()),
            (Page::Settings, "Settings".into()),
        ],
    }
}

fn header(app: &MedVision, role: Role) -> Element<Message> {
    let brand_subtitle = match role {
        Role::Doctor => "Doctor Portal".to_string(),
        Role::Patient => app.config.app.tagline.clone(),
    };
    let brand = column![
        text(&app.config.app.title).size(22),
        text(brand_subtitle).size(12),
    ]
    .spacing(2);

    let profile = data::profile_for(role);
    let user_subtitle = match role {
        Role::Doctor => profile
            .specialty
            .clone()
            .unwrap_or_else(|| "Medical Professional".into()),
        Role::Patient => "Patient ID: #12847".into(),
    };
    let user = column![text(profile.full_name).size(14), text(user_subtitle).size(11)].spacing(2);

    let bar = row![
        brand,
        Space::with_width(Length::Fill),
        user,
        button(text("Sign Out").size(14)).on_press(Message::Logout),
    ]
    .spacing(16);

    column![container(bar).padding(16), horizontal_rule(1)].into()
}

fn sidebar(role: Role, active: Page) -> Element<'static, Message> {
    let mut nav = column![].spacing(6);
    for (page, label) in nav_items(role) {
        let label = if page == active {
            format!("» {label}")
        } else {
            label
        };
        nav = nav.push(
            button(text(label).size(14))
                .width(Length::Fill)
                .on_press(Message::Navigate(page)),
        );
    }

    let footer: Element<'static, Message> = match role {
        Role::Patient => column![
            text("Need Immediate Help?").size(14),
            text("Our support team is available 24/7").size(12),
            button(text("Contact Support").size(13)),
        ]
        .spacing(6)
        .into(),
        Role::Doctor => column![
            text("Need Help?").size(14),
            text("Contact technical support or view documentation").size(12),
            button(text("Get Support").size(13)),
        ]
        .spacing(6)
        .into(),
    };

    container(
        column![nav, Space::with_height(Length::Fill), footer].spacing(16),
    )
    .width(Length::Fixed(220.0))
    .height(Length::Fill)
    .padding(16)
    .into()
}

/// Header + sidebar + scrolling main area for the authenticated pages.
pub fn shell<'a>(
    app: &'a MedVision,
    active: Page,
    content: Element<'a, Message>,
) -> Element<'a, Message> {
    // The navigation guard keeps unauthenticated sessions on login/signup,
    // so a missing role never renders; default keeps the view total.
    let role = app.session.role().unwrap_or(Role::Patient);
    column![
        header(app, role),
        row![
            sidebar(role, active),
            scrollable(container(content).padding(24).width(Length::Fill)),
        ]
        .height(Length::Fill),
    ]
    .into()
}

/// Inline field error, or nothing.
pub fn field_error<'a>(message: Option<&str>) -> Element<'a, Message> {
    match message {
        Some(message) => text(format!("⚠ {message}")).size(12).into(),
        None => Space::with_height(Length::Shrink).into(),
    }
}

/// Section heading with a one-line description under it.
pub fn section_title<'a>(title: &str, subtitle: &str) -> Element<'a, Message> {
    column![text(title.to_string()).size(18), text(subtitle.to_string()).size(13)]
        .spacing(4)
        .into()
}

/// Page heading used at the top of most main areas.
pub fn page_heading<'a>(title: &str, subtitle: &str) -> Element<'a, Message> {
    column![text(title.to_string()).size(26), text(subtitle.to_string()).size(14)]
        .spacing(4)
        .into()
}
