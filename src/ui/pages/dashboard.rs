//! Role dashboards: patient overview and the doctor case table.

use iced::widget::{button, column, horizontal_rule, row, text, Space};
use iced::{Command, Element, Length};

use crate::data;
use crate::models::Page;
use crate::ui::app::{MedVision, Message};
use crate::ui::components;

/// Mock pagination: the table always shows the same rows.
const TOTAL_CASE_PAGES: u32 = 10;

#[derive(Debug, Clone)]
pub enum Event {
    PrevTip,
    NextTip,
    SelectTip(usize),
    PrevCasePage,
    NextCasePage,
}

pub fn update(app: &mut MedVision, event: Event) -> Command<Message> {
    let tips = data::health_tips().len();
    match event {
        Event::PrevTip => {
            app.tip_index = if app.tip_index == 0 {
                tips - 1
            } else {
                app.tip_index - 1
            };
        }
        Event::NextTip => {
            app.tip_index = if app.tip_index + 1 >= tips {
                0
            } else {
                app.tip_index + 1
            };
        }
        Event::SelectTip(index) => {
            if index < tips {
                app.tip_index = index;
            }
        }
        Event::PrevCasePage => app.case_page = app.case_page.max(2) - 1,
        Event::NextCasePage => app.case_page = (app.case_page + 1).min(TOTAL_CASE_PAGES),
    }
    Command::none()
}

// ===== Doctor dashboard =====

fn stats_row() -> Element<'static, Message> {
    let mut cards = row![].spacing(16);
    for stat in data::dashboard_stats() {
        cards = cards.push(
            column![
                text(stat.title.clone()).size(13),
                text(stat.value.clone()).size(24),
                text("Updated just now").size(11),
            ]
            .spacing(4)
            .width(Length::Fill),
        );
    }
    cards.into()
}

fn case_table(app: &MedVision) -> Element<Message> {
    let mut table = column![
        components::section_title("Recent Cases", "Click on a case to view detailed analysis"),
        row![
            text("Patient Name").size(13).width(Length::FillPortion(2)),
            text("ID").size(13).width(Length::FillPortion(1)),
            text("Date Uploaded").size(13).width(Length::FillPortion(1)),
            text("AI Screening Status").size(13).width(Length::FillPortion(2)),
            text("Action").size(13).width(Length::FillPortion(1)),
        ]
        .spacing(8),
        horizontal_rule(1),
    ]
    .spacing(10);

    for case in data::reviewable_cases() {
        table = table.push(
            row![
                text(format!("{}  {}", case.initials(), case.name))
                    .size(13)
                    .width(Length::FillPortion(2)),
                text(case.case_number.clone())
                    .size(13)
                    .width(Length::FillPortion(1)),
                text(case.uploaded.format("%b %-d, %Y").to_string())
                    .size(13)
                    .width(Length::FillPortion(1)),
                text(case.status.display_text())
                    .size(13)
                    .width(Length::FillPortion(2)),
                button(text(case.status.action_label()).size(12))
                    .width(Length::FillPortion(1)),
            ]
            .spacing(8),
        );
    }

    table = table.push(horizontal_rule(1)).push(
        row![
            text("Showing 5 of 60 total cases").size(12),
            Space::with_width(Length::Fill),
            button(text("‹").size(13)).on_press(Message::Dashboard(Event::PrevCasePage)),
            text(format!("{} of {TOTAL_CASE_PAGES}", app.case_page)).size(13),
            button(text("›").size(13)).on_press(Message::Dashboard(Event::NextCasePage)),
        ]
        .spacing(10),
    );

    table.into()
}

pub fn doctor(app: &MedVision) -> Element<Message> {
    let content = column![
        components::page_heading(
            "Patient Cases Overview",
            "Review and manage AI-screened patient cases",
        ),
        stats_row(),
        case_table(app),
    ]
    .spacing(20);
    components::shell(app, Page::DoctorDashboard, content.into())
}

// ===== Patient dashboard =====

fn tip_carousel(app: &MedVision) -> Element<Message> {
    let tips = data::health_tips();
    let tip = &tips[app.tip_index.min(tips.len() - 1)];

    let mut dots = row![].spacing(6);
    for index in 0..tips.len() {
        let marker = if index == app.tip_index { "●" } else { "○" };
        dots = dots.push(
            button(text(marker).size(11)).on_press(Message::Dashboard(Event::SelectTip(index))),
        );
    }

    column![
        row![
            text("Daily Health Tip").size(16),
            Space::with_width(Length::Fill),
            button(text("‹").size(13)).on_press(Message::Dashboard(Event::PrevTip)),
            button(text("›").size(13)).on_press(Message::Dashboard(Event::NextTip)),
        ]
        .spacing(8),
        text(tip.text.clone()).size(14),
        dots,
    ]
    .spacing(10)
    .into()
}

fn analysis_report() -> Element<'static, Message> {
    let snapshot = data::analysis_snapshot();
    let mut activity = row![].spacing(12);
    for (label, value) in &snapshot.activity {
        activity = activity.push(column![text(value.to_string()).size(12), text(label.clone()).size(11)].spacing(2));
    }

    column![
        row![
            text("Analysis Report").size(16),
            Space::with_width(Length::Fill),
            text("In Progress").size(12),
        ],
        text("Status: Mammogram Uploaded. AI Analysis in Progress...").size(13),
        text(format!("{} • {}", snapshot.file_name, snapshot.file_size)).size(12),
        row![
            text("Analysis Progress").size(12),
            text(format!("{}%", snapshot.progress)).size(12),
        ]
        .spacing(12),
        iced::widget::progress_bar(0.0..=100.0, f32::from(snapshot.progress)),
        text("AI Processing Activity").size(14),
        activity,
        text(
            "Your results will be reviewed by our AI system and a certified radiologist. \
             You'll receive a notification once the analysis is complete, typically within \
             24-48 hours.",
        )
        .size(12),
    ]
    .spacing(10)
    .into()
}

fn actions_sidebar() -> Element<'static, Message> {
    let mut specialists = column![text("Available Specialists").size(15)].spacing(8);
    for doctor in data::specialists() {
        specialists = specialists.push(
            column![
                text(doctor.name.clone()).size(14),
                text(doctor.specialty.clone()).size(12),
                text(format!("★ {} ({})", doctor.rating, doctor.reviews)).size(12),
                text(doctor.location.clone()).size(11),
                button(text("View Profile").size(12)),
            ]
            .spacing(3),
        );
    }
    specialists = specialists.push(button(text("View All Specialists →").size(12)));

    column![
        button(text("Upload New Results").size(14))
            .width(Length::Fill)
            .on_press(Message::Navigate(Page::Screening)),
        button(text("Book Lab Appointment").size(14))
            .width(Length::Fill)
            .on_press(Message::Navigate(Page::Appointments)),
        specialists,
    ]
    .spacing(12)
    .into()
}

pub fn patient(app: &MedVision) -> Element<Message> {
    let content = column![
        tip_carousel(app),
        row![
            column![analysis_report()].width(Length::FillPortion(2)),
            column![actions_sidebar()].width(Length::FillPortion(1)),
        ]
        .spacing(20),
    ]
    .spacing(20);
    components::shell(app, Page::PatientDashboard, content.into())
}
