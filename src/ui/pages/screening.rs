//! Screening page: intake form, simulated processing, results.

use iced::widget::{button, column, progress_bar, row, text, text_input};
use iced::{Command, Element, Length};

use crate::core::screening::{stages, AnalysisReport, Feature, FeatureGroup, Phase};
use crate::models::Page;
use crate::ui::app::{MedVision, Message};
use crate::ui::components;

#[derive(Debug, Clone)]
pub enum Event {
    Input(Feature, String),
    Submit,
    Restart,
}

pub fn update(app: &mut MedVision, event: Event) -> Command<Message> {
    match event {
        Event::Input(feature, raw) => {
            // Keystrokes failing the decimal filter are dropped.
            app.screening.input(feature, raw);
        }
        Event::Submit => {
            // On success the subscription starts delivering ticks.
            app.screening.submit();
        }
        Event::Restart => app.screening.restart(),
    }
    Command::none()
}

fn feature_field(app: &MedVision, feature: Feature) -> Element<Message> {
    column![
        text(format!("{} *", feature.label())).size(12),
        text_input("0.00", app.screening.value(feature))
            .on_input(move |value| Message::Screening(Event::Input(feature, value))),
        components::field_error(app.screening.error(feature)),
    ]
    .spacing(3)
    .into()
}

fn group_section(app: &MedVision, group: FeatureGroup) -> Element<Message> {
    let mut section = column![components::section_title(group.title(), group.subtitle())]
        .spacing(10);
    let features: Vec<Feature> = Feature::in_group(group).collect();
    for pair in features.chunks(2) {
        let mut line = row![].spacing(16);
        for &feature in pair {
            line = line.push(feature_field(app, feature));
        }
        section = section.push(line);
    }
    section.into()
}

fn input_view(app: &MedVision) -> Element<Message> {
    column![
        components::page_heading(
            "Medical Analysis",
            "Enter cell feature measurements for AI-powered breast cancer prediction",
        ),
        group_section(app, FeatureGroup::Mean),
        group_section(app, FeatureGroup::StdError),
        group_section(app, FeatureGroup::Worst),
        column![
            text("Important Information").size(14),
            text("• All fields are required and must contain positive numerical values").size(12),
            text("• These measurements are typically obtained from fine needle aspirate (FNA) of breast mass").size(12),
            text("• Values should be entered as provided by your laboratory or imaging center").size(12),
            text("• AI prediction is for screening purposes only and must be confirmed by medical professionals").size(12),
        ]
        .spacing(3),
        button(text("Submit for Prediction").size(15))
            .width(Length::Fill)
            .on_press(Message::Screening(Event::Submit)),
    ]
    .spacing(20)
    .into()
}

fn processing_view(app: &MedVision) -> Element<Message> {
    let progress = app.screening.progress();
    let mut lamps = row![].spacing(24);
    for (label, reached) in stages(progress) {
        lamps = lamps.push(
            text(format!("{} {label}", if reached { "●" } else { "○" })).size(13),
        );
    }

    column![
        text("AI Analysis in Progress").size(22),
        text("Processing your medical data using advanced machine learning algorithms...").size(14),
        row![
            text("Analysis Progress").size(13),
            text(format!("{progress}%")).size(13),
        ]
        .spacing(12),
        progress_bar(0.0..=100.0, f32::from(progress)),
        lamps,
        text("This typically takes 30-60 seconds. Please do not close this window.").size(12),
    ]
    .spacing(16)
    .into()
}

fn results_view<'a>(app: &'a MedVision, report: &'a AnalysisReport) -> Element<'a, Message> {
    let prediction = report.outcome.to_string().to_uppercase();
    let confidence_card = column![
        text("AI Confidence").size(13),
        text(format!("{:.1}%", report.confidence)).size(26),
    ]
    .spacing(4)
    .width(Length::Fill);
    let risk_card = column![
        text("Risk Score").size(13),
        text(format!("{:.1}", report.risk_score)).size(26),
        text(report.risk_band().to_string()).size(13),
    ]
    .spacing(4)
    .width(Length::Fill);
    let method_card = column![
        text("Analysis Method").size(13),
        text("30 Features").size(20),
        text("Cell nuclei characteristics analyzed").size(13),
    ]
    .spacing(4)
    .width(Length::Fill);

    column![
        components::page_heading("Prediction Results", "Your AI-powered analysis is complete"),
        row![
            text("Diagnosis Prediction").size(18),
            text(prediction).size(18),
        ]
        .spacing(20),
        row![confidence_card, risk_card, method_card].spacing(16),
        column![text("Clinical Findings").size(15), text(report.findings).size(13)].spacing(6),
        column![
            text("Recommendations").size(15),
            text(report.recommendation).size(13),
        ]
        .spacing(6),
        row![
            button(text("Book Consultation").size(14))
                .width(Length::Fill)
                .on_press(Message::Navigate(Page::Appointments)),
            button(text("Message Doctor").size(14))
                .width(Length::Fill)
                .on_press(Message::Navigate(Page::Messages)),
            button(text("New Analysis").size(14))
                .width(Length::Fill)
                .on_press(Message::Screening(Event::Restart)),
        ]
        .spacing(12),
        column![
            text(report.notice_title()).size(15),
            text(report.notice).size(13),
        ]
        .spacing(6),
        column![
            text("Submitted Data Summary").size(15),
            row![
                text("Mean Features: 10 values").size(13),
                text("Error Measures: 10 values").size(13),
                text("Worst Values: 10 values").size(13),
                text("Total Features: 30 analyzed").size(13),
            ]
            .spacing(16),
        ]
        .spacing(6),
    ]
    .spacing(18)
    .into()
}

pub fn view(app: &MedVision) -> Element<Message> {
    let content = match app.screening.phase() {
        Phase::Input => input_view(app),
        Phase::Processing { .. } => processing_view(app),
        Phase::Results(report) => results_view(app, report),
    };
    components::shell(app, Page::Screening, content)
}
