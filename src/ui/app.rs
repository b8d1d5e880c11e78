//! Application shell: session state, message dispatch, timer subscription.

use std::time::Duration;

use iced::{executor, time, Application, Command, Element, Subscription, Theme};
use tracing::warn;

use crate::config::Config;
use crate::core::appointments::AppointmentsView;
use crate::core::auth::LoginForm;
use crate::core::messages::InboxView;
use crate::core::profile::ProfileView;
use crate::core::screening::ScreeningWizard;
use crate::core::session::Session;
use crate::core::settings::SettingsView;
use crate::core::signup::SignupWizard;
use crate::models::Page;
use crate::ui::pages;

pub struct MedVision {
    pub(crate) config: Config,
    pub(crate) session: Session,
    pub(crate) login: LoginForm,
    pub(crate) signup: SignupWizard,
    pub(crate) screening: ScreeningWizard,
    pub(crate) appointments: AppointmentsView,
    pub(crate) inbox: InboxView,
    pub(crate) profile: Option<ProfileView>,
    pub(crate) settings: SettingsView,
    // Dashboard-local view state
    pub(crate) tip_index: usize,
    pub(crate) case_page: u32,
}

#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Page),
    Logout,
    ProcessingTick,
    Login(pages::login::Event),
    Signup(pages::signup::Event),
    Dashboard(pages::dashboard::Event),
    Screening(pages::screening::Event),
    Appointments(pages::appointments::Event),
    Inbox(pages::messages::Event),
    Profile(pages::profile::Event),
    Settings(pages::settings::Event),
}

impl MedVision {
    /// Navigate if the session allows it; refused navigations are logged
    /// and the current page stays up.
    pub(crate) fn goto(&mut self, page: Page) {
        match self.session.navigate(page) {
            Ok(()) => self.enter(page),
            Err(error) => warn!(%error, "navigation refused"),
        }
    }

    /// Remount the target page with fresh state; nothing a page holds
    /// survives navigating away from it.
    pub(crate) fn enter(&mut self, page: Page) {
        match page {
            Page::Login => self.login = LoginForm::default(),
            Page::Signup => self.signup = SignupWizard::new(),
            Page::Screening => {
                self.screening = ScreeningWizard::new(self.config.screening.clone())
            }
            Page::Appointments => self.appointments = AppointmentsView::default(),
            Page::Messages => self.inbox = InboxView::new(),
            Page::Profile => {
                self.profile = self.session.role().map(ProfileView::new);
            }
            Page::Settings => self.settings = SettingsView::new(),
            Page::PatientDashboard | Page::DoctorDashboard => {
                self.tip_index = 0;
                self.case_page = 1;
            }
        }
    }
}

impl Application for MedVision {
    type Executor = executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = Config;

    fn new(config: Config) -> (Self, Command<Message>) {
        let screening = ScreeningWizard::new(config.screening.clone());
        (
            Self {
                config,
                session: Session::default(),
                login: LoginForm::default(),
                signup: SignupWizard::new(),
                screening,
                appointments: AppointmentsView::default(),
                inbox: InboxView::new(),
                profile: None,
                settings: SettingsView::new(),
                tip_index: 0,
                case_page: 1,
            },
            Command::none(),
        )
    }

    fn title(&self) -> String {
        self.config.app.title.clone()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::Navigate(page) => {
                self.goto(page);
                Command::none()
            }
            Message::Logout => {
                self.session.logout();
                self.enter(Page::Login);
                Command::none()
            }
            Message::ProcessingTick => {
                self.screening.tick(&mut rand::thread_rng());
                Command::none()
            }
            Message::Login(event) => pages::login::update(self, event),
            Message::Signup(event) => pages::signup::update(self, event),
            Message::Dashboard(event) => pages::dashboard::update(self, event),
            Message::Screening(event) => pages::screening::update(self, event),
            Message::Appointments(event) => pages::appointments::update(self, event),
            Message::Inbox(event) => pages::messages::update(self, event),
            Message::Profile(event) => pages::profile::update(self, event),
            Message::Settings(event) => pages::settings::update(self, event),
        }
    }

    fn view(&self) -> Element<Message> {
        match self.session.page() {
            Page::Login => pages::login::view(self),
            Page::Signup => pages::signup::view(self),
            Page::DoctorDashboard => pages::dashboard::doctor(self),
            Page::PatientDashboard => pages::dashboard::patient(self),
            Page::Screening => pages::screening::view(self),
            Page::Appointments => pages::appointments::view(self),
            Page::Messages => pages::messages::view(self),
            Page::Profile => pages::profile::view(self),
            Page::Settings => pages::settings::view(self),
        }
    }

    /// The only timer in the app: the simulated-analysis tick, live solely
    /// while the screening page is processing.
    fn subscription(&self) -> Subscription<Message> {
        if self.session.page() == Page::Screening && self.screening.is_processing() {
            time::every(Duration::from_millis(self.config.screening.tick_ms))
                .map(|_| Message::ProcessingTick)
        } else {
            Subscription::none()
        }
    }
}
