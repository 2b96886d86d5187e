mod config;
mod error;
mod notifier;
mod overlay;
mod surface;
mod toast;

use iced::{
    window,
    futures::{SinkExt, Stream},
    stream,
    widget::{button, column, horizontal_space, row, text, text_input, Button, Column},
    Element, Length, Subscription, Task
};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::notifier::{HideTimer, ToastNotifier};
use crate::surface::ToastElements;
use crate::toast::Category;


fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    iced::application(Toaster::title, Toaster::update, Toaster::view)
        .subscription(Toaster::subscriptions)
        .run()
}



#[derive(Debug, Clone)]
pub enum Message {
    Shutdown,
    DumpedConfig,
    ConfigLoaded(Config),
    ConfigFailed(String),
    TitleChanged(String),
    MessageChanged(String),
    ShowPressed(Category),
    HidePressed,
    ToastExpired(HideTimer),
}

#[derive(Debug)]
pub struct Toaster {
    // Only a cleanly loaded configuration is written back on shutdown.
    config: Option<Config>,
    notifier: ToastNotifier<ToastElements>,
    title_input: String,
    message_input: String,
}

impl Toaster {
    pub fn title(&self) -> String {
        String::from("Toaster")
    }

    pub fn update(&mut self, event: Message) -> Task<Message> {
        match event {
            Message::Shutdown => {
                Task::perform(Self::dump_config(self.config.clone()), |x| x)
            }
            Message::DumpedConfig => {
                window::get_latest().and_then(window::close)
            }
            Message::ConfigLoaded(config) => {
                self.notifier.configure(config.hide_delay(), config.timer_policy);
                self.config = Some(config);
                Task::none()
            }
            Message::ConfigFailed(msg) => {
                warn!(error = %msg, "falling back to default configuration");
                let timer = self.notifier.error("Configuration", msg);
                Self::arm(timer)
            }
            Message::TitleChanged(input) => {
                self.title_input = input;
                Task::none()
            }
            Message::MessageChanged(input) => {
                self.message_input = input;
                Task::none()
            }
            Message::ShowPressed(category) => {
                let title = &self.title_input;
                let message = self.message_input.clone();
                let timer = match category {
                    Category::Success => self.notifier.success(title, message),
                    Category::Error => self.notifier.error(title, message),
                };
                Self::arm(timer)
            }
            Message::HidePressed => {
                self.notifier.hide();
                Task::none()
            }
            Message::ToastExpired(timer) => {
                self.notifier.expire(timer);
                Task::none()
            }
        }
    }

    fn arm(timer: HideTimer) -> Task<Message> {
        Task::perform(Self::expire_after(timer), |x| x)
    }

    async fn expire_after(timer: HideTimer) -> Message {
        tokio::time::sleep(timer.delay()).await;
        Message::ToastExpired(timer)
    }

    pub fn view(&self) -> Element<'_, Message> {
        let title = text_input("Title", &self.title_input)
            .id("toast-title-input")
            .on_input(Message::TitleChanged);

        let message = text_input("Message", &self.message_input)
            .id("toast-message-input")
            .on_input(Message::MessageChanged)
            .on_submit(Message::ShowPressed(Category::Success));

        let controls = row![
            padded_button("Show success")
                .on_press(Message::ShowPressed(Category::Success)),
            padded_button("Show error")
                .on_press(Message::ShowPressed(Category::Error)),
            horizontal_space(),
            padded_button("Hide")
                .on_press(Message::HidePressed),
        ]
        .spacing(12);

        let contents = Self::container("Toaster")
            .push(title)
            .push(message)
            .push(controls);

        let toast = overlay::view(self.notifier.surface(), Message::HidePressed);

        column![contents, toast]
            .padding(24)
            .width(Length::Fill)
            .into()
    }

    fn close_events(&self) -> Subscription<Message> {
        window::close_events().map(|_| Message::Shutdown)
    }

    fn subscriptions(&self) -> Subscription<Message> {
        Subscription::batch([self.initialize_subscription(), self.close_events()])
    }

    fn initialize_subscription(&self) -> Subscription<Message> {
        Subscription::run(Self::initialize_subscription_worker)
    }

    fn initialize_subscription_worker() -> impl Stream<Item = Message> {
        stream::channel(100, |mut output| async move {
            let message = match config::load().await {
                Ok(config) => Message::ConfigLoaded(config),
                Err(err) => Message::ConfigFailed(err.to_string()),
            };

            let _ = output.send(message).await;
        })
    }

    async fn dump_config(config: Option<Config>) -> Message {
        let Some(config) = config else {
            info!("configuration was not loaded, leaving it untouched");
            return Message::DumpedConfig;
        };

        if let Err(err) = config::save(&config).await {
            error!(error = %err, "failed to save configuration");
        }

        Message::DumpedConfig
    }

    pub fn new() -> Self {
        Toaster {
            config: None,
            notifier: ToastNotifier::with_config(ToastElements::new(), &Config::default()),
            title_input: String::new(),
            message_input: String::new(),
        }
    }

    fn container(title: &str) -> Column<'_, Message> {
        column![text(title).size(50)].spacing(20)
    }
}


impl Default for Toaster {
    fn default() -> Toaster {
        Toaster::new()
    }
}


fn padded_button<Message: Clone>(label: &str) -> Button<'_, Message> {
    button(text(label)).padding([12, 24])
}
