use std::sync::Arc;

use iced::{Application, Command, Element, Theme};
use log::info;

use crate::client::gui::views::search_view;
use crate::client::models::app_state::{lookup_command, SearchAppState};
use crate::client::models::messages::Message;
use crate::client::services::recipe_service::RecipeProvider;

/// Startup inputs handed to the iced runtime.
pub struct AppFlags {
    pub provider: Arc<dyn RecipeProvider>,
    /// Query searched automatically on launch; `None` starts idle.
    pub preload_query: Option<String>,
}

pub struct RecipeApp {
    pub state: SearchAppState,
    pub provider: Arc<dyn RecipeProvider>,
}

impl Application for RecipeApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = AppFlags;

    fn new(flags: AppFlags) -> (Self, Command<Message>) {
        let (state, request) = SearchAppState::startup(flags.preload_query.as_deref());
        let cmd = match request {
            Some(request) => {
                info!("[APP_START] Preloading recipes for '{}'", request.query);
                lookup_command(flags.provider.clone(), request)
            }
            None => Command::none(),
        };

        let app = RecipeApp {
            state,
            provider: flags.provider,
        };
        (app, cmd)
    }

    fn title(&self) -> String {
        "Recipe Finder".to_string()
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        self.state.update(message, &self.provider)
    }

    fn view(&self) -> Element<Message> {
        search_view::view(&self.state)
    }
}
