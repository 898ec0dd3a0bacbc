//! `AcctDesk` - Desktop editor for LDAP and local account records.
//!
//! Built with Rust and the iced GUI framework. Every edit goes through the
//! account store, which saves the full list after each change.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod message;
mod model;
mod style;
mod view;

use anyhow::Context;
use iced::widget::{column, container, scrollable};
use iced::{Element, Length, Task};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use acctdesk_core::{AccountId, AccountStore, StoreConfig};

use message::{AccountMessage, Message};
use model::AccountFormState;

fn main() -> iced::Result {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "acctdesk=debug,acctdesk_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting AcctDesk");

    iced::application(AcctDesk::new, AcctDesk::update, AcctDesk::view)
        .title("AcctDesk")
        .run()
}

/// Main application state.
struct AcctDesk {
    /// Persistent account list.
    store: AccountStore,
    /// Form editing state.
    form: AccountFormState,
}

impl AcctDesk {
    /// Create new application instance.
    fn new() -> (Self, Task<Message>) {
        let app = match open_store() {
            Ok(store) => Self::with_store(store, None),
            Err(e) => {
                warn!("Falling back to unsaved accounts: {e:#}");
                Self::with_store(
                    AccountStore::detached(),
                    Some(format!("{e:#}. Changes will not be saved.")),
                )
            }
        };
        (app, Task::none())
    }

    fn with_store(store: AccountStore, error: Option<String>) -> Self {
        Self {
            store,
            form: AccountFormState::new(error),
        }
    }

    /// Update state based on message.
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::AddAccount => {
                let id = self.store.add_account();
                info!("Created account {id}");
            }
            Message::RemoveAccount(id) => {
                if self.store.remove_account(&id) {
                    info!("Removed account {id}");
                }
                self.form.forget(&id);
            }
            Message::Account(id, edit) => self.apply_edit(id, edit),
            Message::DismissError => {
                self.form.error = None;
            }
        }
        Task::none()
    }

    /// Apply a field edit to one account.
    fn apply_edit(&mut self, id: AccountId, edit: AccountMessage) {
        match edit {
            AccountMessage::LabelsChanged(input) => {
                self.store.set_labels_from_input(&id, &input);
                self.form.set_label_draft(id, input);
            }
            AccountMessage::LabelsSubmitted => self.form.clear_label_draft(&id),
            AccountMessage::TypeSelected(kind) => {
                self.store.set_type(&id, kind);
            }
            AccountMessage::LoginChanged(login) => {
                self.store.set_login(&id, login);
            }
            AccountMessage::PasswordChanged(password) => {
                self.store.set_password(&id, password);
            }
        }
    }

    /// Render the current state.
    fn view(&self) -> Element<'_, Message> {
        let content = column![
            view::view_header(self.store.len(), self.store.is_persistent()),
            view::view_error_banner(self.form.error.as_deref()),
            view::view_account_list(&self.store, &self.form),
        ]
        .spacing(20)
        .padding(32)
        .max_width(1100);

        container(scrollable(container(content).center_x(Length::Fill)))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(style::page_style)
            .into()
    }
}

/// Load configuration and open the persistent store.
fn open_store() -> anyhow::Result<AccountStore> {
    let config = StoreConfig::load().context("Failed to load configuration")?;
    AccountStore::open(&config).context("Failed to open account storage")
}
