//! Account list view.
//!
//! One card per account with the label, type, login and password fields.

use iced::widget::{Column, button, column, container, pick_list, row, text, text_input};
use iced::{Alignment, Element, Length};

use acctdesk_core::{Account, AccountId, AccountStore, AccountType};

use crate::message::{AccountMessage, Message};
use crate::model::AccountFormState;
use crate::style;
use crate::style::palette;

/// Render all accounts in the store.
pub fn view_account_list<'a>(
    store: &'a AccountStore,
    form: &'a AccountFormState,
) -> Element<'a, Message> {
    let p = palette::current();

    if store.is_empty() {
        return container(
            text("No accounts yet. Use \"Add account\" to create one.")
                .size(14)
                .color(p.text_muted),
        )
        .padding(20)
        .center_x(Length::Fill)
        .into();
    }

    Column::with_children(
        store
            .accounts()
            .iter()
            .map(|account| account_card(account, form)),
    )
    .spacing(12)
    .into()
}

/// Render a single account.
fn account_card<'a>(account: &'a Account, form: &AccountFormState) -> Element<'a, Message> {
    let id = &account.id;

    let labels = text_input("ops; prod", &form.label_text(account))
        .on_input(on_field(id.clone(), AccountMessage::LabelsChanged))
        .on_submit(Message::Account(
            id.clone(),
            AccountMessage::LabelsSubmitted,
        ))
        .padding(8)
        .style(style::field_input_style);

    let type_id = id.clone();
    let kind = pick_list(AccountType::ALL, Some(account.kind), move |kind| {
        Message::Account(type_id.clone(), AccountMessage::TypeSelected(kind))
    })
    .padding(8)
    .width(Length::Fill);

    let login = text_input("Login", &account.login)
        .on_input(on_field(id.clone(), AccountMessage::LoginChanged))
        .padding(8)
        .style(style::field_input_style);

    let remove = button(text("Remove").size(13))
        .on_press(Message::RemoveAccount(id.clone()))
        .padding([8, 14])
        .style(style::danger_button_style);

    let fields = row![
        field("Labels", labels, 3),
        field("Type", kind, 2),
        field("Login", login, 3),
        password_field(account),
        remove,
    ]
    .spacing(12)
    .align_y(Alignment::End);

    container(fields)
        .padding(16)
        .width(Length::Fill)
        .style(style::card_style)
        .into()
}

/// Password input for local accounts; a note for LDAP ones.
fn password_field(account: &Account) -> Element<'_, Message> {
    if account.kind.stores_password() {
        let input = text_input("Password", account.password.as_deref().unwrap_or_default())
            .on_input(on_field(account.id.clone(), AccountMessage::PasswordChanged))
            .secure(true)
            .padding(8)
            .style(style::field_input_style);
        field("Password", input, 3)
    } else {
        let p = palette::current();
        let note = container(
            text("Managed by the directory")
                .size(13)
                .color(p.text_muted),
        )
        .padding(8);
        field("Password", note, 3)
    }
}

/// Labeled form field taking `portion` of the row width.
fn field<'a>(
    label: &'a str,
    input: impl Into<Element<'a, Message>>,
    portion: u16,
) -> Element<'a, Message> {
    let p = palette::current();
    column![text(label).size(12).color(p.text_secondary), input.into()]
        .spacing(4)
        .width(Length::FillPortion(portion))
        .into()
}

/// Map a text input's value to an edit of account `id`.
fn on_field(
    id: AccountId,
    to_message: fn(String) -> AccountMessage,
) -> impl Fn(String) -> Message {
    move |value| Message::Account(id.clone(), to_message(value))
}
