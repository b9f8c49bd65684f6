use crate::{
    db::kv::Kv,
    libs::messages::Message,
    msg_error, msg_info, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Input, Password};

const KEY_USERNAME: &str = "user_username";

#[derive(Debug, Args)]
pub struct AccountArgs {
    #[command(subcommand)]
    command: Option<AccountCommand>,
}

#[derive(Debug, Subcommand)]
enum AccountCommand {
    /// Placeholder sign-in, nothing is sent anywhere
    Login,
    /// Show or set the stored username
    Username {
        /// New username, prints the current one when omitted
        name: Option<String>,
    },
}

pub fn cmd(args: AccountArgs) -> Result<()> {
    match args.command {
        Some(AccountCommand::Login) => handle_login(),
        Some(AccountCommand::Username { name: Some(name) }) => handle_set_username(name),
        Some(AccountCommand::Username { name: None }) | None => handle_show_username(),
    }
}

/// Field validation only: both fields present and a password of at least
/// six characters. There is no backend to call.
fn handle_login() -> Result<()> {
    let email: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptEmail.to_string())
        .allow_empty(true)
        .interact_text()?;
    let password = Password::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptPassword.to_string())
        .allow_empty_password(true)
        .interact()?;

    if email.is_empty() || password.is_empty() {
        msg_error!(Message::LoginMissingFields);
        return Ok(());
    }
    if password.chars().count() < 6 {
        msg_error!(Message::LoginPasswordTooShort);
        return Ok(());
    }

    msg_success!(Message::LoginSuccess(email));
    Ok(())
}

fn handle_set_username(name: String) -> Result<()> {
    let name = name.trim().to_string();
    if name.is_empty() {
        msg_error!(Message::UsernameEmpty);
        return Ok(());
    }

    if !Kv::new()?.save(KEY_USERNAME, &name) {
        msg_error!(Message::UsernameSaveFailed);
        return Ok(());
    }
    msg_success!(Message::UsernameSaved(name));
    Ok(())
}

fn handle_show_username() -> Result<()> {
    match Kv::new()?.get::<String>(KEY_USERNAME) {
        Some(name) => msg_info!(Message::CurrentUsername(name)),
        None => msg_info!(Message::NoUsernameSet),
    }
    Ok(())
}
