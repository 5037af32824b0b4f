//! Session commands: login, register, logout.
//!
//! The backend owns authentication; we only obtain a token, persist it in
//! the config and send it as a bearer header from then on.

use anyhow::Result;
use dialoguer::Input;
use owo_colors::OwoColorize;

use crate::client::ApiClient;
use crate::config::Config;

pub async fn login(mut config: Config, username: Option<String>) -> Result<()> {
    let username = match username {
        Some(u) => u,
        None => Input::<String>::new().with_prompt("  Username").interact_text()?,
    };
    let password = rpassword::prompt_password("  Password: ")?;

    let client = ApiClient::new(&config);
    let token = client.login(&username, &password).await?;

    config.token = Some(token);
    config.save()?;

    println!("{}", format!("Logged in as {username}").green());
    Ok(())
}

pub async fn register(config: Config, username: Option<String>) -> Result<()> {
    let username = match username {
        Some(u) => u,
        None => Input::<String>::new().with_prompt("  Username").interact_text()?,
    };
    let email: String = Input::new().with_prompt("  Email").interact_text()?;
    let password = rpassword::prompt_password("  Password: ")?;

    let client = ApiClient::new(&config);
    client.register(&username, &email, &password).await?;

    println!("{}", "Registered. You can now log in with: calgrid login".green());
    Ok(())
}

pub fn logout(mut config: Config) -> Result<()> {
    if config.token.take().is_none() {
        println!("{}", "Not logged in".dimmed());
        return Ok(());
    }

    config.save()?;
    println!("{}", "Logged out".green());
    Ok(())
}
