use crate::api::ApiClient;
use crate::cli::actions::AuthAction;
use crate::cli::globals::GlobalArgs;
use crate::features::auth::client as auth;
use crate::features::auth::types::{LoginRequest, RegisterRequest};
use crate::session::SessionStore;
use anyhow::Result;
use secrecy::ExposeSecret;
use tracing::info;

/// Handle the auth actions.
pub async fn handle(action: AuthAction, globals: &GlobalArgs) -> Result<()> {
    let store = SessionStore::new();

    match action {
        AuthAction::Login { email, password } => {
            let client = ApiClient::new(&globals.api_url, None)?;
            let request = LoginRequest {
                email,
                password: password.expose_secret().to_string(),
            };

            info!("signing in to {}", globals.api_url);
            let session = auth::login(&client, &request).await?;
            store.save(&session)?;
            println!("Signed in as {}", session.display_name());
        }
        AuthAction::Signup {
            name,
            email,
            password,
        } => {
            let client = ApiClient::new(&globals.api_url, None)?;
            let request = RegisterRequest {
                name,
                email,
                password: password.expose_secret().to_string(),
            };

            info!("registering account at {}", globals.api_url);
            let session = auth::register(&client, &request).await?;
            store.save(&session)?;
            println!("Account created for {}", session.display_name());
        }
        AuthAction::Logout => {
            store.clear()?;
            println!("Signed out");
        }
        AuthAction::Profile => match store.load()? {
            Some(session) => {
                println!("Name:  {}", session.name.as_deref().unwrap_or("-"));
                println!("Email: {}", session.email.as_deref().unwrap_or("-"));
            }
            None => println!("No active session. Run `questiongen login` first."),
        },
    }

    Ok(())
}
