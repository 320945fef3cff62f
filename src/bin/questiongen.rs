use anyhow::Result;
use questiongen::cli::{actions, actions::Action, start};

// Main function
#[tokio::main]
async fn main() -> Result<()> {
    // Start the program
    let (globals, action) = start()?;

    // Handle the action
    match action {
        Action::Auth(action) => actions::auth::handle(action, &globals).await?,
        Action::Questions(action) => actions::questions::handle(action, &globals).await?,
        Action::Images(action) => actions::images::handle(action, &globals).await?,
    }

    Ok(())
}
