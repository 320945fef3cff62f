use crate::cli::actions::ImagesAction;
use crate::cli::globals::GlobalArgs;
use crate::features::images::client as images;
use anyhow::Result;
use tracing::info;

/// Handle the image tooling actions.
pub async fn handle(action: ImagesAction, globals: &GlobalArgs) -> Result<()> {
    let client = super::api_client(globals)?;

    match action {
        ImagesAction::Generate(request) => {
            info!("requesting image generation for {}", request.subject);
            let result = images::generate_image(&client, &request).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        ImagesAction::Templates { subject, keywords } => {
            let templates = images::list_templates(&client, &subject, &keywords).await?;
            if templates.is_empty() {
                println!("No templates found for subject \"{subject}\"");
                return Ok(());
            }
            for template in &templates {
                match &template.category {
                    Some(category) => {
                        println!("{}  {} [{}]", template.id, template.name, category.name);
                    }
                    None => println!("{}  {}", template.id, template.name),
                }
                if let Some(description) = &template.description {
                    println!("    {description}");
                }
            }
        }
        ImagesAction::Preview { template_id } => {
            info!("rendering preview for template {}", template_id);
            let url = images::preview_template(&client, &template_id).await?;
            println!("{url}");
        }
    }

    Ok(())
}
