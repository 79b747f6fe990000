//! Profile command implementation.

use crate::cli::{ProfileAction, ProfileArgs};
use crate::config::{Config, Profile};
use crate::error::{CliError, Result};
use crate::output::Formatter;

/// Execute the profile command.
pub async fn execute_profile(
    args: ProfileArgs,
    config: &mut Config,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ProfileAction::List => list_profiles(config, formatter),
        ProfileAction::Show => show_active_profile(config, formatter),
        ProfileAction::Switch { name } => {
            switch_profile(config, name.clone())?;
            println!("{}", formatter.success(&format!("Switched to profile '{}'", name)));
            Ok(())
        }
        ProfileAction::Set {
            name,
            endpoint,
            model,
        } => {
            let action = set_profile(config, name.clone(), endpoint, model)?;
            println!("{}", formatter.success(&format!("{} profile '{}'", action, name)));
            Ok(())
        }
        ProfileAction::Delete { name } => {
            if delete_profile(config, &name)? {
                println!("{}", formatter.success(&format!("Deleted profile '{}'", name)));
            } else {
                println!(
                    "{}",
                    formatter.warning(&format!("Profile '{}' does not exist", name))
                );
            }
            Ok(())
        }
    }
}

/// List all profiles.
fn list_profiles(config: &Config, formatter: &Formatter) -> Result<()> {
    if config.profiles.is_empty() {
        println!("{}", formatter.info("No profiles configured"));
        return Ok(());
    }

    let mut names: Vec<&String> = config.profiles.keys().collect();
    names.sort();

    println!("Available profiles:");
    for name in names {
        let profile = &config.profiles[name];
        if name == &config.active_profile {
            println!("* {}", formatter.success(name));
        } else {
            println!("  {}", name);
        }
        println!("    Endpoint: {}", profile.endpoint);
        println!("    Model: {}", profile.model);
    }

    Ok(())
}

/// Show the active profile.
fn show_active_profile(config: &Config, formatter: &Formatter) -> Result<()> {
    let profile = config.get_active_profile()?;

    println!("Active profile: {}", formatter.success(&config.active_profile));
    println!("  Endpoint: {}", profile.endpoint);
    println!("  Model: {}", profile.model);

    Ok(())
}

/// Switch to a different profile.
fn switch_profile(config: &mut Config, name: String) -> Result<()> {
    config.switch_profile(name)?;
    config.save()
}

/// Create or update a profile, returning what happened.
fn set_profile(
    config: &mut Config,
    name: String,
    endpoint: String,
    model: String,
) -> Result<&'static str> {
    let action = if config.profiles.contains_key(&name) {
        "Updated"
    } else {
        "Created"
    };

    config.set_profile(name, Profile { endpoint, model });
    config.save()?;
    Ok(action)
}

/// Delete a profile; `false` if it did not exist.
fn delete_profile(config: &mut Config, name: &str) -> Result<bool> {
    if name == config.active_profile {
        return Err(CliError::NotPermitted(
            "Cannot delete the active profile".to_string(),
        ));
    }

    if config.profiles.remove(name).is_some() {
        config.save()?;
        Ok(true)
    } else {
        Ok(false)
    }
}
