use crate::cli::context::{list_context, timeq_context_file_path, Context};
use crate::tui::{colors, error};
use anyhow::bail;
use clap::Args;
use colorful::Colorful;
use std::fs::File;
use std::io::Write;
use toml::to_string;

// Arguments for 'context set'
#[derive(Args)]
pub struct ContextSetArgs {
    #[clap(short, long)]
    pub name: String,
}

pub fn execute(args: &ContextSetArgs) -> Result<(), anyhow::Error> {
    let mut data: Context = list_context()?;

    let name = args.name.clone();

    if !data.environment.iter().any(|e| e.name == name) {
        bail!("No environment named {name} in the context file");
    }

    for e in data.environment.iter_mut() {
        if e.name == name {
            e.set = Some(true)
        } else {
            e.set = None
        }
    }

    if let Err(e) = write_config_to_file(&data, &timeq_context_file_path()) {
        error(&format!("Error: {}", e));
        return Err(e);
    }

    println!(
        "{} {} {}",
        "✓".color(colors::indicator_good()).bold(),
        "timeq context set to:",
        name.bold()
    );

    Ok(())
}

fn write_config_to_file(config: &Context, file_path: &str) -> Result<(), anyhow::Error> {
    let toml_string = to_string(config)?;
    let mut file = File::create(file_path)?;

    file.write_all(toml_string.as_bytes())?;

    Ok(())
}
