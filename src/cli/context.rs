use std::fs;

use crate::Result;
use anyhow::bail;
use anyhow::Ok;
use serde::Deserialize;
use serde::Serialize;

// TODO: Move this to a template file
pub const CONTEXT_DEFAULT_TEXT: &str = "version = \"1.0\"

[[environment]]
name = 'local'
query_host = 'http://localhost:8080'
set = true

[[environment]]
name = 'prod'
query_host = 'https://utc.example.com'
";

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct Context {
    pub version: String,
    pub environment: Vec<Environment>,
}

// Holds the data of one `[[environment]]` entry.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct Environment {
    pub name: String,
    pub query_host: String,
    pub set: Option<bool>,
}

pub fn timeq_home_dir() -> String {
    let mut timeq_home = home::home_dir().unwrap().as_path().display().to_string();
    timeq_home.push_str("/.timeq");
    timeq_home
}

pub fn timeq_context_file_path() -> String {
    timeq_home_dir() + "/context"
}

pub fn list_context() -> Result<Context> {
    let filename = timeq_context_file_path();

    let contents = match fs::read_to_string(filename.clone()) {
        std::result::Result::Ok(c) => c,
        Err(e) => {
            bail!("Error reading file {filename}: {e}")
        }
    };

    let context: Context = match toml::from_str(&contents) {
        std::result::Result::Ok(c) => c,
        Err(e) => {
            bail!("Issue with format of toml file {filename}: {e}")
        }
    };

    Ok(context)
}

pub fn get_current_context() -> Result<Environment> {
    let context = list_context()?;

    for e in context.environment {
        if e.set.is_some() && e.set.unwrap() {
            return Ok(e);
        }
    }

    bail!("timeq context not set");
}
