use anyhow::Context as AnyhowContext;
use log::info;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

pub struct FileUtils {}

impl FileUtils {
    pub fn create_dir(dir_name: String, dir_path: String) -> Result<(), anyhow::Error> {
        if Path::new(&dir_path).exists() {
            info!("timeq {} path exists", dir_name);
            return Ok(());
        }

        fs::create_dir_all(&dir_path)
            .with_context(|| format!("Couldn't create {}", dir_name))?;
        info!("timeq {} created", dir_name);

        Ok(())
    }

    pub fn create_file(
        file_name: String,
        file_path: String,
        file_content: String,
        recreate: bool,
    ) -> Result<(), anyhow::Error> {
        let path = Path::new(&file_path);
        if !recreate && path.exists() {
            info!("timeq {} file exists", file_name);
            return Ok(());
        }

        // Create all missing directories in the path
        let parent = path
            .parent()
            .ok_or_else(|| anyhow::anyhow!("Failed to get parent directory"))?;
        fs::create_dir_all(parent)?;

        let display = path.display();
        let mut file: File =
            File::create(path).with_context(|| format!("Couldn't create {}", display))?;
        info!("timeq {} file created", file_name);

        file.write_all(file_content.as_bytes())
            .with_context(|| format!("Couldn't write to {}", display))?;

        Ok(())
    }
}
