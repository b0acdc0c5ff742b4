//! `plauder convert` — Scratch 3 project (`.sb3`) to a Pygame script.
//!
//! The archive's `project.json` goes to the completion provider with a fixed
//! converter prompt; every other entry is extracted into `<output>/assets`,
//! where the generated `main.py` expects to find it.

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use plauder_api::services::completion::{ChatBackend, OpenAiBackend};
use zip::ZipArchive;

use crate::{Error, Result};

pub const DEFAULT_OUTPUT: &str = "output_pygame_project";
pub const MAIN_SCRIPT: &str = "main.py";
const PROJECT_JSON: &str = "project.json";
const ASSETS_DIR: &str = "assets";

/// System prompt steering the model from `project.json` to Pygame code.
pub const SYSTEM_PROMPT: &str = include_str!("convert/system_prompt.md");

/// Completion provider settings. All three are required.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub api_key: String,
    pub api_base: String,
    pub model: String,
}

impl ProviderConfig {
    pub fn require(
        api_key: Option<String>,
        api_base: Option<String>,
        model: Option<String>,
    ) -> Result<Self> {
        let present = |value: Option<String>| value.filter(|v| !v.is_empty());
        match (present(api_key), present(api_base), present(model)) {
            (Some(api_key), Some(api_base), Some(model)) => Ok(Self {
                api_key,
                api_base,
                model,
            }),
            _ => Err(Error::Custom(
                "API_KEY, API_BASE and MODEL must be set in the environment or .env".into(),
            )),
        }
    }
}

/// Reads `project.json` from `sb3` and extracts every other entry into
/// `<output>/assets`. Returns the project JSON.
pub fn unpack(sb3: &Path, output: &Path) -> Result<String> {
    let mut archive = ZipArchive::new(File::open(sb3)?)?;

    let mut project = String::new();
    archive.by_name(PROJECT_JSON)?.read_to_string(&mut project)?;

    let assets = output.join(ASSETS_DIR);
    fs::create_dir_all(&assets)?;

    for i in 0..archive.len() {
        let mut file = archive.by_index(i)?;
        if file.name() == PROJECT_JSON {
            continue;
        }
        let Some(rel_path) = file.enclosed_name() else {
            log::warn!("skipping archive entry outside the output directory: {}", file.name());
            continue;
        };
        let dest = assets.join(rel_path);

        if file.is_dir() {
            fs::create_dir_all(&dest)?;
            continue;
        }
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut out = File::create(&dest)?;
        io::copy(&mut file, &mut out)?;
    }

    Ok(project)
}

/// Converts `sb3` into `<output>/main.py` plus `<output>/assets`.
/// Returns the path of the written script.
pub async fn run(sb3: &Path, output: &Path, provider: ProviderConfig) -> Result<PathBuf> {
    let project = unpack(sb3, output)?;

    println!("Sending {PROJECT_JSON} to AI for conversion...");
    log::debug!("converting with model {} at {}", provider.model, provider.api_base);

    let backend = OpenAiBackend::new(provider.api_base, provider.api_key, provider.model);
    let code = backend.complete(SYSTEM_PROMPT, &project).await?;

    let script = output.join(MAIN_SCRIPT);
    fs::write(&script, code)?;
    Ok(script)
}
