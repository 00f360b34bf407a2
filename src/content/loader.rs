//! Loader for RON content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::*;
use crate::boss::EncounterTuning;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Everything read from assets/data, before merging with built-ins.
#[derive(Debug, Default)]
pub struct LoadedContent {
    pub designs: Vec<BossDesign>,
    pub archetypes: Vec<AddArchetypeDef>,
    pub tuning: Option<EncounterTuning>,
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse the contents of a RON file containing a DataFile<T> wrapper.
pub fn parse_data_file<T>(file_name: &str, contents: &str) -> Result<Vec<T>, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let data: DataFile<T> = ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file_name.to_string(),
            message: format!("Parse error: {}", e),
        })?;

    Ok(data.items)
}

/// Parse the contents of a single RON struct (not wrapped in DataFile).
pub fn parse_single_file<T>(file_name: &str, contents: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file_name.to_string(),
            message: format!("Parse error: {}", e),
        })
}

fn read_file(path: &Path) -> Result<String, ContentLoadError> {
    fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: path.display().to_string(),
        message: format!("IO error: {}", e),
    })
}

/// Load boss content from assets/data/*.ron.
/// Files that fail to load are reported and skipped; callers fall back to built-ins.
pub fn load_all_content(base_path: &Path) -> (LoadedContent, Vec<ContentLoadError>) {
    let mut content = LoadedContent::default();
    let mut errors = Vec::new();

    let bosses_path = base_path.join("bosses.ron");
    match read_file(&bosses_path)
        .and_then(|s| parse_data_file::<BossDesign>(&bosses_path.display().to_string(), &s))
    {
        Ok(designs) => content.designs = designs,
        Err(e) => errors.push(e),
    }

    let adds_path = base_path.join("adds.ron");
    match read_file(&adds_path)
        .and_then(|s| parse_data_file::<AddArchetypeDef>(&adds_path.display().to_string(), &s))
    {
        Ok(archetypes) => content.archetypes = archetypes,
        Err(e) => errors.push(e),
    }

    let tuning_path = base_path.join("encounter_tuning.ron");
    match read_file(&tuning_path)
        .and_then(|s| parse_single_file::<EncounterTuning>(&tuning_path.display().to_string(), &s))
    {
        Ok(tuning) => content.tuning = Some(tuning),
        Err(e) => errors.push(e),
    }

    (content, errors)
}
