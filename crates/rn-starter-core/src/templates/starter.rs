//! Application starter files copied over a freshly generated project

use crate::error::{Result, ScaffoldError};
use crate::request::{Language, ProjectRequest, Template};
use std::path::{Path, PathBuf};
use tokio::fs;
use walkdir::WalkDir;

/// Starter files compiled into the binary
const EMBEDDED: &[(&str, &str)] = &[
    ("App.tsx", include_str!("../../templates/starter/App.tsx")),
    (
        "app/navigation/index.tsx",
        include_str!("../../templates/starter/app/navigation/index.tsx"),
    ),
    (
        "app/screens/HomeScreen.tsx",
        include_str!("../../templates/starter/app/screens/HomeScreen.tsx"),
    ),
    (
        "app/config/index.ts",
        include_str!("../../templates/starter/app/config/index.ts"),
    ),
    (
        "app/utilities/helpers.ts",
        include_str!("../../templates/starter/app/utilities/helpers.ts"),
    ),
];

/// Entry points generated by expo-cli that a starter `App.tsx` replaces
const GENERATED_ENTRIES: &[&str] = &["App.js"];

/// Where starter files come from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StarterSource {
    #[default]
    Embedded,
    /// Every file under this directory, keeping relative paths
    Local(PathBuf),
}

/// One file to write, path relative to the project root using `/`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarterFile {
    pub path: String,
    pub contents: Vec<u8>,
}

impl StarterSource {
    /// Collect the files this source provides
    pub fn files(&self) -> Result<Vec<StarterFile>> {
        match self {
            StarterSource::Embedded => Ok(EMBEDDED
                .iter()
                .map(|(path, contents)| StarterFile {
                    path: path.to_string(),
                    contents: contents.as_bytes().to_vec(),
                })
                .collect()),
            StarterSource::Local(root) => local_files(root),
        }
    }
}

fn local_files(root: &Path) -> Result<Vec<StarterFile>> {
    if !root.is_dir() {
        return Err(ScaffoldError::io(
            "Starter directory not found",
            root,
            std::io::Error::from(std::io::ErrorKind::NotFound),
        ));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            ScaffoldError::io("Failed to read", path, std::io::Error::from(e))
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(root)
            .unwrap_or(entry.path())
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/");
        let contents = std::fs::read(entry.path())
            .map_err(|e| ScaffoldError::io("Failed to read", entry.path(), e))?;
        files.push(StarterFile {
            path: relative,
            contents,
        });
    }
    Ok(files)
}

/// Starter files target the managed TypeScript setup (navigation and Expo SDK installed)
pub fn applies_to(request: &ProjectRequest) -> bool {
    request.template == Template::ExpoManaged && request.language == Language::TypeScript
}

/// Write starter files into `target_dir`, returning the relative paths written
pub async fn copy_starter(source: &StarterSource, target_dir: &Path) -> Result<Vec<String>> {
    let files = source.files()?;
    let mut copied = Vec::new();

    for file in &files {
        let target_path = target_dir.join(&file.path);
        if let Some(parent) = target_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ScaffoldError::io("Failed to create directory", parent, e))?;
        }
        fs::write(&target_path, &file.contents)
            .await
            .map_err(|e| ScaffoldError::io("Failed to write", &target_path, e))?;
        copied.push(file.path.clone());
    }

    if copied.iter().any(|p| p == "App.tsx") {
        for entry in GENERATED_ENTRIES {
            let path = target_dir.join(entry);
            if path.is_file() {
                fs::remove_file(&path)
                    .await
                    .map_err(|e| ScaffoldError::io("Failed to remove", &path, e))?;
            }
        }
    }

    Ok(copied)
}
