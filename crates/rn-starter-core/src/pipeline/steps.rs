//! Individual pipeline steps

use super::{babel, Pipeline, PipelineContext};
use crate::error::{Result, ScaffoldError};
use crate::request::{Language, Template};
use crate::templates::{self, commands, payloads, SUBFOLDERS};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::task::JoinSet;

async fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents)
        .await
        .map_err(|e| ScaffoldError::io("Failed to write", path, e))
}

pub(super) async fn create_project(p: &Pipeline<'_>, ctx: &PipelineContext) -> Result<()> {
    let pm = ctx.toolchain.package_manager;
    for command in commands::create_project(&ctx.request, pm) {
        p.command(&command, &ctx.parent_dir).await?;
    }
    Ok(())
}

/// Soft check: a missing directory is reported and the run continues
pub(super) fn enter_project(p: &Pipeline<'_>, ctx: &PipelineContext) -> Result<()> {
    if ctx.project_dir.is_dir() {
        tracing::debug!(dir = %ctx.project_dir.display(), "project directory found");
    } else {
        p.reporter().warn(&format!(
            "Project directory {} was not created by the generator; continuing",
            ctx.project_dir.display()
        ));
    }
    Ok(())
}

/// Create `app/<subfolder>` for every subfolder concurrently
pub async fn create_app_dirs(project_dir: &Path) -> Result<Vec<PathBuf>> {
    let app = project_dir.join("app");
    let mut set = JoinSet::new();
    for name in SUBFOLDERS {
        let path = app.join(name);
        set.spawn(async move {
            match fs::create_dir_all(&path).await {
                Ok(()) => Ok(path),
                Err(e) => Err(ScaffoldError::io("Failed to create directory", path, e)),
            }
        });
    }

    let mut created = Vec::with_capacity(SUBFOLDERS.len());
    while let Some(joined) = set.join_next().await {
        let path = joined
            .map_err(|e| ScaffoldError::io("Failed to create directory", &app, std::io::Error::other(e)))??;
        created.push(path);
    }
    created.sort();
    Ok(created)
}

pub(super) async fn create_subfolders(p: &Pipeline<'_>, ctx: &PipelineContext) -> Result<()> {
    p.task("Creating app folders", async {
        create_app_dirs(&ctx.project_dir).await.map(|_| ())
    })
    .await
}

pub(super) async fn install_dependencies(p: &Pipeline<'_>, ctx: &PipelineContext) -> Result<()> {
    let pm = ctx.toolchain.package_manager;
    let dir = &ctx.project_dir;

    p.command(&commands::install_eslint(pm), dir).await?;

    if ctx.request.template.is_managed() {
        p.command(&commands::install_navigation(pm), dir).await?;
        p.command(&commands::install_expo_sdk(), dir).await?;
    }

    if ctx.request.language == Language::TypeScript {
        let tsconfig = payloads::render(&payloads::tsconfig(ctx.request.template));
        let path = ctx.project_file("tsconfig.json");
        p.task("Writing tsconfig.json", write_file(&path, &tsconfig))
            .await?;

        let react = templates::react_version(dir);
        if react.is_none() {
            p.reporter()
                .warn("Could not determine the React version; @types/react will not be pinned");
        }
        p.command(&commands::install_typescript(pm, react.as_ref()), dir)
            .await?;
    }

    for command in commands::install_extras(
        pm,
        &ctx.toolchain.extra_dependencies,
        &ctx.toolchain.extra_dev_dependencies,
    ) {
        p.command(&command, dir).await?;
    }

    Ok(())
}

pub(super) async fn configure_babel(p: &Pipeline<'_>, ctx: &PipelineContext) -> Result<()> {
    let path = ctx.project_file("babel.config.js");
    let template = ctx.request.template;

    p.task("Registering Reanimated Babel plugin", async {
        let source = fs::read_to_string(&path)
            .await
            .map_err(|e| ScaffoldError::io("Failed to read", &path, e))?;
        match babel::patch(&source, template, &path)? {
            Some(patched) => write_file(&path, &patched).await,
            None => {
                tracing::debug!(path = %path.display(), "babel plugin already registered");
                Ok(())
            }
        }
    })
    .await
}

pub(super) async fn configure_eslint(p: &Pipeline<'_>, ctx: &PipelineContext) -> Result<()> {
    p.task("Writing ESLint configuration", async {
        if ctx.request.template == Template::Bare {
            let generated = ctx.project_file(".eslintrc.js");
            if generated.is_file() {
                fs::remove_file(&generated)
                    .await
                    .map_err(|e| ScaffoldError::io("Failed to remove", &generated, e))?;
            }
        }

        let config = payloads::render(&payloads::eslint_config(ctx.request.language));
        write_file(&ctx.project_file(".eslintrc.json"), &config).await?;
        write_file(&ctx.project_file(".eslintignore"), payloads::ESLINT_IGNORE).await
    })
    .await
}

pub(super) async fn configure_eas(p: &Pipeline<'_>, ctx: &PipelineContext) -> Result<()> {
    let eas = payloads::render(&payloads::eas_config());
    p.task(
        "Writing EAS configuration",
        write_file(&ctx.project_file("eas.json"), &eas),
    )
    .await
}

pub(super) async fn copy_starter(p: &Pipeline<'_>, ctx: &PipelineContext) -> Result<()> {
    let copied = p
        .task(
            "Copying starter files",
            templates::copy_starter(&ctx.starter, &ctx.project_dir),
        )
        .await?;
    p.reporter()
        .info(&format!("Added {} starter files", copied.len()));
    Ok(())
}
