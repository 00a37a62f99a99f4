//! Generate command.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use mergelog_config::{Config, load_or_default};
use mergelog_core::{Pipeline, write_changelog};
use mergelog_git::{GitCli, Repository};

/// Runs the generate command.
pub fn run() -> Result<()> {
    let workdir = std::env::current_dir().context("failed to resolve current directory")?;
    generate_in(&workdir)
}

/// Generates the changelog for the repository rooted at `workdir`.
fn generate_in(workdir: &Path) -> Result<()> {
    let repo = Repository::open(workdir).context("unable to find git folder")?;
    let config = load_or_default(workdir, repo.path()).context("failed to load configuration")?;

    if repo.tags().context("failed to list tags")?.is_empty() {
        warn!("repository has no tags, the changelog will be empty");
    }

    let changelog = Pipeline::new(Box::new(history_source(repo.path(), &config)))
        .generate()
        .context("failed to generate changelog")?;

    let output = workdir.join(&config.changelog.output);
    write_changelog(&output, &changelog.markdown).context("could not write changelog file")?;

    info!(
        path = %output.display(),
        tags = changelog.tags,
        entries = changelog.entries,
        "changelog generated"
    );
    Ok(())
}

fn history_source(path: &Path, config: &Config) -> GitCli {
    GitCli::new(path)
        .with_program(&config.git.program)
        .with_remote(&config.git.remote)
}
