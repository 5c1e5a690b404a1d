// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `skillsift init` command implementation.

use skillsift::cli::InitArgs;
use skillsift::config::defaults::CONFIG_TEMPLATE;
use skillsift::error::ExitCode;

/// Write a commented default skillsift.toml in the current directory.
pub fn run(args: &InitArgs) -> anyhow::Result<ExitCode> {
    let path = std::env::current_dir()?.join("skillsift.toml");

    if path.exists() && !args.force {
        anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
    }

    std::fs::write(&path, CONFIG_TEMPLATE)?;
    println!("Wrote {}", path.display());
    Ok(ExitCode::Success)
}
