use anyhow::Context;
use env_logger::Env;
use glosa_core::{shell, TranslatorEngine};
use std::io::{stdin, stdout};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout belongs to the menu.
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let mut engine = TranslatorEngine::with_seed().context("Could not load the built-in glossary")?;

    let mut input = stdin().lock();
    let mut output = stdout().lock();
    shell::run(&mut engine, &mut input, &mut output).context("Console session failed")?;
    Ok(())
}
