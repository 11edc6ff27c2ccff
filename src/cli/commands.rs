//! Command dispatch: one handler per subcommand

use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands, QuatCommands, ShapeCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, Settings};
use crate::domain::{powers, powers_up_to, say, BinarySearchTree, Sayer, Shape};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;
use crate::util::path::expand_path;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let Some(command) = &cli.command else {
        return Err(CliError::Usage(
            "no command given, see `exkit --help`".to_string(),
        ));
    };

    let settings = Settings::load(cli.config.as_deref())?;
    debug!("settings: {:?}", settings);

    match command {
        Commands::Change { amount } => _change(&ServiceContainer::new(settings)?, *amount),
        Commands::Lines { file } => _lines(&ServiceContainer::new(settings)?, file),
        Commands::Quat { command } => _quat(command),
        Commands::Tree { keys, tree } => _tree(keys, *tree),
        Commands::Say { words } => _say(words),
        Commands::Powers { base, limit } => _powers(*base, *limit),
        Commands::Shape { command } => _shape(command),
        Commands::Config { command } => _config(command, &settings),
        Commands::Info => _info(cli, &settings),
        Commands::Completion { shell } => _completion(*shell),
    }
}

#[instrument(skip(container))]
fn _change(container: &ServiceContainer, amount: i64) -> CliResult<()> {
    let counts = container.change.make_change(amount)?;
    let coins: u64 = counts.values().sum();
    output::header(&format!("{} cents in {} coins", amount, coins));
    for (denomination, count) in counts.iter().rev() {
        output::action(&format!("{:>4}", denomination), count);
    }
    Ok(())
}

#[instrument(skip(container))]
fn _lines(container: &ServiceContainer, file: &std::path::Path) -> CliResult<()> {
    let path = expand_path(file);
    let count = container.lines.count_meaningful_lines(&path)?;
    output::info(&count);
    Ok(())
}

#[instrument]
fn _quat(command: &QuatCommands) -> CliResult<()> {
    let result = match command {
        QuatCommands::Add { left, right } => left.plus(right)?,
        QuatCommands::Mul { left, right } => left.times(right)?,
        QuatCommands::Conj { value } => value.conjugate(),
    };
    output::info(&result);
    let [a, b, c, d] = result.coefficients();
    output::detail(&format!("[{}, {}, {}, {}]", a, b, c, d));
    Ok(())
}

#[instrument]
fn _tree(keys: &[String], as_tree: bool) -> CliResult<()> {
    let tree: BinarySearchTree = keys.iter().collect();
    debug!("built tree of size {} from {} keys", tree.size(), keys.len());

    if as_tree {
        let mut stdout = io::stdout().lock();
        return write!(stdout, "{}", tree.to_tree_string())
            .map_err(|e| InfraError::io("write tree", e).into());
    }

    output::info(&tree);
    output::action("size", &tree.size());
    output::action("depth", &tree.depth());
    output::action("sorted", &tree.iter().collect::<Vec<_>>().join(" "));
    Ok(())
}

#[instrument]
fn _say(words: &[String]) -> CliResult<()> {
    let phrase = match words.split_first() {
        Some((first, rest)) => rest.iter().fold(say(first), |sayer, word| sayer.and(word)),
        None => Sayer::default(),
    };
    output::info(&phrase);
    Ok(())
}

#[instrument]
fn _powers(base: u64, limit: Option<u64>) -> CliResult<()> {
    let values: Vec<u64> = match limit {
        Some(limit) => powers_up_to(base, limit).collect(),
        None => powers(base).collect(),
    };
    for value in values {
        output::info(&value);
    }
    Ok(())
}

#[instrument]
fn _shape(command: &ShapeCommands) -> CliResult<()> {
    let shape = match *command {
        ShapeCommands::Sphere { radius } => Shape::Sphere { radius },
        ShapeCommands::Cuboid {
            width,
            length,
            depth,
        } => Shape::Box {
            width,
            length,
            depth,
        },
    };
    if shape_has_negative_dimension(&shape) {
        return Err(CliError::InvalidArgs(
            "dimensions must not be negative".to_string(),
        ));
    }
    output::action("volume", &shape.volume());
    output::action("surface area", &shape.surface_area());
    Ok(())
}

fn shape_has_negative_dimension(shape: &Shape) -> bool {
    match *shape {
        Shape::Sphere { radius } => radius < 0.0,
        Shape::Box {
            width,
            length,
            depth,
        } => width < 0.0 || length < 0.0 || depth < 0.0,
    }
}

#[instrument(skip(settings))]
fn _config(command: &ConfigCommands, settings: &Settings) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(&settings.to_toml()?),
        ConfigCommands::Template => output::info(&Settings::template()),
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => {
                return Err(CliError::Usage(
                    "cannot determine config directory".to_string(),
                ))
            }
        },
    }
    Ok(())
}

fn _info(cli: &Cli, settings: &Settings) -> CliResult<()> {
    let cmd = Cli::command();
    output::header(&format!(
        "{} {}",
        cmd.get_name(),
        cmd.get_version().unwrap_or_default()
    ));
    let global = global_config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "-".to_string());
    output::action("global config", &global);
    if let Some(explicit) = &cli.config {
        output::action("explicit config", &explicit.display());
    }
    output::action("comment prefix", &settings.comment_prefix);
    output::action("denominations", &format!("{:?}", settings.denominations));
    Ok(())
}

fn _completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
