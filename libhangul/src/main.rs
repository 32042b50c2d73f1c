use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use libhangul::utils::describe_jamo;
use libhangul::{decompose, HangulConfig, HangulInput, KeyEvent, NameEdit};
use tracing_subscriber::EnvFilter;

/// Hangul name entry driven by single jamo keystrokes.
#[derive(Parser)]
#[command(name = "hangul", version, about)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable short-vowel input (ㅏㅏ → ㅑ)
    #[arg(long, global = true)]
    short_vowel: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive session: every line is a run of keystrokes
    Repl,
    /// Compose a string of keystrokes and print the result
    Compose {
        /// Keystrokes; `<` is backspace, `!` ends the syllable, `^` toggles Latin mode
        input: String,
    },
    /// Show the jamo roles of every character
    Decompose {
        text: String,
    },
}

fn key_for(ch: char) -> KeyEvent {
    match ch {
        '<' => KeyEvent::Backspace,
        '!' => KeyEvent::Escape,
        '^' => KeyEvent::ToggleMode,
        c => KeyEvent::Char(c),
    }
}

fn feed(input: &mut HangulInput<NameEdit>, keys: &str) {
    for ch in keys.chars() {
        input.process_key(key_for(ch));
    }
}

fn show(input: &HangulInput<NameEdit>) -> String {
    let name = input.target().map(NameEdit::name).unwrap_or_default();
    let pending: String = input.composer().pending().into_iter().collect();
    format!(
        "name='{}' live={} pending=[{}] mode={:?}",
        name,
        input.current().map(String::from).unwrap_or_else(|| "-".to_string()),
        pending,
        input.mode()
    )
}

fn load_config(cli: &Cli) -> Result<HangulConfig> {
    let mut config = match &cli.config {
        Some(path) => HangulConfig::load_toml(path)?,
        None => HangulConfig::default(),
    };
    if cli.short_vowel {
        config.base_mut().short_vowel_input = true;
    }
    Ok(config)
}

fn run_repl(config: &HangulConfig) -> Result<()> {
    let mut input = config.name_input();

    println!("hangul name entry: type jamo and press Enter");
    println!("`<` backspace, `!` end syllable, `^` toggle Latin, `:clear` new name");
    println!("Ctrl-D to exit.");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line?;
        let keys = line.trim_end_matches(['\r', '\n']);
        if keys == ":clear" {
            input = config.name_input();
        } else {
            feed(&mut input, keys);
        }
        writeln!(stdout, "{}", show(&input))?;
    }
    Ok(())
}

fn run_compose(config: &HangulConfig, keys: &str) {
    let mut input = config.name_input();
    feed(&mut input, keys);
    println!("{}", input.target().map(NameEdit::name).unwrap_or_default());
}

fn run_decompose(text: &str) {
    for ch in text.chars() {
        match decompose(ch) {
            Some((cho, jung, jong)) => println!(
                "{} U+{:04X}: {} + {} + {}",
                ch,
                ch as u32,
                cho.to_char(),
                jung.to_char(),
                jong.map(|j| j.to_char().to_string())
                    .unwrap_or_else(|| "∅".to_string())
            ),
            None => println!("{} U+{:04X}: {}", ch, ch as u32, describe_jamo(ch)),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match &cli.command {
        Some(Commands::Repl) | None => run_repl(&config)?,
        Some(Commands::Compose { input }) => run_compose(&config, input),
        Some(Commands::Decompose { text }) => run_decompose(text),
    }
    Ok(())
}
