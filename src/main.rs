use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;

use furina::commands::{
    AppLauncherCommand, DateCommand, FuzzyTestCommand, GreetingCommand, HelpCommand,
    RepeatCommand, StatsCommand, SystemCommand, SystemInfoCommand, TimeCommand,
    TtsControlCommand, UptimeCommand, VolumeCommand,
};
use furina::config::Config;
use furina::processor::CommandProcessor;
use furina::speech::{self, LogEngine, SharedSpeech};

#[derive(Parser)]
#[command(name = "furina", about = "Voice command dispatcher with fuzzy matching")]
struct Cli {
    /// Path to a config file (defaults to ./config.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the fuzzy match threshold from the config
    #[arg(long)]
    threshold: Option<f64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Process a single utterance and exit
    Once { text: Vec<String> },
    /// List the registered commands
    Commands,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(threshold) = cli.threshold {
        config.fuzzy_threshold = threshold;
    }

    let (processor, speech, last_response) = build_assistant(&config);

    match cli.command {
        Some(Command::Once { text }) => {
            let utterance = text.join(" ");
            println!("{}", processor.process_text(&utterance));
            Ok(())
        }
        Some(Command::Commands) => {
            for (i, info) in processor.list_commands().iter().enumerate() {
                println!("{}. {} - {}", i + 1, info.keywords.join(", "), info.description);
            }
            Ok(())
        }
        None => run_repl(&config, processor, speech, last_response),
    }
}

/// Wire up the processor with every command, in the canonical order.
/// Registration order matters: it resolves keyword overlap and fuzzy ties.
fn build_assistant(config: &Config) -> (CommandProcessor, SharedSpeech, Arc<Mutex<String>>) {
    let speech = speech::new_shared(Box::new(LogEngine));
    let last_response = Arc::new(Mutex::new(String::new()));

    let mut processor = CommandProcessor::new(config);
    processor.register_command(Box::new(TimeCommand::new()));
    processor.register_command(Box::new(DateCommand::new()));
    processor.register_command(Box::new(AppLauncherCommand::new(&config.apps)));
    processor.register_command(Box::new(SystemCommand::new()));
    processor.register_command(Box::new(VolumeCommand::new()));
    processor.register_command(Box::new(GreetingCommand::new(&config.name)));
    processor.register_command(Box::new(TtsControlCommand::new(speech.clone())));
    processor.register_command(Box::new(RepeatCommand::new(
        speech.clone(),
        last_response.clone(),
    )));
    processor.register_command(Box::new(HelpCommand::new(
        processor.catalog(),
        processor.activation_words(),
    )));
    processor.register_command(Box::new(StatsCommand::new(processor.stats_handle())));
    processor.register_command(Box::new(SystemInfoCommand::new()));
    processor.register_command(Box::new(UptimeCommand::new()));
    processor.register_command(Box::new(FuzzyTestCommand::new()));

    (processor, speech, last_response)
}

/// Interactive loop: each stdin line stands in for one transcribed utterance.
fn run_repl(
    config: &Config,
    processor: CommandProcessor,
    speech: SharedSpeech,
    last_response: Arc<Mutex<String>>,
) -> Result<()> {
    ctrlc::set_handler(|| {
        println!("\nGoodbye!");
        std::process::exit(0);
    })?;

    println!("=== {} Voice Assistant ===", config.name);
    println!("Activation words: {}", processor.activation_words().join(", "));
    println!("Commands loaded: {}", processor.list_commands().len());
    if let Ok(speech) = speech.lock() {
        println!("{}", speech.engine_info());
    }
    println!("Say '{} ayuda' for available commands.\n", config.name.to_lowercase());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let response = processor.process_text(line);
        println!("{}", response);

        if let Ok(mut last) = last_response.lock() {
            *last = response.clone();
        }
        if let Ok(speech) = speech.lock() {
            speech.speak(&response);
        }
    }

    info!("stdin closed, exiting");
    println!("Goodbye!");
    Ok(())
}
