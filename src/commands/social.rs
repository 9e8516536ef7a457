//! Greeting and help commands

use crate::command::{Command, CommandError, SharedCatalog};

use super::keyword_vec;

pub struct GreetingCommand {
    keywords: Vec<String>,
    name: String,
}

impl GreetingCommand {
    pub fn new(name: &str) -> Self {
        Self {
            keywords: keyword_vec(&[
                "hola",
                "hello",
                "hi",
                "buenos días",
                "good morning",
                "buenas tardes",
                "good afternoon",
                "buenas noches",
                "good evening",
            ]),
            name: name.to_string(),
        }
    }
}

impl Command for GreetingCommand {
    fn keywords(&self) -> &[String] {
        &self.keywords
    }

    fn description(&self) -> &str {
        "Responds to greetings"
    }

    fn execute(&self, command_text: &str) -> Result<String, CommandError> {
        let text = command_text.to_lowercase();

        let response = if text.contains("buenos días") || text.contains("good morning") {
            "¡Buenos días! How can I help you today?".to_string()
        } else if text.contains("buenas tardes") || text.contains("good afternoon") {
            "¡Buenas tardes! What can I do for you?".to_string()
        } else if text.contains("buenas noches") || text.contains("good evening") {
            "¡Buenas noches! How may I assist you this evening?".to_string()
        } else {
            format!(
                "¡Hola! I'm {}. Say 'ayuda' or 'help' to see available commands.",
                self.name
            )
        };
        Ok(response)
    }
}

/// Renders the registered commands from the shared catalog the processor
/// maintains, so it always reflects whatever was registered after it.
pub struct HelpCommand {
    keywords: Vec<String>,
    catalog: SharedCatalog,
    activation_words: Vec<String>,
}

impl HelpCommand {
    pub fn new(catalog: SharedCatalog, activation_words: &[String]) -> Self {
        Self {
            keywords: keyword_vec(&[
                "ayuda",
                "help",
                "comandos",
                "commands",
                "qué puedes hacer",
                "what can you do",
            ]),
            catalog,
            activation_words: activation_words.to_vec(),
        }
    }
}

impl Command for HelpCommand {
    fn keywords(&self) -> &[String] {
        &self.keywords
    }

    fn description(&self) -> &str {
        "Shows available commands and how to use them"
    }

    fn execute(&self, _command_text: &str) -> Result<String, CommandError> {
        let catalog = self
            .catalog
            .read()
            .map_err(|_| CommandError::Unavailable("command catalog".to_string()))?;

        let mut help = String::from("=== Available Commands ===\n");
        help.push_str(&format!(
            "Activation words: {}\n\n",
            self.activation_words.join(", ")
        ));

        for (i, info) in catalog.iter().enumerate() {
            let mut keywords = info.keywords.iter().take(3).cloned().collect::<Vec<_>>().join(", ");
            if info.keywords.len() > 3 {
                keywords.push_str("...");
            }
            help.push_str(&format!("{}. Keywords: {}\n", i + 1, keywords));
            help.push_str(&format!("   Description: {}\n\n", info.description));
        }

        help.push_str("Examples:\n");
        help.push_str("- 'Furina, qué hora es' - Get current time\n");
        help.push_str("- 'Furina, abre navegador' - Open browser\n");
        help.push_str("- 'Furina, subir volumen' - Increase volume\n");
        Ok(help)
    }
}
