//! Implements InputPort. Inquire-based chat loop.
//!
//! Plain lines go to the chat service; `/`-commands are handled locally.

use crate::adapters::ui::progress::thinking_spinner;
use crate::domain::{ChatReply, DomainError, EmotionAnalysis, Reply};
use crate::ports::InputPort;
use crate::usecases::ChatService;
use async_trait::async_trait;
use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use inquire::Text;
use inquire::error::InquireError;
use inquire::ui::{Color as PromptColor, RenderConfig, Styled};
use std::io::{Write, stdout};
use std::sync::Arc;

/// Applies the prompt theme globally for all inquire prompts.
pub fn apply_theme() {
    let config = RenderConfig::default()
        .with_prompt_prefix(Styled::new("›").with_fg(PromptColor::LightMagenta))
        .with_answered_prompt_prefix(Styled::new("✓").with_fg(PromptColor::LightGreen));
    inquire::set_global_render_config(config);
}

/// One line of user input.
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Quit,
    Help,
    Emotion(&'a str),
    Message(&'a str),
    Blank,
}

impl<'a> Command<'a> {
    fn parse(line: &'a str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Command::Blank;
        }
        match line.split_once(char::is_whitespace) {
            Some(("/emotion", rest)) => Command::Emotion(rest.trim()),
            _ => match line {
                "/quit" | "/exit" => Command::Quit,
                "/help" => Command::Help,
                "/emotion" => Command::Emotion(""),
                _ => Command::Message(line),
            },
        }
    }
}

fn print_colored(color: Color, text: &str) {
    let mut out = stdout();
    let _ = out.execute(SetForegroundColor(color));
    let _ = out.execute(Print(text));
    let _ = out.execute(ResetColor);
    let _ = out.execute(Print("\r\n"));
    let _ = out.flush();
}

fn render_reply(reply: &ChatReply) {
    print_colored(Color::Cyan, &format!("Alex: {}", reply.reply.text()));
    if let Reply::Media(signal) = &reply.reply {
        let line = match &reply.suggested_media {
            Some(item) => format!(
                "  ▶ {} ({}, {} min) {}",
                item.title,
                item.media_type,
                item.duration_secs / 60,
                item.url
            ),
            None => format!("  ▶ {} {}", signal.marker_category(), signal.media_type),
        };
        print_colored(Color::Magenta, &line);
    }
    print_colored(Color::DarkGrey, &format!("  emotion: {}", reply.emotion));
    if reply.crisis.detected() {
        if let Some(message) = reply.crisis_message {
            print_colored(Color::Yellow, &format!("  {}", message));
        }
        print_colored(Color::Yellow, "  Support is available:");
        for resource in &reply.crisis.resources {
            print_colored(Color::Yellow, &format!("    • {}", resource));
        }
    }
}

fn render_emotion(analysis: &EmotionAnalysis) {
    print_colored(
        Color::DarkGrey,
        &format!(
            "  emotion: {} (confidence {:.2})",
            analysis.emotion, analysis.confidence
        ),
    );
}

fn render_help() {
    print_colored(Color::DarkGrey, "  /emotion <text>  analyze the emotion of a text");
    print_colored(Color::DarkGrey, "  /help            show this help");
    print_colored(Color::DarkGrey, "  /quit            leave the chat");
}

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort {
    chat: Arc<ChatService>,
}

impl TuiInputPort {
    pub fn new(chat: Arc<ChatService>) -> Self {
        Self { chat }
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        if !self.chat.is_generation_configured() {
            print_colored(
                Color::DarkGrey,
                "  (no API key configured: replies come from the built-in responder)",
            );
        }
        loop {
            let line = match Text::new("You:").prompt() {
                Ok(line) => line,
                Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
                Err(e) => return Err(DomainError::Ui(e.to_string())),
            };

            match Command::parse(&line) {
                Command::Quit => break,
                Command::Blank => continue,
                Command::Help => render_help(),
                Command::Emotion(text) => render_emotion(&self.chat.analyze_emotion(text)),
                Command::Message(text) => {
                    let spinner = thinking_spinner();
                    let result = self.chat.send_message(text).await;
                    spinner.finish_and_clear();
                    match result {
                        Ok(reply) => render_reply(&reply),
                        Err(e) => print_colored(Color::Red, &format!("  {}", e)),
                    }
                }
            }
        }

        print_colored(Color::Cyan, "Alex: Take care! I'm here whenever you want to talk. 💙");
        Ok(())
    }
}
