//! Canned-reply assistant.

pub const GREETING: &str = "Hello! I'm your event assistant.";
const FALLBACK: &str = "Sorry, I didn't understand that.";

/// Keyword rule; matches when the lowercased input contains `keyword`.
#[derive(Debug, Clone)]
pub struct ChatRule {
    pub keyword: &'static str,
    pub reply: &'static str,
}

#[derive(Debug, Clone)]
pub struct ChatBot {
    rules: Vec<ChatRule>,
    fallback: &'static str,
}

impl Default for ChatBot {
    fn default() -> Self {
        ChatBot {
            rules: vec![
                ChatRule {
                    keyword: "hello",
                    reply: "Hello! How can I help you today?",
                },
                ChatRule {
                    keyword: "event",
                    reply: "You can browse all events on the Student Dashboard.",
                },
                ChatRule {
                    keyword: "create",
                    reply: "Organizers can post new events from their dashboard.",
                },
            ],
            fallback: FALLBACK,
        }
    }
}

impl ChatBot {
    /// First matching rule wins. Blank input gets no reply at all.
    pub fn reply(&self, input: &str) -> Option<&'static str> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        let lower = input.to_lowercase();
        let reply = self
            .rules
            .iter()
            .find(|rule| lower.contains(rule.keyword))
            .map(|rule| rule.reply)
            .unwrap_or(self.fallback);

        Some(reply)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

/// Conversation transcript, oldest first.
#[derive(Debug, Clone)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
}

impl Default for ChatLog {
    fn default() -> Self {
        let mut log = ChatLog {
            messages: Vec::new(),
        };
        log.push(Sender::Bot, GREETING);
        log
    }
}

impl ChatLog {
    pub fn push(&mut self, sender: Sender, text: impl Into<String>) {
        self.messages.push(ChatMessage {
            sender,
            text: text.into(),
        });
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        let bot = ChatBot::default();
        assert_eq!(bot.reply("HELLO there"), Some("Hello! How can I help you today?"));
    }

    #[test]
    fn test_first_rule_wins() {
        let bot = ChatBot::default();
        // Contains both "event" and "create"; "event" is listed first.
        assert_eq!(
            bot.reply("how do I create an event?"),
            Some("You can browse all events on the Student Dashboard.")
        );
    }

    #[test]
    fn test_fallback_and_blank() {
        let bot = ChatBot::default();
        assert_eq!(bot.reply("what's the weather"), Some(FALLBACK));
        assert_eq!(bot.reply("   "), None);
    }

    #[test]
    fn test_log_starts_with_greeting() {
        let mut log = ChatLog::default();
        assert_eq!(log.messages().len(), 1);
        assert_eq!(log.last().unwrap().sender, Sender::Bot);

        log.push(Sender::User, "hi");
        assert_eq!(log.last().unwrap().text, "hi");
    }
}
