use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseRoleError;
use crate::escape::escape_html;
use crate::pipeline::format_for_display;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }

    /// Label shown above the bubble.
    pub fn speaker(self) -> &'static str {
        match self {
            Role::User => "You",
            Role::Assistant => "Assistant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "user" => Ok(Role::User),
            "assistant" => Ok(Role::Assistant),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}

/// What goes inside a bubble, tagged by how it must be inserted.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BubbleContent {
    /// Verbatim text for a text-content slot.
    Text(String),
    /// Pipeline output for an inner-markup slot.
    Markup(String),
}

impl BubbleContent {
    pub fn as_str(&self) -> &str {
        match self {
            BubbleContent::Text(text) | BubbleContent::Markup(text) => text,
        }
    }

    pub fn is_markup(&self) -> bool {
        matches!(self, BubbleContent::Markup(_))
    }

    pub fn to_inner_html(&self) -> String {
        match self {
            BubbleContent::Text(text) => escape_html(text),
            BubbleContent::Markup(markup) => markup.clone(),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub text: String,
}

impl Message {
    pub fn new(role: Role, text: Option<&str>) -> Self {
        Self {
            role,
            text: text.unwrap_or_default().to_string(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
        }
    }

    /// User text is passed through untouched; assistant text always goes
    /// through the full formatting pipeline.
    pub fn content(&self) -> BubbleContent {
        match self.role {
            Role::User => BubbleContent::Text(self.text.clone()),
            Role::Assistant => BubbleContent::Markup(format_for_display(Some(&self.text))),
        }
    }

    pub fn to_html(&self) -> String {
        format!(
            "<div class=\"msg\"><div class=\"who\">{}</div><div class=\"bubble\">{}</div></div>",
            self.role.speaker(),
            self.content().to_inner_html()
        )
    }
}

/// Append-only, ordered chat history.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    pub fn to_html(&self) -> String {
        self.messages
            .iter()
            .map(Message::to_html)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}
