//! Topic guard: keyword pre-filter for off-topic conversations
//!
//! The service has exactly one permitted purpose (building websites), so
//! clearly unrelated requests are rejected before they consume a gate slot.
//! This is a deliberately crude heuristic, not a classifier: two keyword-set
//! membership tests over the lowercased latest user message. Off-topic
//! evidence blocks only when no on-topic evidence is present, so on-topic
//! wording always wins. False negatives (off-topic requests slipping
//! through) and false positives (on-topic requests that happen to contain an
//! off-topic word and no on-topic word) are both accepted behavior.

use crate::llm::{ChatMessage, MessageContent, MessageRole};

/// Markers for requests that have nothing to do with websites
const OFF_TOPIC_KEYWORDS: &[&str] = &[
    "homework",
    "essay",
    "write my",
    "do my",
    "solve this",
    "math problem",
    "physics",
    "chemistry",
    "biology",
    "history assignment",
    "book report",
    "translate",
    "summarize this article",
    "explain quantum",
    "what is the meaning",
    "write a poem",
    "write a story",
    "write code for",
    "python script",
    "help me with my",
    "my teacher",
    "my professor",
    "school project",
    "dating advice",
    "relationship",
    "how to ask out",
    "legal advice",
    "medical advice",
    "diagnose",
    "symptoms",
    "should i see a doctor",
];

/// Markers for website-building context
const WEBSITE_KEYWORDS: &[&str] = &[
    "website",
    "web",
    "page",
    "site",
    "html",
    "css",
    "design",
    "build",
    "create",
    "landing",
    "homepage",
    "portfolio",
    "business site",
    "blog",
    "navigation",
    "header",
    "footer",
    "style",
    "layout",
    "responsive",
    "button",
    "form",
    "contact page",
    "about page",
    "menu",
    "link",
    "color",
    "font",
    "image",
    "section",
    "background",
    "card",
    "deploy",
];

/// Extract the most recent user-authored message, lowercased.
///
/// Structured content is flattened by joining its text parts with spaces,
/// matching how clients attach files alongside a text note.
pub fn latest_user_text(messages: &[ChatMessage]) -> Option<String> {
    for message in messages.iter().rev() {
        if message.role != MessageRole::User {
            continue;
        }
        let text = match &message.content {
            MessageContent::Text(text) => text.clone(),
            MessageContent::Parts(parts) => parts
                .iter()
                .filter(|part| part.part_type == "text")
                .filter_map(|part| part.text.as_deref())
                .collect::<Vec<_>>()
                .join(" "),
        };
        return Some(text.to_lowercase());
    }
    None
}

/// Decide whether a conversation should be rejected as off-topic.
///
/// Opening exchanges (two messages or fewer) are never rejected, so a
/// greeting can't be blocked before the user has said what they want.
pub fn should_reject(messages: &[ChatMessage]) -> bool {
    if messages.len() <= 2 {
        return false;
    }

    let Some(text) = latest_user_text(messages) else {
        return false;
    };

    let is_off_topic = OFF_TOPIC_KEYWORDS
        .iter()
        .any(|keyword| text.contains(keyword));
    let has_website_context = WEBSITE_KEYWORDS.iter().any(|keyword| text.contains(keyword));

    is_off_topic && !has_website_context
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::ContentPart;

    fn conversation(last_user_text: &str) -> Vec<ChatMessage> {
        vec![
            ChatMessage::user("hey"),
            ChatMessage::assistant("what kind of site do you want to build?"),
            ChatMessage::user(last_user_text),
        ]
    }

    #[test]
    fn test_short_conversations_are_never_rejected() {
        let messages = vec![ChatMessage::user("do my homework please")];
        assert!(!should_reject(&messages));

        let messages = vec![
            ChatMessage::user("do my homework please"),
            ChatMessage::assistant("..."),
        ];
        assert!(!should_reject(&messages));
    }

    #[test]
    fn test_off_topic_without_website_context_is_rejected() {
        assert!(should_reject(&conversation("can you do my homework")));
        assert!(should_reject(&conversation("I need medical advice about my knee")));
        assert!(should_reject(&conversation("write a poem about autumn")));
    }

    #[test]
    fn test_website_context_always_wins() {
        assert!(!should_reject(&conversation(
            "can you do my homework website with a submissions form"
        )));
        assert!(!should_reject(&conversation(
            "write a poem for the homepage hero section"
        )));
    }

    #[test]
    fn test_on_topic_requests_pass() {
        assert!(!should_reject(&conversation(
            "make the navigation sticky and change the background color"
        )));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert!(should_reject(&conversation("DO MY HOMEWORK")));
    }

    #[test]
    fn test_latest_user_text_skips_assistant_messages() {
        let messages = vec![
            ChatMessage::user("first"),
            ChatMessage::user("second"),
            ChatMessage::assistant("reply"),
        ];
        assert_eq!(latest_user_text(&messages).as_deref(), Some("second"));
    }

    #[test]
    fn test_latest_user_text_joins_structured_parts() {
        let messages = vec![ChatMessage {
            role: MessageRole::User,
            content: MessageContent::Parts(vec![
                ContentPart {
                    part_type: "text".to_string(),
                    text: Some("Here is the Menu".to_string()),
                    extra: serde_json::Map::new(),
                },
                ContentPart {
                    part_type: "image_url".to_string(),
                    text: None,
                    extra: serde_json::Map::new(),
                },
                ContentPart {
                    part_type: "text".to_string(),
                    text: Some("make it a restaurant SITE".to_string()),
                    extra: serde_json::Map::new(),
                },
            ]),
        }];
        assert_eq!(
            latest_user_text(&messages).as_deref(),
            Some("here is the menu make it a restaurant site")
        );
    }

    #[test]
    fn test_no_user_message_is_not_rejected() {
        let messages = vec![
            ChatMessage::assistant("a"),
            ChatMessage::assistant("b"),
            ChatMessage::assistant("c"),
        ];
        assert!(!should_reject(&messages));
    }
}
