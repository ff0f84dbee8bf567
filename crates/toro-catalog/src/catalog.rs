//! Tool Catalog
//!
//! The fixed, ordered table of tools. Declaration order is display order.

use serde::Serialize;

/// One listed tool
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ToolEntry {
    /// URL-safe identifier, used as the `/tool/{id}` path segment
    pub id: &'static str,

    /// Display name shown on the card and the detail heading
    pub name: &'static str,

    /// One-line description shown on the catalog card
    pub desc: &'static str,
}

impl ToolEntry {
    /// Link target for this tool's detail page
    pub fn href(&self) -> String {
        format!("/tool/{}", self.id)
    }
}

/// Label shown when a detail route names an identifier the catalog
/// doesn't know. Not an error, just a generic heading.
pub const DEFAULT_TOOL_NAME: &str = "Tool";

const TOOLS: [ToolEntry; 10] = [
    ToolEntry {
        id: "image-gen",
        name: "AI Image Generator",
        desc: "Create images with AI",
    },
    ToolEntry {
        id: "text-summarizer",
        name: "Text Summarizer",
        desc: "Summarize long texts",
    },
    ToolEntry {
        id: "code-review",
        name: "Code Review",
        desc: "AI-powered code analysis",
    },
    ToolEntry {
        id: "seo-analyzer",
        name: "SEO Analyzer",
        desc: "Optimize your website",
    },
    ToolEntry {
        id: "chatbot",
        name: "Chatbot Builder",
        desc: "Build smart chatbots",
    },
    ToolEntry {
        id: "voice-clone",
        name: "Voice Cloner",
        desc: "Clone voices with AI",
    },
    ToolEntry {
        id: "logo-maker",
        name: "Logo Maker",
        desc: "Generate logos instantly",
    },
    ToolEntry {
        id: "video-gen",
        name: "Video Generator",
        desc: "Create videos from text",
    },
    ToolEntry {
        id: "sentiment",
        name: "Sentiment Analyzer",
        desc: "Analyze text sentiment",
    },
    ToolEntry {
        id: "translate",
        name: "AI Translator",
        desc: "Translate between languages",
    },
];

/// The full catalog, in display order
pub fn tools() -> &'static [ToolEntry] {
    &TOOLS
}

/// Resolve an identifier to its display name
pub fn tool_name(id: &str) -> Option<&'static str> {
    TOOLS.iter().find(|tool| tool.id == id).map(|tool| tool.name)
}

/// Resolve an identifier, falling back to [`DEFAULT_TOOL_NAME`] when
/// the identifier is unrecognized
pub fn display_name(id: &str) -> &'static str {
    tool_name(id).unwrap_or(DEFAULT_TOOL_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_ten_tools() {
        assert_eq!(tools().len(), 10);
    }

    #[test]
    fn test_catalog_order_is_fixed() {
        let ids: Vec<&str> = tools().iter().map(|t| t.id).collect();
        assert_eq!(
            ids,
            [
                "image-gen",
                "text-summarizer",
                "code-review",
                "seo-analyzer",
                "chatbot",
                "voice-clone",
                "logo-maker",
                "video-gen",
                "sentiment",
                "translate",
            ]
        );
    }

    #[test]
    fn test_identifiers_are_unique() {
        let mut ids: Vec<&str> = tools().iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), tools().len());
    }

    #[test]
    fn test_identifiers_are_url_safe() {
        for tool in tools() {
            assert!(
                tool.id
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c == '-'),
                "identifier {} is not URL-safe",
                tool.id
            );
        }
    }

    #[test]
    fn test_every_known_id_resolves() {
        assert_eq!(tool_name("chatbot"), Some("Chatbot Builder"));
        assert_eq!(display_name("image-gen"), "AI Image Generator");
        assert_eq!(display_name("translate"), "AI Translator");
    }

    #[test]
    fn test_unknown_id_falls_back_to_default_label() {
        assert_eq!(tool_name("does-not-exist"), None);
        assert_eq!(display_name("does-not-exist"), "Tool");
        assert_eq!(display_name(""), "Tool");
    }

    #[test]
    fn test_card_links_match_identifiers() {
        for tool in tools() {
            assert_eq!(tool.href(), format!("/tool/{}", tool.id));
        }
    }

    #[test]
    fn test_card_name_matches_resolved_name() {
        // Every card's link must resolve to the same name the card shows.
        for tool in tools() {
            assert_eq!(display_name(tool.id), tool.name);
        }
    }
}
