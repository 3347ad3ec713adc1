//! Response category dataset.
//!
//! Categories are plain declarative data: a flat list scanned by the
//! scorer, defined once at engine construction and never mutated. Hosts
//! can supply their own list; [`builtin_categories`] ships the default
//! portfolio dataset.

use serde::{Deserialize, Serialize};

/// One topic the assistant can address.
///
/// `keywords` are the primary triggers (lower-case, whole-word matched),
/// `context` holds secondary terms that boost relevance without being
/// triggers on their own, and `confidence` is the category's maximum
/// trustworthiness in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseCategory {
    pub keywords: Vec<String>,
    pub responses: Vec<String>,
    #[serde(default)]
    pub context: Vec<String>,
    pub confidence: f32,
    #[serde(default)]
    pub related_sections: Vec<String>,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn category(
    keywords: &[&str],
    responses: &[&str],
    context: &[&str],
    confidence: f32,
    related_sections: &[&str],
) -> ResponseCategory {
    ResponseCategory {
        keywords: owned(keywords),
        responses: owned(responses),
        context: owned(context),
        confidence,
        related_sections: owned(related_sections),
    }
}

/// The built-in portfolio dataset: twelve categories covering the site
/// sections plus conversational niceties.
pub fn builtin_categories() -> Vec<ResponseCategory> {
    vec![
        category(
            &[
                "about", "who", "background", "person", "introduction", "tell me about",
                "describe", "who is", "biography", "bio", "journey",
            ],
            &[
                "The developer behind this site is a full-stack engineer with several years of experience building high-performance web applications. The About section has the full story!",
                "Head to the About section for the developer's journey, areas of expertise, and the thinking behind this portfolio.",
                "From early internships to leading feature work on production systems, the About section walks through the whole path.",
                "You'll find the developer's professional journey and personal philosophy in the About section above.",
            ],
            &[
                "personality", "introduction", "bio", "what", "tell", "describe", "story",
                "journey",
            ],
            0.95,
            &["About", "Skills", "Projects"],
        ),
        category(
            &[
                "project", "portfolio", "work", "github", "repository", "code", "app",
                "website", "application", "software", "program", "build", "create",
            ],
            &[
                "Several full-stack projects are showcased here, built with modern web technologies. The Projects section above has the details!",
                "Take a look at the Projects section. Each entry lists the technologies used, a live demo, and a link to the source code.",
                "The portfolio includes responsive web applications spanning both frontend and backend work. Everything is documented in the Projects section.",
                "You can browse the projects in the Projects section. They cover frontend interfaces, backend services, and everything in between.",
            ],
            &[
                "development", "coding", "programming", "web", "app", "show", "see", "view",
                "look", "example",
            ],
            0.95,
            &["Projects", "Skills"],
        ),
        category(
            &[
                "skill", "technology", "tech", "stack", "programming", "language",
                "framework", "tool", "expertise", "proficient", "know", "learn", "able",
            ],
            &[
                "The technical skills span frontend frameworks, backend services, databases, and deployment tooling. See the Skills section for the full breakdown!",
                "The Skills section gives a comprehensive overview of the technologies the developer works with day to day.",
                "From UI frameworks to backend systems and cloud deployment, the experience covers the full stack. Check the Skills section for specifics.",
                "All the technical skills are laid out in the Skills section above, grouped by frontend, backend, and infrastructure.",
            ],
            &["abilities", "expertise", "proficiency", "experience", "what", "which", "have"],
            0.9,
            &["Skills", "Projects"],
        ),
        category(
            &[
                "contact", "email", "hire", "job", "collaborate", "work together",
                "opportunity", "freelance", "reach", "connect", "message", "send", "talk",
                "speak",
            ],
            &[
                "You can get in touch through the Contact section above, or via the social links in the footer. Collaboration inquiries are always welcome!",
                "For professional inquiries, please use the contact form above. Serious messages usually get a reply within a day.",
                "Looking to work together? Use the contact form, or connect through the profile links in the footer.",
                "The contact form in the Contact section is the best way to reach out directly.",
            ],
            &["communication", "connect", "reach out", "collaboration", "how", "where", "way"],
            0.85,
            &["Contact"],
        ),
        category(
            &[
                "art", "design", "creative", "illustration", "digital art", "graphic",
                "drawing", "painting", "artwork", "creative work", "visual", "design work",
            ],
            &[
                "Beyond code, there's a creative side here too! The Art section showcases digital illustrations and design work.",
                "Digital art and design are a creative outlet alongside development. You can browse the pieces in the Art section.",
                "Check out the Art section for creative projects, including digital illustrations and graphic design work.",
                "The Art section above collects digital artwork made alongside the development projects.",
            ],
            &["creative", "visual", "artistic", "design", "show", "see", "example"],
            0.8,
            &["Art"],
        ),
        category(
            &[
                "resume", "cv", "experience", "background", "education", "qualification",
                "certification", "career", "work history", "professional",
            ],
            &[
                "For a detailed resume, work history, or educational background, please reach out directly through the contact form above.",
                "You can request the full resume and professional background via the contact form.",
                "Detailed experience and qualifications are available on request. Use the contact form to ask.",
                "The complete professional background and resume are shared on request through the Contact section.",
            ],
            &["professional", "career", "work history", "education", "what", "have", "background"],
            0.75,
            &["Contact"],
        ),
        category(
            &[
                "about", "who", "background", "person", "introduction", "tell me about",
                "describe", "who is",
            ],
            &[
                "This portfolio belongs to a developer who loves solving problems with code and creating digital art. The intro at the top says it best!",
                "A full-stack developer with a soft spot for elegant interfaces and digital illustration. See the introduction at the top of the page.",
                "The introduction at the top of this page is the quickest way to get acquainted.",
                "Technical skills meet creative design here. The intro section at the top has the short version.",
            ],
            &["personality", "introduction", "bio", "what", "tell", "describe"],
            0.7,
            &["Hero"],
        ),
        category(
            &[
                "hello", "hi", "hey", "greetings", "howdy", "good morning", "good afternoon",
                "good evening", "sup",
            ],
            &[
                "\u{1f44b} Hello! I'm the portfolio assistant. I can help you explore the projects, skills, and artwork here, or help you get in touch. What would you like to know?",
                "Hi there! Welcome to the portfolio. Ask me about the projects, skills, or art, or how to make contact. How can I help?",
                "Hey! I'm here to help you find your way around this portfolio. Ask me about anything you see here!",
                "Hello! Welcome. I can walk you through the projects, skills, and artwork, or point you to the contact form.",
            ],
            &["greeting", "welcome", "introduction", "start"],
            1.0,
            &[],
        ),
        category(
            &["thank", "thanks", "appreciate", "grateful", "thank you"],
            &[
                "You're very welcome! \u{1f60a} Glad I could help. Anything else you'd like to know?",
                "My pleasure! Feel free to ask if you have more questions about the portfolio.",
                "Happy to help! Let me know if you need more information about anything specific.",
                "You're welcome! I'm here if there's anything else you want to explore.",
            ],
            &["gratitude", "appreciation", "thanks"],
            0.95,
            &[],
        ),
        category(
            &["bye", "goodbye", "see you", "farewell", "take care", "later", "cya"],
            &[
                "Goodbye! Thanks for visiting. Come back any time you have more questions!",
                "See you later! Reopen this chat whenever you need more information.",
                "Take care! The portfolio will be right here when you want to explore more.",
                "Goodbye! I hope you found what you were looking for.",
            ],
            &["farewell", "closing", "end", "exit"],
            0.9,
            &[],
        ),
        category(
            &[
                "help", "what can you do", "capabilities", "assist", "support", "guide",
                "help me", "can you help",
            ],
            &[
                "I can help you with: \u{2022} the developer's background \u{2022} projects \u{2022} technical skills \u{2022} artwork \u{2022} contact information",
                "I'm here to help you explore the background, projects, skills, artwork, and contact details. What would you like to know?",
                "Ask me about the developer's story, the projects, the tech stack, the art, or how to get in touch.",
                "I can guide you through the whole portfolio: background, projects, skills, creative work, and contact info. What interests you?",
            ],
            &["assistance", "help", "support", "guide", "what"],
            1.0,
            &["All"],
        ),
        category(
            &[
                "this", "what is this", "what is ai", "what are you", "who are you",
                "introduce yourself",
            ],
            &[
                "I'm the assistant for this portfolio site. I can tell you about the projects, skills, and artwork here. Ask away!",
                "I'm a small rule-based assistant built into this portfolio to help visitors find things. How can I help?",
                "I'm the site's assistant. I answer questions about the projects, technical skills, artwork, and contact options.",
                "I'm here to help you navigate this portfolio: work, skills, art, and how to get in touch.",
            ],
            &["ai", "assistant", "what", "who", "introduce"],
            0.95,
            &[],
        ),
    ]
}

/// Map a canonical short query (already lower-cased and trimmed) to a
/// keyword identifying its target category.
///
/// Each value occurs in the keyword list of exactly the category it is
/// meant to select, so the lookup in the classifier always resolves.
pub fn simple_query_keyword(utterance: &str) -> Option<&'static str> {
    let keyword = match utterance {
        "hello" | "hi" | "hey" => "hello",
        "projects" | "project" => "project",
        "skills" | "skill" => "skill",
        "art" | "artwork" => "art",
        "contact" => "contact",
        "about" => "about",
        "help" => "help",
        "what is this" | "what is ai" | "who are you" => "this",
        "thanks" | "thank you" => "thank",
        "bye" | "goodbye" => "bye",
        _ => return None,
    };
    Some(keyword)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_dataset_shape() {
        let categories = builtin_categories();
        assert_eq!(categories.len(), 12);
        for cat in &categories {
            assert!(!cat.keywords.is_empty());
            assert!(!cat.responses.is_empty());
            assert!((0.0..=1.0).contains(&cat.confidence));
        }
    }

    #[test]
    fn test_keywords_are_lowercase() {
        for cat in builtin_categories() {
            for kw in &cat.keywords {
                assert_eq!(kw, &kw.to_lowercase(), "keyword not lower-case: {}", kw);
            }
            for term in &cat.context {
                assert_eq!(term, &term.to_lowercase(), "context term not lower-case: {}", term);
            }
        }
    }

    #[test]
    fn test_greeting_category_has_full_confidence() {
        let categories = builtin_categories();
        let greeting = categories
            .iter()
            .find(|c| c.keywords.iter().any(|k| k == "hello"))
            .unwrap();
        assert_eq!(greeting.confidence, 1.0);
        assert!(greeting.related_sections.is_empty());
    }

    #[test]
    fn test_simple_queries_resolve_to_existing_categories() {
        let categories = builtin_categories();
        for query in [
            "hello", "hi", "hey", "projects", "project", "skills", "skill", "art",
            "artwork", "contact", "about", "help", "what is this", "what is ai",
            "who are you", "thanks", "thank you", "bye", "goodbye",
        ] {
            let keyword = simple_query_keyword(query)
                .unwrap_or_else(|| panic!("no mapping for {:?}", query));
            assert!(
                categories
                    .iter()
                    .any(|c| c.keywords.iter().any(|k| k == keyword)),
                "keyword {:?} for query {:?} not found in any category",
                keyword,
                query
            );
        }
    }

    #[test]
    fn test_simple_query_unknown() {
        assert!(simple_query_keyword("tell me everything").is_none());
        assert!(simple_query_keyword("").is_none());
    }

    #[test]
    fn test_simple_query_requires_normalized_input() {
        // The lookup expects the caller to normalize case first.
        assert!(simple_query_keyword("Hello").is_none());
        assert!(simple_query_keyword("hello").is_some());
    }

    #[test]
    fn test_category_serde_round_trip() {
        let categories = builtin_categories();
        let json = serde_json::to_string(&categories[0]).unwrap();
        let back: ResponseCategory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, categories[0]);
    }
}
