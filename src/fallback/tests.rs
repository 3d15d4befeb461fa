use super::*;
use crate::knowledge::{KnowledgeBase, KnowledgeEntry, RETURNS, SHIPPING};

#[test]
fn test_builtin_fallback_for_shipping() {
    let responder = FallbackResponder::new(ContextRouter::builtin());
    let reply = responder.respond("When will my package arrive?");

    assert_eq!(reply.category, SHIPPING);
    assert!(reply.answer.contains("3-5 business days"));
}

#[test]
fn test_unmatched_question_uses_default_category() {
    let responder = FallbackResponder::new(ContextRouter::builtin());
    let reply = responder.respond("Tell me a joke");

    assert_eq!(reply.category, RETURNS);
    assert!(reply.answer.contains("30 days"));
}

#[test]
fn test_missing_canned_text_uses_first_sentence() {
    let kb = KnowledgeBase::from_entries(vec![KnowledgeEntry::new(
        "hours",
        "We are open 9 to 5. Closed on Sundays.",
        ["open"],
    )])
    .unwrap();
    let responder = FallbackResponder::new(ContextRouter::new(kb));

    let reply = responder.respond("When are you open?");
    assert_eq!(reply.category, "hours");
    assert_eq!(reply.answer, "We are open 9 to 5.");
}

#[test]
fn test_empty_knowledge_base_gets_generic_reply() {
    let responder = FallbackResponder::new(ContextRouter::new(KnowledgeBase::empty("general")));
    let reply = responder.respond("anything");

    assert_eq!(reply.category, "general");
    assert_eq!(reply.answer, GENERIC_FALLBACK);
}

#[test]
fn test_first_sentence() {
    assert_eq!(first_sentence("One. Two."), Some("One."));
    assert_eq!(first_sentence("  no period "), Some("no period"));
    assert_eq!(first_sentence("   "), None);
    assert_eq!(first_sentence("."), None);
}
