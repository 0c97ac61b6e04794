use super::*;

#[test]
fn catalog_labels_resolve_known_ids_and_fall_back() {
    assert_eq!(catalog_label(&VOICES, "nova"), "Nova (Female)");
    assert_eq!(catalog_label(&MODELS, "gpt-4o"), "GPT-4o (Recommended)");
    assert_eq!(catalog_label(&LANGUAGES, "tlh"), "tlh");
}

#[test]
fn form_requires_a_website_and_a_name() {
    assert_eq!(validate_assistant_form("", "Support"), Err("Select a website first."));
    assert_eq!(validate_assistant_form("123", "   "), Err("Name your assistant first."));
    assert_eq!(validate_assistant_form("123", "Support"), Ok(()));
}

#[test]
fn config_builder_clamps_to_the_form_bounds() {
    let config = build_assistant_config("Support", "Prompt", "nova", "en", "gpt-4o", "1.7", "900");
    assert!((config.temperature - 1.0).abs() < f64::EPSILON);
    assert_eq!(config.max_response_duration, 300);

    let config = build_assistant_config("Support", "Prompt", "nova", "en", "gpt-4o", "-0.3", "5");
    assert!(config.temperature.abs() < f64::EPSILON);
    assert_eq!(config.max_response_duration, 10);
}

#[test]
fn config_builder_defaults_unparsable_numbers() {
    let config = build_assistant_config("Support", "Prompt", "nova", "en", "gpt-4o", "warm", "");
    assert!((config.temperature - 0.7).abs() < f64::EPSILON);
    assert_eq!(config.max_response_duration, 120);
}

#[test]
fn config_builder_trims_text_fields() {
    let config =
        build_assistant_config("  Support  ", "  Be helpful.  ", "echo", "fr", "gpt-4-turbo", "0.5", "60");
    assert_eq!(config.name, "Support");
    assert_eq!(config.system_prompt, "Be helpful.");
    assert_eq!(config.voice_id, "echo");
    assert_eq!(config.language, "fr");
    assert_eq!(config.llm_model, "gpt-4-turbo");
}
