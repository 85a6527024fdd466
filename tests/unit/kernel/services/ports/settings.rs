use super::*;

#[test]
fn empty_object_uses_defaults() {
    let settings: Settings = serde_json::from_str("{}").unwrap();
    assert_eq!(settings.workspace.edit_routing, EditRouting::Origin);
    assert_eq!(settings.workspace.explorer, ExplorerSource::Sample);
    assert_eq!(settings.editor.tab_size, 4);
    assert_eq!(settings.terminal.prompt, "$");
    assert_eq!(settings.terminal.scrollback_lines, 5000);
    assert_eq!(settings.assistant.seed, None);
    assert_eq!(settings.assistant.delay_min_ms, 800);
    assert_eq!(settings.assistant.delay_max_ms, 2000);
    assert_eq!(settings.theme.focus_border.as_deref(), Some("cyan"));
}

#[test]
fn partial_sections_keep_remaining_defaults() {
    let data = r#"{
      "workspace": { "edit_routing": "active", "explorer": "documents" },
      "assistant": { "seed": 9, "failure_rate": 0.25 },
      "terminal": { "prompt": ">" }
    }"#;
    let settings: Settings = serde_json::from_str(data).unwrap();

    assert_eq!(settings.workspace.edit_routing, EditRouting::Active);
    assert_eq!(settings.workspace.explorer, ExplorerSource::Documents);
    assert_eq!(settings.assistant.seed, Some(9));
    assert_eq!(settings.assistant.failure_rate, 0.25);
    assert_eq!(settings.assistant.delay_min_ms, 800);
    assert_eq!(settings.terminal.prompt, ">");
    assert_eq!(settings.terminal.scrollback_lines, 5000);
}

#[test]
fn default_settings_serialize_without_seed() {
    let json = serde_json::to_string_pretty(&Settings::default()).unwrap();
    assert!(!json.contains("seed"));
    assert!(json.contains("\"edit_routing\": \"origin\""));

    let back: Settings = serde_json::from_str(&json).unwrap();
    assert_eq!(back.editor.tab_size, 4);
}

#[test]
fn unknown_routing_is_rejected() {
    let result = serde_json::from_str::<Settings>(r#"{"workspace":{"edit_routing":"nowhere"}}"#);
    assert!(result.is_err());
}
