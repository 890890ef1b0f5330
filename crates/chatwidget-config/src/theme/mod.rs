//! Widget theme: built-in defaults and merge rules.

mod apply;
mod types;

pub use apply::{apply_overrides, merge_record};
pub use types::{Theme, ThemeKey, ThemeOverrides};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn key_names_round_trip() {
        for key in ThemeKey::ALL {
            assert_eq!(ThemeKey::from_name(key.name()), Some(key));
        }
        assert_eq!(ThemeKey::from_name("borderRadius"), None);
    }

    #[test]
    fn default_theme_is_fully_populated() {
        let theme = Theme::default();
        for key in ThemeKey::ALL {
            assert!(!theme.get(key).is_empty(), "{} is empty", key.name());
        }
        assert_eq!(theme.background_color, "white");
        assert_eq!(theme.bot_message_background_color, "#f1f0f0");
    }

    #[test]
    fn merge_overrides_only_returned_keys() {
        let mut theme = Theme::default();
        let changed = merge_record(&mut theme, &record(json!({"buttonColor": "#ff0000"})));

        assert_eq!(changed, vec![ThemeKey::ButtonColor]);
        assert_eq!(theme.button_color, "#ff0000");

        let defaults = Theme::default();
        for key in ThemeKey::ALL {
            if key != ThemeKey::ButtonColor {
                assert_eq!(theme.get(key), defaults.get(key));
            }
        }
    }

    #[test]
    fn merge_of_every_key_subset_stays_total() {
        let defaults = Theme::default();
        // every subset of the nine keys
        for mask in 0u32..(1 << ThemeKey::ALL.len()) {
            let mut map = serde_json::Map::new();
            for (i, key) in ThemeKey::ALL.iter().enumerate() {
                if mask & (1 << i) != 0 {
                    map.insert(key.name().into(), json!(format!("v{i}")));
                }
            }

            let mut theme = Theme::default();
            merge_record(&mut theme, &map);

            for (i, key) in ThemeKey::ALL.iter().enumerate() {
                if mask & (1 << i) != 0 {
                    assert_eq!(theme.get(*key), format!("v{i}"));
                } else {
                    assert_eq!(theme.get(*key), defaults.get(*key));
                }
            }
        }
    }

    #[test]
    fn merge_skips_unknown_and_non_string_values() {
        let mut theme = Theme::default();
        let changed = merge_record(
            &mut theme,
            &record(json!({
                "borderRadius": "4px",
                "textColor": 42,
                "fontFamily": null,
                "inputBorderColor": "#333"
            })),
        );
        assert_eq!(changed, vec![ThemeKey::InputBorderColor]);
        assert_eq!(theme.text_color, "#000000");
        assert_eq!(theme.font_family, "Arial, sans-serif");
    }

    #[test]
    fn merge_of_identical_values_reports_no_change() {
        let mut theme = Theme::default();
        let changed = merge_record(&mut theme, &record(json!({"textColor": "#000000"})));
        assert!(changed.is_empty());
    }

    #[test]
    fn input_text_color_falls_back_to_text_color() {
        let mut theme = Theme::default();
        theme.text_color = "#123456".into();
        theme.input_text_color = "#abcdef".into();
        assert_eq!(theme.input_text_color(), "#abcdef");

        theme.input_text_color.clear();
        assert_eq!(theme.input_text_color(), "#123456");
    }

    #[test]
    fn typing_color_falls_back_to_grey() {
        let mut theme = Theme::default();
        assert_eq!(theme.typing_text_color(), "#000000");
        theme.text_color.clear();
        assert_eq!(theme.typing_text_color(), "#666");
    }

    #[test]
    fn theme_deserializes_from_backend_shape() {
        let theme: Theme = serde_json::from_value(json!({
            "backgroundColor": "#111111",
            "userMessageBackgroundColor": "#00ff00"
        }))
        .unwrap();
        assert_eq!(theme.background_color, "#111111");
        assert_eq!(theme.user_message_background_color, "#00ff00");
        assert_eq!(theme.button_color, "#4a90e2");
    }

    #[test]
    fn apply_overrides_merges_present_fields() {
        let mut theme = Theme::default();
        let overrides = ThemeOverrides {
            font_family: Some("Georgia, serif".into()),
            ..Default::default()
        };
        apply_overrides(&mut theme, &overrides);
        assert_eq!(theme.font_family, "Georgia, serif");
        assert_eq!(theme.button_color, "#4a90e2");
    }

    #[test]
    fn apply_empty_overrides_changes_nothing() {
        let mut theme = Theme::default();
        apply_overrides(&mut theme, &ThemeOverrides::default());
        assert_eq!(theme, Theme::default());
    }
}
