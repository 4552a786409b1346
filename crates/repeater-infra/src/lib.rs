//! Service implementations for the repeater field kit.
//!
//! Contains implementations of the ports defined in `repeater-core`:
//! the AES-256-GCM reference codec, the in-memory layout registry, the
//! request-scoped old-input store, and the TOML configuration loader.

pub mod codec;
pub mod config;
pub mod old_input;
pub mod registry;

#[cfg(test)]
mod tests {
    //! End-to-end lifecycle tests wiring all service implementations
    //! through the core builder.

    use std::sync::Arc;

    use repeater_core::codec::ReferenceCodec;
    use repeater_core::field::Repeater;
    use repeater_core::layout::{Layout, RowsLayout};
    use repeater_core::services::FieldServices;
    use repeater_types::error::FieldError;
    use serde_json::json;

    use crate::codec::KeyedCodec;
    use crate::old_input::{NoOldInput, SessionOldInput};
    use crate::registry::StaticLayoutRegistry;

    struct AddressRows;

    impl Layout for AddressRows {
        fn as_rows(&self) -> Option<&dyn RowsLayout> {
            Some(self)
        }
    }

    impl RowsLayout for AddressRows {
        fn row_fields(&self) -> Vec<String> {
            vec!["street".into(), "city".into()]
        }
    }

    struct SettingsScreen;

    impl Layout for SettingsScreen {}

    fn test_key() -> [u8; 32] {
        let mut key = [0u8; 32];
        for (i, byte) in key.iter_mut().enumerate() {
            *byte = i as u8;
        }
        key
    }

    fn registry() -> StaticLayoutRegistry {
        let mut registry = StaticLayoutRegistry::new();
        registry.register("AddressRows", Arc::new(AddressRows));
        registry.register("SettingsScreen", Arc::new(SettingsScreen));
        registry
    }

    fn services() -> FieldServices {
        FieldServices::new(
            Arc::new(registry()),
            Arc::new(KeyedCodec::new(&test_key())),
            Arc::new(NoOldInput),
        )
    }

    #[test]
    fn test_full_lifecycle_without_value_or_old_input() {
        let services = services();

        let mut field = Repeater::make("addresses");
        field.layout("AddressRows", &services).unwrap();
        assert!(field.is_complete());

        field.finalize(&services);
        assert_eq!(field.attributes().value, json!([]));
    }

    #[test]
    fn test_full_lifecycle_preserves_preset_rows() {
        let services = services();

        let mut field = Repeater::make("addresses");
        field.value(json!([{"city": "X"}]));
        field.layout("AddressRows", &services).unwrap();
        field.finalize(&services);

        assert_eq!(field.attributes().value, json!([{"city": "X"}]));
    }

    #[test]
    fn test_full_lifecycle_repopulates_from_session() {
        let mut old = SessionOldInput::new();
        old.insert("addresses", json!([{"city": "Y"}, {"city": "Z"}]));
        let services = FieldServices::new(
            Arc::new(registry()),
            Arc::new(KeyedCodec::new(&test_key())),
            Arc::new(old),
        );

        let mut field = Repeater::make("addresses");
        field.layout("AddressRows", &services).unwrap();
        field.finalize(&services);

        assert_eq!(
            field.attributes().value,
            json!([{"city": "Y"}, {"city": "Z"}])
        );
    }

    #[test]
    fn test_stored_layout_is_opaque_and_decodable() {
        let services = services();

        let mut field = Repeater::make("addresses");
        field.layout("AddressRows", &services).unwrap();

        let token = field.attributes().layout.clone().unwrap();
        assert_ne!(token, "AddressRows");
        assert!(!token.contains("AddressRows"));

        let decoder = KeyedCodec::new(&test_key());
        assert_eq!(decoder.decode(&token).unwrap(), "AddressRows");
    }

    #[test]
    fn test_non_rows_layout_rejected_end_to_end() {
        let services = services();

        let mut field = Repeater::make("settings");
        let err = field.layout("SettingsScreen", &services).unwrap_err();
        assert!(matches!(err, FieldError::UnsupportedLayout(_)));
        assert_eq!(field.missing_attributes(), vec!["layout"]);
    }

    #[test]
    fn test_ajax_payload_round_trip() {
        let services = services();

        let mut field = Repeater::make("addresses");
        field.layout("AddressRows", &services).unwrap();
        field
            .ajax_data_with(|| json!({"post_type": "page"}))
            .unwrap();

        assert_eq!(field.attributes().ajax_data, r#"{"post_type":"page"}"#);

        // A computation yielding a bare scalar keeps the prior payload.
        field.ajax_data_with(|| json!("nope")).unwrap();
        assert_eq!(field.attributes().ajax_data, r#"{"post_type":"page"}"#);
    }
}
