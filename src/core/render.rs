//! Render-side types: the injected props bag and static components.

use super::binding::TransitionTo;
use super::error::MachineError;
use serde::Serialize;
use serde_json::{Map, Value};

/// Props injected into whatever renders the active state.
///
/// `fields` holds the data payload's top-level fields overlaid with the
/// machine's static extra props. Extra props win on key collisions.
#[derive(Debug)]
pub struct RenderProps<'a> {
    current_state: &'a str,
    fields: Map<String, Value>,
    transition_to: TransitionTo<'a>,
}

impl<'a> RenderProps<'a> {
    pub(crate) fn new(
        current_state: &'a str,
        fields: Map<String, Value>,
        transition_to: TransitionTo<'a>,
    ) -> Self {
        Self {
            current_state,
            fields,
            transition_to,
        }
    }

    /// Name of the state being rendered.
    pub fn current_state(&self) -> &str {
        self.current_state
    }

    /// Look up one injected field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// The manual-transition handle bound to the rendered state.
    pub fn transition_handle(&self) -> &TransitionTo<'a> {
        &self.transition_to
    }

    /// Request a manual transition from the rendered state.
    pub fn transition_to(&self, target: &str) -> Result<(), MachineError> {
        self.transition_to.call(target)
    }
}

/// A static renderable, invoked with the injected props when a state has no
/// render function.
pub trait Component<R>: Send + Sync {
    fn render(&self, props: &RenderProps<'_>) -> R;
}

/// Build the injected field map from a data payload and static extra props.
///
/// Non-object payloads (numbers, strings, arrays, null) contribute no fields.
pub(crate) fn inject_fields<D: Serialize>(
    data: &D,
    extra: &Map<String, Value>,
) -> Result<Map<String, Value>, MachineError> {
    let mut fields = match serde_json::to_value(data)? {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    for (key, value) in extra {
        fields.insert(key.clone(), value.clone());
    }
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Form {
        a: i64,
        label: &'static str,
    }

    fn extra(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }

    #[test]
    fn object_payload_is_spread() {
        let fields = inject_fields(&Form { a: 1, label: "x" }, &Map::new()).unwrap();

        assert_eq!(fields.get("a"), Some(&json!(1)));
        assert_eq!(fields.get("label"), Some(&json!("x")));
    }

    #[test]
    fn extra_props_override_data_fields() {
        let fields = inject_fields(
            &Form { a: 1, label: "x" },
            &extra(json!({ "label": "override", "extraProp1": "hello!" })),
        )
        .unwrap();

        assert_eq!(fields.get("a"), Some(&json!(1)));
        assert_eq!(fields.get("label"), Some(&json!("override")));
        assert_eq!(fields.get("extraProp1"), Some(&json!("hello!")));
    }

    #[test]
    fn scalar_payload_contributes_nothing() {
        let fields = inject_fields(&42_u32, &extra(json!({ "k": true }))).unwrap();

        assert_eq!(fields.len(), 1);
        assert_eq!(fields.get("k"), Some(&json!(true)));
    }

    #[test]
    fn props_expose_state_and_handle() {
        let props = RenderProps::new(
            "s1",
            extra(json!({ "n": 3 })),
            TransitionTo::new("s1", |_| Ok(())),
        );

        assert_eq!(props.current_state(), "s1");
        assert_eq!(props.get("n"), Some(&json!(3)));
        assert_eq!(props.transition_handle().bound_state(), "s1");
        assert!(props.transition_to("s2").is_ok());
    }
}
