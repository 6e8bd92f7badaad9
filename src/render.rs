use std::fmt::Display;

/// Renders `value` for a `class X { ... }` block, with `null` for absent values
/// and every continuation line indented by four spaces.
pub(crate) fn indented<T: Display + ?Sized>(value: Option<&T>) -> String {
    match value {
        Some(v) => v.to_string().replace('\n', "\n    "),
        None => "null".to_owned(),
    }
}

/// Same as [`indented`], for list-valued fields: `[a, b]`.
pub(crate) fn indented_list<T: Display>(values: Option<&[T]>) -> String {
    match values {
        Some(items) => {
            let joined = items
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            indented(Some(&format!("[{}]", joined)))
        }
        None => "null".to_owned(),
    }
}
