//! Macros for building schemas with minimal boilerplate.

/// Builds the field list for [`object`](crate::object) without boxing
/// noise.
///
/// Expands to a `Vec<(String, Box<dyn Validate>)>` in declaration order.
///
/// # Examples
///
/// ```
/// use shapecheck::{fields, number, object, string, Validate};
/// use serde_json::json;
///
/// let schema = object(fields! {
///     "name" => string().min(1),
///     "age" => number().optional(),
/// });
/// assert!(schema.validate(&json!({ "name": "alice", "age": 3 })).is_ok());
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        ::std::vec::Vec::<(
            ::std::string::String,
            ::std::boxed::Box<dyn $crate::Validate>,
        )>::new()
    };
    ( $( $name:expr => $validator:expr ),+ $(,)? ) => {
        ::std::vec![ $(
            (
                ::std::string::String::from($name),
                ::std::boxed::Box::new($validator) as ::std::boxed::Box<dyn $crate::Validate>,
            )
        ),+ ]
    };
}
