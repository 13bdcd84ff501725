/// A macro that standardizes our unconditional setters. Each generated setter
/// assigns the field, logs the change, and hands the caller back a [Change]
/// describing what was applied so it can decide how to surface it.
///
/// Prefix the field name with `into` to have the setter accept anything that
/// converts into the field's type (mostly for `String` fields).
///
/// [Change]: ../change/enum.Change.html
macro_rules! change_setters {
    (@applied $val:expr, $change:ident) => {{
        let change = crate::models::change::Change::$change($val.clone());
        tracing::info!(%change, "hire record updated");
        change
    }};

    (@one $(#[$meta:meta])* $setter:ident(into $field:ident: $ty:ty) => $change:ident) => {
        $(#[$meta])*
        pub fn $setter(&mut self, $field: impl Into<$ty>) -> crate::models::change::Change {
            self.$field = $field.into();
            change_setters!(@applied self.$field, $change)
        }
    };

    (@one $(#[$meta:meta])* $setter:ident($field:ident: $ty:ty) => $change:ident) => {
        $(#[$meta])*
        pub fn $setter(&mut self, $field: $ty) -> crate::models::change::Change {
            self.$field = $field;
            change_setters!(@applied self.$field, $change)
        }
    };

    // entry point
    ($( $(#[$meta:meta])* $setter:ident($($sig:tt)*) => $change:ident, )*) => {
        $(
            change_setters!{ @one $(#[$meta])* $setter($($sig)*) => $change }
        )*
    };
}
