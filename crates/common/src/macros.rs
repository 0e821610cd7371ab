/// Declares plain data structs whose fields are all public.
///
/// Field attributes (doc comments included) are carried over, so catalog
/// types can document individual fields.
#[macro_export]
macro_rules! pub_fields_struct {
    {
        $(
            $(#[$($attr:tt)*])*
            struct $name:ident {
                $(
                    $(#[$($field_attr:tt)*])*
                    $field:ident: $t:ty,
                )*
            }
        )*
    } => {
        $(
            $(#[$($attr)*])*
            pub struct $name {
                $(
                    $(#[$($field_attr)*])*
                    pub $field: $t,
                )*
            }
        )*
    }
}
