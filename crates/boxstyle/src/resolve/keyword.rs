//! Keyword enums: a fixed set of prop names, each mapped to a CSS value,
//! plus a `Custom` variant that carries anything else through verbatim.

macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = $token:literal => $css:literal),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Deserialize)]
        #[serde(from = "String")]
        pub enum $name {
            $($(#[$vmeta])* $variant,)*
            /// An unrecognized name, emitted as the CSS value unchanged.
            Custom(String),
        }

        impl $name {
            /// Every recognized prop name, in table order.
            pub const NAMES: &'static [&'static str] = &[$($token),*];

            /// The CSS value this keyword stands for.
            pub fn as_css(&self) -> &str {
                match self {
                    $($name::$variant => $css,)*
                    $name::Custom(value) => value.as_str(),
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                match value.as_str() {
                    $($token => $name::$variant,)*
                    _ => $name::Custom(value),
                }
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                $name::from(value.to_string())
            }
        }
    };
}

pub(crate) use keyword_enum;
