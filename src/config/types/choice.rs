//! Closed string enumerations (`lang`, `banner.position`, ...).
//!
//! Values are decoded from their exact spelling so an unknown value is
//! reported as `not in {top,center,bottom}` at the offending field.

/// Declare a closed string enumeration.
///
/// ```ignore
/// choice! {
///     /// Where the banner image is anchored.
///     pub enum BannerPosition {
///         Top => "top",
///         Center => "center",
///         Bottom => "bottom",
///     }
/// }
/// ```
macro_rules! choice {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every accepted value, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Spelling used in the config file.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }

            /// Reason reported for a value outside the enumeration.
            pub fn expected() -> String {
                format!("not in {{{}}}", [$($text),+].join(","))
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok(Self::$variant),)+
                    _ => Err(Self::expected()),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let text = <String as serde::Deserialize>::deserialize(deserializer)?;
                text.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use choice;

#[cfg(test)]
mod tests {
    choice! {
        enum Shade {
            Light => "light",
            Dark => "dark",
        }
    }

    #[test]
    fn test_parse_exact_spelling() {
        assert_eq!("light".parse::<Shade>(), Ok(Shade::Light));
        assert_eq!(Shade::Dark.as_str(), "dark");
        assert_eq!(Shade::ALL.len(), 2);
    }

    #[test]
    fn test_unknown_value_reason() {
        assert_eq!("Light".parse::<Shade>(), Err("not in {light,dark}".to_string()));
    }
}
