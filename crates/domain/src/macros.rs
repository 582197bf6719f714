//! Macro for implementing Display and FromStr for label enums
//!
//! Several domain enums travel as human-readable labels ("Day Shift",
//! "Left Sensor"). This macro keeps the label table in one place and derives
//! both directions from it.
//!
//! # Example
//!
//! ```rust
//! use shiftboard_domain::impl_label_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Side {
//!     Left,
//!     Right,
//! }
//!
//! impl_label_conversions!(Side {
//!     Left => "Left Side",
//!     Right => "Right Side",
//! });
//!
//! assert_eq!(Side::Left.to_string(), "Left Side");
//! assert_eq!("right side".parse::<Side>(), Ok(Side::Right));
//! ```

/// Implements Display, FromStr and a `label()` accessor for label enums
///
/// # Features
///
/// - Case-insensitive parsing ("DAY SHIFT", "day shift" and "Day Shift" all
///   parse)
/// - Display writes the label exactly as declared
/// - Descriptive error messages with enum name
#[macro_export]
macro_rules! impl_label_conversions {
    ($enum_name:ident { $($variant:ident => $label:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Human-readable label for this variant.
            pub const fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                $(
                    if trimmed.eq_ignore_ascii_case($label) {
                        return Ok(Self::$variant);
                    }
                )+
                Err(format!("Invalid {}: {}", stringify!($enum_name), s))
            }
        }
    };
}
