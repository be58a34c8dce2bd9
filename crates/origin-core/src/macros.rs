//! Declaration macros for member types and enumerations.

/// Implements [`Member`](crate::Member) and the value-based trait set for a
/// struct that embeds a [`Constant`](crate::Constant) field.
///
/// Equality and hashing follow the embedded constant's value, ordering
/// follows its declaration rank, and serialization emits the raw value.
#[macro_export]
macro_rules! impl_member {
    ($name:ty, $value:ty, $field:ident) => {
        impl $crate::Member for $name {
            type Value = $value;

            fn constant(&self) -> &$crate::Constant<$value> {
                &self.$field
            }
        }

        impl ::core::cmp::PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.$field == other.$field
            }
        }

        impl ::core::cmp::Eq for $name {}

        impl ::core::hash::Hash for $name {
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                ::core::hash::Hash::hash(&self.$field, state);
            }
        }

        impl ::core::cmp::PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> ::core::option::Option<::core::cmp::Ordering> {
                self.$field.partial_cmp(&other.$field)
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&self.$field, f)
            }
        }

        impl $crate::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::serde::Serializer,
            {
                $crate::serde::Serialize::serialize(&self.$field, serializer)
            }
        }
    };
}

/// Declares a member type that is nothing more than a typed constant.
///
/// ```rust
/// origin_core::constant_type! {
///     /// A settlement convention.
///     pub struct Settlement(String);
/// }
///
/// let t2 = Settlement::new("T+2", "Two business days");
/// assert_eq!(origin_core::Member::label(&t2), "Two business days");
/// ```
#[macro_export]
macro_rules! constant_type {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident($value:ty);
    ) => {
        $(#[$meta])*
        #[derive(Debug)]
        $vis struct $name {
            constant: $crate::Constant<$value>,
        }

        impl $name {
            /// Creates a member with the given value and label.
            pub fn new(value: impl Into<$value>, label: impl Into<String>) -> Self {
                Self {
                    constant: $crate::Constant::new(value, label),
                }
            }

            /// Creates a member whose label is its value's text form.
            pub fn from_value(value: impl Into<$value>) -> Self {
                let value: $value = value.into();
                let label = value.to_string();
                Self::new(value, label)
            }
        }

        $crate::impl_member!($name, $value, constant);
    };
}

/// Declares an enumeration: a struct with one public handle per member and
/// a lazily built, process-wide instance.
///
/// Members are ranked in the order written. Initializers run in that order
/// and may refer to the members declared above them by name. Member names
/// are the field names, without any `r#` prefix.
///
/// ```rust
/// use origin_core::prelude::*;
///
/// origin_core::constants! {
///     /// Day count conventions.
///     pub struct DayCounts<Constant<String>> {
///         act_365 = Constant::new("Actual365Fixed", "ACT/365F"),
///         act_360 = Constant::new("Actual360", "ACT/360"),
///     }
/// }
///
/// let day_counts = DayCounts::global();
/// assert!(std::ptr::eq(day_counts, DayCounts::global()));
/// assert_eq!(day_counts.get(&"Actual360".to_string()).unwrap().label(), "ACT/360");
/// ```
#[macro_export]
macro_rules! constants {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident<$member:ty> {
            $(
                $(#[$field_meta:meta])*
                $field:ident = $init:expr
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                #[doc = concat!("The `", stringify!($field), "` member.")]
                pub $field: ::std::sync::Arc<$member>,
            )*
            registry: $crate::Constants<$member>,
        }

        impl $name {
            /// Builds a fresh, frozen instance.
            ///
            /// # Errors
            ///
            /// Returns a declaration error when two members share a value.
            #[allow(clippy::redundant_clone)]
            pub fn build() -> $crate::RegistryResult<Self> {
                $(
                    let $field: ::std::sync::Arc<$member> = ::std::sync::Arc::new($init);
                )*
                let registry = $crate::ConstantsBuilder::<$member>::new(stringify!($name))
                    $(.member(
                        stringify!($field).trim_start_matches("r#"),
                        ::std::sync::Arc::clone(&$field),
                    ))*
                    .build()?;
                Ok(Self {
                    $($field,)*
                    registry,
                })
            }

            /// The process-wide instance, built on first access.
            ///
            /// # Panics
            ///
            /// Panics on first access if the declaration is invalid. A broken
            /// catalog is a start-up configuration error.
            pub fn global() -> &'static Self {
                static INSTANCE: ::std::sync::OnceLock<$name> = ::std::sync::OnceLock::new();
                INSTANCE.get_or_init(|| match Self::build() {
                    Ok(constants) => constants,
                    Err(err) => panic!("invalid {} declaration: {}", stringify!($name), err),
                })
            }

            /// The underlying registry.
            pub fn registry(&self) -> &$crate::Constants<$member> {
                &self.registry
            }

            /// Consumes the declaration, keeping only the registry.
            pub fn into_registry(self) -> $crate::Constants<$member> {
                self.registry
            }
        }

        impl ::core::ops::Deref for $name {
            type Target = $crate::Constants<$member>;

            fn deref(&self) -> &Self::Target {
                &self.registry
            }
        }

        impl $crate::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::serde::Serializer,
            {
                $crate::serde::Serialize::serialize(&self.registry, serializer)
            }
        }
    };
}
