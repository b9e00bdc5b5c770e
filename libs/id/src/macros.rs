//! Macros for defining typed resource ID kinds.

/// Macro to define a resource ID kind scoped to a resource group.
///
/// Kinds are a closed set registered in [`crate::KINDS`], so the macro is
/// only used inside this crate.
///
/// This generates a struct with `subscription_id`, `resource_group` and one
/// field per nested resource name, along with:
/// - `SEGMENTS` and `KIND` constants describing the template
/// - `new()` to build an ID from known values
/// - `id()` / `Display` to render the canonical path
/// - `parse()` and `parse_insensitively()`
/// - `FromStr`, `Serialize` and `Deserialize` implementations
/// - an implementation of [`crate::ResourceId`]
///
/// # Example
///
/// ```ignore
/// define_resource_id!(
///     /// A Power BI Embedded capacity.
///     CapacityId, "capacity", "Capacity", "Microsoft.PowerBIDedicated",
///     ["capacities" => capacity_name: "Capacity Name"]
/// );
///
/// let id = CapacityId::new("sub", "rg", "cap");
/// let parsed = CapacityId::parse(&id.id())?;
/// ```
macro_rules! define_resource_id {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal, $display:literal, $namespace:literal,
        [$($type_segment:literal => $field:ident : $label:literal),+ $(,)?]
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name {
            pub subscription_id: String,
            pub resource_group: String,
            $(pub $field: String,)+
        }

        impl $name {
            /// The provider namespace for this kind.
            pub const PROVIDER_NAMESPACE: &'static str = $namespace;

            /// The path template for this kind.
            pub const SEGMENTS: &'static [$crate::Segment] = &[
                $crate::Segment::literal("subscriptions"),
                $crate::Segment::value("subscription_id", "Subscription"),
                $crate::Segment::literal("resourceGroups"),
                $crate::Segment::value("resource_group", "Resource Group Name"),
                $crate::Segment::literal("providers"),
                $crate::Segment::literal($namespace),
                $(
                    $crate::Segment::literal($type_segment),
                    $crate::Segment::value(stringify!($field), $label),
                )+
            ];

            /// Runtime descriptor for this kind.
            pub const KIND: $crate::IdKind = $crate::IdKind::new($kind, $display, Self::SEGMENTS);

            /// Creates an ID from known values.
            ///
            /// Values must be non-empty; this is not checked here.
            #[must_use]
            pub fn new(
                subscription_id: impl Into<String>,
                resource_group: impl Into<String>,
                $($field: impl Into<String>),+
            ) -> Self {
                Self {
                    subscription_id: subscription_id.into(),
                    resource_group: resource_group.into(),
                    $($field: $field.into(),)+
                }
            }

            /// Formats the ID as its canonical path.
            #[must_use]
            pub fn id(&self) -> String {
                $crate::segment::format_segments(
                    Self::SEGMENTS,
                    [
                        self.subscription_id.as_str(),
                        self.resource_group.as_str(),
                        $(self.$field.as_str(),)+
                    ],
                )
            }

            /// Parses an ID, requiring fixed segments in their canonical casing.
            pub fn parse(input: &str) -> Result<Self, $crate::MalformedIdentifier> {
                Self::parse_with(input, $crate::Casing::Sensitive)
            }

            /// Parses an ID, ignoring the casing of fixed segments.
            ///
            /// Values are captured exactly as written.
            pub fn parse_insensitively(input: &str) -> Result<Self, $crate::MalformedIdentifier> {
                Self::parse_with(input, $crate::Casing::Insensitive)
            }

            fn parse_with(
                input: &str,
                casing: $crate::Casing,
            ) -> Result<Self, $crate::MalformedIdentifier> {
                let mut parsed = $crate::parse_segments($display, Self::SEGMENTS, input, casing)?;

                Ok(Self {
                    subscription_id: parsed.take("subscription_id")?,
                    resource_group: parsed.take("resource_group")?,
                    $($field: parsed.take(stringify!($field))?,)+
                })
            }

            /// Returns a human-readable description of the ID.
            #[must_use]
            pub fn describe(&self) -> String {
                let components = [
                    format!("Subscription: {:?}", self.subscription_id),
                    format!("Resource Group Name: {:?}", self.resource_group),
                    $(format!("{}: {:?}", $label, self.$field),)+
                ];
                format!("{} ({})", $display, components.join(" / "))
            }
        }

        impl $crate::ResourceId for $name {
            const KIND: $crate::IdKind = $name::KIND;

            fn id(&self) -> String {
                $name::id(self)
            }

            fn parse(input: &str) -> Result<Self, $crate::MalformedIdentifier> {
                $name::parse(input)
            }

            fn parse_insensitively(input: &str) -> Result<Self, $crate::MalformedIdentifier> {
                $name::parse_insensitively(input)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.id())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::MalformedIdentifier;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.id())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                // Stored references may carry user-supplied casing.
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                Self::parse_insensitively(&s).map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use define_resource_id;
