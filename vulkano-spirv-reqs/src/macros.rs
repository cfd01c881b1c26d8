/// Declares a SPIR-V enumeration whose members carry a numeric value and, optionally, a list of
/// items of which at least one must be enabled for the member to be usable.
///
/// The member's identifier is also its canonical name in the SPIR-V grammar.
macro_rules! spirv_enum {
    {
        $(#[doc = $ty_doc:literal])*
        $ty:ident($repr:ty) requires $req_ty:ident;

        $(
            $(#[doc = $member_doc:literal])*
            $member_name:ident = $value:literal
            $(RequiresOneOf([
                $($req_name:ident),+ $(,)?
            ]))?
            ,
        )+
    } => {
        $(#[doc = $ty_doc])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr($repr)]
        pub enum $ty {
            $(
                $(#[doc = $member_doc])*
                $member_name = $value,
            )+
        }

        impl $ty {
            #[doc = concat!("Every member of `", stringify!($ty), "`, in declaration order.")]
            pub const ALL: &'static [Self] = &[
                $(Self::$member_name,)+
            ];

            /// Returns the canonical name of `self`, as spelled in the SPIR-V grammar.
            #[inline]
            pub const fn name(self) -> &'static str {
                match self {
                    $(
                        Self::$member_name => stringify!($member_name),
                    )+
                }
            }

            /// Looks up a member by its canonical name. The match is exact and case-sensitive.
            pub fn from_name(name: &str) -> Option<Self> {
                Some(match name {
                    $(
                        stringify!($member_name) => Self::$member_name,
                    )+
                    _ => return None,
                })
            }

            #[doc = concat!(
                "Returns the `", stringify!($req_ty), "` values of which at least one must be \
                enabled for `self` to be used. An empty slice means there is no requirement."
            )]
            #[allow(unreachable_patterns)]
            pub const fn requires_one_of(self) -> &'static [$req_ty] {
                match self {
                    $(
                        $(
                            Self::$member_name => &[$($req_ty::$req_name),+],
                        )?
                    )+
                    _ => &[],
                }
            }
        }

        impl From<$ty> for $repr {
            #[inline]
            fn from(val: $ty) -> Self {
                val as $repr
            }
        }

        impl TryFrom<$repr> for $ty {
            type Error = ();

            #[inline]
            fn try_from(val: $repr) -> Result<Self, Self::Error> {
                Ok(match val {
                    $(
                        $value => Self::$member_name,
                    )+
                    _ => return Err(()),
                })
            }
        }

        impl std::fmt::Display for $ty {
            #[inline]
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

/// Declares the closed set of SPIR-V extensions known to this crate.
///
/// Each member maps to exactly one canonical extension name. A member may also list capabilities
/// that declaring the extension makes available without an explicit `OpCapability`.
macro_rules! spirv_extensions {
    {
        $(#[doc = $ty_doc:literal])*
        $ty:ident;

        $(
            $(#[doc = $member_doc:literal])*
            $member_name:ident = $ext_name:literal
            $(Implies([
                $($cap_name:ident),+ $(,)?
            ]))?
            ,
        )+
    } => {
        $(#[doc = $ty_doc])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum $ty {
            $(
                $(#[doc = $member_doc])*
                #[doc = concat!("`", $ext_name, "`")]
                $member_name,
            )+
        }

        impl $ty {
            #[doc = concat!("Every member of `", stringify!($ty), "`, in registry order.")]
            pub const ALL: &'static [Self] = &[
                $(Self::$member_name,)+
            ];

            /// Returns the canonical name of the extension, as written in `OpExtension`.
            #[inline]
            pub const fn name(self) -> &'static str {
                match self {
                    $(
                        Self::$member_name => $ext_name,
                    )+
                }
            }

            /// Looks up an extension by its canonical name.
            ///
            /// The match is exact: no case folding, no prefix matching. `None` means the name is
            /// not part of the vocabulary, which is not an error in itself.
            pub fn from_name(name: &str) -> Option<Self> {
                Some(match name {
                    $(
                        $ext_name => Self::$member_name,
                    )+
                    _ => return None,
                })
            }

            /// Returns the capabilities that declaring this extension makes available.
            #[allow(unreachable_patterns)]
            pub const fn implied_capabilities(self) -> &'static [$crate::spirv::Capability] {
                match self {
                    $(
                        $(
                            Self::$member_name => &[$($crate::spirv::Capability::$cap_name),+],
                        )?
                    )+
                    _ => &[],
                }
            }
        }

        impl std::fmt::Display for $ty {
            #[inline]
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

pub(crate) use spirv_enum;
pub(crate) use spirv_extensions;
