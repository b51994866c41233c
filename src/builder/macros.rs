//! Macros for ergonomic table construction.

/// Generate a state enum together with its `State` implementation.
///
/// The enum derives `Copy`, `Eq`, `Hash` and serde traits, and gains an
/// `ALL` constant listing every variant in declaration order.
///
/// # Example
///
/// ```
/// use table_fsm::core::State;
/// use table_fsm::state_enum;
///
/// state_enum! {
///     pub enum TokenState {
///         Start,
///         Word,
///         Number,
///     }
/// }
///
/// assert_eq!(TokenState::Word.name(), "Word");
/// assert_eq!(TokenState::ALL.len(), 3);
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            Debug,
            serde::Serialize,
            serde::Deserialize
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            #[allow(dead_code)]
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
