// choices
/// Declare an enumeration of labelled choices.
///
/// ```ignore
/// choices! {
///     pub struct StatusChoices {
///         ACTIVE = (1, "Active", { "external_system_name" => "act" }),
///         INACTIVE = (2, "Inactive", { "external_system_name" => "ina" }),
///     }
/// }
///
/// assert_eq!(StatusChoices::ACTIVE, 1);
/// assert_eq!(StatusChoices::INACTIVE.label(), "Inactive");
/// assert_eq!(StatusChoices::choices()[1].name(), Some("INACTIVE"));
/// ```
///
/// Expands to a unit struct with one `ChoiceRef` constant per choice and
/// an implementation of `Choices`. The set is prepared once per process, on
/// first use. Iterating the struct yields `(choice, label)` pairs.
#[macro_export]
macro_rules! choices {
    (
        $(#[$attr:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$choice_attr:meta])*
                $ident:ident = (
                    $value:expr,
                    $label:expr
                    $(, { $($key:literal => $meta_value:expr),* $(,)? })?
                )
            ),* $(,)?
        }
    ) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
        $vis struct $name;

        #[allow(dead_code)]
        impl $name {
            $(
                $(#[$choice_attr])*
                $vis const $ident: $crate::ChoiceRef<Self> =
                    $crate::ChoiceRef::new($value, stringify!($ident));
            )*
        }

        impl $crate::Choices for $name {
            fn choice_set() -> &'static $crate::ChoiceSet {
                static SET: ::std::sync::OnceLock<$crate::ChoiceSet> =
                    ::std::sync::OnceLock::new();

                SET.get_or_init(|| {
                    $crate::ChoiceSet::builder(stringify!($name))
                        $(
                            .choice(
                                stringify!($ident),
                                $crate::Choice::with_meta($value, $label, {
                                    #[allow(unused_mut)]
                                    let mut meta = $crate::Meta::new();
                                    $($(
                                        meta.insert(
                                            ::std::string::String::from($key),
                                            $crate::MetaValue::from($meta_value),
                                        );
                                    )*)?
                                    meta
                                }),
                            )
                        )*
                        .build()
                })
            }
        }

        impl ::std::iter::IntoIterator for $name {
            type Item = (&'static $crate::Choice, &'static str);
            type IntoIter = $crate::Pairs<'static>;

            fn into_iter(self) -> Self::IntoIter {
                <Self as $crate::Choices>::iter()
            }
        }
    };
}
