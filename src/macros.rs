// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Anything String: From: literals, consts, &str borrows
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! sum_fields {
    // Both args are references. Clone `*$first`, then overwrite each listed
    // field with `$first.f` saturating-plus `$second.f`; unlisted fields keep
    // the first value.
    ($first:expr, $second:expr; $($field:ident),+ $(,)?) => {{
        let first = $first;
        let second = $second;
        let mut out = first.clone();
        $(
            out.$field = first.$field.saturating_add(second.$field);
        )+
        out
    }};
}
