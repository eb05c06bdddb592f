// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: literals, consts, vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// First descendant matching `$sel`, or bail out of the item with `MissingNode`.
#[macro_export]
macro_rules! require {
    ($node:expr, $sel:expr) => {
        $node
            .select_one($sel)
            .ok_or($crate::error::ExtractError::MissingNode { selector: $sel })?
    };
}

/// `$list[$ix]`, or bail out of the item with `MissingIndex`.
#[macro_export]
macro_rules! nth {
    ($list:expr, $ix:expr, $what:expr) => {
        $list
            .get($ix)
            .ok_or($crate::error::ExtractError::MissingIndex { what: $what, index: $ix })?
    };
}
