// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Single expression — literals, consts, vars, &str slices
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}
