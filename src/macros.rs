// src/macros.rs
//
// `s!("x")`  → owned String (`s!()` is empty)
// `join!(a, b, c)` → one String built from &str pieces, no format! parsing

#[macro_export]
macro_rules! s {
    () => { ::std::string::String::new() };
    ($v:expr) => { ::std::string::String::from($v) };
}

#[macro_export]
macro_rules! join {
    ($head:expr $(, $tail:expr)+ $(,)?) => {{
        let mut out = ::std::string::String::from($head);
        $( out.push_str($tail); )+
        out
    }};
}
