/// Where a log record was emitted from.
///
/// Normally built by the [`location!`](crate::location) macro, which expands
/// at the call site so `file!()`, `line!()` and the enclosing function name
/// refer to the caller rather than to this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    pub file: &'static str,
    pub line: u32,
    pub function: &'static str,
}

impl SourceLocation {
    pub const fn new(file: &'static str, line: u32, function: &'static str) -> Self {
        Self { file, line, function }
    }
}

// Helpers for the call-site macros below
#[doc(hidden)]
pub fn type_name_of<T>(_: T) -> &'static str {
    std::any::type_name::<T>()
}

/// Reduces the type name of the probe function planted by
/// [`function_name!`](crate::function_name) to the bare name of the
/// enclosing function.
#[doc(hidden)]
pub fn trim_function_path(probe: &'static str) -> &'static str {
    let mut path = probe.strip_suffix("::__probe").unwrap_or(probe);
    while let Some(outer) = path.strip_suffix("::{{closure}}") {
        path = outer;
    }
    match path.rfind("::") {
        Some(idx) => &path[idx + 2..],
        None => path,
    }
}

/// Expands to the name of the enclosing function as a `&'static str`.
///
/// Closures resolve to the function that contains them.
///
/// ```
/// fn load_settings() -> &'static str {
///     pico_logger::function_name!()
/// }
/// assert_eq!(load_settings(), "load_settings");
/// ```
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __probe() {}
        $crate::location::trim_function_path($crate::location::type_name_of(__probe))
    }};
}

/// Expands to the [`SourceLocation`] of the call site.
#[macro_export]
macro_rules! location {
    () => {
        $crate::location::SourceLocation::new(file!(), line!(), $crate::function_name!())
    };
}
