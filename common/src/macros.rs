/// Logs at INFO level; the CLI formatter renders these as `[+]` lines.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        tracing::info!($($arg)*)
    };
}
