/// Append-only record of lifecycle events.
///
/// Implementations must never fail the caller: write errors are reported
/// on a secondary channel and swallowed.
pub trait ActivityLog: Send + Sync {
    fn log(&self, message: &str);
}
