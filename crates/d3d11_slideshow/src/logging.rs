/// Installs the fmt subscriber used by every binary in this workspace.
///
/// No env filter is attached on purpose: the process consults no environment variables.
pub fn init() {
    tracing_subscriber::fmt::SubscriberBuilder::default()
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .with_target(false)
        .init();
}
