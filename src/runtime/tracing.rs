/// Initializes the tracing/logging infrastructure for the application.
///
/// This sets up structured logging using the `tracing` crate with:
/// - **Environment-based filtering**: Controlled via `RUST_LOG` environment variable
/// - **Timestamps**: Every record, including the begin/outcome records of
///   [`LoggingDecorator`](crate::resource::LoggingDecorator), is stamped by the formatter
///
/// # Environment Variables
///
/// Set `RUST_LOG` to control log verbosity:
/// - `RUST_LOG=info` - Resource operations, logins, state changes
/// - `RUST_LOG=debug` - Adds request payloads and registry changes
/// - `RUST_LOG=cloud_resource_manager=debug` - Debug only for this crate
///
/// Calling it twice is harmless; the second call leaves the first subscriber in place.
///
/// # Example
///
/// ```ignore
/// setup_tracing();
/// tracing::info!("Application started");
/// ```
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
