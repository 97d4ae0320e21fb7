/// Initializes the global logger.
///
/// Verbose runs show walk progress (`debug`); otherwise only informational
/// messages and warnings about skipped files or failed post-generation steps.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_timestamp(None)
        .init();
}
