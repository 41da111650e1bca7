
use std::sync::Once;

static INIT: Once = Once::new();

/// Installs the test logger; only the first call has any effect.
pub(crate) fn init_logger() {
    INIT.call_once(|| {
        pretty_env_logger::init();
    });
}
