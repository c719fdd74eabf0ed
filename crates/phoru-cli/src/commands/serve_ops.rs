use std::borrow::Cow;

use phoru_core::Transliterator;

use crate::server::{self, AppState};
use crate::settings::Settings;

/// `:6060` binds every interface; anything else is passed through.
pub fn bind_addr(addr: &str) -> Cow<'_, str> {
    if addr.starts_with(':') {
        Cow::Owned(format!("0.0.0.0{addr}"))
    } else {
        Cow::Borrowed(addr)
    }
}

pub fn serve(addr: &str, transliterator: Transliterator, settings: &Settings) {
    let runtime = die!(
        tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build(),
        "Error starting runtime: {}"
    );
    let state = AppState::new(transliterator, &settings.server.sample_text);
    let bind = bind_addr(addr);
    die!(
        runtime.block_on(server::serve(&*bind, state, settings.server.body_limit)),
        "Error serving on {addr}: {}"
    );
}
