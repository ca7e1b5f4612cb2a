//! Visit flag kept in `sessionStorage`

use game_core::VisitStore;
use web_sys::Storage;

const VISITED_KEY: &str = "hasVisitedHome";

pub struct SessionStorageFlag {
    storage: Option<Storage>,
    // Used when the browser refuses storage (private mode, sandboxed iframe)
    in_memory: bool,
}

impl SessionStorageFlag {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|window| window.session_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("sessionStorage unavailable, keeping visit flag in memory");
        }
        Self {
            storage,
            in_memory: false,
        }
    }
}

impl VisitStore for SessionStorageFlag {
    fn instructions_shown(&self) -> bool {
        match &self.storage {
            Some(storage) => matches!(storage.get_item(VISITED_KEY), Ok(Some(value)) if value == "true"),
            None => self.in_memory,
        }
    }

    fn mark_instructions_shown(&mut self) {
        self.in_memory = true;
        if let Some(storage) = &self.storage {
            if let Err(err) = storage.set_item(VISITED_KEY, "true") {
                log::warn!("Failed to store visit flag: {:?}", err);
            }
        }
    }
}
