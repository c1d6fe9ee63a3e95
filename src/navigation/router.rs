use super::location::Location;

/// Navigation collaborator used by the app to change screens.
pub trait Router {
    /// Goes to `location`, path and query included.
    fn push(&mut self, location: Location);

    /// Goes to the root path.
    fn home(&mut self) {
        self.push(Location::root());
    }
}

/// In-process router: tracks the current location and whether it still
/// needs to be mounted.
///
/// There is no history; a location replaced by `push` is gone.
#[derive(Debug, Clone)]
pub struct Navigator {
    current: Location,
    needs_mount: bool,
}

impl Navigator {
    /// Creates a navigator positioned at `start`, pending its first mount.
    pub fn new(start: Location) -> Self {
        Self {
            current: start,
            needs_mount: true,
        }
    }

    /// Returns the current location.
    pub fn current(&self) -> &Location {
        &self.current
    }

    /// Returns the current location if it has not been mounted yet, marking
    /// it as mounted.
    pub fn take_mount(&mut self) -> Option<Location> {
        if std::mem::take(&mut self.needs_mount) {
            Some(self.current.clone())
        } else {
            None
        }
    }
}

impl Router for Navigator {
    fn push(&mut self, location: Location) {
        tracing::info!(%location, "navigating");
        self.current = location;
        self.needs_mount = true;
    }
}
