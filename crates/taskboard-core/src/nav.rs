/// Boundary to the routing layer. The state layer never navigates except to
/// send the user back to the unauthenticated entry point.
pub trait Navigator: Send + Sync {
    fn redirect_to_login(&self);
}

/// Navigator that goes nowhere. For tests and front ends without routing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullNavigator;

impl Navigator for NullNavigator {
    fn redirect_to_login(&self) {}
}
