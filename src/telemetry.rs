//! Tracing span constructors.

/// Standardized span constructors for bot observability.
pub mod spans {
    use tracing::{Span, debug_span, info_span};

    /// Span covering one server connection.
    pub fn session(addr: &str, nick: &str) -> Span {
        info_span!("session", addr = %addr, nick = %nick)
    }

    /// Span covering one event's trip through the handler chain.
    pub fn dispatch(kind: &str, source: &str) -> Span {
        if source.is_empty() {
            debug_span!("dispatch", kind = %kind)
        } else {
            debug_span!("dispatch", kind = %kind, source = %source)
        }
    }
}
