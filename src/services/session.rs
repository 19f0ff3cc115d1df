//! Context transitions and the layout they require.
//!
//! The keyboard context only changes through [`reduce`]. A
//! [`LayoutSession`] keeps the current context together with its layout and
//! rebuilds the layout only when a transition touches something a builder
//! reads. Text changes alone never rebuild.

use crate::config::KeyboardSettings;
use crate::models::{
    AutocapitalizationType, HostKeyboardType, InputSetProvider, KeyboardContext,
    KeyboardVariant, Layout, Orientation, ReturnKeyType, ScreenSize, StandardInputSetProvider,
    TextSnapshot,
};
use crate::services::router::LayoutRouter;

/// Text field state reported by the host after a sync request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HostTextContext {
    /// Text around the cursor
    pub text: TextSnapshot,
    /// Declared return key semantics
    pub return_key_type: Option<ReturnKeyType>,
    /// Declared keyboard kind
    pub keyboard_type: HostKeyboardType,
    /// Declared autocapitalization
    pub autocapitalization: Option<AutocapitalizationType>,
    /// Whether the host asks for a next-keyboard key
    pub needs_input_mode_switch_key: bool,
}

/// Every way the keyboard context can change.
#[derive(Debug, Clone, PartialEq)]
pub enum ContextEvent {
    /// A gesture selected another keyboard variant
    KeyboardTypeChanged(KeyboardVariant),
    /// The interface rotated
    OrientationChanged(Orientation),
    /// The keyboard's screen size changed
    ScreenSizeChanged(ScreenSize),
    /// The host text field state arrived
    TextContextSynced(HostTextContext),
    /// Autocapitalization forced by the keyboard, `None` to follow the host
    AutocapitalizationOverride(Option<AutocapitalizationType>),
    /// Layout toggles changed
    SettingsChanged(KeyboardSettings),
}

/// Applies one event to a context.
#[must_use]
pub fn reduce(mut state: KeyboardContext, event: ContextEvent) -> KeyboardContext {
    match event {
        ContextEvent::KeyboardTypeChanged(variant) => state.keyboard_type = variant,
        ContextEvent::OrientationChanged(orientation) => state.orientation = orientation,
        ContextEvent::ScreenSizeChanged(screen_size) => state.screen_size = screen_size,
        ContextEvent::TextContextSynced(host) => {
            state.text = host.text;
            state.return_key_type = host.return_key_type;
            state.host_keyboard_type = host.keyboard_type;
            state.host_autocapitalization = host.autocapitalization;
            state.needs_input_mode_switch_key = host.needs_input_mode_switch_key;
        }
        ContextEvent::AutocapitalizationOverride(value) => {
            state.autocapitalization_override = value;
        }
        ContextEvent::SettingsChanged(settings) => state.settings = settings,
    }
    state
}

/// Whether going from `prev` to `next` changes anything a builder reads.
#[must_use]
pub fn requires_layout_rebuild(prev: &KeyboardContext, next: &KeyboardContext) -> bool {
    prev.keyboard_type != next.keyboard_type
        || prev.device_type != next.device_type
        || prev.orientation != next.orientation
        || prev.screen_size != next.screen_size
        || prev.is_floating != next.is_floating
        || prev.return_key_type != next.return_key_type
        || prev.host_keyboard_type != next.host_keyboard_type
        || prev.needs_input_mode_switch_key != next.needs_input_mode_switch_key
        || prev.settings != next.settings
        || prev.swipes != next.swipes
}

/// Current context and the layout built for it.
#[derive(Debug)]
pub struct LayoutSession<P: InputSetProvider = StandardInputSetProvider> {
    context: KeyboardContext,
    layout: Layout,
    router: LayoutRouter<P>,
}

impl<P: InputSetProvider> LayoutSession<P> {
    /// Starts a session and builds the first layout.
    ///
    /// # Panics
    ///
    /// Panics when `context` shows a custom keyboard the router does not
    /// know.
    pub fn new(router: LayoutRouter<P>, context: KeyboardContext) -> Self {
        let layout = router.layout(&context);
        Self {
            context,
            layout,
            router,
        }
    }

    /// Current context.
    pub const fn context(&self) -> &KeyboardContext {
        &self.context
    }

    /// Layout of the current context.
    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Router building the layouts.
    pub const fn router(&self) -> &LayoutRouter<P> {
        &self.router
    }

    /// Applies an event; returns whether the layout was rebuilt.
    ///
    /// A rebuilt layout starts with an empty input width cache.
    ///
    /// # Panics
    ///
    /// Panics when the event switches to a custom keyboard the router does
    /// not know.
    pub fn apply(&mut self, event: ContextEvent) -> bool {
        let next = reduce(self.context.clone(), event);
        let rebuild = requires_layout_rebuild(&self.context, &next);
        self.context = next;

        if rebuild {
            self.layout = self.router.layout(&self.context);
        }
        tracing::debug!(
            rebuild,
            variant = %self.context.keyboard_type.id(),
            input_keys = ?self.layout.input_key_counts(),
            "context updated"
        );
        rebuild
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DeviceType, KeyboardCase};

    fn session() -> LayoutSession {
        LayoutSession::new(
            LayoutRouter::new(StandardInputSetProvider::default()),
            KeyboardContext::new(DeviceType::Phone, KeyboardVariant::default()),
        )
    }

    #[test]
    fn test_reduce_text_sync() {
        let state = KeyboardContext::default();
        let host = HostTextContext {
            text: TextSnapshot::before("Hi"),
            return_key_type: Some(ReturnKeyType::Go),
            keyboard_type: HostKeyboardType::EmailAddress,
            autocapitalization: Some(AutocapitalizationType::Words),
            needs_input_mode_switch_key: true,
        };
        let next = reduce(state.clone(), ContextEvent::TextContextSynced(host));
        assert_eq!(next.text, TextSnapshot::before("Hi"));
        assert_eq!(next.return_key_type, Some(ReturnKeyType::Go));
        assert_eq!(next.autocapitalization_type(), Some(AutocapitalizationType::Words));
        assert!(requires_layout_rebuild(&state, &next));
    }

    #[test]
    fn test_text_only_change_keeps_layout() {
        let state = KeyboardContext::default();
        let host = HostTextContext {
            text: TextSnapshot::before("Hello"),
            ..HostTextContext::default()
        };
        let next = reduce(state.clone(), ContextEvent::TextContextSynced(host));
        assert!(!requires_layout_rebuild(&state, &next));
    }

    #[test]
    fn test_session_rebuilds_on_relevant_change() {
        let mut session = session();
        let rows_before = session.layout().item_rows.len();

        assert!(!session.apply(ContextEvent::AutocapitalizationOverride(Some(
            AutocapitalizationType::None
        ))));
        assert!(session.apply(ContextEvent::KeyboardTypeChanged(
            KeyboardVariant::Alphabetic(KeyboardCase::Lowercased)
        )));
        assert_eq!(session.layout().item_rows.len(), rows_before);
        assert!(!session.apply(ContextEvent::KeyboardTypeChanged(
            KeyboardVariant::Alphabetic(KeyboardCase::Lowercased)
        )));
    }

    #[test]
    fn test_orientation_change_rebuilds_layout() {
        let mut session = session();
        assert_eq!(session.layout().ideal_item_height, 54.0);
        assert!(session.apply(ContextEvent::OrientationChanged(Orientation::Landscape)));
        assert_eq!(session.context().orientation, Orientation::Landscape);
        assert_eq!(session.layout().ideal_item_height, 40.0);
    }
}
