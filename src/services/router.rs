//! Builder selection and layout construction.

use crate::models::{
    CustomKeyboards, DeviceType, InputSetProvider, KeyboardContext, Layout,
    StandardInputSetProvider,
};
use crate::services::builders::BuilderKind;

/// Picks the builder for a context and builds its layout.
///
/// The router owns the character sets and custom keyboard definitions every
/// builder reads from.
#[derive(Debug, Clone, Default)]
pub struct LayoutRouter<P: InputSetProvider = StandardInputSetProvider> {
    input_sets: P,
    custom_keyboards: CustomKeyboards,
}

impl<P: InputSetProvider> LayoutRouter<P> {
    /// Creates a router over the given character sets.
    pub fn new(input_sets: P) -> Self {
        Self {
            input_sets,
            custom_keyboards: CustomKeyboards::default(),
        }
    }

    /// Registers custom keyboard definitions.
    ///
    /// Definitions should have passed [`CustomKeyboards::validate`]; building
    /// a custom variant missing from them panics.
    #[must_use]
    pub fn with_custom_keyboards(mut self, custom_keyboards: CustomKeyboards) -> Self {
        self.custom_keyboards = custom_keyboards;
        self
    }

    /// Registered custom keyboard definitions.
    pub const fn custom_keyboards(&self) -> &CustomKeyboards {
        &self.custom_keyboards
    }

    /// Builder for a context.
    ///
    /// Priority: custom keyboards, the Chinese nine-grid, the numeric
    /// nine-grid, then the pad or phone builder of the language family.
    /// The result depends only on the device type and the variant.
    #[must_use]
    pub fn select_builder(&self, context: &KeyboardContext) -> BuilderKind {
        let variant = &context.keyboard_type;
        if variant.is_custom() {
            return BuilderKind::Custom;
        }
        if variant.is_chinese_nine_grid() {
            return BuilderKind::ChineseNineGrid;
        }
        if variant.is_numeric_nine_grid() {
            return BuilderKind::NumericNineGrid;
        }
        match (context.device_type, variant.is_chinese()) {
            (DeviceType::Pad, true) => BuilderKind::PadChinese,
            (DeviceType::Pad, false) => BuilderKind::PadAlphabetic,
            (DeviceType::Phone, true) => BuilderKind::PhoneChinese,
            (DeviceType::Phone, false) => BuilderKind::PhoneAlphabetic,
        }
    }

    /// Builds the layout for a context.
    ///
    /// # Panics
    ///
    /// Panics when the context shows a custom keyboard that was never
    /// registered.
    #[must_use]
    pub fn layout(&self, context: &KeyboardContext) -> Layout {
        let builder = self.select_builder(context);
        let rows = builder.build_rows(context, &self.input_sets, &self.custom_keyboards);
        let mut layout = Layout::new(rows);
        if let Some(name) = context.keyboard_type.custom_name() {
            layout = layout.with_custom_keyboard(name);
        }

        tracing::debug!(
            builder = builder.name(),
            variant = %context.keyboard_type.id(),
            device = ?context.device_type,
            input_keys = ?layout.input_key_counts(),
            "built layout"
        );
        layout
    }
}
