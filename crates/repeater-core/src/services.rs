use std::sync::Arc;

use crate::codec::ReferenceCodec;
use crate::layout::LayoutRegistry;
use crate::old_input::OldInputSource;

/// The application services a repeater descriptor needs: layout lookup,
/// reference encoding, and old-input recall.
///
/// Hosts build one of these at startup (old input is typically swapped per
/// request) and pass it to [`crate::field::Repeater::layout`] and
/// [`crate::field::Repeater::finalize`]. All ports are shared behind `Arc`
/// so one bundle can serve any number of form builds.
#[derive(Clone)]
pub struct FieldServices {
    pub layouts: Arc<dyn LayoutRegistry>,
    pub codec: Arc<dyn ReferenceCodec>,
    pub old_input: Arc<dyn OldInputSource>,
}

impl FieldServices {
    pub fn new(
        layouts: Arc<dyn LayoutRegistry>,
        codec: Arc<dyn ReferenceCodec>,
        old_input: Arc<dyn OldInputSource>,
    ) -> Self {
        Self {
            layouts,
            codec,
            old_input,
        }
    }
}
