// src/pin.rs
//! Edge pinning for the container.
//!
//! The actual "stick to the top while scrolling" behavior belongs to the
//! page's UI library. All we do is mark the container so that library
//! picks it up.

use crate::config::consts::*;
use crate::config::PinOptions;

/// Something that pins an element to the viewport edge.
/// Returns the attributes to set on the element's opening tag.
pub trait EdgePin {
    fn attributes(&self) -> Vec<(String, String)>;
}

/// Bootstrap's affix plugin, driven by data attributes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Affix {
    pub offset_top: Option<u32>,
    pub offset_bottom: Option<u32>,
}

impl EdgePin for Affix {
    fn attributes(&self) -> Vec<(String, String)> {
        let mut attrs = vec![(s!(PIN_SPY_ATTR), s!(PIN_SPY_VALUE))];
        if let Some(top) = self.offset_top {
            attrs.push((s!(PIN_OFFSET_TOP_ATTR), top.to_string()));
        }
        if let Some(bottom) = self.offset_bottom {
            attrs.push((s!(PIN_OFFSET_BOTTOM_ATTR), bottom.to_string()));
        }
        attrs
    }
}

/// Leave the container alone.
pub struct NoPin;

impl EdgePin for NoPin {
    fn attributes(&self) -> Vec<(String, String)> {
        Vec::new()
    }
}

pub fn from_options(opts: &PinOptions) -> Box<dyn EdgePin + Send + Sync> {
    if opts.enabled {
        Box::new(Affix { offset_top: opts.offset_top, offset_bottom: opts.offset_bottom })
    } else {
        Box::new(NoPin)
    }
}
