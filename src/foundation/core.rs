use crate::foundation::error::{CardError, CardResult};

/// Target pixel dimensions for one rendered card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Construct a canvas, rejecting zero dimensions.
    pub fn new(width: u32, height: u32) -> CardResult<Self> {
        if width == 0 || height == 0 {
            return Err(CardError::validation("canvas dimensions must be > 0"));
        }
        Ok(Self { width, height })
    }

    /// Dimensions as `u16`, as required by compositor surfaces.
    pub fn dims_u16(self) -> CardResult<(u16, u16)> {
        let w: u16 = self
            .width
            .try_into()
            .map_err(|_| CardError::render("canvas width exceeds u16"))?;
        let h: u16 = self
            .height
            .try_into()
            .map_err(|_| CardError::render("canvas height exceeds u16"))?;
        Ok((w, h))
    }

    /// Byte length of a tightly packed RGBA8 buffer at this size.
    pub(crate) fn rgba8_len(self) -> usize {
        self.width as usize * self.height as usize * 4
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
