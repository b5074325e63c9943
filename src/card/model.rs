use std::path::PathBuf;

use crate::foundation::{
    core::Canvas,
    error::{CardError, CardResult},
};

/// Immutable input to a single render operation.
///
/// Created per incoming record; never persisted by the core.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct CardRequest {
    /// Person the card is addressed to.
    pub recipient: String,
    /// Occasion line, drawn upper-cased as the header.
    pub occasion: String,
    /// Free-form message body of arbitrary length.
    pub message: String,
    /// Signature name for the footer.
    pub sender: String,
    /// Already-resolved filesystem path to a background template, if any.
    ///
    /// A path that does not exist on disk is not an error; the renderer
    /// substitutes the flat-fill background.
    pub template: Option<PathBuf>,
}

impl CardRequest {
    /// Check that every required text field is non-empty.
    ///
    /// Business-rule validation stays with the caller; this only guards
    /// against requests the renderer cannot meaningfully fulfil, and the
    /// error names the missing field.
    pub fn validate(&self) -> CardResult<()> {
        let fields = [
            ("recipient", &self.recipient),
            ("occasion", &self.occasion),
            ("message", &self.message),
            ("sender", &self.sender),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(CardError::validation(format!(
                    "required field '{name}' is empty"
                )));
            }
        }
        Ok(())
    }
}

/// One named output dimension entry.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OutputSize {
    /// Size name, used in output filenames.
    pub name: String,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl OutputSize {
    /// The canvas this size renders onto.
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }
}

/// Ordered, extensible table of output sizes.
///
/// Every entry yields exactly one rendered card per request, in table order,
/// regardless of background-resolution outcome.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SizeTable(Vec<OutputSize>);

impl SizeTable {
    /// Build a table, rejecting empty tables, zero dimensions, and duplicate
    /// names.
    pub fn new(sizes: Vec<OutputSize>) -> CardResult<Self> {
        if sizes.is_empty() {
            return Err(CardError::validation("size table must not be empty"));
        }
        for (idx, size) in sizes.iter().enumerate() {
            if size.width == 0 || size.height == 0 {
                return Err(CardError::validation(format!(
                    "size '{}' has zero width or height",
                    size.name
                )));
            }
            if sizes[..idx].iter().any(|s| s.name == size.name) {
                return Err(CardError::validation(format!(
                    "duplicate size name '{}'",
                    size.name
                )));
            }
        }
        Ok(Self(sizes))
    }

    /// Iterate entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = &OutputSize> {
        self.0.iter()
    }

    /// Number of configured sizes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the table is empty. Always false for tables built via
    /// [`SizeTable::new`].
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for SizeTable {
    /// The three fixed sizes: `square` 1080×1080, `portrait` 1080×1350,
    /// `landscape` 1200×628.
    fn default() -> Self {
        Self(vec![
            OutputSize {
                name: "square".to_string(),
                width: 1080,
                height: 1080,
            },
            OutputSize {
                name: "portrait".to_string(),
                width: 1080,
                height: 1350,
            },
            OutputSize {
                name: "landscape".to_string(),
                width: 1200,
                height: 628,
            },
        ])
    }
}

/// Output-side options for a render pass.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct RenderOptions {
    /// Directory rendered PNGs are written into; created on demand.
    pub output_dir: PathBuf,
}

#[cfg(test)]
#[path = "../../tests/unit/card/model.rs"]
mod tests;
