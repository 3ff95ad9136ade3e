use serde::{Deserialize, Serialize};

use crate::core::Accessibility;
use crate::filters::attributes::ExclusionSet;

/// Per-run configuration for the generation pipeline.
///
/// Built once by the front end and passed by reference through the pipeline;
/// nothing here mutates during a run.
#[derive(Clone, Debug, Default)]
pub struct GenerationConfig {
    pub visibility: VisibilityFloor,
    /// When set, throw stubs raise a platform-not-supported signal carrying
    /// this literal message instead of the default `throw null;`.
    pub exception_message: Option<String>,
    /// Attribute types excluded from the surface, by identity token.
    pub excluded_attributes: ExclusionSet,
    pub indentation: Indentation,
}

/// Accessibility floor applied at every nesting level.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VisibilityFloor {
    /// Only symbols visible outside the module (public, protected,
    /// protected internal).
    #[default]
    PublicSurface,
    /// Additionally admit internal and private-protected symbols.
    /// Private symbols never appear in the surface.
    IncludeInternal,
}

impl VisibilityFloor {
    pub fn admits(&self, accessibility: Accessibility) -> bool {
        match self {
            VisibilityFloor::PublicSurface => accessibility.visible_outside_module(),
            VisibilityFloor::IncludeInternal => accessibility != Accessibility::Private,
        }
    }
}

/// Indentation used by the renderer.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Indentation {
    pub size: usize,
    pub character: char,
}

impl Indentation {
    pub fn new(size: usize, character: char) -> Self {
        Self { size, character }
    }

    pub fn spaces(size: usize) -> Self {
        Self::new(size, ' ')
    }

    pub fn tabs() -> Self {
        Self::new(1, '\t')
    }

    /// One indentation level as a string.
    pub fn unit(&self) -> String {
        std::iter::repeat(self.character).take(self.size).collect()
    }
}

impl Default for Indentation {
    fn default() -> Self {
        Self::spaces(4)
    }
}
