use serde::{Deserialize, Serialize};

/// Anything that can say which information source it came from.
pub trait Attributable {
    fn source_name(&self) -> Option<&str>;
    fn source_url(&self) -> Option<&str>;
    /// Raw id as delivered upstream; see [`crate::types::SourceId::parse`].
    fn source_id(&self) -> Option<&str>;
}

/// The provenance fields shared by every attributable record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Attribution {
    pub source_name: Option<String>,
    pub source_url: Option<String>,
    pub source_id: Option<String>,
}

impl Attribution {
    pub fn new(source_name: impl Into<String>) -> Self {
        Attribution {
            source_name: Some(source_name.into()),
            ..Attribution::default()
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = Some(url.into());
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.source_id = Some(id.into());
        self
    }
}

impl Attributable for Attribution {
    fn source_name(&self) -> Option<&str> {
        self.source_name.as_deref()
    }

    fn source_url(&self) -> Option<&str> {
        self.source_url.as_deref()
    }

    fn source_id(&self) -> Option<&str> {
        self.source_id.as_deref()
    }
}

/// Implement [`Attributable`] for record types that embed an `attribution` field.
macro_rules! impl_attributable {
    ($($record:ty),+ $(,)?) => {
        $(
            impl $crate::record::Attributable for $record {
                fn source_name(&self) -> Option<&str> {
                    self.attribution.source_name.as_deref()
                }

                fn source_url(&self) -> Option<&str> {
                    self.attribution.source_url.as_deref()
                }

                fn source_id(&self) -> Option<&str> {
                    self.attribution.source_id.as_deref()
                }
            }
        )+
    };
}

pub(crate) use impl_attributable;
