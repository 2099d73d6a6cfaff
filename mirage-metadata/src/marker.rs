//! Declarative markers attached to host types and members.

use serde::{Deserialize, Serialize};

/// Where a marker can appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerTarget {
    Type,
    Property,
    Method,
    Constructor,
    Constant,
}

impl MarkerTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarkerTarget::Type => "type",
            MarkerTarget::Property => "property",
            MarkerTarget::Method => "method",
            MarkerTarget::Constructor => "constructor",
            MarkerTarget::Constant => "constant",
        }
    }
}

/// A marker that drives projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Marker {
    /// Project this class as a data class.
    JsClass,
    /// Data contract; projected like `js-class`.
    DataContract,
    /// Project as a view-model: read/write properties become observables.
    JsViewModel,
    /// Project as an enum (also applies to static classes of constants).
    JsEnum,
    /// Web service proxy.
    JsService,
    /// Socket service proxy (host side of a remote contract).
    JsSocketService,
    /// Remote contract: every method is remote-callable.
    ServiceContract,
    /// Always render under the `Base`-suffixed name.
    BaseClass,
    /// Emit a hand-authored subclass stub for this class.
    GenerateTemplate,
    Observable,
    /// Computed property over `depends_on`.
    Dependent,
    /// Defer computing a dependent property until first read.
    DeferEvaluation,
    ObservableCollection,
    NotifyChange,
    /// Value shared through the prototype instead of per instance.
    Attached,
    /// Skip this property.
    Ignore,
    JsMethod,
    JsEvent,
    OperationContract,
    /// Keep the declared return type instead of wrapping it in a promise.
    Synchronous,
    /// Mirror this constructor.
    FunctionConstructor,
    /// Type this constant as a function.
    JsConstruct,
}

impl Marker {
    /// The marker as written in the metadata file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Marker::JsClass => "js-class",
            Marker::DataContract => "data-contract",
            Marker::JsViewModel => "js-view-model",
            Marker::JsEnum => "js-enum",
            Marker::JsService => "js-service",
            Marker::JsSocketService => "js-socket-service",
            Marker::ServiceContract => "service-contract",
            Marker::BaseClass => "base-class",
            Marker::GenerateTemplate => "generate-template",
            Marker::Observable => "observable",
            Marker::Dependent => "dependent",
            Marker::DeferEvaluation => "defer-evaluation",
            Marker::ObservableCollection => "observable-collection",
            Marker::NotifyChange => "notify-change",
            Marker::Attached => "attached",
            Marker::Ignore => "ignore",
            Marker::JsMethod => "js-method",
            Marker::JsEvent => "js-event",
            Marker::OperationContract => "operation-contract",
            Marker::Synchronous => "synchronous",
            Marker::FunctionConstructor => "function-constructor",
            Marker::JsConstruct => "js-construct",
        }
    }

    /// The declaration kinds on which this marker has an effect.
    pub fn targets(&self) -> &'static [MarkerTarget] {
        use MarkerTarget::*;
        match self {
            Marker::JsClass
            | Marker::DataContract
            | Marker::JsViewModel
            | Marker::JsEnum
            | Marker::JsService
            | Marker::JsSocketService
            | Marker::BaseClass
            | Marker::GenerateTemplate => &[Type],
            Marker::ServiceContract => &[Type],
            Marker::Observable
            | Marker::Dependent
            | Marker::DeferEvaluation
            | Marker::ObservableCollection
            | Marker::NotifyChange
            | Marker::Attached
            | Marker::Ignore => &[Property],
            Marker::JsMethod
            | Marker::JsEvent
            | Marker::OperationContract
            | Marker::Synchronous => &[Method],
            Marker::FunctionConstructor => &[Constructor],
            Marker::JsConstruct => &[Constant],
        }
    }

    /// Check if this marker has an effect on the given declaration kind.
    pub fn applies_to(&self, target: MarkerTarget) -> bool {
        self.targets().contains(&target)
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declarations that carry markers.
pub trait Marked {
    fn markers(&self) -> &[Marker];

    /// Check if the declaration carries `marker`.
    fn has(&self, marker: Marker) -> bool {
        self.markers().contains(&marker)
    }

    /// Check if the declaration carries any of `markers`.
    fn has_any(&self, markers: &[Marker]) -> bool {
        markers.iter().any(|m| self.has(*m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_deserialize_kebab_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            markers: Vec<Marker>,
        }

        let w: Wrapper =
            toml::from_str(r#"markers = ["js-view-model", "notify-change", "js-socket-service"]"#)
                .unwrap();
        assert_eq!(
            w.markers,
            vec![
                Marker::JsViewModel,
                Marker::NotifyChange,
                Marker::JsSocketService
            ]
        );
    }

    #[test]
    fn test_unknown_marker_rejected() {
        #[derive(Debug, Deserialize)]
        #[allow(dead_code)]
        struct Wrapper {
            markers: Vec<Marker>,
        }

        assert!(toml::from_str::<Wrapper>(r#"markers = ["js-widget"]"#).is_err());
    }

    #[test]
    fn test_as_str_matches_serde_name() {
        #[derive(Deserialize)]
        struct Wrapper {
            marker: Marker,
        }

        for marker in [
            Marker::JsClass,
            Marker::ObservableCollection,
            Marker::JsConstruct,
        ] {
            let w: Wrapper = toml::from_str(&format!("marker = \"{}\"", marker)).unwrap();
            assert_eq!(w.marker, marker);
        }
    }

    #[test]
    fn test_applies_to() {
        assert!(Marker::Observable.applies_to(MarkerTarget::Property));
        assert!(!Marker::Observable.applies_to(MarkerTarget::Method));
        assert!(Marker::FunctionConstructor.applies_to(MarkerTarget::Constructor));
    }
}
