//! Documentation lookup.

use mirage_metadata::Metadata;

/// What a documentation entry is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocKey<'a> {
    Type(&'a str),
    /// A property, method or constant of a type.
    Member { ty: &'a str, member: &'a str },
    Param {
        ty: &'a str,
        method: &'a str,
        param: &'a str,
    },
}

/// A source of documentation strings. A miss is not an error.
pub trait DocSource {
    fn lookup(&self, key: DocKey<'_>) -> Option<String>;
}

/// Documentation declared inline in the metadata file.
pub struct MetadataDocs<'m> {
    metadata: &'m Metadata,
}

impl<'m> MetadataDocs<'m> {
    pub fn new(metadata: &'m Metadata) -> Self {
        Self { metadata }
    }
}

impl DocSource for MetadataDocs<'_> {
    fn lookup(&self, key: DocKey<'_>) -> Option<String> {
        match key {
            DocKey::Type(ty) => self.metadata.find(ty)?.doc.clone(),
            DocKey::Member { ty, member } => {
                let decl = self.metadata.find(ty)?;
                decl.properties
                    .iter()
                    .find(|p| p.name == member)
                    .and_then(|p| p.doc.clone())
                    .or_else(|| {
                        decl.methods
                            .iter()
                            .find(|m| m.name == member)
                            .and_then(|m| m.doc.clone())
                    })
                    .or_else(|| {
                        decl.constants
                            .iter()
                            .find(|c| c.name == member)
                            .and_then(|c| c.doc.clone())
                    })
            }
            DocKey::Param { ty, method, param } => {
                let decl = self.metadata.find(ty)?;
                decl.methods
                    .iter()
                    .filter(|m| m.name == method)
                    .flat_map(|m| m.params.iter())
                    .chain(decl.constructors.iter().flat_map(|c| c.params.iter()))
                    .find(|p| p.name == param)
                    .and_then(|p| p.doc.clone())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_metadata_docs() {
        let md = Metadata::from_str(
            r#"
            [assembly]
            name = "Contoso"

            [[types]]
            name = "Contoso.Person"
            doc = "A person"

            [[types.properties]]
            name = "Name"
            type = "string"
            doc = "Full name"

            [[types.methods]]
            name = "Rename"
            params = [{ name = "to", type = "string", doc = "New name" }]
            "#,
        )
        .unwrap();
        let docs = MetadataDocs::new(&md);

        assert_eq!(
            docs.lookup(DocKey::Type("Contoso.Person")).as_deref(),
            Some("A person")
        );
        assert_eq!(
            docs.lookup(DocKey::Member {
                ty: "Contoso.Person",
                member: "Name"
            })
            .as_deref(),
            Some("Full name")
        );
        assert_eq!(
            docs.lookup(DocKey::Param {
                ty: "Contoso.Person",
                method: "Rename",
                param: "to"
            })
            .as_deref(),
            Some("New name")
        );
        assert_eq!(
            docs.lookup(DocKey::Member {
                ty: "Contoso.Person",
                member: "Rename"
            }),
            None
        );
    }
}
