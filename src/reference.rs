use std::fmt::{Display, Formatter};

/// Identifies a custom resource instance: the API group, version and plural kind of its
/// definition, plus the object's name and, for namespaced kinds, its namespace. The `Display`
/// rendering is used in assertion failure messages so that a failing check names the object it
/// was looking at.
#[derive(Debug, Eq, PartialEq, Hash, Clone)]
pub struct CustomResourceReference {
    pub group: String,
    pub version: String,
    pub plural: String,
    pub name: String,
    pub namespace: Option<String>,
}

impl CustomResourceReference {
    /// A reference to a namespaced custom resource.
    pub fn namespaced<S1, S2, S3, S4, S5>(
        group: S1,
        version: S2,
        plural: S3,
        name: S4,
        namespace: S5,
    ) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
        S4: Into<String>,
        S5: Into<String>,
    {
        Self {
            group: group.into(),
            version: version.into(),
            plural: plural.into(),
            name: name.into(),
            namespace: Some(namespace.into()),
        }
    }

    /// A reference to a cluster-scoped custom resource.
    pub fn cluster_scoped<S1, S2, S3, S4>(group: S1, version: S2, plural: S3, name: S4) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
        S4: Into<String>,
    {
        Self {
            group: group.into(),
            version: version.into(),
            plural: plural.into(),
            name: name.into(),
            namespace: None,
        }
    }
}

impl Display for CustomResourceReference {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.namespace {
            Some(namespace) => write!(
                f,
                "{}.{}/{}:{}/{}",
                self.plural, self.group, self.version, namespace, self.name
            ),
            None => write!(
                f,
                "{}.{}/{}:{}",
                self.plural, self.group, self.version, self.name
            ),
        }
    }
}
