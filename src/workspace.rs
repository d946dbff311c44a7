//! Workspace bundles - a settings document referencing projects and
//! embedded playgrounds

use std::path::{Path, PathBuf};
use crate::Result;
use crate::fs::{FileWriter, LocalFileWriter};
use crate::paths::{bundle_path, relative_path};
use crate::playground::Playground;
use crate::xml::Element;

/// Bundle directory extension
pub const EXTENSION: &str = "xcworkspace";

/// Name of the settings document inside the bundle
pub const SETTINGS_FILE: &str = "Contents.xcworkspacedata";

/// Location prefix for file references. Xcode resolves these against the
/// directory containing the `.xcworkspace` bundle.
pub const GROUP_PREFIX: &str = "group:";

const SETTINGS_VERSION: &str = "1.0";

/// An entry in a workspace
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reference {
    /// An existing project, stored as given
    Project(PathBuf),
    /// A playground generated inside the workspace bundle
    Playground(Playground),
}

impl Reference {
    /// Path this reference points at
    pub fn path(&self) -> &Path {
        match self {
            Reference::Project(path) => path,
            Reference::Playground(playground) => playground.path(),
        }
    }
}

/// A workspace, generated into a `.xcworkspace` bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    path: PathBuf,
    references: Vec<Reference>,
}

impl Workspace {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: bundle_path(path.as_ref(), EXTENSION),
            references: Vec::new(),
        }
    }

    /// Bundle directory, always ending in `.xcworkspace`
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory the bundle lives in; `group:` locations are relative to it
    pub fn container_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// References in insertion order
    pub fn references(&self) -> &[Reference] {
        &self.references
    }

    /// Reference an existing project. The path is stored as given and
    /// only made relative when the workspace is generated.
    pub fn add_project(&mut self, path: impl Into<PathBuf>) {
        self.references.push(Reference::Project(path.into()));
    }

    /// Add an iOS playground named `name` inside the workspace bundle and
    /// return it for further configuration
    pub fn add_playground(&mut self, name: &str) -> &mut Playground {
        let playground = Playground::new(self.path.join(name));
        self.references.push(Reference::Playground(playground));

        match self.references.last_mut() {
            Some(Reference::Playground(playground)) => playground,
            _ => unreachable!("a playground reference was just pushed"),
        }
    }

    /// Embedded playgrounds in insertion order
    pub fn playgrounds(&self) -> impl Iterator<Item = &Playground> {
        self.references.iter().filter_map(|reference| match reference {
            Reference::Playground(playground) => Some(playground),
            Reference::Project(_) => None,
        })
    }

    /// Settings document listing every reference, relative to the
    /// bundle's containing directory
    pub fn settings_document(&self) -> Result<Element> {
        let mut root = Element::new("Workspace").attr("version", SETTINGS_VERSION);
        let container = self.container_dir();

        for reference in &self.references {
            let relative = relative_path(container, reference.path())?;
            root.push(Element::new("FileRef").attr("location", format!("{}{}", GROUP_PREFIX, relative)));
        }

        Ok(root)
    }

    /// Generate the bundle on the local filesystem
    pub fn generate(&self) -> Result<()> {
        self.generate_with(&LocalFileWriter)
    }

    /// Generate the bundle through `writer`.
    ///
    /// Embedded playgrounds are generated before the settings document is
    /// written. Nothing is cleaned up if a step fails.
    pub fn generate_with(&self, writer: &dyn FileWriter) -> Result<()> {
        tracing::info!(
            "Generating workspace at {:?} with {} reference(s)",
            self.path,
            self.references.len()
        );

        writer.create_directory(&self.path)?;

        for playground in self.playgrounds() {
            playground.generate_with(writer)?;
        }

        let settings = self.settings_document()?.to_document()?;
        writer.write_file(&self.path.join(SETTINGS_FILE), settings.as_bytes())?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playground::Platform;

    #[test]
    fn test_bundle_extension_added() {
        let workspace = Workspace::new("/tmp/Workspace");
        assert_eq!(workspace.path(), Path::new("/tmp/Workspace.xcworkspace"));

        let workspace = Workspace::new("/tmp/Workspace.xcworkspace");
        assert_eq!(workspace.path(), Path::new("/tmp/Workspace.xcworkspace"));
    }

    #[test]
    fn test_empty_document() {
        let workspace = Workspace::new("/tmp/Workspace");
        let doc = workspace.settings_document().unwrap();
        assert_eq!(doc.name(), "Workspace");
        assert_eq!(doc.attribute("version"), Some("1.0"));
        assert!(doc.children().is_empty());
    }

    #[test]
    fn test_project_reference_is_relative() {
        let mut workspace = Workspace::new("/tmp/folder/Workspace");
        workspace.add_project("/tmp/folder/Project/Project.xcodeproj/");

        let doc = workspace.settings_document().unwrap();
        assert_eq!(doc.children().len(), 1);
        assert_eq!(
            doc.children()[0].attribute("location"),
            Some("group:Project/Project.xcodeproj")
        );
    }

    #[test]
    fn test_project_outside_container_ascends() {
        let mut workspace = Workspace::new("/tmp/folder/Workspace");
        workspace.add_project("/tmp/Other/Other.xcodeproj");

        let doc = workspace.settings_document().unwrap();
        assert_eq!(doc.children()[0].attribute("location"), Some("group:../Other/Other.xcodeproj"));
    }

    #[test]
    fn test_container_dir() {
        assert_eq!(Workspace::new("/tmp/folder/W").container_dir(), Path::new("/tmp/folder"));
        assert_eq!(Workspace::new("W").container_dir(), Path::new("."));
    }

    #[test]
    fn test_bare_workspace_name_uses_current_dir() {
        let mut workspace = Workspace::new("W");
        workspace.add_project("P.xcodeproj");
        workspace.add_playground("Scratch");

        let doc = workspace.settings_document().unwrap();
        assert_eq!(doc.children()[0].attribute("location"), Some("group:P.xcodeproj"));
        assert_eq!(doc.children()[1].attribute("location"), Some("group:W.xcworkspace/Scratch.playground"));
    }

    #[test]
    fn test_embedded_playground_lives_in_bundle() {
        let mut workspace = Workspace::new("/tmp/Workspace");
        workspace.add_playground("NewPlayground").set_platform(Platform::Macos);

        let playground = workspace.playgrounds().next().unwrap();
        assert_eq!(
            playground.path(),
            Path::new("/tmp/Workspace.xcworkspace/NewPlayground.playground")
        );
        assert_eq!(playground.platform(), Platform::Macos);

        let doc = workspace.settings_document().unwrap();
        assert_eq!(doc.children()[0].attribute("location"), Some("group:Workspace.xcworkspace/NewPlayground.playground"));
    }

    #[test]
    fn test_references_keep_insertion_order() {
        let mut workspace = Workspace::new("/tmp/ws/W");
        workspace.add_project("/tmp/ws/B.xcodeproj");
        workspace.add_playground("Middle");
        workspace.add_project("/tmp/ws/A.xcodeproj");

        let locations: Vec<_> = workspace.settings_document().unwrap()
            .children()
            .iter()
            .map(|el| el.attribute("location").unwrap().to_string())
            .collect();

        assert_eq!(
            locations,
            vec!["group:B.xcodeproj", "group:W.xcworkspace/Middle.playground", "group:A.xcodeproj"]
        );
    }
}
