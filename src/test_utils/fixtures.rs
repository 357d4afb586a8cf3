//! Test fixtures for build descriptors.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Group of the stack parent used across tests
pub const STACK_GROUP: &str = "dev.appsody";
/// Artifact of the stack parent used across tests
pub const STACK_ARTIFACT: &str = "spring-boot2-stack";
/// Version of the stack parent used across tests
pub const STACK_VERSION: &str = "0.3.7";
/// Range an application declares for the stack parent
pub const STACK_RANGE: &str = "[0.3, 0.4)";

/// Test fixture for creating descriptor files
#[derive(Clone, Debug)]
pub struct DescriptorFixture {
    pub content: String,
    pub name: String,
}

impl DescriptorFixture {
    /// A parent descriptor with the given coordinates
    pub fn parent(group: &str, artifact: &str, version: &str) -> Self {
        Self {
            name: artifact.to_string(),
            content: format!(
                r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0"
         xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
  <modelVersion>4.0.0</modelVersion>
  <groupId>{group}</groupId>
  <artifactId>{artifact}</artifactId>
  <version>{version}</version>
  <packaging>pom</packaging>
  <dependencies>
    <dependency>
      <groupId>org.springframework.boot</groupId>
      <artifactId>spring-boot-starter</artifactId>
      <version>2.2.0.RELEASE</version>
    </dependency>
  </dependencies>
</project>
"#
            ),
        }
    }

    /// An application descriptor whose parent reference has the given coordinates
    pub fn child(group: &str, artifact: &str, version: &str) -> Self {
        Self {
            name: "application".to_string(),
            content: format!(
                r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
  <modelVersion>4.0.0</modelVersion>
  <parent>
    <groupId>{group}</groupId>
    <artifactId>{artifact}</artifactId>
    <version>{version}</version>
    <relativePath/>
  </parent>
  <groupId>dev.appsody.example</groupId>
  <artifactId>application</artifactId>
  <version>1.0-SNAPSHOT</version>
</project>
"#
            ),
        }
    }

    /// The stack parent, `dev.appsody:spring-boot2-stack:pom:0.3.7`
    pub fn stack_parent() -> Self {
        Self::parent(STACK_GROUP, STACK_ARTIFACT, STACK_VERSION)
    }

    /// An application referencing the stack parent with `[0.3, 0.4)`
    pub fn stack_child() -> Self {
        Self::child(STACK_GROUP, STACK_ARTIFACT, STACK_RANGE)
    }

    /// An application without a parent reference
    pub fn without_parent() -> Self {
        Self {
            name: "standalone".to_string(),
            content: r#"<project>
  <groupId>dev.appsody.example</groupId>
  <artifactId>standalone</artifactId>
  <version>1.0</version>
</project>
"#
            .to_string(),
        }
    }

    /// A parent reference that lacks `<artifactId>`
    pub fn incomplete_parent_reference() -> Self {
        Self {
            name: "incomplete".to_string(),
            content: r#"<project>
  <parent>
    <groupId>dev.appsody</groupId>
    <version>0.3.7</version>
  </parent>
</project>
"#
            .to_string(),
        }
    }

    /// Not well-formed XML
    pub fn malformed() -> Self {
        Self {
            name: "malformed".to_string(),
            content: "<project><groupId>dev.appsody</project>".to_string(),
        }
    }

    /// Write to `<dir>/<name>/pom.xml` and return the path
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let module_dir = dir.join(&self.name);
        fs::create_dir_all(&module_dir)
            .with_context(|| format!("Failed to create {}", module_dir.display()))?;
        let descriptor_path = module_dir.join("pom.xml");
        fs::write(&descriptor_path, &self.content)?;
        Ok(descriptor_path)
    }
}
