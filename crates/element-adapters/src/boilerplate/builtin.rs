//! Starter block compiled into the binary.

use std::path::Path;

use tracing::{debug, instrument};

use element_core::{
    application::ports::BoilerplateSource,
    domain::{BlockName, ProjectStructure, RenderContext},
    error::ElementResult,
};

const PACKAGE_JSON: &str = r#"{
  "name": "{{BLOCK_NAME_KEBAB}}",
  "version": "0.1.0",
  "private": true,
  "main": "dist/index.js",
  "scripts": {
    "start": "element-scripts start",
    "build": "element-scripts build",
    "test": "element-scripts test"
  },
  "peerDependencies": {
    "react": ">=16.8"
  }
}
"#;

const INDEX_JS: &str = r#"import React from 'react';

export const defaultConfig = {
    text: '{{BLOCK_NAME}}',
};

export const configSchema = {
    text: {
        label: 'Text content',
        type: 'text',
    },
};

const {{BLOCK_NAME_PASCAL}} = ({ data = defaultConfig }) => (
    <div className="{{BLOCK_NAME_KEBAB}}">{data.text}</div>
);

export default {{BLOCK_NAME_PASCAL}};
"#;

const README_MD: &str = r#"# {{BLOCK_NAME}}

An Element block.

## Development

```sh
npm install
npm start
```

## Publishing

```sh
npm run build
element publish
```

Place a `thumbnail.png` next to this file before publishing. Keep it under 500 kb.
"#;

/// The publish record stays tracked so another checkout can still `update`.
const GITIGNORE: &str = "node_modules/\ndist/\n";

/// Renders the embedded starter block.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinBoilerplate;

impl BuiltinBoilerplate {
    pub fn new() -> Self {
        Self
    }
}

impl BoilerplateSource for BuiltinBoilerplate {
    #[instrument(skip_all, fields(name = %name))]
    fn render(&self, name: &BlockName, root: &Path) -> ElementResult<ProjectStructure> {
        let ctx = RenderContext::new(name);

        let structure = ProjectStructure::new(root)
            .with_file("package.json", ctx.render(PACKAGE_JSON))
            .with_directory("src")
            .with_file("src/index.js", ctx.render(INDEX_JS))
            .with_file("README.md", ctx.render(README_MD))
            .with_file(".gitignore", GITIGNORE);

        debug!(entries = structure.entry_count(), "Rendered builtin boilerplate");
        Ok(structure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(name: &str) -> ProjectStructure {
        let name = BlockName::parse(name).unwrap();
        BuiltinBoilerplate::new()
            .render(&name, Path::new("/work/hero"))
            .unwrap()
    }

    fn content(structure: &ProjectStructure, path: &str) -> String {
        let file = structure
            .files()
            .find(|f| f.path == Path::new(path))
            .unwrap();
        String::from_utf8(file.content.clone()).unwrap()
    }

    #[test]
    fn substitutes_name_variants() {
        let structure = rendered("hero_banner");
        assert!(content(&structure, "package.json").contains(r#""name": "hero-banner""#));
        assert!(content(&structure, "src/index.js").contains("const HeroBanner ="));
        assert!(content(&structure, "README.md").starts_with("# hero_banner"));
    }

    #[test]
    fn leaves_no_placeholders() {
        let structure = rendered("hero");
        for file in structure.files() {
            let text = String::from_utf8(file.content.clone()).unwrap();
            assert!(!text.contains("{{"), "{}", file.path.display());
        }
    }

    #[test]
    fn publish_record_is_not_ignored() {
        let structure = rendered("hero");
        let gitignore = content(&structure, ".gitignore");
        assert!(gitignore.contains("node_modules/"));
        assert!(!gitignore.contains(crate::workspace::RECORD_FILE));
    }

    #[test]
    fn structure_is_valid() {
        let structure = rendered("hero");
        assert!(structure.validate().is_ok());
        assert_eq!(structure.root, Path::new("/work/hero"));
    }
}
