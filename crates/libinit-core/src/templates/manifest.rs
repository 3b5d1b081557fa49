//! Package manifest generation

use crate::project::ProjectSpec;
use serde_json::{json, Value};

/// Entry point recorded in the manifest
pub const MAIN_ENTRY: &str = "build/index.js";

/// Build the `package.json` document
///
/// Keys are emitted in insertion order. Each script and dependency appears
/// once; where older templates listed a key twice the later value is kept.
pub fn package_json(spec: &ProjectSpec) -> Value {
    json!({
        "name": spec.name,
        "version": spec.version,
        "description": "",
        "main": MAIN_ENTRY,
        "types": "build/index.d.ts",
        "files": ["build"],
        "scripts": scripts(),
        "author": spec.author,
        "license": "MIT",
        "dependencies": {},
        "devDependencies": dev_dependencies(),
        "lint-staged": {
            "*.{ts,js,mjs}": ["eslint --fix", "prettier --write"],
            "*.{json,md,yml}": ["prettier --write"]
        }
    })
}

fn scripts() -> Value {
    json!({
        "build": "tsc",
        "clean": "rm -rf build dist",
        "format": "prettier --write .",
        "format:check": "prettier --check .",
        "lint": "eslint .",
        "lint:fix": "eslint . --fix",
        "test": "jest",
        "test:watch": "jest --watch",
        "prepare": "husky",
        "prepublishOnly": "npm run build",
        "semantic-release": "semantic-release"
    })
}

fn dev_dependencies() -> Value {
    json!({
        "@commitlint/cli": "^19.5.0",
        "@commitlint/config-conventional": "^19.5.0",
        "@eslint/js": "^9.13.0",
        "@semantic-release/changelog": "^6.0.3",
        "@semantic-release/git": "^10.0.1",
        "@types/jest": "^29.5.14",
        "@types/node": "^22.7.9",
        "eslint": "^9.13.0",
        "eslint-config-prettier": "^9.1.0",
        "husky": "^9.1.6",
        "jest": "^29.7.0",
        "lint-staged": "^15.2.10",
        "prettier": "^3.3.3",
        "semantic-release": "^24.1.3",
        "ts-jest": "^29.2.5",
        "typescript": "^5.6.3",
        "typescript-eslint": "^8.11.0"
    })
}

/// Render the manifest as it is written to disk
pub fn render(spec: &ProjectSpec) -> String {
    super::pretty_json(&package_json(spec))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn spec() -> ProjectSpec {
        ProjectSpec {
            name: "foo-lib".to_string(),
            version: "1.2.3".to_string(),
            author: "octo".to_string(),
            target_dir: PathBuf::from("/tmp/foo-lib"),
        }
    }

    #[test]
    fn test_identity_fields() {
        let manifest = package_json(&spec());
        assert_eq!(manifest["name"], "foo-lib");
        assert_eq!(manifest["version"], "1.2.3");
        assert_eq!(manifest["author"], "octo");
        assert_eq!(manifest["main"], MAIN_ENTRY);
        assert_eq!(manifest["license"], "MIT");
    }

    #[test]
    fn test_lifecycle_scripts_present() {
        let manifest = package_json(&spec());
        let scripts = manifest["scripts"].as_object().unwrap();
        for key in ["build", "lint", "format:check", "test", "semantic-release"] {
            assert!(scripts.contains_key(key), "missing script {}", key);
        }
    }

    #[test]
    fn test_key_order_is_stable() {
        let rendered = render(&spec());
        let name_at = rendered.find("\"name\"").unwrap();
        let version_at = rendered.find("\"version\"").unwrap();
        let scripts_at = rendered.find("\"scripts\"").unwrap();
        assert!(name_at < version_at && version_at < scripts_at);
        assert!(rendered.ends_with("}\n"));
    }
}
