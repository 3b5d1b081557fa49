//! Tooling configuration files written into every new project

use super::pretty_json;
use crate::project::ProjectSpec;
use serde_json::json;

pub fn gitignore(_spec: &ProjectSpec) -> String {
    "node_modules/\nbuild/\ndist/\ncoverage/\n.env\n*.log\n.DS_Store\n".to_string()
}

pub fn gitattributes(_spec: &ProjectSpec) -> String {
    "* text=auto eol=lf\n".to_string()
}

pub fn eslint_config(_spec: &ProjectSpec) -> String {
    r#"import eslint from '@eslint/js';
import prettier from 'eslint-config-prettier';
import tseslint from 'typescript-eslint';

export default tseslint.config(
  { ignores: ['build/', 'dist/', 'coverage/'] },
  eslint.configs.recommended,
  ...tseslint.configs.recommended,
  {
    files: ['**/*.ts'],
    rules: {
      '@typescript-eslint/explicit-function-return-type': 'warn',
      '@typescript-eslint/no-unused-vars': ['error', { argsIgnorePattern: '^_' }],
    },
  },
  {
    files: ['**/*.js', '**/*.mjs'],
    rules: {
      'no-console': 'off',
    },
  },
  {
    files: ['test/**/*.ts'],
    rules: {
      '@typescript-eslint/no-explicit-any': 'off',
    },
  },
  prettier,
);
"#
    .to_string()
}

pub fn prettier_config(_spec: &ProjectSpec) -> String {
    pretty_json(&json!({
        "semi": true,
        "singleQuote": true,
        "trailingComma": "all",
        "printWidth": 100,
        "tabWidth": 2,
        "endOfLine": "lf"
    }))
}

pub fn release_config(_spec: &ProjectSpec) -> String {
    pretty_json(&json!({
        "branches": ["main"],
        "plugins": [
            "@semantic-release/commit-analyzer",
            "@semantic-release/release-notes-generator",
            ["@semantic-release/changelog", { "changelogFile": "CHANGELOG.md" }],
            "@semantic-release/npm",
            ["@semantic-release/git", {
                "assets": ["package.json", "CHANGELOG.md"],
                "message": "chore(release): ${nextRelease.version} [skip ci]\n\n${nextRelease.notes}"
            }],
            "@semantic-release/github"
        ]
    }))
}

pub fn jest_config(_spec: &ProjectSpec) -> String {
    pretty_json(&json!({
        "preset": "ts-jest",
        "testEnvironment": "node",
        "roots": ["<rootDir>/test"],
        "collectCoverageFrom": ["src/**/*.ts"]
    }))
}

pub fn npmignore(_spec: &ProjectSpec) -> String {
    "src/\ntest/\ncoverage/\n.github/\n.env\ntsconfig.json\njest.config.json\neslint.config.mjs\n"
        .to_string()
}

pub fn commitlint_config(_spec: &ProjectSpec) -> String {
    pretty_json(&json!({
        "extends": ["@commitlint/config-conventional"]
    }))
}

pub fn tsconfig(_spec: &ProjectSpec) -> String {
    pretty_json(&json!({
        "compilerOptions": {
            "target": "ES2022",
            "module": "commonjs",
            "declaration": true,
            "strict": true,
            "rootDir": "src",
            "outDir": "build",
            "esModuleInterop": true,
            "skipLibCheck": true,
            "forceConsistentCasingInFileNames": true
        },
        "include": ["src"],
        "exclude": ["node_modules", "build", "dist", "test"]
    }))
}

pub fn readme(spec: &ProjectSpec) -> String {
    format!(
        "# {name}\n\n## Install\n\n```sh\nnpm install {name}\n```\n\n## Usage\n\n```ts\nimport {{}} from '{name}';\n```\n",
        name = spec.name
    )
}

pub fn configuration_notes(spec: &ProjectSpec) -> String {
    format!(
        "# Configuration\n\nNotes on the tooling configured for {}.\n\n\
         - Releases run from `main` via semantic-release.\n\
         - CI needs the `NPM_TOKEN` repository secret.\n",
        spec.name
    )
}

pub fn license(spec: &ProjectSpec) -> String {
    format!(
        "MIT License\n\n\
         Copyright (c) {}\n\n\
         Permission is hereby granted, free of charge, to any person obtaining a copy\n\
         of this software and associated documentation files (the \"Software\"), to deal\n\
         in the Software without restriction, including without limitation the rights\n\
         to use, copy, modify, merge, publish, distribute, sublicense, and/or sell\n\
         copies of the Software, and to permit persons to whom the Software is\n\
         furnished to do so, subject to the following conditions:\n\n\
         The above copyright notice and this permission notice shall be included in all\n\
         copies or substantial portions of the Software.\n\n\
         THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR\n\
         IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,\n\
         FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE\n\
         AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER\n\
         LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,\n\
         OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE\n\
         SOFTWARE.\n",
        spec.author
    )
}

pub fn empty(_spec: &ProjectSpec) -> String {
    String::new()
}

pub fn release_workflow(_spec: &ProjectSpec) -> String {
    r#"name: Release

on:
  push:
    branches:
      - main

jobs:
  release:
    name: Release
    runs-on: ubuntu-latest
    steps:
      - name: Checkout
        uses: actions/checkout@v4
        with:
          fetch-depth: 0
      - name: Setup Node.js
        uses: actions/setup-node@v4
        with:
          node-version: lts/*
      - name: Print versions
        run: |
          node --version
          npm --version
      - name: Install dependencies
        run: npm ci
      - name: Check formatting
        run: npm run format:check
      - name: Lint
        run: npm run lint
      - name: Test
        run: npm test
      - name: Release
        env:
          GITHUB_TOKEN: ${{ secrets.GITHUB_TOKEN }}
          NPM_TOKEN: ${{ secrets.NPM_TOKEN }}
        run: npx semantic-release
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn spec() -> ProjectSpec {
        ProjectSpec {
            name: "foo-lib".to_string(),
            version: "0.0.1".to_string(),
            author: "octo".to_string(),
            target_dir: PathBuf::from("foo-lib"),
        }
    }

    #[test]
    fn test_readme_interpolates_name() {
        let readme = readme(&spec());
        assert!(readme.starts_with("# foo-lib\n"));
        assert!(readme.contains("npm install foo-lib"));
        assert!(readme.contains("import {} from 'foo-lib';"));
    }

    #[test]
    fn test_license_names_author() {
        assert!(license(&spec()).contains("Copyright (c) octo\n"));
    }

    #[test]
    fn test_tsconfig_is_strict() {
        let value: serde_json::Value = serde_json::from_str(&tsconfig(&spec())).unwrap();
        assert_eq!(value["compilerOptions"]["strict"], true);
        assert_eq!(value["compilerOptions"]["rootDir"], "src");
        assert_eq!(value["compilerOptions"]["outDir"], "build");
    }

    #[test]
    fn test_release_config_keeps_template_placeholders() {
        let config = release_config(&spec());
        assert!(config.contains("${nextRelease.version}"));
        let value: serde_json::Value = serde_json::from_str(&config).unwrap();
        assert_eq!(value["branches"][0], "main");
        assert_eq!(value["plugins"].as_array().unwrap().len(), 6);
    }

    #[test]
    fn test_workflow_runs_on_main_with_secrets() {
        let workflow = release_workflow(&spec());
        assert!(workflow.contains("      - main\n"));
        assert!(workflow.contains("secrets.GITHUB_TOKEN"));
        assert!(workflow.contains("secrets.NPM_TOKEN"));
        let format_at = workflow.find("format:check").unwrap();
        let release_at = workflow.find("npx semantic-release").unwrap();
        assert!(format_at < release_at);
    }
}
