//! ESLint and Prettier configuration bodies.

use foldit_core::domain::LintOptions;

use crate::renderer::{Rendered, Vars};

const ESLINT: &str = "module.exports = {
  env: {
    browser: true,
    es2021: true,
    node: true,
  },
  extends: [
{{EXTENDS}}  ],
  parser: {{PARSER}},
  parserOptions: {
    ecmaVersion: 'latest',
    sourceType: 'module',
{{PARSER_OPTIONS}}  },
  plugins: [
{{PLUGINS}}  ],
  rules: {
{{RULES}}  },
  settings: {
{{SETTINGS}}  },
};
";

const PRETTIER: &str = r#"{
  "semi": true,
  "trailingComma": "es5",
  "singleQuote": true,
  "printWidth": 80,
  "tabWidth": 2,
  "useTabs": false,
  "bracketSpacing": true,
  "bracketSameLine": false,
  "arrowParens": "avoid",
  "endOfLine": "lf"
}
"#;

const IGNORE_BASE: &str = "node_modules/
dist/
build/
.next/
out/
coverage/
*.min.js
*.bundle.js
";

const LOCK_FILES: &str = "package-lock.json
yarn.lock
pnpm-lock.yaml
";

/// Indent each entry four spaces and terminate it with `,\n`.
fn block(entries: &[&str]) -> String {
    entries.iter().map(|e| format!("    {e},\n")).collect()
}

pub fn eslint_config(options: &LintOptions) -> Rendered {
    let mut extends = Vec::new();
    extends.push(match (options.airbnb, options.typescript) {
        (true, true) => "'airbnb-typescript/base'",
        (true, false) => "'airbnb-base'",
        (false, _) => "'eslint:recommended'",
    });
    if options.typescript {
        extends.push("'@typescript-eslint/recommended'");
    }

    let parser = if options.typescript {
        "'@typescript-eslint/parser'"
    } else {
        "'@babel/eslint-parser'"
    };

    let mut parser_options = Vec::new();
    if options.typescript {
        parser_options.push("project: './tsconfig.json'");
    }

    let mut plugins = Vec::new();
    if options.typescript {
        plugins.push("'@typescript-eslint'");
    }
    if options.airbnb {
        plugins.extend(["'import'", "'jsx-a11y'", "'react'", "'react-hooks'"]);
    }

    let mut rules = Vec::new();
    if options.strict {
        rules.extend([
            "'no-unused-vars': 'error'",
            "'no-console': 'warn'",
            "'prefer-const': 'error'",
            "'no-var': 'error'",
        ]);
    }
    if options.typescript {
        rules.extend([
            "'@typescript-eslint/no-unused-vars': 'error'",
            "'@typescript-eslint/no-explicit-any': 'error'",
        ]);
    }

    let settings = if options.airbnb {
        "    react: {\n      version: 'detect',\n    },\n"
    } else {
        ""
    };

    Vars::new()
        .with("EXTENDS", block(&extends))
        .with("PARSER", parser)
        .with("PARSER_OPTIONS", block(&parser_options))
        .with("PLUGINS", block(&plugins))
        .with("RULES", block(&rules))
        .with("SETTINGS", settings)
        .render(ESLINT)
}

pub fn prettier_config() -> String {
    PRETTIER.to_owned()
}

fn with_extra(mut content: String, extra: &[String]) -> String {
    for pattern in extra {
        content.push_str(pattern);
        content.push('\n');
    }
    content
}

pub fn eslint_ignore(options: &LintOptions) -> String {
    with_extra(IGNORE_BASE.to_owned(), &options.ignore)
}

pub fn prettier_ignore(options: &LintOptions) -> String {
    with_extra(format!("{IGNORE_BASE}{LOCK_FILES}"), &options.ignore)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_config_uses_recommended_and_babel() {
        let out = eslint_config(&LintOptions::default()).unwrap();
        assert!(out.contains("    'eslint:recommended',\n"));
        assert!(out.contains("parser: '@babel/eslint-parser',"));
        assert!(!out.contains("tsconfig"));
        assert!(!out.contains("react-hooks"));
    }

    #[test]
    fn typescript_airbnb_strict_config() {
        let out = eslint_config(&LintOptions {
            strict: true,
            airbnb: true,
            typescript: true,
            ..LintOptions::default()
        }).unwrap();
        assert!(out.contains("'airbnb-typescript/base'"));
        assert!(out.contains("'@typescript-eslint/recommended'"));
        assert!(out.contains("project: './tsconfig.json',"));
        assert!(out.contains("'react-hooks',"));
        assert!(out.contains("'no-console': 'warn',"));
        assert!(out.contains("version: 'detect'"));
    }

    #[test]
    fn ignore_files_append_extra_patterns() {
        let options = LintOptions {
            ignore: vec!["generated/".into(), "*.snap".into()],
            ..LintOptions::default()
        };
        let eslint = eslint_ignore(&options);
        assert!(eslint.starts_with("node_modules/\n"));
        assert!(eslint.ends_with("*.bundle.js\ngenerated/\n*.snap\n"));

        let prettier = prettier_ignore(&options);
        assert!(prettier.contains("pnpm-lock.yaml\ngenerated/\n"));
    }
}
