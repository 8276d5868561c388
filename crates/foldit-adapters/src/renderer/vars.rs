//! `{{VARIABLE}}` substitution.

use std::collections::BTreeMap;

use thiserror::Error;

/// A template body referenced a placeholder no value was supplied for.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unresolved placeholder {0}")]
pub struct UnresolvedPlaceholder(pub String);

/// Result of rendering one template body.
pub type Rendered = Result<String, UnresolvedPlaceholder>;

/// Placeholder values for one template body.
#[derive(Debug, Clone, Default)]
pub struct Vars {
    values: BTreeMap<&'static str, String>,
}

impl Vars {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.values.insert(key, value.into());
        self
    }

    /// Substitute every `{{KEY}}` in one pass over `template`.
    ///
    /// Only the template body is scanned: inserted values are copied
    /// verbatim, so user input that looks like a placeholder is written as
    /// typed. A body placeholder with no value is an error.
    pub fn render(&self, template: &str) -> Rendered {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            let after = &rest[start + 2..];
            let name = after
                .find("}}")
                .map(|end| &after[..end])
                .filter(|name| is_placeholder(name));

            match name {
                Some(name) => {
                    let value = self
                        .values
                        .get(name)
                        .ok_or_else(|| UnresolvedPlaceholder(format!("{{{{{name}}}}}")))?;
                    out.push_str(&rest[..start]);
                    out.push_str(value);
                    rest = &after[name.len() + 2..];
                }
                // Not ours (JSX object literal, `{{{X}}}`): step one brace.
                None => {
                    out.push_str(&rest[..=start]);
                    rest = &rest[start + 1..];
                }
            }
        }
        out.push_str(rest);
        Ok(out)
    }
}

/// Only upper-case identifiers count, so JSX props such as
/// `params={{ slug: 'test' }}` are not mistaken for placeholders.
fn is_placeholder(name: &str) -> bool {
    name.starts_with(|c: char| c.is_ascii_uppercase())
        && name
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_every_occurrence() {
        let vars = Vars::new().with("NAME", "About");
        assert_eq!(vars.render("{{NAME}}/{{NAME}}").unwrap(), "About/About");
    }

    #[test]
    fn unknown_body_placeholder_is_an_error() {
        let err = Vars::new().with("NAME", "x").render("{{NAME}} {{OTHER}}").unwrap_err();
        assert_eq!(err, UnresolvedPlaceholder("{{OTHER}}".into()));
    }

    #[test]
    fn values_are_never_substituted_again() {
        let vars = Vars::new().with("A", "{{B}}").with("B", "b");
        assert_eq!(vars.render("{{A}}-{{B}}").unwrap(), "{{B}}-b");

        let user = Vars::new().with("NAME", "{{SLUG}}");
        assert_eq!(user.render("x {{NAME}} y").unwrap(), "x {{SLUG}} y");
    }

    #[test]
    fn jsx_object_props_are_left_alone() {
        let vars = Vars::new().with("PARAM", "id");
        assert_eq!(
            vars.render("<Page params={{ slug: 'test' }} />").unwrap(),
            "<Page params={{ slug: 'test' }} />"
        );
        assert_eq!(vars.render("style={{display}}").unwrap(), "style={{display}}");
        assert_eq!(vars.render("{params.{{PARAM}}}").unwrap(), "{params.id}");
        assert_eq!(vars.render("{{{PARAM}}}").unwrap(), "{id}");
    }
}
