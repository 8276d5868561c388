//! Path resolution for routed artifacts (pages, API routes, services).
//!
//! A user-supplied name like `admin/users` plus an optional dynamic segment
//! becomes a [`RoutePath`]: an ordered list of [`RouteSegment`]s under the
//! artifact kind's root directory, with the entity name used by templates
//! taken from the last static segment.

use std::fmt;

use crate::domain::{ArtifactKind, DomainError, RelativePath};

/// One component of a route.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RouteSegment {
    /// Literal directory name.
    Static(String),
    /// Single dynamic parameter, rendered `[param]`.
    Dynamic(String),
    /// Catch-all parameter, rendered `[...param]`.
    CatchAll(String),
}

impl RouteSegment {
    /// Parameter name for dynamic segments.
    pub fn param(&self) -> Option<&str> {
        match self {
            Self::Static(_) => None,
            Self::Dynamic(p) | Self::CatchAll(p) => Some(p),
        }
    }

    pub fn is_catch_all(&self) -> bool {
        matches!(self, Self::CatchAll(_))
    }
}

impl fmt::Display for RouteSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(name) => f.write_str(name),
            Self::Dynamic(param) => write!(f, "[{param}]"),
            Self::CatchAll(param) => write!(f, "[...{param}]"),
        }
    }
}

/// The `--dynamic <param> [--catch-all]` option pair, validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicSegment {
    param: String,
    catch_all: bool,
}

impl DynamicSegment {
    pub fn new(param: impl Into<String>, catch_all: bool) -> Result<Self, DomainError> {
        let param = param.into();
        let param = param.trim();
        if param.is_empty() {
            return Err(DomainError::EmptyDynamicParam);
        }
        if param.contains('/') || param.contains('[') || param.contains(']') {
            return Err(DomainError::InvalidRouteSegment {
                segment: param.to_owned(),
                reason: "parameter names cannot contain '/', '[' or ']'".into(),
            });
        }
        Ok(Self {
            param: param.to_owned(),
            catch_all,
        })
    }

    /// Build from the raw flag pair; `--catch-all` without `--dynamic` is an error.
    pub fn from_flags(dynamic: Option<&str>, catch_all: bool) -> Result<Option<Self>, DomainError> {
        match dynamic {
            Some(param) => Self::new(param, catch_all).map(Some),
            None if catch_all => Err(DomainError::CatchAllWithoutDynamic),
            None => Ok(None),
        }
    }

    pub fn param(&self) -> &str {
        &self.param
    }

    pub fn is_catch_all(&self) -> bool {
        self.catch_all
    }

    pub fn segment(&self) -> RouteSegment {
        if self.catch_all {
            RouteSegment::CatchAll(self.param.clone())
        } else {
            RouteSegment::Dynamic(self.param.clone())
        }
    }
}

/// A resolved route under a kind's root directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePath {
    kind: ArtifactKind,
    segments: Vec<RouteSegment>,
    entity: String,
}

impl RoutePath {
    /// Resolve `name` (and an optional dynamic segment) for `kind`.
    ///
    /// Every `/`-separated piece becomes a static segment; empty pieces are
    /// dropped. The entity name is the last static segment, so `blog/` names
    /// `blog` and only a name with no segments yields an empty entity.
    pub fn resolve(
        kind: ArtifactKind,
        name: &str,
        dynamic: Option<&DynamicSegment>,
    ) -> Result<Self, DomainError> {
        let mut segments = Vec::new();
        for piece in name.split('/') {
            match piece {
                "" | "." => continue,
                ".." => {
                    return Err(DomainError::InvalidRouteSegment {
                        segment: piece.to_owned(),
                        reason: "'..' would leave the project directory".into(),
                    });
                }
                _ => segments.push(RouteSegment::Static(piece.to_owned())),
            }
        }

        let entity = match segments.last() {
            Some(RouteSegment::Static(last)) => last.clone(),
            _ => String::new(),
        };

        if let Some(dynamic) = dynamic {
            segments.push(dynamic.segment());
        }

        Ok(Self {
            kind,
            segments,
            entity,
        })
    }

    pub fn kind(&self) -> ArtifactKind {
        self.kind
    }

    pub fn segments(&self) -> &[RouteSegment] {
        &self.segments
    }

    /// Name used for identifiers and titles in rendered content.
    pub fn entity_name(&self) -> &str {
        &self.entity
    }

    /// The trailing dynamic segment, if any.
    pub fn dynamic(&self) -> Option<&RouteSegment> {
        self.segments.last().filter(|s| s.param().is_some())
    }

    /// `root/segment/...`, the directory a page or API route lives in.
    pub fn directory(&self) -> Result<RelativePath, DomainError> {
        self.segments
            .iter()
            .try_fold(RelativePath::try_new(self.kind.root_dir())?, |dir, seg| {
                dir.join(seg.to_string())
            })
    }

    /// `root/` plus every static segment except the last one. Services are
    /// files named after the entity, so the final piece names the file.
    pub fn namespace_dir(&self) -> Result<RelativePath, DomainError> {
        let statics: Vec<&RouteSegment> = self
            .segments
            .iter()
            .filter(|s| matches!(s, RouteSegment::Static(_)))
            .collect();
        let keep = statics.len().saturating_sub(1);
        statics
            .into_iter()
            .take(keep)
            .try_fold(RelativePath::try_new(self.kind.root_dir())?, |dir, seg| {
                dir.join(seg.to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn page(name: &str, dynamic: Option<DynamicSegment>) -> RoutePath {
        RoutePath::resolve(ArtifactKind::Page, name, dynamic.as_ref()).unwrap()
    }

    #[test]
    fn plain_name_resolves_under_app() {
        let route = page("about", None);
        assert_eq!(route.entity_name(), "about");
        assert_eq!(route.directory().unwrap().as_path(), Path::new("src/app/about"));
    }

    #[test]
    fn nested_name_uses_last_piece_as_entity() {
        let route = page("admin/users/profile", None);
        assert_eq!(route.entity_name(), "profile");
        assert_eq!(
            route.directory().unwrap().as_path(),
            Path::new("src/app/admin/users/profile")
        );
    }

    #[test]
    fn dynamic_segment_is_bracketed() {
        let dynamic = DynamicSegment::new("slug", false).unwrap();
        let route = page("blog", Some(dynamic));
        assert_eq!(route.directory().unwrap().as_path(), Path::new("src/app/blog/[slug]"));
        assert_eq!(route.entity_name(), "blog");
        assert_eq!(route.dynamic().and_then(RouteSegment::param), Some("slug"));
    }

    #[test]
    fn catch_all_segment_uses_spread() {
        let dynamic = DynamicSegment::new("slug", true).unwrap();
        let route = page("docs", Some(dynamic));
        assert_eq!(
            route.directory().unwrap().as_path(),
            Path::new("src/app/docs/[...slug]")
        );
        assert!(route.dynamic().is_some_and(RouteSegment::is_catch_all));
    }

    #[test]
    fn api_routes_live_under_api() {
        let route = RoutePath::resolve(ArtifactKind::ApiRoute, "posts", None).unwrap();
        assert_eq!(route.directory().unwrap().as_path(), Path::new("src/app/api/posts"));
    }

    #[test]
    fn empty_name_yields_empty_entity() {
        let route = page("", None);
        assert_eq!(route.entity_name(), "");
        assert_eq!(route.directory().unwrap().as_path(), Path::new("src/app"));
    }

    #[test]
    fn trailing_and_doubled_slashes_are_ignored() {
        let route = page("blog/", None);
        assert_eq!(route.entity_name(), "blog");
        assert_eq!(route.directory().unwrap().as_path(), Path::new("src/app/blog"));

        let route = page("admin//users", None);
        assert_eq!(route.entity_name(), "users");
        assert_eq!(
            route.directory().unwrap().as_path(),
            Path::new("src/app/admin/users")
        );

        assert_eq!(page("//", None).entity_name(), "");
    }

    #[test]
    fn service_with_trailing_slash_is_named_after_last_segment() {
        let route = RoutePath::resolve(ArtifactKind::Service, "admin/", None).unwrap();
        assert_eq!(route.entity_name(), "admin");
        assert_eq!(route.namespace_dir().unwrap().as_path(), Path::new("src/services"));
    }

    #[test]
    fn parent_components_are_rejected() {
        assert!(RoutePath::resolve(ArtifactKind::Page, "../etc", None).is_err());
    }

    #[test]
    fn empty_dynamic_param_is_rejected() {
        assert_eq!(
            DynamicSegment::new("  ", false),
            Err(DomainError::EmptyDynamicParam)
        );
    }

    #[test]
    fn catch_all_requires_dynamic() {
        assert_eq!(
            DynamicSegment::from_flags(None, true),
            Err(DomainError::CatchAllWithoutDynamic)
        );
        assert_eq!(DynamicSegment::from_flags(None, false), Ok(None));
    }

    #[test]
    fn service_namespace_drops_final_piece() {
        let route = RoutePath::resolve(ArtifactKind::Service, "admin/user", None).unwrap();
        assert_eq!(route.entity_name(), "user");
        assert_eq!(
            route.namespace_dir().unwrap().as_path(),
            Path::new("src/services/admin")
        );
        let flat = RoutePath::resolve(ArtifactKind::Service, "user", None).unwrap();
        assert_eq!(flat.namespace_dir().unwrap().as_path(), Path::new("src/services"));
    }
}
